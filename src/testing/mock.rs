extern crate std;

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

/// One bus-level event, in the order the driver issued it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum BusOp {
    /// Register write: pointer byte followed by `data`.
    Write { register: u8, data: Vec<u8> },
    /// Register read of `len` bytes starting at `register`.
    Read { register: u8, len: usize },
    /// Call into the delay provider.
    Delay { ns: u32 },
}

#[derive(Debug)]
struct DeviceState {
    regs: [u8; 256],
    log: Vec<BusOp>,
    fail_next: Option<ErrorKind>,
}

/// A 256-byte register file answering at one I2C address.
///
/// Clones share state, so a test can keep a handle after moving one into
/// the driver.
#[derive(Clone, Debug)]
pub(crate) struct MockDevice {
    address: u8,
    state: Rc<RefCell<DeviceState>>,
}

impl MockDevice {
    pub(crate) fn new(address: u8) -> Self {
        Self {
            address,
            state: Rc::new(RefCell::new(DeviceState {
                regs: [0u8; 256],
                log: Vec::new(),
                fail_next: None,
            })),
        }
    }

    /// Delay provider that records into this device's log.
    pub(crate) fn delay(&self) -> MockDelay {
        MockDelay {
            state: Rc::clone(&self.state),
        }
    }

    pub(crate) fn with_reg(self, reg: u8, value: u8) -> Self {
        self.set_reg(reg, value);
        self
    }

    pub(crate) fn set_reg(&self, reg: u8, value: u8) {
        self.state.borrow_mut().regs[reg as usize] = value;
    }

    pub(crate) fn reg(&self, reg: u8) -> u8 {
        self.state.borrow().regs[reg as usize]
    }

    pub(crate) fn regs(&self, reg: u8, len: usize) -> Vec<u8> {
        let state = self.state.borrow();
        (0..len)
            .map(|offset| state.regs[reg.wrapping_add(offset as u8) as usize])
            .collect()
    }

    /// Make the next transaction fail with `kind` without touching registers.
    pub(crate) fn fail_next(&self, kind: ErrorKind) {
        self.state.borrow_mut().fail_next = Some(kind);
    }

    pub(crate) fn log(&self) -> Vec<BusOp> {
        self.state.borrow().log.clone()
    }

    pub(crate) fn clear_log(&self) {
        self.state.borrow_mut().log.clear();
    }
}

impl ErrorType for MockDevice {
    type Error = ErrorKind;
}

impl I2c for MockDevice {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        if let Some(kind) = state.fail_next.take() {
            return Err(kind);
        }
        if address != self.address {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }

        let mut pointer = 0u8;
        let mut entry = None;

        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => {
                    let Some((&register, data)) = bytes.split_first() else {
                        continue;
                    };
                    pointer = register;
                    for (offset, value) in data.iter().enumerate() {
                        state.regs[register.wrapping_add(offset as u8) as usize] = *value;
                    }
                    entry = Some(BusOp::Write {
                        register,
                        data: data.to_vec(),
                    });
                }
                Operation::Read(buffer) => {
                    for (offset, slot) in buffer.iter_mut().enumerate() {
                        *slot = state.regs[pointer.wrapping_add(offset as u8) as usize];
                    }
                    entry = Some(BusOp::Read {
                        register: pointer,
                        len: buffer.len(),
                    });
                }
            }
        }

        if let Some(entry) = entry {
            state.log.push(entry);
        }

        Ok(())
    }
}

#[derive(Debug)]
pub(crate) struct MockDelay {
    state: Rc<RefCell<DeviceState>>,
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.state.borrow_mut().log.push(BusOp::Delay { ns });
    }
}
