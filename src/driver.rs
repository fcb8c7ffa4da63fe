//! Low-level register driver.
//!
//! Implements the single-byte-pointer register protocol of the Encoder Mini:
//! a write is `[register, data...]`, a read is a write of `[register]`
//! followed by a repeated-start read. Multi-byte values are big-endian.
//!
//! This module is crate-private apart from the byte-order helpers;
//! consumers interact with [`I2cEncoderMini`](crate::I2cEncoderMini).

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use crate::registers::EEPROM_WRITE_DELAY_US;

// ---------------------------------------------------------------------------
// Byte order
// ---------------------------------------------------------------------------

/// Encode a signed 32-bit value in register order (MSB first).
pub const fn encode_i32(value: i32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Decode a signed 16-bit value read MSB first.
pub const fn decode_i16(bytes: [u8; 2]) -> i16 {
    i16::from_be_bytes(bytes)
}

/// Decode a signed 32-bit value read MSB first.
pub const fn decode_i32(bytes: [u8; 4]) -> i32 {
    i32::from_be_bytes(bytes)
}

// ---------------------------------------------------------------------------
// Register driver
// ---------------------------------------------------------------------------

/// Owns the bus and delay provider and performs one transaction per call.
///
/// Errors are the transport's own; nothing here retries or translates them.
pub(crate) struct RegisterBus<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
}

impl<I2C, D> RegisterBus<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    pub fn new(i2c: I2C, delay: D, address: u8) -> Self {
        Self { i2c, delay, address }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    /// Read `N` consecutive bytes starting at `register`.
    async fn read_array<const N: usize>(&mut self, register: u8) -> Result<[u8; N], I2C::Error> {
        let mut buf = [0u8; N];
        self.i2c.write_read(self.address, &[register], &mut buf).await?;
        Ok(buf)
    }

    pub async fn read_u8(&mut self, register: u8) -> Result<u8, I2C::Error> {
        let [value] = self.read_array::<1>(register).await?;
        Ok(value)
    }

    pub async fn read_i16(&mut self, register: u8) -> Result<i16, I2C::Error> {
        Ok(decode_i16(self.read_array::<2>(register).await?))
    }

    pub async fn read_i32(&mut self, register: u8) -> Result<i32, I2C::Error> {
        Ok(decode_i32(self.read_array::<4>(register).await?))
    }

    pub async fn write_u8(&mut self, register: u8, value: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[register, value]).await
    }

    /// Write a 32-bit value across `register..register + 4`.
    pub async fn write_i32(&mut self, register: u8, value: i32) -> Result<(), I2C::Error> {
        // [register, b3, b2, b1, b0]
        let mut buf = [0u8; 5];
        buf[0] = register;
        buf[1..5].copy_from_slice(&encode_i32(value));

        self.i2c.write(self.address, &buf).await
    }

    /// Write one EEPROM byte and hold the bus for the write cycle.
    ///
    /// The next transaction must not start before the device has committed
    /// the byte, otherwise it is silently corrupted.
    pub async fn write_eeprom(&mut self, register: u8, value: u8) -> Result<(), I2C::Error> {
        self.write_u8(register, value).await?;
        self.delay.delay_us(EEPROM_WRITE_DELAY_US).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{BusOp, MockDevice};
    use futures::executor::block_on;
    use std::vec;

    const ADDR: u8 = 0x20;

    fn bus(device: &MockDevice) -> RegisterBus<MockDevice, crate::testing::MockDelay> {
        RegisterBus::new(device.clone(), device.delay(), ADDR)
    }

    // ── Byte order ───────────────────────────────────────────────────

    #[test]
    fn encode_is_msb_first() {
        assert_eq!(encode_i32(0x0102_0304), [0x01, 0x02, 0x03, 0x04]);
        assert_eq!(encode_i32(-1), [0xFF; 4]);
        assert_eq!(encode_i32(i32::MIN), [0x80, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn decode_is_msb_first_and_signed() {
        assert_eq!(decode_i32([0x01, 0x02, 0x03, 0x04]), 0x0102_0304);
        assert_eq!(decode_i32([0xFF, 0xFF, 0xFF, 0xFE]), -2);
        assert_eq!(decode_i16([0x80, 0x00]), i16::MIN);
        assert_eq!(decode_i16([0x00, 0x7F]), 127);
    }

    // ── Bus framing ──────────────────────────────────────────────────

    #[test]
    fn write_i32_sends_pointer_then_big_endian_bytes() {
        let device = MockDevice::new(ADDR);
        let mut bus = bus(&device);

        block_on(bus.write_i32(0x03, 0x0102_0304)).unwrap();

        assert_eq!(
            device.log(),
            vec![BusOp::Write {
                register: 0x03,
                data: vec![0x01, 0x02, 0x03, 0x04],
            }]
        );
        assert_eq!(device.regs(0x03, 4), vec![0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn reads_use_register_width() {
        let device = MockDevice::new(ADDR)
            .with_reg(0x10, 0xFF)
            .with_reg(0x11, 0x9C);
        let mut bus = bus(&device);

        assert_eq!(block_on(bus.read_u8(0x10)).unwrap(), 0xFF);
        assert_eq!(block_on(bus.read_i16(0x10)).unwrap(), -100);

        assert_eq!(
            device.log(),
            vec![
                BusOp::Read { register: 0x10, len: 1 },
                BusOp::Read { register: 0x10, len: 2 },
            ]
        );
    }

    #[test]
    fn i32_round_trips_through_register_file() {
        let device = MockDevice::new(ADDR);
        let mut bus = bus(&device);

        for value in [0, 1, -1, 12_345, -98_765, i32::MAX, i32::MIN] {
            block_on(bus.write_i32(0x07, value)).unwrap();
            assert_eq!(block_on(bus.read_i32(0x07)).unwrap(), value);
        }
    }

    // ── EEPROM timing ────────────────────────────────────────────────

    #[test]
    fn eeprom_write_is_followed_by_settle_delay() {
        let device = MockDevice::new(ADDR);
        let mut bus = bus(&device);

        block_on(bus.write_eeprom(0x81, 0xAB)).unwrap();
        block_on(bus.read_u8(0x81)).unwrap();

        assert_eq!(
            device.log(),
            vec![
                BusOp::Write { register: 0x81, data: vec![0xAB] },
                BusOp::Delay { ns: 1_000_000 },
                BusOp::Read { register: 0x81, len: 1 },
            ]
        );
    }

    #[test]
    fn failed_eeprom_write_skips_delay() {
        use embedded_hal_async::i2c::{ErrorKind, NoAcknowledgeSource};

        let device = MockDevice::new(ADDR);
        let mut bus = bus(&device);
        device.fail_next(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data));

        let err = block_on(bus.write_eeprom(0x81, 0x01)).unwrap_err();

        assert_eq!(err, ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data));
        assert!(device.log().is_empty());
    }

    #[test]
    fn wrong_address_surfaces_transport_error() {
        use embedded_hal_async::i2c::{ErrorKind, NoAcknowledgeSource};

        let device = MockDevice::new(ADDR);
        let mut bus = RegisterBus::new(device.clone(), device.delay(), 0x21);

        assert_eq!(
            block_on(bus.read_u8(0x00)),
            Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))
        );
    }
}
