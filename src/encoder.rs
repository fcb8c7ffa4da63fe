//! High-level interface for the I2C Encoder Mini.
//!
//! [`I2cEncoderMini`] wraps the low-level register driver with named
//! accessors for every register, configuration tracking, and status polling
//! with event dispatch.

use embassy_time::Delay;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use crate::config::Config;
use crate::driver::RegisterBus;
use crate::events::{EventHandlers, Status};
use crate::registers::{
    GCONF_RESET, REG_CMAXB4, REG_CMINB4, REG_CVALB1, REG_CVALB2, REG_CVALB4, REG_DPPERIOD,
    REG_ESTATUS, REG_GCONF, REG_IDCODE, REG_INTCONF, REG_ISTEPB4, REG_VERSION,
};

/// Driver for one I2C Encoder Mini board.
///
/// Owns the bus for exclusive access. Every method performs exactly one
/// bus transaction (EEPROM writes add a settle delay) and returns the
/// transport's error unchanged on failure.
///
/// # Example
///
/// ```ignore
/// use i2c_encoder_mini::{Config, Event, EventHandlers, I2cEncoderMini, DEFAULT_ADDRESS};
///
/// // `i2c` is any `embedded-hal-async` I2C implementation
/// let mut encoder = I2cEncoderMini::new(i2c, DEFAULT_ADDRESS);
/// encoder.begin(Config::new().with_wrap(true)).await?;
///
/// let mut on_turn = || { /* ... */ };
/// let mut handlers = EventHandlers::new().on(Event::Changed, &mut on_turn);
/// encoder.autoconfigure_interrupt(&handlers).await?;
///
/// loop {
///     // wait for INT to go low, then:
///     encoder.update_status(&mut handlers).await?;
/// }
/// ```
pub struct I2cEncoderMini<I2C, D = Delay> {
    bus: RegisterBus<I2C, D>,
    status: Status,
    config: Config,
}

impl<I2C> I2cEncoderMini<I2C, Delay>
where
    I2C: I2c,
{
    /// Create a driver that times EEPROM writes with [`embassy_time`].
    ///
    /// No bus traffic is generated.
    ///
    /// # Arguments
    /// * `i2c` - I2C peripheral (takes ownership for exclusive access)
    /// * `address` - 7-bit I2C device address (factory default 0x20)
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self::with_delay(i2c, address, Delay)
    }
}

impl<I2C, D> I2cEncoderMini<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a driver with a caller-supplied delay provider.
    pub fn with_delay(i2c: I2C, address: u8, delay: D) -> Self {
        Self {
            bus: RegisterBus::new(i2c, delay, address),
            status: Status::default(),
            config: Config::new(),
        }
    }

    /// Device address this driver talks to.
    pub fn address(&self) -> u8 {
        self.bus.address()
    }

    /// Give back the bus and delay provider.
    pub fn release(self) -> (I2C, D) {
        self.bus.release()
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    /// Write `config` to GCONF.
    ///
    /// The value is retained and returned by [`config`](Self::config); on a
    /// bus error the previously retained value is kept.
    pub async fn begin(&mut self, config: Config) -> Result<(), I2C::Error> {
        self.bus.write_u8(REG_GCONF, config.bits()).await?;
        self.config = config;

        #[cfg(feature = "defmt")]
        defmt::debug!("GCONF <- {=u8:#x}", config.bits());

        Ok(())
    }

    /// Reset the board to its power-on defaults.
    pub async fn reset(&mut self) -> Result<(), I2C::Error> {
        self.bus.write_u8(REG_GCONF, GCONF_RESET).await?;
        self.config = Config::new();
        Ok(())
    }

    /// Last configuration written by [`begin`](Self::begin). No bus traffic.
    pub fn config(&self) -> Config {
        self.config
    }

    // -----------------------------------------------------------------------
    // Status and events
    // -----------------------------------------------------------------------

    /// Read ESTATUS once and dispatch the events it reports.
    ///
    /// Returns `false` without calling anything if no status bit is set.
    /// Otherwise every registered handler whose event is present runs once,
    /// in [`Event::ALL`](crate::Event::ALL) order, and `true` is returned.
    ///
    /// The status byte is retained for [`status`](Self::status) until the
    /// next successful poll.
    ///
    /// # Errors
    /// The I2C error of the status read. No handler runs in that case.
    pub async fn update_status(
        &mut self,
        handlers: &mut EventHandlers<'_>,
    ) -> Result<bool, I2C::Error> {
        let status = Status::from_bits(self.bus.read_u8(REG_ESTATUS).await?);
        self.status = status;

        if status.is_empty() {
            return Ok(false);
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("ESTATUS = {=u8:#x}", status.bits());

        handlers.dispatch(status);
        Ok(true)
    }

    /// Status byte from the last successful [`update_status`](Self::update_status).
    pub fn status(&self) -> Status {
        self.status
    }

    /// Raw status byte from the last successful poll.
    pub fn status_raw(&self) -> u8 {
        self.status.bits()
    }

    /// `true` if any bit of `mask` was set in the last poll.
    ///
    /// ```ignore
    /// if encoder.read_status(STATUS_PUSH) { /* ... */ }
    /// ```
    pub fn read_status(&self, mask: u8) -> bool {
        self.status.contains(mask)
    }

    pub async fn read_interrupt_config(&mut self) -> Result<u8, I2C::Error> {
        self.bus.read_u8(REG_INTCONF).await
    }

    pub async fn write_interrupt_config(&mut self, mask: u8) -> Result<(), I2C::Error> {
        self.bus.write_u8(REG_INTCONF, mask).await
    }

    /// Enable the INT pin for exactly the events that have handlers.
    ///
    /// A `Changed` handler enables both rotation bits and a `MinMax` handler
    /// enables both bound bits. Returns the mask written to INTCONF.
    pub async fn autoconfigure_interrupt(
        &mut self,
        handlers: &EventHandlers<'_>,
    ) -> Result<u8, I2C::Error> {
        let mask = handlers.interrupt_mask();
        self.write_interrupt_config(mask).await?;

        #[cfg(feature = "defmt")]
        defmt::debug!("INTCONF <- {=u8:#x}", mask);

        Ok(mask)
    }

    // -----------------------------------------------------------------------
    // Counter and bounds
    // -----------------------------------------------------------------------

    /// Read the full 32-bit counter.
    pub async fn read_counter(&mut self) -> Result<i32, I2C::Error> {
        self.bus.read_i32(REG_CVALB4).await
    }

    /// Read the low 16 bits of the counter as a signed value.
    pub async fn read_counter_i16(&mut self) -> Result<i16, I2C::Error> {
        self.bus.read_i16(REG_CVALB2).await
    }

    /// Read the low byte of the counter.
    pub async fn read_counter_u8(&mut self) -> Result<u8, I2C::Error> {
        self.bus.read_u8(REG_CVALB1).await
    }

    pub async fn write_counter(&mut self, value: i32) -> Result<(), I2C::Error> {
        self.bus.write_i32(REG_CVALB4, value).await
    }

    pub async fn read_max(&mut self) -> Result<i32, I2C::Error> {
        self.bus.read_i32(REG_CMAXB4).await
    }

    pub async fn write_max(&mut self, max: i32) -> Result<(), I2C::Error> {
        self.bus.write_i32(REG_CMAXB4, max).await
    }

    pub async fn read_min(&mut self) -> Result<i32, I2C::Error> {
        self.bus.read_i32(REG_CMINB4).await
    }

    pub async fn write_min(&mut self, min: i32) -> Result<(), I2C::Error> {
        self.bus.write_i32(REG_CMINB4, min).await
    }

    /// Read the amount added to the counter per detent.
    pub async fn read_step(&mut self) -> Result<i32, I2C::Error> {
        self.bus.read_i32(REG_ISTEPB4).await
    }

    pub async fn write_step(&mut self, step: i32) -> Result<(), I2C::Error> {
        self.bus.write_i32(REG_ISTEPB4, step).await
    }

    // -----------------------------------------------------------------------
    // Push button timing and identification
    // -----------------------------------------------------------------------

    /// Read the double-push window, in units of 10 ms. Zero disables
    /// double-push detection.
    pub async fn read_double_push_period(&mut self) -> Result<u8, I2C::Error> {
        self.bus.read_u8(REG_DPPERIOD).await
    }

    pub async fn write_double_push_period(&mut self, period: u8) -> Result<(), I2C::Error> {
        self.bus.write_u8(REG_DPPERIOD, period).await
    }

    pub async fn read_id_code(&mut self) -> Result<u8, I2C::Error> {
        self.bus.read_u8(REG_IDCODE).await
    }

    pub async fn read_version(&mut self) -> Result<u8, I2C::Error> {
        self.bus.read_u8(REG_VERSION).await
    }

    // -----------------------------------------------------------------------
    // EEPROM
    // -----------------------------------------------------------------------

    /// Read one byte of non-volatile memory.
    ///
    /// # Arguments
    /// * `address` - EEPROM register, starting at
    ///   [`EEPROM_START`](crate::EEPROM_START)
    pub async fn read_eeprom(&mut self, address: u8) -> Result<u8, I2C::Error> {
        self.bus.read_u8(address).await
    }

    /// Write one byte of non-volatile memory.
    ///
    /// Does not return until the device's write cycle
    /// ([`EEPROM_WRITE_DELAY_US`](crate::EEPROM_WRITE_DELAY_US)) has elapsed,
    /// so the next call cannot corrupt the byte being committed.
    pub async fn write_eeprom(&mut self, address: u8, data: u8) -> Result<(), I2C::Error> {
        self.bus.write_eeprom(address, data).await?;

        #[cfg(feature = "defmt")]
        defmt::trace!("EEPROM[{=u8:#x}] <- {=u8:#x}", address, data);

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Raw register access
    // -----------------------------------------------------------------------

    /// Write one byte to any register.
    pub async fn write_register_u8(&mut self, register: u8, value: u8) -> Result<(), I2C::Error> {
        self.bus.write_u8(register, value).await
    }

    /// Write a big-endian 32-bit value to `register..register + 4`.
    pub async fn write_register_i32(&mut self, register: u8, value: i32) -> Result<(), I2C::Error> {
        self.bus.write_i32(register, value).await
    }

    pub async fn read_register_u8(&mut self, register: u8) -> Result<u8, I2C::Error> {
        self.bus.read_u8(register).await
    }

    pub async fn read_register_i16(&mut self, register: u8) -> Result<i16, I2C::Error> {
        self.bus.read_i16(register).await
    }

    pub async fn read_register_i32(&mut self, register: u8) -> Result<i32, I2C::Error> {
        self.bus.read_i32(register).await
    }
}
