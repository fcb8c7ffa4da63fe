//! Register map and bit masks for the I2C Encoder Mini.
//!
//! Every register is addressed by a single byte. Multi-byte values occupy
//! consecutive addresses, most-significant byte first, so a 32-bit register
//! is addressed by its `B4` byte and a 16-bit read of its low half starts at
//! `B2`.

// ---------------------------------------------------------------------------
// Configuration and status
// ---------------------------------------------------------------------------

/// General configuration (wrap, direction, pull-up, resolution, reset).
pub const REG_GCONF: u8 = 0x00;

/// Interrupt enable register. Same bit layout as [`REG_ESTATUS`].
pub const REG_INTCONF: u8 = 0x01;

/// Encoder status register. One bit per event, see the `STATUS_*` masks.
pub const REG_ESTATUS: u8 = 0x02;

// ---------------------------------------------------------------------------
// 32-bit value registers (MSB first)
// ---------------------------------------------------------------------------

/// Counter value, most-significant byte.
pub const REG_CVALB4: u8 = 0x03;

/// Counter value, second-lowest byte. A 16-bit read of the counter starts here.
pub const REG_CVALB2: u8 = 0x05;

/// Counter value, least-significant byte.
pub const REG_CVALB1: u8 = 0x06;

/// Counter upper bound, most-significant byte.
pub const REG_CMAXB4: u8 = 0x07;

/// Counter lower bound, most-significant byte.
pub const REG_CMINB4: u8 = 0x0B;

/// Increment step, most-significant byte.
pub const REG_ISTEPB4: u8 = 0x0F;

// ---------------------------------------------------------------------------
// Single-byte registers
// ---------------------------------------------------------------------------

/// Double-push detection window, in units of 10 ms.
pub const REG_DPPERIOD: u8 = 0x13;

/// Writable I2C address slot.
pub const REG_ADDRESS: u8 = 0x14;

/// Fixed device identification code.
pub const REG_IDCODE: u8 = 0x70;

/// Firmware version.
pub const REG_VERSION: u8 = 0x71;

/// Current I2C address as reported by the device.
pub const REG_I2CADDRESS: u8 = 0x72;

/// First byte of the user EEPROM area.
pub const EEPROM_START: u8 = 0x81;

// ---------------------------------------------------------------------------
// GCONF bits
// ---------------------------------------------------------------------------

/// Wrap from max to min (and back) instead of saturating.
pub const GCONF_WRAP_ENABLE: u8 = 0x01;

/// Count up when turning left.
pub const GCONF_DIRECTION_LEFT: u8 = 0x02;

/// Enable the internal pull-ups on the encoder inputs.
pub const GCONF_PULLUP_ENABLE: u8 = 0x04;

/// Count every second edge.
pub const GCONF_RESOLUTION_X2: u8 = 0x08;

/// Count every edge.
pub const GCONF_RESOLUTION_X4: u8 = 0x10;

/// Reset the board to its power-on defaults.
pub const GCONF_RESET: u8 = 0x80;

// ---------------------------------------------------------------------------
// ESTATUS / INTCONF bits
// ---------------------------------------------------------------------------

/// Push button released.
pub const STATUS_PUSH_RELEASE: u8 = 0x01;

/// Push button pressed.
pub const STATUS_PUSH: u8 = 0x02;

/// Push button double-pressed.
pub const STATUS_DOUBLE_PUSH: u8 = 0x04;

/// Push button held.
pub const STATUS_LONG_PUSH: u8 = 0x08;

/// Counter incremented.
pub const STATUS_INCREMENT: u8 = 0x10;

/// Counter decremented.
pub const STATUS_DECREMENT: u8 = 0x20;

/// Counter reached its upper bound.
pub const STATUS_MAX: u8 = 0x40;

/// Counter reached its lower bound.
pub const STATUS_MIN: u8 = 0x80;

// ---------------------------------------------------------------------------
// Protocol constants
// ---------------------------------------------------------------------------

/// Settle time after an EEPROM write before the bus may be used again.
pub const EEPROM_WRITE_DELAY_US: u32 = 1_000;

/// Factory I2C address of the board (all address jumpers open).
pub const DEFAULT_ADDRESS: u8 = 0x20;
