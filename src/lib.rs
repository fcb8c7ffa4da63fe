//! Async driver for the I2C Encoder Mini.
//!
//! The I2C Encoder Mini is a small board that decodes a rotary encoder with
//! push button on-chip and exposes a 32-bit counter, min/max bounds, a step
//! size, event status bits and a few bytes of EEPROM as I2C registers. This
//! crate drives it through any `embedded-hal-async` I2C implementation.
//!
//! # Architecture
//!
//! - **`driver`** (crate-private) - register protocol: single-byte register
//!   pointer, big-endian multi-byte values, EEPROM write-cycle delay.
//! - **[`I2cEncoderMini`]** (public) - named accessors for every register,
//!   GCONF configuration and status polling.
//! - **[`EventHandlers`]** - caller-owned callback table; status bits are
//!   decoded and dispatched in the fixed [`Event::ALL`] order.
//!
//! # Quick start
//!
//! ```ignore
//! use i2c_encoder_mini::{Config, Event, EventHandlers, I2cEncoderMini, DEFAULT_ADDRESS};
//!
//! let mut encoder = I2cEncoderMini::new(i2c, DEFAULT_ADDRESS);
//! encoder.begin(Config::new().with_wrap(true)).await?;
//! encoder.write_max(10).await?;
//! encoder.write_min(-10).await?;
//!
//! let mut on_push = || info!("push");
//! let mut handlers = EventHandlers::new().on(Event::ButtonPush, &mut on_push);
//! encoder.autoconfigure_interrupt(&handlers).await?;
//!
//! if encoder.update_status(&mut handlers).await? {
//!     let value = encoder.read_counter().await?;
//! }
//! ```
//!
//! # Errors
//!
//! Every fallible method returns the I2C implementation's own error type.
//! The driver never retries and has no error cases of its own.
//!
//! # Features
//!
//! - **`defmt`** - [`defmt::Format`] implementations on public types and
//!   trace logging of configuration, status and EEPROM writes.

#![no_std]

#[cfg(test)]
extern crate std;

pub use config::{Config, Direction, Resolution};
pub use driver::{decode_i16, decode_i32, encode_i32};
pub use encoder::I2cEncoderMini;
pub use events::{Event, EventHandlers, Status};
pub use registers::*;

mod config;
mod driver;
mod encoder;
mod events;
mod registers;

#[cfg(test)]
mod testing;
