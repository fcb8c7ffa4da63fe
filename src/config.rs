//! GCONF configuration builder.

use crate::registers::{
    GCONF_DIRECTION_LEFT, GCONF_PULLUP_ENABLE, GCONF_RESOLUTION_X2, GCONF_RESOLUTION_X4,
    GCONF_WRAP_ENABLE,
};

/// Rotation that increments the counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Clockwise increments (power-on default).
    #[default]
    Right,
    /// Counter-clockwise increments.
    Left,
}

/// Quadrature edges counted per detent step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    #[default]
    X1,
    X2,
    X4,
}

/// Encoder configuration written to GCONF by
/// [`I2cEncoderMini::begin`](crate::I2cEncoderMini::begin).
///
/// [`Config::new`] matches the device's power-on state: no wrap, clockwise
/// increments, pull-ups disabled, x1 resolution.
///
/// ```
/// use i2c_encoder_mini::{Config, Direction, Resolution};
///
/// let config = Config::new()
///     .with_wrap(true)
///     .with_direction(Direction::Left)
///     .with_resolution(Resolution::X4);
/// assert_eq!(config.bits(), 0x13);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    wrap: bool,
    direction: Direction,
    pull_up: bool,
    resolution: Resolution,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            wrap: false,
            direction: Direction::Right,
            pull_up: false,
            resolution: Resolution::X1,
        }
    }

    /// Wrap from max to min (and back) instead of stopping at the bound.
    #[must_use]
    pub const fn with_wrap(mut self, enable: bool) -> Self {
        self.wrap = enable;
        self
    }

    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Enable the board's internal pull-ups on the A/B inputs.
    #[must_use]
    pub const fn with_pull_up(mut self, enable: bool) -> Self {
        self.pull_up = enable;
        self
    }

    #[must_use]
    pub const fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    pub const fn wrap(self) -> bool {
        self.wrap
    }

    pub const fn direction(self) -> Direction {
        self.direction
    }

    pub const fn pull_up(self) -> bool {
        self.pull_up
    }

    pub const fn resolution(self) -> Resolution {
        self.resolution
    }

    /// GCONF register value for this configuration.
    pub const fn bits(self) -> u8 {
        let mut bits = 0;
        if self.wrap {
            bits |= GCONF_WRAP_ENABLE;
        }
        if let Direction::Left = self.direction {
            bits |= GCONF_DIRECTION_LEFT;
        }
        if self.pull_up {
            bits |= GCONF_PULLUP_ENABLE;
        }
        bits |= match self.resolution {
            Resolution::X1 => 0,
            Resolution::X2 => GCONF_RESOLUTION_X2,
            Resolution::X4 => GCONF_RESOLUTION_X4,
        };
        bits
    }

    /// Decode a GCONF value. Unknown bits (including reset) are ignored;
    /// if both resolution bits are set, x4 wins.
    pub const fn from_bits(bits: u8) -> Self {
        let resolution = if bits & GCONF_RESOLUTION_X4 != 0 {
            Resolution::X4
        } else if bits & GCONF_RESOLUTION_X2 != 0 {
            Resolution::X2
        } else {
            Resolution::X1
        };

        Self {
            wrap: bits & GCONF_WRAP_ENABLE != 0,
            direction: if bits & GCONF_DIRECTION_LEFT != 0 {
                Direction::Left
            } else {
                Direction::Right
            },
            pull_up: bits & GCONF_PULLUP_ENABLE != 0,
            resolution,
        }
    }
}

impl From<Config> for u8 {
    fn from(config: Config) -> Self {
        config.bits()
    }
}
