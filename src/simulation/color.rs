//! RGB tint used to render agents and to encode predator lineage traits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{Result, SimulationError};

/// A decoded `#RRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// A single color channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Red channel.
    Red,
    /// Green channel.
    Green,
    /// Blue channel.
    Blue,
}

impl Rgb {
    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#RRGGBB` string (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidColorFormat`] if the string is not
    /// a `#` followed by exactly six hex digits.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || SimulationError::InvalidColorFormat(hex.to_string());

        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Encodes as lowercase, zero-padded `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Returns the value of one channel.
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Raises `channel` by `amount` if the result stays within `0..=255`.
    ///
    /// A channel that is already too bright to take the full shift is left
    /// unchanged rather than saturated.
    pub fn brighten_channel(self, channel: Channel, amount: u8) -> Self {
        let mut out = self;
        let slot = match channel {
            Channel::Red => &mut out.r,
            Channel::Green => &mut out.g,
            Channel::Blue => &mut out.b,
        };
        if let Some(shifted) = slot.checked_add(amount) {
            *slot = shifted;
        }
        out
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}
