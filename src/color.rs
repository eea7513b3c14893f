//! RGB color values and hex encoding
//!
//! Channels are kept as `f64` so interpolated colors stay fractional until the
//! final hex encoding, which truncates each channel toward zero.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// One of the three color channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Single-letter tag for this channel
    pub fn tag(self) -> char {
        match self {
            Channel::Red => 'r',
            Channel::Green => 'g',
            Channel::Blue => 'b',
        }
    }
}

impl FromStr for Channel {
    type Err = ColorError;

    /// Parse a channel tag. Only the exact strings `r`, `g` and `b` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "r" => Ok(Channel::Red),
            "g" => Ok(Channel::Green),
            "b" => Ok(Channel::Blue),
            other => Err(ColorError::InvalidChannel(other.to_string())),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// An RGB color with unclamped floating-point channels.
///
/// Nominal channel range is 0.0..=255.0, but values outside it are allowed
/// (configured stops are not range-checked).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn channel(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Build a color by evaluating `f` once per channel
    pub fn from_fn(mut f: impl FnMut(Channel) -> f64) -> Self {
        Self {
            r: f(Channel::Red),
            g: f(Channel::Green),
            b: f(Channel::Blue),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /// Truncate each channel toward zero and saturate to a byte.
    ///
    /// Negative values become 0, values above 255 become 255, NaN becomes 0.
    pub fn to_bytes(&self) -> [u8; 3] {
        [to_byte(self.r), to_byte(self.g), to_byte(self.b)]
    }

    /// Encode as a lowercase `#rrggbb` string.
    ///
    /// ```
    /// use timestamp_color::Rgb;
    /// assert_eq!(Rgb::new(127.9, 127.5, 0.0).to_hex(), "#7f7f00");
    /// ```
    pub fn to_hex(&self) -> String {
        format!("#{}", hex::encode(self.to_bytes()))
    }

    /// Parse a `#rrggbb` or `#rgb` string (the `#` is optional)
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s.trim().trim_start_matches('#');
        let expanded = match digits.len() {
            6 => digits.to_string(),
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            _ => return Err(ColorError::InvalidHexLength(s.to_string())),
        };

        let bytes = hex::decode(&expanded).map_err(|source| ColorError::InvalidHex {
            color: s.to_string(),
            source,
        })?;

        Ok(Self::new(bytes[0] as f64, bytes[1] as f64, bytes[2] as f64))
    }
}

#[inline]
fn to_byte(value: f64) -> u8 {
    // `as` saturates out-of-range floats and maps NaN to 0
    value.trunc() as u8
}

impl From<[f64; 3]> for Rgb {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [f64; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
