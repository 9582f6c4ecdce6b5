//! Canonical color value plus the pure numeric models built on top of it.
//!
//! [`Color`] is the single source of truth: every other representation
//! (hex, CMYK, HSL, HSV) is derived on demand so repeated conversions never
//! accumulate rounding drift.

pub mod conversion;
pub mod naming;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChromataError, Result};

pub use conversion::{Cmyk, Hsl, Hsv};
pub use naming::name_of;

/// An 8-bit sRGB color. Serialized as a lower-case `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Color from 8-bit channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `[r, g, b]`.
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lower-case `#rrggbb`.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb` (case-insensitive).
    pub fn from_hex(text: &str) -> Result<Self> {
        let digits = text.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        // from_str_radix alone would also accept a leading '+'.
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(malformed(text));
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| malformed(text));
        match digits.len() {
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                // #abc expands to #aabbcc.
                let short = |i: usize| channel(&digits[i..=i]).map(|v| v * 17);
                Ok(Self::new(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(malformed(text)),
        }
    }

    /// CMYK percentages, unrounded.
    pub fn to_cmyk(self) -> Cmyk {
        conversion::rgb_to_cmyk(self.r, self.g, self.b)
    }

    /// HSL, unrounded.
    pub fn to_hsl(self) -> Hsl {
        conversion::rgb_to_hsl(self.r, self.g, self.b)
    }

    /// HSV, unrounded.
    pub fn to_hsv(self) -> Hsv {
        conversion::rgb_to_hsv(self.r, self.g, self.b)
    }

    /// WCAG relative luminance in `[0, 1]`.
    pub fn luminance(self) -> f64 {
        conversion::relative_luminance(self.r, self.g, self.b)
    }
}

fn malformed(text: &str) -> ChromataError {
    ChromataError::invalid_input(format!("malformed color string {text:?}"))
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.hex()
    }
}

impl TryFrom<String> for Color {
    type Error = ChromataError;

    fn try_from(text: String) -> Result<Self> {
        Self::from_hex(&text)
    }
}

impl FromStr for Color {
    type Err = ChromataError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}
