//! Conversions between `#RRGGBB` strings and packed ARGB pixels.

use std::{fmt, str::FromStr};

use crate::error::{Error, Result};

const OPAQUE: u32 = 0xFF00_0000;

/// An opaque color packed as `0xAARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb(u32);

impl Argb {
    // --- Common Colors ---
    pub const BLACK: Argb = Argb(0xFF00_0000);
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);

    /// Wraps a packed pixel as produced by the Material color utilities.
    #[inline]
    pub const fn from_u32(argb: u32) -> Self {
        Self(argb)
    }

    /// Creates an opaque color from three `u8` channels.
    #[inline]
    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self(OPAQUE | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Formats the color as lowercase `#rrggbb`, dropping the alpha channel.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red(), self.green(), self.blue())
    }
}

impl FromStr for Argb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        hex_to_argb(s)
    }
}

impl From<Argb> for u32 {
    #[inline]
    fn from(argb: Argb) -> Self {
        argb.0
    }
}

/// Parses `#RRGGBB` (the `#` is optional, digits are case-insensitive) into an
/// opaque [`Argb`].
///
/// Shorthand (`#RGB`) and alpha (`#RRGGBBAA`) forms are rejected.
pub fn hex_to_argb(hex: &str) -> Result<Argb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    // `from_str_radix` alone would accept a leading `+`.
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid(hex));
    }
    let rgb = u32::from_str_radix(digits, 16).map_err(|_| invalid(hex))?;
    Ok(Argb(OPAQUE | rgb))
}

/// Formats a color as `#rrggbb`.
pub fn argb_to_hex(argb: Argb) -> String {
    argb.to_hex()
}

fn invalid(value: &str) -> Error {
    Error::InvalidColorFormat {
        value: value.to_owned(),
    }
}
