//! Tonal palettes: a seed's hue and chroma sampled at fixed lightness stops.
//!
//! The HCT math lives in `material_color_utilities`; this module pins its
//! inputs and outputs to [`Argb`] and [`Tone`].

use std::fmt;

use material_color_utilities::{hct::Hct, palettes::TonalPalette as HctPalette};
use tracing::trace;

use crate::{
    color::{Argb, hex_to_argb},
    error::{Error, Result},
    tokens::SemanticTokens,
};

/// A lightness stop in `0..=100`. Tone 0 is black and tone 100 is white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tone(u8);

impl Tone {
    pub const BLACK: Tone = Tone(0);
    pub const WHITE: Tone = Tone(100);

    /// The stops exported by [`tonal_variations`].
    pub const STANDARD_STOPS: [Tone; 13] = [
        Tone(0),
        Tone(10),
        Tone(20),
        Tone(30),
        Tone(40),
        Tone(50),
        Tone(60),
        Tone(70),
        Tone(80),
        Tone(90),
        Tone(95),
        Tone(99),
        Tone(100),
    ];

    /// Creates a tone, rejecting values above 100.
    pub fn new(value: u8) -> Result<Self> {
        if value > 100 {
            return Err(Error::ToneOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Creates a tone, clamping values above 100 to white.
    #[inline]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Tone {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A hue/chroma-fixed family of colors derived from one seed.
pub struct TonalPalette {
    seed: Argb,
    inner: HctPalette,
}

impl TonalPalette {
    /// Builds a palette anchored to the hue and chroma of `seed`.
    pub fn from_argb(seed: Argb) -> Self {
        let hct = Hct::from_int(seed.to_u32());
        trace!(%seed, hue = hct.hue(), chroma = hct.chroma(), "building tonal palette");
        // `HctPalette::from_int` seeds the chroma with the hue; pass both explicitly.
        Self {
            seed,
            inner: HctPalette::from_hue_and_chroma(hct.hue(), hct.chroma()),
        }
    }

    /// Parses `hex` and builds a palette from it.
    pub fn from_hex(hex: &str) -> Result<Self> {
        hex_to_argb(hex).map(Self::from_argb)
    }

    /// The color this palette was derived from.
    pub fn seed(&self) -> Argb {
        self.seed
    }

    /// Returns the color at lightness stop `tone`, keeping the seed's hue and
    /// (gamut-clamped) chroma.
    pub fn tone(&self, tone: Tone) -> Argb {
        Argb::from_u32(self.inner.tone(tone.value().into()))
    }
}

impl fmt::Debug for TonalPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TonalPalette")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

/// Samples `hex` at every [`Tone::STANDARD_STOPS`] entry.
///
/// Keys are `{name}{tone}`, e.g. `primary40`, in ascending tone order.
pub fn tonal_variations(hex: &str, name: &str) -> Result<SemanticTokens> {
    let palette = TonalPalette::from_hex(hex)?;
    Ok(Tone::STANDARD_STOPS
        .iter()
        .map(|&tone| (format!("{name}{tone}"), palette.tone(tone).to_hex()))
        .collect())
}
