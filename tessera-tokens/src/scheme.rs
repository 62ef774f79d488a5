//! Material 3 color schemes resolved from caller-supplied tonal palettes.
//!
//! ## Usage
//!
//! Build a [`CorePalettes`] from brand colors and resolve it for a
//! [`ThemeMode`]. Each role reads one palette at a fixed tone; light and dark
//! schemes share the same role set and only differ in the tones picked.

use std::fmt;

use tracing::debug;

use crate::{
    color::Argb,
    palette::{TonalPalette, Tone},
};

/// Whether a scheme targets light or dark surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    #[inline]
    pub const fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Picks the value for this mode.
    #[inline]
    pub fn select<T>(self, light: T, dark: T) -> T {
        match self {
            ThemeMode::Light => light,
            ThemeMode::Dark => dark,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The six palettes a scheme is resolved from.
#[derive(Debug)]
pub struct CorePalettes {
    pub primary: TonalPalette,
    pub secondary: TonalPalette,
    pub tertiary: TonalPalette,
    pub neutral: TonalPalette,
    pub neutral_variant: TonalPalette,
    pub error: TonalPalette,
}

/// A Material Design color scheme for one [`ThemeMode`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaterialColorScheme {
    /// The mode this scheme was resolved for.
    pub mode: ThemeMode,
    /// The primary color of the scheme.
    pub primary: Argb,
    /// Color used for content on top of `primary`.
    pub on_primary: Argb,
    /// A container color for `primary`.
    pub primary_container: Argb,
    /// Color used for content on top of `primary_container`.
    pub on_primary_container: Argb,
    /// The secondary color of the scheme.
    pub secondary: Argb,
    /// Color used for content on top of `secondary`.
    pub on_secondary: Argb,
    /// A container color for `secondary`.
    pub secondary_container: Argb,
    /// Color used for content on top of `secondary_container`.
    pub on_secondary_container: Argb,
    /// The tertiary color of the scheme.
    pub tertiary: Argb,
    /// Color used for content on top of `tertiary`.
    pub on_tertiary: Argb,
    /// A container color for `tertiary`.
    pub tertiary_container: Argb,
    /// Color used for content on top of `tertiary_container`.
    pub on_tertiary_container: Argb,
    /// The error color of the scheme.
    pub error: Argb,
    /// Color used for content on top of `error`.
    pub on_error: Argb,
    /// A container color for `error`.
    pub error_container: Argb,
    /// Color used for content on top of `error_container`.
    pub on_error_container: Argb,
    /// The background color of the scheme.
    pub background: Argb,
    /// Color used for content on top of `background`.
    pub on_background: Argb,
    /// The surface color of the scheme.
    pub surface: Argb,
    /// Color used for content on top of `surface`.
    pub on_surface: Argb,
    /// A variant of the surface color.
    pub surface_variant: Argb,
    /// Color used for content on top of `surface_variant`.
    pub on_surface_variant: Argb,
    /// Dimmest surface role.
    pub surface_dim: Argb,
    /// Brightest surface role.
    pub surface_bright: Argb,
    pub surface_container_lowest: Argb,
    pub surface_container_low: Argb,
    pub surface_container: Argb,
    pub surface_container_high: Argb,
    pub surface_container_highest: Argb,
    /// The outline color.
    pub outline: Argb,
    /// A variant of the outline color.
    pub outline_variant: Argb,
    /// An inverse of the surface color.
    pub inverse_surface: Argb,
    /// Color used for content on top of `inverse_surface`.
    pub inverse_on_surface: Argb,
    /// An inverse of the primary color.
    pub inverse_primary: Argb,
    /// The scrim color.
    pub scrim: Argb,
    /// The shadow color.
    pub shadow: Argb,
    /// Tint color used by tonal elevation overlays on surfaces.
    pub surface_tint: Argb,
}

impl MaterialColorScheme {
    /// Resolves every role from `palettes` for `mode`.
    pub fn from_palettes(palettes: &CorePalettes, mode: ThemeMode) -> Self {
        let CorePalettes {
            primary,
            secondary,
            tertiary,
            neutral,
            neutral_variant,
            error,
        } = palettes;
        let at = |palette: &TonalPalette, light: u8, dark: u8| {
            palette.tone(Tone::clamped(mode.select(light, dark)))
        };

        let scheme = MaterialColorScheme {
            mode,
            primary: at(primary, 40, 80),
            on_primary: at(primary, 100, 20),
            primary_container: at(primary, 90, 30),
            on_primary_container: at(primary, 10, 90),
            secondary: at(secondary, 40, 80),
            on_secondary: at(secondary, 100, 20),
            secondary_container: at(secondary, 90, 30),
            on_secondary_container: at(secondary, 10, 90),
            tertiary: at(tertiary, 40, 80),
            on_tertiary: at(tertiary, 100, 20),
            tertiary_container: at(tertiary, 90, 30),
            on_tertiary_container: at(tertiary, 10, 90),
            error: at(error, 40, 80),
            on_error: at(error, 100, 20),
            error_container: at(error, 90, 30),
            on_error_container: at(error, 10, 90),
            background: at(neutral, 99, 10),
            on_background: at(neutral, 10, 90),
            surface: at(neutral, 99, 10),
            on_surface: at(neutral, 10, 90),
            surface_variant: at(neutral_variant, 90, 30),
            on_surface_variant: at(neutral_variant, 30, 80),
            // The elevation ladder below follows the Material 3 baseline.
            surface_dim: at(neutral, 87, 6),
            surface_bright: at(neutral, 98, 24),
            surface_container_lowest: at(neutral, 100, 4),
            surface_container_low: at(neutral, 96, 10),
            surface_container: at(neutral, 94, 12),
            surface_container_high: at(neutral, 92, 17),
            surface_container_highest: at(neutral, 90, 22),
            outline: at(neutral_variant, 50, 60),
            outline_variant: at(neutral_variant, 80, 30),
            inverse_surface: at(neutral, 20, 90),
            inverse_on_surface: at(neutral, 95, 20),
            inverse_primary: at(primary, 80, 40),
            scrim: at(neutral, 0, 0),
            shadow: at(neutral, 0, 0),
            surface_tint: at(primary, 40, 80),
        };
        debug!(%mode, primary = %scheme.primary, "resolved material scheme");
        scheme
    }

    /// Every role as a `(camelCase name, color)` pair.
    ///
    /// The order is fixed and identical for both modes.
    pub fn roles(&self) -> [(&'static str, Argb); 37] {
        [
            ("primary", self.primary),
            ("onPrimary", self.on_primary),
            ("primaryContainer", self.primary_container),
            ("onPrimaryContainer", self.on_primary_container),
            ("secondary", self.secondary),
            ("onSecondary", self.on_secondary),
            ("secondaryContainer", self.secondary_container),
            ("onSecondaryContainer", self.on_secondary_container),
            ("tertiary", self.tertiary),
            ("onTertiary", self.on_tertiary),
            ("tertiaryContainer", self.tertiary_container),
            ("onTertiaryContainer", self.on_tertiary_container),
            ("error", self.error),
            ("onError", self.on_error),
            ("errorContainer", self.error_container),
            ("onErrorContainer", self.on_error_container),
            ("background", self.background),
            ("onBackground", self.on_background),
            ("surface", self.surface),
            ("onSurface", self.on_surface),
            ("surfaceVariant", self.surface_variant),
            ("onSurfaceVariant", self.on_surface_variant),
            ("surfaceDim", self.surface_dim),
            ("surfaceBright", self.surface_bright),
            ("surfaceContainerLowest", self.surface_container_lowest),
            ("surfaceContainerLow", self.surface_container_low),
            ("surfaceContainer", self.surface_container),
            ("surfaceContainerHigh", self.surface_container_high),
            ("surfaceContainerHighest", self.surface_container_highest),
            ("outline", self.outline),
            ("outlineVariant", self.outline_variant),
            ("inverseSurface", self.inverse_surface),
            ("inverseOnSurface", self.inverse_on_surface),
            ("inversePrimary", self.inverse_primary),
            ("scrim", self.scrim),
            ("shadow", self.shadow),
            ("surfaceTint", self.surface_tint),
        ]
    }
}

/// Resolves `palettes` for `mode`. See [`MaterialColorScheme::from_palettes`].
pub fn build_scheme(palettes: &CorePalettes, mode: ThemeMode) -> MaterialColorScheme {
    MaterialColorScheme::from_palettes(palettes, mode)
}
