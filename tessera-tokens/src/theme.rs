//! Semantic token sets assembled from brand colors.
//!
//! ## Usage
//!
//! Derive the flat `name -> #rrggbb` map consumed by styling systems for one
//! [`ThemeMode`], or both at once with [`generate_themes`].

use tracing::{debug, instrument};

use crate::{
    color::hex_to_argb,
    error::Result,
    palette::{TonalPalette, Tone},
    scheme::{CorePalettes, MaterialColorScheme, ThemeMode},
    tokens::SemanticTokens,
};

/// Number of tokens in every generated theme.
pub const TOKEN_COUNT: usize = 42;

/// The brand colors a theme is derived from, as hex strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseColors {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
    pub neutral: String,
    pub surface: String,
    /// Seed for the neutral-variant palette.
    pub surface_variant: String,
    /// Emitted verbatim as the `inactive` token.
    pub inactive: String,
    pub warning: String,
    pub error: String,
}

impl Default for BaseColors {
    fn default() -> Self {
        Self {
            primary: "#6750A4".into(), // purple
            secondary: "#625B71".into(), // muted purple
            tertiary: "#7D5260".into(), // rose
            neutral: "#605D62".into(), // gray
            surface: "#FFFBFE".into(),
            surface_variant: "#E7E0EC".into(),
            inactive: "#CAC4D0".into(),
            warning: "#F9A825".into(), // amber
            error: "#BA1A1A".into(), // red
        }
    }
}

impl BaseColors {
    /// Builds the six scheme palettes. `neutral_variant` is seeded from
    /// `surface_variant`.
    pub fn core_palettes(&self) -> Result<CorePalettes> {
        Ok(CorePalettes {
            primary: TonalPalette::from_hex(&self.primary)?,
            secondary: TonalPalette::from_hex(&self.secondary)?,
            tertiary: TonalPalette::from_hex(&self.tertiary)?,
            neutral: TonalPalette::from_hex(&self.neutral)?,
            neutral_variant: TonalPalette::from_hex(&self.surface_variant)?,
            error: TonalPalette::from_hex(&self.error)?,
        })
    }
}

/// The light and dark token sets derived from one [`BaseColors`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Themes {
    pub light: SemanticTokens,
    pub dark: SemanticTokens,
}

impl Themes {
    pub fn get(&self, mode: ThemeMode) -> &SemanticTokens {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

/// Derives the camelCase token map for `mode`.
///
/// Every base color is validated before any token is produced, so an invalid
/// input fails with [`Error::InvalidColorFormat`](crate::Error::InvalidColorFormat)
/// and nothing downstream runs.
#[instrument(level = "debug", skip(base))]
pub fn generate_theme_tokens(base: &BaseColors, mode: ThemeMode) -> Result<SemanticTokens> {
    let palettes = base.core_palettes()?;
    let warning = TonalPalette::from_hex(&base.warning)?;
    // Not sampled, but a malformed value must still abort the run.
    hex_to_argb(&base.surface)?;
    hex_to_argb(&base.inactive)?;

    let scheme = MaterialColorScheme::from_palettes(&palettes, mode);
    let warning_at = |light: u8, dark: u8| warning.tone(Tone::clamped(mode.select(light, dark)));

    let mut tokens = SemanticTokens::with_capacity(TOKEN_COUNT);

    tokens.insert("primary", scheme.primary.to_hex());
    tokens.insert("onPrimary", scheme.on_primary.to_hex());
    tokens.insert("primaryContainer", scheme.primary_container.to_hex());
    tokens.insert("onPrimaryContainer", scheme.on_primary_container.to_hex());

    tokens.insert("secondary", scheme.secondary.to_hex());
    tokens.insert("onSecondary", scheme.on_secondary.to_hex());
    tokens.insert("secondaryContainer", scheme.secondary_container.to_hex());
    tokens.insert("onSecondaryContainer", scheme.on_secondary_container.to_hex());

    tokens.insert("tertiary", scheme.tertiary.to_hex());
    tokens.insert("onTertiary", scheme.on_tertiary.to_hex());
    tokens.insert("tertiaryContainer", scheme.tertiary_container.to_hex());
    tokens.insert("onTertiaryContainer", scheme.on_tertiary_container.to_hex());

    tokens.insert("error", scheme.error.to_hex());
    tokens.insert("onError", scheme.on_error.to_hex());
    tokens.insert("errorContainer", scheme.error_container.to_hex());
    tokens.insert("onErrorContainer", scheme.on_error_container.to_hex());

    // Warning is not a Material role; it gets its own palette and tone table.
    tokens.insert("warning", warning_at(40, 80).to_hex());
    tokens.insert("onWarning", warning_at(100, 20).to_hex());
    tokens.insert("warningContainer", warning_at(90, 30).to_hex());
    tokens.insert("onWarningContainer", warning_at(10, 90).to_hex());

    tokens.insert("background", scheme.background.to_hex());
    tokens.insert("onBackground", scheme.on_background.to_hex());

    tokens.insert("surface", scheme.surface.to_hex());
    tokens.insert("onSurface", scheme.on_surface.to_hex());
    tokens.insert("surfaceVariant", scheme.surface_variant.to_hex());
    tokens.insert("onSurfaceVariant", scheme.on_surface_variant.to_hex());

    tokens.insert("surfaceDim", scheme.surface_dim.to_hex());
    tokens.insert("surfaceBright", scheme.surface_bright.to_hex());
    tokens.insert("surfaceContainerLowest", scheme.surface_container_lowest.to_hex());
    tokens.insert("surfaceContainerLow", scheme.surface_container_low.to_hex());
    tokens.insert("surfaceContainer", scheme.surface_container.to_hex());
    tokens.insert("surfaceContainerHigh", scheme.surface_container_high.to_hex());
    tokens.insert("surfaceContainerHighest", scheme.surface_container_highest.to_hex());

    tokens.insert("outline", scheme.outline.to_hex());
    tokens.insert("outlineVariant", scheme.outline_variant.to_hex());

    tokens.insert("inverseSurface", scheme.inverse_surface.to_hex());
    tokens.insert("inverseOnSurface", scheme.inverse_on_surface.to_hex());
    tokens.insert("inversePrimary", scheme.inverse_primary.to_hex());
    tokens.insert("scrim", scheme.scrim.to_hex());
    tokens.insert("shadow", scheme.shadow.to_hex());

    tokens.insert("inactive", base.inactive.clone());
    tokens.insert("onInactive", mode.select("#000000", "#FFFFFF"));

    debug!(count = tokens.len(), "assembled theme tokens");
    Ok(tokens)
}

/// Derives both the light and the dark token sets.
pub fn generate_themes(base: &BaseColors) -> Result<Themes> {
    Ok(Themes {
        light: generate_theme_tokens(base, ThemeMode::Light)?,
        dark: generate_theme_tokens(base, ThemeMode::Dark)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_token_count_and_order() {
        let tokens = generate_theme_tokens(&BaseColors::default(), ThemeMode::Dark).unwrap();
        assert_eq!(tokens.len(), TOKEN_COUNT);
        let keys: Vec<_> = tokens.keys().collect();
        assert_eq!(keys.first(), Some(&"primary"));
        assert_eq!(
            &keys[16..20],
            ["warning", "onWarning", "warningContainer", "onWarningContainer"]
        );
        assert_eq!(keys.last(), Some(&"onInactive"));
        assert!(!keys.contains(&"surfaceTint"));
    }

    #[test]
    fn test_light_and_dark_share_keys() {
        let themes = generate_themes(&BaseColors::default()).unwrap();
        assert!(themes.light.keys().eq(themes.dark.keys()));
        assert_ne!(themes.light.get("primary"), themes.dark.get("primary"));
    }

    #[test]
    fn test_inactive_family() {
        let themes = generate_themes(&BaseColors::default()).unwrap();
        assert_eq!(themes.light.get("inactive"), Some("#CAC4D0"));
        assert_eq!(themes.dark.get("inactive"), Some("#CAC4D0"));
        assert_eq!(themes.light.get("onInactive"), Some("#000000"));
        assert_eq!(themes.dark.get("onInactive"), Some("#FFFFFF"));
    }

    #[test]
    fn test_warning_family_uses_warning_palette() {
        let base = BaseColors::default();
        let palette = TonalPalette::from_hex(&base.warning).unwrap();
        let hex = |tone| palette.tone(Tone::clamped(tone)).to_hex();

        let light = generate_theme_tokens(&base, ThemeMode::Light).unwrap();
        assert_eq!(light.get("warning"), Some(hex(40).as_str()));
        assert_eq!(light.get("onWarning"), Some(hex(100).as_str()));
        assert_eq!(light.get("warningContainer"), Some(hex(90).as_str()));
        assert_eq!(light.get("onWarningContainer"), Some(hex(10).as_str()));

        let dark = generate_theme_tokens(&base, ThemeMode::Dark).unwrap();
        assert_eq!(dark.get("warning"), Some(hex(80).as_str()));
        assert_eq!(dark.get("onWarning"), Some(hex(20).as_str()));
        assert_eq!(dark.get("warningContainer"), Some(hex(30).as_str()));
        assert_eq!(dark.get("onWarningContainer"), Some(hex(90).as_str()));
    }

    #[test]
    fn test_tokens_match_scheme() {
        let base = BaseColors::default();
        let scheme =
            MaterialColorScheme::from_palettes(&base.core_palettes().unwrap(), ThemeMode::Light);
        let tokens = generate_theme_tokens(&base, ThemeMode::Light).unwrap();
        for (name, color) in scheme.roles() {
            if name == "surfaceTint" {
                continue;
            }
            assert_eq!(tokens.get(name), Some(color.to_hex().as_str()), "role {name}");
        }
    }

    #[test]
    fn test_invalid_base_color_aborts() {
        for field in ["primary", "surfaceVariant", "warning", "inactive", "surface"] {
            let mut base = BaseColors::default();
            let slot = match field {
                "primary" => &mut base.primary,
                "surfaceVariant" => &mut base.surface_variant,
                "warning" => &mut base.warning,
                "inactive" => &mut base.inactive,
                _ => &mut base.surface,
            };
            *slot = "not-a-color".into();
            match generate_theme_tokens(&base, ThemeMode::Dark) {
                Err(Error::InvalidColorFormat { value }) => assert_eq!(value, "not-a-color"),
                other => panic!("{field}: expected InvalidColorFormat, got {other:?}"),
            }
        }
    }
}
