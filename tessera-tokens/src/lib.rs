//! Material 3 design tokens for tessera themes.
//!
//! Brand colors are turned into HCT tonal palettes, resolved into light and
//! dark Material schemes, flattened into `name -> #rrggbb` token maps and
//! written out as JSON.
//!
//! ## Usage
//!
//! ```no_run
//! use tessera_tokens::{GeneratorConfig, generate};
//!
//! # async fn run() -> tessera_tokens::Result<()> {
//! let written = generate(&GeneratorConfig::default()).await?;
//! assert_eq!(written.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod generator;
pub mod palette;
pub mod scheme;
pub mod serialize;
pub mod theme;
pub mod tokens;

pub use crate::{
    color::{Argb, argb_to_hex, hex_to_argb},
    config::GeneratorConfig,
    error::{Error, Result},
    generator::{generate, write_themes},
    palette::{TonalPalette, Tone, tonal_variations},
    scheme::{CorePalettes, MaterialColorScheme, ThemeMode, build_scheme},
    serialize::{serialize, to_snake_case, write_tokens},
    theme::{BaseColors, TOKEN_COUNT, Themes, generate_theme_tokens, generate_themes},
    tokens::SemanticTokens,
};
