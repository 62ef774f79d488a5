//! The end-to-end pipeline: base colors in, theme files out.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::{
    config::GeneratorConfig,
    error::Result,
    serialize::write_tokens,
    theme::{Themes, generate_themes},
};

/// Computes both themes, then writes the files enabled in `config`.
///
/// Nothing is written unless both themes were derived successfully. Each
/// write is awaited, so the first failure is returned and later files are not
/// attempted. Returns the written paths in write order.
pub async fn generate(config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
    let themes = generate_themes(&config.base_colors)?;
    info!(
        tokens = themes.dark.len(),
        "derived light and dark theme tokens"
    );
    debug!(light = ?themes.light, "light theme");
    debug!(dark = ?themes.dark, "dark theme");

    write_themes(config, &themes).await
}

/// Writes the already-derived `themes` according to `config`.
pub async fn write_themes(config: &GeneratorConfig, themes: &Themes) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for mode in config.emitted_modes() {
        let path = config.output_path(mode);
        write_tokens(&path, themes.get(mode)).await?;
        written.push(path);
    }
    Ok(written)
}
