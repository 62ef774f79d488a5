//! Generator configuration.

use std::path::{Path, PathBuf};

use crate::{scheme::ThemeMode, theme::BaseColors};

/// What to generate and where to put it.
///
/// The default writes only `dark-theme.json` into the working directory,
/// derived from [`BaseColors::default`].
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Directory the theme files are written into.
    pub output_dir: PathBuf,
    pub emit_dark: bool,
    /// Also write `light-theme.json`. The light theme is always computed.
    pub emit_light: bool,
    pub base_colors: BaseColors,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            emit_dark: true,
            emit_light: false,
            base_colors: BaseColors::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_output_dir(mut self, output_dir: impl AsRef<Path>) -> Self {
        self.output_dir = output_dir.as_ref().to_path_buf();
        self
    }

    pub fn with_base_colors(mut self, base_colors: BaseColors) -> Self {
        self.base_colors = base_colors;
        self
    }

    pub fn with_light(mut self, emit_light: bool) -> Self {
        self.emit_light = emit_light;
        self
    }

    /// File name used for `mode`, e.g. `dark-theme.json`.
    pub fn file_name(mode: ThemeMode) -> String {
        format!("{mode}-theme.json")
    }

    pub fn output_path(&self, mode: ThemeMode) -> PathBuf {
        self.output_dir.join(Self::file_name(mode))
    }

    /// Modes whose files should be written, dark first.
    pub fn emitted_modes(&self) -> impl Iterator<Item = ThemeMode> + '_ {
        [
            (ThemeMode::Dark, self.emit_dark),
            (ThemeMode::Light, self.emit_light),
        ]
        .into_iter()
        .filter_map(|(mode, enabled)| enabled.then_some(mode))
    }
}
