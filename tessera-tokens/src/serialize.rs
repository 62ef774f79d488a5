//! Snake-case key normalization and JSON persistence of token maps.

use std::{path::Path, sync::LazyLock};

use regex::Regex;
use tracing::info;

use crate::{
    error::{Error, Result},
    tokens::SemanticTokens,
};

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("([a-z0-9])([A-Z])").expect("camel boundary pattern is valid"));

/// Converts a camelCase key to snake_case.
///
/// An underscore is inserted only where a lowercase letter or digit is
/// followed by an uppercase letter, then the whole key is lowercased. Runs of
/// capitals stay together: `"surfaceRGB"` becomes `"surface_rgb"`.
pub fn to_snake_case(key: &str) -> String {
    CAMEL_BOUNDARY.replace_all(key, "${1}_${2}").to_lowercase()
}

/// Renders `tokens` as 2-space indented JSON with snake_case keys, in
/// insertion order.
pub fn serialize(tokens: &SemanticTokens) -> Result<String> {
    Ok(serde_json::to_string_pretty(&tokens.to_snake_case())?)
}

/// Serializes `tokens` and overwrites `path` with the result.
///
/// The file is written in place; a crash mid-write can leave it truncated.
pub async fn write_tokens(path: impl AsRef<Path>, tokens: &SemanticTokens) -> Result<()> {
    let path = path.as_ref();
    let json = serialize(tokens)?;
    tokio::fs::write(path, json.as_bytes())
        .await
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), tokens = tokens.len(), "wrote theme tokens");
    Ok(())
}
