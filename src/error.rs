use std::path::PathBuf;

use thiserror::Error;

/// Failures while building a [`GlyphMap`](crate::glyph_map::GlyphMap) from
/// user-supplied data. Conversion itself never fails.
#[derive(Debug, Error)]
pub enum GlyphMapError {
    #[error("failed to read glyph overrides from '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid glyph override file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A mapping key must contain at least one character.
    #[error("glyph mapping key is empty")]
    EmptyKey,
}
