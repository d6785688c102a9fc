//! Unicode Bangla to Bijoy (SutonnyMJ) legacy encoding.
//!
//! ```
//! assert_eq!(bijoy_rs::to_bijoy("একা বসে তুমি"), "GKv e‡m Zywg");
//! ```

use std::sync::OnceLock;

pub mod constants;
pub mod converter;
pub mod error;
pub mod glyph_map;
pub mod normalizer;
pub mod reorder;
pub mod table;

pub use converter::BijoyConverter;
pub use error::GlyphMapError;
pub use glyph_map::GlyphMap;

static DEFAULT_CONVERTER: OnceLock<BijoyConverter> = OnceLock::new();

/// Convert Unicode Bangla text to Bijoy using the built-in table.
pub fn to_bijoy(text: &str) -> String {
    DEFAULT_CONVERTER.get_or_init(BijoyConverter::default).convert(text)
}
