use std::cell::RefCell;
use log::debug;
use rayon::prelude::*;

use crate::constants::ZWNJ;
use crate::glyph_map::GlyphMap;
use crate::normalizer::normalize;
use crate::reorder::reorder_chars;

// ============================================================================
// Thread-local scratch buffers, reused across lines
// ============================================================================

thread_local! {
    static TL_BUFFERS: RefCell<ThreadLocalBuffers> = RefCell::new(ThreadLocalBuffers::new());
}

struct ThreadLocalBuffers {
    codepoints: Vec<char>,
    reordered: Vec<char>,
}

impl ThreadLocalBuffers {
    fn new() -> Self {
        ThreadLocalBuffers {
            codepoints: Vec::with_capacity(1024),
            reordered: Vec::with_capacity(1024),
        }
    }
}

/// Unicode Bangla -> Bijoy converter.
///
/// Holds only a read-only [`GlyphMap`], so one instance can be shared across
/// threads.
pub struct BijoyConverter {
    glyph_map: GlyphMap,
}

impl Default for BijoyConverter {
    fn default() -> Self {
        BijoyConverter::new(GlyphMap::builtin())
    }
}

impl BijoyConverter {
    pub fn new(glyph_map: GlyphMap) -> Self {
        BijoyConverter { glyph_map }
    }

    pub fn glyph_map(&self) -> &GlyphMap {
        &self.glyph_map
    }

    /// Convert a whole text: each line separately, rejoined with `\n`, the
    /// result trimmed and every ZWNJ removed.
    pub fn convert(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len() * 2);
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                result.push('\n');
            }
            self.convert_line_into(line, &mut result);
        }

        result.trim().chars().filter(|&c| c != ZWNJ).collect()
    }

    /// Normalize, reorder and map a single line. No trimming, and ZWNJ
    /// sentinels are left in place.
    pub fn convert_line(&self, line: &str) -> String {
        let mut out = String::with_capacity(line.len() * 2);
        self.convert_line_into(line, &mut out);
        out
    }

    /// Convert independent texts in parallel.
    pub fn convert_batch<S>(&self, texts: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        debug!("Converting batch of {} texts", texts.len());
        texts.par_iter().map(|t| self.convert(t.as_ref())).collect()
    }

    fn convert_line_into(&self, line: &str, out: &mut String) {
        if line.is_empty() {
            return;
        }

        let normalized = normalize(line);

        TL_BUFFERS.with(|buffers| {
            let mut buf = buffers.borrow_mut();
            let ThreadLocalBuffers { codepoints, reordered } = &mut *buf;

            codepoints.clear();
            codepoints.extend(normalized.chars());
            reorder_chars(codepoints, reordered);

            self.glyph_map.apply(reordered, out);
        });
    }
}
