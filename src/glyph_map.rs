use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use fxhash::FxHashMap;
use log::{debug, trace};

use crate::constants::is_bangla_char;
use crate::error::GlyphMapError;
use crate::table::CONVERSION_TABLE;

#[derive(Default)]
pub struct TrieNode {
    children: FxHashMap<char, Box<TrieNode>>,
    glyph: Option<usize>,
}

impl TrieNode {
    #[inline]
    fn get_child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c).map(|b| b.as_ref())
    }

    fn get_or_create_child(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_insert_with(|| Box::new(TrieNode::default()))
    }
}

/// Unicode grapheme sequence -> Bijoy glyph sequence, with leftmost-longest
/// lookup over a codepoint trie.
#[derive(Default)]
pub struct GlyphMap {
    trie: TrieNode,
    glyphs: Vec<String>,   // Maps index -> glyph sequence, one per distinct key
    max_key_length: usize, // Max key length in codepoints
}

impl GlyphMap {
    /// The built-in SutonnyMJ table.
    pub fn builtin() -> Self {
        Self::from_pairs(CONVERSION_TABLE.iter().copied())
    }

    /// Build from ordered pairs. A repeated key replaces the earlier glyph.
    /// Empty keys are skipped.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = GlyphMap::default();
        for (key, glyph) in pairs {
            if let Err(e) = map.insert(key.as_ref(), glyph) {
                debug!("Skipping glyph mapping: {}", e);
            }
        }
        map
    }

    /// Built-in table followed by the entries of a JSON object file
    /// (`{"<unicode>": "<bijoy>", ...}`), so the file wins on conflicts.
    pub fn with_overrides_from_path(path: &Path) -> Result<Self, GlyphMapError> {
        let file = File::open(path).map_err(|source| GlyphMapError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        // BTreeMap keeps application order stable between runs
        let overrides: BTreeMap<String, String> = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| GlyphMapError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut map = GlyphMap::builtin();
        for (key, glyph) in overrides {
            map.insert(&key, glyph)?;
        }
        debug!("Loaded glyph overrides from {}", path.display());
        Ok(map)
    }

    pub fn insert(&mut self, key: &str, glyph: impl Into<String>) -> Result<(), GlyphMapError> {
        if key.is_empty() {
            return Err(GlyphMapError::EmptyKey);
        }
        let glyph = glyph.into();

        let mut node = &mut self.trie;
        let mut key_len = 0;
        for c in key.chars() {
            node = node.get_or_create_child(c);
            key_len += 1;
        }

        match node.glyph {
            Some(idx) => {
                debug!("Glyph mapping for {:?} overridden: {:?} -> {:?}", key, self.glyphs[idx], glyph);
                self.glyphs[idx] = glyph;
            }
            None => {
                node.glyph = Some(self.glyphs.len());
                self.glyphs.push(glyph);
            }
        }

        if key_len > self.max_key_length {
            self.max_key_length = key_len;
        }
        Ok(())
    }

    /// Exact lookup of a whole key.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let mut node = &self.trie;
        for c in key.chars() {
            node = node.get_child(c)?;
        }
        node.glyph.map(|idx| self.glyphs[idx].as_str())
    }

    /// Longest key starting at `start`, as (codepoints consumed, glyph).
    #[inline]
    pub fn longest_match(&self, cps: &[char], start: usize) -> Option<(usize, &str)> {
        let mut node = &self.trie;
        let mut best = None;
        for (offset, &c) in cps.get(start..)?.iter().enumerate() {
            match node.get_child(c) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(idx) = node.glyph {
                best = Some((offset + 1, self.glyphs[idx].as_str()));
            }
        }
        best
    }

    /// Substitute every mapped sequence in `cps`, appending to `out`.
    /// Unmapped codepoints are copied through unchanged.
    pub fn apply(&self, cps: &[char], out: &mut String) {
        let mut i = 0;
        while i < cps.len() {
            match self.longest_match(cps, i) {
                Some((consumed, glyph)) => {
                    out.push_str(glyph);
                    i += consumed;
                }
                None => {
                    let c = cps[i];
                    if is_bangla_char(c) {
                        trace!("No glyph mapping for U+{:04X}", c as u32);
                    }
                    out.push(c);
                    i += 1;
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn max_key_length(&self) -> usize {
        self.max_key_length
    }
}
