use std::borrow::Cow;

use crate::constants::*;

/// Canonicalize a line before reordering.
///
/// Sign O and sign AU are split into sign E plus their trailing part, so the
/// sign E half can be moved like any other pre-base vowel sign. Nukta forms of
/// YA, DDA and DDHA are composed into their precomposed letters, and every
/// ZWJ becomes a ZWNJ (stripped again once the line is assembled).
pub fn normalize(line: &str) -> Cow<'_, str> {
    if !line.chars().any(needs_normalization) {
        return Cow::Borrowed(line);
    }

    let mut out = String::with_capacity(line.len() + 8);
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            VOWEL_SIGN_O => {
                out.push(VOWEL_SIGN_E);
                out.push(VOWEL_SIGN_AA);
            }
            VOWEL_SIGN_AU => {
                out.push(VOWEL_SIGN_E);
                out.push(AU_LENGTH_MARK);
            }
            ZWJ => out.push(ZWNJ),
            _ => {
                if chars.peek() == Some(&NUKTA) {
                    if let Some(composed) = compose_nukta(c) {
                        chars.next();
                        out.push(composed);
                        continue;
                    }
                }
                out.push(c);
            }
        }
    }

    Cow::Owned(out)
}

#[inline]
fn needs_normalization(c: char) -> bool {
    matches!(c, VOWEL_SIGN_O | VOWEL_SIGN_AU | ZWJ | NUKTA)
}

#[inline]
fn compose_nukta(base: char) -> Option<char> {
    match base {
        '\u{09AF}' => Some('\u{09DF}'), // YA -> YYA
        '\u{09A1}' => Some('\u{09DC}'), // DDA -> RRA
        '\u{09A2}' => Some('\u{09DD}'), // DDHA -> RHA
        _ => None,
    }
}
