// Bangla Unicode Range
pub const BANGLA_START: char = '\u{0980}';
pub const BANGLA_END: char = '\u{09FF}';

pub const HALANT: char = '\u{09CD}';
pub const NUKTA: char = '\u{09BC}';
pub const RA: char = '\u{09B0}';

pub const ZWNJ: char = '\u{200C}';
pub const ZWJ: char = '\u{200D}';

// Two-part vowel signs
pub const VOWEL_SIGN_AA: char = '\u{09BE}';
pub const VOWEL_SIGN_E: char = '\u{09C7}';
pub const VOWEL_SIGN_O: char = '\u{09CB}';
pub const VOWEL_SIGN_AU: char = '\u{09CC}';
pub const AU_LENGTH_MARK: char = '\u{09D7}';

pub fn is_bangla_char(c: char) -> bool {
    (BANGLA_START..=BANGLA_END).contains(&c)
}

/// Vowel signs stored after the consonant but drawn before it (I, AI, E).
pub fn is_pre_base_vowel_sign(c: char) -> bool {
    matches!(c, '\u{09BF}' | '\u{09C8}' | '\u{09C7}')
}

pub fn is_consonant(c: char) -> bool {
    let code = c as u32;
    // KA..HA, minus the unassigned slots 09A9 and 09B1, 09B3..09B5
    if (0x0995..=0x09B9).contains(&code) {
        return !matches!(code, 0x09A9 | 0x09B1 | 0x09B3 | 0x09B4 | 0x09B5);
    }
    // RRA, RHA, YYA, KHANDA TA, and the candrabindu/anusvara/visarga signs
    matches!(c, '\u{09DC}' | '\u{09DD}' | '\u{09DF}' | '\u{09CE}' | '\u{0981}' | '\u{0982}' | '\u{0983}')
}

pub fn is_halant(c: char) -> bool {
    c == HALANT
}

pub fn is_ra(c: char) -> bool {
    c == RA
}
