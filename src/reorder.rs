use crate::constants::*;

/// Rewrite a normalized line from logical order into the visual order the
/// Bijoy glyph table expects.
pub fn reorder(line: &str) -> String {
    let cps: Vec<char> = line.chars().collect();
    let mut out = Vec::with_capacity(cps.len());
    reorder_chars(&cps, &mut out);
    out.into_iter().collect()
}

/// Codepoint version of [`reorder`]. `out` is cleared first.
///
/// The scan copies `cps` into `out` one position at a time. Relocations only
/// touch the tail of `out`, so `out[..i]` always holds the rewritten prefix
/// and `cps[i..]` the untouched suffix. Nothing is moved below `barrier`,
/// which advances past every relocated region.
pub fn reorder_chars(cps: &[char], out: &mut Vec<char>) {
    out.clear();
    out.reserve(cps.len());

    let n = cps.len();
    let mut barrier = 0;
    let mut i = 0;

    while i < n {
        let c = cps[i];

        // 1. Pre-base vowel sign: move it in front of its conjunct
        if is_pre_base_vowel_sign(c) {
            match conjunct_start(out, barrier) {
                Some(start) => {
                    out.insert(start, c);
                    barrier = out.len();
                }
                None => out.push(c),
            }
            i += 1;
            continue;
        }

        // 2. Ra + halant: place the reph after the cluster it sits on
        if is_halant(c) && is_ra_medial(out) {
            if let Some(span) = ra_medial_span(cps, i) {
                let ra = out.pop().unwrap_or(RA);
                if span.pre_base {
                    out.push(cps[span.end + 1]);
                }
                out.extend_from_slice(&cps[i + 1..=span.end]);
                out.push(ra);
                out.push(c);

                i = span.end + 1 + usize::from(span.pre_base);
                barrier = out.len();
                continue;
            }
        }

        out.push(c);
        i += 1;
    }
}

/// Start of the conjunct chain ending at the last char of `out`, or `None`
/// when that char lies below the barrier (or `out` is empty).
///
/// The char right before the vowel sign is always taken. While the chain head
/// is a consonant preceded by a halant, it grows two positions leftward; a
/// non-consonant head (e.g. the ZWNJ of RA ZWNJ halant YA) ends the walk.
#[inline]
fn conjunct_start(out: &[char], barrier: usize) -> Option<usize> {
    let mut start = out.len().checked_sub(1)?;
    if start < barrier {
        return None;
    }

    while is_consonant(out[start])
        && start >= barrier + 2
        && is_halant(out[start - 1])
    {
        start -= 2;
    }

    Some(start)
}

/// `out` ends with a RA that is not itself the tail of a conjunct.
#[inline]
fn is_ra_medial(out: &[char]) -> bool {
    let len = out.len();
    if len == 0 || !is_ra(out[len - 1]) {
        return false;
    }
    !(len >= 2 && is_halant(out[len - 2]))
}

struct RaMedialSpan {
    /// Index of the last consonant of the cluster following the halant.
    end: usize,
    /// The cluster is followed by a pre-base vowel sign at `end + 1`.
    pre_base: bool,
}

/// Walk forward from the halant at `halant_idx` over `C (halant C)*`.
#[inline]
fn ra_medial_span(cps: &[char], halant_idx: usize) -> Option<RaMedialSpan> {
    let n = cps.len();
    let mut end = halant_idx + 1;
    if end >= n || !is_consonant(cps[end]) {
        return None;
    }

    while end + 2 < n && is_halant(cps[end + 1]) && is_consonant(cps[end + 2]) {
        end += 2;
    }

    let pre_base = end + 1 < n && is_pre_base_vowel_sign(cps[end + 1]);
    Some(RaMedialSpan { end, pre_base })
}
