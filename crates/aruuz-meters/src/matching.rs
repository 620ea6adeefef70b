// Code-against-pattern matching.
//
// Both operations try all four variants of a pattern and succeed if any
// variant accepts. Prefix matching runs at every step of the code tree
// traversal; the full-length check runs once per completed path.

use aruuz_core::symbols::{weight_matches, CAESURA, SHORT};

use crate::catalogue::Catalogue;

/// Check whether appending `word_code` after an already-matched prefix of
/// `prefix_len` symbols keeps the pattern at `index` viable.
///
/// The caesura rule: when the last symbol of `word_code` lands exactly on
/// a `+` marker of the pattern, the word must close the hemistich with a
/// short (codes of length one are exempt).
///
/// The two short-appended variants additionally require `word_code` to
/// end in an explicit short; the plain variants have no such restriction,
/// so a meter only dies when all four refuse.
pub fn is_match(cat: &Catalogue, index: usize, prefix_len: usize, word_code: &str) -> bool {
    let word_len = word_code.chars().count();
    if prefix_len + word_len == 0 {
        return false;
    }

    let flat = cat.flat_pattern(index);
    if flat.chars().count() > prefix_len + word_len {
        let boundary = prefix_len + word_len - 1;
        if flat.chars().nth(boundary) == Some(CAESURA)
            && word_len >= 2
            && !word_code.ends_with(SHORT)
        {
            return false;
        }
    }

    let variants = cat.variants(index);
    prefix_ok(&variants[0], prefix_len, word_code, false)
        || prefix_ok(&variants[1], prefix_len, word_code, true)
        || prefix_ok(&variants[2], prefix_len, word_code, true)
        || prefix_ok(&variants[3], prefix_len, word_code, false)
}

fn prefix_ok(variant: &str, offset: usize, code: &str, require_final_short: bool) -> bool {
    // Variants and codes are pure ASCII symbol strings.
    let vbytes = variant.as_bytes();
    let cbytes = code.as_bytes();
    if vbytes.len() < offset + cbytes.len() {
        return false;
    }
    for (k, &cb) in cbytes.iter().enumerate() {
        let c = cb as char;
        if require_final_short && k == cbytes.len() - 1 && c != SHORT {
            return false;
        }
        if !weight_matches(vbytes[offset + k] as char, c) {
            return false;
        }
    }
    true
}

/// Final check for a completed path: the full code must coincide, symbol
/// by symbol and in length, with at least one variant of the pattern.
pub fn full_match(cat: &Catalogue, index: usize, code: &str) -> bool {
    cat.variants(index).iter().any(|v| exact_match(v, code))
}

/// Retain only the meter indices whose pattern fully matches `code`.
pub fn check_code_length(cat: &Catalogue, code: &str, alive: &[usize]) -> Vec<usize> {
    alive
        .iter()
        .copied()
        .filter(|&i| full_match(cat, i, code))
        .collect()
}

fn exact_match(variant: &str, code: &str) -> bool {
    variant.len() == code.len()
        && variant
            .bytes()
            .zip(code.bytes())
            .all(|(m, c)| weight_matches(m as char, c as char))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> Catalogue {
        Catalogue::new().unwrap()
    }

    /// Index of the first catalogue entry with the given pattern.
    fn index_of(cat: &Catalogue, pattern: &str) -> usize {
        (0..cat.len())
            .find(|&i| cat.pattern(i) == pattern)
            .unwrap_or_else(|| panic!("pattern {pattern} not in catalogue"))
    }

    #[test]
    fn prefix_accepts_growing_code() {
        let cat = catalogue();
        let i = index_of(&cat, "-===/-===/-===/-===");
        assert!(is_match(&cat, i, 0, "-==="));
        assert!(is_match(&cat, i, 4, "-==="));
        assert!(is_match(&cat, i, 8, "-==="));
        assert!(is_match(&cat, i, 12, "-==="));
    }

    #[test]
    fn prefix_rejects_wrong_symbol() {
        let cat = catalogue();
        let i = index_of(&cat, "-===/-===/-===/-===");
        assert!(!is_match(&cat, i, 0, "=-"));
        assert!(!is_match(&cat, i, 4, "--"));
    }

    #[test]
    fn prefix_rejects_overflow() {
        let cat = catalogue();
        let i = index_of(&cat, "-===/-==");
        // Pattern variants are at most 8 symbols (+1 appended short).
        assert!(!is_match(&cat, i, 8, "=="));
    }

    #[test]
    fn flex_symbol_accepted_either_way() {
        let cat = catalogue();
        let i = index_of(&cat, "-===/-===/-===/-===");
        assert!(is_match(&cat, i, 0, "-x=x"));
        let j = index_of(&cat, "-=-=/-=-=/-=-=/-=-=");
        assert!(is_match(&cat, j, 0, "-x-x"));
    }

    #[test]
    fn empty_input_rejected() {
        let cat = catalogue();
        assert!(!is_match(&cat, 0, 0, ""));
    }

    #[test]
    fn caesura_requires_short_at_boundary() {
        let cat = catalogue();
        // ==-/-===+==-/-=== : hemistich closes after 7 symbols.
        let i = index_of(&cat, "==-/-===+==-/-===");
        // Flat pattern with '+': position 7 is the marker, so a word whose
        // code ends at symbol 8 sits on the boundary and must close short.
        assert!(is_match(&cat, i, 4, "===-"));
        assert!(!is_match(&cat, i, 4, "===="));
    }

    #[test]
    fn full_match_plain_variant() {
        let cat = catalogue();
        let i = index_of(&cat, "-===/-===/-===/-===");
        assert!(full_match(&cat, i, "-===-===-===-==="));
        assert!(full_match(&cat, i, "-===-===-===-==x"));
        assert!(!full_match(&cat, i, "-===-===-==="));
    }

    #[test]
    fn full_match_trailing_short_variant() {
        let cat = catalogue();
        let i = index_of(&cat, "-===/-===/-===/-==");
        // One appended short over the stripped pattern.
        assert!(full_match(&cat, i, "-===-===-===-==-"));
        assert!(!full_match(&cat, i, "-===-===-===-==="));
    }

    #[test]
    fn full_match_caesura_replaced_variant() {
        let cat = catalogue();
        let i = index_of(&cat, "==-/-===+==-/-===");
        // Caesura realized as a short syllable.
        assert!(full_match(&cat, i, "==--===-==--==="));
        // And plain juxtaposition of the hemistichs.
        assert!(full_match(&cat, i, "==--=====--==="));
    }

    #[test]
    fn check_code_length_filters() {
        let cat = catalogue();
        let all: Vec<usize> = (0..cat.len()).collect();
        let alive = check_code_length(&cat, "-===-===-===-===", &all);
        assert!(!alive.is_empty());
        for &i in &alive {
            assert!(full_match(&cat, i, "-===-===-===-==="));
        }
        let hazaj = index_of(&cat, "-===/-===/-===/-===");
        assert!(alive.contains(&hazaj));
    }
}
