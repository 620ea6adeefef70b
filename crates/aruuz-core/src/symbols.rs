// Syllable-weight symbol alphabet and code string helpers.

/// Long syllable (two morae).
pub const LONG: char = '=';

/// Short syllable (one mora).
pub const SHORT: char = '-';

/// Flexible syllable: matches either a long or a short position.
pub const FLEX: char = 'x';

/// Caesura marker inside a meter pattern. Separates the hemistichs and
/// must coincide with a word boundary when matching.
pub const CAESURA: char = '+';

/// Foot separator inside a meter pattern. Display only; stripped before
/// symbol-level matching.
pub const FOOT_SEP: char = '/';

/// Check whether a character is one of the three weight symbols.
pub fn is_weight(c: char) -> bool {
    matches!(c, LONG | SHORT | FLEX)
}

/// Check whether a string is a valid code: non-empty and made only of
/// weight symbols.
pub fn is_code(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_weight)
}

/// Check whether a weight symbol from a code is compatible with a
/// pattern symbol. The pattern side carries only `=` and `-`; `x` on the
/// code side matches either.
pub fn weight_matches(pattern: char, code: char) -> bool {
    match pattern {
        LONG => code == LONG || code == FLEX,
        SHORT => code == SHORT || code == FLEX,
        _ => false,
    }
}

/// Number of morae a code stands for, counting `x` as a long.
pub fn mora_count(code: &str) -> usize {
    code.chars()
        .map(|c| if c == SHORT { 1 } else { 2 })
        .sum()
}
