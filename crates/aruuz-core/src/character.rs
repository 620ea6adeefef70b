// Urdu character classification and diacritic (araab) utilities.

// ---------------------------------------------------------------------------
// Letter constants
// ---------------------------------------------------------------------------

/// ا ALEF
pub const ALEF: char = '\u{0627}';
/// آ ALEF WITH MADDA ABOVE
pub const ALEF_MADD: char = '\u{0622}';
/// ن NOON
pub const NOON: char = '\u{0646}';
/// ں NOON GHUNNA (nasalization; silent for syllable length)
pub const NOON_GHUNNA: char = '\u{06BA}';
/// ھ DO-CHASHMI HEH (aspiration; silent for syllable length)
pub const DO_CHASHMI_HEH: char = '\u{06BE}';
/// ہ HEH GOAL
pub const HEH_GOAL: char = '\u{06C1}';
/// ۂ HEH GOAL WITH HAMZA ABOVE
pub const HEH_GOAL_HAMZA: char = '\u{06C2}';
/// و WAW
pub const WAW: char = '\u{0648}';
/// ی FARSI YEH
pub const YEH: char = '\u{06CC}';
/// ے YEH BARREE
pub const YEH_BARREE: char = '\u{06D2}';
/// ئ YEH WITH HAMZA ABOVE
pub const YEH_HAMZA: char = '\u{0626}';
/// ل LAM
pub const LAM: char = '\u{0644}';
/// ◌ٓ MADDAH ABOVE (combining)
pub const MADD_ABOVE: char = '\u{0653}';

// ---------------------------------------------------------------------------
// Diacritic (araab) constants
// ---------------------------------------------------------------------------

/// ◌ّ SHADDA (gemination)
pub const SHADD: char = '\u{0651}';
/// ◌ِ KASRA (zer)
pub const ZER: char = '\u{0650}';
/// ◌ْ SUKUN (jazm)
pub const JAZM: char = '\u{0652}';
/// ◌ٖ SUBSCRIPT ALEF (khari zer)
pub const KHARI_ZER: char = '\u{0656}';
/// ◌٘ MARK NOON GHUNNA
pub const MARK_NOON_GHUNNA: char = '\u{0658}';
/// ◌ٰ SUPERSCRIPT ALEF (khari zabar)
pub const KHARI_ZABAR: char = '\u{0670}';
/// ◌ً FATHATAN (do zabar)
pub const DO_ZABAR: char = '\u{064B}';
/// ◌ٍ KASRATAN (do zer)
pub const DO_ZER: char = '\u{064D}';
/// ◌َ FATHA (zabar)
pub const ZABAR: char = '\u{064E}';
/// ◌ُ DAMMA (paish)
pub const PAISH: char = '\u{064F}';
/// ◌ٔ HAMZA ABOVE (also the izafat ligature mark)
pub const HAMZA_ABOVE: char = '\u{0654}';

/// The full set of combining marks removed for scansion purposes.
pub const DIACRITICS: &[char] = &[
    SHADD,
    ZER,
    JAZM,
    KHARI_ZER,
    MARK_NOON_GHUNNA,
    KHARI_ZABAR,
    DO_ZABAR,
    DO_ZER,
    ZABAR,
    PAISH,
    HAMZA_ABOVE,
];

/// Check whether a character is a combining diacritic.
pub fn is_diacritic(c: char) -> bool {
    DIACRITICS.contains(&c)
}

/// A short vowel mark: zabar, zer or paish.
pub fn is_short_vowel_mark(c: char) -> bool {
    matches!(c, ZABAR | ZER | PAISH)
}

/// Remove all combining diacritics from a word.
pub fn strip_diacritics(word: &str) -> String {
    word.chars().filter(|c| !is_diacritic(*c)).collect()
}

/// Check whether a word carries any diacritic.
pub fn has_diacritics(word: &str) -> bool {
    word.chars().any(is_diacritic)
}

/// Remove the silent letters `ھ` and `ں`, which do not count toward
/// syllable length.
pub fn strip_silent(word: &str) -> String {
    word.chars()
        .filter(|c| *c != DO_CHASHMI_HEH && *c != NOON_GHUNNA)
        .collect()
}

/// The letters treated as "vowel or heh" by the flexible-syllable rules:
/// ا، ی، ے، و، ہ، ؤ
pub fn is_vowel_or_heh(c: char) -> bool {
    matches!(c, ALEF | YEH | YEH_BARREE | WAW | HEH_GOAL | '\u{0624}')
}

/// Check whether the first two letters of a word are both consonants
/// (neither ا، ی، ے nor ہ).
pub fn starts_consonant_pair(word: &str) -> bool {
    let mut chars = word.chars();
    let (Some(c0), Some(c1)) = (chars.next(), chars.next()) else {
        return false;
    };
    let vowel = |c: char| matches!(c, ALEF | YEH | YEH_BARREE | HEH_GOAL);
    !vowel(c0) && !vowel(c1)
}

/// Align diacritics with base letters: for each non-diacritic character of
/// `word`, report the diacritic immediately following it (if any).
///
/// The result is parallel to [`strip_diacritics`] of the same word.
pub fn locate_diacritics(word: &str) -> Vec<Option<char>> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if is_diacritic(chars[i]) {
            // A stray mark with no preceding base letter; skip it.
            i += 1;
            continue;
        }
        match chars.get(i + 1) {
            Some(&next) if is_diacritic(next) => {
                out.push(Some(next));
                i += 2;
            }
            _ => {
                out.push(None);
                i += 1;
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Orthographic folds
// ---------------------------------------------------------------------------

/// Fold orthographic variants of a word into the canonical spelling used
/// throughout the engine:
///
/// - trailing `ئ` becomes `ی` + hamza-above
/// - `ا` followed by the madda sign becomes `آ`
/// - `ۂ` becomes `ہ` + hamza-above
pub fn fold_word(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();

    if chars.last() == Some(&YEH_HAMZA) {
        chars.pop();
        chars.push(YEH);
        chars.push(HAMZA_ABOVE);
    }

    let mut out = String::with_capacity(word.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == ALEF && chars.get(i + 1) == Some(&MADD_ABOVE) {
            out.push(ALEF_MADD);
            i += 2;
        } else if chars[i] == HEH_GOAL_HAMZA {
            out.push(HEH_GOAL);
            out.push(HAMZA_ABOVE);
            i += 1;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_diacritics_removes_all_marks() {
        // دِل with zer
        let word = "د\u{0650}ل";
        assert_eq!(strip_diacritics(word), "دل");
        assert!(has_diacritics(word));
        assert!(!has_diacritics("دل"));
    }

    #[test]
    fn strip_silent_letters() {
        assert_eq!(strip_silent("تھا"), "تا");
        assert_eq!(strip_silent("میں"), "می");
        assert_eq!(strip_silent("دل"), "دل");
    }

    #[test]
    fn vowel_or_heh_set() {
        for c in ['ا', 'ی', 'ے', 'و', 'ہ', 'ؤ'] {
            assert!(is_vowel_or_heh(c), "expected vowel-or-heh: {c}");
        }
        assert!(!is_vowel_or_heh('ب'));
        assert!(!is_vowel_or_heh('ن'));
    }

    #[test]
    fn consonant_pair_detection() {
        assert!(starts_consonant_pair("سب"));
        assert!(!starts_consonant_pair("اب"));
        assert!(!starts_consonant_pair("بہ"));
        assert!(!starts_consonant_pair("ب"));
    }

    #[test]
    fn locate_marks_aligns_with_bases() {
        // بَس: zabar on the first letter
        let loc = locate_diacritics("ب\u{064E}س");
        assert_eq!(loc, vec![Some(ZABAR), None]);
        // no marks
        assert_eq!(locate_diacritics("بس"), vec![None, None]);
    }

    #[test]
    fn fold_trailing_yeh_hamza() {
        let folded = fold_word("کئ");
        assert!(folded.ends_with(HAMZA_ABOVE));
        assert!(folded.contains(YEH));
    }

    #[test]
    fn fold_alef_madd_sign() {
        let word = "ا\u{0653}پ";
        assert_eq!(fold_word(word), "آپ");
    }

    #[test]
    fn fold_heh_goal_hamza() {
        let folded = fold_word("\u{06C2}");
        let chars: Vec<char> = folded.chars().collect();
        assert_eq!(chars, vec![HEH_GOAL, HAMZA_ABOVE]);
    }

    #[test]
    fn fold_is_idempotent() {
        for w in ["ا\u{0653}پ", "\u{06C2}", "دل", "صحرائ"] {
            let once = fold_word(w);
            assert_eq!(fold_word(&once), once);
        }
    }
}
