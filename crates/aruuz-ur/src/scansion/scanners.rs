// Length-indexed heuristic scanners.
//
// When the lexicon has no entry for a word, its weight code is derived
// from the bare letter shape: dispatch on the letter count (after
// removing diacritics and the silent letters ھ and ں), then read vowel
// letters and diacritics off the original spelling. The rules are a
// closed switch over lengths 1..5+; longer words peel syllables and
// recurse.
//
// Throughout, `substr` is the spelling with diacritics kept; the silent
// letters are removed up front and diacritics are located against the
// remaining base letters.

use aruuz_core::character::{
    has_diacritics, is_short_vowel_mark, is_vowel_or_heh, locate_diacritics, strip_diacritics,
    strip_silent, ALEF, ALEF_MADD, HEH_GOAL, JAZM, NOON, SHADD, WAW, YEH, YEH_BARREE,
};

/// Letter shape of a (sub)word: base letters with silent letters removed,
/// and the diacritic sitting on each base letter.
struct Shape {
    stripped: Vec<char>,
    loc: Vec<Option<char>>,
}

fn shape(substr: &str) -> Shape {
    let silent_removed = strip_silent(substr);
    Shape {
        stripped: strip_diacritics(&silent_removed).chars().collect(),
        loc: locate_diacritics(&silent_removed),
    }
}

impl Shape {
    fn at(&self, i: usize) -> Option<char> {
        self.stripped.get(i).copied()
    }

    fn mark(&self, i: usize) -> Option<char> {
        self.loc.get(i).copied().flatten()
    }

    fn jazm_at(&self, i: usize) -> bool {
        self.mark(i) == Some(JAZM)
    }

    fn short_vowel_at(&self, i: usize) -> bool {
        self.mark(i).is_some_and(is_short_vowel_mark)
    }

    /// Rest of the silent-removed spelling from base letter `from`
    /// onward, diacritics included.
    fn tail(&self, substr: &str, from: usize) -> String {
        let silent_removed = strip_silent(substr);
        let mut base_seen = 0usize;
        let mut out = String::new();
        for c in silent_removed.chars() {
            let is_mark = aruuz_core::character::is_diacritic(c);
            if !is_mark {
                base_seen += 1;
            }
            if base_seen > from {
                out.push(c);
            }
        }
        out
    }
}

/// The narrow vowel set used by the mid-word rules (ؤ excluded).
fn is_plain_vowel_or_heh(c: char) -> bool {
    matches!(c, ALEF | YEH | YEH_BARREE | WAW | HEH_GOAL)
}

fn is_long_vowel(c: char) -> bool {
    matches!(c, YEH | YEH_BARREE | WAW)
}

/// A noon anywhere before the last letter (candidate for nasal
/// adjustment).
fn contains_noon(stripped: &[char]) -> bool {
    stripped.len() > 1 && stripped[..stripped.len() - 1].contains(&NOON)
}

// ---------------------------------------------------------------------------
// Length 1 and 2
// ---------------------------------------------------------------------------

/// One letter: madd-alif is a long, anything else a short.
pub fn length_one_scan(substr: &str) -> String {
    if strip_diacritics(substr) == "آ" {
        "=".into()
    } else {
        "-".into()
    }
}

/// Two letters: madd-alif opens with a long; a final vowel-or-heh makes
/// the whole word flexible; otherwise it is one long syllable.
pub fn length_two_scan(substr: &str) -> String {
    let sh = shape(substr);
    if substr.starts_with(ALEF_MADD) {
        "=-".into()
    } else if sh.stripped.last().copied().is_some_and(is_vowel_or_heh) {
        "x".into()
    } else {
        "=".into()
    }
}

// ---------------------------------------------------------------------------
// Length 3
// ---------------------------------------------------------------------------

pub fn length_three_scan(substr: &str) -> String {
    let sh = shape(substr);
    match sh.stripped.len() {
        0 => return String::new(),
        1 => {
            return if sh.stripped[0] == ALEF_MADD {
                "-".into()
            } else {
                "=".into()
            }
        }
        2 => return length_two_scan(substr),
        _ => {}
    }

    let silent_removed = strip_silent(substr);
    let mut code: String = if has_diacritics(&silent_removed) {
        if sh.jazm_at(1) {
            if sh.at(0) == Some(ALEF_MADD) {
                "=--".into()
            } else {
                "=-".into()
            }
        } else if sh.short_vowel_at(1) {
            "-=".into()
        } else if sh.mark(1) == Some(SHADD) {
            "==".into()
        } else if sh.at(2) == Some(ALEF) {
            "-=".into()
        } else if sh.at(2).is_some_and(is_plain_vowel_or_heh) {
            if sh.at(1) == Some(ALEF) {
                "=-".into()
            } else {
                "-=".into()
            }
        } else if sh.at(1).is_some_and(|c| c == ALEF || is_long_vowel(c))
            || sh.at(2) == Some(HEH_GOAL)
        {
            "=-".into()
        } else {
            "=-".into()
        }
    } else if sh.stripped[0] == ALEF_MADD {
        "==".into()
    } else if sh.at(1) == Some(ALEF) {
        "=-".into()
    } else if sh.at(2) == Some(ALEF) {
        "-=".into()
    } else if sh.at(1).is_some_and(|c| is_long_vowel(c) || c == HEH_GOAL) {
        if sh.at(2) == Some(HEH_GOAL) {
            "=-".into()
        } else if sh.at(2).is_some_and(is_long_vowel) {
            "-=".into()
        } else {
            "=-".into()
        }
    } else if sh.at(2).is_some_and(|c| is_long_vowel(c) || c == HEH_GOAL) {
        "-=".into()
    } else {
        "-=".into()
    };

    if contains_noon(&sh.stripped) {
        code = noon_ghunna(substr, &code);
    }
    code
}

// ---------------------------------------------------------------------------
// Length 4
// ---------------------------------------------------------------------------

pub fn length_four_scan(substr: &str) -> String {
    let sh = shape(substr);
    let silent_removed = strip_silent(substr);

    let mut code: String = match sh.stripped.len() {
        0 => return String::new(),
        1 => length_one_scan(&silent_removed),
        2 => length_two_scan(&silent_removed),
        3 => length_three_scan(&silent_removed),
        _ => {
            if sh.stripped[0] == ALEF_MADD {
                let rest = sh.tail(substr, 1);
                format!("={}", length_three_scan(&rest))
            } else if has_diacritics(&silent_removed) {
                four_scan_marked(&sh)
            } else if sh.at(2).is_some_and(is_vowel_or_heh) {
                if sh.at(3) == Some(ALEF) {
                    "==".into()
                } else if sh.at(1).is_some_and(is_vowel_or_heh) {
                    "==".into()
                } else {
                    "-=-".into()
                }
            } else {
                "==".into()
            }
        }
    };

    if contains_noon(&sh.stripped) {
        code = noon_ghunna(substr, &code);
    }
    code
}

/// Four base letters with diacritics present.
fn four_scan_marked(sh: &Shape) -> String {
    if sh.at(1) == Some(ALEF) {
        if sh.jazm_at(2) {
            "=--".into()
        } else {
            "==".into()
        }
    } else if sh.at(2) == Some(ALEF) {
        "-=-".into()
    } else if sh.at(1) == Some(WAW) {
        if sh.at(3) == Some('ت') && sh.jazm_at(3) {
            "=-".into()
        } else if sh.short_vowel_at(1) {
            "-=-".into()
        } else if sh.jazm_at(2) {
            "=--".into()
        } else {
            "==".into()
        }
    } else if sh.at(1) == Some(YEH) {
        if sh.at(3) == Some('ت') && sh.jazm_at(3) {
            "=-".into()
        } else if sh.short_vowel_at(0) {
            if sh.short_vowel_at(1) {
                "-=-".into()
            } else if sh.jazm_at(2) {
                "=--".into()
            } else {
                "==".into()
            }
        } else {
            "==".into()
        }
    } else if sh.short_vowel_at(0) {
        if sh.short_vowel_at(1) {
            if sh.at(2).is_some_and(is_vowel_or_heh) {
                "-=-".into()
            } else if sh.jazm_at(2) {
                "-=-".into()
            } else {
                "--=".into()
            }
        } else if sh.jazm_at(1) {
            "==".into()
        } else if sh.jazm_at(2) {
            "-=-".into()
        } else if sh
            .at(3)
            .is_some_and(|c| c == ALEF || c == YEH)
        {
            "--=".into()
        } else {
            "-=-".into()
        }
    } else if sh.jazm_at(1) {
        if sh.jazm_at(2) {
            "==".into()
        } else {
            "=--".into()
        }
    } else if sh.jazm_at(2) {
        "-=-".into()
    } else if sh.short_vowel_at(2) {
        "==".into()
    } else if sh.at(2).is_some_and(is_vowel_or_heh) {
        "-=-".into()
    } else {
        "==".into()
    }
}

// ---------------------------------------------------------------------------
// Length 5+
// ---------------------------------------------------------------------------

pub fn length_five_scan(substr: &str) -> String {
    let sh = shape(substr);
    let silent_removed = strip_silent(substr);

    let mut code: String = match sh.stripped.len() {
        0 => return String::new(),
        1 => length_one_scan(&silent_removed),
        2 => length_two_scan(&silent_removed),
        3 => length_three_scan(substr),
        4 => length_four_scan(substr),
        _ => {
            if sh.stripped[0] == ALEF_MADD {
                let rest = sh.tail(substr, 2);
                format!("={}", length_four_scan(&rest))
            } else if has_diacritics(&silent_removed) {
                five_scan_marked(&sh, substr)
            } else {
                five_scan_unmarked(&sh)
            }
        }
    };

    if contains_noon(&sh.stripped) {
        code = noon_ghunna(substr, &code);
    }
    code
}

/// Five or more base letters with diacritics.
fn five_scan_marked(sh: &Shape, substr: &str) -> String {
    let alef_at = |i: usize| sh.at(i) == Some(ALEF);
    if alef_at(1) || alef_at(2) || alef_at(3) {
        if alef_at(2) {
            "-==".into()
        } else if alef_at(1) {
            // The alif closes the opening syllable; peel two letters and
            // rescan the remainder.
            format!("={}", length_three_scan(&sh.tail(substr, 2)))
        } else {
            // Alif in the fourth position.
            if sh.short_vowel_at(1) || sh.jazm_at(1) {
                "--=-".into()
            } else if sh.at(0) == Some('ب') {
                if sh
                    .at(1)
                    .is_some_and(|c| is_vowel_or_heh(c) || matches!(c, 'ر' | 'ن' | 'غ'))
                {
                    "==-".into()
                } else {
                    "--=-".into()
                }
            } else {
                "==-".into()
            }
        }
    } else if (1..=3).any(|i| sh.at(i).is_some_and(|c| c == WAW || c == YEH)) {
        if sh.at(1).is_some_and(|c| c == WAW || c == YEH) {
            if sh.jazm_at(1) {
                // Closed long first syllable; peel two letters.
                format!("={}", length_three_scan(&sh.tail(substr, 2)))
            } else if sh.short_vowel_at(1) {
                if sh.short_vowel_at(2) {
                    "--=-".into()
                } else {
                    "-==".into()
                }
            } else if sh.short_vowel_at(2) {
                if sh.short_vowel_at(3) {
                    "=-=".into()
                } else {
                    "==-".into()
                }
            } else if sh.jazm_at(2) {
                if sh.short_vowel_at(3) {
                    "=-=".into()
                } else if sh.jazm_at(3) {
                    "=---".into()
                } else {
                    // Three-letter closed syllable up front.
                    format!("={}", length_three_scan(&sh.tail(substr, 3)))
                }
            } else {
                format!("={}", length_three_scan(&sh.tail(substr, 2)))
            }
        } else if sh.at(2).is_some_and(|c| c == WAW || c == YEH) {
            if sh.short_vowel_at(2) {
                if sh.short_vowel_at(1) {
                    if sh.short_vowel_at(3) {
                        "-----".into()
                    } else {
                        "--=-".into()
                    }
                } else {
                    "--=-".into()
                }
            } else {
                "-==".into()
            }
        } else {
            // waw or yeh in the fourth position
            if sh.short_vowel_at(2) {
                if sh.short_vowel_at(1) {
                    if sh.short_vowel_at(3) {
                        "---=".into()
                    } else {
                        "--=-".into()
                    }
                } else {
                    "--=-".into()
                }
            } else if sh.jazm_at(2) {
                "-==".into()
            } else {
                "==-".into()
            }
        }
    } else if sh.short_vowel_at(1) {
        if sh.short_vowel_at(2) {
            if sh.at(4) == Some(ALEF) {
                "---=".into()
            } else {
                "--=-".into()
            }
        } else if sh.jazm_at(2) {
            "-==".into()
        } else {
            "-==".into()
        }
    } else if sh.jazm_at(1) {
        format!("={}", length_three_scan(&sh.tail(substr, 2)))
    } else if sh.short_vowel_at(2) {
        "=-=".into()
    } else {
        String::new()
    }
}

/// Five or more base letters, no diacritics: vowel letters drive the
/// split.
fn five_scan_unmarked(sh: &Shape) -> String {
    let alef_at = |i: usize| sh.at(i) == Some(ALEF);
    let vowel_at = |i: usize| sh.at(i).is_some_and(is_vowel_or_heh);

    let mut code: String;
    if alef_at(1) || alef_at(2) || alef_at(3) {
        if alef_at(2) {
            code = "-==".into();
        } else if alef_at(1) {
            if alef_at(3) {
                code = "==-".into();
            } else if vowel_at(3) {
                if vowel_at(4) {
                    code = "=-=".into();
                } else {
                    code = "==-".into();
                }
            } else if vowel_at(4) {
                code = "=-=".into();
            } else {
                code = "==-".into();
            }
        } else {
            code = "==-".into();
            if sh.at(0) == Some('ب')
                && !sh
                    .at(1)
                    .is_some_and(|c| is_vowel_or_heh(c) || matches!(c, 'ر' | 'ن' | 'غ'))
            {
                code = "--=-".into();
            }
        }
    } else if vowel_at(1) || vowel_at(2) || vowel_at(3) {
        if vowel_at(2) {
            code = "-==".into();
        } else if vowel_at(1) {
            if vowel_at(3) {
                code = "==-".into();
            } else if vowel_at(4) {
                code = "=-=".into();
            } else {
                code = "==-".into();
            }
        } else {
            code = "==-".into();
            if sh.at(0) == Some('ب')
                && !sh
                    .at(1)
                    .is_some_and(|c| is_vowel_or_heh(c) || matches!(c, 'ر' | 'ن' | 'غ'))
            {
                code = "--=-".into();
            }
            if sh.at(4) == Some('ت') && sh.at(3) == Some(YEH) {
                code.pop();
                code.push('=');
            }
        }
    } else {
        code = "==-".into();
        if sh.at(0) == Some('ب')
            && !sh
                .at(1)
                .is_some_and(|c| is_vowel_or_heh(c) || matches!(c, 'ر' | 'ن' | 'غ'))
        {
            code = "--=-".into();
        }
        if sh.at(0).is_some_and(|c| c == 'ت' || c == 'ش') {
            code = "-==".into();
        }
        if sh.at(4) == Some('ت') && sh.at(3) == Some(YEH) {
            code.pop();
            code.push('=');
        }
        if sh.at(4) == Some(ALEF) {
            code = "-==".into();
        } else if sh.at(4).is_some_and(is_vowel_or_heh) {
            code = "=-=".into();
        }
    }
    code
}

// ---------------------------------------------------------------------------
// Noon ghunna adjustment
// ---------------------------------------------------------------------------

/// Shorten codes around a jazm-marked noon after a vowel: the nasal
/// closes the syllable without adding weight (آنکھ، بانگ، ہونٹ ...).
pub fn noon_ghunna(word: &str, code: &str) -> String {
    let sh = shape(word);
    let mut code = code.to_string();

    let noon_jazm_at = |i: usize| sh.at(i) == Some(NOON) && sh.jazm_at(i);

    match sh.stripped.len() {
        3 => {
            if sh.at(0) == Some(ALEF_MADD) {
                if noon_jazm_at(1) && code == "=--" {
                    code = "=-".into();
                }
            } else if noon_jazm_at(1) && code == "=-" {
                if sh.at(0) == Some(ALEF) {
                    // انگ keeps its weight
                } else if sh.at(0).is_some_and(is_vowel_or_heh) {
                    code = "=".into();
                }
            }
        }
        4 => {
            if sh.at(0) == Some(ALEF_MADD) {
                if noon_jazm_at(1) && code == "=-=" {
                    code = "==".into();
                }
            } else if noon_jazm_at(1) {
                if code == "==" {
                    if sh.at(0) == Some(ALEF) {
                        // اندر keeps its weight
                    } else if sh.at(0).is_some_and(is_vowel_or_heh) {
                        code = "-=".into();
                    }
                }
            } else if noon_jazm_at(2) {
                if code == "=--" {
                    if sh.at(1).is_some_and(is_vowel_or_heh) {
                        code = "=-".into();
                    }
                } else if code == "=="
                    && sh.at(1).is_some_and(is_vowel_or_heh)
                    && !sh.at(3).is_some_and(is_vowel_or_heh)
                {
                    code = "=-".into();
                }
            }
        }
        5.. => {
            if sh.at(0) == Some(ALEF_MADD) {
                if noon_jazm_at(1) && code.chars().nth(1) == Some('-') {
                    code.remove(1);
                }
            } else if noon_jazm_at(1) {
                // انگیزی shapes keep their weight
            } else if noon_jazm_at(2) {
                if code.starts_with("=-") && sh.at(1).is_some_and(is_vowel_or_heh) {
                    code.remove(1);
                }
            } else if noon_jazm_at(3)
                && code.ends_with("--")
                && sh.at(2).is_some_and(is_vowel_or_heh)
                && code.len() > 2
                && code.as_bytes()[code.len() - 3] == b'='
            {
                code.pop();
            }
        }
        _ => {}
    }

    code
}
