// Inter-word prosodic rules: Al, Izafat, Ataf, Grafting.
//
// Applied left to right after every word has its base codes. Each rule
// reads a word pair and appends alternatives; pre-existing codes are
// never removed or rewritten, so every alternative stays traceable to
// the rule that created it. Implausible combinations are left for the
// meter pruning to reject.

use aruuz_core::character::{
    is_vowel_or_heh, strip_silent, ALEF, ALEF_MADD, HAMZA_ABOVE, HEH_GOAL_HAMZA, LAM, ZER,
};
use aruuz_core::symbols::{FLEX, LONG, SHORT};
use aruuz_core::word::Line;

/// Apply all four rules in their fixed order.
pub fn apply(line: &mut Line) {
    al_absorption(line);
    izafat(line);
    ataf(line);
    grafting(line);
}

/// Last letter of the scansion-relevant spelling.
fn final_letter(surface: &str) -> Option<char> {
    strip_silent(surface).chars().last()
}

/// Definite article absorption: when the next word opens with `ال` and
/// the current word ends in a consonant, the article's alif carries no
/// syllable. The current word's ending absorbs a short (final short
/// lengthens; a final long gains a trailing short) and the article's
/// opening short may drop.
fn al_absorption(line: &mut Line) {
    for i in 0..line.words.len().saturating_sub(1) {
        let next_chars: Vec<char> = line.words[i + 1].surface.chars().collect();
        if next_chars.len() < 2 || next_chars[0] != ALEF || next_chars[1] != LAM {
            continue;
        }
        let Some(last) = final_letter(&line.words[i].surface) else {
            continue;
        };
        if is_vowel_or_heh(last) {
            continue;
        }

        let word = &mut line.words[i];
        for code in word.codes.clone() {
            let alt = match code.chars().last() {
                Some(SHORT) => {
                    let mut a = code.clone();
                    a.pop();
                    a.push(LONG);
                    a
                }
                Some(LONG) | Some(FLEX) => format!("{code}-"),
                _ => continue,
            };
            word.push_code(alt, String::new(), String::new());
        }
        word.explain
            .prosody
            .push("article ال absorbed into the word's ending".to_string());

        let next = &mut line.words[i + 1];
        for code in next.codes.clone() {
            if let Some(rest) = code.strip_prefix(SHORT) {
                if !rest.is_empty() {
                    next.push_code(rest.to_string(), String::new(), String::new());
                }
            }
        }
        next.explain
            .prosody
            .push("article ال may drop its opening syllable".to_string());
    }
}

/// Izafat: a word whose spelling ends with the izafat marker gains one
/// short mora at its end.
fn izafat(line: &mut Line) {
    for word in &mut line.words {
        let Some(last) = word.raw.chars().last() else {
            continue;
        };
        if last != ZER && last != HAMZA_ABOVE && last != HEH_GOAL_HAMZA {
            continue;
        }
        for code in word.codes.clone() {
            word.push_code(format!("{code}-"), String::new(), String::new());
        }
        word.explain
            .prosody
            .push("izafat adds a short mora".to_string());
    }
}

/// Ataf: the conjunction و fuses with the preceding word as one short
/// mora; the conjunction itself drops out of scansion.
fn ataf(line: &mut Line) {
    for i in 1..line.words.len() {
        if line.words[i].surface != "و" || line.words[i].elided {
            continue;
        }
        let prev = &mut line.words[i - 1];
        for code in prev.codes.clone() {
            prev.push_code(format!("{code}-"), String::new(), String::new());
        }
        prev.explain
            .prosody
            .push("conjunction و fused as a short mora".to_string());

        let conj = &mut line.words[i];
        conj.elided = true;
        conj.explain
            .prosody
            .push("fused into the preceding word".to_string());
    }
}

/// Vowel grafting: a consonant-final word followed by an alif-initial
/// word may re-syllabify across the boundary, shedding the weight its
/// final consonant carried. The shortened readings live in
/// `graft_codes` so a match can be traced to the graft.
fn grafting(line: &mut Line) {
    let scanned = line.scanned_indices();
    for pair in scanned.windows(2) {
        let (p, n) = (pair[0], pair[1]);
        let Some(first) = line.words[n].raw.chars().next() else {
            continue;
        };
        if first != ALEF && first != ALEF_MADD {
            continue;
        }
        let Some(last) = final_letter(&line.words[p].surface) else {
            continue;
        };
        if is_vowel_or_heh(last) {
            continue;
        }

        let prev = &mut line.words[p];
        let mut grafted = false;
        for code in prev.codes.clone() {
            match code.chars().last() {
                Some(LONG) => {
                    let mut alt = code.clone();
                    alt.pop();
                    alt.push(SHORT);
                    prev.push_graft(alt);
                    grafted = true;
                }
                Some(SHORT) => {
                    let mut alt = code.clone();
                    alt.pop();
                    if !alt.is_empty() {
                        prev.push_graft(alt);
                        grafted = true;
                    }
                }
                _ => {}
            }
        }
        if grafted {
            prev.explain
                .prosody
                .push("final consonant may graft onto the next word's alif".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aruuz_core::word::Word;

    fn word_with_codes(text: &str, codes: &[&str]) -> Word {
        let mut w = Word::new(text);
        for c in codes {
            w.push_code((*c).to_string(), String::new(), String::new());
        }
        w
    }

    fn line_of(words: Vec<Word>) -> Line {
        Line {
            original: String::new(),
            words,
        }
    }

    #[test]
    fn al_rule_absorbs_into_consonant_final_word() {
        let mut line = line_of(vec![
            word_with_codes("حرف", &["=-"]),
            word_with_codes("الم", &["-="]),
        ]);
        al_absorption(&mut line);
        // Final short lengthened.
        assert!(line.words[0].codes.contains(&"==".to_string()));
        // Original kept.
        assert!(line.words[0].codes.contains(&"=-".to_string()));
        // Article may drop its opening short.
        assert!(line.words[1].codes.contains(&"=".to_string()));
        // Exactly one absorption note.
        let notes = line.words[0]
            .explain
            .prosody
            .iter()
            .filter(|n| n.contains("ال"))
            .count();
        assert_eq!(notes, 1);
    }

    #[test]
    fn al_rule_lengthens_long_ending_with_short() {
        let mut line = line_of(vec![
            word_with_codes("دل", &["="]),
            word_with_codes("الم", &["-="]),
        ]);
        al_absorption(&mut line);
        assert!(line.words[0].codes.contains(&"=-".to_string()));
    }

    #[test]
    fn al_rule_needs_consonant_final_predecessor() {
        let mut line = line_of(vec![
            word_with_codes("کی", &["x"]),
            word_with_codes("الم", &["-="]),
        ]);
        al_absorption(&mut line);
        assert_eq!(line.words[0].codes, vec!["x"]);
        assert!(line.words[0].explain.prosody.is_empty());
    }

    #[test]
    fn izafat_appends_short() {
        let mut line = line_of(vec![word_with_codes("شوخی\u{0650}", &["=x"])]);
        izafat(&mut line);
        assert_eq!(line.words[0].codes, vec!["=x", "=x-"]);
        assert_eq!(line.words[0].explain.prosody.len(), 1);
    }

    #[test]
    fn izafat_ignores_plain_words() {
        let mut line = line_of(vec![word_with_codes("شوخی", &["=x"])]);
        izafat(&mut line);
        assert_eq!(line.words[0].codes, vec!["=x"]);
    }

    #[test]
    fn ataf_elides_conjunction() {
        let mut line = line_of(vec![
            word_with_codes("گل", &["="]),
            word_with_codes("و", &["-"]),
            word_with_codes("بلبل", &["=="]),
        ]);
        ataf(&mut line);
        assert!(line.words[1].elided);
        assert!(line.words[0].codes.contains(&"=-".to_string()));
        assert_eq!(line.scanned_indices(), vec![0, 2]);
    }

    #[test]
    fn grafting_shortens_previous_codes() {
        let mut line = line_of(vec![
            word_with_codes("دل", &["="]),
            word_with_codes("اثر", &["-="]),
        ]);
        grafting(&mut line);
        assert_eq!(line.words[0].codes, vec!["="]);
        assert_eq!(line.words[0].graft_codes, vec!["-"]);
    }

    #[test]
    fn grafting_skips_vowel_final_words() {
        let mut line = line_of(vec![
            word_with_codes("کی", &["x"]),
            word_with_codes("اثر", &["-="]),
        ]);
        grafting(&mut line);
        assert!(line.words[0].graft_codes.is_empty());
    }

    #[test]
    fn rules_never_remove_existing_codes() {
        let mut line = line_of(vec![
            word_with_codes("حرف", &["=-"]),
            word_with_codes("الفت", &["=="]),
            word_with_codes("و", &["-"]),
            word_with_codes("ادب", &["-="]),
        ]);
        let before: Vec<Vec<String>> = line.words.iter().map(|w| w.codes.clone()).collect();
        apply(&mut line);
        for (w, old) in line.words.iter().zip(before) {
            for code in &old {
                assert!(w.codes.contains(code), "code {code} was removed");
            }
        }
    }
}
