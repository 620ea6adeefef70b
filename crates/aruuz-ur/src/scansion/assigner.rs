// Code assignment: lexicon first, length heuristics as fallback,
// compound splitting as a last resort.

use aruuz_core::character::{strip_diacritics, strip_silent, ALEF, ALEF_MADD};
use aruuz_core::word::Word;

use crate::lexicon::{EntrySource, Lexicon, LexiconEntry};
use crate::scansion::scanners::length_two_scan;
use crate::scansion::{code_from_taqti, code_heuristic};

/// Assigns candidate codes to words. Owns the (optional) lexicon; with
/// no lexicon every word goes through the heuristic path.
pub struct WordAssigner {
    lexicon: Option<Box<dyn Lexicon>>,
}

impl WordAssigner {
    pub fn new(lexicon: Option<Box<dyn Lexicon>>) -> Self {
        WordAssigner { lexicon }
    }

    pub fn has_lexicon(&self) -> bool {
        self.lexicon.is_some()
    }

    /// Populate `word.codes`. Words that already carry codes are left
    /// alone.
    pub fn assign(&self, word: &mut Word) {
        if !word.codes.is_empty() {
            return;
        }

        if self.lookup_into(word) {
            self.three_letter_variation(word);
            return;
        }

        let code = code_heuristic(&word.raw);
        let bare_len = strip_diacritics(&word.raw).chars().count();

        if code.is_empty() && bare_len > 4 && self.split_compound(word) {
            return;
        }

        if !code.is_empty() {
            word.explain
                .base
                .push(format!("heuristic for {} letters gave {}", bare_len, code));
            word.push_code(code, String::new(), String::new());
        } else {
            word.explain
                .base
                .push("no code could be derived".to_string());
        }
    }

    /// Lexicon stage. Returns true when at least one code was adopted.
    /// Lookup errors degrade to heuristics and leave a note.
    fn lookup_into(&self, word: &mut Word) -> bool {
        let Some(lexicon) = &self.lexicon else {
            return false;
        };
        let entries = match lexicon.lookup(&word.raw) {
            Ok(entries) => entries,
            Err(err) => {
                word.explain
                    .base
                    .push(format!("lexicon unavailable ({err}); using heuristics"));
                return false;
            }
        };
        if entries.is_empty() {
            return false;
        }
        self.adopt_entries(word, &entries);
        !word.codes.is_empty()
    }

    fn adopt_entries(&self, word: &mut Word, entries: &[LexiconEntry]) {
        for entry in entries {
            let label = match entry.source {
                EntrySource::Exception => "exceptions",
                EntrySource::Master => "master",
                EntrySource::Plural => "plurals",
                EntrySource::Variation => "variations",
            };
            match &entry.code {
                Some(code) => {
                    word.explain
                        .base
                        .push(format!("lexicon ({label}): {code}"));
                    word.lexicon_ids.push(entry.id);
                    word.push_code(code.clone(), String::new(), String::new());
                }
                None => {
                    let taqti = entry.taqti.clone().unwrap_or_default();
                    let code =
                        code_from_taqti(&word.raw, &taqti, &entry.language, word.modified);
                    if code.is_empty() {
                        continue;
                    }
                    word.explain
                        .base
                        .push(format!("lexicon ({label}): {taqti} -> {code}"));
                    word.lexicon_ids.push(entry.id);
                    if entry.is_varied {
                        word.is_varied = true;
                    }
                    if !entry.language.is_empty() {
                        word.languages.push(entry.language.clone());
                    }
                    word.push_code(code, taqti, entry.muarrab.clone());
                }
            }
        }
    }

    /// For a three-letter word ending in alif found in the lexicon, a
    /// second reading is idiomatic: madd-initial words may open with two
    /// longs, others with short-long.
    fn three_letter_variation(&self, word: &mut Word) {
        let bare = strip_diacritics(&strip_silent(&word.raw));
        let chars: Vec<char> = bare.chars().collect();
        if chars.len() != 3 || chars[2] != ALEF || word.codes.is_empty() {
            return;
        }
        let first = word.codes[0].clone();
        let alternative = if chars[0] == ALEF_MADD {
            if first != "==" && first != "=x" {
                Some("==")
            } else {
                None
            }
        } else if first != "-=" && first != "-x" {
            Some("-=")
        } else {
            None
        };
        if let Some(alt) = alternative {
            word.lexicon_ids.push(-1);
            word.explain
                .base
                .push(format!("alif-final reading also allows {alt}"));
            word.push_code(alt.to_string(), String::new(), String::new());
        }
    }

    /// Try every split of the surface into two halves: the first half
    /// must be a lexicon word (or very short), the second is assigned
    /// recursively. Successful splits contribute the Cartesian product
    /// of the halves' codes.
    fn split_compound(&self, word: &mut Word) -> bool {
        if self.lexicon.is_none() {
            return false;
        }
        let stripped: Vec<char> = strip_diacritics(&word.raw).chars().collect();
        if stripped.len() < 3 {
            return false;
        }

        for i in 1..stripped.len() - 1 {
            let first_text: String = stripped[..i].iter().collect();
            let second_text: String = stripped[i..].iter().collect();

            let mut first = Word::new(&first_text);
            self.lookup_into(&mut first);

            let mut second = Word::new(&second_text);
            second.modified = true;
            self.assign(&mut second);

            let mut viable = false;
            if !first.lexicon_ids.is_empty() {
                if second.lexicon_ids.is_empty() {
                    // Only a very short residue may ride on heuristics;
                    // anything longer must itself be a lexicon word.
                    if second.surface.chars().count() <= 2 {
                        let code = length_two_scan(&second.raw);
                        second.push_code(code, String::new(), String::new());
                        viable = !second.codes.is_empty();
                    }
                } else {
                    viable = true;
                }
            } else if !second.lexicon_ids.is_empty() && first.surface.chars().count() <= 2 {
                let code = length_two_scan(&first.raw);
                first.push_code(code, String::new(), String::new());
                viable = true;
            }

            if viable && !first.codes.is_empty() && !second.codes.is_empty() {
                for fc in &first.codes {
                    for sc in &second.codes {
                        word.push_code(format!("{fc}{sc}"), String::new(), String::new());
                    }
                }
                word.modified = true;
                word.explain.base.push(format!(
                    "compound split {first_text} + {second_text} ({} codes)",
                    word.codes.len()
                ));
                return !word.codes.is_empty();
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::MemoryLexicon;

    fn assigner_with(lex: MemoryLexicon) -> WordAssigner {
        WordAssigner::new(Some(Box::new(lex)))
    }

    #[test]
    fn lexicon_codes_win_over_heuristics() {
        let mut lex = MemoryLexicon::new();
        lex.insert_codes("دل", &["-="]);
        let assigner = assigner_with(lex);
        let mut w = Word::new("دل");
        assigner.assign(&mut w);
        assert_eq!(w.codes, vec!["-="]);
        assert!(w.explain.base[0].contains("exceptions"));
    }

    #[test]
    fn heuristic_fallback_without_lexicon() {
        let assigner = WordAssigner::new(None);
        let mut w = Word::new("دل");
        assigner.assign(&mut w);
        assert_eq!(w.codes, vec!["="]);
        assert!(w.explain.base[0].contains("heuristic"));
    }

    #[test]
    fn heuristic_fallback_on_missing_word() {
        let assigner = assigner_with(MemoryLexicon::new());
        let mut w = Word::new("قلم");
        assigner.assign(&mut w);
        assert_eq!(w.codes, vec!["-="]);
    }

    #[test]
    fn assign_is_idempotent() {
        let assigner = WordAssigner::new(None);
        let mut w = Word::new("قلم");
        assigner.assign(&mut w);
        let before = w.codes.clone();
        assigner.assign(&mut w);
        assert_eq!(w.codes, before);
    }

    #[test]
    fn taqti_rows_are_scanned() {
        let mut lex = MemoryLexicon::new();
        lex.insert_taqti("ستارہ", "س تا رہ", "");
        let assigner = assigner_with(lex);
        let mut w = Word::new("ستارہ");
        assigner.assign(&mut w);
        assert_eq!(w.codes, vec!["-xx"]);
        assert_eq!(w.taqti, vec!["س تا رہ"]);
    }

    #[test]
    fn three_letter_alif_gets_second_reading() {
        let mut lex = MemoryLexicon::new();
        lex.insert_codes("دیا", &["=x"]);
        let assigner = assigner_with(lex);
        let mut w = Word::new("دیا");
        assigner.assign(&mut w);
        assert_eq!(w.codes, vec!["=x", "-="]);
    }

    #[test]
    fn three_letter_variation_skipped_when_present() {
        let mut lex = MemoryLexicon::new();
        lex.insert_codes("دیا", &["-="]);
        let assigner = assigner_with(lex);
        let mut w = Word::new("دیا");
        assigner.assign(&mut w);
        assert_eq!(w.codes, vec!["-="]);
    }

    #[test]
    fn explain_records_every_source() {
        let mut lex = MemoryLexicon::new();
        lex.insert_codes("دیا", &["=x"]);
        let assigner = assigner_with(lex);
        let mut w = Word::new("دیا");
        assigner.assign(&mut w);
        assert_eq!(w.explain.base.len(), 2);
    }
}
