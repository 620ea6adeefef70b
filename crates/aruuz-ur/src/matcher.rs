// From surviving tree paths to per-line results.

use aruuz_core::result::{LineResult, UNMATCHED};
use aruuz_core::word::Line;
use aruuz_meters::{special, Catalogue};

use crate::tree::ScanOutcome;

/// Convert the surviving paths of a line into [`LineResult`]s, one per
/// (path, meter) pair, deduplicated by `(meter_name, full_code)` so
/// catalogue rows sharing a display name collapse unless they scanned
/// differently.
///
/// A line with no surviving path yields a single unmatched result whose
/// code concatenates each word's first reading.
pub fn line_results(line: &Line, outcome: &ScanOutcome, catalogue: &Catalogue) -> Vec<LineResult> {
    let explain = flatten_explain(line);
    let mut results: Vec<LineResult> = Vec::new();
    let mut seen: Vec<(String, String)> = Vec::new();

    for path in &outcome.paths {
        let codes = outcome.path_codes(path);
        let word_taqti: Vec<String> = codes.iter().map(|c| (*c).to_string()).collect();
        let full_code: String = codes.concat();

        for &m in &path.meters {
            let name = catalogue.name(m);
            push_unique(
                &mut results,
                &mut seen,
                LineResult {
                    line: line.original.clone(),
                    meter_name: name.to_string(),
                    feet: catalogue.afail(catalogue.pattern(m)),
                    word_taqti: word_taqti.clone(),
                    full_code: full_code.clone(),
                    is_dominant: false,
                    partial: outcome.partial,
                    explain: explain.clone(),
                },
            );
        }

        for &k in &path.special {
            let name = catalogue.special_name(k);
            let feet = if k > 7 {
                special::zamzama_feet(&full_code)
            } else {
                special::hindi_feet(k, &full_code)
            }
            .unwrap_or_else(|| catalogue.special_afail(k).to_string());
            push_unique(
                &mut results,
                &mut seen,
                LineResult {
                    line: line.original.clone(),
                    meter_name: name.to_string(),
                    feet,
                    word_taqti: word_taqti.clone(),
                    full_code: full_code.clone(),
                    is_dominant: false,
                    partial: outcome.partial,
                    explain: explain.clone(),
                },
            );
        }
    }

    if results.is_empty() && !line.words.is_empty() {
        let word_taqti: Vec<String> = line
            .words
            .iter()
            .filter(|w| !w.elided)
            .map(|w| w.codes.first().cloned().unwrap_or_else(|| "-".to_string()))
            .collect();
        let full_code = word_taqti.concat();
        results.push(LineResult {
            line: line.original.clone(),
            meter_name: UNMATCHED.to_string(),
            feet: String::new(),
            word_taqti,
            full_code,
            is_dominant: false,
            partial: outcome.partial,
            explain,
        });
    }

    results
}

fn push_unique(
    results: &mut Vec<LineResult>,
    seen: &mut Vec<(String, String)>,
    result: LineResult,
) {
    let key = (result.meter_name.clone(), result.full_code.clone());
    if seen.contains(&key) {
        return;
    }
    seen.push(key);
    results.push(result);
}

fn flatten_explain(line: &Line) -> Vec<String> {
    let mut out = Vec::new();
    for word in &line.words {
        for note in word.explain.base.iter().chain(word.explain.prosody.iter()) {
            out.push(format!("{}: {}", word.surface, note));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{scan_line, DEFAULT_NODE_BUDGET};
    use aruuz_core::word::Word;

    fn word_with_codes(text: &str, codes: &[&str]) -> Word {
        let mut w = Word::new(text);
        for c in codes {
            w.push_code((*c).to_string(), String::new(), String::new());
        }
        w
    }

    fn catalogue() -> Catalogue {
        Catalogue::new().unwrap()
    }

    #[test]
    fn results_carry_meter_name_and_feet() {
        let cat = catalogue();
        let line = Line {
            original: "مفاعیلن مفاعیلن مفاعیلن مفاعیلن".into(),
            words: vec![
                word_with_codes("مفاعیلن", &["-==="]),
                word_with_codes("مفاعیلن", &["-==="]),
                word_with_codes("مفاعیلن", &["-==="]),
                word_with_codes("مفاعیلن", &["-==="]),
            ],
        };
        let outcome = scan_line(&line, &cat, DEFAULT_NODE_BUDGET);
        let results = line_results(&line, &outcome, &cat);
        assert_eq!(results.len(), 1);
        let r = &results[0];
        assert_eq!(r.meter_name, "ہزج مثمن سالم");
        assert_eq!(r.feet, "مفاعیلن مفاعیلن مفاعیلن مفاعیلن");
        assert_eq!(r.full_code, "-===-===-===-===");
        assert_eq!(r.word_taqti.len(), 4);
        assert!(!r.is_dominant);
    }

    #[test]
    fn shared_names_deduplicate() {
        let cat = catalogue();
        // ہزج مربع سالم appears twice in the catalogue with an identical
        // pattern; one result must survive.
        let line = Line {
            original: String::new(),
            words: vec![
                word_with_codes("مفاعیلن", &["-==="]),
                word_with_codes("مفاعیلن", &["-==="]),
            ],
        };
        let outcome = scan_line(&line, &cat, DEFAULT_NODE_BUDGET);
        let results = line_results(&line, &outcome, &cat);
        let count = results
            .iter()
            .filter(|r| r.meter_name == "ہزج مربع سالم")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn unmatched_line_gets_fallback_result() {
        let cat = catalogue();
        let line = Line {
            original: "آ".into(),
            words: vec![word_with_codes("آ", &["="])],
        };
        let outcome = scan_line(&line, &cat, DEFAULT_NODE_BUDGET);
        let results = line_results(&line, &outcome, &cat);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].meter_name, UNMATCHED);
        assert_eq!(results[0].full_code, "=");
        assert_eq!(results[0].feet, "");
    }

    #[test]
    fn explain_notes_are_flattened_with_word_prefix() {
        let cat = catalogue();
        let mut w = word_with_codes("دل", &["="]);
        w.explain.base.push("lexicon (master): =".into());
        let line = Line {
            original: "دل".into(),
            words: vec![w],
        };
        let outcome = scan_line(&line, &cat, DEFAULT_NODE_BUDGET);
        let results = line_results(&line, &outcome, &cat);
        assert!(results[0].explain[0].starts_with("دل: "));
    }
}
