// The per-line code tree: Cartesian product of per-word code choices,
// searched depth-first with meter pruning.
//
// Nodes live in a flat arena with parent indices; a branch only
// materializes while some meter (classical or special) is still viable
// along it, so the arena stays far below the worst-case product. A
// configurable node budget bounds pathological lines; exceeding it
// returns the paths found so far flagged partial.

use aruuz_core::word::Line;
use aruuz_meters::special::{self, SpecialTracker};
use aruuz_meters::{matching, Catalogue};

/// Default per-line budget on visited choice nodes.
pub const DEFAULT_NODE_BUDGET: usize = 100_000;

/// One arena node: a chosen code for one word.
#[derive(Debug, Clone)]
pub struct Node {
    pub code: String,
    /// Index of the word in the line.
    pub word: usize,
    /// Index of the code within the word's choice list.
    pub choice: usize,
    pub parent: Option<usize>,
}

/// One complete traversal of the line with its surviving meters.
#[derive(Debug, Clone)]
pub struct ScanPath {
    /// Arena index of the final word's node; the full path is recovered
    /// through parent links.
    pub terminal: usize,
    /// Classical catalogue indices that survived the final length check.
    pub meters: Vec<usize>,
    /// Special (Hindi/Zamzama) meter indices matched by the path.
    pub special: Vec<usize>,
}

/// Result of scanning one line's tree.
pub struct ScanOutcome {
    pub nodes: Vec<Node>,
    pub paths: Vec<ScanPath>,
    pub partial: bool,
}

impl ScanOutcome {
    /// The per-word chosen codes of a path, in reading order.
    pub fn path_codes(&self, path: &ScanPath) -> Vec<&str> {
        let mut rev = Vec::new();
        let mut cursor = Some(path.terminal);
        while let Some(i) = cursor {
            rev.push(self.nodes[i].code.as_str());
            cursor = self.nodes[i].parent;
        }
        rev.reverse();
        rev
    }

    /// The word indices of a path, parallel to [`Self::path_codes`].
    pub fn path_words(&self, path: &ScanPath) -> Vec<usize> {
        let mut rev = Vec::new();
        let mut cursor = Some(path.terminal);
        while let Some(i) = cursor {
            rev.push(self.nodes[i].word);
            cursor = self.nodes[i].parent;
        }
        rev.reverse();
        rev
    }
}

/// Build and search the code tree of a line.
///
/// Words without any code choice contribute nothing and are skipped, so
/// an unrecognized word degrades the line instead of blocking it.
pub fn scan_line(line: &Line, catalogue: &Catalogue, budget: usize) -> ScanOutcome {
    let order: Vec<usize> = line
        .scanned_indices()
        .into_iter()
        .filter(|&i| !line.words[i].choices().is_empty())
        .collect();

    let mut search = Search {
        line,
        catalogue,
        order,
        budget,
        visited: 0,
        partial: false,
        nodes: Vec::new(),
        paths: Vec::new(),
    };

    if !search.order.is_empty() {
        let alive: Vec<usize> = (0..catalogue.len()).collect();
        search.descend(0, None, 0, &alive, SpecialTracker::start());
    }

    ScanOutcome {
        nodes: search.nodes,
        paths: search.paths,
        partial: search.partial,
    }
}

struct Search<'a> {
    line: &'a Line,
    catalogue: &'a Catalogue,
    order: Vec<usize>,
    budget: usize,
    visited: usize,
    partial: bool,
    nodes: Vec<Node>,
    paths: Vec<ScanPath>,
}

impl Search<'_> {
    fn descend(
        &mut self,
        depth: usize,
        parent: Option<usize>,
        prefix_len: usize,
        alive: &[usize],
        tracker: SpecialTracker,
    ) {
        if depth == self.order.len() {
            self.complete(parent, alive);
            return;
        }

        let word = &self.line.words[self.order[depth]];
        let choices: Vec<String> = word.choices().iter().map(|c| c.to_string()).collect();

        for (choice, code) in choices.iter().enumerate() {
            if self.partial {
                return;
            }
            self.visited += 1;
            if self.visited > self.budget {
                self.partial = true;
                return;
            }

            let surviving: Vec<usize> = alive
                .iter()
                .copied()
                .filter(|&m| matching::is_match(self.catalogue, m, prefix_len, code))
                .collect();
            let next_tracker = tracker.advance(code);

            if surviving.is_empty() && !next_tracker.alive() {
                continue;
            }

            self.nodes.push(Node {
                code: code.clone(),
                word: self.order[depth],
                choice,
                parent,
            });
            let id = self.nodes.len() - 1;
            self.descend(
                depth + 1,
                Some(id),
                prefix_len + code.len(),
                &surviving,
                next_tracker,
            );
        }
    }

    fn complete(&mut self, terminal: Option<usize>, alive: &[usize]) {
        let Some(terminal) = terminal else {
            return;
        };

        let mut full = String::new();
        let mut cursor = Some(terminal);
        let mut rev = Vec::new();
        while let Some(i) = cursor {
            rev.push(i);
            cursor = self.nodes[i].parent;
        }
        for &i in rev.iter().rev() {
            full.push_str(&self.nodes[i].code);
        }

        let meters = matching::check_code_length(self.catalogue, &full, alive);
        let special = special::detect(&full);
        if meters.is_empty() && special.is_empty() {
            return;
        }
        self.paths.push(ScanPath {
            terminal,
            meters,
            special,
        });
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

    fn line_of(specs: &[(&str, &[&str])]) -> Line {
        Line {
            original: specs.iter().map(|(t, _)| *t).collect::<Vec<_>>().join(" "),
            words: specs
                .iter()
                .map(|(t, codes)| word_with_codes(t, codes))
                .collect(),
        }
    }

    fn catalogue() -> Catalogue {
        Catalogue::new().unwrap()
    }

    #[test]
    fn single_choice_line_matches_hazaj() {
        let cat = catalogue();
        let line = line_of(&[
            ("مفاعیلن", &["-==="]),
            ("مفاعیلن", &["-==="]),
            ("مفاعیلن", &["-==="]),
            ("مفاعیلن", &["-==="]),
        ]);
        let outcome = scan_line(&line, &cat, DEFAULT_NODE_BUDGET);
        assert!(!outcome.partial);
        assert_eq!(outcome.paths.len(), 1);
        let names: Vec<&str> = outcome.paths[0]
            .meters
            .iter()
            .map(|&m| cat.name(m))
            .collect();
        assert!(names.contains(&"ہزج مثمن سالم"), "{names:?}");
    }

    #[test]
    fn path_codes_recover_choices() {
        let cat = catalogue();
        let line = line_of(&[("مفاعیلن", &["-==="]), ("فعولن", &["-=="])]);
        let outcome = scan_line(&line, &cat, DEFAULT_NODE_BUDGET);
        for path in &outcome.paths {
            let codes = outcome.path_codes(path);
            assert_eq!(codes.len(), 2);
            assert_eq!(codes[0], "-===");
            assert_eq!(codes[1], "-==");
        }
    }

    #[test]
    fn ambiguous_words_fork_paths() {
        let cat = catalogue();
        // Each word may scan long-long-short-long or long-short.
        let line = line_of(&[
            ("ا", &["-===", "-=-="]),
            ("ب", &["-===", "-=-="]),
            ("ج", &["-===", "-=-="]),
            ("د", &["-===", "-=-="]),
        ]);
        let outcome = scan_line(&line, &cat, DEFAULT_NODE_BUDGET);
        // All-long, all-short and the alternating mixtures survive.
        assert!(outcome.paths.len() >= 3, "paths: {}", outcome.paths.len());
        for path in &outcome.paths {
            assert!(!path.meters.is_empty() || !path.special.is_empty());
        }
    }

    #[test]
    fn dead_branches_are_pruned() {
        let cat = catalogue();
        // A code shape no meter starts with.
        let line = line_of(&[("ا", &["----"]), ("ب", &["----"])]);
        let outcome = scan_line(&line, &cat, DEFAULT_NODE_BUDGET);
        assert!(outcome.paths.is_empty());
    }

    #[test]
    fn wordless_line_yields_nothing() {
        let cat = catalogue();
        let line = Line {
            original: String::new(),
            words: vec![],
        };
        let outcome = scan_line(&line, &cat, DEFAULT_NODE_BUDGET);
        assert!(outcome.paths.is_empty());
        assert!(!outcome.partial);
    }

    #[test]
    fn codeless_word_is_skipped() {
        let cat = catalogue();
        let line = line_of(&[
            ("مفاعیلن", &["-==="]),
            ("نامعلوم", &[]),
            ("مفاعیلن", &["-==="]),
        ]);
        let outcome = scan_line(&line, &cat, DEFAULT_NODE_BUDGET);
        assert!(!outcome.paths.is_empty());
        for path in &outcome.paths {
            assert_eq!(outcome.path_words(path), vec![0, 2]);
        }
    }

    #[test]
    fn budget_exhaustion_sets_partial() {
        let cat = catalogue();
        let line = line_of(&[
            ("ا", &["-===", "-=-="]),
            ("ب", &["-===", "-=-="]),
            ("ج", &["-===", "-=-="]),
            ("د", &["-===", "-=-="]),
        ]);
        let outcome = scan_line(&line, &cat, 3);
        assert!(outcome.partial);
    }

    #[test]
    fn graft_choices_enter_the_tree() {
        let cat = catalogue();
        let mut line = line_of(&[("دل", &["="]), ("ان", &["===-===-===-==="])]);
        line.words[0].push_graft("-".to_string());
        let outcome = scan_line(&line, &cat, DEFAULT_NODE_BUDGET);
        // Only the grafted short opening completes the hazaj shape; the
        // plain long opening fits no pattern.
        assert!(!outcome.paths.is_empty());
        assert!(outcome
            .paths
            .iter()
            .all(|p| outcome.path_codes(p)[0] == "-"));
    }

    #[test]
    fn traversal_is_deterministic() {
        let cat = catalogue();
        let line = line_of(&[
            ("ا", &["-===", "-=-="]),
            ("ب", &["-===", "-=-="]),
            ("ج", &["-==="]),
            ("د", &["-==="]),
        ]);
        let a = scan_line(&line, &cat, DEFAULT_NODE_BUDGET);
        let b = scan_line(&line, &cat, DEFAULT_NODE_BUDGET);
        let codes_a: Vec<Vec<String>> = a
            .paths
            .iter()
            .map(|p| a.path_codes(p).iter().map(|s| s.to_string()).collect())
            .collect();
        let codes_b: Vec<Vec<String>> = b
            .paths
            .iter()
            .map(|p| b.path_codes(p).iter().map(|s| s.to_string()).collect())
            .collect();
        assert_eq!(codes_a, codes_b);
    }
}
