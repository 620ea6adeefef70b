// ScanHandle: top-level integration point for Urdu scansion.
//
// Owns the meter catalogue, the word assigner (with its optional
// lexicon) and the traversal budget, and exposes the one-call scan API
// over couplets. The handle carries no per-call mutable state, so one
// instance may serve any number of sequential scans.

use aruuz_core::result::{LineResult, ScanOptions};
use aruuz_core::word::Word;
use aruuz_meters::{Catalogue, CatalogueError};

use crate::lexicon::Lexicon;
use crate::scansion::assigner::WordAssigner;
use crate::scansion::prosodic;
use crate::tree::{self, DEFAULT_NODE_BUDGET};
use crate::{matcher, scoring, text};

/// The scansion engine.
pub struct ScanHandle {
    catalogue: Catalogue,
    assigner: WordAssigner,
    node_budget: usize,
}

impl ScanHandle {
    /// Create a handle. The catalogue self-check runs here; failure is
    /// fatal at startup, not something to recover from mid-scan.
    /// Passing no lexicon puts every word on the heuristic path.
    pub fn new(lexicon: Option<Box<dyn Lexicon>>) -> Result<Self, CatalogueError> {
        Ok(ScanHandle {
            catalogue: Catalogue::new()?,
            assigner: WordAssigner::new(lexicon),
            node_budget: DEFAULT_NODE_BUDGET,
        })
    }

    /// Override the per-line traversal node budget.
    pub fn with_node_budget(mut self, budget: usize) -> Self {
        self.node_budget = budget.max(1);
        self
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Scan the lines of a couplet (or any stanza scanned as one unit).
    ///
    /// Returns all per-line results flattened in line order, with
    /// `is_dominant` set on the meter elected across the lines. Lines
    /// that are empty after cleaning contribute nothing. Both options
    /// are accepted but currently inert.
    pub fn scan(&self, lines: &[&str], options: &ScanOptions) -> Vec<LineResult> {
        // Reserved flags; results must not depend on them yet.
        let _ = (options.fuzzy, options.free_verse);

        let mut per_line: Vec<Vec<LineResult>> = Vec::new();
        for raw_line in lines {
            let mut line = text::line_from_text(raw_line);
            if line.is_empty() {
                continue;
            }
            for word in &mut line.words {
                self.assigner.assign(word);
            }
            prosodic::apply(&mut line);
            let outcome = tree::scan_line(&line, &self.catalogue, self.node_budget);
            per_line.push(matcher::line_results(&line, &outcome, &self.catalogue));
        }

        scoring::resolve_dominant(&mut per_line, &self.catalogue);
        per_line.into_iter().flatten().collect()
    }

    /// Assign codes to a single word; used by diagnostic tooling.
    pub fn scan_word(&self, token: &str) -> Word {
        let mut word = Word::new(token);
        self.assigner.assign(&mut word);
        word
    }
}
