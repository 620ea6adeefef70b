// Word and Line: the data model carried through the scansion pipeline.

use crate::character::{fold_word, strip_diacritics};

/// Explanation notes attached to a word: one ordered list for how its
/// base code candidates were produced, one for prosodic adjustments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Explain {
    pub base: Vec<String>,
    pub prosody: Vec<String>,
}

impl Explain {
    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.prosody.is_empty()
    }
}

/// One lexical token of a line, together with its candidate weight codes.
///
/// `codes`, `taqti` and `muarrab` grow in parallel during code assignment:
/// `taqti[i]` and `muarrab[i]` are the syllabified and diacritic-annotated
/// renderings behind `codes[i]` where the lexicon provided them (empty
/// strings otherwise). `graft_codes` holds alternatives created by vowel
/// grafting and is kept apart from `codes` so a match can always be traced
/// back to "grafted" or "plain".
#[derive(Debug, Clone, Default)]
pub struct Word {
    /// Normalized text with diacritics removed.
    pub surface: String,
    /// Normalized text with diacritics kept (used for lexicon lookup and
    /// the diacritic-sensitive heuristics).
    pub raw: String,
    /// Candidate weight codes, ordered, deduplicated.
    pub codes: Vec<String>,
    /// Syllabified renderings parallel to `codes` (pass-through).
    pub taqti: Vec<String>,
    /// Diacritic-annotated forms parallel to `codes` (pass-through).
    pub muarrab: Vec<String>,
    /// Extra alternatives produced by prosodic grafting.
    pub graft_codes: Vec<String>,
    /// Lexicon row ids behind the candidates (negative for derived rows).
    pub lexicon_ids: Vec<i64>,
    /// Language tags from the lexicon, parallel to `codes` where known.
    pub languages: Vec<String>,
    /// The lexicon flagged this entry as admitting multiple readings.
    pub is_varied: bool,
    /// Set when a prosodic rule merged this word into its predecessor;
    /// elided words do not contribute to the code tree.
    pub elided: bool,
    /// Set when the word was rebuilt (e.g. compound split); disables the
    /// Arabic/Persian word-final overrides.
    pub modified: bool,
    pub explain: Explain,
}

impl Word {
    /// Build a word from a raw token: folds orthographic variants and
    /// precomputes the diacritic-free surface.
    pub fn new(token: &str) -> Self {
        let raw = fold_word(token);
        let surface = strip_diacritics(&raw);
        Word {
            surface,
            raw,
            ..Word::default()
        }
    }

    /// Append a candidate code with its taqti/muarrab renderings, skipping
    /// duplicates of an already-present code.
    pub fn push_code(&mut self, code: String, taqti: String, muarrab: String) {
        if code.is_empty() || self.codes.iter().any(|c| *c == code) {
            return;
        }
        self.codes.push(code);
        self.taqti.push(taqti);
        self.muarrab.push(muarrab);
    }

    /// Append a graft alternative, skipping duplicates (against both the
    /// plain codes and earlier grafts).
    pub fn push_graft(&mut self, code: String) {
        if code.is_empty()
            || self.codes.iter().any(|c| *c == code)
            || self.graft_codes.iter().any(|c| *c == code)
        {
            return;
        }
        self.graft_codes.push(code);
    }

    /// All distinct code choices for tree construction: `codes` followed
    /// by `graft_codes`.
    pub fn choices(&self) -> Vec<&str> {
        self.codes
            .iter()
            .chain(self.graft_codes.iter())
            .map(String::as_str)
            .collect()
    }
}

/// A line of verse: the original text plus its words in reading order.
#[derive(Debug, Clone, Default)]
pub struct Line {
    pub original: String,
    pub words: Vec<Word>,
}

impl Line {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Indices of the words that take part in scansion (non-elided).
    pub fn scanned_indices(&self) -> Vec<usize> {
        self.words
            .iter()
            .enumerate()
            .filter(|(_, w)| !w.elided)
            .map(|(i, _)| i)
            .collect()
    }
}
