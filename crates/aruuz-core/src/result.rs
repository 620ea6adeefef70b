// Stable output types of the scansion engine.

use serde::Serialize;

/// The meter name reported when a line matched nothing in the catalogue.
pub const UNMATCHED: &str = "unmatched";

/// One scansion reading of one line.
///
/// A line usually produces several of these (one per surviving meter
/// candidate); the dominant-meter resolver flips `is_dominant` on the
/// winners and leaves the rest in place.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LineResult {
    /// The original line text.
    pub line: String,
    /// Urdu display name of the matched meter, or [`UNMATCHED`].
    pub meter_name: String,
    /// Foot (rukn) rendering of the matched pattern, caesura markers
    /// retained. Empty for unmatched lines.
    pub feet: String,
    /// Chosen weight code per scanned word, in reading order.
    pub word_taqti: Vec<String>,
    /// Concatenation of `word_taqti`.
    pub full_code: String,
    /// Set by the dominant-meter resolver on the winning meter name.
    pub is_dominant: bool,
    /// Set when the per-line node budget was exhausted before the search
    /// space was covered.
    pub partial: bool,
    /// Flattened human-readable notes from code assignment and prosodic
    /// rewriting, one entry per note, prefixed with the word.
    pub explain: Vec<String>,
}

impl LineResult {
    pub fn is_unmatched(&self) -> bool {
        self.meter_name == UNMATCHED
    }
}

/// Options accepted by `scan`. Both flags are recognized for interface
/// stability but currently inert: results are identical to the defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanOptions {
    /// Reserved for Levenshtein-based approximate matching.
    pub fuzzy: bool,
    /// Reserved for disabling dominant-meter resolution.
    pub free_verse: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LineResult {
        LineResult {
            line: "مفاعیلن مفاعیلن".into(),
            meter_name: "ہزج مربع سالم".into(),
            feet: "مفاعیلن مفاعیلن".into(),
            word_taqti: vec!["-===".into(), "-===".into()],
            full_code: "-===-===".into(),
            is_dominant: false,
            partial: false,
            explain: vec![],
        }
    }

    #[test]
    fn unmatched_detection() {
        let mut r = sample();
        assert!(!r.is_unmatched());
        r.meter_name = UNMATCHED.into();
        assert!(r.is_unmatched());
    }

    #[test]
    fn serializes_stable_field_set() {
        let v = serde_json::to_value(sample()).unwrap();
        let obj = v.as_object().unwrap();
        for key in [
            "line",
            "meter_name",
            "feet",
            "word_taqti",
            "full_code",
            "is_dominant",
            "partial",
            "explain",
        ] {
            assert!(obj.contains_key(key), "missing field {key}");
        }
    }

    #[test]
    fn options_default_to_off() {
        let opts = ScanOptions::default();
        assert!(!opts.fuzzy);
        assert!(!opts.free_verse);
    }
}
