// The meter catalogue: immutable tables with a name index, precomputed
// matching variants and foot (afail) rendering.

use hashbrown::HashMap;

use aruuz_core::symbols::{CAESURA, FOOT_SEP, LONG, SHORT};

use crate::data::{FEET, METERS, RUBAI_METERS, SPECIAL_METERS};

/// Startup self-check failure. Construction is the only fallible
/// operation on the catalogue; a failure here means the embedded tables
/// are corrupt and the process cannot meaningfully continue.
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    #[error("meter {index} ({name}): invalid pattern symbol {symbol:?} in {pattern:?}")]
    InvalidSymbol {
        index: usize,
        name: &'static str,
        pattern: &'static str,
        symbol: char,
    },

    #[error("meter {index} ({name}): foot {foot:?} is not in the rukn table")]
    UnknownFoot {
        index: usize,
        name: &'static str,
        foot: String,
    },

    #[error("meter {index}: empty name or pattern")]
    EmptyEntry { index: usize },
}

/// The four matching variants of a pattern, foot separators removed.
///
/// - `[0]`: caesura markers removed;
/// - `[1]`: caesura markers removed, one short appended;
/// - `[2]`: caesura markers replaced by a short, one short appended;
/// - `[3]`: caesura markers replaced by a short.
///
/// Variants 1..3 capture the classical freedoms at the hemistich boundary
/// and the line end (zihaf/illat); they must all be tried when matching.
pub fn pattern_variants(pattern: &str) -> [String; 4] {
    let flat: String = pattern.chars().filter(|c| *c != FOOT_SEP).collect();
    let stripped: String = flat.chars().filter(|c| *c != CAESURA).collect();
    let shortened: String = flat
        .chars()
        .map(|c| if c == CAESURA { SHORT } else { c })
        .collect();
    [
        stripped.clone(),
        format!("{stripped}{SHORT}"),
        format!("{shortened}{SHORT}"),
        shortened,
    ]
}

/// The immutable meter catalogue. Built once at startup, shared read-only
/// for the lifetime of the process.
pub struct Catalogue {
    name_index: HashMap<&'static str, Vec<usize>>,
    foot_names: HashMap<&'static str, &'static str>,
    variants: Vec<[String; 4]>,
    flats: Vec<String>,
}

impl Catalogue {
    /// Build the catalogue and run the self-check over the embedded
    /// tables.
    pub fn new() -> Result<Self, CatalogueError> {
        let foot_names: HashMap<&'static str, &'static str> = FEET.iter().copied().collect();

        let mut name_index: HashMap<&'static str, Vec<usize>> = HashMap::new();
        let mut variants = Vec::with_capacity(METERS.len());
        let mut flats = Vec::with_capacity(METERS.len());

        for (i, &(pattern, name)) in METERS.iter().enumerate() {
            if pattern.is_empty() || name.is_empty() {
                return Err(CatalogueError::EmptyEntry { index: i });
            }
            if let Some(bad) = pattern
                .chars()
                .find(|c| !matches!(*c, LONG | SHORT | FOOT_SEP | CAESURA))
            {
                return Err(CatalogueError::InvalidSymbol {
                    index: i,
                    name,
                    pattern,
                    symbol: bad,
                });
            }
            for foot in pattern.split([FOOT_SEP, CAESURA]) {
                if !foot_names.contains_key(foot) {
                    return Err(CatalogueError::UnknownFoot {
                        index: i,
                        name,
                        foot: foot.to_string(),
                    });
                }
            }
            name_index.entry(name).or_default().push(i);
            variants.push(pattern_variants(pattern));
            flats.push(pattern.chars().filter(|c| *c != FOOT_SEP).collect());
        }

        Ok(Catalogue {
            name_index,
            foot_names,
            variants,
            flats,
        })
    }

    /// Number of classical entries.
    pub fn len(&self) -> usize {
        METERS.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Pattern of the i-th entry (with foot and caesura markers).
    pub fn pattern(&self, i: usize) -> &'static str {
        METERS[i].0
    }

    /// Urdu display name of the i-th entry.
    pub fn name(&self, i: usize) -> &'static str {
        METERS[i].1
    }

    /// All catalogue indices sharing a display name (the variants of one
    /// bahr). Empty for unknown names.
    pub fn indices_by_name(&self, name: &str) -> &[usize] {
        self.name_index.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The four matching variants of the i-th pattern.
    pub fn variants(&self, i: usize) -> &[String; 4] {
        &self.variants[i]
    }

    /// The i-th pattern with foot separators removed but caesura markers
    /// kept; used for caesura-alignment checks during traversal.
    pub fn flat_pattern(&self, i: usize) -> &str {
        &self.flats[i]
    }

    /// Name of a special (Hindi/Zamzama) meter.
    pub fn special_name(&self, k: usize) -> &'static str {
        SPECIAL_METERS[k].1
    }

    /// Static afail rendering of a special meter (fallback when the
    /// dynamic rendering does not apply).
    pub fn special_afail(&self, k: usize) -> &'static str {
        SPECIAL_METERS[k].2
    }

    /// The Rubai family, shipped for reference; not wired into matching.
    pub fn rubai(&self) -> &'static [(&'static str, &'static str)] {
        RUBAI_METERS
    }

    /// Foot name for an exact foot pattern, `x` normalized to long.
    pub fn rukn(&self, code: &str) -> Option<&'static str> {
        let normalized: String = code
            .chars()
            .map(|c| if c == 'x' { LONG } else { c })
            .collect();
        self.foot_names.get(normalized.as_str()).copied()
    }

    /// Render a pattern as its foot names. Foot boundaries become single
    /// spaces; a caesura is kept as a visible `+` separator.
    pub fn afail(&self, pattern: &str) -> String {
        let mut out = String::new();
        for (h, hemistich) in pattern.split(CAESURA).enumerate() {
            if h > 0 {
                out.push_str(" + ");
            }
            let mut first = true;
            for foot in hemistich.split(FOOT_SEP) {
                if let Some(name) = self.foot_names.get(foot) {
                    if !first {
                        out.push(' ');
                    }
                    out.push_str(name);
                    first = false;
                }
            }
        }
        out
    }

    /// The foot names of a pattern as a list, caesura markers dropped.
    pub fn afail_feet(&self, pattern: &str) -> Vec<&'static str> {
        pattern
            .split([FOOT_SEP, CAESURA])
            .filter_map(|foot| self.foot_names.get(foot).copied())
            .collect()
    }
}
