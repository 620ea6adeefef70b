// Hindi and Zamzama meters.
//
// These two families are syllabic rather than foot-tiled: any run of
// morae grouping into fa'lun/fa'ilun units scans, so they are matched by
// deterministic state machines instead of the pattern variants used for
// the classical catalogue. A flexible symbol branches into both weights
// during the walk; everything stays deterministic for a given input.

use crate::data::SPECIAL_METERS;

// ---------------------------------------------------------------------------
// State machines
// ---------------------------------------------------------------------------

/// A transition table over the weight alphabet. `-1` is the dead state.
struct Machine {
    on_short: &'static [i8],
    on_long: &'static [i8],
    /// States that may legally end the input.
    accept: &'static [i8],
}

impl Machine {
    fn next(&self, symbol: u8, state: i8) -> i8 {
        let table = if symbol == b'-' {
            self.on_short
        } else {
            self.on_long
        };
        match table.get(state as usize) {
            Some(&s) => s,
            None => -1,
        }
    }

    fn accepts(&self, state: i8) -> bool {
        self.accept.contains(&state)
    }
}

/// Hindi meter walk: feet of the shape `=(=)`, each long splittable into
/// two shorts. State 0 is "foot closed"; state 1 is a trailing lone long.
const HINDI: Machine = Machine {
    on_short: &[-1, 2, 3, -1],
    on_long: &[1, 0, -1, 1],
    accept: &[0, 1],
};

/// Zamzama walk: feet of the shape `(=)=`. State 3 is a trailing lone
/// long (a half foot closing the line).
const ZAMZAMA: Machine = Machine {
    on_short: &[1, 2, -1, -1],
    on_long: &[3, -1, 0, 0],
    accept: &[0, 3],
};

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

/// Safety cap on machine-walk branching; well above anything a real line
/// produces.
const MAX_EXPANSIONS: usize = 1024;

/// Match a full line code against the special meters.
///
/// Returns the indices (into [`SPECIAL_METERS`]) whose family machine
/// accepts some concrete expansion of the code and whose foot count
/// matches. Empty when the line is not Hindi/Zamzama shaped.
pub fn detect(code: &str) -> Vec<usize> {
    if code.is_empty() || !code.bytes().all(|b| matches!(b, b'=' | b'-' | b'x')) {
        return Vec::new();
    }

    let mut found: Vec<usize> = Vec::new();

    for s in accepted_expansions(&HINDI, code.as_bytes()) {
        if let Some(k) = hindi_index(&s) {
            if !found.contains(&k) {
                found.push(k);
            }
        }
    }
    for s in accepted_expansions(&ZAMZAMA, code.as_bytes()) {
        if let Some(k) = zamzama_index(&s) {
            if !found.contains(&k) {
                found.push(k);
            }
        }
    }

    found.sort_unstable();
    found
}

/// All concrete expansions of `code` (each `x` resolved both ways) that
/// the machine accepts. A final short is tolerated after a cleanly closed
/// foot, mirroring the trailing-short freedom of the classical variants.
fn accepted_expansions(machine: &Machine, code: &[u8]) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::with_capacity(code.len());
    walk(machine, code, 0, 0, &mut cur, &mut out);
    out.sort_unstable();
    out.dedup();
    out
}

fn walk(
    machine: &Machine,
    code: &[u8],
    pos: usize,
    state: i8,
    cur: &mut String,
    out: &mut Vec<String>,
) {
    if out.len() >= MAX_EXPANSIONS {
        return;
    }
    if pos == code.len() {
        if machine.accepts(state) {
            out.push(cur.clone());
        }
        return;
    }

    let symbol = code[pos];

    // A line-final short after a closed foot ends the walk without
    // advancing the machine.
    if pos == code.len() - 1 && matches!(symbol, b'-' | b'x') && machine.accepts(state) {
        let mut s = cur.clone();
        s.push('-');
        out.push(s);
    }

    let choices: &[u8] = match symbol {
        b'x' => &[b'-', b'='],
        b'-' => &[b'-'],
        _ => &[b'='],
    };
    for &c in choices {
        let next = machine.next(c, state);
        if next >= 0 {
            cur.push(c as char);
            walk(machine, code, pos + 1, next, cur, out);
            cur.pop();
        }
    }
}

// ---------------------------------------------------------------------------
// Incremental tracking
// ---------------------------------------------------------------------------

/// Incremental viability tracker for the special meters, used by the
/// code tree so a branch that can only be Hindi/Zamzama is not pruned by
/// the classical catalogue. Holds the reachable state set of each
/// machine as a bitmask; a flexible symbol advances along both weights.
#[derive(Debug, Clone, Copy)]
pub struct SpecialTracker {
    hindi: u16,
    zamzama: u16,
    /// The machine died on what could be a line-final tolerated short.
    hindi_final: bool,
    zamzama_final: bool,
}

impl SpecialTracker {
    pub fn start() -> Self {
        SpecialTracker {
            hindi: 1,
            zamzama: 1,
            hindi_final: false,
            zamzama_final: false,
        }
    }

    /// Advance through one word's code.
    #[must_use]
    pub fn advance(mut self, code: &str) -> Self {
        for symbol in code.bytes() {
            let (h, hf) = step_set(&HINDI, self.hindi, symbol);
            let (z, zf) = step_set(&ZAMZAMA, self.zamzama, symbol);
            // A tolerated final short is only valid if nothing follows;
            // any earlier flag is invalidated by this symbol.
            self.hindi_final = hf;
            self.zamzama_final = zf;
            self.hindi = h;
            self.zamzama = z;
        }
        self
    }

    /// Whether some continuation (or the end of input) can still be
    /// accepted.
    pub fn alive(&self) -> bool {
        self.hindi != 0 || self.zamzama != 0 || self.hindi_final || self.zamzama_final
    }
}

/// Advance a reachable-state set by one symbol. Returns the new set and
/// whether the set died on a short that an accepting state could have
/// tolerated line-finally.
fn step_set(machine: &Machine, states: u16, symbol: u8) -> (u16, bool) {
    if states == 0 {
        return (0, false);
    }
    let mut next: u16 = 0;
    for s in 0..8i8 {
        if states & (1 << s) == 0 {
            continue;
        }
        let symbols: &[u8] = match symbol {
            b'x' => &[b'-', b'='],
            b'-' => &[b'-'],
            _ => &[b'='],
        };
        for &c in symbols {
            let n = machine.next(c, s);
            if n >= 0 {
                next |= 1 << n;
            }
        }
    }
    let died_on_final_short = next == 0
        && matches!(symbol, b'-' | b'x')
        && (0..8i8).any(|s| states & (1 << s) != 0 && machine.accepts(s));
    (next, died_on_final_short)
}

// ---------------------------------------------------------------------------
// Index mapping
// ---------------------------------------------------------------------------

/// Greedy foot patterns for the Hindi rendering, tried in order.
const HINDI_FOOT_PATTERNS: &[&str] = &["==", "=-", "-==", "-=-", "-=", "=", "==-", "-==-"];
const HINDI_FOOT_NAMES: &[&str] = &[
    "فعلن",
    "فعْل",
    "فعولن",
    "فعول",
    "فَعَل",
    "فع",
    "فعْلان",
    "فعولان",
];

/// Expected foot counts of the Hindi meters, by special index.
const HINDI_EXPECTED_FEET: [usize; 8] = [8, 6, 8, 4, 4, 3, 6, 2];

/// Map a concrete Hindi-accepted code to its special meter index.
///
/// The foot count selects the family member; where two members share a
/// count they differ in how the line closes (lone فع versus a full
/// foot), so the final decomposed foot disambiguates.
fn hindi_index(code: &str) -> Option<usize> {
    let feet = hindi_decompose(code)?;
    let ends_half = matches!(feet.last().copied(), Some("=") | Some("=-"));
    match (feet.len(), ends_half) {
        (8, true) => Some(0),
        (8, false) => Some(2),
        (6, true) => Some(1),
        (6, false) => Some(6),
        (4, true) => Some(3),
        (4, false) => Some(4),
        (3, _) => Some(5),
        (2, _) => Some(7),
        _ => None,
    }
}

/// Map a concrete Zamzama-accepted code to its special meter index.
fn zamzama_index(code: &str) -> Option<usize> {
    let n = zamzama_decompose(code)?;
    match n {
        8 => Some(8),
        6 => Some(9),
        4 => Some(10),
        _ => None,
    }
}

/// Greedy decomposition into Hindi foot patterns; requires the whole code
/// to be consumed (one trailing short tolerated).
fn hindi_decompose(code: &str) -> Option<Vec<&'static str>> {
    let code = code.strip_suffix('-').unwrap_or(code);
    let bytes = code.as_bytes();
    let mut feet = Vec::new();
    let mut j = 0;
    while j < bytes.len() {
        let hit = HINDI_FOOT_PATTERNS
            .iter()
            .find(|p| bytes[j..].starts_with(p.as_bytes()))?;
        feet.push(*hit);
        j += hit.len();
    }
    Some(feet)
}

/// Greedy decomposition into Zamzama feet (`==` or `--=`); returns the
/// foot count when the whole code is consumed.
fn zamzama_decompose(code: &str) -> Option<usize> {
    let code = code.strip_suffix('-').unwrap_or(code);
    let bytes = code.as_bytes();
    let mut n = 0;
    let mut j = 0;
    while j < bytes.len() {
        if bytes[j..].starts_with(b"--=") {
            n += 1;
            j += 3;
        } else if bytes[j..].starts_with(b"==") {
            n += 1;
            j += 2;
        } else if j + 1 == bytes.len() && bytes[j] == b'=' {
            // closing half foot
            n += 1;
            j += 1;
        } else {
            return None;
        }
    }
    Some(n)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render the feet of a Hindi-meter line from its matched code. Returns
/// `None` when the code does not decompose with the expected foot count
/// (callers fall back to the static afail string).
pub fn hindi_feet(index: usize, code: &str) -> Option<String> {
    let expected = *HINDI_EXPECTED_FEET.get(index)?;
    let feet = hindi_decompose(code)?;
    if feet.len() != expected {
        return None;
    }
    let names: Vec<&str> = feet
        .iter()
        .map(|p| {
            let k = HINDI_FOOT_PATTERNS.iter().position(|q| q == p).unwrap_or(0);
            HINDI_FOOT_NAMES[k]
        })
        .collect();
    Some(names.join(" "))
}

/// Render the feet of a Zamzama-meter line from its matched code.
pub fn zamzama_feet(code: &str) -> Option<String> {
    let code = code.strip_suffix('-').unwrap_or(code);
    let bytes = code.as_bytes();
    let mut names = Vec::new();
    let mut j = 0;
    while j < bytes.len() {
        if bytes[j..].starts_with(b"--=") {
            names.push("فَعِلن");
            j += 3;
        } else if bytes[j..].starts_with(b"==") {
            names.push("فعْلن");
            j += 2;
        } else {
            break;
        }
    }
    if names.is_empty() {
        None
    } else {
        Some(names.join(" "))
    }
}

/// Conceptual bahr of a special meter: the text before the `/` in its
/// display name (e.g. بحرِ ہندی).
pub fn conceptual_bahr(index: usize) -> &'static str {
    let name = SPECIAL_METERS[index].1;
    name.split('/').next().unwrap_or(name).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zamzama_pure_falun_run() {
        // Eight fa'lun feet: sixteen longs.
        let code = "================";
        let found = detect(code);
        assert!(found.contains(&8), "expected zamzama musamman: {found:?}");
    }

    #[test]
    fn zamzama_broken_longs() {
        // fa'ilun (--=) freely substitutes fa'lun; six feet total.
        let found = detect("--===--=======");
        assert!(found.contains(&9), "expected zamzama musaddas: {found:?}");
    }

    #[test]
    fn hindi_pure_run_eight_feet() {
        // Eight fa'lun feet ending in a full foot.
        let code = "================";
        let found = detect(code);
        assert!(found.contains(&2), "expected hindi musamman: {found:?}");
    }

    #[test]
    fn hindi_lone_closing_long() {
        // Seven full feet plus a closing فع.
        let code = "===============";
        let found = detect(code);
        assert!(found.contains(&0), "expected hindi with half ending: {found:?}");
    }

    #[test]
    fn flex_expands_both_ways() {
        // An x in a zamzama run may resolve either way; the long reading
        // completes eight feet.
        let code = "===============x";
        let found = detect(code);
        assert!(found.contains(&8), "{found:?}");
    }

    #[test]
    fn non_special_code_rejected() {
        assert!(detect("-=").is_empty());
        assert!(detect("").is_empty());
        assert!(detect("=+=").is_empty());
    }

    #[test]
    fn trailing_short_tolerated() {
        let code = "================-";
        let found = detect(code);
        assert!(found.contains(&8), "{found:?}");
    }

    #[test]
    fn hindi_feet_rendering_validates_count() {
        assert_eq!(
            hindi_feet(7, "===="),
            Some("فعلن فعلن".to_string())
        );
        // Wrong count for the index: falls back.
        assert_eq!(hindi_feet(0, "===="), None);
        // Flexible symbols do not decompose.
        assert_eq!(hindi_feet(7, "==x="), None);
    }

    #[test]
    fn zamzama_feet_rendering() {
        assert_eq!(
            zamzama_feet("==--="),
            Some("فعْلن فَعِلن".to_string())
        );
        assert_eq!(zamzama_feet("-="), None);
    }

    #[test]
    fn conceptual_bahr_prefix() {
        assert_eq!(conceptual_bahr(0), "بحرِ ہندی");
        assert_eq!(conceptual_bahr(8), "بحرِ زمزمہ");
    }

    #[test]
    fn detection_is_deterministic() {
        let code = "========x=======";
        assert_eq!(detect(code), detect(code));
    }

    #[test]
    fn tracker_follows_falun_run() {
        let t = SpecialTracker::start().advance("====");
        assert!(t.alive());
    }

    #[test]
    fn tracker_dies_on_impossible_shape() {
        // Three shorts in a row fit neither family.
        let t = SpecialTracker::start().advance("---=");
        assert!(!t.alive());
    }

    #[test]
    fn tracker_tolerates_line_final_short() {
        let t = SpecialTracker::start().advance("====-");
        assert!(t.alive());
        // ...but not a short followed by more material.
        let t = t.advance("=");
        assert!(!t.alive());
    }
}
