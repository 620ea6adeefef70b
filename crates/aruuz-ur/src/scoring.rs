// Dominant-meter resolution across the lines of a couplet.

use aruuz_core::result::LineResult;
use aruuz_meters::{Catalogue, NUM_SPECIAL_METERS};

/// Elect the dominant meter across per-line result groups and flag the
/// winning results in place. Alternatives are retained; only the flag
/// changes. Lines that matched nothing carry no candidates, so a fully
/// unmatched couplet ends with no flag set.
pub fn resolve_dominant(per_line: &mut [Vec<LineResult>], catalogue: &Catalogue) {
    let mut names: Vec<String> = Vec::new();
    for line in per_line.iter() {
        for result in line {
            if !result.is_unmatched() && !names.contains(&result.meter_name) {
                names.push(result.meter_name.clone());
            }
        }
    }
    if names.is_empty() {
        return;
    }

    let mut best: Option<(&str, usize, usize)> = None;
    for name in &names {
        let score: usize = per_line
            .iter()
            .map(|line| line_score(catalogue, line, name))
            .sum();
        let coverage = per_line
            .iter()
            .filter(|line| line.iter().any(|r| r.meter_name == *name))
            .count();
        let better = match best {
            None => true,
            Some((bname, bscore, bcover)) => {
                score > bscore
                    || (score == bscore && coverage > bcover)
                    || (score == bscore
                        && coverage == bcover
                        && name_order(catalogue, name) < name_order(catalogue, bname))
            }
        };
        if better {
            best = Some((name.as_str(), score, coverage));
        }
    }

    let Some((winner, _, _)) = best else {
        return;
    };
    let winner = winner.to_string();
    for line in per_line.iter_mut() {
        for result in line {
            result.is_dominant = result.meter_name == winner;
        }
    }
}

/// Best foot-alignment of one line against one meter name: over every
/// catalogue variant carrying the name and every result the line holds
/// for it, count the variant's feet found in order (without reuse) in
/// the result's feet. The foot counts must agree before alignment is
/// attempted.
fn line_score(catalogue: &Catalogue, results: &[LineResult], name: &str) -> usize {
    let mut feet_lists: Vec<Vec<&str>> = Vec::new();
    for result in results.iter().filter(|r| r.meter_name == name) {
        feet_lists.push(
            result
                .feet
                .split_whitespace()
                .filter(|t| *t != "+")
                .collect(),
        );
    }
    if feet_lists.is_empty() {
        return 0;
    }

    let mut best = 0;
    for &idx in catalogue.indices_by_name(name) {
        let meter_feet = catalogue.afail_feet(catalogue.pattern(idx));
        for line_feet in &feet_lists {
            if line_feet.len() != meter_feet.len() {
                continue;
            }
            best = best.max(ordered_match_count(&meter_feet, line_feet));
        }
    }
    best
}

/// Count the leading run of `needles` found in `haystack` as an ordered
/// subsequence without reuse. Stops at the first foot that cannot be
/// placed.
fn ordered_match_count(needles: &[&str], haystack: &[&str]) -> usize {
    let mut count = 0;
    let mut j = 0;
    for needle in needles {
        let mut found = false;
        while j < haystack.len() {
            if haystack[j] == *needle {
                count += 1;
                j += 1;
                found = true;
                break;
            }
            j += 1;
        }
        if !found {
            break;
        }
    }
    count
}

/// Tie-break ordering of meter names: classical names by their first
/// catalogue index, special names after the catalogue in family order.
fn name_order(catalogue: &Catalogue, name: &str) -> usize {
    if let Some(&first) = catalogue.indices_by_name(name).first() {
        return first;
    }
    for k in 0..NUM_SPECIAL_METERS {
        if catalogue.special_name(k) == name {
            return catalogue.len() + k;
        }
    }
    usize::MAX
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> Catalogue {
        Catalogue::new().unwrap()
    }

    fn result(name: &str, feet: &str) -> LineResult {
        LineResult {
            line: String::new(),
            meter_name: name.to_string(),
            feet: feet.to_string(),
            word_taqti: vec![],
            full_code: String::new(),
            is_dominant: false,
            partial: false,
            explain: vec![],
        }
    }

    fn classical(cat: &Catalogue, index: usize) -> LineResult {
        result(cat.name(index), &cat.afail(cat.pattern(index)))
    }

    /// First catalogue index whose pattern matches.
    fn index_of(cat: &Catalogue, pattern: &str) -> usize {
        (0..cat.len()).find(|&i| cat.pattern(i) == pattern).unwrap()
    }

    #[test]
    fn ordered_match_counts_prefix_subsequence() {
        assert_eq!(ordered_match_count(&["a", "b"], &["a", "b"]), 2);
        assert_eq!(ordered_match_count(&["a", "b"], &["a", "c"]), 1);
        assert_eq!(ordered_match_count(&["b", "a"], &["a", "b"]), 1);
        assert_eq!(ordered_match_count(&["a"], &[]), 0);
    }

    #[test]
    fn meter_present_in_both_lines_wins() {
        let cat = catalogue();
        let salim = index_of(&cat, "-===/-===/-===/-===");
        let maqbuz = index_of(&cat, "-=-=/-=-=/-=-=/-=-=");
        let mut per_line = vec![
            vec![classical(&cat, salim)],
            vec![classical(&cat, salim), classical(&cat, maqbuz)],
        ];
        resolve_dominant(&mut per_line, &cat);
        assert!(per_line[0][0].is_dominant);
        assert!(per_line[1][0].is_dominant);
        assert!(!per_line[1][1].is_dominant);
    }

    #[test]
    fn losers_are_retained_not_removed() {
        let cat = catalogue();
        let salim = index_of(&cat, "-===/-===/-===/-===");
        let maqbuz = index_of(&cat, "-=-=/-=-=/-=-=/-=-=");
        let mut per_line = vec![
            vec![classical(&cat, salim)],
            vec![classical(&cat, salim), classical(&cat, maqbuz)],
        ];
        resolve_dominant(&mut per_line, &cat);
        assert_eq!(per_line[1].len(), 2);
    }

    #[test]
    fn exactly_one_name_dominates() {
        let cat = catalogue();
        let salim = index_of(&cat, "-===/-===/-===/-===");
        let maqbuz = index_of(&cat, "-=-=/-=-=/-=-=/-=-=");
        let mut per_line = vec![
            vec![classical(&cat, salim), classical(&cat, maqbuz)],
            vec![classical(&cat, maqbuz), classical(&cat, salim)],
        ];
        resolve_dominant(&mut per_line, &cat);
        let mut dominant_names: Vec<&str> = Vec::new();
        for line in &per_line {
            for r in line.iter().filter(|r| r.is_dominant) {
                if !dominant_names.contains(&r.meter_name.as_str()) {
                    dominant_names.push(&r.meter_name);
                }
            }
        }
        assert_eq!(dominant_names.len(), 1);
    }

    #[test]
    fn tie_broken_by_catalogue_order() {
        let cat = catalogue();
        let salim = index_of(&cat, "-===/-===/-===/-===");
        let maqbuz = index_of(&cat, "-=-=/-=-=/-=-=/-=-=");
        // Same score, same coverage: the earlier catalogue entry wins.
        let mut per_line = vec![vec![classical(&cat, salim), classical(&cat, maqbuz)]];
        resolve_dominant(&mut per_line, &cat);
        let winner: Vec<&str> = per_line[0]
            .iter()
            .filter(|r| r.is_dominant)
            .map(|r| r.meter_name.as_str())
            .collect();
        assert_eq!(winner, vec![cat.name(salim.min(maqbuz))]);
    }

    #[test]
    fn unmatched_lines_produce_no_dominant() {
        let cat = catalogue();
        let mut per_line = vec![vec![result(aruuz_core::result::UNMATCHED, "")]];
        resolve_dominant(&mut per_line, &cat);
        assert!(!per_line[0][0].is_dominant);
    }

    #[test]
    fn unmatched_never_dominates_alongside_real_matches() {
        let cat = catalogue();
        let salim = index_of(&cat, "-===/-===/-===/-===");
        let mut per_line = vec![
            vec![result(aruuz_core::result::UNMATCHED, "")],
            vec![classical(&cat, salim)],
        ];
        resolve_dominant(&mut per_line, &cat);
        assert!(!per_line[0][0].is_dominant);
        assert!(per_line[1][0].is_dominant);
    }
}
