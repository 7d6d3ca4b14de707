#[allow(dead_code)]
#[macro_use]
mod common;

use fzr::fuzzy_matcher::slab::Slab;
use fzr::fuzzy_matcher::util::ascii_fuzzy_index;
use fzr::fuzzy_matcher::{Algorithm, MatchIndices, MatchResult};
use rand::RngExt as _;

const ALGORITHMS: [Algorithm; 6] = [
    Algorithm::V1,
    Algorithm::V2,
    Algorithm::Exact,
    Algorithm::Prefix,
    Algorithm::Suffix,
    Algorithm::Equal,
];

const TEXT_ALPHABET: &str = "abcAB_/ 1";
const PATTERN_ALPHABET: &str = "abc1";

fn run(
    algo: Algorithm,
    text: &str,
    pattern: &str,
    forward: bool,
    with_pos: bool,
    slab: &mut Slab,
) -> (MatchResult, Option<MatchIndices>) {
    let text = common::runes(text);
    let pattern = common::runes(pattern);
    algo.run(false, true, forward, &text, &pattern, with_pos, slab)
}

/// `(text, pattern)` pairs with a non-empty pattern.
fn samples(count: usize) -> Vec<(String, String)> {
    let mut rng = common::rng();
    let text_alphabet: Vec<char> = TEXT_ALPHABET.chars().collect();
    let pattern_alphabet: Vec<char> = PATTERN_ALPHABET.chars().collect();
    (0..count)
        .map(|_| {
            let text = common::random_string(&mut rng, &text_alphabet, 24);
            let mut pattern = common::random_string(&mut rng, &pattern_alphabet, 4);
            if pattern.is_empty() {
                pattern.push(pattern_alphabet[rng.random_range(0..pattern_alphabet.len())]);
            }
            (text, pattern)
        })
        .collect()
}

fn highlight(text: &str, positions: &[usize]) -> String {
    text.chars()
        .enumerate()
        .map(|(idx, c)| {
            if positions.contains(&idx) {
                format!("[{c}]")
            } else {
                c.to_string()
            }
        })
        .collect()
}

#[test]
fn fuzzy_matches_exactly_the_subsequences() {
    let mut slab = Slab::default();
    for (text, pattern) in samples(2000) {
        let expected = common::is_subsequence(&text, &pattern);
        for algo in [Algorithm::V1, Algorithm::V2] {
            for forward in [true, false] {
                let (result, _) = run(algo, &text, &pattern, forward, false, &mut slab);
                assert_eq!(result.is_match(), expected, "{algo} {text:?} {pattern:?}");
            }
        }
    }
}

#[test]
fn prefilter_agrees_with_subsequence() {
    for (text, pattern) in samples(2000) {
        let filtered = ascii_fuzzy_index(&common::runes(&text), &common::runes(&pattern), false);
        assert_eq!(
            filtered.is_some(),
            common::is_subsequence(&text, &pattern),
            "{text:?} {pattern:?}"
        );
    }
}

#[test]
fn positions_lie_inside_the_span() {
    let mut slab = Slab::default();
    for (text, pattern) in samples(1000) {
        let text_runes = common::runes(&text);
        let pattern_runes = common::runes(&pattern);
        for algo in ALGORITHMS {
            let (result, positions) = run(algo, &text, &pattern, true, true, &mut slab);
            let Some(span) = result.span() else {
                assert!(positions.is_none());
                continue;
            };
            let positions = positions.unwrap();
            assert_eq!(positions.len(), pattern_runes.len(), "{algo} {text:?} {pattern:?}");
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
            assert_eq!(positions.first(), Some(&span.start), "{algo} {text:?} {pattern:?}");
            assert_eq!(positions.last(), Some(&(span.end - 1)), "{algo} {text:?} {pattern:?}");
            for (&pos, &p) in positions.iter().zip(&pattern_runes) {
                assert_eq!(text_runes[pos].to_ascii_lowercase(), p);
            }
        }
    }
}

#[test]
fn empty_pattern() {
    let mut slab = Slab::default();
    for (text, _) in samples(200) {
        for algo in ALGORITHMS {
            let (result, positions) = run(algo, &text, "", true, true, &mut slab);
            if algo == Algorithm::Equal {
                assert_eq!(result, MatchResult::UNMATCHED);
            } else {
                assert_eq!(result, MatchResult::EMPTY, "{algo} {text:?}");
            }
            assert!(positions.map_or(true, |p| p.is_empty()));
        }
    }
}

#[test]
fn pattern_case_is_ignored() {
    let mut slab = Slab::default();
    for (text, pattern) in samples(1000) {
        let upper = pattern.to_ascii_uppercase();
        for algo in ALGORITHMS {
            let lower_result = run(algo, &text, &pattern, true, false, &mut slab).0;
            let upper_result = run(algo, &text, &upper, true, false, &mut slab).0;
            assert_eq!(lower_result, upper_result, "{algo} {text:?} {pattern:?}");
        }
    }
}

#[test]
fn direction_only_breaks_ties() {
    let mut slab = Slab::default();
    for (text, pattern) in samples(1000) {
        let forward = run(Algorithm::V2, &text, &pattern, true, false, &mut slab).0;
        let backward = run(Algorithm::V2, &text, &pattern, false, false, &mut slab).0;
        assert_eq!(forward.is_match(), backward.is_match());
        assert_eq!(forward.score, backward.score, "{text:?} {pattern:?}");
        assert!(forward.end <= backward.end);
    }
}

#[test]
fn trailing_unmatched_runes_change_nothing() {
    let mut slab = Slab::default();
    for (text, pattern) in samples(1000) {
        let padded = format!("{text}xyz");
        for algo in [Algorithm::V1, Algorithm::V2, Algorithm::Exact, Algorithm::Prefix] {
            let plain = run(algo, &text, &pattern, true, true, &mut slab);
            let extended = run(algo, &padded, &pattern, true, true, &mut slab);
            assert_eq!(plain, extended, "{algo} {text:?} {pattern:?}");
        }
    }
}

#[test]
fn gaps_cost_points() {
    let mut slab = Slab::default();
    for algo in [Algorithm::V1, Algorithm::V2] {
        let scores: Vec<i32> = ["abc", "axbc", "axxbc", "axxxbc"]
            .iter()
            .map(|text| run(algo, text, "abc", true, false, &mut slab).0.score)
            .collect();
        assert_eq!(scores, [80, 65, 64, 63], "{algo}");
    }
}

#[test]
fn small_slab_falls_back_to_greedy() {
    let mut tiny = Slab::new(8, 8);
    let mut slab = Slab::default();
    for (text, pattern) in samples(500) {
        if text.chars().count() < 9 {
            continue;
        }
        let fallback = run(Algorithm::V2, &text, &pattern, true, true, &mut tiny);
        let greedy = run(Algorithm::V1, &text, &pattern, true, true, &mut slab);
        assert_eq!(fallback, greedy, "{text:?} {pattern:?}");
    }
}

#[test]
fn optimal_highlights() {
    let mut slab = Slab::default();
    let cases = [
        ("src/fuzzy_matcher/mod.rs", "fmm"),
        ("fooBarBaz", "fbb"),
        ("axbycz", "abc"),
        ("fxo foo", "fo"),
    ];
    let rendered = cases
        .iter()
        .map(|(text, pattern)| {
            let (result, positions) = run(Algorithm::V2, text, pattern, true, true, &mut slab);
            format!("{} {}", result.score, highlight(text, &positions.unwrap_or_default()))
        })
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(rendered, @r"
64 src/[f]uzzy_[m]atcher/[m]od.rs
70 [f]oo[B]ar[B]az
58 [a]x[b]y[c]z
56 fxo [f][o]o
");
}
