//! Literal matchers: substring, prefix, suffix and whole-text equality.
//!
//! None of them produce a position set; the matched span is contiguous and
//! callers that need positions rescore it with [`calculate_score`].

use crate::fuzzy_matcher::bonus::{
    BONUS_BOUNDARY, BONUS_FIRST_CHAR_MULTIPLIER, SCORE_MATCH, Score16, bonus_at,
};
use crate::fuzzy_matcher::score::calculate_score;
use crate::fuzzy_matcher::slab::Slab;
use crate::fuzzy_matcher::util::{
    ascii_fuzzy_index, fold_pattern, fold_rune, index_at, is_whitespace, whitespaces_at_end,
    whitespaces_at_start,
};
use crate::fuzzy_matcher::{MatchIndices, MatchResult};

/// Find the best occurrence of `pattern` as a contiguous substring.
///
/// Every occurrence is visited in scan order and the one whose first rune
/// earns the highest boundary bonus wins. The scan stops at the first
/// occurrence sitting right on a word boundary.
pub fn exact_match_naive(
    case_sensitive: bool,
    normalize: bool,
    forward: bool,
    text: &[char],
    pattern: &[char],
    _with_pos: bool,
    _slab: &mut Slab,
) -> (MatchResult, Option<MatchIndices>) {
    if pattern.is_empty() {
        return (MatchResult::EMPTY, None);
    }
    let len_runes = text.len();
    let len_pattern = pattern.len();
    if len_runes < len_pattern {
        return (MatchResult::UNMATCHED, None);
    }
    let pattern = fold_pattern(pattern, case_sensitive, normalize);
    if ascii_fuzzy_index(text, &pattern, case_sensitive).is_none() {
        return (MatchResult::UNMATCHED, None);
    }

    let mut pidx = 0;
    let mut best_pos = None;
    let mut bonus: Score16 = 0;
    let mut best_bonus: Score16 = -1;
    let mut index = 0;
    while index < len_runes {
        let tidx = index_at(index, len_runes, forward);
        let c = fold_rune(text[tidx], case_sensitive, normalize);
        let pidx_ = index_at(pidx, len_pattern, forward);
        if pattern[pidx_] == c {
            if pidx_ == 0 {
                bonus = bonus_at(text, tidx);
            }
            pidx += 1;
            if pidx == len_pattern {
                if bonus > best_bonus {
                    best_pos = Some(index);
                    best_bonus = bonus;
                }
                if bonus == BONUS_BOUNDARY {
                    break;
                }
                // restart right after the first rune of this occurrence
                index -= pidx - 1;
                pidx = 0;
                bonus = 0;
            }
        } else {
            index -= pidx;
            pidx = 0;
            bonus = 0;
        }
        index += 1;
    }

    let Some(best_pos) = best_pos else {
        return (MatchResult::UNMATCHED, None);
    };
    let (sidx, eidx) = if forward {
        (best_pos + 1 - len_pattern, best_pos + 1)
    } else {
        (len_runes - (best_pos + 1), len_runes - (best_pos + 1 - len_pattern))
    };
    let (score, _) = calculate_score(case_sensitive, normalize, text, &pattern, sidx, eidx, false);
    (MatchResult::new(sidx, eidx, score), None)
}

/// Match `pattern` at the start of `text`, ignoring leading whitespace unless
/// the pattern itself starts with whitespace.
pub fn prefix_match(
    case_sensitive: bool,
    normalize: bool,
    _forward: bool,
    text: &[char],
    pattern: &[char],
    _with_pos: bool,
    _slab: &mut Slab,
) -> (MatchResult, Option<MatchIndices>) {
    let Some(&first) = pattern.first() else {
        return (MatchResult::EMPTY, None);
    };
    let trimmed_len = if is_whitespace(first) {
        0
    } else {
        whitespaces_at_start(text)
    };
    if text.len() - trimmed_len < pattern.len() {
        return (MatchResult::UNMATCHED, None);
    }
    let pattern = fold_pattern(pattern, case_sensitive, normalize);
    if !aligned(text, &pattern, trimmed_len, case_sensitive, normalize) {
        return (MatchResult::UNMATCHED, None);
    }
    let (sidx, eidx) = (trimmed_len, trimmed_len + pattern.len());
    let (score, _) = calculate_score(case_sensitive, normalize, text, &pattern, sidx, eidx, false);
    (MatchResult::new(sidx, eidx, score), None)
}

/// Match `pattern` at the end of `text`, ignoring trailing whitespace unless
/// the pattern itself ends with whitespace.
pub fn suffix_match(
    case_sensitive: bool,
    normalize: bool,
    _forward: bool,
    text: &[char],
    pattern: &[char],
    _with_pos: bool,
    _slab: &mut Slab,
) -> (MatchResult, Option<MatchIndices>) {
    let Some(&last) = pattern.last() else {
        return (MatchResult::EMPTY, None);
    };
    let trimmed_len = if is_whitespace(last) {
        text.len()
    } else {
        text.len() - whitespaces_at_end(text)
    };
    let Some(sidx) = trimmed_len.checked_sub(pattern.len()) else {
        return (MatchResult::UNMATCHED, None);
    };
    let pattern = fold_pattern(pattern, case_sensitive, normalize);
    if !aligned(text, &pattern, sidx, case_sensitive, normalize) {
        return (MatchResult::UNMATCHED, None);
    }
    let (score, _) =
        calculate_score(case_sensitive, normalize, text, &pattern, sidx, trimmed_len, false);
    (MatchResult::new(sidx, trimmed_len, score), None)
}

/// Match when the whitespace-trimmed text equals `pattern`.
///
/// The score assumes every rune sits on a word boundary.
pub fn equal_match(
    case_sensitive: bool,
    normalize: bool,
    _forward: bool,
    text: &[char],
    pattern: &[char],
    _with_pos: bool,
    _slab: &mut Slab,
) -> (MatchResult, Option<MatchIndices>) {
    let (Some(&first), Some(&last)) = (pattern.first(), pattern.last()) else {
        return (MatchResult::UNMATCHED, None);
    };
    let trimmed_len = if is_whitespace(first) {
        0
    } else {
        whitespaces_at_start(text)
    };
    let trimmed_end_len = if is_whitespace(last) {
        0
    } else {
        whitespaces_at_end(text)
    };
    let len_pattern = pattern.len();
    if text.len().saturating_sub(trimmed_len + trimmed_end_len) != len_pattern {
        return (MatchResult::UNMATCHED, None);
    }
    let pattern = fold_pattern(pattern, case_sensitive, normalize);
    if !aligned(text, &pattern, trimmed_len, case_sensitive, normalize) {
        return (MatchResult::UNMATCHED, None);
    }
    let len = len_pattern as i32;
    let score = i32::from(SCORE_MATCH + BONUS_BOUNDARY) * len
        + i32::from(BONUS_FIRST_CHAR_MULTIPLIER - 1) * i32::from(BONUS_BOUNDARY);
    (MatchResult::new(trimmed_len, trimmed_len + len_pattern, score), None)
}

/// Whether the folded `text[offset..]` starts with the folded `pattern`.
fn aligned(
    text: &[char],
    pattern: &[char],
    offset: usize,
    case_sensitive: bool,
    normalize: bool,
) -> bool {
    text.get(offset..offset + pattern.len())
        .is_some_and(|window| {
            window
                .iter()
                .zip(pattern)
                .all(|(&c, &p)| fold_rune(c, case_sensitive, normalize) == p)
        })
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;
    use crate::fuzzy_matcher::util::runes;

    type Literal = fn(
        bool,
        bool,
        bool,
        &[char],
        &[char],
        bool,
        &mut Slab,
    ) -> (MatchResult, Option<MatchIndices>);

    fn run(algo: Literal, text: &str, pattern: &str) -> MatchResult {
        run_with(algo, false, true, text, pattern)
    }

    fn run_with(algo: Literal, case_sensitive: bool, forward: bool, text: &str, pattern: &str) -> MatchResult {
        let mut slab = Slab::new(16, 16);
        let (res, pos) = algo(
            case_sensitive,
            true,
            forward,
            &runes(text),
            &runes(pattern),
            true,
            &mut slab,
        );
        assert!(pos.is_none());
        res
    }

    #[test]
    fn naive_prefers_boundary() {
        let res = run(exact_match_naive, "foobar bar", "bar");
        assert_eq!((res.start, res.end), (7, 10));
        // 3 * 16 + 8 * 2 + 8 + 8
        assert_eq!(res.score, 80);
    }

    #[test]
    fn naive_keeps_first_on_tie() {
        let res = run(exact_match_naive, "xabxab", "ab");
        assert_eq!((res.start, res.end), (1, 3));
        let res = run_with(exact_match_naive, false, false, "xabxab", "ab");
        assert_eq!((res.start, res.end), (4, 6));
    }

    #[test]
    fn naive_backtracks_after_partial_match() {
        let res = run(exact_match_naive, "aab", "ab");
        assert_eq!((res.start, res.end), (1, 3));
        let res = run(exact_match_naive, "aaab", "aab");
        assert_eq!((res.start, res.end), (1, 4));
    }

    #[test]
    fn naive_edges() {
        assert_eq!(run(exact_match_naive, "abc", ""), MatchResult::EMPTY);
        assert_eq!(run(exact_match_naive, "ab", "abc"), MatchResult::UNMATCHED);
        assert_eq!(run(exact_match_naive, "abc", "d"), MatchResult::UNMATCHED);
        assert_eq!(run(exact_match_naive, "acb", "ab"), MatchResult::UNMATCHED);
        assert!(run(exact_match_naive, "ABC", "bc").is_match());
        assert!(!run_with(exact_match_naive, true, true, "ABC", "bc").is_match());
    }

    #[test]
    fn prefix() {
        let res = run(prefix_match, "  foo bar", "foo");
        assert_eq!((res.start, res.end), (2, 5));
        assert_eq!(res.score, 80);
        assert!(!run(prefix_match, "  foo bar", " foo").is_match());
        assert!(run(prefix_match, " foo bar", " foo").is_match());
        assert!(!run(prefix_match, "foo", "bar").is_match());
        assert!(!run(prefix_match, "fo", "foo").is_match());
        assert!(!run(prefix_match, "   ", "foo").is_match());
        assert_eq!(run(prefix_match, "foo", ""), MatchResult::EMPTY);
    }

    #[test]
    fn suffix() {
        let res = run(suffix_match, "foo bar  ", "bar");
        assert_eq!((res.start, res.end), (4, 7));
        assert!(!run(suffix_match, "foo bar  ", "bar ").is_match());
        assert!(run(suffix_match, "foo bar ", "bar ").is_match());
        assert!(!run(suffix_match, "ar", "bar").is_match());
        assert_eq!(run(suffix_match, "foo  ", ""), MatchResult::EMPTY);
    }

    #[test]
    fn equal() {
        let res = run(equal_match, "  x  ", "x");
        assert_eq!((res.start, res.end, res.score), (2, 3, 32));
        let res = run(equal_match, "Résumé", "resume");
        assert_eq!((res.start, res.end), (0, 6));
        assert_eq!(res.score, 24 * 6 + 8);
        assert!(!run(equal_match, "xy", "x").is_match());
        assert!(!run(equal_match, "x", "").is_match());
        assert!(!run(equal_match, "   ", "x").is_match());
        assert!(!run_with(equal_match, true, true, "X", "x").is_match());
    }
}
