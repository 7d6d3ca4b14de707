//! Greedy fuzzy matching.
//!
//! A forward pass finds the first occurrence of the pattern as a subsequence,
//! then a backward pass from its end pulls the start as far right as it goes.
//! Linear in the text length, but the alignment it finds is not optimal.

use crate::fuzzy_matcher::score::calculate_score;
use crate::fuzzy_matcher::slab::Slab;
use crate::fuzzy_matcher::util::{ascii_fuzzy_index, fold_pattern, fold_rune, index_at};
use crate::fuzzy_matcher::{MatchIndices, MatchResult};

/// Shortest span ending at the first full occurrence of `pattern`.
pub fn fuzzy_match_v1(
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
    let pattern = fold_pattern(pattern, case_sensitive, normalize);
    if ascii_fuzzy_index(text, &pattern, case_sensitive).is_none() {
        return (MatchResult::UNMATCHED, None);
    }

    let len_runes = text.len();
    let len_pattern = pattern.len();
    let rune_at = |index: usize| {
        fold_rune(
            text[index_at(index, len_runes, forward)],
            case_sensitive,
            normalize,
        )
    };
    let pattern_at = |pidx: usize| pattern[index_at(pidx, len_pattern, forward)];

    let mut pidx = 0;
    let mut sidx = None;
    let mut eidx = None;
    for index in 0..len_runes {
        if rune_at(index) == pattern_at(pidx) {
            sidx.get_or_insert(index);
            pidx += 1;
            if pidx == len_pattern {
                eidx = Some(index + 1);
                break;
            }
        }
    }
    let (Some(mut sidx), Some(mut eidx)) = (sidx, eidx) else {
        return (MatchResult::UNMATCHED, None);
    };

    // walk back from the end to find the shortest span ending there
    let mut pidx = len_pattern;
    for index in (sidx..eidx).rev() {
        if rune_at(index) == pattern_at(pidx - 1) {
            pidx -= 1;
            if pidx == 0 {
                sidx = index;
                break;
            }
        }
    }

    if !forward {
        (sidx, eidx) = (len_runes - eidx, len_runes - sidx);
    }

    let (score, _) = calculate_score(case_sensitive, normalize, text, &pattern, sidx, eidx, false);
    (MatchResult::new(sidx, eidx, score), None)
}
