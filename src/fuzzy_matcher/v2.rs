//! Optimal fuzzy matching: a Smith-Waterman style local alignment restricted
//! to the band between the first occurrence of the pattern and the last
//! occurrence of its final rune.
//!
//! `H[i][j]` holds the best score of an alignment of `pattern[..=i]` ending
//! at `text[j]`, `C[i][j]` the length of the run of consecutive matches
//! ending there. Both are `i16` and use saturating arithmetic.

use crate::fuzzy_matcher::bonus::{
    BONUS_BOUNDARY, BONUS_CONSECUTIVE, BONUS_FIRST_CHAR_MULTIPLIER, CharClass, SCORE_GAP_EXTENSION,
    SCORE_GAP_START, SCORE_MATCH, Score16, bonus_for, char_class_of,
};
use crate::fuzzy_matcher::slab::Slab;
use crate::fuzzy_matcher::util::{ascii_fuzzy_index, fold_pattern, fold_rune};
use crate::fuzzy_matcher::v1::fuzzy_match_v1;
use crate::fuzzy_matcher::{MatchIndices, MatchResult};

/// Named windows into a [`Slab`].
struct Matrices<'a> {
    h0: &'a mut [i16],
    c0: &'a mut [i16],
    bonuses: &'a mut [i16],
    h: &'a mut [i16],
    c: &'a mut [i16],
    first_occ: &'a mut [u32],
    text: &'a mut [u32],
}

impl<'a> Matrices<'a> {
    /// Carve the windows for a `n` x `m` problem whose band holds `band` cells
    /// per matrix. Carving again keeps the contents of the row-0 windows.
    fn carve(slab: &'a mut Slab, n: usize, m: usize, band: usize) -> Self {
        let (i16s, u32s) = slab.buffers(3 * n + 2 * band, m + n);
        let (h0, rest) = i16s.split_at_mut(n);
        let (c0, rest) = rest.split_at_mut(n);
        let (bonuses, rest) = rest.split_at_mut(n);
        let (h, c) = rest.split_at_mut(band);
        let (first_occ, text) = u32s.split_at_mut(m);
        Self {
            h0,
            c0,
            bonuses,
            h,
            c,
            first_occ,
            text,
        }
    }
}

#[inline]
fn is_better(score: Score16, max_score: Score16, forward: bool) -> bool {
    if forward {
        score > max_score
    } else {
        score >= max_score
    }
}

/// Best-scoring alignment of `pattern` in `text`. Falls back to
/// [`fuzzy_match_v1`] when the problem does not fit the slab.
pub fn fuzzy_match_v2(
    case_sensitive: bool,
    normalize: bool,
    forward: bool,
    text: &[char],
    pattern: &[char],
    with_pos: bool,
    slab: &mut Slab,
) -> (MatchResult, Option<MatchIndices>) {
    let m = pattern.len();
    if m == 0 {
        return (MatchResult::EMPTY, with_pos.then(MatchIndices::new));
    }
    let n = text.len();
    if m > n {
        return (MatchResult::UNMATCHED, None);
    }
    if n * m > slab.capacity16() {
        trace!("v2: {n}x{m} does not fit the slab, using v1");
        return fuzzy_match_v1(case_sensitive, normalize, forward, text, pattern, with_pos, slab);
    }

    let pattern = fold_pattern(pattern, case_sensitive, normalize);
    let Some(idx) = ascii_fuzzy_index(text, &pattern, case_sensitive) else {
        return (MatchResult::UNMATCHED, None);
    };

    // Phase 1: fold the text, compute bonuses and the first row, and find the
    // first occurrence of each pattern rune.
    let mut max_score: Score16 = 0;
    let mut max_score_pos = 0;
    let mut pidx = 0;
    let mut f0 = 0;
    let mut last_idx = 0;
    {
        let Matrices {
            h0,
            c0,
            bonuses,
            first_occ,
            text: t,
            ..
        } = Matrices::carve(slab, n, m, 0);

        let pchar0 = pattern[0];
        let mut pchar = pattern[0];
        let mut prev_h0: Score16 = 0;
        let mut prev_class = if idx > 0 {
            char_class_of(text[idx - 1])
        } else {
            CharClass::NonWord
        };
        let mut in_gap = false;

        for (col, &c) in text.iter().enumerate().skip(idx) {
            let class = char_class_of(c);
            let c = fold_rune(c, case_sensitive, normalize);
            t[col] = c as u32;
            let bonus = bonus_for(prev_class, class);
            bonuses[col] = bonus;
            prev_class = class;

            if c == pchar {
                if pidx < m {
                    if pidx == 0 {
                        f0 = col;
                    }
                    first_occ[pidx] = col as u32;
                    pidx += 1;
                    pchar = pattern[pidx.min(m - 1)];
                }
                last_idx = col;
            }

            if c == pchar0 {
                let score = SCORE_MATCH + bonus * BONUS_FIRST_CHAR_MULTIPLIER;
                h0[col] = score;
                c0[col] = 1;
                if m == 1 && is_better(score, max_score, forward) {
                    max_score = score;
                    max_score_pos = col;
                    if forward && bonus >= BONUS_BOUNDARY {
                        break;
                    }
                }
                in_gap = false;
            } else {
                let gap = if in_gap {
                    SCORE_GAP_EXTENSION
                } else {
                    SCORE_GAP_START
                };
                h0[col] = prev_h0.saturating_add(gap).max(0);
                c0[col] = 0;
                in_gap = true;
            }
            prev_h0 = h0[col];
        }
    }

    if pidx != m {
        return (MatchResult::UNMATCHED, None);
    }
    if m == 1 {
        let result = MatchResult::new(max_score_pos, max_score_pos + 1, i32::from(max_score));
        return (result, with_pos.then(|| vec![max_score_pos]));
    }

    // Phase 2: fill the remaining rows over the band
    let width = last_idx - f0 + 1;
    let Matrices {
        h0,
        c0,
        bonuses,
        h,
        c,
        first_occ,
        text: t,
    } = Matrices::carve(slab, n, m, width * m);

    h[..width].copy_from_slice(&h0[f0..=last_idx]);
    c[..width].copy_from_slice(&c0[f0..=last_idx]);
    c[width..].fill(0);

    for pidx in 1..m {
        let f = first_occ[pidx] as usize;
        let pchar = pattern[pidx] as u32;
        let row = pidx * width;
        let mut in_gap = false;
        h[row + f - f0 - 1] = 0;

        for col in f..=last_idx {
            let j0 = col - f0;
            let gap = if in_gap {
                SCORE_GAP_EXTENSION
            } else {
                SCORE_GAP_START
            };
            let s2 = h[row + j0 - 1].saturating_add(gap);
            let mut s1: Score16 = 0;
            let mut consecutive: i16 = 0;

            if t[col] == pchar {
                let diag = row - width + j0 - 1;
                s1 = h[diag].saturating_add(SCORE_MATCH);
                let mut b = bonuses[col];
                consecutive = c[diag] + 1;
                if b == BONUS_BOUNDARY {
                    consecutive = 1;
                } else if consecutive > 1 {
                    // pin to the bonus at the start of the run
                    let run_start = col + 1 - consecutive as usize;
                    b = b.max(BONUS_CONSECUTIVE.max(bonuses[run_start]));
                }
                if s1.saturating_add(b) < s2 {
                    s1 = s1.saturating_add(bonuses[col]);
                    consecutive = 0;
                } else {
                    s1 = s1.saturating_add(b);
                }
            }
            c[row + j0] = consecutive;
            in_gap = s1 < s2;

            let score = s1.max(s2).max(0);
            if pidx == m - 1 && is_better(score, max_score, forward) {
                max_score = score;
                max_score_pos = col;
            }
            h[row + j0] = score;
        }
    }

    // Phase 3: trace back the alignment
    let mut start = f0;
    let positions = with_pos.then(|| {
        let mut pos = MatchIndices::with_capacity(m);
        let mut i = m - 1;
        let mut j = max_score_pos;
        let mut prefer_match = true;
        loop {
            let row = i * width;
            let j0 = j - f0;
            let fi = first_occ[i] as usize;
            let s = h[row + j0];
            let s1 = if i > 0 && j >= fi {
                h[row - width + j0 - 1]
            } else {
                0
            };
            let s2 = if j > fi { h[row + j0 - 1] } else { 0 };

            if s > s1 && (s > s2 || s == s2 && prefer_match) {
                pos.push(j);
                if i == 0 {
                    break;
                }
                i -= 1;
            }
            prefer_match = c[row + j0] > 1
                || (j0 + 1 < width && c.get(row + width + j0 + 1).is_some_and(|&v| v > 0));
            match j.checked_sub(1) {
                Some(prev) if prev >= f0 => j = prev,
                _ => break,
            }
        }
        start = j;
        pos.reverse();
        pos
    });

    (
        MatchResult::new(start, max_score_pos + 1, i32::from(max_score)),
        positions,
    )
}
