use crate::fuzzy_matcher::MatchIndices;
use crate::fuzzy_matcher::bonus::{
    BONUS_BOUNDARY, BONUS_CONSECUTIVE, BONUS_FIRST_CHAR_MULTIPLIER, CharClass, SCORE_GAP_EXTENSION,
    SCORE_GAP_START, SCORE_MATCH, bonus_for, char_class_of,
};
use crate::fuzzy_matcher::util::fold_rune;

/// Score the alignment of `pattern` inside `text[sidx..eidx]`, matching each
/// pattern rune greedily from the left.
///
/// `pattern` must already be folded. The span is expected to contain the
/// whole pattern; runes past the last pattern rune count as gaps. When
/// `with_pos` is set the text indices of the matched runes are returned too.
///
/// The result is not clamped.
pub fn calculate_score(
    case_sensitive: bool,
    normalize: bool,
    text: &[char],
    pattern: &[char],
    sidx: usize,
    eidx: usize,
    with_pos: bool,
) -> (i32, Option<MatchIndices>) {
    let mut pidx = 0;
    let mut score: i32 = 0;
    let mut in_gap = false;
    let mut consecutive = 0;
    let mut first_bonus = 0;
    let mut pos = with_pos.then(|| MatchIndices::with_capacity(pattern.len()));

    let mut prev_class = if sidx > 0 {
        char_class_of(text[sidx - 1])
    } else {
        CharClass::NonWord
    };

    for (idx, &c) in text.iter().enumerate().take(eidx).skip(sidx) {
        let class = char_class_of(c);
        let c = fold_rune(c, case_sensitive, normalize);

        if pattern.get(pidx) == Some(&c) {
            if let Some(pos) = pos.as_mut() {
                pos.push(idx);
            }
            score += i32::from(SCORE_MATCH);
            let mut bonus = bonus_for(prev_class, class);
            if consecutive == 0 {
                first_bonus = bonus;
            } else {
                // a boundary inside a run starts a new chunk
                if bonus == BONUS_BOUNDARY {
                    first_bonus = bonus;
                }
                bonus = bonus.max(first_bonus).max(BONUS_CONSECUTIVE);
            }
            score += if pidx == 0 {
                i32::from(bonus) * i32::from(BONUS_FIRST_CHAR_MULTIPLIER)
            } else {
                i32::from(bonus)
            };
            in_gap = false;
            consecutive += 1;
            pidx += 1;
        } else {
            score += i32::from(if in_gap { SCORE_GAP_EXTENSION } else { SCORE_GAP_START });
            in_gap = true;
            consecutive = 0;
            first_bonus = 0;
        }
        prev_class = class;
    }

    (score, pos)
}
