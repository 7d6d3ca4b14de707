//! Character classes and the transition bonuses derived from them.

/// Score type used by the DP matrices.
pub type Score16 = i16;

/// Points awarded for each matched rune.
pub const SCORE_MATCH: Score16 = 16;
/// Penalty for the first unmatched rune of a gap.
pub const SCORE_GAP_START: Score16 = -3;
/// Penalty for every further unmatched rune of a gap.
pub const SCORE_GAP_EXTENSION: Score16 = -1;

/// Match right after a non-word rune, or at the start of the text.
pub const BONUS_BOUNDARY: Score16 = SCORE_MATCH / 2;
/// Match on a non-word rune.
pub const BONUS_NON_WORD: Score16 = SCORE_MATCH / 2;
/// `fooBar` and `foo123` transitions, one gap extension below the boundary bonus.
pub const BONUS_CAMEL_123: Score16 = BONUS_BOUNDARY + SCORE_GAP_EXTENSION;
/// Minimum bonus for a rune extending a run of consecutive matches. Equal to
/// the cost of a two-rune gap.
pub const BONUS_CONSECUTIVE: Score16 = -(SCORE_GAP_START + SCORE_GAP_EXTENSION);
/// The bonus of the first pattern rune is multiplied by this.
pub const BONUS_FIRST_CHAR_MULTIPLIER: Score16 = 2;

/// Class of a single rune, used to score the transition into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharClass {
    /// Whitespace, punctuation, symbols. Also the class of "before the text".
    #[default]
    NonWord,
    /// Lower-case letter
    Lower,
    /// Upper-case letter
    Upper,
    /// Letter without case (CJK, most scripts without case)
    Letter,
    /// Numeric rune
    Number,
}

#[inline]
fn char_class_of_ascii(c: char) -> CharClass {
    match c {
        'a'..='z' => CharClass::Lower,
        'A'..='Z' => CharClass::Upper,
        '0'..='9' => CharClass::Number,
        _ => CharClass::NonWord,
    }
}

#[inline]
fn char_class_of_non_ascii(c: char) -> CharClass {
    if c.is_lowercase() {
        CharClass::Lower
    } else if c.is_uppercase() {
        CharClass::Upper
    } else if c.is_numeric() {
        CharClass::Number
    } else if c.is_alphabetic() {
        CharClass::Letter
    } else {
        CharClass::NonWord
    }
}

/// Classify a rune.
#[inline]
pub fn char_class_of(c: char) -> CharClass {
    if c.is_ascii() {
        char_class_of_ascii(c)
    } else {
        char_class_of_non_ascii(c)
    }
}

/// Bonus for matching a rune of class `cur` right after a rune of class `prev`.
#[inline]
pub fn bonus_for(prev: CharClass, cur: CharClass) -> Score16 {
    use CharClass::*;
    match (prev, cur) {
        (NonWord, cur) if cur != NonWord => BONUS_BOUNDARY,
        (Lower, Upper) => BONUS_CAMEL_123,
        (prev, Number) if prev != Number => BONUS_CAMEL_123,
        (_, NonWord) => BONUS_NON_WORD,
        _ => 0,
    }
}

/// Bonus for a match starting at `idx`, judged against the rune before it.
pub fn bonus_at(text: &[char], idx: usize) -> Score16 {
    if idx == 0 {
        return BONUS_BOUNDARY;
    }
    bonus_for(char_class_of(text[idx - 1]), char_class_of(text[idx]))
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;

    fn runes(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn classes() {
        assert_eq!(char_class_of('a'), CharClass::Lower);
        assert_eq!(char_class_of('Z'), CharClass::Upper);
        assert_eq!(char_class_of('7'), CharClass::Number);
        assert_eq!(char_class_of('_'), CharClass::NonWord);
        assert_eq!(char_class_of(' '), CharClass::NonWord);
        assert_eq!(char_class_of('é'), CharClass::Lower);
        assert_eq!(char_class_of('É'), CharClass::Upper);
        assert_eq!(char_class_of('世'), CharClass::Letter);
        assert_eq!(char_class_of('٣'), CharClass::Number);
        assert_eq!(char_class_of('→'), CharClass::NonWord);
    }

    #[test]
    fn transitions() {
        use CharClass::*;
        assert_eq!(bonus_for(NonWord, Lower), BONUS_BOUNDARY);
        assert_eq!(bonus_for(NonWord, Letter), BONUS_BOUNDARY);
        assert_eq!(bonus_for(Lower, Upper), BONUS_CAMEL_123);
        assert_eq!(bonus_for(Lower, Number), BONUS_CAMEL_123);
        assert_eq!(bonus_for(Number, Number), 0);
        assert_eq!(bonus_for(Lower, NonWord), BONUS_NON_WORD);
        assert_eq!(bonus_for(NonWord, NonWord), BONUS_NON_WORD);
        assert_eq!(bonus_for(Upper, Lower), 0);
        assert_eq!(bonus_for(Upper, Upper), 0);
        assert_eq!(bonus_for(Lower, Lower), 0);
    }

    #[test]
    fn bonus_at_positions() {
        let text = runes("foo bar_bazQux1");
        assert_eq!(bonus_at(&text, 0), BONUS_BOUNDARY);
        assert_eq!(bonus_at(&text, 1), 0);
        assert_eq!(bonus_at(&text, 3), BONUS_NON_WORD);
        assert_eq!(bonus_at(&text, 4), BONUS_BOUNDARY);
        assert_eq!(bonus_at(&text, 8), BONUS_BOUNDARY);
        assert_eq!(bonus_at(&text, 11), BONUS_CAMEL_123);
        assert_eq!(bonus_at(&text, 14), BONUS_CAMEL_123);
    }

    #[test]
    fn constants() {
        assert_eq!(BONUS_BOUNDARY, 8);
        assert_eq!(BONUS_CAMEL_123, 7);
        assert_eq!(BONUS_CONSECUTIVE, 4);
    }
}
