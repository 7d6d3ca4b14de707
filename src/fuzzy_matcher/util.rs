//! Rune folding, whitespace trimming and the ASCII prefilter shared by the
//! matchers.

use std::borrow::Cow;

use crate::fuzzy_matcher::normalize::normalize_rune;

/// Lower-case a single rune. Runes whose lower-case form expands to several
/// runes keep only the first one.
#[inline]
pub fn to_lower(c: char) -> char {
    if c.is_ascii() {
        c.to_ascii_lowercase()
    } else {
        c.to_lowercase().next().unwrap_or(c)
    }
}

/// Apply case folding and normalization to a single rune.
#[inline]
pub fn fold_rune(c: char, case_sensitive: bool, normalize: bool) -> char {
    let c = if case_sensitive { c } else { to_lower(c) };
    if normalize { normalize_rune(c) } else { c }
}

/// Fold every rune of the pattern the way text runes are folded while
/// matching. Borrows when nothing changes, which is the common case of an
/// already lower-case ASCII query.
pub fn fold_pattern(pattern: &[char], case_sensitive: bool, normalize: bool) -> Cow<'_, [char]> {
    match pattern
        .iter()
        .position(|&c| fold_rune(c, case_sensitive, normalize) != c)
    {
        None => Cow::Borrowed(pattern),
        Some(first) => {
            let mut folded = pattern.to_vec();
            for c in &mut folded[first..] {
                *c = fold_rune(*c, case_sensitive, normalize);
            }
            Cow::Owned(folded)
        }
    }
}

/// Whitespace as understood by the literal matchers when trimming.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        ' ' | '\t'
            | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Number of leading whitespace runes.
pub fn whitespaces_at_start(text: &[char]) -> usize {
    text.iter().take_while(|&&c| is_whitespace(c)).count()
}

/// Number of trailing whitespace runes.
pub fn whitespaces_at_end(text: &[char]) -> usize {
    text.iter().rev().take_while(|&&c| is_whitespace(c)).count()
}

/// Translate a scan index into a text index, walking backwards when
/// `forward` is false.
#[inline]
pub fn index_at(index: usize, max: usize, forward: bool) -> usize {
    if forward { index } else { max - index - 1 }
}

/// Find `c` in `text[from..]`, also accepting its upper-case form when
/// matching case-insensitively. Returns an absolute index.
fn try_skip(text: &[char], case_sensitive: bool, c: char, from: usize) -> Option<usize> {
    let rest = &text[from..];
    let idx = rest.iter().position(|&r| r == c);
    if idx == Some(0) {
        return Some(from);
    }
    let idx = if !case_sensitive && c.is_ascii_lowercase() {
        let upper = c.to_ascii_uppercase();
        // An upper-case hit is only interesting if it comes before the lower-case one
        let window = idx.map_or(rest, |i| &rest[..i]);
        window.iter().position(|&r| r == upper).or(idx)
    } else {
        idx
    };
    idx.map(|i| from + i)
}

/// Cheap rejection before running a matcher.
///
/// Returns `None` when an ASCII `text` cannot contain `pattern` as an
/// ordered subsequence. Otherwise returns the index the matcher can start
/// scanning from: one rune before the first occurrence of `pattern[0]`, so
/// the boundary bonus of that occurrence can still be computed. Non-ASCII
/// text is never rejected since normalization may map it onto the pattern.
///
/// `pattern` is expected to be folded already.
pub fn ascii_fuzzy_index(text: &[char], pattern: &[char], case_sensitive: bool) -> Option<usize> {
    if !text.iter().all(char::is_ascii) {
        return Some(0);
    }
    if !pattern.iter().all(char::is_ascii) {
        return None;
    }

    let mut first_idx = 0;
    let mut idx = 0;
    for (pidx, &c) in pattern.iter().enumerate() {
        if idx >= text.len() {
            return None;
        }
        idx = try_skip(text, case_sensitive, c, idx)?;
        if pidx == 0 && idx > 0 {
            first_idx = idx - 1;
        }
        idx += 1;
    }
    Some(first_idx)
}

#[cfg(test)]
pub(crate) fn runes(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Render `choice` with every matched rune wrapped in brackets.
#[cfg(test)]
pub(crate) fn wrap_matches(choice: &str, indices: &[usize]) -> String {
    let mut ret = String::new();
    let mut peekable = indices.iter().peekable();
    for (idx, ch) in choice.chars().enumerate() {
        let next_id = **peekable.peek().unwrap_or(&&(choice.len() + 1));
        if next_id == idx {
            ret.push_str(format!("[{ch}]").as_str());
            peekable.next();
        } else {
            ret.push(ch);
        }
    }
    ret
}
