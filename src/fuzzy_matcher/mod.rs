//! fzf-style fuzzy matching algorithms.
//!
//! Every algorithm works on rune slices and shares the signature of
//! [`AlgoFn`]. The [`FuzzyMatcher`] trait wraps them for string inputs.
//!
//! # Example:
//! ```
//! use fzr::fuzzy_matcher::{Algorithm, FuzzyMatcher, FzfMatcher};
//! use fzr::CaseMatching;
//!
//! let matcher = FzfMatcher::new(Algorithm::V2, CaseMatching::Smart);
//!
//! assert_eq!(None, matcher.fuzzy_match("abc", "abx"));
//! assert!(matcher.fuzzy_match("axbycz", "abc").is_some());
//!
//! let (_score, indices) = matcher.fuzzy_indices("axbycz", "abc").unwrap();
//! assert_eq!(indices, [0, 2, 4]);
//! ```

/// Character classes and bonus constants
pub mod bonus;
/// Substring, prefix, suffix and equality matchers
pub mod exact;
pub mod normalize;
/// Greedy span scoring shared by the non-DP matchers
pub mod score;
pub mod slab;
pub mod util;
pub mod v1;
pub mod v2;

use std::cell::RefCell;
use std::fmt::{Display, Error, Formatter};
use std::ops::Range;
use std::str::FromStr;

use serde::Deserialize;
use thread_local::ThreadLocal;

use crate::CaseMatching;
use crate::error::FinderError;
use crate::fuzzy_matcher::score::calculate_score;
use crate::fuzzy_matcher::slab::Slab;
use crate::fuzzy_matcher::util::fold_pattern;

pub(crate) type IndexType = usize;
pub(crate) type ScoreType = i64;

/// Rune indices of the matched pattern runes, ascending.
pub type MatchIndices = Vec<IndexType>;

/// Outcome of a single match over rune indices.
///
/// `[start, end)` is the matched span; both are `-1` when nothing matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchResult {
    /// First rune of the match
    pub start: i32,
    /// One past the last rune of the match
    pub end: i32,
    /// Score, higher is better
    pub score: i32,
}

impl MatchResult {
    /// No match.
    pub const UNMATCHED: Self = Self {
        start: -1,
        end: -1,
        score: 0,
    };
    /// Match of an empty pattern.
    pub const EMPTY: Self = Self {
        start: 0,
        end: 0,
        score: 0,
    };

    /// Build a successful result.
    pub fn new(start: usize, end: usize, score: i32) -> Self {
        debug_assert!(start <= end);
        Self {
            start: start as i32,
            end: end as i32,
            score,
        }
    }

    /// Whether this is a match.
    pub fn is_match(&self) -> bool {
        self.start >= 0
    }

    /// The matched span, if any.
    pub fn span(&self) -> Option<Range<usize>> {
        self.is_match()
            .then(|| self.start as usize..self.end as usize)
    }
}

/// Signature shared by all matching algorithms:
/// `(case_sensitive, normalize, forward, text, pattern, with_pos, slab)`.
///
/// `forward` decides which of several equally good matches wins: the
/// earliest when set, the latest otherwise.
pub type AlgoFn =
    fn(bool, bool, bool, &[char], &[char], bool, &mut Slab) -> (MatchResult, Option<MatchIndices>);

//------------------------------------------------------------------------------
/// Matching algorithm to use
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "cli", clap(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Greedy fuzzy matching, linear time
    V1,
    /// Optimal fuzzy matching (default)
    #[default]
    V2,
    /// Contiguous substring
    Exact,
    /// Anchored at the start of the text
    Prefix,
    /// Anchored at the end of the text
    Suffix,
    /// Whole text
    Equal,
}

impl Algorithm {
    /// The function implementing this algorithm.
    pub fn matcher(self) -> AlgoFn {
        match self {
            Algorithm::V1 => v1::fuzzy_match_v1,
            Algorithm::V2 => v2::fuzzy_match_v2,
            Algorithm::Exact => exact::exact_match_naive,
            Algorithm::Prefix => exact::prefix_match,
            Algorithm::Suffix => exact::suffix_match,
            Algorithm::Equal => exact::equal_match,
        }
    }

    /// Run the algorithm.
    ///
    /// With `with_pos`, a position set is always returned for a match: the
    /// algorithms that do not trace positions get the matched span rescored.
    pub fn run(
        self,
        case_sensitive: bool,
        normalize: bool,
        forward: bool,
        text: &[char],
        pattern: &[char],
        with_pos: bool,
        slab: &mut Slab,
    ) -> (MatchResult, Option<MatchIndices>) {
        let (result, positions) =
            (self.matcher())(case_sensitive, normalize, forward, text, pattern, with_pos, slab);
        if !with_pos || positions.is_some() {
            return (result, positions);
        }
        let Some(span) = result.span() else {
            return (result, None);
        };
        let pattern = fold_pattern(pattern, case_sensitive, normalize);
        let (_, positions) = calculate_score(
            case_sensitive,
            normalize,
            text,
            &pattern,
            span.start,
            span.end,
            true,
        );
        (result, positions)
    }

    /// Whether the reported start is only the alignment start when
    /// positions are traced. V2 otherwise reports the first occurrence of the
    /// first pattern rune.
    pub fn start_needs_trace(self) -> bool {
        self == Algorithm::V2
    }

    /// Name used in configuration and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::V1 => "v1",
            Algorithm::V2 => "v2",
            Algorithm::Exact => "exact",
            Algorithm::Prefix => "prefix",
            Algorithm::Suffix => "suffix",
            Algorithm::Equal => "equal",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v1" => Ok(Algorithm::V1),
            "v2" => Ok(Algorithm::V2),
            "exact" => Ok(Algorithm::Exact),
            "prefix" => Ok(Algorithm::Prefix),
            "suffix" => Ok(Algorithm::Suffix),
            "equal" => Ok(Algorithm::Equal),
            _ => Err(FinderError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl TryFrom<&str> for Algorithm {
    type Error = FinderError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for Algorithm {
    type Error = FinderError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

//------------------------------------------------------------------------------
/// Trait for fuzzy matching text patterns against choices
pub trait FuzzyMatcher: Send + Sync {
    /// fuzzy match choice with pattern, and return the score & matched indices of characters
    fn fuzzy_indices(&self, choice: &str, pattern: &str) -> Option<(ScoreType, MatchIndices)>;

    /// fuzzy match choice with pattern, and return the score of matching
    fn fuzzy_match(&self, choice: &str, pattern: &str) -> Option<ScoreType> {
        self.fuzzy_indices(choice, pattern).map(|(score, _)| score)
    }

    /// Fuzzy match and return `(score, begin, end)` without computing
    /// per-character match indices.
    ///
    /// `begin` is the character index of the first matched character, `end`
    /// the character index of the last one. Both are 0 for an empty pattern.
    fn fuzzy_match_range(&self, choice: &str, pattern: &str) -> Option<(ScoreType, usize, usize)> {
        self.fuzzy_indices(choice, pattern).map(|(score, indices)| {
            let begin = indices.first().copied().unwrap_or(0);
            let end = indices.last().copied().unwrap_or(0);
            (score, begin, end)
        })
    }
}

/// [`FuzzyMatcher`] backed by one of the [`Algorithm`]s.
///
/// Each calling thread gets its own slab and rune buffers, so a single
/// matcher can be shared across threads.
#[derive(Debug, Default)]
pub struct FzfMatcher {
    algorithm: Algorithm,
    case: CaseMatching,
    slab: ThreadLocal<RefCell<Slab>>,
    char_buf: ThreadLocal<RefCell<(Vec<char>, Vec<char>)>>,
}

impl FzfMatcher {
    /// Create a new `FzfMatcher` with the given settings.
    pub fn new(algorithm: Algorithm, case: CaseMatching) -> Self {
        Self {
            algorithm,
            case,
            ..Default::default()
        }
    }

    /// Switch the algorithm.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Switch the case matching mode.
    pub fn case(mut self, case: CaseMatching) -> Self {
        self.case = case;
        self
    }

    fn run(&self, choice: &str, pattern: &str, with_pos: bool) -> Option<(MatchResult, Option<MatchIndices>)> {
        let mut bufs = self
            .char_buf
            .get_or(|| RefCell::new((Vec::new(), Vec::new())))
            .borrow_mut();
        let (ref mut pat_buf, ref mut cho_buf) = *bufs;
        pat_buf.clear();
        pat_buf.extend(pattern.chars());
        cho_buf.clear();
        cho_buf.extend(choice.chars());

        let case_sensitive = self.case.is_case_sensitive(pattern);
        let mut slab = self.slab.get_or(|| RefCell::new(Slab::default())).borrow_mut();
        let (result, positions) = self.algorithm.run(
            case_sensitive,
            !case_sensitive,
            true,
            cho_buf,
            pat_buf,
            with_pos,
            &mut slab,
        );
        result.is_match().then_some((result, positions))
    }
}

impl FuzzyMatcher for FzfMatcher {
    fn fuzzy_indices(&self, choice: &str, pattern: &str) -> Option<(ScoreType, MatchIndices)> {
        self.run(choice, pattern, true)
            .map(|(result, positions)| (ScoreType::from(result.score), positions.unwrap_or_default()))
    }

    fn fuzzy_match(&self, choice: &str, pattern: &str) -> Option<ScoreType> {
        self.run(choice, pattern, false)
            .map(|(result, _)| ScoreType::from(result.score))
    }

    fn fuzzy_match_range(&self, choice: &str, pattern: &str) -> Option<(ScoreType, usize, usize)> {
        self.run(choice, pattern, self.algorithm.start_needs_trace()).map(|(result, _)| {
            let begin = result.start as usize;
            let end = (result.end as usize).saturating_sub(1).max(begin);
            (ScoreType::from(result.score), begin, end)
        })
    }
}
