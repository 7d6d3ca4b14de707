//! Ranking of matched items.
//!
//! Matches are ordered by score first. [`RankCriteria`] and custom
//! [`Tiebreak`] functions decide between equal scores.
use std::cmp::Ordering;
use std::fmt::{Debug, Display, Error, Formatter};
use std::str::FromStr;
use std::sync::Arc;

#[cfg(feature = "cli")]
use clap::ValueEnum;
#[cfg(feature = "cli")]
use clap::builder::PossibleValue;
use serde::Deserialize;

use crate::error::FinderError;
use crate::finder::{ResultEntry, SelectFn};

//------------------------------------------------------------------------------
/// Criteria for ordering matches of equal score
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum RankCriteria {
    /// Shorter item text first
    Length,
    /// Longer item text first
    NegLength,
    /// Earlier match start first
    Begin,
    /// Later match start first
    NegBegin,
    /// Earlier match end first
    End,
    /// Later match end first
    NegEnd,
    /// Lower item index first
    Index,
    /// Higher item index first
    NegIndex,
}

impl RankCriteria {
    const ALL: [RankCriteria; 8] = [
        RankCriteria::Length,
        RankCriteria::NegLength,
        RankCriteria::Begin,
        RankCriteria::NegBegin,
        RankCriteria::End,
        RankCriteria::NegEnd,
        RankCriteria::Index,
        RankCriteria::NegIndex,
    ];

    /// Name used in configuration and on the command line.
    pub fn as_str(self) -> &'static str {
        use RankCriteria::*;
        match self {
            Length => "length",
            NegLength => "-length",
            Begin => "begin",
            NegBegin => "-begin",
            End => "end",
            NegEnd => "-end",
            Index => "index",
            NegIndex => "-index",
        }
    }

    /// Compare two entries. `Less` means `a` ranks before `b`.
    ///
    /// `length` is the rune count of the selected text. Entries without a
    /// span sort as if they matched at 0.
    pub fn compare<T>(self, a: &ResultEntry<'_, T>, b: &ResultEntry<'_, T>) -> Ordering {
        use RankCriteria::*;
        match self {
            Length => a.length.cmp(&b.length),
            NegLength => b.length.cmp(&a.length),
            Begin => a.start.unwrap_or(0).cmp(&b.start.unwrap_or(0)),
            NegBegin => b.start.unwrap_or(0).cmp(&a.start.unwrap_or(0)),
            End => a.end.unwrap_or(0).cmp(&b.end.unwrap_or(0)),
            NegEnd => b.end.unwrap_or(0).cmp(&a.end.unwrap_or(0)),
            Index => a.index.cmp(&b.index),
            NegIndex => b.index.cmp(&a.index),
        }
    }
}

impl Display for RankCriteria {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankCriteria {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RankCriteria::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| FinderError::UnknownCriteria(s.to_string()))
    }
}

impl TryFrom<String> for RankCriteria {
    type Error = FinderError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(feature = "cli")]
impl ValueEnum for RankCriteria {
    fn value_variants<'a>() -> &'a [Self] {
        &RankCriteria::ALL
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.as_str()))
    }
}

//------------------------------------------------------------------------------
/// Custom tiebreaker, called with both entries and the finder's selector.
/// `Less` means the first entry ranks first.
pub type TiebreakFn<T> =
    Arc<dyn Fn(&ResultEntry<'_, T>, &ResultEntry<'_, T>, &SelectFn<'_, T>) -> Ordering + Send + Sync>;

/// A single step of the tiebreak chain
pub enum Tiebreak<T> {
    /// Built-in criteria
    Criteria(RankCriteria),
    /// User supplied comparison
    Custom(TiebreakFn<T>),
}

impl<T> Tiebreak<T> {
    /// Wrap a comparison closure.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&ResultEntry<'_, T>, &ResultEntry<'_, T>, &SelectFn<'_, T>) -> Ordering
            + Send
            + Sync
            + 'static,
    {
        Tiebreak::Custom(Arc::new(f))
    }

    /// Compare two entries of equal score. `select` projects an item to its
    /// searched text.
    pub fn compare(
        &self,
        a: &ResultEntry<'_, T>,
        b: &ResultEntry<'_, T>,
        select: &SelectFn<'_, T>,
    ) -> Ordering {
        match self {
            Tiebreak::Criteria(criteria) => criteria.compare(a, b),
            Tiebreak::Custom(f) => f(a, b, select),
        }
    }
}

impl<T> Clone for Tiebreak<T> {
    fn clone(&self) -> Self {
        match self {
            Tiebreak::Criteria(criteria) => Tiebreak::Criteria(*criteria),
            Tiebreak::Custom(f) => Tiebreak::Custom(Arc::clone(f)),
        }
    }
}

impl<T> Debug for Tiebreak<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Tiebreak::Criteria(criteria) => f.debug_tuple("Criteria").field(criteria).finish(),
            Tiebreak::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl<T> From<RankCriteria> for Tiebreak<T> {
    fn from(criteria: RankCriteria) -> Self {
        Tiebreak::Criteria(criteria)
    }
}
