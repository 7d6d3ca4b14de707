//! Convenience re-exports of commonly used types.
//!
//! `use fzr::prelude::*;` brings in everything needed to build a
//! [`Finder`] and run a search.

pub use crate::error::FinderError;
pub use crate::finder::{Finder, ResultEntry, SelectFn, Selector};
pub use crate::fuzzy_matcher::{Algorithm, FuzzyMatcher, FzfMatcher, MatchIndices, MatchResult};
pub use crate::item::{RankCriteria, Tiebreak};
pub use crate::options::{FinderOptions, FinderOptionsBuilder};
pub use crate::CaseMatching;
pub use std::borrow::Cow;
pub use std::sync::Arc;
