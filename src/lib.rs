//! fzr is an fzf-style fuzzy matching and ranking library for Rust.
//!
//! It scores candidates against a query with the same bonuses fzf uses
//! (word boundaries, camel case, consecutive runs) and ranks them. It can be
//! used as a library or as a command-line filter.
//!
//! # Examples
//!
//! ```
//! use fzr::prelude::*;
//!
//! let items = vec!["apple", "app", "application"];
//! let options = FinderOptionsBuilder::default()
//!     .tiebreak(vec![RankCriteria::Length])
//!     .build()
//!     .unwrap();
//! let finder = Finder::with_options(items, options);
//!
//! let results = finder.find("app");
//! let names: Vec<&str> = results.iter().map(|entry| *entry.item).collect();
//! assert_eq!(names, ["app", "apple", "application"]);
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

use std::fmt::{Display, Error, Formatter};
use std::str::FromStr;

use serde::Deserialize;

pub use crate::error::FinderError;
pub use crate::finder::{Finder, ResultEntry};
pub use crate::fuzzy_matcher::Algorithm;
pub use crate::item::RankCriteria;
pub use crate::options::FinderOptions;

pub mod error;
pub mod finder;
pub mod fuzzy_matcher;
pub mod item;
pub mod options;
pub mod prelude;

//------------------------------------------------------------------------------
/// Case sensitivity mode for matching
#[derive(Eq, PartialEq, Debug, Copy, Clone, Default, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum CaseMatching {
    /// Case-sensitive matching
    Respect,
    /// Case-insensitive matching
    #[default]
    Ignore,
    /// Smart case: case-insensitive unless query contains uppercase
    Smart,
}

impl CaseMatching {
    /// Whether a search for `query` distinguishes case.
    pub fn is_case_sensitive(self, query: &str) -> bool {
        match self {
            CaseMatching::Respect => true,
            CaseMatching::Ignore => false,
            CaseMatching::Smart => query.chars().any(char::is_uppercase),
        }
    }

    /// Name used in configuration and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            CaseMatching::Respect => "case-sensitive",
            CaseMatching::Ignore => "case-insensitive",
            CaseMatching::Smart => "smart-case",
        }
    }
}

impl Display for CaseMatching {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseMatching {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "case-sensitive" => Ok(CaseMatching::Respect),
            "case-insensitive" => Ok(CaseMatching::Ignore),
            "smart-case" => Ok(CaseMatching::Smart),
            _ => Err(FinderError::UnknownCasing(s.to_string())),
        }
    }
}

impl TryFrom<&str> for CaseMatching {
    type Error = FinderError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for CaseMatching {
    type Error = FinderError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(feature = "cli")]
impl clap::ValueEnum for CaseMatching {
    fn value_variants<'a>() -> &'a [Self] {
        &[CaseMatching::Respect, CaseMatching::Ignore, CaseMatching::Smart]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn case_matching() {
        assert!(CaseMatching::Respect.is_case_sensitive("abc"));
        assert!(!CaseMatching::Ignore.is_case_sensitive("ABC"));
        assert!(!CaseMatching::Smart.is_case_sensitive("abc"));
        assert!(CaseMatching::Smart.is_case_sensitive("aBc"));
        assert!(CaseMatching::Smart.is_case_sensitive("Émile"));
        assert_eq!(CaseMatching::default(), CaseMatching::Ignore);
    }

    #[test]
    fn case_matching_names() {
        for case in [CaseMatching::Respect, CaseMatching::Ignore, CaseMatching::Smart] {
            assert_eq!(case.to_string().parse::<CaseMatching>().ok(), Some(case));
        }
        assert!(matches!(
            CaseMatching::try_from("ignore"),
            Err(FinderError::UnknownCasing(name)) if name == "ignore"
        ));
    }
}
