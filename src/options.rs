//! Configuration options for a [`Finder`](crate::finder::Finder).
//!
//! Options are built with [`FinderOptionsBuilder`] or loaded from RON:
//!
//! ```
//! use fzr::prelude::*;
//!
//! let options = FinderOptionsBuilder::default()
//!     .try_algorithm("v1")
//!     .unwrap()
//!     .limit(Some(10))
//!     .build()
//!     .unwrap();
//! assert_eq!(options.algorithm, Algorithm::V1);
//!
//! let options = FinderOptions::from_ron("(casing: \"smart-case\", tiebreak: [\"length\"])").unwrap();
//! assert_eq!(options.casing, CaseMatching::Smart);
//! assert_eq!(options.limit, Some(50));
//! ```

use derive_builder::Builder;
use serde::Deserialize;

use crate::CaseMatching;
use crate::error::FinderError;
use crate::fuzzy_matcher::Algorithm;
use crate::fuzzy_matcher::slab::{SLAB_16_SIZE, SLAB_32_SIZE};
use crate::item::RankCriteria;

/// Default number of results returned by a search
pub const DEFAULT_LIMIT: usize = 50;

/// Search settings
#[derive(Builder, Debug, Clone, PartialEq, Eq, Deserialize)]
#[builder(build_fn(name = "final_build", error = "FinderError"))]
#[builder(default)]
#[serde(default)]
pub struct FinderOptions {
    /// Case sensitivity of the search
    #[builder(try_setter, setter(into))]
    pub casing: CaseMatching,

    /// Matching algorithm
    #[builder(try_setter, setter(into))]
    pub algorithm: Algorithm,

    /// Maximum number of results, `None` for all of them
    pub limit: Option<usize>,

    /// Sort results by score
    pub sort: bool,

    /// Criteria applied in order when scores are tied
    #[builder(setter(into))]
    pub tiebreak: Vec<RankCriteria>,

    /// Compute the positions of the matched runes
    pub with_positions: bool,

    /// 16-bit cells available to the optimal algorithm. Inputs whose
    /// `text * pattern` length exceeds this are matched greedily.
    pub slab_size16: usize,

    /// Initial 32-bit cells of each slab
    pub slab_size32: usize,
}

impl Default for FinderOptions {
    fn default() -> Self {
        Self {
            casing: CaseMatching::default(),
            algorithm: Algorithm::default(),
            limit: Some(DEFAULT_LIMIT),
            sort: true,
            tiebreak: Vec::new(),
            with_positions: false,
            slab_size16: SLAB_16_SIZE,
            slab_size32: SLAB_32_SIZE,
        }
    }
}

impl FinderOptionsBuilder {
    /// Builds and validates the FinderOptions
    pub fn build(&self) -> Result<FinderOptions, FinderError> {
        self.final_build()?.validate()
    }
}

impl FinderOptions {
    /// Parse options from RON. Missing fields keep their default.
    pub fn from_ron(s: &str) -> Result<Self, FinderError> {
        ron::from_str::<FinderOptions>(s)?.validate()
    }

    fn validate(self) -> Result<Self, FinderError> {
        if self.slab_size16 == 0 || self.slab_size32 == 0 {
            return Err(FinderError::InvalidSlabSize);
        }
        Ok(self)
    }
}
