//! Errors raised while configuring a [`Finder`](crate::finder::Finder).
//!
//! Matching itself never fails: a candidate either matches or it does not.

use thiserror::Error;

/// Error type for option parsing and validation
#[derive(Error, Debug)]
pub enum FinderError {
    /// Case matching mode that is not one of `case-sensitive`,
    /// `case-insensitive` or `smart-case`
    #[error("Unknown casing {0:?}")]
    UnknownCasing(String),
    /// Algorithm name that is not recognized
    #[error("Unknown algorithm {0:?}")]
    UnknownAlgorithm(String),
    /// Tiebreak criteria that is not recognized
    #[error("Unknown rank criteria {0:?}")]
    UnknownCriteria(String),
    /// A slab needs room for at least one cell of each kind
    #[error("Slab sizes must be greater than zero")]
    InvalidSlabSize,
    /// Malformed RON configuration
    #[error("Error parsing options: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// Builder field left unset
    #[error(transparent)]
    Uninitialized(#[from] derive_builder::UninitializedFieldError),
}
