//! Lab errors.

use fl_core::FlError;
use fl_roots::RootsError;
use thiserror::Error;

/// Result type for lab experiments.
pub type LabResult<T> = Result<T, LabError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LabError {
    /// Sweep bounds or point count unusable.
    #[error("Invalid sweep: {what}")]
    InvalidSweep { what: &'static str },

    /// The two formulas do not both produce two real roots.
    #[error("Cannot compare formulas: {what}")]
    NotComparable { what: &'static str },

    #[error("Numeric error: {0}")]
    Numeric(#[from] FlError),

    #[error("Solver error: {0}")]
    Roots(#[from] RootsError),
}
