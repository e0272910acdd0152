//! Error types for root solving.

use fl_core::FlError;
use thiserror::Error;

/// Result type for root solving.
pub type RootsResult<T> = Result<T, RootsError>;

/// Failures reported by the quadratic solvers.
///
/// Degenerate inputs (`a = 0`, `a = b = 0`) are not errors; they come back
/// as [`crate::Solution`] variants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RootsError {
    /// NaN, infinite or otherwise out-of-domain input.
    #[error("Invalid argument for {what}: {value}")]
    InvalidArgument { what: &'static str, value: f64 },

    /// Negative discriminant on a real-only path.
    #[error("Complex roots {re} ± {im}i")]
    ComplexRoots { re: f64, im: f64 },
}

impl From<FlError> for RootsError {
    fn from(err: FlError) -> Self {
        match err {
            FlError::InvalidArgument { what, value } | FlError::NonFinite { what, value } => {
                RootsError::InvalidArgument { what, value }
            }
        }
    }
}
