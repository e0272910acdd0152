//! Quadratic root solving that survives finite precision.
//!
//! The textbook formula `(-b ± √D) / 2a` subtracts two nearly equal numbers
//! whenever `|b| ≫ √|4ac|`, which wipes out the digits of the small root. The
//! solver here picks, per root, the algebraically equivalent form that only
//! ever adds same-signed quantities.

pub mod error;
pub mod naive;
pub mod quadratic;
pub mod types;

pub use error::{RootsError, RootsResult};
pub use naive::solve_quadratic_naive;
pub use quadratic::{SolverConfig, solve_quadratic, solve_quadratic_real, solve_quadratic_with};
pub use types::{Complex, QuadraticCoefficients, Root, RootPair, Solution};
