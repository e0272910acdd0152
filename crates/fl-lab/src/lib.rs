//! Floating point experiments as data.
//!
//! Each experiment returns plain rows (all `Serialize`) instead of printing,
//! so the CLI can render a table or JSON and a plotting tool can consume the
//! derivative error series directly.

pub mod cancellation;
pub mod comparison;
pub mod derivative;
pub mod equality;
pub mod error;
pub mod sweep;

pub use cancellation::{CancellationRow, SqrtDifferenceRow, one_plus_small, sqrt_difference};
pub use comparison::{FormulaComparison, RootComparison, compare_formulas};
pub use derivative::{DifferenceScheme, ErrorPoint, best_step, error_sweep, finite_difference};
pub use equality::{EqualityProbe, standard_probes};
pub use error::{LabError, LabResult};
pub use sweep::{Sweep, SweepType, decades};
