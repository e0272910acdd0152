//! fl-core: numeric foundation for floatlab.
//!
//! Contains:
//! - numeric (Real, machine epsilon, relative error, finiteness checks)
//! - compare (Tolerance modes + approximate equality)
//! - error (shared error types)

pub mod compare;
pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use compare::*;
pub use error::{FlError, FlResult};
pub use numeric::*;
