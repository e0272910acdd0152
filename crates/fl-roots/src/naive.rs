//! Textbook `(-b ± √D) / 2a`, kept as the baseline the stable solver is
//! measured against. Loses the small root when `|b| ≫ √|4ac|`.

use fl_core::Real;

use crate::error::{RootsError, RootsResult};
use crate::types::QuadraticCoefficients;

/// Returns `((-b + √D)/2a, (-b - √D)/2a)`, or `None` when `D < 0`.
pub fn solve_quadratic_naive(a: Real, b: Real, c: Real) -> RootsResult<Option<(Real, Real)>> {
    let coeffs = QuadraticCoefficients::new(a, b, c);
    coeffs.validate()?;
    if a == 0.0 {
        return Err(RootsError::InvalidArgument {
            what: "a",
            value: a,
        });
    }

    let d = coeffs.discriminant();
    if d < 0.0 {
        return Ok(None);
    }
    let sqrt_d = d.sqrt();
    Ok(Some(((-b + sqrt_d) / (2.0 * a), (-b - sqrt_d) / (2.0 * a))))
}
