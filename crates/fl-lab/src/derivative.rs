//! Finite-difference derivatives and their error against step size.
//!
//! Shrinking `h` cuts the truncation error (`O(h)` forward, `O(h²)` central)
//! but the subtraction `f(x+h) - f(x)` cancels more digits, adding a rounding
//! error of order `eps/h`. The error curve is V-shaped in log-log space.

use fl_core::{Real, ensure_finite};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{LabError, LabResult};
use crate::sweep::Sweep;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DifferenceScheme {
    /// `(f(x+h) - f(x)) / h`
    Forward,
    /// `(f(x+h) - f(x-h)) / 2h`
    Central,
}

/// One sample of the error-vs-step curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorPoint {
    pub h: Real,
    pub estimate: Real,
    pub error: Real,
}

pub fn finite_difference<F>(f: F, x: Real, h: Real, scheme: DifferenceScheme) -> Real
where
    F: Fn(Real) -> Real,
{
    match scheme {
        DifferenceScheme::Forward => (f(x + h) - f(x)) / h,
        DifferenceScheme::Central => (f(x + h) - f(x - h)) / (2.0 * h),
    }
}

/// Absolute error of the finite-difference estimate at each step in `sweep`.
pub fn error_sweep<F, D>(
    f: F,
    df: D,
    x: Real,
    sweep: &Sweep,
    scheme: DifferenceScheme,
) -> LabResult<Vec<ErrorPoint>>
where
    F: Fn(Real) -> Real,
    D: Fn(Real) -> Real,
{
    ensure_finite(x, "x")?;
    let exact = ensure_finite(df(x), "exact derivative")?;
    info!(x, %sweep, ?scheme, "finite-difference error sweep");

    sweep
        .generate_points()
        .into_iter()
        .map(|h| {
            if !(h.is_finite() && h > 0.0) {
                return Err(LabError::InvalidSweep {
                    what: "step sizes must be positive and finite",
                });
            }
            let estimate = finite_difference(&f, x, h, scheme);
            let point = ErrorPoint {
                h,
                estimate,
                error: (estimate - exact).abs(),
            };
            debug!(h, estimate, error = point.error, "step");
            Ok(point)
        })
        .collect()
}

/// Sample with the smallest error; NaN errors never win.
pub fn best_step(points: &[ErrorPoint]) -> Option<ErrorPoint> {
    points
        .iter()
        .filter(|p| !p.error.is_nan())
        .min_by(|a, b| a.error.total_cmp(&b.error))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::SweepType;

    #[test]
    fn forward_difference_of_square() {
        // ((x+h)² - x²)/h = 2x + h
        let est = finite_difference(|x| x * x, 3.0, 0.5, DifferenceScheme::Forward);
        assert_eq!(est, 6.5);
    }

    #[test]
    fn central_difference_exact_for_quadratic() {
        let est = finite_difference(|x| x * x, 3.0, 0.5, DifferenceScheme::Central);
        assert_eq!(est, 6.0);
    }

    #[test]
    fn non_positive_steps_are_rejected() {
        let sweep = Sweep::new(-1e-3, 1e-3, 3, SweepType::Linear).unwrap();
        let err = error_sweep(f64::sin, f64::cos, 1.0, &sweep, DifferenceScheme::Forward)
            .unwrap_err();
        assert!(matches!(err, LabError::InvalidSweep { .. }));
    }

    #[test]
    fn non_finite_point_is_rejected() {
        let sweep = Sweep::decades(-1, -3).unwrap();
        let err = error_sweep(f64::sin, f64::cos, f64::NAN, &sweep, DifferenceScheme::Forward)
            .unwrap_err();
        assert!(matches!(err, LabError::Numeric(_)));
    }

    #[test]
    fn best_step_skips_nan() {
        let points = [
            ErrorPoint {
                h: 1.0,
                estimate: 0.0,
                error: f64::NAN,
            },
            ErrorPoint {
                h: 0.1,
                estimate: 0.0,
                error: 0.5,
            },
        ];
        assert_eq!(best_step(&points).unwrap().h, 0.1);
        assert!(best_step(&[]).is_none());
    }
}
