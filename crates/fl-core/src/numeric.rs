use crate::FlError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, FlError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(FlError::NonFinite { what, value: v })
    }
}

/// Machine epsilon found the hard way: keep halving until `1 + eps/2`
/// rounds back to `1`.
///
/// Always equals [`Real::EPSILON`]; kept as a function so callers can show
/// where that constant comes from.
pub fn machine_epsilon() -> Real {
    let mut eps: Real = 1.0;
    while 1.0 + eps / 2.0 != 1.0 {
        eps /= 2.0;
    }
    eps
}

/// `|approx - exact| / |exact|`, or the absolute error when `exact` is zero.
pub fn relative_error(approx: Real, exact: Real) -> Real {
    let diff = (approx - exact).abs();
    if exact == 0.0 { diff } else { diff / exact.abs() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_finite_passes_through() {
        assert_eq!(ensure_finite(2.5, "x").unwrap(), 2.5);
        assert!(ensure_finite(Real::INFINITY, "x").is_err());
    }

    #[test]
    fn relative_error_falls_back_to_absolute_at_zero() {
        assert_eq!(relative_error(1e-3, 0.0), 1e-3);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-12);
        assert!((relative_error(-1.1, -1.0) - 0.1).abs() < 1e-12);
    }
}
