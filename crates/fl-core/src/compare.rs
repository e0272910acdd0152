//! Approximate equality for floating point values.
//!
//! Exact `==` on computed values is unreliable: every operation may round by
//! up to half an ulp, so `0.1 + 0.2 != 0.3`. Two comparison modes are offered:
//!
//! - absolute: `|x - y| < eps`, fine when magnitudes are known and similar
//! - relative: `|x - y| <= eps * max(|x|, |y|, 1)`, scales with the operands
//!
//! NaN is never approximately equal to anything, itself included.

use crate::{FlError, FlResult, Real};

/// Default absolute tolerance used by [`approx_equal_default`].
pub const DEFAULT_TOLERANCE: Real = 1e-9;

/// A validated, non-negative comparison tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTolerance"))]
pub enum Tolerance {
    Absolute(Real),
    Relative(Real),
}

/// Unchecked wire form of [`Tolerance`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
enum RawTolerance {
    Absolute(Real),
    Relative(Real),
}

#[cfg(feature = "serde")]
impl TryFrom<RawTolerance> for Tolerance {
    type Error = FlError;

    fn try_from(raw: RawTolerance) -> FlResult<Self> {
        match raw {
            RawTolerance::Absolute(eps) => Self::absolute(eps),
            RawTolerance::Relative(eps) => Self::relative(eps),
        }
    }
}

impl Tolerance {
    pub fn absolute(eps: Real) -> FlResult<Self> {
        check_tolerance(eps).map(Self::Absolute)
    }

    pub fn relative(eps: Real) -> FlResult<Self> {
        check_tolerance(eps).map(Self::Relative)
    }

    pub fn eps(self) -> Real {
        match self {
            Self::Absolute(eps) | Self::Relative(eps) => eps,
        }
    }

    /// Whether `x` and `y` are equal under this tolerance.
    pub fn admits(self, x: Real, y: Real) -> bool {
        if x.is_nan() || y.is_nan() {
            return false;
        }
        if x == y {
            return true;
        }
        let diff = (x - y).abs();
        match self {
            Self::Absolute(eps) => diff < eps,
            Self::Relative(eps) => diff <= eps * x.abs().max(y.abs()).max(1.0),
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::Absolute(DEFAULT_TOLERANCE)
    }
}

fn check_tolerance(eps: Real) -> FlResult<Real> {
    // NaN fails `>= 0.0` as well
    if eps >= 0.0 {
        Ok(eps)
    } else {
        Err(FlError::InvalidArgument {
            what: "tolerance",
            value: eps,
        })
    }
}

/// `true` iff `|x - y| < tolerance` (or `x == y` exactly).
///
/// Fails with [`FlError::InvalidArgument`] when `tolerance` is negative or NaN.
pub fn approx_equal(x: Real, y: Real, tolerance: Real) -> FlResult<bool> {
    Ok(Tolerance::absolute(tolerance)?.admits(x, y))
}

/// [`approx_equal`] with [`DEFAULT_TOLERANCE`].
pub fn approx_equal_default(x: Real, y: Real) -> bool {
    Tolerance::default().admits(x, y)
}

/// `true` iff `|x - y| <= tolerance * max(|x|, |y|, 1)`.
pub fn approx_equal_rel(x: Real, y: Real, tolerance: Real) -> FlResult<bool> {
    Ok(Tolerance::relative(tolerance)?.admits(x, y))
}

/// Combined absolute/relative tolerance pair
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// Passes if either the absolute or the relative check passes.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff.is_nan() {
        return a == b;
    }
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// `|value| <= rel * scale`: the value is lost in the rounding noise of
/// quantities of size `scale`.
pub fn is_negligible(value: Real, scale: Real, rel: Real) -> bool {
    nearly_equal(
        value,
        0.0,
        Tolerances {
            abs: rel * scale,
            rel: 0.0,
        },
    )
}
