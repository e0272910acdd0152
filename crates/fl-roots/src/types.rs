//! Value types produced and consumed by the solvers.

use core::fmt;

use fl_core::{Real, ensure_finite};

use crate::error::RootsResult;

pub use nalgebra::Complex;

/// Coefficients of `a·x² + b·x + c`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadraticCoefficients {
    pub a: Real,
    pub b: Real,
    pub c: Real,
}

impl QuadraticCoefficients {
    pub fn new(a: Real, b: Real, c: Real) -> Self {
        Self { a, b, c }
    }

    /// Rejects NaN and infinite coefficients.
    pub fn validate(&self) -> RootsResult<()> {
        ensure_finite(self.a, "a")?;
        ensure_finite(self.b, "b")?;
        ensure_finite(self.c, "c")?;
        Ok(())
    }

    /// `b² − 4ac`
    pub fn discriminant(&self) -> Real {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Largest coefficient magnitude.
    pub fn scale(&self) -> Real {
        self.a.abs().max(self.b.abs()).max(self.c.abs())
    }

    /// Same roots, divided by the power of two nearest [`scale`](Self::scale).
    ///
    /// The largest coefficient lands in `[0.5, 2)`, so `b²` and `4ac` can
    /// neither overflow nor underflow as a whole. Division by a power of two
    /// is exact unless a coefficient drops into the subnormal range.
    pub fn normalized(&self) -> Self {
        let scale = self.scale();
        if scale == 0.0 {
            return *self;
        }
        let s = scale.log2().floor().exp2();
        Self::new(self.a / s, self.b / s, self.c / s)
    }

    /// Horner evaluation of the polynomial at `x`.
    pub fn evaluate(&self, x: Real) -> Real {
        (self.a * x + self.b) * x + self.c
    }
}

impl fmt::Display for QuadraticCoefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:e}·x² + {:e}·x + {:e}", self.a, self.b, self.c)
    }
}

/// One slot of a [`RootPair`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Root {
    Real(Real),
    Complex(Complex<Real>),
    /// Slot unused (linear equation has one root).
    Absent,
}

impl Root {
    pub fn as_real(&self) -> Option<Real> {
        match self {
            Root::Real(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<Complex<Real>> {
        match self {
            Root::Real(x) => Some(Complex::new(*x, 0.0)),
            Root::Complex(z) => Some(*z),
            Root::Absent => None,
        }
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Root::Real(x) => write!(f, "{x:e}"),
            Root::Complex(z) if z.im < 0.0 => write!(f, "{:e} - {:e}i", z.re, -z.im),
            Root::Complex(z) => write!(f, "{:e} + {:e}i", z.re, z.im),
            Root::Absent => write!(f, "-"),
        }
    }
}

/// The two root slots of a quadratic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootPair {
    pub x1: Root,
    pub x2: Root,
}

impl RootPair {
    pub fn real(x1: Real, x2: Real) -> Self {
        Self {
            x1: Root::Real(x1),
            x2: Root::Real(x2),
        }
    }

    pub fn single(x: Real) -> Self {
        Self {
            x1: Root::Real(x),
            x2: Root::Absent,
        }
    }

    pub fn complex(x1: Complex<Real>, x2: Complex<Real>) -> Self {
        Self {
            x1: Root::Complex(x1),
            x2: Root::Complex(x2),
        }
    }

    /// Both slots real.
    pub fn as_real(&self) -> Option<(Real, Real)> {
        Some((self.x1.as_real()?, self.x2.as_real()?))
    }

    pub fn is_repeated(&self) -> bool {
        matches!(self.as_real(), Some((x1, x2)) if x1 == x2)
    }

    pub fn is_linear(&self) -> bool {
        matches!(self.x2, Root::Absent)
    }
}

/// Outcome of solving `a·x² + b·x + c = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Solution {
    Roots(RootPair),
    /// `0 = 0`: every real number is a root.
    DegenerateIdentity,
    /// Reduces to `c = 0` for a nonzero `c`: nothing is.
    NoSolution,
}

impl Solution {
    pub fn roots(&self) -> Option<&RootPair> {
        match self {
            Solution::Roots(pair) => Some(pair),
            _ => None,
        }
    }

    /// The real roots in slot order, skipping complex and absent slots.
    pub fn real_roots(&self) -> Vec<Real> {
        self.roots()
            .map(|pair| [pair.x1, pair.x2].iter().filter_map(Root::as_real).collect())
            .unwrap_or_default()
    }

    /// Short tag for logs and reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Solution::Roots(pair) => match (pair.x1, pair.x2) {
                (Root::Real(_), Root::Absent) => "linear",
                (Root::Complex(_), _) => "complex",
                _ if pair.is_repeated() => "repeated",
                _ => "distinct",
            },
            Solution::DegenerateIdentity => "identity",
            Solution::NoSolution => "no-solution",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horner_evaluation() {
        let q = QuadraticCoefficients::new(1.0, -3.0, 2.0);
        assert_eq!(q.evaluate(1.0), 0.0);
        assert_eq!(q.evaluate(2.0), 0.0);
        assert_eq!(q.evaluate(0.0), 2.0);
        assert_eq!(q.discriminant(), 1.0);
        assert_eq!(q.scale(), 3.0);
    }

    #[test]
    fn normalization_is_exact_and_bounded() {
        let q = QuadraticCoefficients::new(3.0, -6.0, 1.5);
        assert_eq!(q.normalized(), QuadraticCoefficients::new(0.75, -1.5, 0.375));

        for q in [
            QuadraticCoefficients::new(1e200, 0.0, 1e200),
            QuadraticCoefficients::new(1e-200, 1e-200, 1e-200),
            QuadraticCoefficients::new(-3e300, 1.0, 2e300),
        ] {
            let n = q.normalized();
            assert!((0.5..2.0).contains(&n.scale()), "{q} -> {n}");
            assert!(n.discriminant().is_finite());
        }
        let zero = QuadraticCoefficients::new(0.0, 0.0, 0.0);
        assert_eq!(zero.normalized(), zero);
    }

    #[test]
    fn validate_rejects_non_finite() {
        assert!(QuadraticCoefficients::new(1.0, 2.0, 3.0).validate().is_ok());
        assert!(QuadraticCoefficients::new(1.0, f64::NAN, 3.0).validate().is_err());
        assert!(
            QuadraticCoefficients::new(1.0, 2.0, f64::NEG_INFINITY)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn solution_kinds() {
        assert_eq!(Solution::Roots(RootPair::single(2.0)).kind(), "linear");
        assert_eq!(Solution::Roots(RootPair::real(1.0, 1.0)).kind(), "repeated");
        assert_eq!(Solution::Roots(RootPair::real(1.0, 2.0)).kind(), "distinct");
        let z = Complex::new(0.0, 1.0);
        assert_eq!(Solution::Roots(RootPair::complex(z, z.conj())).kind(), "complex");
        assert_eq!(Solution::NoSolution.kind(), "no-solution");
        assert!(Solution::DegenerateIdentity.real_roots().is_empty());
    }

    #[test]
    fn root_display() {
        assert_eq!(Root::Absent.to_string(), "-");
        assert_eq!(Root::Complex(Complex::new(1.0, -2.0)).to_string(), "1e0 - 2e0i");
    }
}
