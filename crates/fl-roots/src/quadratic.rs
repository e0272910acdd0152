//! Stable quadratic solver.
//!
//! Classification, in order:
//! 1. non-finite coefficient -> `InvalidArgument`
//! 2. `a ≈ 0`: identity, no solution, or the linear root `-c/b`
//! 3. `D ≈ 0`: repeated root `-b/2a`
//! 4. `D < 0`: complex conjugate pair
//! 5. `D > 0`: `q = -(b + sign(b)·√D)/2`, `x1 = q/a`, `x2 = c/q`
//!
//! Steps 3 to 5 work on [`QuadraticCoefficients::normalized`] coefficients.

use fl_core::{Real, is_negligible};
use tracing::trace;

use crate::error::{RootsError, RootsResult};
use crate::types::{Complex, QuadraticCoefficients, Root, RootPair, Solution};

/// Thresholds used to classify the input.
#[derive(Clone, Copy, Debug)]
pub struct SolverConfig {
    /// `a` (or `b`) is treated as zero when `|coef| <= coefficient_rel * max(|a|,|b|,|c|)`.
    pub coefficient_rel: Real,
    /// `D` is treated as zero when `|D| <= discriminant_rel * max(b², |4ac|)`.
    pub discriminant_rel: Real,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            coefficient_rel: 1e-12,
            discriminant_rel: 8.0 * Real::EPSILON,
        }
    }
}

/// Solve `a·x² + b·x + c = 0` with the default [`SolverConfig`].
pub fn solve_quadratic(a: Real, b: Real, c: Real) -> RootsResult<Solution> {
    solve_quadratic_with(a, b, c, &SolverConfig::default())
}

pub fn solve_quadratic_with(
    a: Real,
    b: Real,
    c: Real,
    config: &SolverConfig,
) -> RootsResult<Solution> {
    let coeffs = QuadraticCoefficients::new(a, b, c);
    coeffs.validate()?;

    let scale = coeffs.scale();
    if is_negligible(a, scale, config.coefficient_rel) {
        return Ok(solve_degenerate(&coeffs, scale, config));
    }

    // same roots, but b² and 4ac stay finite
    let n = coeffs.normalized();
    let d = n.discriminant();
    let d_scale = (n.b * n.b).max((4.0 * n.a * n.c).abs());
    if is_negligible(d, d_scale, config.discriminant_rel) {
        let x = -n.b / (2.0 * n.a);
        trace!(a, b, c, d, x, "repeated root");
        return Ok(Solution::Roots(RootPair::real(x, x)));
    }

    if d < 0.0 {
        let re = -n.b / (2.0 * n.a);
        let im = (-d).sqrt() / (2.0 * n.a).abs();
        trace!(a, b, c, d, re, im, "complex roots");
        let z = Complex::new(re, im);
        return Ok(Solution::Roots(RootPair::complex(z, z.conj())));
    }

    let sqrt_d = d.sqrt();
    let sign_b = if n.b >= 0.0 { 1.0 } else { -1.0 };
    let q = -0.5 * (n.b + sign_b * sqrt_d);

    if is_negligible(q, n.scale(), config.coefficient_rel) {
        // q ≈ 0 needs b ≈ 0 as well, so the textbook numerators do not cancel
        let x1 = (-n.b + sqrt_d) / (2.0 * n.a);
        let x2 = (-n.b - sqrt_d) / (2.0 * n.a);
        trace!(a, b, c, d, q, x1, x2, "distinct roots, direct formula");
        return Ok(Solution::Roots(RootPair::real(x1, x2)));
    }

    let x1 = q / n.a;
    let x2 = n.c / q;
    trace!(a, b, c, d, q, x1, x2, "distinct roots, stable formula");
    Ok(Solution::Roots(RootPair::real(x1, x2)))
}

fn solve_degenerate(
    coeffs: &QuadraticCoefficients,
    scale: Real,
    config: &SolverConfig,
) -> Solution {
    let QuadraticCoefficients { a, b, c } = *coeffs;
    if is_negligible(b, scale, config.coefficient_rel) {
        // scale == 0 makes everything negligible, which is the 0 = 0 case
        if is_negligible(c, scale, config.coefficient_rel) {
            trace!(a, b, c, "degenerate identity");
            Solution::DegenerateIdentity
        } else {
            trace!(a, b, c, "no solution");
            Solution::NoSolution
        }
    } else {
        let x = -c / b;
        trace!(a, b, c, x, "linear root");
        Solution::Roots(RootPair::single(x))
    }
}

/// Real-only variant: a negative discriminant is reported as
/// [`RootsError::ComplexRoots`] instead of a complex pair.
pub fn solve_quadratic_real(a: Real, b: Real, c: Real) -> RootsResult<Solution> {
    let solution = solve_quadratic(a, b, c)?;
    if let Some(Root::Complex(z)) = solution.roots().map(|pair| pair.x1) {
        return Err(RootsError::ComplexRoots { re: z.re, im: z.im });
    }
    Ok(solution)
}
