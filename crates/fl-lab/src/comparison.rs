//! Textbook vs stable quadratic formula, side by side.

use fl_core::{Real, relative_error};
use fl_roots::{QuadraticCoefficients, solve_quadratic, solve_quadratic_naive};
use serde::Serialize;
use tracing::debug;

use crate::error::{LabError, LabResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RootComparison {
    pub naive: Real,
    pub stable: Real,
    /// `|p(naive)|`
    pub naive_residual: Real,
    /// `|p(stable)|`
    pub stable_residual: Real,
    /// Relative difference of the naive root from the stable one.
    pub disagreement: Real,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormulaComparison {
    pub coefficients: QuadraticCoefficients,
    /// Ascending by root value.
    pub roots: Vec<RootComparison>,
}

impl FormulaComparison {
    /// Largest disagreement between the two formulas over both roots.
    pub fn worst_disagreement(&self) -> Real {
        self.roots
            .iter()
            .map(|r| r.disagreement)
            .fold(0.0, Real::max)
    }
}

/// Solve with both formulas and pair the roots up in ascending order.
pub fn compare_formulas(coefficients: QuadraticCoefficients) -> LabResult<FormulaComparison> {
    let QuadraticCoefficients { a, b, c } = coefficients;
    let (n1, n2) = solve_quadratic_naive(a, b, c)?.ok_or(LabError::NotComparable {
        what: "negative discriminant",
    })?;
    let stable = solve_quadratic(a, b, c)?.real_roots();
    let &[s1, s2] = stable.as_slice() else {
        return Err(LabError::NotComparable {
            what: "stable solver did not return two real roots",
        });
    };

    let mut naive = [n1, n2];
    let mut stable = [s1, s2];
    naive.sort_by(Real::total_cmp);
    stable.sort_by(Real::total_cmp);

    let roots = naive
        .iter()
        .zip(stable.iter())
        .map(|(&n, &s)| RootComparison {
            naive: n,
            stable: s,
            naive_residual: coefficients.evaluate(n).abs(),
            stable_residual: coefficients.evaluate(s).abs(),
            disagreement: relative_error(n, s),
        })
        .collect();

    let comparison = FormulaComparison {
        coefficients,
        roots,
    };
    debug!(
        %coefficients,
        worst = comparison.worst_disagreement(),
        "compared quadratic formulas"
    );
    Ok(comparison)
}
