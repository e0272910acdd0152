//! Serializable views of library results for `--json` output.

use fl_core::{Real, Tolerance};
use fl_roots::{QuadraticCoefficients, Root, Solution};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EqualReport {
    pub x: Real,
    pub y: Real,
    pub tolerance: Tolerance,
    pub exact_equal: bool,
    pub approx_equal: bool,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct RootReport {
    pub re: Real,
    pub im: Real,
}

#[derive(Debug, Serialize)]
pub struct SolveReport {
    pub coefficients: QuadraticCoefficients,
    pub kind: &'static str,
    pub roots: Vec<RootReport>,
}

impl SolveReport {
    pub fn new(coefficients: QuadraticCoefficients, solution: &Solution) -> Self {
        let roots = solution
            .roots()
            .map(|pair| {
                [pair.x1, pair.x2]
                    .iter()
                    .filter_map(Root::as_complex)
                    .map(|z| RootReport { re: z.re, im: z.im })
                    .collect()
            })
            .unwrap_or_default();
        Self {
            coefficients,
            kind: solution.kind(),
            roots,
        }
    }
}
