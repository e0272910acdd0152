//! Catastrophic cancellation: subtracting nearly equal numbers keeps the
//! rounding error of the operands and drops their leading digits.

use fl_core::{Real, relative_error};
use serde::Serialize;

/// `(1 + x) - 1` against the exact answer `x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CancellationRow {
    pub x: Real,
    pub computed: Real,
    pub relative_error: Real,
}

/// `√(x+1) − √x` written naively and rationalised.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SqrtDifferenceRow {
    pub x: Real,
    pub naive: Real,
    pub rewritten: Real,
    pub relative_error: Real,
}

pub fn one_plus_small(xs: &[Real]) -> Vec<CancellationRow> {
    xs.iter()
        .map(|&x| {
            let computed = (1.0 + x) - 1.0;
            CancellationRow {
                x,
                computed,
                relative_error: relative_error(computed, x),
            }
        })
        .collect()
}

/// The rewritten form `1 / (√(x+1) + √x)` only adds, so it serves as the
/// reference for the naive difference.
pub fn sqrt_difference(xs: &[Real]) -> Vec<SqrtDifferenceRow> {
    xs.iter()
        .map(|&x| {
            let (hi, lo) = ((x + 1.0).sqrt(), x.sqrt());
            let naive = hi - lo;
            let rewritten = 1.0 / (hi + lo);
            SqrtDifferenceRow {
                x,
                naive,
                rewritten,
                relative_error: relative_error(naive, rewritten),
            }
        })
        .collect()
}
