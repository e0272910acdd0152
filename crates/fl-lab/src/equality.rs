//! Exact vs approximate equality on computed values.

use fl_core::{Real, Tolerance};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct EqualityProbe {
    pub label: String,
    pub lhs: Real,
    pub rhs: Real,
    pub difference: Real,
    pub exact_equal: bool,
    pub approx_equal: bool,
    pub tolerance: Tolerance,
}

impl EqualityProbe {
    pub fn evaluate(label: impl Into<String>, lhs: Real, rhs: Real, tolerance: Tolerance) -> Self {
        Self {
            label: label.into(),
            lhs,
            rhs,
            difference: (lhs - rhs).abs(),
            exact_equal: lhs == rhs,
            approx_equal: tolerance.admits(lhs, rhs),
            tolerance,
        }
    }
}

/// Classic cases where `==` disagrees with arithmetic on paper.
pub fn standard_probes(tolerance: Tolerance) -> Vec<EqualityProbe> {
    let sqrt2 = 2f64.sqrt();
    vec![
        EqualityProbe::evaluate("0.1 + 0.2 vs 0.3", 0.1 + 0.2, 0.3, tolerance),
        EqualityProbe::evaluate("0.1 * 3 vs 0.3", 0.1 * 3.0, 0.3, tolerance),
        EqualityProbe::evaluate("1 - 0.9 vs 0.1", 1.0 - 0.9, 0.1, tolerance),
        EqualityProbe::evaluate("sqrt(2)^2 vs 2", sqrt2 * sqrt2, 2.0, tolerance),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_probes_fail_exact_but_pass_approx() {
        let probes = standard_probes(Tolerance::default());
        assert_eq!(probes.len(), 4);
        for probe in &probes {
            assert!(!probe.exact_equal, "{}", probe.label);
            assert!(probe.approx_equal, "{}", probe.label);
            assert!(probe.difference > 0.0 && probe.difference < 1e-15);
        }
    }

    #[test]
    fn zero_tolerance_only_admits_exact() {
        let exact = Tolerance::Absolute(0.0);
        let probe = EqualityProbe::evaluate("0.5 + 0.25", 0.5 + 0.25, 0.75, exact);
        assert!(probe.exact_equal);
        assert!(probe.approx_equal);

        let probes = standard_probes(exact);
        assert!(probes.iter().all(|p| !p.approx_equal));
    }
}
