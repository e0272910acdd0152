//! Integration tests for the lab experiments.

use fl_core::Tolerance;
use fl_lab::{
    DifferenceScheme, Sweep, best_step, compare_formulas, error_sweep, standard_probes,
};
use fl_roots::QuadraticCoefficients;
use proptest::prelude::*;

#[test]
fn tenths_probe_is_only_approximately_equal() {
    let probes = standard_probes(Tolerance::default());
    let tenths = &probes[0];
    assert_eq!(tenths.label, "0.1 + 0.2 vs 0.3");
    assert_eq!(tenths.lhs, 0.30000000000000004);
    assert!(!tenths.exact_equal);
    assert!(tenths.approx_equal);
}

#[test]
fn forward_difference_error_is_v_shaped() {
    let sweep = Sweep::decades(-1, -15).unwrap();
    let points = error_sweep(f64::sin, f64::cos, 1.0, &sweep, DifferenceScheme::Forward).unwrap();
    assert_eq!(points.len(), 15);

    let best = best_step(&points).unwrap();
    assert!(best.h > 1e-10 && best.h < 1e-6, "best h = {:e}", best.h);
    assert!(best.error < 1e-6);

    // both ends of the curve are far worse than the bottom
    assert!(points[0].error > 1e3 * best.error);
    assert!(points[14].error > 1e3 * best.error);
}

#[test]
fn central_difference_prefers_larger_steps() {
    let sweep = Sweep::decades(-1, -15).unwrap();
    let forward = error_sweep(f64::sin, f64::cos, 1.0, &sweep, DifferenceScheme::Forward).unwrap();
    let central = error_sweep(f64::sin, f64::cos, 1.0, &sweep, DifferenceScheme::Central).unwrap();

    let best_forward = best_step(&forward).unwrap();
    let best_central = best_step(&central).unwrap();
    assert!(best_central.h > best_forward.h);
    assert!(best_central.error < best_forward.error);
}

#[test]
fn hard_quadratic_exposes_naive_small_root() {
    let cmp = compare_formulas(QuadraticCoefficients::new(1e-4, 1e4, 1e-4)).unwrap();
    // ascending: [large negative, small negative]
    let small = cmp.roots[1];
    assert!(small.disagreement > 1e-6);
    assert!(small.stable_residual < small.naive_residual);
    assert!(cmp.roots[0].disagreement < 1e-12);
}

#[test]
fn sign_reversed_quadratic_exposes_naive_small_root() {
    let cmp = compare_formulas(QuadraticCoefficients::new(1e-4, -1e4, 1e-4)).unwrap();
    let small = cmp.roots[0];
    assert!((small.stable - 1e-8).abs() < 1e-14);
    assert!(small.disagreement > 1e-6);
}

proptest! {
    #[test]
    fn well_separated_roots_agree(r1 in -10.0_f64..-1.0, r2 in 1.0_f64..10.0) {
        // (x - r1)(x - r2): opposite signs, so the textbook formula never cancels badly
        let coeffs = QuadraticCoefficients::new(1.0, -(r1 + r2), r1 * r2);
        let cmp = compare_formulas(coeffs).unwrap();
        prop_assert!(cmp.worst_disagreement() < 1e-12);
    }
}
