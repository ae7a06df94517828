//! Saturation transform tests: half-point identity, monotonicity,
//! bounds, and the zero-spend guard.

use mmm_core::errors::TransformError;
use mmm_core::params::Saturation;
use mmm_transforms::{
    apply_saturation, hill_saturation, logistic_saturation, michaelis_menten, saturate,
};

// ── Hill ─────────────────────────────────────────────────────────────────

#[test]
fn hill_half_point_is_exact() {
    let out = hill_saturation(&[500.0], 500.0, 2.0).unwrap();
    assert!((out[0] - 0.5).abs() < 1e-9);

    // Holds for any nonzero slope.
    for s in [0.5, 1.0, 3.7, -2.0] {
        let out = hill_saturation(&[123.0], 123.0, s).unwrap();
        assert!((out[0] - 0.5).abs() < 1e-12, "s = {s}");
    }
}

#[test]
fn hill_is_monotone_and_bounded() {
    let x: Vec<f64> = (0..100).map(|i| i as f64 * 10.0).collect();
    let out = hill_saturation(&x, 500.0, 2.0).unwrap();
    for pair in out.windows(2) {
        assert!(pair[1] >= pair[0]);
    }
    for &v in &out {
        assert!((0.0..1.0).contains(&v));
    }
}

#[test]
fn hill_zero_spend_guard() {
    // 0^(-s) would divide by zero; the guard pins the output to 0.
    let out = hill_saturation(&[0.0, 10.0], 100.0, 1.5).unwrap();
    assert_eq!(out[0], 0.0);
    assert!(out.iter().all(|v| v.is_finite()));
}

#[test]
fn hill_rejects_non_positive_k() {
    assert!(matches!(
        hill_saturation(&[1.0], 0.0, 2.0),
        Err(TransformError::NonPositiveHalfSaturation { .. })
    ));
}

// ── Logistic ─────────────────────────────────────────────────────────────

#[test]
fn logistic_bounded_over_negative_and_positive_inputs() {
    let x: Vec<f64> = (0..100).map(|i| -10.0 + i as f64 * 0.2).collect();
    let out = logistic_saturation(&x, 1.0, 1.0, 0.0);
    for &v in &out {
        assert!((0.0..=1.0).contains(&v));
    }
}

#[test]
fn logistic_increasing_in_x_for_positive_k() {
    let x: Vec<f64> = (0..50).map(|i| i as f64).collect();
    let out = logistic_saturation(&x, 2.0, 0.3, 10.0);
    for pair in out.windows(2) {
        assert!(pair[1] > pair[0]);
    }
}

// ── Michaelis-Menten ─────────────────────────────────────────────────────

#[test]
fn michaelis_menten_equals_scaled_hill_s1() {
    let x = vec![0.0, 10.0, 50.0, 200.0, 1000.0];
    let vmax = 3.0;
    let km = 75.0;
    let mm = michaelis_menten(&x, vmax, km).unwrap();
    let hill = hill_saturation(&x, km, 1.0).unwrap();
    for (a, b) in mm.iter().zip(hill.iter()) {
        assert!((a - vmax * b).abs() < 1e-12);
    }
}

#[test]
fn michaelis_menten_bounded_below_vmax() {
    let out = michaelis_menten(&[1e12], 5.0, 100.0).unwrap();
    assert!(out[0] < 5.0);
    assert!(out[0] > 4.99);
}

#[test]
fn michaelis_menten_rejects_non_positive_km() {
    assert!(matches!(
        michaelis_menten(&[1.0], 1.0, 0.0),
        Err(TransformError::NonPositiveMichaelisConstant { .. })
    ));
}

// ── Variant dispatch ─────────────────────────────────────────────────────

#[test]
fn dispatch_matches_direct_calls() {
    let x = vec![0.0, 5.0, 50.0, 500.0];
    let spec = Saturation::Hill { k: 50.0, s: 1.2 };
    assert_eq!(
        apply_saturation(&spec, &x).unwrap(),
        hill_saturation(&x, 50.0, 1.2).unwrap()
    );
    for &v in &x {
        assert_eq!(saturate(&spec, v), hill_saturation(&[v], 50.0, 1.2).unwrap()[0]);
    }
}
