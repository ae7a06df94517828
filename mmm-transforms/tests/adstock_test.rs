//! Adstock transform tests: kernel shapes, boundary truncation, and
//! input validation.

use mmm_core::errors::TransformError;
use mmm_core::params::Adstock;
use mmm_transforms::{apply_adstock, geometric_adstock, weibull_adstock};

// ── Geometric kernel ─────────────────────────────────────────────────────

#[test]
fn geometric_preserves_length() {
    let x: Vec<f64> = (0..52).map(|i| (i % 7) as f64 * 10.0).collect();
    let out = geometric_adstock(&x, 0.5, 8).unwrap();
    assert_eq!(out.len(), x.len());
}

#[test]
fn geometric_impulse_decays_strictly() {
    let mut x = vec![0.0; 20];
    x[0] = 100.0;
    let out = geometric_adstock(&x, 0.5, 8).unwrap();
    assert!(out[0] > out[1]);
    assert!(out[1] > out[2]);
    assert!(out[2] > out[3]);
    // The first period retains most of the impulse.
    assert!(out[0] > 50.0);
}

#[test]
fn geometric_zero_decay_is_identity() {
    let x = vec![100.0, 0.0, 0.0, 0.0];
    let out = geometric_adstock(&x, 0.0, 4).unwrap();
    assert_eq!(out, vec![100.0, 0.0, 0.0, 0.0]);
}

#[test]
fn geometric_zero_decay_identity_on_arbitrary_series() {
    let x = vec![3.0, 14.0, 15.0, 92.0, 65.0, 35.0];
    let out = geometric_adstock(&x, 0.0, 8).unwrap();
    for (a, b) in x.iter().zip(out.iter()) {
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn geometric_truncates_at_series_start() {
    // A constant series only reaches the full kernel mass once the
    // window no longer overlaps the series boundary.
    let x = vec![10.0; 12];
    let out = geometric_adstock(&x, 0.6, 4).unwrap();
    assert!(out[0] < 10.0);
    assert!(out[1] < 10.0);
    assert!(out[2] < 10.0);
    assert!((out[3] - 10.0).abs() < 1e-9);
    assert!((out[11] - 10.0).abs() < 1e-9);
}

// ── Weibull kernel ───────────────────────────────────────────────────────

#[test]
fn weibull_preserves_length() {
    let mut x = vec![0.0; 20];
    x[0] = 100.0;
    let out = weibull_adstock(&x, 2.0, 3.0, 12).unwrap();
    assert_eq!(out.len(), 20);
}

#[test]
fn weibull_conserves_impulse_mass_after_window() {
    // Once the full reversed kernel has passed over the impulse, the
    // total carried mass equals the normalized kernel sum (1.0) as long
    // as the series is at least max_lag + impulse position long.
    let mut x = vec![0.0; 30];
    x[0] = 100.0;
    let out = weibull_adstock(&x, 2.0, 3.0, 12).unwrap();
    let total: f64 = out.iter().sum();
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn weibull_rejects_bad_shape_and_scale() {
    let x = vec![1.0, 2.0, 3.0];
    assert!(matches!(
        weibull_adstock(&x, 0.0, 3.0, 12),
        Err(TransformError::NonPositiveShape { .. })
    ));
    assert!(matches!(
        weibull_adstock(&x, 2.0, -1.0, 12),
        Err(TransformError::NonPositiveScale { .. })
    ));
}

// ── Validation ───────────────────────────────────────────────────────────

#[test]
fn empty_series_is_rejected() {
    assert!(matches!(
        geometric_adstock(&[], 0.5, 8),
        Err(TransformError::EmptySeries)
    ));
}

#[test]
fn negative_spend_is_rejected() {
    assert!(matches!(
        geometric_adstock(&[10.0, -1.0], 0.5, 8),
        Err(TransformError::NegativeValue { index: 1, .. })
    ));
}

#[test]
fn decay_rate_out_of_range_is_rejected() {
    let x = vec![1.0; 4];
    assert!(matches!(
        geometric_adstock(&x, 1.0, 8),
        Err(TransformError::DecayRateOutOfRange { .. })
    ));
    assert!(matches!(
        geometric_adstock(&x, -0.1, 8),
        Err(TransformError::DecayRateOutOfRange { .. })
    ));
}

#[test]
fn max_lag_below_one_is_rejected() {
    assert!(matches!(
        geometric_adstock(&[1.0, 2.0], 0.5, 0),
        Err(TransformError::MaxLagTooSmall { value: 0 })
    ));
}

// ── Variant dispatch ─────────────────────────────────────────────────────

#[test]
fn dispatch_matches_direct_calls() {
    let x = vec![50.0, 20.0, 0.0, 10.0, 0.0, 0.0];
    let spec = Adstock::Geometric {
        decay_rate: 0.4,
        max_lag: 4,
    };
    assert_eq!(
        apply_adstock(&spec, &x).unwrap(),
        geometric_adstock(&x, 0.4, 4).unwrap()
    );

    let spec = Adstock::Weibull {
        shape: 1.5,
        scale: 2.0,
        max_lag: 6,
    };
    assert_eq!(
        apply_adstock(&spec, &x).unwrap(),
        weibull_adstock(&x, 1.5, 2.0, 6).unwrap()
    );
}
