//! Adstock transforms: carryover effects in media spend.
//!
//! The two kernels deliberately differ in edge handling and must stay
//! separate algorithms:
//!
//! - geometric uses a truncated weighted sum clipped at the series start,
//! - Weibull uses a reversed-kernel linear convolution over a
//!   zero-padded history.

use mmm_core::errors::TransformError;
use mmm_core::params::Adstock;
use statrs::distribution::{ContinuousCDF, Weibull};

/// Dispatch on the adstock variant.
pub fn apply_adstock(spec: &Adstock, x: &[f64]) -> Result<Vec<f64>, TransformError> {
    match *spec {
        Adstock::Geometric {
            decay_rate,
            max_lag,
        } => geometric_adstock(x, decay_rate, max_lag),
        Adstock::Weibull {
            shape,
            scale,
            max_lag,
        } => weibull_adstock(x, shape, scale, max_lag),
    }
}

/// Geometric-decay adstock.
///
/// Weight at lag j is `decay_rate^j`, j = 0..max_lag-1, normalized to
/// sum 1. Output at period i is the weighted sum over the available
/// history only: periods before the series start contribute nothing, so
/// the first `max_lag - 1` outputs see a truncated kernel whose weights
/// sum to less than 1. `decay_rate = 0` reduces to the identity.
pub fn geometric_adstock(
    x: &[f64],
    decay_rate: f64,
    max_lag: usize,
) -> Result<Vec<f64>, TransformError> {
    validate_series(x)?;
    Adstock::Geometric {
        decay_rate,
        max_lag,
    }
    .validate()?;

    // 0^0 = 1, so decay_rate = 0 yields the kernel [1, 0, .., 0].
    let mut weights: Vec<f64> = (0..max_lag).map(|j| decay_rate.powi(j as i32)).collect();
    let sum: f64 = weights.iter().sum();
    for w in &mut weights {
        *w /= sum;
    }

    let result = (0..x.len())
        .map(|i| {
            let window = max_lag.min(i + 1);
            (0..window).map(|j| x[i - j] * weights[j]).sum()
        })
        .collect();
    Ok(result)
}

/// Weibull-CDF adstock.
///
/// Weight at lag j is `CDF(j) - CDF(j-1)` for the Weibull(shape, scale)
/// CDF at integer lags, anchored at `CDF(-1) = 0` so `w[0] = CDF(0) = 0`.
/// Weights are normalized to sum 1, then the kernel is reversed and
/// linearly convolved with the series over a zero-padded history,
/// truncated to the input length. The reversal means the weight applied
/// at lag m is `w[max_lag - 1 - m]`.
pub fn weibull_adstock(
    x: &[f64],
    shape: f64,
    scale: f64,
    max_lag: usize,
) -> Result<Vec<f64>, TransformError> {
    validate_series(x)?;
    Adstock::Weibull {
        shape,
        scale,
        max_lag,
    }
    .validate()?;

    let dist =
        Weibull::new(shape, scale).map_err(|_| TransformError::NonPositiveShape { value: shape })?;
    let mut weights = Vec::with_capacity(max_lag);
    let mut prev = 0.0;
    for j in 0..max_lag {
        let cdf = dist.cdf(j as f64);
        weights.push(cdf - prev);
        prev = cdf;
    }
    let sum: f64 = weights.iter().sum();
    if sum > 0.0 {
        for w in &mut weights {
            *w /= sum;
        }
    }
    // A 1-period Weibull window has zero mass (CDF(0) = 0); the kernel
    // stays all-zero and the output is all zeros.

    let n = x.len();
    let mut result = vec![0.0; n];
    for (i, out) in result.iter_mut().enumerate() {
        let mut acc = 0.0;
        for m in 0..max_lag.min(i + 1) {
            acc += x[i - m] * weights[max_lag - 1 - m];
        }
        *out = acc;
    }
    Ok(result)
}

fn validate_series(x: &[f64]) -> Result<(), TransformError> {
    if x.is_empty() {
        return Err(TransformError::EmptySeries);
    }
    for (index, &value) in x.iter().enumerate() {
        if value < 0.0 {
            return Err(TransformError::NegativeValue { index, value });
        }
    }
    Ok(())
}
