//! Saturation transforms: diminishing returns in media response.
//!
//! All three curves are pure and stateless; the slice forms validate
//! parameters first, the scalar forms assume a validated spec (the
//! optimizer calls them in a hot loop).

use mmm_core::errors::TransformError;
use mmm_core::params::Saturation;

/// Dispatch the slice transform on the saturation variant.
pub fn apply_saturation(spec: &Saturation, x: &[f64]) -> Result<Vec<f64>, TransformError> {
    spec.validate()?;
    Ok(x.iter().map(|&v| saturate(spec, v)).collect())
}

/// Scalar saturation value for a validated spec.
pub fn saturate(spec: &Saturation, x: f64) -> f64 {
    match *spec {
        Saturation::Hill { k, s } => hill_value(x.max(0.0), k, s),
        Saturation::Logistic { l, k, x0 } => logistic_value(x, l, k, x0),
        Saturation::MichaelisMenten { vmax, km } => {
            let x = x.max(0.0);
            vmax * x / (km + x)
        }
    }
}

/// Analytic derivative of the saturation curve at x, used by the budget
/// optimizer as the marginal response per unit spend.
///
/// Defined for x >= 0; a non-finite result (the Hill curve with s < 1
/// has an unbounded derivative at x = 0) collapses to 0.0 so the
/// optimizer never steps on an infinity.
pub fn saturation_gradient(spec: &Saturation, x: f64) -> f64 {
    let grad = match *spec {
        Saturation::Hill { k, s } => {
            let x = x.max(0.0);
            let k_pow_s = k.powf(s);
            let x_pow_s = x.powf(s);
            let denom = k_pow_s + x_pow_s;
            if denom == 0.0 {
                0.0
            } else {
                s * k_pow_s * x.powf(s - 1.0) / (denom * denom)
            }
        }
        Saturation::Logistic { l, k, x0 } => {
            let sig = 1.0 / (1.0 + (-k * (x - x0)).exp());
            l * k * sig * (1.0 - sig)
        }
        Saturation::MichaelisMenten { vmax, km } => {
            let x = x.max(0.0);
            vmax * km / ((km + x) * (km + x))
        }
    };
    if grad.is_finite() {
        grad
    } else {
        0.0
    }
}

/// Hill saturation: `1 / (1 + (x/k)^(-s))`.
///
/// Exactly 0.5 at x = k for any s != 0; monotone non-decreasing and
/// bounded in [0, 1) for s > 0.
pub fn hill_saturation(x: &[f64], k: f64, s: f64) -> Result<Vec<f64>, TransformError> {
    let spec = Saturation::Hill { k, s };
    spec.validate()?;
    Ok(x.iter().map(|&v| hill_value(v.max(0.0), k, s)).collect())
}

/// Logistic saturation: `l / (1 + e^(-k(x - x0)))`, strictly inside (0, l).
pub fn logistic_saturation(x: &[f64], l: f64, k: f64, x0: f64) -> Vec<f64> {
    x.iter().map(|&v| logistic_value(v, l, k, x0)).collect()
}

/// Michaelis-Menten saturation: `vmax * x / (km + x)`, bounded in
/// [0, vmax). Equivalent to Hill with s = 1 scaled by vmax.
pub fn michaelis_menten(x: &[f64], vmax: f64, km: f64) -> Result<Vec<f64>, TransformError> {
    let spec = Saturation::MichaelisMenten { vmax, km };
    spec.validate()?;
    Ok(x.iter()
        .map(|&v| {
            let v = v.max(0.0);
            vmax * v / (km + v)
        })
        .collect())
}

fn hill_value(x: f64, k: f64, s: f64) -> f64 {
    // 0^(-s) diverges for s > 0; pin f(0) to exactly 0 instead of
    // propagating a platform-dependent NaN/infinity.
    if x == 0.0 && s > 0.0 {
        return 0.0;
    }
    1.0 / (1.0 + (x / k).powf(-s))
}

fn logistic_value(x: f64, l: f64, k: f64, x0: f64) -> f64 {
    l / (1.0 + (-k * (x - x0)).exp())
}
