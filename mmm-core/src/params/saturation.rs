use serde::{Deserialize, Serialize};

use crate::errors::TransformError;

/// Diminishing-returns (saturation) curve for one channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Saturation {
    /// Hill curve: `1 / (1 + (x/k)^(-s))`. Output is exactly 0.5 at x = k.
    Hill { k: f64, s: f64 },
    /// Logistic curve: `l / (1 + e^(-k(x - x0)))`. Output strictly inside (0, l).
    Logistic { l: f64, k: f64, x0: f64 },
    /// Michaelis-Menten curve: `vmax * x / (km + x)`. Hill with s = 1,
    /// scaled by vmax.
    MichaelisMenten { vmax: f64, km: f64 },
}

impl Saturation {
    pub fn hill(k: f64, s: f64) -> Self {
        Self::Hill { k, s }
    }

    /// Logistic curve centered at the origin with unit ceiling.
    pub fn logistic(k: f64) -> Self {
        Self::Logistic { l: 1.0, k, x0: 0.0 }
    }

    pub fn michaelis_menten(vmax: f64, km: f64) -> Self {
        Self::MichaelisMenten { vmax, km }
    }

    /// Reject out-of-range parameters before any computation.
    pub fn validate(&self) -> Result<(), TransformError> {
        match *self {
            Self::Hill { k, .. } => {
                if !(k > 0.0) {
                    return Err(TransformError::NonPositiveHalfSaturation { value: k });
                }
                Ok(())
            }
            // Any real l, k, x0 yields a finite bounded logistic output.
            Self::Logistic { .. } => Ok(()),
            Self::MichaelisMenten { km, .. } => {
                if !(km > 0.0) {
                    return Err(TransformError::NonPositiveMichaelisConstant { value: km });
                }
                Ok(())
            }
        }
    }
}
