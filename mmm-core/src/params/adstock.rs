use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_GEOMETRIC_MAX_LAG, DEFAULT_WEIBULL_MAX_LAG};
use crate::errors::TransformError;

/// Carryover (adstock) kernel for one channel.
///
/// Both kinds build a normalized weight vector (weights sum to 1), so
/// adstock is a weighted average of recent spend, never an amplifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Adstock {
    /// Geometric decay: weight at lag j is `decay_rate^j`.
    Geometric { decay_rate: f64, max_lag: usize },
    /// Weibull-CDF decay: weight at lag j is `CDF(j) - CDF(j-1)`.
    Weibull {
        shape: f64,
        scale: f64,
        max_lag: usize,
    },
}

impl Adstock {
    /// Geometric kernel with the default 8-period window.
    pub fn geometric(decay_rate: f64) -> Self {
        Self::Geometric {
            decay_rate,
            max_lag: DEFAULT_GEOMETRIC_MAX_LAG,
        }
    }

    /// Weibull kernel with the default 12-period window.
    pub fn weibull(shape: f64, scale: f64) -> Self {
        Self::Weibull {
            shape,
            scale,
            max_lag: DEFAULT_WEIBULL_MAX_LAG,
        }
    }

    /// Carryover window length in periods.
    pub fn max_lag(&self) -> usize {
        match *self {
            Self::Geometric { max_lag, .. } | Self::Weibull { max_lag, .. } => max_lag,
        }
    }

    /// Reject out-of-range parameters before any computation.
    pub fn validate(&self) -> Result<(), TransformError> {
        match *self {
            Self::Geometric {
                decay_rate,
                max_lag,
            } => {
                if max_lag < 1 {
                    return Err(TransformError::MaxLagTooSmall { value: max_lag });
                }
                if !(0.0..1.0).contains(&decay_rate) {
                    return Err(TransformError::DecayRateOutOfRange { value: decay_rate });
                }
                Ok(())
            }
            Self::Weibull {
                shape,
                scale,
                max_lag,
            } => {
                if max_lag < 1 {
                    return Err(TransformError::MaxLagTooSmall { value: max_lag });
                }
                if !(shape > 0.0) {
                    return Err(TransformError::NonPositiveShape { value: shape });
                }
                if !(scale > 0.0) {
                    return Err(TransformError::NonPositiveScale { value: scale });
                }
                Ok(())
            }
        }
    }
}
