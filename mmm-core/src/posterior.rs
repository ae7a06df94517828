//! Fitted posterior and the typed boundary that resolves channel-qualified
//! sample names into per-channel parameter records.
//!
//! Downstream point estimates use the posterior sample mean. This loses
//! posterior uncertainty and is a deliberate simplification, not an
//! accident: the decomposer and optimizer operate on point estimates only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::ChannelConfig;
use crate::errors::ModelError;
use crate::models::ParameterSummary;
use crate::params::{Adstock, Saturation};

/// Posterior samples keyed by parameter name, one entry per draw across
/// all chains.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Posterior {
    samples: BTreeMap<String, Vec<f64>>,
}

impl Posterior {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, samples: Vec<f64>) {
        self.samples.insert(name.into(), samples);
    }

    pub fn samples(&self, name: &str) -> Option<&[f64]> {
        self.samples.get(name).map(Vec::as_slice)
    }

    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.samples.keys().map(String::as_str)
    }

    /// Sample mean for a parameter; `None` when absent or empty.
    pub fn mean(&self, name: &str) -> Option<f64> {
        let samples = self.samples.get(name)?;
        if samples.is_empty() {
            return None;
        }
        Some(samples.iter().sum::<f64>() / samples.len() as f64)
    }

    /// Sample mean, or a `MissingParameter` error when absent.
    pub fn require_mean(&self, name: &str) -> Result<f64, ModelError> {
        self.mean(name).ok_or_else(|| ModelError::MissingParameter {
            name: name.to_string(),
        })
    }

    /// Mean/sd summary rows for every parameter, sorted by name.
    pub fn summary(&self) -> Vec<ParameterSummary> {
        self.samples
            .iter()
            .filter(|(_, s)| !s.is_empty())
            .map(|(name, samples)| {
                let n = samples.len();
                let mean = samples.iter().sum::<f64>() / n as f64;
                let var = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;
                ParameterSummary {
                    name: name.clone(),
                    mean,
                    sd: var.sqrt(),
                    n_samples: n,
                }
            })
            .collect()
    }
}

/// Posterior-mean point estimates for one channel, resolved once at the
/// fit boundary. Components never do string-keyed posterior lookups
/// themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelEstimate {
    pub name: String,
    pub adstock: Adstock,
    pub saturation: Saturation,
    /// Regression weight for the transformed series.
    pub beta: f64,
}

impl ChannelEstimate {
    /// Resolve the channel's fitted parameters from the posterior,
    /// following the `<channel>_<suffix>` naming convention.
    pub fn from_posterior(
        config: &ChannelConfig,
        posterior: &Posterior,
    ) -> Result<Self, ModelError> {
        let ch = config.name.as_str();
        let adstock = match config.adstock {
            Adstock::Geometric { max_lag, .. } => Adstock::Geometric {
                decay_rate: posterior.require_mean(&format!("{ch}_decay"))?,
                max_lag,
            },
            Adstock::Weibull { max_lag, .. } => Adstock::Weibull {
                shape: posterior.require_mean(&format!("{ch}_shape"))?,
                scale: posterior.require_mean(&format!("{ch}_scale"))?,
                max_lag,
            },
        };
        let saturation = match config.saturation {
            Saturation::Hill { .. } => Saturation::Hill {
                k: posterior.require_mean(&format!("{ch}_K"))?,
                s: posterior.require_mean(&format!("{ch}_S"))?,
            },
            Saturation::Logistic { .. } => Saturation::Logistic {
                l: posterior.require_mean(&format!("{ch}_L"))?,
                k: posterior.require_mean(&format!("{ch}_k"))?,
                x0: posterior.require_mean(&format!("{ch}_x0"))?,
            },
            Saturation::MichaelisMenten { .. } => Saturation::MichaelisMenten {
                vmax: posterior.require_mean(&format!("{ch}_Vmax"))?,
                km: posterior.require_mean(&format!("{ch}_Km"))?,
            },
        };
        Ok(Self {
            name: config.name.clone(),
            adstock,
            saturation,
            beta: posterior.require_mean(&format!("{ch}_beta"))?,
        })
    }
}

/// Posterior-mean weight for one control variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlEstimate {
    pub name: String,
    pub beta: f64,
}

impl ControlEstimate {
    pub fn from_posterior(name: &str, posterior: &Posterior) -> Result<Self, ModelError> {
        Ok(Self {
            name: name.to_string(),
            beta: posterior.require_mean(&format!("{name}_beta"))?,
        })
    }
}
