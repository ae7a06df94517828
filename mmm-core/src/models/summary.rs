use serde::{Deserialize, Serialize};

/// Posterior summary row for one parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSummary {
    pub name: String,
    /// Sample mean across all draws and chains.
    pub mean: f64,
    /// Sample standard deviation.
    pub sd: f64,
    pub n_samples: usize,
}
