use serde::{Deserialize, Serialize};

use super::defaults;

/// Sampling configuration passed through to the inference engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    /// Posterior draws per chain (after warmup).
    pub draws: usize,
    /// Warmup (tuning) iterations per chain.
    pub tune: usize,
    /// Independent sampling chains.
    pub chains: usize,
    /// Explicit seed; never rely on ambient process-wide randomness.
    pub seed: u64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            draws: defaults::DEFAULT_DRAWS,
            tune: defaults::DEFAULT_TUNE,
            chains: defaults::DEFAULT_CHAINS,
            seed: defaults::DEFAULT_SEED,
        }
    }
}
