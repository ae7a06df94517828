//! Bundled inference engines.
//!
//! The production path plugs a real probabilistic-programming engine in
//! behind [`IInferenceEngine`]. The two engines here cover the other
//! cases: wiring precomputed samples through the pipeline, and
//! prior-predictive runs that never touch a likelihood.

use mmm_core::config::FitConfig;
use mmm_core::errors::{MmmResult, ModelError};
use mmm_core::models::{ModelGraph, PriorDistribution};
use mmm_core::posterior::Posterior;
use mmm_core::traits::IInferenceEngine;
use rand::distributions::Distribution;
use rand::SeedableRng;
use rand_distr::{Beta, Normal, StandardNormal};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Serves a preloaded posterior, verifying it covers every parameter
/// the graph declares. Useful for replaying fits produced elsewhere and
/// for exercising the pipeline in tests.
#[derive(Debug, Clone)]
pub struct FixedPosteriorEngine {
    posterior: Posterior,
}

impl FixedPosteriorEngine {
    pub fn new(posterior: Posterior) -> Self {
        Self { posterior }
    }

    /// Build a posterior where every parameter has a single fixed draw.
    pub fn from_point_estimates<I>(estimates: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let mut posterior = Posterior::new();
        for (name, value) in estimates {
            posterior.insert(name, vec![value]);
        }
        Self::new(posterior)
    }
}

impl IInferenceEngine for FixedPosteriorEngine {
    fn sample(
        &self,
        graph: &ModelGraph,
        _observed: &[f64],
        _config: &FitConfig,
    ) -> MmmResult<Posterior> {
        for name in graph.parameter_names() {
            if self.posterior.samples(name).is_none() {
                return Err(ModelError::Engine {
                    message: format!("preloaded posterior is missing parameter '{name}'"),
                }
                .into());
            }
        }
        Ok(self.posterior.clone())
    }
}

/// Prior-predictive engine: draws every parameter independently from
/// its prior, ignoring the likelihood entirely. Deterministic for a
/// given `FitConfig::seed`.
#[derive(Debug, Clone, Default)]
pub struct PriorSamplingEngine;

impl PriorSamplingEngine {
    pub fn new() -> Self {
        Self
    }
}

impl IInferenceEngine for PriorSamplingEngine {
    fn sample(
        &self,
        graph: &ModelGraph,
        _observed: &[f64],
        config: &FitConfig,
    ) -> MmmResult<Posterior> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(config.seed);
        let n = config.draws * config.chains;
        let mut posterior = Posterior::new();

        for prior in &graph.priors {
            let samples: Vec<f64> = match prior.distribution {
                PriorDistribution::Normal { mu, sigma } => {
                    let dist = Normal::new(mu, sigma).map_err(|e| ModelError::Engine {
                        message: format!("prior '{}': {e}", prior.name),
                    })?;
                    (0..n).map(|_| dist.sample(&mut rng)).collect()
                }
                PriorDistribution::HalfNormal { sigma } => (0..n)
                    .map(|_| {
                        let z: f64 = StandardNormal.sample(&mut rng);
                        z.abs() * sigma
                    })
                    .collect(),
                PriorDistribution::Beta { alpha, beta } => {
                    let dist = Beta::new(alpha, beta).map_err(|e| ModelError::Engine {
                        message: format!("prior '{}': {e}", prior.name),
                    })?;
                    (0..n).map(|_| dist.sample(&mut rng)).collect()
                }
            };
            posterior.insert(prior.name.clone(), samples);
        }
        Ok(posterior)
    }
}
