use std::collections::BTreeMap;

use mmm_core::config::{FitConfig, ModelConfig};
use mmm_core::dataset::Dataset;
use mmm_core::errors::{MmmResult, ModelError};
use mmm_core::models::{Allocation, ContributionTable, ParameterSummary, SpendBounds};
use mmm_core::posterior::{ChannelEstimate, ControlEstimate, Posterior};
use mmm_core::traits::IInferenceEngine;
use mmm_decompose::DecompositionEngine;
use mmm_optimize::{BudgetOptimizer, ResponseCurve};
use tracing::{info, warn};

/// Bayesian marketing mix model: channel transforms + linear controls
/// fit by an external inference engine.
///
/// Holds the config and the fitted posterior; decomposition and
/// optimization reject calls made before [`fit`](Self::fit).
pub struct MarketingMixModel {
    config: ModelConfig,
    engine: Box<dyn IInferenceEngine>,
    posterior: Option<Posterior>,
}

impl MarketingMixModel {
    pub fn new(config: ModelConfig, engine: Box<dyn IInferenceEngine>) -> Self {
        Self {
            config,
            engine,
            posterior: None,
        }
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn is_fitted(&self) -> bool {
        self.posterior.is_some()
    }

    pub fn posterior(&self) -> Option<&Posterior> {
        self.posterior.as_ref()
    }

    /// Replace NaN entries in the channel columns with zero, logging a
    /// warning when anything was filled.
    pub fn prepare_dataset(&self, dataset: &mut Dataset) -> MmmResult<()> {
        let channel_names: Vec<&str> = self.config.channel_names().collect();
        let filled = dataset.fill_nan_with_zero(channel_names)?;
        if filled > 0 {
            warn!(filled, "NaN values in channel data filled with 0");
        }
        Ok(())
    }

    /// Build the prior graph, standardize the target, and ask the
    /// inference engine for posterior samples.
    pub fn fit(&mut self, dataset: &Dataset, fit_config: &FitConfig) -> MmmResult<&Posterior> {
        let graph = crate::graph::build_graph(&self.config, dataset)?;

        let y = dataset.column(&self.config.target)?;
        if y.is_empty() {
            return Err(ModelError::InvalidConfig {
                message: "dataset has no periods".to_string(),
            }
            .into());
        }
        let mean = y.iter().sum::<f64>() / y.len() as f64;
        let var = y.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / y.len() as f64;
        let std = var.sqrt();
        if std == 0.0 {
            return Err(ModelError::InvalidConfig {
                message: format!("target '{}' has zero variance", self.config.target),
            }
            .into());
        }
        let observed: Vec<f64> = y.iter().map(|v| (v - mean) / std).collect();

        info!(
            target = %self.config.target,
            channels = self.config.channels.len(),
            controls = self.config.controls.len(),
            draws = fit_config.draws,
            chains = fit_config.chains,
            "fitting model"
        );
        let posterior = self.engine.sample(&graph, &observed, fit_config)?;
        info!(
            parameters = posterior.parameter_names().count(),
            "fit complete"
        );
        Ok(self.posterior.insert(posterior))
    }

    /// Mean/sd summary for every fitted parameter.
    pub fn summary(&self) -> MmmResult<Vec<ParameterSummary>> {
        let posterior = self.posterior.as_ref().ok_or(ModelError::NotFitted)?;
        Ok(posterior.summary())
    }

    /// Summary serialized as a JSON array, for host-language consumers.
    pub fn summary_json(&self) -> MmmResult<String> {
        let summary = self.summary()?;
        serde_json::to_string_pretty(&summary).map_err(|e| {
            ModelError::Engine {
                message: format!("summary serialization failed: {e}"),
            }
            .into()
        })
    }

    /// Typed per-channel and per-control point estimates, resolved from
    /// the posterior once per call.
    pub fn estimates(&self) -> MmmResult<(Vec<ChannelEstimate>, Vec<ControlEstimate>, f64)> {
        let posterior = self.posterior.as_ref().ok_or(ModelError::NotFitted)?;
        let channels = self
            .config
            .channels
            .iter()
            .map(|c| ChannelEstimate::from_posterior(c, posterior))
            .collect::<Result<Vec<_>, _>>()?;
        let controls = self
            .config
            .controls
            .iter()
            .map(|name| ControlEstimate::from_posterior(name, posterior))
            .collect::<Result<Vec<_>, _>>()?;
        let intercept = posterior.require_mean("intercept")?;
        Ok((channels, controls, intercept))
    }

    /// Decompose the outcome into per-channel contribution series.
    pub fn decompose(&self, dataset: &Dataset) -> MmmResult<ContributionTable> {
        let (channels, controls, intercept) = self.estimates()?;
        DecompositionEngine::new().decompose(&channels, &controls, intercept, dataset)
    }

    /// Optimize a fixed budget across channels using the config's
    /// per-channel bounds (default `[0, total_budget]`).
    pub fn optimize_budget(&self, total_budget: f64) -> MmmResult<Allocation> {
        let bounds: BTreeMap<String, SpendBounds> = self
            .config
            .channels
            .iter()
            .filter_map(|c| c.bounds.map(|b| (c.name.clone(), b)))
            .collect();
        self.optimize_budget_bounded(total_budget, &bounds)
    }

    /// Optimize with caller-supplied bounds overriding the config.
    pub fn optimize_budget_bounded(
        &self,
        total_budget: f64,
        bounds: &BTreeMap<String, SpendBounds>,
    ) -> MmmResult<Allocation> {
        let (channels, _, _) = self.estimates()?;
        let curves: Vec<ResponseCurve> = channels.iter().map(ResponseCurve::from).collect();
        BudgetOptimizer::new()
            .optimize(&curves, total_budget, bounds)
            .map_err(Into::into)
    }
}
