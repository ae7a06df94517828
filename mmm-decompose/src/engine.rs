use mmm_core::dataset::Dataset;
use mmm_core::errors::MmmResult;
use mmm_core::models::ContributionTable;
use mmm_core::posterior::{ChannelEstimate, ControlEstimate};
use mmm_transforms::{apply_adstock, apply_saturation};
use tracing::debug;

/// Contribution decomposition over typed per-channel estimates.
///
/// Callers resolve the posterior into [`ChannelEstimate`] records first
/// (the fit boundary does this); an unfitted model never reaches here.
#[derive(Debug, Default)]
pub struct DecompositionEngine;

impl DecompositionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Decompose the outcome into per-channel and per-control series.
    ///
    /// One channel's invalid parameters fails the whole call: the
    /// per-channel terms combine additively into a single outcome
    /// estimate, so there is no meaningful partial result.
    pub fn decompose(
        &self,
        estimates: &[ChannelEstimate],
        controls: &[ControlEstimate],
        intercept: f64,
        dataset: &Dataset,
    ) -> MmmResult<ContributionTable> {
        let mut table = ContributionTable::new(dataset.len(), intercept);

        for estimate in estimates {
            let raw = dataset.column(&estimate.name)?;
            let effective = apply_adstock(&estimate.adstock, raw)?;
            let saturated = apply_saturation(&estimate.saturation, &effective)?;
            let contribution: Vec<f64> =
                saturated.iter().map(|v| estimate.beta * v).collect();
            debug!(
                channel = %estimate.name,
                total = contribution.iter().sum::<f64>(),
                "channel contribution"
            );
            table.insert_channel(&estimate.name, contribution);
        }

        for control in controls {
            let raw = dataset.column(&control.name)?;
            let contribution: Vec<f64> = raw.iter().map(|v| control.beta * v).collect();
            table.insert_control(&control.name, contribution);
        }

        Ok(table)
    }
}
