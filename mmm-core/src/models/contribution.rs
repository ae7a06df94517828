use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-channel contribution series reconstructed from fitted parameters.
///
/// The model is additive-only: total predicted outcome at period t is
/// `intercept + Σ channel contributions + Σ control contributions`.
/// There is no cross-channel interaction term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionTable {
    periods: usize,
    intercept: f64,
    channels: BTreeMap<String, Vec<f64>>,
    controls: BTreeMap<String, Vec<f64>>,
}

impl ContributionTable {
    pub fn new(periods: usize, intercept: f64) -> Self {
        Self {
            periods,
            intercept,
            channels: BTreeMap::new(),
            controls: BTreeMap::new(),
        }
    }

    /// Number of periods T shared by every series.
    pub fn periods(&self) -> usize {
        self.periods
    }

    /// Baseline (intercept) contribution, constant across periods.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn insert_channel(&mut self, name: impl Into<String>, series: Vec<f64>) {
        debug_assert_eq!(series.len(), self.periods);
        self.channels.insert(name.into(), series);
    }

    pub fn insert_control(&mut self, name: impl Into<String>, series: Vec<f64>) {
        debug_assert_eq!(series.len(), self.periods);
        self.controls.insert(name.into(), series);
    }

    pub fn channel(&self, name: &str) -> Option<&[f64]> {
        self.channels.get(name).map(Vec::as_slice)
    }

    pub fn control(&self, name: &str) -> Option<&[f64]> {
        self.controls.get(name).map(Vec::as_slice)
    }

    pub fn channel_names(&self) -> impl Iterator<Item = &str> {
        self.channels.keys().map(String::as_str)
    }

    /// Sum of one channel's contribution over all periods.
    pub fn channel_total(&self, name: &str) -> Option<f64> {
        self.channels.get(name).map(|s| s.iter().sum())
    }

    /// Total predicted outcome at period t (excluding noise).
    pub fn total_at(&self, t: usize) -> f64 {
        let channels: f64 = self.channels.values().map(|s| s[t]).sum();
        let controls: f64 = self.controls.values().map(|s| s[t]).sum();
        self.intercept + channels + controls
    }

    /// Full predicted outcome series (excluding noise).
    pub fn totals(&self) -> Vec<f64> {
        (0..self.periods).map(|t| self.total_at(t)).collect()
    }
}
