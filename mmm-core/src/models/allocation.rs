use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-channel spend bounds for the budget optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpendBounds {
    pub lower: f64,
    pub upper: f64,
}

impl SpendBounds {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Default box: spend anywhere between zero and the whole budget.
    pub fn full_budget(total_budget: f64) -> Self {
        Self {
            lower: 0.0,
            upper: total_budget,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Termination status of the optimizer run.
///
/// `IterationLimit` is a recoverable warning: the best-found allocation
/// is still returned and still satisfies the budget constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Convergence {
    /// The stopping rule fired before the iteration limit: either the
    /// allocation change fell below tolerance, or the step size was
    /// exhausted with no improving move left. `iterations` is the
    /// number of loop iterations spent, not the count of accepted
    /// moves.
    Converged { iterations: usize },
    IterationLimit { iterations: usize },
}

impl Convergence {
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged { .. })
    }
}

/// A budget split across channels.
///
/// Invariant: the spends sum to the requested total budget within solver
/// tolerance and each spend lies inside its channel's bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Allocation {
    pub spend: BTreeMap<String, f64>,
    /// Predicted total effect `Σ beta_c * saturation_c(spend_c)` at the
    /// returned allocation.
    pub expected_effect: f64,
    pub convergence: Convergence,
}

impl Allocation {
    pub fn total(&self) -> f64 {
        self.spend.values().sum()
    }

    pub fn spend_for(&self, channel: &str) -> Option<f64> {
        self.spend.get(channel).copied()
    }
}
