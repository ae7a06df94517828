use std::collections::BTreeMap;

use mmm_core::constants::{DEFAULT_OPTIMIZER_MAX_ITERATIONS, DEFAULT_OPTIMIZER_TOLERANCE};
use mmm_core::errors::OptimizeError;
use mmm_core::models::{Allocation, Convergence, SpendBounds};
use mmm_core::params::Saturation;
use mmm_core::posterior::ChannelEstimate;
use mmm_transforms::{saturate, saturation_gradient};
use tracing::{info, warn};

use crate::projection::project_onto_budget;

/// Fitted response curve for one channel: the optimizer's view of a
/// [`ChannelEstimate`] (adstock does not apply to a single-period spend
/// decision, so only the saturation curve and weight survive).
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseCurve {
    pub name: String,
    pub saturation: Saturation,
    pub beta: f64,
}

impl From<&ChannelEstimate> for ResponseCurve {
    fn from(estimate: &ChannelEstimate) -> Self {
        Self {
            name: estimate.name.clone(),
            saturation: estimate.saturation,
            beta: estimate.beta,
        }
    }
}

/// Projected-gradient budget optimizer.
///
/// Ascends the objective with an adaptive step, projecting every
/// iterate back onto `{ Σ spend = budget, bounds }`, starting from the
/// uniform allocation.
#[derive(Debug, Clone)]
pub struct BudgetOptimizer {
    max_iterations: usize,
    /// Total absolute allocation change below which we stop.
    tolerance: f64,
}

impl BudgetOptimizer {
    pub fn new() -> Self {
        Self {
            max_iterations: DEFAULT_OPTIMIZER_MAX_ITERATIONS,
            tolerance: DEFAULT_OPTIMIZER_TOLERANCE,
        }
    }

    pub fn with_limits(max_iterations: usize, tolerance: f64) -> Self {
        Self {
            max_iterations,
            tolerance,
        }
    }

    /// Find the allocation maximizing `Σ beta_c · saturation_c(spend_c)`.
    ///
    /// `bounds` entries override the default `[0, total_budget]` box per
    /// channel. Returns `Infeasible` when the bounds cannot satisfy the
    /// budget equality; hitting the iteration limit returns the
    /// best-found allocation tagged `Convergence::IterationLimit`.
    pub fn optimize(
        &self,
        curves: &[ResponseCurve],
        total_budget: f64,
        bounds: &BTreeMap<String, SpendBounds>,
    ) -> Result<Allocation, OptimizeError> {
        if curves.is_empty() {
            return Err(OptimizeError::NoChannels);
        }
        if !(total_budget > 0.0) || !total_budget.is_finite() {
            return Err(OptimizeError::InvalidBudget {
                value: total_budget,
            });
        }

        let n = curves.len();
        let mut lower = Vec::with_capacity(n);
        let mut upper = Vec::with_capacity(n);
        for curve in curves {
            let b = bounds
                .get(&curve.name)
                .copied()
                .unwrap_or_else(|| SpendBounds::full_budget(total_budget));
            if !b.lower.is_finite() || !b.upper.is_finite() || b.lower < 0.0 || b.upper < b.lower {
                return Err(OptimizeError::InvalidBounds {
                    channel: curve.name.clone(),
                    lower: b.lower,
                    upper: b.upper,
                });
            }
            lower.push(b.lower);
            upper.push(b.upper);
        }

        let lower_sum: f64 = lower.iter().sum();
        let upper_sum: f64 = upper.iter().sum();
        if lower_sum > total_budget {
            return Err(OptimizeError::Infeasible {
                reason: format!(
                    "sum of lower bounds {lower_sum} exceeds total budget {total_budget}"
                ),
            });
        }
        if upper_sum < total_budget {
            return Err(OptimizeError::Infeasible {
                reason: format!(
                    "sum of upper bounds {upper_sum} is below total budget {total_budget}"
                ),
            });
        }

        let objective = |x: &[f64]| -> f64 {
            curves
                .iter()
                .zip(x.iter())
                .map(|(c, &spend)| c.beta * saturate(&c.saturation, spend))
                .sum()
        };

        // Uniform start, projected into the feasible set.
        let uniform = vec![total_budget / n as f64; n];
        let mut alloc = project_onto_budget(&uniform, &lower, &upper, total_budget);
        let mut best = objective(&alloc);
        let mut step = total_budget / n as f64;
        let mut convergence = Convergence::IterationLimit {
            iterations: self.max_iterations,
        };

        for iter in 1..=self.max_iterations {
            let gradient: Vec<f64> = curves
                .iter()
                .zip(alloc.iter())
                .map(|(c, &spend)| c.beta * saturation_gradient(&c.saturation, spend))
                .collect();

            let stepped: Vec<f64> = alloc
                .iter()
                .zip(gradient.iter())
                .map(|(x, g)| x + step * g)
                .collect();
            let candidate = project_onto_budget(&stepped, &lower, &upper, total_budget);
            let value = objective(&candidate);

            if value >= best {
                let delta: f64 = alloc
                    .iter()
                    .zip(candidate.iter())
                    .map(|(a, b)| (a - b).abs())
                    .sum();
                alloc = candidate;
                best = value;
                step *= 1.2;
                if delta < self.tolerance {
                    convergence = Convergence::Converged { iterations: iter };
                    break;
                }
            } else {
                // Overshoot: shrink the step and retry from the same point.
                step *= 0.5;
                // Step exhausted: no projected ascent step of any useful
                // size improves the objective, so the iterate is a
                // stationary point. Reported as converged; `iterations`
                // counts loop iterations spent, not accepted moves.
                if step < self.tolerance {
                    convergence = Convergence::Converged { iterations: iter };
                    break;
                }
            }
        }

        match convergence {
            Convergence::Converged { iterations } => {
                info!(iterations, effect = best, "budget optimization converged");
            }
            Convergence::IterationLimit { iterations } => {
                warn!(
                    iterations,
                    effect = best,
                    "budget optimization hit the iteration limit; returning best-found allocation"
                );
            }
        }

        let spend = curves
            .iter()
            .zip(alloc.iter())
            .map(|(c, &v)| (c.name.clone(), v))
            .collect();
        Ok(Allocation {
            spend,
            expected_effect: best,
            convergence,
        })
    }
}

impl Default for BudgetOptimizer {
    fn default() -> Self {
        Self::new()
    }
}
