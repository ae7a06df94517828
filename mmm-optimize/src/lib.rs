//! # mmm-optimize
//!
//! Finds the budget split across channels that maximizes the predicted
//! total effect `Σ beta_c · saturation_c(spend_c)` subject to the budget
//! equality constraint and per-channel box bounds.
//!
//! The solver is a projected-gradient local optimizer started from the
//! uniform allocation. The objective (a sum of S-shaped curves) is
//! generally non-convex in the joint allocation, so a local optimum is
//! an accepted outcome; multi-start is left to callers who need more.

mod engine;
mod projection;

pub use engine::{BudgetOptimizer, ResponseCurve};
pub use projection::project_onto_budget;
