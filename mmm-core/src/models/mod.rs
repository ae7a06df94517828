//! Shared result and graph types consumed across the workspace.

mod allocation;
mod contribution;
mod graph;
mod summary;

pub use allocation::{Allocation, Convergence, SpendBounds};
pub use contribution::ContributionTable;
pub use graph::{
    AdstockKind, ChannelTransform, Likelihood, ModelGraph, Prior, PriorDistribution,
    SaturationKind,
};
pub use summary::ParameterSummary;
