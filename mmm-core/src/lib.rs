//! # mmm-core
//!
//! Foundation crate for the marketing mix modeling workspace.
//! Defines the shared types, tagged parameter variants, errors, config,
//! and the inference-engine trait boundary.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod dataset;
pub mod errors;
pub mod models;
pub mod params;
pub mod posterior;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{ChannelConfig, FitConfig, ModelConfig};
pub use dataset::Dataset;
pub use errors::{MmmError, MmmResult};
pub use models::{Allocation, ContributionTable, Convergence, ModelGraph, SpendBounds};
pub use params::{Adstock, Saturation};
pub use posterior::{ChannelEstimate, ControlEstimate, Posterior};
