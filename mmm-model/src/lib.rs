//! # mmm-model
//!
//! Fit orchestration for the marketing mix model:
//!
//! - builds the declarative prior graph from the model config and data,
//! - hands it to an external [`IInferenceEngine`] for posterior sampling,
//! - resolves the posterior into typed per-channel estimates once, and
//! - drives decomposition and budget optimization over those estimates.
//!
//! The adstock and saturation parameters are part of the graph handed to
//! the engine, so they are fit jointly with the regression weights.
//!
//! [`IInferenceEngine`]: mmm_core::traits::IInferenceEngine

pub mod engines;
pub mod graph;
pub mod sample_data;

mod engine;

pub use engine::MarketingMixModel;
pub use graph::build_graph;
