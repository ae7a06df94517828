//! # mmm-decompose
//!
//! Reconstructs each channel's estimated contribution to the outcome
//! from fitted point estimates: raw spend -> adstock -> saturation ->
//! x beta, independently per channel.
//!
//! The composition is additive-only; there is no cross-channel
//! interaction term in this model. Total predicted outcome is
//! intercept + channel contributions + control contributions + noise.

mod engine;

pub use engine::DecompositionEngine;
