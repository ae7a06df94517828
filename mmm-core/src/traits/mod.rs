//! Trait boundaries between the core and external collaborators.

mod inference;

pub use inference::IInferenceEngine;
