//! Error taxonomy for the MMM workspace.
//!
//! One enum per domain, combined into the umbrella [`MmmError`].
//! All core errors are local and synchronous: they surface to the
//! immediate caller, with no retries and no per-channel partial success.

mod model_error;
mod optimize_error;
mod transform_error;

pub use model_error::ModelError;
pub use optimize_error::OptimizeError;
pub use transform_error::TransformError;

/// Umbrella error for the whole workspace.
#[derive(Debug, thiserror::Error)]
pub enum MmmError {
    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Optimize(#[from] OptimizeError),
}

/// Result alias used across the workspace.
pub type MmmResult<T> = Result<T, MmmError>;
