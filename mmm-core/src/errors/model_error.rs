/// Errors raised at the model boundary: fitting, posterior resolution,
/// and dataset shape checks.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model not fitted: call fit() before decomposition or optimization")]
    NotFitted,

    #[error("posterior has no samples for parameter '{name}'")]
    MissingParameter { name: String },

    #[error("dataset has no column '{name}'")]
    MissingColumn { name: String },

    #[error("column '{column}' has length {actual}, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("invalid model configuration: {message}")]
    InvalidConfig { message: String },

    #[error("inference engine failed: {message}")]
    Engine { message: String },
}
