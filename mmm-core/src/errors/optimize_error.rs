/// Errors raised by the budget-allocation optimizer.
///
/// Hitting the iteration limit is deliberately NOT an error: the
/// best-found allocation is returned with a non-convergence status
/// instead (see `Convergence` in the models module).
#[derive(Debug, thiserror::Error)]
pub enum OptimizeError {
    #[error("no channels provided")]
    NoChannels,

    #[error("total budget must be positive and finite, got {value}")]
    InvalidBudget { value: f64 },

    #[error("bounds for channel '{channel}' are invalid: [{lower}, {upper}]")]
    InvalidBounds {
        channel: String,
        lower: f64,
        upper: f64,
    },

    #[error("budget constraint is infeasible: {reason}")]
    Infeasible { reason: String },
}
