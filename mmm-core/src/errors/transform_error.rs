/// Input-validation errors for the adstock and saturation transforms.
///
/// Every variant is rejected before any computation runs.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("series is empty")]
    EmptySeries,

    #[error("negative value {value} at index {index}")]
    NegativeValue { index: usize, value: f64 },

    #[error("decay rate {value} outside [0, 1)")]
    DecayRateOutOfRange { value: f64 },

    #[error("max_lag must be at least 1, got {value}")]
    MaxLagTooSmall { value: usize },

    #[error("Weibull shape must be positive, got {value}")]
    NonPositiveShape { value: f64 },

    #[error("Weibull scale must be positive, got {value}")]
    NonPositiveScale { value: f64 },

    #[error("half-saturation point must be positive, got {value}")]
    NonPositiveHalfSaturation { value: f64 },

    #[error("Michaelis-Menten constant must be positive, got {value}")]
    NonPositiveMichaelisConstant { value: f64 },
}
