//! # mmm-transforms
//!
//! The two nonlinear per-channel transforms of the marketing mix model:
//!
//! - **Adstock**: carryover. Spend keeps working in later periods,
//!   decaying by a normalized kernel (geometric or Weibull-CDF).
//! - **Saturation**: diminishing returns. Effective spend maps to a
//!   bounded response (Hill, logistic, or Michaelis-Menten).
//!
//! All functions are pure, synchronous, and stateless. Input validation
//! happens before any computation; invalid parameters never produce a
//! partially transformed series.

pub mod adstock;
pub mod saturation;

pub use adstock::{apply_adstock, geometric_adstock, weibull_adstock};
pub use saturation::{
    apply_saturation, hill_saturation, logistic_saturation, michaelis_menten, saturate,
    saturation_gradient,
};
