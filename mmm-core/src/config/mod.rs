//! Configuration surface for the modeling pipeline.

pub mod defaults;

mod fit_config;
mod model_config;

pub use fit_config::FitConfig;
pub use model_config::{ChannelConfig, ModelConfig};
