use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ModelError;
use crate::models::SpendBounds;
use crate::params::{Adstock, Saturation};

/// One marketing channel: its name, transform kinds, and optional
/// optimizer bounds (defaulting to [0, total_budget] when absent).
///
/// The transform parameter values here are priors' starting shapes for
/// graph construction; the fitted values come back via the posterior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelConfig {
    pub name: String,
    pub adstock: Adstock,
    pub saturation: Saturation,
    #[serde(default)]
    pub bounds: Option<SpendBounds>,
}

impl ChannelConfig {
    /// Geometric adstock + Hill saturation, the standard channel setup.
    pub fn standard(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            adstock: Adstock::geometric(0.5),
            saturation: Saturation::hill(1.0, 1.0),
            bounds: None,
        }
    }
}

/// Full model configuration: target column, channels, and control
/// variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Outcome column name in the dataset.
    pub target: String,
    pub channels: Vec<ChannelConfig>,
    /// Control-variable column names (linear terms, no transforms).
    pub controls: Vec<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            target: defaults::DEFAULT_TARGET.to_string(),
            channels: Vec::new(),
            controls: Vec::new(),
        }
    }
}

impl ModelConfig {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            channels: Vec::new(),
            controls: Vec::new(),
        }
    }

    pub fn with_channel(mut self, channel: ChannelConfig) -> Self {
        self.channels.push(channel);
        self
    }

    pub fn with_control(mut self, name: impl Into<String>) -> Self {
        self.controls.push(name.into());
        self
    }

    pub fn channel(&self, name: &str) -> Option<&ChannelConfig> {
        self.channels.iter().find(|c| c.name == name)
    }

    pub fn channel_names(&self) -> impl Iterator<Item = &str> {
        self.channels.iter().map(|c| c.name.as_str())
    }

    /// Parse from a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ModelError> {
        let config: Self = toml::from_str(source).map_err(|e| ModelError::InvalidConfig {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty targets, duplicate channels, and invalid transform
    /// parameters up front.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.target.is_empty() {
            return Err(ModelError::InvalidConfig {
                message: "target column name is empty".to_string(),
            });
        }
        for (i, channel) in self.channels.iter().enumerate() {
            if self.channels[..i].iter().any(|c| c.name == channel.name) {
                return Err(ModelError::InvalidConfig {
                    message: format!("duplicate channel '{}'", channel.name),
                });
            }
            channel
                .adstock
                .validate()
                .map_err(|e| ModelError::InvalidConfig {
                    message: format!("channel '{}': {}", channel.name, e),
                })?;
            channel
                .saturation
                .validate()
                .map_err(|e| ModelError::InvalidConfig {
                    message: format!("channel '{}': {}", channel.name, e),
                })?;
        }
        Ok(())
    }
}
