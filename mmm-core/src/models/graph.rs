use serde::{Deserialize, Serialize};

/// Prior distribution families the inference engine must support.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum PriorDistribution {
    Normal { mu: f64, sigma: f64 },
    HalfNormal { sigma: f64 },
    Beta { alpha: f64, beta: f64 },
}

/// A named prior in the model graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prior {
    pub name: String,
    pub distribution: PriorDistribution,
}

/// Adstock kind for a channel node. The decay parameters themselves are
/// latent (priors in the graph); only the kind and window are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AdstockKind {
    Geometric { max_lag: usize },
    Weibull { max_lag: usize },
}

/// Saturation kind for a channel node; curve parameters are latent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaturationKind {
    Hill,
    Logistic,
    MichaelisMenten,
}

/// Deterministic transform chain for one channel inside the graph:
/// raw spend -> adstock -> saturation -> x beta.
///
/// The adstock parameters are part of the graph, so they are sampled
/// jointly with the regression weights by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelTransform {
    pub channel: String,
    pub adstock: AdstockKind,
    pub saturation: SaturationKind,
}

/// Likelihood of the observed (standardized) outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum Likelihood {
    /// `y ~ Normal(mu, sigma)` where mu is the additive channel/control
    /// sum plus intercept and sigma is the named noise prior.
    Normal { sigma_prior: String },
}

/// Declarative probabilistic model graph handed to the external
/// inference engine. The engine owns sampling entirely; the core only
/// consumes the resulting posterior mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelGraph {
    pub target: String,
    pub priors: Vec<Prior>,
    pub channels: Vec<ChannelTransform>,
    pub controls: Vec<String>,
    pub likelihood: Likelihood,
}

impl ModelGraph {
    pub fn prior(&self, name: &str) -> Option<&Prior> {
        self.priors.iter().find(|p| p.name == name)
    }

    /// Names of every latent parameter the engine must sample.
    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.priors.iter().map(|p| p.name.as_str())
    }
}
