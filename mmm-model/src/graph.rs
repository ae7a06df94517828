//! Prior-graph construction from the model config and dataset.
//!
//! Parameter naming follows the `<channel>_<suffix>` convention the
//! posterior boundary resolves: `_decay` / `_shape` / `_scale` for
//! adstock, `_K` / `_S` (Hill), `_L` / `_k` / `_x0` (logistic),
//! `_Vmax` / `_Km` (Michaelis-Menten), `_beta` for weights, plus the
//! globals `intercept` and `sigma`.

use mmm_core::config::ModelConfig;
use mmm_core::dataset::Dataset;
use mmm_core::errors::ModelError;
use mmm_core::models::{
    AdstockKind, ChannelTransform, Likelihood, ModelGraph, Prior, PriorDistribution,
    SaturationKind,
};
use mmm_core::params::{Adstock, Saturation};

/// Build the declarative model graph.
///
/// Priors per channel: `decay ~ Beta(3, 3)` (geometric) or
/// `shape, scale ~ HalfNormal` (Weibull); saturation parameters scaled
/// to the channel's observed spend range; `beta ~ HalfNormal(1)`.
/// Controls get `beta ~ Normal(0, 1)`; `intercept ~ Normal(0, 1)`;
/// `sigma ~ HalfNormal(1)` on the standardized outcome.
pub fn build_graph(config: &ModelConfig, dataset: &Dataset) -> Result<ModelGraph, ModelError> {
    config.validate()?;
    dataset.require_columns(
        std::iter::once(config.target.as_str())
            .chain(config.channel_names())
            .chain(config.controls.iter().map(String::as_str)),
    )?;

    let mut priors = vec![Prior {
        name: "intercept".to_string(),
        distribution: PriorDistribution::Normal {
            mu: 0.0,
            sigma: 1.0,
        },
    }];
    let mut channels = Vec::with_capacity(config.channels.len());

    for channel in &config.channels {
        let ch = channel.name.as_str();
        let x = dataset.column(ch)?;
        // Prior scale for spend-denominated parameters; an all-zero
        // channel falls back to a unit scale.
        let x_max = x.iter().cloned().fold(0.0f64, f64::max).max(1.0);

        let adstock = match channel.adstock {
            Adstock::Geometric { max_lag, .. } => {
                priors.push(Prior {
                    name: format!("{ch}_decay"),
                    distribution: PriorDistribution::Beta {
                        alpha: 3.0,
                        beta: 3.0,
                    },
                });
                AdstockKind::Geometric { max_lag }
            }
            Adstock::Weibull { max_lag, .. } => {
                priors.push(Prior {
                    name: format!("{ch}_shape"),
                    distribution: PriorDistribution::HalfNormal { sigma: 2.0 },
                });
                priors.push(Prior {
                    name: format!("{ch}_scale"),
                    distribution: PriorDistribution::HalfNormal {
                        sigma: max_lag as f64 / 2.0,
                    },
                });
                AdstockKind::Weibull { max_lag }
            }
        };

        let saturation = match channel.saturation {
            Saturation::Hill { .. } => {
                priors.push(Prior {
                    name: format!("{ch}_K"),
                    distribution: PriorDistribution::HalfNormal { sigma: x_max },
                });
                priors.push(Prior {
                    name: format!("{ch}_S"),
                    distribution: PriorDistribution::HalfNormal { sigma: 2.0 },
                });
                SaturationKind::Hill
            }
            Saturation::Logistic { .. } => {
                priors.push(Prior {
                    name: format!("{ch}_L"),
                    distribution: PriorDistribution::HalfNormal { sigma: 1.0 },
                });
                priors.push(Prior {
                    name: format!("{ch}_k"),
                    distribution: PriorDistribution::HalfNormal {
                        sigma: 2.0 / x_max,
                    },
                });
                priors.push(Prior {
                    name: format!("{ch}_x0"),
                    distribution: PriorDistribution::Normal {
                        mu: x_max / 2.0,
                        sigma: x_max / 4.0,
                    },
                });
                SaturationKind::Logistic
            }
            Saturation::MichaelisMenten { .. } => {
                priors.push(Prior {
                    name: format!("{ch}_Vmax"),
                    distribution: PriorDistribution::HalfNormal { sigma: 1.0 },
                });
                priors.push(Prior {
                    name: format!("{ch}_Km"),
                    distribution: PriorDistribution::HalfNormal { sigma: x_max },
                });
                SaturationKind::MichaelisMenten
            }
        };

        priors.push(Prior {
            name: format!("{ch}_beta"),
            distribution: PriorDistribution::HalfNormal { sigma: 1.0 },
        });
        channels.push(ChannelTransform {
            channel: channel.name.clone(),
            adstock,
            saturation,
        });
    }

    for control in &config.controls {
        priors.push(Prior {
            name: format!("{control}_beta"),
            distribution: PriorDistribution::Normal {
                mu: 0.0,
                sigma: 1.0,
            },
        });
    }

    priors.push(Prior {
        name: "sigma".to_string(),
        distribution: PriorDistribution::HalfNormal { sigma: 1.0 },
    });

    Ok(ModelGraph {
        target: config.target.clone(),
        priors,
        channels,
        controls: config.controls.clone(),
        likelihood: Likelihood::Normal {
            sigma_prior: "sigma".to_string(),
        },
    })
}
