//! Deterministic synthetic marketing dataset for tests and demos.
//!
//! 104 weekly periods dated from 2021-01-04, four lognormal spend
//! channels, two controls, and a revenue column built from a known
//! linear-in-channels ground truth
//! plus Gaussian noise. All randomness flows from the explicit seed;
//! there is no ambient process-wide RNG state.

use chrono::NaiveDate;
use mmm_core::config::{ChannelConfig, ModelConfig};
use mmm_core::dataset::Dataset;
use mmm_core::errors::{MmmResult, ModelError};
use rand::distributions::Distribution;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Periods in the generated dataset (two years of weekly data).
pub const SAMPLE_PERIODS: usize = 104;

/// First Monday of the generated weekly index.
pub fn sample_start_week() -> MmmResult<NaiveDate> {
    NaiveDate::from_ymd_opt(2021, 1, 4).ok_or_else(|| {
        ModelError::InvalidConfig {
            message: "invalid sample start week".to_string(),
        }
        .into()
    })
}

/// Generate the synthetic dataset from an explicit seed.
///
/// Ground truth: `revenue = 50000 + 0.05·tv + 0.08·digital +
/// 0.12·search + 0.03·social - 200·price + 5000·promo + N(0, 3000)`.
pub fn generate_sample_data(seed: u64) -> MmmResult<Dataset> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let n = SAMPLE_PERIODS;

    let lognormal = |mu: f64, sigma: f64, rng: &mut Xoshiro256PlusPlus| -> Vec<f64> {
        (0..n)
            .map(|_| {
                let z: f64 = StandardNormal.sample(rng);
                (mu + sigma * z).exp()
            })
            .collect()
    };

    let tv = lognormal(10.0, 0.5, &mut rng);
    let digital = lognormal(9.0, 0.6, &mut rng);
    let search = lognormal(8.0, 0.4, &mut rng);
    let social = lognormal(7.0, 0.7, &mut rng);

    let price: Vec<f64> = (0..n)
        .map(|_| {
            let z: f64 = StandardNormal.sample(&mut rng);
            50.0 + 5.0 * z
        })
        .collect();
    let promo: Vec<f64> = (0..n)
        .map(|_| if rng.gen::<f64>() < 0.3 { 1.0 } else { 0.0 })
        .collect();

    let revenue: Vec<f64> = (0..n)
        .map(|i| {
            let noise: f64 = StandardNormal.sample(&mut rng);
            50_000.0 + 0.05 * tv[i] + 0.08 * digital[i] + 0.12 * search[i] + 0.03 * social[i]
                - 200.0 * price[i]
                + 5_000.0 * promo[i]
                + 3_000.0 * noise
        })
        .collect();

    let dataset = Dataset::from_columns([
        ("tv".to_string(), tv),
        ("digital".to_string(), digital),
        ("search".to_string(), search),
        ("social".to_string(), social),
        ("price".to_string(), price),
        ("promo".to_string(), promo),
        ("revenue".to_string(), revenue),
    ])?
    .with_week_index(sample_start_week()?);
    Ok(dataset)
}

/// Matching model config: the four channels with geometric adstock and
/// Hill saturation, price and promo as controls.
pub fn sample_config() -> ModelConfig {
    ModelConfig::new("revenue")
        .with_channel(ChannelConfig::standard("tv"))
        .with_channel(ChannelConfig::standard("digital"))
        .with_channel(ChannelConfig::standard("search"))
        .with_channel(ChannelConfig::standard("social"))
        .with_control("price")
        .with_control("promo")
}
