//! Gaussian white noise

use tracing::debug;

use super::random::RandomSource;
use crate::error::{require_positive, NoiseError, Result};

/// White noise parameters
#[derive(Debug, Clone)]
pub struct WhiteNoiseConfig {
    pub mean: f64,
    pub std_dev: f64,
}

impl Default for WhiteNoiseConfig {
    fn default() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }
}

/// Generate `n` independent samples from N(mean, std_dev^2)
pub fn white_noise<S: RandomSource + ?Sized>(
    n: usize,
    config: &WhiteNoiseConfig,
    source: &mut S,
) -> Result<Vec<f64>> {
    let n = require_positive("n", n)?;
    if !config.mean.is_finite() {
        return Err(NoiseError::invalid("mean", "must be finite"));
    }
    if !(config.std_dev.is_finite() && config.std_dev >= 0.0) {
        return Err(NoiseError::invalid(
            "std_dev",
            format!("must be finite and non-negative, got {}", config.std_dev),
        ));
    }

    debug!(n, mean = config.mean, std_dev = config.std_dev, "generating white noise");

    Ok((0..n)
        .map(|_| config.mean + config.std_dev * source.standard_normal())
        .collect())
}
