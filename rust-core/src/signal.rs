//! Sampled signal handed to spectral estimators and plotting consumers

use crate::error::{NoiseError, Result};
use crate::noise::{generate, NoiseColor, RandomSource};

/// Sample rate used throughout the example workflows
pub const DEFAULT_SAMPLE_RATE: f64 = 1000.0;

/// Real-valued samples with their sample rate
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    samples: Vec<f64>,
    sample_rate: f64,
}

impl Signal {
    pub fn new(samples: Vec<f64>, sample_rate: f64) -> Result<Self> {
        check_sample_rate(sample_rate)?;
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Generate `n` samples of noise at `sample_rate`
    pub fn noise<S: RandomSource + ?Sized>(
        color: NoiseColor,
        n: usize,
        sample_rate: f64,
        source: &mut S,
    ) -> Result<Self> {
        check_sample_rate(sample_rate)?;
        Self::new(generate(color, n, source)?, sample_rate)
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate
    }

    /// Time of sample `index` in seconds
    pub fn time_at(&self, index: usize) -> f64 {
        index as f64 / self.sample_rate
    }

    /// At most the first `n` samples
    pub fn head(&self, n: usize) -> &[f64] {
        &self.samples[..n.min(self.samples.len())]
    }
}

pub(crate) fn check_sample_rate(sample_rate: f64) -> Result<()> {
    if sample_rate.is_finite() && sample_rate > 0.0 {
        Ok(())
    } else {
        Err(NoiseError::invalid(
            "sample_rate",
            format!("must be positive and finite, got {}", sample_rate),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::RngSource;

    #[test]
    fn test_time_at_and_duration() {
        let signal = Signal::new(vec![0.0; 5], 1000.0).unwrap();
        let times: Vec<f64> = (0..5).map(|i| signal.time_at(i)).collect();
        assert_eq!(times, vec![0.0, 0.001, 0.002, 0.003, 0.004]);
        assert!((signal.duration() - 0.005).abs() < 1e-15);
    }

    #[test]
    fn test_head_clamps() {
        let signal = Signal::new(vec![1.0, 2.0, 3.0], 10.0).unwrap();
        assert_eq!(signal.head(2), &[1.0, 2.0]);
        assert_eq!(signal.head(10), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_rejects_bad_sample_rate() {
        for fs in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(Signal::new(vec![1.0], fs).is_err());
        }
    }

    #[test]
    fn test_noise_constructor() {
        let mut source = RngSource::seeded(2);
        let signal = Signal::noise(NoiseColor::Pink, 2000, DEFAULT_SAMPLE_RATE, &mut source).unwrap();
        assert_eq!(signal.len(), 2000);
        assert!((signal.duration() - 2.0).abs() < 1e-12);
    }
}
