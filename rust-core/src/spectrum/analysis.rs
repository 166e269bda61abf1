//! High-level noise analyzer
//!
//! Combines the time, FFT and Welch views of a signal and fits the log-log
//! slope of its PSD, which is what distinguishes white, pink and brown noise.

use tracing::debug;

use super::welch::{welch_signal, PowerSpectrum, WelchConfig};
use crate::error::{NoiseError, Result};
use crate::signal::Signal;
use crate::views::{
    frequency_view, time_view, welch_view, FrequencyView, TimeSeriesView, WelchView,
    FFT_SEGMENT_LEN, FFT_VIEW_BINS, TIME_VIEW_POINTS, WELCH_DISPLAY_BAND, WELCH_VIEW_BINS,
};

/// Analyzer configuration
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Samples in the time view
    pub time_points: usize,

    /// Samples transformed for the FFT view
    pub fft_segment: usize,

    /// Bins kept in the FFT view
    pub fft_bins: usize,

    /// Welch estimator settings; the sample rate is taken from the signal
    pub welch: WelchConfig,

    /// Bins kept in the Welch view
    pub welch_bins: usize,

    /// X-axis limits suggested for the Welch view (Hz)
    pub display_band: (f64, f64),

    /// Band (Hz) over which the PSD slope is fitted
    pub slope_band: (f64, f64),
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            time_points: TIME_VIEW_POINTS,
            fft_segment: FFT_SEGMENT_LEN,
            fft_bins: FFT_VIEW_BINS,
            welch: WelchConfig::default(),
            welch_bins: WELCH_VIEW_BINS,
            display_band: WELCH_DISPLAY_BAND,
            slope_band: (1.0, 100.0),
        }
    }
}

/// Everything the analyzer derives from one signal
#[derive(Debug, Clone)]
pub struct NoiseReport {
    pub time: TimeSeriesView,
    pub frequency: FrequencyView,
    pub welch: WelchView,

    /// Full Welch estimate behind `welch`
    pub psd: PowerSpectrum,

    /// Fitted log-log PSD slope, when the slope band holds enough bins
    pub slope: Option<f64>,
}

/// Noise analyzer
pub struct NoiseAnalyzer {
    config: AnalyzerConfig,
}

impl NoiseAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Build all views of `signal` and fit its PSD slope
    pub fn analyze(&self, signal: &Signal) -> Result<NoiseReport> {
        let time = time_view(signal, self.config.time_points);
        let frequency = frequency_view(signal, self.config.fft_segment, self.config.fft_bins)?;

        let psd = welch_signal(signal, &self.config.welch)?;
        let welch = welch_view(&psd, self.config.welch_bins, self.config.display_band);

        let (low, high) = self.config.slope_band;
        let slope = match loglog_slope(&psd, low, high) {
            Ok(slope) => Some(slope),
            Err(e) => {
                debug!(error = %e, "no slope fitted");
                None
            }
        };

        Ok(NoiseReport {
            time,
            frequency,
            welch,
            psd,
            slope,
        })
    }

    /// Update configuration
    pub fn update_config(&mut self, config: AnalyzerConfig) {
        self.config = config;
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}

impl Default for NoiseAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

/// Least-squares slope of log10(power) against log10(frequency)
///
/// Only bins with `low <= f <= high`, `f > 0` and `power > 0` are used.
pub fn loglog_slope(psd: &PowerSpectrum, low: f64, high: f64) -> Result<f64> {
    if low.is_nan() || high.is_nan() || low > high {
        return Err(NoiseError::invalid(
            "band",
            format!("low edge {} is above high edge {}", low, high),
        ));
    }

    let points: Vec<(f64, f64)> = psd
        .band(low, high)
        .filter(|&(f, p)| f > 0.0 && p > 0.0)
        .map(|(f, p)| (f.log10(), p.log10()))
        .collect();

    if points.len() < 2 {
        return Err(NoiseError::invalid(
            "band",
            format!("only {} usable bins in [{}, {}] Hz", points.len(), low, high),
        ));
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.1).sum::<f64>() / n;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for &(x, y) in &points {
        sxy += (x - mean_x) * (y - mean_y);
        sxx += (x - mean_x) * (x - mean_x);
    }

    Ok(sxy / sxx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{NoiseColor, RngSource};

    fn power_law(exponent: f64) -> PowerSpectrum {
        let frequencies: Vec<f64> = (0..200).map(|k| k as f64 * 0.5).collect();
        let power = frequencies
            .iter()
            .map(|&f| if f > 0.0 { 3.0 * f.powf(exponent) } else { 0.0 })
            .collect();
        PowerSpectrum { frequencies, power }
    }

    #[test]
    fn test_slope_of_exact_power_laws() {
        for exponent in [0.0, -1.0, -2.0, 1.5] {
            let slope = loglog_slope(&power_law(exponent), 1.0, 80.0).unwrap();
            assert!((slope - exponent).abs() < 1e-9, "{} vs {}", slope, exponent);
        }
    }

    #[test]
    fn test_slope_needs_two_bins() {
        let psd = power_law(-1.0);
        assert!(loglog_slope(&psd, 1.0, 1.2).is_err());
        assert!(loglog_slope(&psd, 50.0, 10.0).is_err());
        // DC is skipped rather than taking log(0)
        assert!(loglog_slope(&psd, 0.0, 0.5).is_err());
    }

    #[test]
    fn test_analyze_pink_signal() {
        let mut source = RngSource::seeded(77);
        let signal = Signal::noise(NoiseColor::Pink, 20_000, 1000.0, &mut source).unwrap();

        let report = NoiseAnalyzer::default().analyze(&signal).unwrap();

        assert_eq!(report.time.values.len(), 1000);
        assert_eq!(report.frequency.frequencies.len(), 1500);
        assert_eq!(report.welch.frequencies.len(), 400);
        assert_eq!(report.psd.len(), 1001);
        assert!(report.slope.is_some());
    }

    #[test]
    fn test_analyze_tiny_signal_has_no_slope() {
        let signal = Signal::new(vec![0.5, 0.1, 0.9, 0.3], 1000.0).unwrap();
        let report = NoiseAnalyzer::default().analyze(&signal).unwrap();
        assert_eq!(report.psd.len(), 3);
        assert!(report.slope.is_none());
    }

    #[test]
    fn test_update_config() {
        let mut analyzer = NoiseAnalyzer::default();
        let config = AnalyzerConfig {
            time_points: 10,
            ..AnalyzerConfig::default()
        };
        analyzer.update_config(config);
        assert_eq!(analyzer.config().time_points, 10);
    }
}
