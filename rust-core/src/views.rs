//! Plot-ready data views
//!
//! Each view is the data a plotting consumer needs for one figure panel,
//! already truncated to the range worth drawing. Nothing here renders.

use crate::error::{NoiseError, Result};
use crate::signal::Signal;
use crate::spectrum::fft::{log_magnitude, FftEngine};
use crate::spectrum::welch::PowerSpectrum;

/// One second at the default 1000 Hz
pub const TIME_VIEW_POINTS: usize = 1000;

/// Samples fed to the FFT view; keeps bin spacing at 0.1 Hz for 1000 Hz signals
pub const FFT_SEGMENT_LEN: usize = 10_000;

/// Leading FFT bins shown
pub const FFT_VIEW_BINS: usize = 1500;

/// Leading Welch bins shown
pub const WELCH_VIEW_BINS: usize = 400;

/// Frequency range (Hz) a Welch plot is zoomed to
pub const WELCH_DISPLAY_BAND: (f64, f64) = (1.0, 150.0);

/// Leading stretch of a signal against time
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesView {
    pub times: Vec<f64>,
    pub values: Vec<f64>,
}

impl TimeSeriesView {
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }
}

/// FFT magnitude of the leading segment, linear and log
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyView {
    pub frequencies: Vec<f64>,
    pub magnitude: Vec<f64>,
    /// Natural log of `magnitude`
    pub log_magnitude: Vec<f64>,
}

impl FrequencyView {
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.frequencies
            .iter()
            .zip(self.magnitude.iter())
            .zip(self.log_magnitude.iter())
            .map(|((&f, &m), &l)| (f, m, l))
    }
}

/// Welch PSD for a log-log plot
#[derive(Debug, Clone, PartialEq)]
pub struct WelchView {
    pub frequencies: Vec<f64>,
    pub power: Vec<f64>,
    /// Suggested x-axis limits in Hz
    pub display_band: (f64, f64),
}

impl WelchView {
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies.iter().copied().zip(self.power.iter().copied())
    }
}

/// First `max_points` samples with their times
pub fn time_view(signal: &Signal, max_points: usize) -> TimeSeriesView {
    let values = signal.head(max_points).to_vec();
    let times = (0..values.len()).map(|i| signal.time_at(i)).collect();
    TimeSeriesView { times, values }
}

/// FFT of the first `segment_len` samples, truncated to `max_bins` bins
pub fn frequency_view(signal: &Signal, segment_len: usize, max_bins: usize) -> Result<FrequencyView> {
    let segment = signal.head(segment_len);
    if segment.is_empty() {
        return Err(NoiseError::invalid("signal", "nothing to transform"));
    }

    let mut engine = FftEngine::new(segment.len())?;
    let mut magnitude = engine.compute_magnitude(segment)?;
    let mut frequencies = engine.frequency_axis_hz(signal.sample_rate());
    magnitude.truncate(max_bins);
    frequencies.truncate(max_bins);

    let log_magnitude = log_magnitude(&magnitude);

    Ok(FrequencyView {
        frequencies,
        magnitude,
        log_magnitude,
    })
}

/// First `max_bins` bins of a PSD
pub fn welch_view(psd: &PowerSpectrum, max_bins: usize, display_band: (f64, f64)) -> WelchView {
    let n = max_bins.min(psd.len());
    WelchView {
        frequencies: psd.frequencies[..n].to_vec(),
        power: psd.power[..n].to_vec(),
        display_band,
    }
}
