//! Welch power spectral density estimation
//!
//! Averages windowed, detrended periodograms of overlapping segments. The
//! conventions (periodic window, one-sided doubling, density/spectrum
//! scaling, no padding of the last segment) match SciPy's `signal.welch`.

use tracing::{debug, warn};

use super::fft::FftEngine;
use super::windows::{
    apply_window_inplace, generate_window, window_correction_factor, window_energy,
    WindowSymmetry, WindowType,
};
use crate::error::{require_positive, NoiseError, Result};
use crate::signal::{check_sample_rate, Signal, DEFAULT_SAMPLE_RATE};

/// Per-segment trend removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Detrend {
    None,
    /// Subtract the mean
    Constant,
    /// Subtract the least-squares line
    #[default]
    Linear,
}

/// Output units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scaling {
    /// Power per Hz (V^2/Hz)
    #[default]
    Density,
    /// Power per bin (V^2)
    Spectrum,
}

/// Welch estimator configuration
#[derive(Debug, Clone)]
pub struct WelchConfig {
    /// Sample rate in Hz
    pub sample_rate: f64,

    /// Segment length in samples (also the FFT size)
    pub nperseg: usize,

    /// Samples shared by consecutive segments
    pub noverlap: usize,

    /// Window applied to each segment
    pub window: WindowType,

    pub detrend: Detrend,

    pub scaling: Scaling,

    /// Fold negative frequencies into positive ones
    pub onesided: bool,
}

impl Default for WelchConfig {
    fn default() -> Self {
        Self::for_sample_rate(DEFAULT_SAMPLE_RATE)
    }
}

impl WelchConfig {
    /// Two-second segments overlapping by half a second, Hann window, linear detrend
    pub fn for_sample_rate(sample_rate: f64) -> Self {
        Self {
            sample_rate,
            nperseg: (2.0 * sample_rate) as usize,
            noverlap: (sample_rate / 2.0) as usize,
            window: WindowType::Hann,
            detrend: Detrend::Linear,
            scaling: Scaling::Density,
            onesided: true,
        }
    }

    fn validate(&self) -> Result<()> {
        check_sample_rate(self.sample_rate)?;
        require_positive("nperseg", self.nperseg)?;
        if self.noverlap >= self.nperseg {
            return Err(NoiseError::invalid(
                "noverlap",
                format!(
                    "must be less than nperseg ({} >= {})",
                    self.noverlap, self.nperseg
                ),
            ));
        }
        Ok(())
    }
}

/// Power spectrum: frequency/power pairs
#[derive(Debug, Clone, PartialEq)]
pub struct PowerSpectrum {
    /// Bin frequencies in Hz
    pub frequencies: Vec<f64>,

    /// Power in each bin
    pub power: Vec<f64>,
}

impl PowerSpectrum {
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// (frequency, power) pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies.iter().copied().zip(self.power.iter().copied())
    }

    /// Pairs with `low <= frequency <= high`
    pub fn band(&self, low: f64, high: f64) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.iter().filter(move |&(f, _)| f >= low && f <= high)
    }
}

/// Estimate the PSD of `signal` using its own sample rate
pub fn welch_signal(signal: &Signal, config: &WelchConfig) -> Result<PowerSpectrum> {
    let config = WelchConfig {
        sample_rate: signal.sample_rate(),
        ..config.clone()
    };
    welch(signal.samples(), &config)
}

/// Estimate the PSD of `samples`
///
/// # Arguments
/// * `samples` - Input signal
/// * `config` - Segmenting, window, detrend and scaling
///
/// # Returns
/// One-sided spectrum with `nperseg/2 + 1` bins, or `nperseg` bins in FFT
/// order (zero, positive, negative frequencies) when `onesided` is false.
pub fn welch(samples: &[f64], config: &WelchConfig) -> Result<PowerSpectrum> {
    config.validate()?;
    if samples.is_empty() {
        return Err(NoiseError::invalid("samples", "signal is empty"));
    }

    let mut nperseg = config.nperseg;
    let mut noverlap = config.noverlap;
    if nperseg > samples.len() {
        warn!(
            nperseg,
            len = samples.len(),
            "nperseg is greater than input length, using nperseg = input length"
        );
        nperseg = samples.len();
        noverlap = noverlap.min(nperseg - 1);
    }

    let step = nperseg - noverlap;
    let num_segments = (samples.len() - noverlap) / step;

    let window = generate_window(config.window, nperseg, WindowSymmetry::Periodic);
    let scale = match config.scaling {
        Scaling::Density => 1.0 / (config.sample_rate * window_energy(&window)),
        Scaling::Spectrum => {
            // 1 / (sum w)^2
            let gain = window_correction_factor(&window) / nperseg as f64;
            gain * gain
        }
    };

    let mut engine = FftEngine::new(nperseg)?;
    let mut segment = vec![0.0; nperseg];
    let mut accumulated = vec![0.0; engine.num_bins()];

    for index in 0..num_segments {
        let start = index * step;
        segment.copy_from_slice(&samples[start..start + nperseg]);
        detrend(&mut segment, config.detrend);
        apply_window_inplace(&mut segment, &window);

        let spectrum = engine.compute_spectrum(&segment)?;
        for (acc, bin) in accumulated.iter_mut().zip(spectrum.iter()) {
            *acc += bin.norm_sqr();
        }
    }

    let norm = scale / num_segments as f64;
    for acc in accumulated.iter_mut() {
        *acc *= norm;
    }

    debug!(num_segments, nperseg, noverlap, "computed welch estimate");

    let spectrum = if config.onesided {
        one_sided(accumulated, nperseg, config.sample_rate)
    } else {
        two_sided(&accumulated, nperseg, config.sample_rate)
    };
    Ok(spectrum)
}

fn one_sided(mut power: Vec<f64>, nfft: usize, sample_rate: f64) -> PowerSpectrum {
    // Everything except DC (and Nyquist for even lengths) has a negative twin
    let last = if nfft % 2 == 0 { power.len() - 1 } else { power.len() };
    for p in power.iter_mut().take(last).skip(1) {
        *p *= 2.0;
    }

    let frequencies = (0..power.len())
        .map(|k| k as f64 * sample_rate / nfft as f64)
        .collect();

    PowerSpectrum { frequencies, power }
}

fn two_sided(half: &[f64], nfft: usize, sample_rate: f64) -> PowerSpectrum {
    let mut frequencies = Vec::with_capacity(nfft);
    let mut power = Vec::with_capacity(nfft);

    for k in 0..nfft {
        let (signed_bin, mirrored) = if k <= (nfft - 1) / 2 {
            (k as f64, k)
        } else {
            (k as f64 - nfft as f64, nfft - k)
        };
        // Real input: |X[N - k]| == |X[k]|
        let idx = if k < half.len() { k } else { mirrored };
        frequencies.push(signed_bin * sample_rate / nfft as f64);
        power.push(half[idx]);
    }

    PowerSpectrum { frequencies, power }
}

/// Remove a trend from `segment` in place
pub fn detrend(segment: &mut [f64], kind: Detrend) {
    let n = segment.len();
    if n == 0 {
        return;
    }

    match kind {
        Detrend::None => {}
        Detrend::Constant => {
            let mean = segment.iter().sum::<f64>() / n as f64;
            for s in segment.iter_mut() {
                *s -= mean;
            }
        }
        Detrend::Linear => {
            let mean = segment.iter().sum::<f64>() / n as f64;
            let t_mean = (n - 1) as f64 / 2.0;

            let mut sxy = 0.0;
            let mut sxx = 0.0;
            for (t, &s) in segment.iter().enumerate() {
                let dt = t as f64 - t_mean;
                sxy += dt * (s - mean);
                sxx += dt * dt;
            }
            let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };

            for (t, s) in segment.iter_mut().enumerate() {
                *s -= mean + slope * (t as f64 - t_mean);
            }
        }
    }
}
