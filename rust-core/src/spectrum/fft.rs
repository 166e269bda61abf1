//! FFT engine using realfft for real-valued signals
//!
//! Holds a forward plan and reusable buffers so repeated transforms of the
//! same size (Welch segments, repeated views) do not re-plan or reallocate.

use std::sync::Arc;

use num_complex::Complex;
use realfft::{RealFftPlanner, RealToComplex};

use crate::error::{require_positive, NoiseError, Result};

/// Smallest magnitude fed to `ln`
const LOG_FLOOR: f64 = 1e-300;

/// FFT engine for real-valued signals
pub struct FftEngine {
    /// FFT size (number of samples)
    fft_size: usize,

    /// Real FFT processor
    r2c: Arc<dyn RealToComplex<f64>>,

    /// Reusable input buffer
    input_buffer: Vec<f64>,

    /// Reusable output buffer (one-sided complex spectrum)
    output_buffer: Vec<Complex<f64>>,
}

impl FftEngine {
    /// Create new FFT engine
    ///
    /// # Arguments
    /// * `fft_size` - FFT size (number of samples)
    pub fn new(fft_size: usize) -> Result<Self> {
        let fft_size = require_positive("fft_size", fft_size)?;

        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(fft_size);

        let input_buffer = r2c.make_input_vec();
        let output_buffer = r2c.make_output_vec();

        Ok(Self {
            fft_size,
            r2c,
            input_buffer,
            output_buffer,
        })
    }

    /// Compute the one-sided complex spectrum X[k], k = 0..=fft_size/2
    ///
    /// The signal is truncated or zero-padded to `fft_size`.
    pub fn compute_spectrum(&mut self, signal: &[f64]) -> Result<&[Complex<f64>]> {
        let copy_len = signal.len().min(self.fft_size);
        self.input_buffer[..copy_len].copy_from_slice(&signal[..copy_len]);
        self.input_buffer[copy_len..].fill(0.0);

        self.r2c
            .process(&mut self.input_buffer, &mut self.output_buffer)
            .map_err(|e| NoiseError::Fft(e.to_string()))?;

        Ok(self.output_buffer.as_slice())
    }

    /// Magnitude spectrum |X[k]| for positive frequencies
    pub fn compute_magnitude(&mut self, signal: &[f64]) -> Result<Vec<f64>> {
        Ok(self.compute_spectrum(signal)?.iter().map(|c| c.norm()).collect())
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Get number of frequency bins (fft_size/2 + 1 for real FFT)
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2 + 1
    }

    /// Frequency of `bin` in Hz
    pub fn bin_to_hz(&self, bin: usize, sample_rate: f64) -> f64 {
        bin as f64 * sample_rate / self.fft_size as f64
    }

    /// Frequencies of all one-sided bins in Hz
    pub fn frequency_axis_hz(&self, sample_rate: f64) -> Vec<f64> {
        (0..self.num_bins())
            .map(|bin| self.bin_to_hz(bin, sample_rate))
            .collect()
    }
}

/// Natural log of a magnitude spectrum, ln|X[k]|
///
/// Zero bins are floored so the result stays finite.
pub fn log_magnitude(magnitude: &[f64]) -> Vec<f64> {
    magnitude.iter().map(|&mag| mag.max(LOG_FLOOR).ln()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_fft_dc_signal() {
        let mut fft = FftEngine::new(1024).unwrap();

        // DC signal (constant), zero-padded
        let signal = vec![1.0; 100];
        let spectrum = fft.compute_magnitude(&signal).unwrap();

        assert!((spectrum[0] - 100.0).abs() < 1e-9);
        assert!(spectrum[10] < 100.0);
    }

    #[test]
    fn test_fft_sine_wave() {
        let fs = 1000.0;
        let mut fft = FftEngine::new(1000).unwrap();

        // 50 Hz lands exactly on bin 50
        let signal: Vec<f64> = (0..1000)
            .map(|n| (2.0 * PI * 50.0 * n as f64 / fs).sin())
            .collect();

        let spectrum = fft.compute_magnitude(&signal).unwrap();
        let (peak_bin, &peak_mag) = spectrum
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .unwrap();

        assert_eq!(peak_bin, 50);
        assert!((fft.bin_to_hz(peak_bin, fs) - 50.0).abs() < 1e-12);
        // N/2 for a unit sine
        assert!((peak_mag - 500.0).abs() < 1e-6);
    }

    #[test]
    fn test_log_magnitude() {
        let mut fft = FftEngine::new(8).unwrap();
        let signal = [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];

        // Impulse: flat unit magnitude
        let log_mag = log_magnitude(&fft.compute_magnitude(&signal).unwrap());
        assert_eq!(log_mag.len(), 5);
        assert!(log_mag.iter().all(|v| v.abs() < 1e-12));

        // Zero padding a single sample of 2.0 gives |X[k]| = 2 everywhere
        let padded = log_magnitude(&fft.compute_magnitude(&[2.0]).unwrap());
        assert!(padded.iter().all(|v| (v - 2f64.ln()).abs() < 1e-12));

        // Zeros stay finite in log space
        let zeros = log_magnitude(&fft.compute_magnitude(&[0.0; 8]).unwrap());
        assert!(zeros.iter().all(|&v| v == LOG_FLOOR.ln()));
    }

    #[test]
    fn test_spectrum_matches_dft() {
        let n = 16;
        let mut fft = FftEngine::new(n).unwrap();
        let signal: Vec<f64> = (0..n).map(|i| ((i * 7) % 5) as f64 - 2.0).collect();
        let spectrum = fft.compute_spectrum(&signal).unwrap().to_vec();

        assert_eq!(spectrum.len(), fft.num_bins());
        for (k, bin) in spectrum.iter().enumerate() {
            let direct: Complex<f64> = signal
                .iter()
                .enumerate()
                .map(|(i, &x)| Complex::from_polar(x, -2.0 * PI * (k * i) as f64 / n as f64))
                .sum();
            assert!((bin - direct).norm() < 1e-9, "bin {}", k);
        }
    }

    #[test]
    fn test_frequency_axis() {
        let fft = FftEngine::new(10_000).unwrap();
        let freqs = fft.frequency_axis_hz(1000.0);

        assert_eq!(freqs.len(), 5001);
        assert_eq!(freqs[0], 0.0);
        assert!((freqs[1] - 0.1).abs() < 1e-12);
        assert!((freqs[5000] - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(FftEngine::new(0).is_err());
    }
}
