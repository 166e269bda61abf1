//! Window functions for spectral estimation
//!
//! Applied to time-domain segments before the FFT to reduce spectral leakage.

use std::f64::consts::PI;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowType {
    /// Hann window: w[n] = 0.5 - 0.5*cos(2πn/D)
    /// Sidelobe attenuation: ~31 dB, falls off quickly; the usual Welch choice
    Hann,

    /// Hamming window: w[n] = 0.54 - 0.46*cos(2πn/D)
    Hamming,

    /// Blackman window: w[n] = 0.42 - 0.5*cos(2πn/D) + 0.08*cos(4πn/D)
    Blackman,

    /// Rectangular window (no windowing)
    Rectangular,
}

/// Whether a window is built for filter design or for spectral analysis
///
/// Symmetric windows use D = M - 1 so both endpoints match. Periodic windows
/// use D = M, i.e. a symmetric window of length M + 1 with the last sample
/// dropped, which is what FFT-based estimators expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowSymmetry {
    Symmetric,
    #[default]
    Periodic,
}

/// Generate window coefficients
///
/// # Arguments
/// * `window_type` - Type of window function
/// * `length` - Number of samples (M)
/// * `symmetry` - Symmetric or periodic definition
///
/// # Returns
/// Vector of window coefficients w[n] for n = 0..M-1
pub fn generate_window(window_type: WindowType, length: usize, symmetry: WindowSymmetry) -> Vec<f64> {
    if length == 0 {
        return Vec::new();
    }
    if length == 1 {
        return vec![1.0];
    }

    let denom = match symmetry {
        WindowSymmetry::Symmetric => (length - 1) as f64,
        WindowSymmetry::Periodic => length as f64,
    };

    (0..length)
        .map(|n| {
            let angle = 2.0 * PI * n as f64 / denom;
            match window_type {
                WindowType::Hann => 0.5 - 0.5 * angle.cos(),
                WindowType::Hamming => 0.54 - 0.46 * angle.cos(),
                WindowType::Blackman => 0.42 - 0.5 * angle.cos() + 0.08 * (2.0 * angle).cos(),
                WindowType::Rectangular => 1.0,
            }
        })
        .collect()
}

/// Multiply `signal` by `window` in place
pub fn apply_window_inplace(signal: &mut [f64], window: &[f64]) {
    for (s, w) in signal.iter_mut().zip(window.iter()) {
        *s *= w;
    }
}

/// Amplitude correction: multiply an FFT magnitude by this to undo the window's gain
pub fn window_correction_factor(window: &[f64]) -> f64 {
    let sum: f64 = window.iter().sum();
    window.len() as f64 / sum
}

/// Sum of squared coefficients (the window's energy)
pub fn window_energy(window: &[f64]) -> f64 {
    window.iter().map(|&w| w * w).sum()
}
