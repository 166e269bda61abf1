//! Brown (1/f^2) noise by spectral shaping
//!
//! Random complex Gaussian bins are divided by `k + 1` and sent through an
//! inverse real FFT, so amplitude falls as 1/f and power as 1/f^2.

use num_complex::Complex;
use realfft::RealFftPlanner;
use tracing::debug;

use super::random::RandomSource;
use crate::error::{require_positive, NoiseError, Result};

/// Generate `n` samples of brown noise
pub fn brown_noise<S: RandomSource + ?Sized>(n: usize, source: &mut S) -> Result<Vec<f64>> {
    let n = require_positive("n", n)?;

    // Odd lengths are generated one sample long and trimmed
    let uneven = n % 2;
    let num_bins = n / 2 + 1 + uneven;
    let fft_size = 2 * (num_bins - 1);

    let re: Vec<f64> = (0..num_bins).map(|_| source.standard_normal()).collect();
    let im: Vec<f64> = (0..num_bins).map(|_| source.standard_normal()).collect();

    let mut spectrum: Vec<Complex<f64>> = re
        .iter()
        .zip(im.iter())
        .enumerate()
        .map(|(k, (&r, &i))| Complex::new(r, i) / (k + 1) as f64)
        .collect();

    // DC and Nyquist must be real for a real-valued inverse
    spectrum[0].im = 0.0;
    spectrum[num_bins - 1].im = 0.0;

    let mut planner = RealFftPlanner::<f64>::new();
    let c2r = planner.plan_fft_inverse(fft_size);
    let mut output = c2r.make_output_vec();
    c2r.process(&mut spectrum, &mut output)
        .map_err(|e| NoiseError::Fft(e.to_string()))?;

    let scale = 1.0 / fft_size as f64;
    output.truncate(n);
    for sample in output.iter_mut() {
        *sample *= scale;
    }

    debug!(n, fft_size, "generated brown noise");

    Ok(output)
}
