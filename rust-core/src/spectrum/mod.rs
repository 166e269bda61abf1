//! Spectral analysis with FFT and Welch's method

pub mod windows;
pub mod fft;
pub mod welch;
pub mod analysis;

pub use windows::{generate_window, WindowSymmetry, WindowType};
pub use fft::{log_magnitude, FftEngine};
pub use welch::{welch, welch_signal, Detrend, PowerSpectrum, Scaling, WelchConfig};
pub use analysis::{loglog_slope, AnalyzerConfig, NoiseAnalyzer, NoiseReport};
