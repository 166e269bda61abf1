//! Noise Workbench - synthetic noise generation and spectral analysis
//!
//! White, pink (Voss-McCartney) and brown noise generators, FFT and Welch
//! spectra, and plot-ready views handed to external plotting tools.

pub mod error;
pub mod noise;
pub mod signal;
pub mod spectrum;
pub mod views;

pub use error::{NoiseError, Result};
pub use noise::{NoiseColor, RandomSource, RngSource, VossConfig};
pub use signal::Signal;
pub use spectrum::{NoiseAnalyzer, WelchConfig};
