//! Synthetic noise generators

pub mod random;
pub mod lattice;
pub mod pink;
pub mod white;
pub mod brown;

pub use random::{RandomSource, RngSource};
pub use lattice::SourceLattice;
pub use pink::{voss, pink_noise, OverflowPolicy, VossConfig};
pub use white::{white_noise, WhiteNoiseConfig};
pub use brown::brown_noise;

use crate::error::Result;

/// Noise colour, named after the slope of its power spectrum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseColor {
    /// Flat spectrum
    White,
    /// 1/f
    Pink,
    /// 1/f^2
    Brown,
}

impl NoiseColor {
    /// Nominal log-log PSD slope
    pub fn expected_slope(&self) -> f64 {
        match self {
            NoiseColor::White => 0.0,
            NoiseColor::Pink => -1.0,
            NoiseColor::Brown => -2.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NoiseColor::White => "white",
            NoiseColor::Pink => "pink",
            NoiseColor::Brown => "brown",
        }
    }
}

/// Generate `n` samples of the given colour with default parameters
pub fn generate<S: RandomSource + ?Sized>(
    color: NoiseColor,
    n: usize,
    source: &mut S,
) -> Result<Vec<f64>> {
    match color {
        NoiseColor::White => white_noise(n, &WhiteNoiseConfig::default(), source),
        NoiseColor::Pink => pink_noise(n, source),
        NoiseColor::Brown => brown_noise(n, source),
    }
}
