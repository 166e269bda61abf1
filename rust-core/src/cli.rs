// Command-line argument parsing for the noise workbench.

use clap::{Parser, ValueEnum};
use noise_workbench::NoiseColor;

/// Generate synthetic noise and print plot-ready CSV or a spectral summary.
#[derive(Parser, Debug)]
#[command(name = "noise-workbench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Noise colour to generate
    #[arg(value_enum)]
    pub color: ColorArg,

    /// Number of samples to generate
    #[arg(short = 'n', long, default_value_t = 1_000_000, allow_negative_numbers = true)]
    pub samples: i64,

    /// Random sources summed for pink noise
    #[arg(long, default_value_t = 16, allow_negative_numbers = true)]
    pub ncols: i64,

    /// Drop out-of-range pink updates instead of folding them into the first source
    #[arg(long)]
    pub discard_overflow: bool,

    /// Seed for a reproducible run (OS entropy when omitted)
    #[arg(short, long, env = "NOISE_WORKBENCH_SEED")]
    pub seed: Option<u64>,

    /// Sample rate in Hz
    #[arg(long, default_value_t = 1000.0)]
    pub sample_rate: f64,

    /// What to print
    #[arg(short, long, value_enum, default_value_t = View::Summary)]
    pub view: View,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ColorArg {
    White,
    Pink,
    Brown,
}

impl From<ColorArg> for NoiseColor {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::White => NoiseColor::White,
            ColorArg::Pink => NoiseColor::Pink,
            ColorArg::Brown => NoiseColor::Brown,
        }
    }
}

/// Output selection
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum View {
    /// time,value CSV for the first second
    Time,
    /// frequency,magnitude,log_magnitude CSV
    Fft,
    /// frequency,power CSV of the Welch PSD
    Welch,
    /// One line with length, moments and fitted PSD slope
    #[default]
    Summary,
}
