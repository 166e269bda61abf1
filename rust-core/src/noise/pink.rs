//! Pink (1/f) noise using the Voss-McCartney algorithm
//!
//! Several random sources are summed; source `k` is refreshed about half as
//! often as source `k - 1`, which gives the 1/f falloff. Updates land at
//! random rows of a lattice that is then forward-filled, so each source holds
//! its value until its next refresh.

use tracing::debug;

use super::lattice::SourceLattice;
use super::random::RandomSource;
use crate::error::{require_positive, Result};

/// Default number of random sources
pub const DEFAULT_SOURCES: usize = 16;

/// Success probability of the geometric column draw
const UPDATE_PROBABILITY: f64 = 0.5;

/// What to do with an update whose drawn column is past the last source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Redirect the update to column 0 (the classic formulation)
    #[default]
    FoldIntoFirst,

    /// Drop the update; its row and value draws are still consumed
    Discard,
}

/// Voss-McCartney generator configuration
#[derive(Debug, Clone)]
pub struct VossConfig {
    /// Number of random sources (lattice columns)
    pub ncols: usize,

    /// Handling of out-of-range column draws
    pub overflow: OverflowPolicy,
}

impl Default for VossConfig {
    fn default() -> Self {
        Self {
            ncols: DEFAULT_SOURCES,
            overflow: OverflowPolicy::FoldIntoFirst,
        }
    }
}

impl VossConfig {
    pub fn with_sources(ncols: usize) -> Self {
        Self {
            ncols,
            ..Self::default()
        }
    }
}

/// Generate `nrows` samples of pink noise
///
/// # Arguments
/// * `nrows` - Number of output samples
/// * `config` - Source count and overflow handling
/// * `source` - Random draws
///
/// # Returns
/// Row sums of the filled lattice, in time order
pub fn voss<S: RandomSource + ?Sized>(
    nrows: usize,
    config: &VossConfig,
    source: &mut S,
) -> Result<Vec<f64>> {
    let nrows = require_positive("nrows", nrows)?;
    let ncols = require_positive("ncols", config.ncols)?;

    let mut lattice = SourceLattice::new(nrows, ncols)?;

    // Every column gets a value at row 0 to fill from
    for col in 0..ncols {
        lattice.set(0, col, source.uniform());
    }
    // Column 0 changes on every sample
    for row in 0..nrows {
        lattice.set(row, 0, source.uniform());
    }

    // One update per sample: all columns, then all rows, then all values
    let cols = (0..nrows)
        .map(|_| source.geometric(UPDATE_PROBABILITY))
        .collect::<Result<Vec<u64>>>()?;
    let rows: Vec<usize> = (0..nrows).map(|_| source.uniform_index(nrows)).collect();

    let mut clipped = 0usize;
    for (&drawn, &row) in cols.iter().zip(rows.iter()) {
        let value = source.uniform();
        let col = match usize::try_from(drawn) {
            Ok(col) if col < ncols => col,
            _ => {
                clipped += 1;
                match config.overflow {
                    OverflowPolicy::FoldIntoFirst => 0,
                    OverflowPolicy::Discard => continue,
                }
            }
        };
        lattice.set(row, col, value);
    }

    lattice.forward_fill();
    debug_assert!(lattice.is_complete());

    debug!(nrows, ncols, clipped, "generated pink noise");

    Ok(lattice.row_sums())
}

/// Pink noise with the default 16 sources
pub fn pink_noise<S: RandomSource + ?Sized>(nrows: usize, source: &mut S) -> Result<Vec<f64>> {
    voss(nrows, &VossConfig::default(), source)
}
