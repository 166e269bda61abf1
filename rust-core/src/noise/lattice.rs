//! Source lattice for the Voss-McCartney generator
//!
//! One row per output sample, one column per random source. Cells start
//! undefined and are filled by seeding, scheduled updates and finally a
//! column-wise forward fill.

use ndarray::{Array2, Axis};

use crate::error::{require_positive, Result};

/// `nrows x ncols` grid of optional cells
#[derive(Debug, Clone)]
pub struct SourceLattice {
    cells: Array2<Option<f64>>,
}

impl SourceLattice {
    /// Create an all-undefined lattice
    pub fn new(nrows: usize, ncols: usize) -> Result<Self> {
        let nrows = require_positive("nrows", nrows)?;
        let ncols = require_positive("ncols", ncols)?;

        Ok(Self {
            cells: Array2::from_elem((nrows, ncols), None),
        })
    }

    pub fn nrows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.cells.ncols()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.cells[[row, col]]
    }

    /// Assign a cell, overwriting whatever was there
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.cells[[row, col]] = Some(value);
    }

    /// Replace undefined cells with the nearest defined value above them
    ///
    /// Cells with nothing defined above stay undefined.
    pub fn forward_fill(&mut self) {
        for mut column in self.cells.axis_iter_mut(Axis(1)) {
            let mut last = None;
            for cell in column.iter_mut() {
                if cell.is_some() {
                    last = *cell;
                } else {
                    *cell = last;
                }
            }
        }
    }

    /// True when no cell is undefined
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Sum each row across all columns
    ///
    /// Undefined cells contribute nothing; call [`forward_fill`](Self::forward_fill)
    /// first so that every source is represented.
    pub fn row_sums(&self) -> Vec<f64> {
        self.cells
            .axis_iter(Axis(0))
            .map(|row| row.iter().flatten().sum::<f64>())
            .collect()
    }
}
