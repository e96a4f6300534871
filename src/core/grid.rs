//! Dense belief grid storage.
//!
//! A [`BeliefGrid`] holds the discrete probability distribution over cells
//! of a rectangular grid world. Cells are unnormalized, non-negative
//! weights until passed through the filter operations.

use serde::{Deserialize, Serialize};

use crate::core::math;
use crate::error::{FilterError, Result};

/// 2D grid of probability weights.
///
/// Storage is row-major: `index = row * width + col`. Grids are plain value
/// types; the filter operations take a grid by reference and allocate a
/// fresh output grid of the same dimensions.
///
/// A zero-dimension grid is representable (so the constructors stay
/// infallible) but is rejected by the filter operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeliefGrid {
    /// Cell weights, row-major.
    cells: Vec<f64>,
    /// Grid width in cells.
    width: usize,
    /// Grid height in cells.
    height: usize,
}

impl BeliefGrid {
    /// Create a grid with every cell set to 0.0.
    pub fn zeros(height: usize, width: usize) -> Self {
        Self {
            cells: vec![0.0; height * width],
            width,
            height,
        }
    }

    /// Create a grid with uniform belief: every cell holds `1 / (height * width)`.
    ///
    /// This is the natural initial belief before any evidence arrives.
    pub fn uniform(height: usize, width: usize) -> Self {
        let area = height * width;
        if area == 0 {
            return Self::zeros(height, width);
        }
        Self {
            cells: vec![1.0 / area as f64; area],
            width,
            height,
        }
    }

    /// Build a grid from nested rows, validating the rectangular shape.
    ///
    /// Fails with [`FilterError::MalformedGrid`] if there are no rows, no
    /// columns, or any row's length differs from row 0's.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let height = rows.len();
        if height == 0 {
            return Err(FilterError::MalformedGrid("grid has no rows".into()));
        }
        let width = rows[0].len();
        if width == 0 {
            return Err(FilterError::MalformedGrid("grid has no columns".into()));
        }

        let mut cells = Vec::with_capacity(height * width);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(FilterError::MalformedGrid(format!(
                    "row {} has length {}, expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
            cells.extend(row);
        }

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Create from raw row-major cells (used by the filter operations).
    pub(crate) fn from_raw(cells: Vec<f64>, width: usize, height: usize) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            cells,
            width,
            height,
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Grid dimensions as (height, width).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the weight at (row, col).
    ///
    /// Returns `None` if outside grid bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Set the weight at (row, col).
    ///
    /// Out-of-bounds coordinates are ignored and return `false`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, weight: f64) -> bool {
        if row < self.height && col < self.width {
            self.cells[row * self.width + col] = weight;
            true
        } else {
            false
        }
    }

    /// Raw row-major cells.
    pub fn as_slice(&self) -> &[f64] {
        &self.cells
    }

    /// Iterate over cell weights in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.cells.iter().copied()
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Total probability mass (sum of all cells).
    pub fn total(&self) -> f64 {
        self.cells.iter().sum()
    }

    /// Return a copy with every cell multiplied by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            cells: self.cells.iter().map(|w| w * factor).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Cell-wise comparison within the default tolerance.
    ///
    /// Grids of different dimensions are never close enough.
    pub fn close_enough(&self, other: &BeliefGrid) -> bool {
        self.close_enough_eps(other, math::DEFAULT_TOLERANCE)
    }

    /// Cell-wise comparison within an explicit tolerance.
    pub fn close_enough_eps(&self, other: &BeliefGrid, tolerance: f64) -> bool {
        if self.dimensions() != other.dimensions() {
            return false;
        }
        self.cells
            .iter()
            .zip(other.cells.iter())
            .all(|(&a, &b)| math::close_enough_eps(a, b, tolerance))
    }
}
