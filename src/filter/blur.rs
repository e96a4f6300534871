//! Motion-uncertainty blur over a cyclic grid.
//!
//! Models the probability spreading caused by an uncertain motion step:
//! each cell's mass is redistributed into its 3x3 neighborhood, with mass
//! leaving one edge re-entering from the opposite edge (toroidal world).
//!
//! With `blurring = 0.12`, a fully localized 3x3 distribution
//!
//! ```text
//! 0.00  0.00  0.00
//! 0.00  1.00  0.00
//! 0.00  0.00  0.00
//! ```
//!
//! becomes
//!
//! ```text
//! 0.01  0.02  0.01
//! 0.02  0.88  0.02
//! 0.01  0.02  0.01
//! ```

use crate::core::math::wrap_index;
use crate::core::BeliefGrid;
use crate::error::{FilterError, Result};

use super::normalize::normalize;

/// 3x3 blur window over row/column offsets in {-1, 0, 1}.
///
/// The window is parameterized by a single blur factor `b` in [0.0, 1.0]:
/// the source cell keeps `1 - b`, each orthogonal neighbor receives `b / 6`,
/// and each diagonal neighbor receives `b / 12`. The nine weights sum to 1,
/// so every cell's outgoing mass is conserved.
#[derive(Debug, Clone, Copy)]
pub struct BlurKernel {
    blurring: f64,
    /// (row offset, col offset, weight) for each of the nine taps.
    taps: [(isize, isize, f64); 9],
}

impl BlurKernel {
    /// Create a kernel for the given blur factor.
    ///
    /// # Errors
    ///
    /// [`FilterError::InvalidBlurFactor`] unless `0.0 <= blurring <= 1.0`.
    /// Out-of-range factors would produce negative or >1 weights and the
    /// result would no longer be a probability redistribution.
    pub fn new(blurring: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&blurring) {
            return Err(FilterError::InvalidBlurFactor(blurring));
        }

        let center = 1.0 - blurring;
        let corner = blurring / 12.0;
        let adjacent = blurring / 6.0;

        let taps = [
            (-1, -1, corner),
            (-1, 0, adjacent),
            (-1, 1, corner),
            (0, -1, adjacent),
            (0, 0, center),
            (0, 1, adjacent),
            (1, -1, corner),
            (1, 0, adjacent),
            (1, 1, corner),
        ];

        Ok(Self { blurring, taps })
    }

    /// The blur factor this kernel was built from.
    pub fn blurring(&self) -> f64 {
        self.blurring
    }

    /// Weight the source cell keeps.
    pub fn center(&self) -> f64 {
        1.0 - self.blurring
    }

    /// Weight each diagonal neighbor receives.
    pub fn corner(&self) -> f64 {
        self.blurring / 12.0
    }

    /// Weight each orthogonal neighbor receives.
    pub fn adjacent(&self) -> f64 {
        self.blurring / 6.0
    }

    /// The nine (row offset, col offset, weight) taps.
    pub fn taps(&self) -> &[(isize, isize, f64); 9] {
        &self.taps
    }

    /// Blur (and normalize) a grid with this kernel.
    ///
    /// # Errors
    ///
    /// - [`FilterError::MalformedGrid`] if the grid has no cells.
    /// - [`FilterError::DegenerateDistribution`] if the grid carries no
    ///   mass to spread (inherited from the normalization step).
    pub fn apply(&self, grid: &BeliefGrid) -> Result<BeliefGrid> {
        if grid.is_empty() {
            return Err(FilterError::MalformedGrid(
                "cannot blur an empty grid".into(),
            ));
        }
        normalize(&self.spread(grid))
    }

    /// Scatter every cell's mass into its wrapped 3x3 neighborhood.
    ///
    /// The taps sum to 1, so the accumulator's total equals the input's
    /// total. Renormalization afterwards only removes floating-point drift.
    fn spread(&self, grid: &BeliefGrid) -> BeliefGrid {
        let (height, width) = grid.dimensions();
        let mut cells = vec![0.0; height * width];

        for (row, row_cells) in grid.rows().enumerate() {
            for (col, &mass) in row_cells.iter().enumerate() {
                for &(dy, dx, weight) in self.taps.iter() {
                    let r = wrap_index(row as isize + dy, height);
                    let c = wrap_index(col as isize + dx, width);
                    cells[r * width + c] += mass * weight;
                }
            }
        }

        BeliefGrid::from_raw(cells, width, height)
    }
}

/// Blur (and normalize) a grid of probabilities.
///
/// Convenience wrapper that builds a [`BlurKernel`] and applies it. Use the
/// kernel directly when blurring repeatedly with the same factor.
///
/// # Errors
///
/// See [`BlurKernel::new`] and [`BlurKernel::apply`].
pub fn blur(grid: &BeliefGrid, blurring: f64) -> Result<BeliefGrid> {
    BlurKernel::new(blurring)?.apply(grid)
}
