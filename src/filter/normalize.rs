//! Probability normalization.

use crate::core::BeliefGrid;
use crate::error::{FilterError, Result};

/// Positive totals below this trigger a numerical-stability warning.
const NEAR_ZERO_MASS: f64 = 1e-12;

/// Rescale a grid so its total probability mass is 1.0.
///
/// Every output cell is the input cell divided by the grid's total. The
/// input is untouched; the output has identical dimensions.
///
/// # Errors
///
/// - [`FilterError::MalformedGrid`] if the grid has no cells.
/// - [`FilterError::DegenerateDistribution`] if the total mass is zero,
///   negative, or not finite. An all-zero grid lands here.
pub fn normalize(grid: &BeliefGrid) -> Result<BeliefGrid> {
    if grid.is_empty() {
        return Err(FilterError::MalformedGrid(
            "cannot normalize an empty grid".into(),
        ));
    }

    let total = grid.total();
    if !total.is_finite() || total <= 0.0 {
        return Err(FilterError::DegenerateDistribution { total });
    }
    if total < NEAR_ZERO_MASS {
        log::warn!(
            "Total probability mass {:e} is near zero, normalization may be unstable",
            total
        );
    }

    let cells = grid.iter().map(|w| w / total).collect();
    Ok(BeliefGrid::from_raw(cells, grid.width(), grid.height()))
}
