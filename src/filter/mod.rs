//! Filter operations: normalization and motion blur.
//!
//! These are the two numeric steps of the histogram filter:
//!
//! - [`normalize`]: rescale a grid so its total probability mass is 1.0
//! - [`blur`]: spread each cell's mass into its cyclic 3x3 neighborhood
//!   (motion uncertainty), then renormalize
//!
//! # Example
//!
//! ```
//! use sthiti_filter::{blur, normalize, BeliefGrid};
//!
//! let belief = BeliefGrid::uniform(4, 6);
//! let belief = normalize(&belief)?;
//! let belief = blur(&belief, 0.12)?;
//! assert!((belief.total() - 1.0).abs() < 1e-9);
//! # Ok::<(), sthiti_filter::FilterError>(())
//! ```

mod blur;
mod normalize;

pub use blur::{blur, BlurKernel};
pub use normalize::normalize;
