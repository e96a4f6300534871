//! SthitiFilter - Histogram (discrete Bayes) filter core for 2D grid worlds
//!
//! The numeric heart of a grid-based localization filter: belief grids,
//! probability normalization, and the motion-uncertainty blur step over a
//! toroidal (wrap-around) world.
//!
//! # Architecture
//!
//! The crate is organized into 3 logical layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                    config                           │  ← Parameters
//! │              (TOML-loadable FilterConfig)           │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                    filter/                          │  ← Operations
//! │              (normalize, blur, BlurKernel)          │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │               (BeliefGrid, cyclic math)             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use sthiti_filter::{blur, normalize, BeliefGrid};
//!
//! // Uniform prior over a 4x6 world
//! let belief = BeliefGrid::uniform(4, 6);
//!
//! // One motion step's worth of uncertainty
//! let belief = blur(&belief, 0.12)?;
//!
//! assert!((belief.total() - 1.0).abs() < 1e-9);
//! # Ok::<(), sthiti_filter::FilterError>(())
//! ```
//!
//! # Cyclic World
//!
//! Both grid axes wrap around: the neighbor of the last column is column 0,
//! and the neighbor of the last row is row 0. Mass blurred past an edge
//! re-enters from the opposite edge.
//!
//! # Error Handling
//!
//! Unlike the textbook formulation, degenerate inputs fail fast instead of
//! silently producing NaN grids: an all-zero belief raises
//! [`FilterError::DegenerateDistribution`], ragged or zero-dimension grids
//! raise [`FilterError::MalformedGrid`], and blur factors outside
//! [0.0, 1.0] raise [`FilterError::InvalidBlurFactor`].

#![warn(missing_docs)]

// ============================================================================
// Layer 1: Core foundation (no internal deps)
// ============================================================================
pub mod core;

// ============================================================================
// Layer 2: Filter operations (depends on core)
// ============================================================================
pub mod filter;

// ============================================================================
// Errors and configuration
// ============================================================================
pub mod config;
pub mod error;

// ============================================================================
// Convenience re-exports (flat namespace for common use)
// ============================================================================

pub use crate::core::math;
pub use crate::core::BeliefGrid;

pub use filter::{blur, normalize, BlurKernel};

pub use config::FilterConfig;
pub use error::{FilterError, Result};
