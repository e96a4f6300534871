//! Error types for SthitiFilter

use thiserror::Error;

/// SthitiFilter error type
#[derive(Error, Debug)]
pub enum FilterError {
    /// The grid's total probability mass cannot be normalized away.
    ///
    /// Raised when the total is zero, negative, or not finite. The original
    /// formulation divided through regardless and produced NaN-filled grids;
    /// failing here keeps invalid distributions out of downstream updates.
    #[error("Degenerate distribution: total probability mass is {total}")]
    DegenerateDistribution {
        /// The offending total mass.
        total: f64,
    },

    /// Grid shape violates the rectangular, non-empty precondition.
    #[error("Malformed grid: {0}")]
    MalformedGrid(String),

    /// Blur factor outside the valid [0.0, 1.0] range.
    #[error("Blur factor {0} is outside [0.0, 1.0]")]
    InvalidBlurFactor(f64),

    /// Configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for FilterError {
    fn from(e: toml::de::Error) -> Self {
        FilterError::Config(e.to_string())
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, FilterError>;
