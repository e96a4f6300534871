//! Filter configuration.
//!
//! Loads filter parameters from a single TOML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sthiti_filter::FilterConfig;
//!
//! // Load from default path (configs/filter.toml)
//! let config = FilterConfig::load_default()?;
//!
//! // Or use built-in defaults (no file needed)
//! let config = FilterConfig::default();
//!
//! let kernel = config.kernel()?;
//! ```
//!
//! ## Example TOML
//!
//! ```toml
//! blurring = 0.12    # mass spread to neighbors per motion step
//! tolerance = 1e-4   # grid comparison tolerance
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::math::DEFAULT_TOLERANCE;
use crate::error::Result;
use crate::filter::BlurKernel;

/// Runtime parameters for the histogram filter.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Fraction of each cell's mass spread to its neighbors per motion
    /// step. 0.0 keeps the belief unchanged, 1.0 spreads everything.
    #[serde(default = "default_blurring")]
    pub blurring: f64,

    /// Tolerance used when comparing probability grids.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

fn default_blurring() -> f64 {
    0.12
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            blurring: default_blurring(),
            tolerance: default_tolerance(),
        }
    }
}

impl FilterConfig {
    /// Low motion noise (tight odometry, hard floors).
    pub fn precise() -> Self {
        Self {
            blurring: 0.05,
            ..Default::default()
        }
    }

    /// High motion noise (wheel slip, poor odometry).
    pub fn noisy() -> Self {
        Self {
            blurring: 0.25,
            ..Default::default()
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load from the default config path (configs/filter.toml).
    ///
    /// Falls back to built-in defaults if the file does not exist.
    pub fn load_default() -> Result<Self> {
        let path = Path::new("configs/filter.toml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Build the validated blur kernel for this configuration.
    pub fn kernel(&self) -> Result<BlurKernel> {
        BlurKernel::new(self.blurring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterError;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = FilterConfig::default();
        assert_eq!(config.blurring, 0.12);
        assert_eq!(config.tolerance, 1e-4);
    }

    #[test]
    fn test_presets() {
        assert!(FilterConfig::precise().blurring < FilterConfig::noisy().blurring);
    }

    #[test]
    fn test_from_toml_partial() {
        // Missing fields fall back to defaults
        let config = FilterConfig::from_toml("blurring = 0.3").unwrap();
        assert_eq!(config.blurring, 0.3);
        assert_eq!(config.tolerance, 1e-4);
    }

    #[test]
    fn test_from_toml_invalid() {
        assert!(matches!(
            FilterConfig::from_toml("blurring = \"lots\""),
            Err(FilterError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "blurring = 0.2\ntolerance = 1e-3").unwrap();

        let config = FilterConfig::load(file.path()).unwrap();
        assert_eq!(config.blurring, 0.2);
        assert_eq!(config.tolerance, 1e-3);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            FilterConfig::load(Path::new("/nonexistent/filter.toml")),
            Err(FilterError::Io(_))
        ));
    }

    #[test]
    fn test_kernel_validates_blurring() {
        let config = FilterConfig {
            blurring: 2.0,
            ..Default::default()
        };
        assert!(matches!(
            config.kernel(),
            Err(FilterError::InvalidBlurFactor(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = FilterConfig::noisy();
        let toml_str = toml::to_string(&config).unwrap();
        let back = FilterConfig::from_toml(&toml_str).unwrap();
        assert_eq!(back.blurring, config.blurring);
        assert_eq!(back.tolerance, config.tolerance);
    }
}
