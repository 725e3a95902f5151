//! Envelope configuration with YAML schema and validation.
//!
//! The gaussian domain half-width and sampling resolution are explicit
//! configuration passed into the envelope and converter functions rather
//! than module-level constants, so the core stays testable with alternate
//! resolutions without hidden process-wide state.

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::OnionResult;

/// Configuration for the gaussian envelope that bounds the onion region.
///
/// The envelope is sampled over the symmetric domain `[-half_width,
/// half_width]`. The default half-width of 3.5 is chosen so the standard
/// normal density is visually negligible at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct EnvelopeConfig {
    /// Half-width `D` of the symmetric gaussian domain `[-D, D]`.
    #[serde(default = "default_half_width")]
    pub half_width: f64,

    /// Number of evenly spaced interior samples taken across the domain.
    /// The sampled envelope carries `resolution + 3` points: `resolution + 1`
    /// interior samples plus a zero-width point at each domain boundary.
    #[validate(range(min = 1))]
    #[serde(default = "default_resolution")]
    pub resolution: usize,
}

fn default_half_width() -> f64 {
    3.5
}

fn default_resolution() -> usize {
    100
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            half_width: default_half_width(),
            resolution: default_resolution(),
        }
    }
}

impl EnvelopeConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> OnionResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> OnionResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Validate schema constraints plus semantic constraints that the
    /// `Validate` derive cannot express.
    ///
    /// # Errors
    ///
    /// Returns a configuration error describing the first violated
    /// constraint.
    pub fn validate_all(&self) -> OnionResult<()> {
        self.validate()?;
        self.validate_semantic()
    }

    /// Validate semantic constraints beyond schema.
    fn validate_semantic(&self) -> OnionResult<()> {
        if !self.half_width.is_finite() {
            return Err(crate::error::OnionError::config(
                "half_width must be finite",
            ));
        }
        if self.half_width <= 0.0 {
            return Err(crate::error::OnionError::config(format!(
                "half_width must be positive, got {}",
                self.half_width
            )));
        }
        Ok(())
    }

    /// Full width of the gaussian domain, `2 * half_width`.
    #[must_use]
    pub fn domain_width(&self) -> f64 {
        2.0 * self.half_width
    }

    /// Spacing between consecutive interior samples.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.domain_width() / self.resolution as f64
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = EnvelopeConfig::default();
        assert!((config.half_width - 3.5).abs() < f64::EPSILON);
        assert_eq!(config.resolution, 100);
    }

    #[test]
    fn test_from_yaml() {
        let config = EnvelopeConfig::from_yaml("half_width: 2.0\nresolution: 50\n").unwrap();
        assert!((config.half_width - 2.0).abs() < f64::EPSILON);
        assert_eq!(config.resolution, 50);
    }

    #[test]
    fn test_from_yaml_defaults_apply() {
        let config = EnvelopeConfig::from_yaml("{}").unwrap();
        assert_eq!(config, EnvelopeConfig::default());
    }

    #[test]
    fn test_zero_resolution_rejected() {
        let result = EnvelopeConfig::from_yaml("resolution: 0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_half_width_rejected() {
        let result = EnvelopeConfig::from_yaml("half_width: -1.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_nan_half_width_rejected() {
        let config = EnvelopeConfig {
            half_width: f64::NAN,
            resolution: 10,
        };
        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result = EnvelopeConfig::from_yaml("half_width: 3.5\nsigma: 1.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_step() {
        let config = EnvelopeConfig {
            half_width: 3.5,
            resolution: 100,
        };
        assert!((config.step() - 0.07).abs() < 1e-12);
    }
}
