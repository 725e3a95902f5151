//! The gaussian envelope bounding the onion region.
//!
//! The outline is the standard normal density, drawn rotated 90° so it forms
//! a vertical spindle rather than a bell curve. Sampling is deterministic and
//! depends only on configuration, so the default-configuration sample set is
//! computed once per process and shared read-only across all renders.

use std::sync::OnceLock;

use crate::config::EnvelopeConfig;
use crate::error::OnionResult;
use crate::onion::Point;

/// Standard normal density, unscaled: `exp(-x²/2)`, peak value 1 at x=0.
#[must_use]
pub fn density(x: f64) -> f64 {
    (-(x * x) / 2.0).exp()
}

/// A sampled gaussian envelope.
///
/// Holds `resolution + 3` points ordered by increasing x: a zero-width point
/// at `(-D, 0)`, `resolution + 1` interior samples evenly spaced across
/// `[-D, D]` paired with their density values, and a zero-width point at
/// `(D, 0)` so the rendered shape closes at its extremes.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    config: EnvelopeConfig,
    samples: Vec<Point>,
}

impl Envelope {
    /// Sample the envelope for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `resolution` is zero or `half_width`
    /// is not a finite positive number.
    pub fn new(config: &EnvelopeConfig) -> OnionResult<Self> {
        config.validate_all()?;
        Ok(Self::sample(*config))
    }

    /// Sample an already-validated configuration.
    fn sample(config: EnvelopeConfig) -> Self {
        let d = config.half_width;
        let resolution = config.resolution as f64;

        let mut samples = Vec::with_capacity(config.resolution + 3);
        samples.push(Point::new(-d, 0.0));
        for i in 0..=config.resolution {
            // Exact at both endpoints. Accumulating a rounded step instead
            // can push the last interior sample past d, breaking the
            // increasing-x ordering against the appended boundary point.
            let x = d * (2.0 * i as f64 / resolution - 1.0);
            samples.push(Point::new(x, density(x)));
        }
        samples.push(Point::new(d, 0.0));

        Self { config, samples }
    }

    /// The envelope sampled with the default configuration, computed once
    /// per process. Read-only, safe to share across concurrent renders.
    #[must_use]
    pub fn shared() -> &'static Self {
        static SHARED: OnceLock<Envelope> = OnceLock::new();
        SHARED.get_or_init(|| Self::sample(EnvelopeConfig::default()))
    }

    /// The ordered sample points, boundary points included.
    #[must_use]
    pub fn samples(&self) -> &[Point] {
        &self.samples
    }

    /// The configuration this envelope was sampled with.
    #[must_use]
    pub const fn config(&self) -> &EnvelopeConfig {
        &self.config
    }

    /// Number of sample points, `resolution + 3`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false: every envelope carries at least its boundary points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
