//! The onion coordinate projection.
//!
//! Places binary genotypes inside a teardrop-shaped region bounded by a
//! gaussian-derived envelope. Three coordinate spaces are involved:
//!
//! - **gaussian domain**: the horizontal axis `[-D, D]` over which the
//!   envelope density is evaluated;
//! - **percentage space**: normalized `[0,1]×[0,1]`, independent of pixel
//!   dimensions;
//! - **view space**: `[0,100]×[0,100]` with y=0 at the top of the drawable
//!   region.
//!
//! A [`Point`] does not encode which space it belongs to; callers track that
//! through the function they obtained it from.
//!
//! # Pipelines
//!
//! A raw bitstring enters [`project::project`], which emits a
//! percentage-space [`OnionPoint`]; [`convert::percentage_to_view`] turns it
//! into final view coordinates for plotting. Independently, an [`Envelope`]
//! is sampled once and [`path::envelope_path`] renders it as a two-sided
//! outline path. The two pipelines share no mutable state.

use serde::{Deserialize, Serialize};

pub mod convert;
pub mod envelope;
pub mod path;
pub mod project;

pub use envelope::{density, Envelope};

/// A coordinate pair in one of the three unit systems.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A plotted genotype: a [`Point`] carrying an optional opaque tooltip label.
///
/// The tooltip is free-form text, never interpreted by the core; it rides
/// along through the converters so the rendering surface can show it on
/// hover.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OnionPoint {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Opaque label passed through to the rendering surface.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

impl OnionPoint {
    /// Create a new labeled point.
    #[must_use]
    pub const fn new(x: f64, y: f64, tooltip: Option<String>) -> Self {
        Self { x, y, tooltip }
    }

    /// The bare coordinates, dropping the label.
    #[must_use]
    pub const fn point(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }
}

impl From<Point> for OnionPoint {
    fn from(p: Point) -> Self {
        Self {
            x: p.x,
            y: p.y,
            tooltip: None,
        }
    }
}
