//! Renderable outline path for the envelope.
//!
//! Emits the `M x y` / `L x y` token stream the rendering surface consumes:
//! one move-to followed by line-tos per half, left half first, the two
//! sub-paths separated by a single space. Closing the halves into a loop is
//! a rendering-layer concern.

use std::fmt::Write;

use crate::onion::convert::envelope_to_view;
use crate::onion::{Envelope, Point};

/// Build the two-sided outline path for a sampled envelope.
///
/// Each sample `(x, density)` is drawn rotated: the density becomes the
/// horizontal half-width fraction and the domain position becomes the
/// vertical driver. The left half uses the density as-is, the right half
/// negates it to mirror across the vertical centerline.
#[must_use]
pub fn envelope_path(env: &Envelope) -> String {
    let config = env.config();
    let mut path = String::new();

    for (i, sample) in env.samples().iter().enumerate() {
        let p = envelope_to_view(Point::new(sample.y, sample.x), config);
        let command = if i == 0 { "M" } else { " L" };
        let _ = write!(path, "{command} {} {}", p.x, p.y);
    }

    path.push(' ');

    for (i, sample) in env.samples().iter().enumerate() {
        let p = envelope_to_view(Point::new(-sample.y, sample.x), config);
        let command = if i == 0 { "M" } else { " L" };
        let _ = write!(path, "{command} {} {}", p.x, p.y);
    }

    path
}
