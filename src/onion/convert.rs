//! Pure converters between the three coordinate spaces.
//!
//! Both functions are stateless; the envelope configuration is passed
//! explicitly so alternate domains and resolutions can be exercised without
//! hidden globals.

use crate::config::EnvelopeConfig;
use crate::onion::envelope::density;
use crate::onion::{OnionPoint, Point};

/// Map an envelope sample from gaussian coordinate space to view space.
///
/// The envelope is drawn rotated 90° relative to its natural density-curve
/// orientation, so the *input's* fields arrive pre-swapped by the caller:
/// `p.x` carries the density value (a half-width fraction in `[0, 1]`) and
/// `p.y` carries the gaussian-domain position in `[-D, D]`.
///
/// Horizontal: `50 − p.x·50` maps the half-width fraction to a pixel offset
/// from the centerline at 50; calling once with unmodified density and once
/// with negated density yields the two mirrored halves of the outline.
/// Vertical: `[-D, D]` rescales to `[0, 100]` with inverted direction, so the
/// gaussian-domain maximum lands at the top of the view.
#[must_use]
pub fn envelope_to_view(p: Point, config: &EnvelopeConfig) -> Point {
    let d = config.half_width;
    let x = 50.0 - p.x * 50.0;
    let y = 100.0 - ((p.y + d) / (2.0 * d)) * 100.0;
    Point::new(x, y)
}

/// Map a percentage-space point `{x: [0,1], y: [0,1]}` to view coordinates,
/// constraining the horizontal position to the envelope width at that height.
///
/// The vertical percentage directly parameterizes position along the
/// gaussian domain; the density there gives the local half-width, and the
/// signed offset `(p.x − 0.5)·width` places `p.x = 0.5` on the centerline
/// with `p.x ∈ {0, 1}` touching the envelope boundary. The tooltip passes
/// through untouched.
#[must_use]
pub fn percentage_to_view(p: &OnionPoint, config: &EnvelopeConfig) -> OnionPoint {
    let d = config.half_width;

    // Gaussian value at the given vertical percentage.
    let gauss_x = 2.0f64.mul_add(d * p.y, -d);
    let gauss_y = density(gauss_x);

    // Map y percentage to [0, 100] and flip direction.
    let py = 100.0 - p.y * 100.0;

    // Signed distance from the centerline, in gaussian coordinate space,
    // then mapped to view space.
    let x_distance = (p.x - 0.5) * gauss_y;
    let px = 100.0f64.mul_add(-x_distance, 50.0);

    OnionPoint::new(px, py, p.tooltip.clone())
}
