//! # onionviz
//!
//! Visualization core for population-based and trajectory-based optimization
//! runs (OneMax, LeadingOnes, TSP solved by (1+1)-EA, Simulated Annealing,
//! Ant Colony Optimization).
//!
//! The centerpiece is the **onion coordinate projection**: a deterministic
//! geometric transform that places an arbitrary binary genotype at a unique
//! position inside a bounded, teardrop-shaped region whose outline is derived
//! from the standard normal density. Three coordinate spaces are involved:
//!
//! - **bitstring space**: the genotype itself;
//! - **percentage space**: normalized `[0,1]×[0,1]` coordinates;
//! - **view space**: `[0,100]×[0,100]` pixel-equivalent coordinates with the
//!   vertical axis flipped (y=0 at the top).
//!
//! # Example
//!
//! ```rust
//! use onionviz::prelude::*;
//!
//! let bits: Bitstring = "1100".parse().unwrap();
//! let point = project(&bits, Some("iteration 42".to_string()));
//! assert_eq!(point.y, 0.5);
//!
//! let view = percentage_to_view(&point, &EnvelopeConfig::default());
//! assert!(view.y >= 0.0 && view.y <= 100.0);
//! ```
//!
//! Every function in the crate is pure: no I/O outside [`export`], no shared
//! mutable state, and the only cached data is the read-only envelope sample
//! set behind [`onion::Envelope::shared`].

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::suboptimal_flops,  // Numerical code choices are intentional
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
    clippy::needless_range_loop    // Sometimes range loops are clearer
)]

pub mod config;
pub mod error;
pub mod export;
pub mod onion;
pub mod task;
pub mod tsp;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::EnvelopeConfig;
    pub use crate::error::{OnionError, OnionResult};
    pub use crate::onion::convert::{envelope_to_view, percentage_to_view};
    pub use crate::onion::path::envelope_path;
    pub use crate::onion::project::{project, Bitstring};
    pub use crate::onion::{Envelope, OnionPoint, Point};
    pub use crate::task::{Algorithm, CoolingSchedule, Problem, Task};
}

/// Re-export for public API
pub use error::{OnionError, OnionResult};
