//! Procedural identicon-style avatars: a tiled two-triangle motif background
//! overlaid with a randomly colored silhouette
//!
//! All randomness is threaded explicitly from a seedable source, so any
//! avatar can be reproduced from its seed.

#![forbid(unsafe_code)]

/// Pattern tiling, silhouette placement and the draw pipeline
pub mod composition;
/// Input/output operations and error handling
pub mod io;
/// Colors and random selection primitives
pub mod palette;
/// Software rasterizer for shapes and text
pub mod raster;

pub use composition::{AvatarConfig, generate};
pub use io::error::{AvatarError, Result};
