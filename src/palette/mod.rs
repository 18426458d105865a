//! Color definitions and random color selection

/// RGBA color type and the fixed accent and neutral palette
pub mod color;
/// Per-run color scheme with exclusion chaining
pub mod scheme;
/// Exclusion sampling and inclusive range primitives
pub mod selection;

pub use color::Color;
pub use scheme::ColorScheme;
pub use selection::{DimensionRange, Palette};
