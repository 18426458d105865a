//! Procedural composition of the avatar layers

/// Tiled motif background
pub mod pattern;
/// Ordered draw list construction and rendering
pub mod pipeline;
/// Body, shadow, head and initials placement
pub mod silhouette;

pub use pipeline::{AvatarConfig, Composition, DrawOp, Layer, Shape, compose, generate};
