//! Build-time generation constants and output settings

// Canvas is always square
/// Width and height of the generated avatar in pixels
pub const CANVAS_SIZE: i32 = 227;

/// Smallest sampled motif height
pub const LOGO_HEIGHT_MIN: i32 = 45;
/// Largest sampled motif height
pub const LOGO_HEIGHT_MAX: i32 = 60;

/// Motif width as a multiple of its height
pub const MOTIF_ASPECT: f64 = 1.5;

/// Smallest sampled body width
pub const BODY_WIDTH_MIN: i32 = 125;
/// Largest sampled body width
pub const BODY_WIDTH_MAX: i32 = 160;
/// Smallest sampled body height
pub const BODY_HEIGHT_MIN: i32 = 200;
/// Largest sampled body height
pub const BODY_HEIGHT_MAX: i32 = 250;

/// Smallest sampled head diameter
pub const HEAD_SIZE_MIN: i32 = 100;
/// Largest sampled head diameter
pub const HEAD_SIZE_MAX: i32 = 115;

/// Shadow width as a fraction of body width
pub const SHADOW_WIDTH_RATIO: f64 = 0.45;
/// Fraction of the shadow height lifted above the chin line
pub const SHADOW_LIFT_RATIO: f64 = 0.65;
/// Rightward shadow offset from body center in pixels
pub const SHADOW_X_BIAS: i32 = 5;

/// Point size of the initials font
pub const INITIALS_FONT_SIZE: u32 = 70;
// Balances cap height against the full glyph box
/// Upward baseline nudge for initials in pixels
pub const INITIALS_BASELINE_NUDGE: i32 = 5;

/// Coverage samples per pixel axis when anti-aliasing is enabled
pub const ANTIALIAS_SAMPLES: u32 = 4;

// Optional layers
/// Draw the tiled motif background instead of a flat fill
pub const DRAW_PATTERN: bool = true;
/// Draw the darkened shadow under the head
pub const DRAW_SHADOW: bool = true;
/// Draw random initials across the body
pub const DRAW_INITIALS: bool = true;

// Output settings
/// Fixed output filename written to the working directory
pub const OUTPUT_FILE: &str = "composite.png";
