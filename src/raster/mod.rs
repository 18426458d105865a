//! Software rasterization: shapes, coverage masks, text and the canvas

/// Drawing surface with alpha compositing
pub mod canvas;
/// Supersampled coverage masks backed by `ndarray`
pub mod coverage;
/// Built-in bitmap font for initials
pub mod font;
/// Points, rectangles, ellipses and polygons
pub mod shapes;

pub use canvas::Canvas;
pub use font::{BOLD_MONO, BitmapFont, TextMetrics};
pub use shapes::{Ellipse, Point, Polygon, Rect, Region};
