//! Placement of the foreground figure: body, shadow, head and initials
//!
//! Everything is positioned from the canvas center line and the canvas
//! bottom. The body ellipse is anchored half below the bottom edge, so only
//! its upper half is ever visible.

use crate::io::configuration::{
    INITIALS_BASELINE_NUDGE, SHADOW_LIFT_RATIO, SHADOW_WIDTH_RATIO, SHADOW_X_BIAS,
};
use crate::palette::DimensionRange;
use crate::raster::{BitmapFont, Point, Rect, TextMetrics};
use rand::Rng;

/// Sampled sizes of the figure for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SilhouetteDimensions {
    /// Body ellipse width
    pub body_width: i32,
    /// Body ellipse height
    pub body_height: i32,
    /// Head diameter
    pub head_size: i32,
}

impl SilhouetteDimensions {
    /// Draw body width, body height and head size in that order
    pub fn sample<R: Rng + ?Sized>(
        rng: &mut R,
        body_width: DimensionRange,
        body_height: DimensionRange,
        head_size: DimensionRange,
    ) -> Self {
        Self {
            body_width: body_width.sample(rng),
            body_height: body_height.sample(rng),
            head_size: head_size.sample(rng),
        }
    }
}

/// Text and baseline position of the initials layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Initials {
    /// Two uppercase letters
    pub text: String,
    /// Left end of the baseline
    pub origin: Point,
    /// Font point size
    pub size: u32,
}

/// Resolved geometry of the figure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SilhouetteLayout {
    /// Frame of the body ellipse
    pub body: Rect,
    /// Frame of the shadow ellipse, when that layer is enabled
    pub shadow: Option<Rect>,
    /// Frame of the head circle
    pub head: Rect,
    /// Initials, when that layer is enabled
    pub initials: Option<Initials>,
}

impl SilhouetteLayout {
    /// Position every enabled piece of the figure
    pub fn place(
        canvas_width: i32,
        canvas_height: i32,
        dimensions: SilhouetteDimensions,
        with_shadow: bool,
        initials: Option<(String, &BitmapFont, u32)>,
    ) -> Self {
        let body = body_frame(
            canvas_width,
            canvas_height,
            dimensions.body_width,
            dimensions.body_height,
        );
        let head = head_frame(
            canvas_width,
            canvas_height,
            dimensions.body_height,
            dimensions.head_size,
        );
        let shadow = with_shadow.then(|| shadow_frame(body, head));

        let initials = initials.map(|(text, font, size)| {
            let metrics = font.metrics(&text, size);
            Initials {
                origin: initials_origin(canvas_width, canvas_height, head, metrics),
                text,
                size,
            }
        });

        Self {
            body,
            shadow,
            head,
            initials,
        }
    }
}

/// Body frame: centered horizontally, top at `canvas_height - height/2`
pub const fn body_frame(canvas_width: i32, canvas_height: i32, width: i32, height: i32) -> Rect {
    Rect::new(
        canvas_width / 2 - width / 2,
        canvas_height - height / 2,
        width,
        height,
    )
}

/// Head frame: centered horizontally, raised three quarters of its size
/// above the body's top edge
pub const fn head_frame(
    canvas_width: i32,
    canvas_height: i32,
    body_height: i32,
    head_size: i32,
) -> Rect {
    Rect::new(
        canvas_width / 2 - head_size / 2,
        canvas_height - body_height / 2 - head_size / 4 * 3,
        head_size,
        head_size,
    )
}

/// Shadow frame: a flat ellipse straddling the chin line, nudged right of center
pub fn shadow_frame(body: Rect, head: Rect) -> Rect {
    let width = (f64::from(body.width) * SHADOW_WIDTH_RATIO) as i32;
    let height = head.height / 4;
    let lift = (f64::from(height) * SHADOW_LIFT_RATIO) as i32;

    Rect::new(
        (body.width - width) / 2 + body.x + SHADOW_X_BIAS,
        head.bottom() - lift,
        width,
        height,
    )
}

/// Baseline origin centering text in the band between the chin and the
/// canvas bottom
pub const fn initials_origin(
    canvas_width: i32,
    canvas_height: i32,
    head: Rect,
    metrics: TextMetrics,
) -> Point {
    let chin = head.bottom();
    Point::new(
        canvas_width / 2 - metrics.width / 2,
        chin + (canvas_height - chin) / 2 + metrics.ascent / 2 - INITIALS_BASELINE_NUDGE,
    )
}
