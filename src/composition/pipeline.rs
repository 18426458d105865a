//! Forward pipeline from a random source to a rendered avatar
//!
//! Generation happens in two phases. [`compose`] consumes randomness and
//! resolves every color and coordinate into an ordered list of draw
//! operations; [`Composition::render`] replays that list onto a fresh canvas.
//! Operation order is significant: later layers occlude earlier ones (the
//! head hides the top of the shadow, the initials sit on the body).

use crate::composition::pattern::PatternLayout;
use crate::composition::silhouette::{SilhouetteDimensions, SilhouetteLayout};
use crate::io::configuration::{
    BODY_HEIGHT_MAX, BODY_HEIGHT_MIN, BODY_WIDTH_MAX, BODY_WIDTH_MIN, CANVAS_SIZE, DRAW_INITIALS,
    DRAW_PATTERN, DRAW_SHADOW, HEAD_SIZE_MAX, HEAD_SIZE_MIN, INITIALS_FONT_SIZE, LOGO_HEIGHT_MAX,
    LOGO_HEIGHT_MIN, MOTIF_ASPECT,
};
use crate::io::error::{Result, invalid_parameter};
use crate::palette::color::{COAL, COTTON};
use crate::palette::selection::random_initials;
use crate::palette::{Color, ColorScheme, DimensionRange, Palette};
use crate::raster::{BOLD_MONO, Canvas, Point, Rect};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generation parameters, fixed for the lifetime of a process
#[derive(Debug, Clone, PartialEq)]
// Each optional layer has its own toggle
#[allow(clippy::struct_excessive_bools)]
pub struct AvatarConfig {
    /// Width and height of the square canvas
    pub canvas_size: i32,
    /// Motif height bounds
    pub logo_height: DimensionRange,
    /// Motif width as a multiple of its height
    pub motif_aspect: f64,
    /// Body ellipse width bounds
    pub body_width: DimensionRange,
    /// Body ellipse height bounds
    pub body_height: DimensionRange,
    /// Head diameter bounds
    pub head_size: DimensionRange,
    /// Tile the motif pattern instead of filling flat
    pub draw_pattern: bool,
    /// Draw the shadow under the head
    pub draw_shadow: bool,
    /// Draw random initials on the body
    pub draw_initials: bool,
    /// Point size of the initials
    pub initials_font_size: u32,
    /// Supersample shape edges
    pub antialias: bool,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,
            logo_height: DimensionRange::new(LOGO_HEIGHT_MIN, LOGO_HEIGHT_MAX),
            motif_aspect: MOTIF_ASPECT,
            body_width: DimensionRange::new(BODY_WIDTH_MIN, BODY_WIDTH_MAX),
            body_height: DimensionRange::new(BODY_HEIGHT_MIN, BODY_HEIGHT_MAX),
            head_size: DimensionRange::new(HEAD_SIZE_MIN, HEAD_SIZE_MAX),
            draw_pattern: DRAW_PATTERN,
            draw_shadow: DRAW_SHADOW,
            draw_initials: DRAW_INITIALS,
            initials_font_size: INITIALS_FONT_SIZE,
            antialias: true,
        }
    }
}

impl AvatarConfig {
    /// Check every bound once, before any sampling happens
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The canvas is empty
    /// - Any range is inverted or not strictly positive
    /// - The motif aspect is not a positive finite number
    /// - The body or head cannot fit across the canvas
    /// - The initials font size is zero
    pub fn validate(&self) -> Result<()> {
        if self.canvas_size < 1 {
            return Err(invalid_parameter(
                "canvas_size",
                &self.canvas_size,
                &"canvas must be at least one pixel",
            ));
        }

        self.logo_height.validate("logo_height")?;
        self.body_width.validate("body_width")?;
        self.body_height.validate("body_height")?;
        self.head_size.validate("head_size")?;

        if !self.motif_aspect.is_finite() || self.motif_aspect <= 0.0 {
            return Err(invalid_parameter(
                "motif_aspect",
                &self.motif_aspect,
                &"must be a positive finite number",
            ));
        }
        if PatternLayout::motif_width_for(self.logo_height.min, self.motif_aspect) < 1 {
            return Err(invalid_parameter(
                "logo_height",
                &self.logo_height.min,
                &"derived motif width is zero",
            ));
        }

        if self.body_width.max > self.canvas_size {
            return Err(invalid_parameter(
                "body_width",
                &self.body_width.max,
                &"body is wider than the canvas",
            ));
        }
        if self.body_height.max / 2 > self.canvas_size {
            return Err(invalid_parameter(
                "body_height",
                &self.body_height.max,
                &"visible half of the body is taller than the canvas",
            ));
        }
        if self.head_size.max > self.canvas_size {
            return Err(invalid_parameter(
                "head_size",
                &self.head_size.max,
                &"head is wider than the canvas",
            ));
        }

        if self.draw_initials && self.initials_font_size == 0 {
            return Err(invalid_parameter(
                "initials_font_size",
                &self.initials_font_size,
                &"font size must be positive",
            ));
        }
        Ok(())
    }
}

/// Stacking layer a draw operation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Flat full-canvas fill
    Background,
    /// One half of a tiled motif
    Motif,
    /// Translucent wash dimming the pattern
    Overlay,
    /// Body ellipse
    Body,
    /// Darkened ellipse under the head
    Shadow,
    /// Neutral head circle
    Head,
    /// Initials text
    Initials,
}

/// Geometry of a single fill
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// Axis-aligned rectangle
    Rect(Rect),
    /// Ellipse inscribed in the given frame
    Ellipse(Rect),
    /// Closed polygon
    Polygon(Vec<Point>),
    /// Left-to-right text in the bold monospace font
    Text {
        /// Characters to draw
        text: String,
        /// Left end of the baseline
        origin: Point,
        /// Point size
        size: u32,
    },
}

/// One filled shape in the ordered draw list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOp {
    /// Layer the shape belongs to
    pub layer: Layer,
    /// What to fill
    pub shape: Shape,
    /// Fill color
    pub color: Color,
}

/// Fully resolved avatar, ready to rasterize
#[derive(Debug, Clone)]
pub struct Composition {
    /// Width and height of the target canvas
    pub canvas_size: i32,
    /// Whether rendering supersamples edges
    pub antialias: bool,
    /// Colors chosen for the run
    pub scheme: ColorScheme,
    /// Pattern parameters, absent for flat backgrounds
    pub pattern: Option<PatternLayout>,
    /// Figure geometry
    pub silhouette: SilhouetteLayout,
    /// Draw list in painting order
    pub operations: Vec<DrawOp>,
}

impl Composition {
    /// Operations belonging to `layer`, in painting order
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &DrawOp> + '_ {
        self.operations.iter().filter(move |op| op.layer == layer)
    }

    /// Replay the draw list onto a new canvas
    pub fn render(&self) -> Canvas {
        let size = u32::try_from(self.canvas_size).unwrap_or(0);
        let mut canvas = Canvas::new(size, size);
        canvas.set_antialias(self.antialias);

        for op in &self.operations {
            log::trace!("Drawing {:?} {:?}", op.layer, op.shape);
            match &op.shape {
                Shape::Rect(rect) => canvas.fill_rect(*rect, op.color),
                Shape::Ellipse(frame) => canvas.fill_ellipse(*frame, op.color),
                Shape::Polygon(vertices) => canvas.fill_polygon(vertices, op.color),
                Shape::Text {
                    text,
                    origin,
                    size: point_size,
                } => {
                    canvas.draw_text(&BOLD_MONO, text, *origin, *point_size, op.color);
                }
            }
        }
        canvas
    }
}

/// Resolve colors, pattern and figure for one avatar
///
/// Randomness is consumed in a fixed order (scheme, pattern, figure,
/// initials), so a seeded source always yields the same composition.
pub fn compose<R: Rng + ?Sized>(
    config: &AvatarConfig,
    palette: &Palette,
    rng: &mut R,
) -> Composition {
    let size = config.canvas_size;
    let scheme = ColorScheme::select(palette, rng, config.draw_pattern);
    log::debug!("Color scheme: {scheme:?}");

    let pattern = config.draw_pattern.then(|| {
        PatternLayout::sample(rng, config.logo_height, config.motif_aspect, scheme.pattern)
    });
    if let Some(layout) = &pattern {
        log::debug!(
            "Motif {}x{} offset ({}, {})",
            layout.motif_width,
            layout.motif_height,
            layout.offset_x,
            layout.offset_y
        );
    }

    let dimensions =
        SilhouetteDimensions::sample(rng, config.body_width, config.body_height, config.head_size);
    let initials = config
        .draw_initials
        .then(|| (random_initials(rng), &BOLD_MONO, config.initials_font_size));
    let silhouette = SilhouetteLayout::place(size, size, dimensions, config.draw_shadow, initials);
    log::debug!("Silhouette: {silhouette:?}");

    let operations = draw_list(size, &scheme, pattern.as_ref(), &silhouette);

    Composition {
        canvas_size: size,
        antialias: config.antialias,
        scheme,
        pattern,
        silhouette,
        operations,
    }
}

fn draw_list(
    size: i32,
    scheme: &ColorScheme,
    pattern: Option<&PatternLayout>,
    silhouette: &SilhouetteLayout,
) -> Vec<DrawOp> {
    let full = Rect::new(0, 0, size, size);
    let mut operations = vec![DrawOp {
        layer: Layer::Background,
        shape: Shape::Rect(full),
        color: scheme.background,
    }];

    if let Some(layout) = pattern {
        for motif in layout.motifs(size, size) {
            operations.push(DrawOp {
                layer: Layer::Motif,
                shape: Shape::Polygon(motif.left_half().to_vec()),
                color: motif.colors.left,
            });
            operations.push(DrawOp {
                layer: Layer::Motif,
                shape: Shape::Polygon(motif.right_half().to_vec()),
                color: motif.colors.right,
            });
        }
        operations.push(DrawOp {
            layer: Layer::Overlay,
            shape: Shape::Rect(full),
            color: COAL,
        });
    }

    operations.push(DrawOp {
        layer: Layer::Body,
        shape: Shape::Ellipse(silhouette.body),
        color: scheme.body,
    });

    if let Some(shadow) = silhouette.shadow {
        operations.push(DrawOp {
            layer: Layer::Shadow,
            shape: Shape::Ellipse(shadow),
            color: scheme.shadow(),
        });
    }

    operations.push(DrawOp {
        layer: Layer::Head,
        shape: Shape::Ellipse(silhouette.head),
        color: COTTON,
    });

    if let Some(initials) = &silhouette.initials {
        operations.push(DrawOp {
            layer: Layer::Initials,
            shape: Shape::Text {
                text: initials.text.clone(),
                origin: initials.origin,
                size: initials.size,
            },
            color: COTTON,
        });
    }

    operations
}

/// Compose and render an avatar from a seed
///
/// Identical seeds and configurations always produce identical pixels.
pub fn generate(config: &AvatarConfig, seed: u64) -> Canvas {
    let mut rng = StdRng::seed_from_u64(seed);
    compose(config, &Palette::accents(), &mut rng).render()
}
