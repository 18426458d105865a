//! RGBA drawing surface with source-over compositing

use crate::io::configuration::ANTIALIAS_SAMPLES;
use crate::palette::Color;
use crate::raster::coverage::CoverageMask;
use crate::raster::font::BitmapFont;
use crate::raster::shapes::{Ellipse, Point, Polygon, Rect, Region};
use image::{Rgba, RgbaImage};

/// Fixed-size raster that shapes are filled onto
///
/// Starts fully transparent. Every fill is composited over existing pixels
/// using straight (non-premultiplied) alpha.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
    samples: u32,
}

impl Canvas {
    /// Allocate a transparent canvas with anti-aliasing disabled
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            samples: 1,
        }
    }

    /// Toggle supersampled edge coverage for subsequent fills
    pub const fn set_antialias(&mut self, enabled: bool) {
        self.samples = if enabled { ANTIALIAS_SAMPLES } else { 1 };
    }

    /// Check whether fills are anti-aliased
    pub const fn antialias(&self) -> bool {
        self.samples > 1
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel color, or `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image.get_pixel_checked(x, y).map(|&p| Color::from(p))
    }

    /// Underlying image buffer
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Hand the buffer over, consuming the canvas
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Composite `color` over every pixel `region` covers
    pub fn fill_region(&mut self, region: &impl Region, color: Color) {
        let mask = CoverageMask::rasterize(region, self.width(), self.height(), self.samples);
        for (x, y, coverage) in mask.covered() {
            let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
                continue;
            };
            if let Some(pixel) = self.image.get_pixel_mut_checked(x, y) {
                blend(pixel, color, coverage);
            }
        }
    }

    /// Fill an axis-aligned rectangle
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fill_region(&rect, color);
    }

    /// Fill the ellipse inscribed in `frame`
    pub fn fill_ellipse(&mut self, frame: Rect, color: Color) {
        self.fill_region(&Ellipse::new(frame), color);
    }

    /// Fill a closed polygon through `vertices`
    pub fn fill_polygon(&mut self, vertices: &[Point], color: Color) {
        self.fill_region(&Polygon::new(vertices), color);
    }

    /// Draw `text` left to right with its baseline starting at `origin`
    pub fn draw_text(
        &mut self,
        font: &BitmapFont,
        text: &str,
        origin: Point,
        size: u32,
        color: Color,
    ) {
        self.fill_region(&font.layout(text, origin, size), color);
    }
}

// Straight-alpha source-over
fn blend(pixel: &mut Rgba<u8>, color: Color, coverage: f32) {
    let src_alpha = color.opacity() * coverage.clamp(0.0, 1.0);
    if src_alpha <= 0.0 {
        return;
    }

    let [dr, dg, db, da] = pixel.0;
    let dst_alpha = f32::from(da) / 255.0;
    let out_alpha = dst_alpha.mul_add(1.0 - src_alpha, src_alpha);
    if out_alpha <= 0.0 {
        *pixel = Rgba([0, 0, 0, 0]);
        return;
    }

    let mix = |src: u8, dst: u8| {
        let value = f32::from(src)
            .mul_add(src_alpha, f32::from(dst) * dst_alpha * (1.0 - src_alpha))
            / out_alpha;
        value.round().clamp(0.0, 255.0) as u8
    };

    *pixel = Rgba([
        mix(color.r, dr),
        mix(color.g, dg),
        mix(color.b, db),
        (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8,
    ]);
}
