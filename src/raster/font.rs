//! Built-in bold monospace bitmap font for uppercase initials
//!
//! Glyphs are 5x7 cells stored one row per byte (low five bits, most
//! significant column first). Text is scaled by whole pixels so stroke edges
//! stay on the pixel grid, then emboldened by widening each stroke.

use crate::raster::shapes::{Bounds, Point, Region};
use bitvec::prelude::*;

const CELL_WIDTH: i32 = 5;
const CELL_HEIGHT: i32 = 7;
// Blank columns between glyph cells
const SPACING: i32 = 1;
// Leading unused bits in each glyph row byte
const ROW_PADDING: usize = 8 - CELL_WIDTH as usize;

#[rustfmt::skip]
const UPPERCASE: [[u8; 7]; 26] = [
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
    [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C], // D
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // G
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // L
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // P
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // Q
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // R
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // S
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A], // W
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04], // Y
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
];

/// Measured extent of a run of text at a given size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMetrics {
    /// Pixels per glyph cell unit
    pub scale: i32,
    /// Horizontal distance between consecutive glyph origins
    pub advance: i32,
    /// Ink width of the whole run
    pub width: i32,
    /// Height above the baseline (cap height)
    pub ascent: i32,
    /// Extra stroke width added to the right of every lit column
    pub embolden: i32,
}

/// Fixed-width bitmap font
#[derive(Debug, Clone, Copy)]
pub struct BitmapFont {
    glyphs: &'static [[u8; 7]; 26],
    // Cap height as a fraction of point size
    cap_height_ratio: f64,
    bold: bool,
}

/// Bold monospace face used for initials
pub const BOLD_MONO: BitmapFont = BitmapFont {
    glyphs: &UPPERCASE,
    cap_height_ratio: 0.7,
    bold: true,
};

impl BitmapFont {
    /// Whole-pixel scale that renders the cap height closest to `size * ratio`
    pub fn scale_for(&self, size: u32) -> i32 {
        let cap_height = f64::from(size) * self.cap_height_ratio;
        (cap_height / f64::from(CELL_HEIGHT)).round().max(1.0) as i32
    }

    /// Measure `text` at point size `size`
    pub fn metrics(&self, text: &str, size: u32) -> TextMetrics {
        let scale = self.scale_for(size);
        let advance = (CELL_WIDTH + SPACING) * scale;
        let embolden = if self.bold { scale / 2 } else { 0 };
        let count = text.chars().count() as i32;

        let width = if count == 0 {
            0
        } else {
            count * advance - SPACING * scale + embolden
        };

        TextMetrics {
            scale,
            advance,
            width,
            ascent: CELL_HEIGHT * scale,
            embolden,
        }
    }

    /// Glyph rows for `ch`, if the font defines it
    pub fn glyph(&self, ch: char) -> Option<&[u8; 7]> {
        if !ch.is_ascii_uppercase() {
            return None;
        }
        self.glyphs.get(usize::from(ch as u8 - b'A'))
    }

    /// Test a single cell of `ch`; out-of-range cells are unlit
    pub fn is_lit(&self, ch: char, col: i32, row: i32) -> bool {
        let (Ok(col), Ok(row)) = (usize::try_from(col), usize::try_from(row)) else {
            return false;
        };
        if col >= CELL_WIDTH as usize {
            return false;
        }
        self.glyph(ch)
            .and_then(|rows| rows.get(row))
            .is_some_and(|bits| {
                bits.view_bits::<Msb0>().get(ROW_PADDING + col).as_deref() == Some(&true)
            })
    }

    /// Lay out `text` with its baseline starting at `origin`
    pub fn layout<'a>(&'a self, text: &str, origin: Point, size: u32) -> TextRegion<'a> {
        let metrics = self.metrics(text, size);
        TextRegion {
            font: self,
            chars: text.chars().collect(),
            left: origin.x,
            top: origin.y - metrics.ascent,
            metrics,
        }
    }
}

/// Positioned text that can be filled like any other region
#[derive(Debug, Clone)]
pub struct TextRegion<'a> {
    font: &'a BitmapFont,
    chars: Vec<char>,
    left: i32,
    top: i32,
    metrics: TextMetrics,
}

impl TextRegion<'_> {
    /// Measurements the layout was built from
    pub const fn metrics(&self) -> TextMetrics {
        self.metrics
    }

    fn lit_at(&self, ch: char, cell_x: i32, row: i32) -> bool {
        let scale = self.metrics.scale;
        if self.font.is_lit(ch, cell_x / scale, row) {
            return true;
        }
        let shifted = cell_x - self.metrics.embolden;
        self.metrics.embolden > 0 && shifted >= 0 && self.font.is_lit(ch, shifted / scale, row)
    }
}

impl Region for TextRegion<'_> {
    fn bounds(&self) -> Bounds {
        Bounds {
            min_x: f64::from(self.left),
            min_y: f64::from(self.top),
            max_x: f64::from(self.left + self.metrics.width),
            max_y: f64::from(self.top + self.metrics.ascent),
        }
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        let dx = (x - f64::from(self.left)).floor();
        let dy = (y - f64::from(self.top)).floor();
        if dx < 0.0 || dy < 0.0 {
            return false;
        }
        let (dx, dy) = (dx as i32, dy as i32);
        if dx >= self.metrics.width || dy >= self.metrics.ascent {
            return false;
        }

        let index = dx / self.metrics.advance;
        let cell_x = dx % self.metrics.advance;
        let row = dy / self.metrics.scale;

        let Some(&ch) = self.chars.get(index as usize) else {
            return false;
        };
        self.lit_at(ch, cell_x, row)
    }
}
