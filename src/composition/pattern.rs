//! Brick-offset tiling of the two-triangle motif
//!
//! Rows advance downward by the motif height and alternate between two
//! coloring modes; within a row, motifs advance rightward by the motif width
//! and alternate between two colorings. Odd rows start half a motif further
//! left, so the tiling reads as staggered chevrons rather than a grid.

use crate::palette::Color;
use crate::palette::color::{SEATTLE, STONE};
use crate::palette::selection::{DimensionRange, random_in_range};
use crate::raster::Point;
use rand::Rng;

/// Fill colors for the two halves of a motif
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotifColors {
    /// Left quadrilateral
    pub left: Color,
    /// Right quadrilateral
    pub right: Color,
}

/// One placed motif: two quadrilaterals sharing the vertical line `x + width/2`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motif {
    /// Anchor x (left tip)
    pub x: i32,
    /// Anchor y (left tip)
    pub y: i32,
    /// Horizontal extent
    pub width: i32,
    /// Vertical extent
    pub height: i32,
    /// Half colors
    pub colors: MotifColors,
}

impl Motif {
    /// Vertices of the left half, rising from the anchor to the midline
    pub const fn left_half(&self) -> [Point; 4] {
        let (hw, hh) = (self.width / 2, self.height / 2);
        [
            Point::new(self.x, self.y),
            Point::new(self.x + hw, self.y - hh),
            Point::new(self.x + hw, self.y),
            Point::new(self.x, self.y + hh),
        ]
    }

    /// Vertices of the right half, mirroring the left out to `x + width`
    pub const fn right_half(&self) -> [Point; 4] {
        let (hw, hh) = (self.width / 2, self.height / 2);
        [
            Point::new(self.x + hw, self.y - hh),
            Point::new(self.x + self.width, self.y),
            Point::new(self.x + self.width, self.y + hh),
            Point::new(self.x + hw, self.y),
        ]
    }
}

/// Run-constant parameters of the tiled background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternLayout {
    /// Motif width, derived from the height
    pub motif_width: i32,
    /// Motif height, sampled once per run
    pub motif_height: i32,
    /// Horizontal start of even rows (never positive)
    pub offset_x: i32,
    /// Vertical offset of the first row (never positive)
    pub offset_y: i32,
    /// Accent the motif colorings are derived from
    pub accent: Color,
}

impl PatternLayout {
    /// Width of a motif whose height is `height`
    pub fn motif_width_for(height: i32, aspect: f64) -> i32 {
        (f64::from(height) * aspect) as i32
    }

    /// Sample the motif extent and starting offsets for a run
    ///
    /// Offsets are drawn from `[extent/16, extent/2]` and negated, so the
    /// pattern always bleeds past the top-left corner.
    pub fn sample<R: Rng + ?Sized>(
        rng: &mut R,
        height_range: DimensionRange,
        aspect: f64,
        accent: Color,
    ) -> Self {
        let motif_height = height_range.sample(rng);
        let motif_width = Self::motif_width_for(motif_height, aspect);
        let offset_x = -random_in_range(rng, motif_width / 16, motif_width / 2);
        let offset_y = -random_in_range(rng, motif_height / 16, motif_height / 2);

        Self {
            motif_width,
            motif_height,
            offset_x,
            offset_y,
            accent,
        }
    }

    /// Anchor y of the first row
    pub const fn start_y(&self) -> i32 {
        self.offset_y + self.motif_height / 2
    }

    /// Anchor x of the first motif in row `row_index`
    pub const fn row_start_x(&self, row_index: usize) -> i32 {
        if row_index.is_multiple_of(2) {
            self.offset_x
        } else {
            self.offset_x - self.motif_width / 2
        }
    }

    /// Anchor y of every row that reaches into the canvas
    pub fn rows(&self, canvas_height: i32) -> Vec<i32> {
        row_positions(self.start_y(), self.motif_height, canvas_height)
    }

    /// Every motif needed to cover a `canvas_width x canvas_height` canvas,
    /// in drawing order
    pub fn motifs(&self, canvas_width: i32, canvas_height: i32) -> Vec<Motif> {
        let mut motifs = Vec::new();
        for (row_index, y) in self.rows(canvas_height).into_iter().enumerate() {
            let [even, odd] = row_colorings(row_index, self.accent);
            let start_x = self.row_start_x(row_index);
            for (col_index, x) in column_positions(start_x, self.motif_width, canvas_width)
                .into_iter()
                .enumerate()
            {
                let colors = if col_index.is_multiple_of(2) {
                    even
                } else {
                    odd
                };
                motifs.push(Motif {
                    x,
                    y,
                    width: self.motif_width,
                    height: self.motif_height,
                    colors,
                });
            }
        }
        motifs
    }
}

/// Motif anchors along a row, stopping once the left edge reaches `canvas_width`
///
/// For `start_x` in `[-width, 0]` the last anchor `p` satisfies
/// `p < canvas_width <= p + width`.
pub fn column_positions(start_x: i32, motif_width: i32, canvas_width: i32) -> Vec<i32> {
    if motif_width <= 0 {
        return Vec::new();
    }
    std::iter::successors(Some(start_x), |&x| Some(x + motif_width))
        .take_while(|&x| x < canvas_width)
        .collect()
}

/// Row anchors, stopping once a row's top edge reaches `canvas_height`
pub fn row_positions(start_y: i32, motif_height: i32, canvas_height: i32) -> Vec<i32> {
    if motif_height <= 0 {
        return Vec::new();
    }
    let half = motif_height / 2;
    std::iter::successors(Some(start_y), |&y| Some(y + motif_height))
        .take_while(|&y| y - half < canvas_height)
        .collect()
}

/// Even-column and odd-column colorings for row `row_index`
///
/// Together the two row modes form a 2x2 checkerboard over the brightened
/// accent, the accent and the two mid neutrals.
pub fn row_colorings(row_index: usize, accent: Color) -> [MotifColors; 2] {
    let light = accent.brighter();
    if row_index.is_multiple_of(2) {
        [
            MotifColors {
                left: light,
                right: accent,
            },
            MotifColors {
                left: SEATTLE,
                right: STONE,
            },
        ]
    } else {
        [
            MotifColors {
                left: light,
                right: STONE,
            },
            MotifColors {
                left: SEATTLE,
                right: accent,
            },
        ]
    }
}
