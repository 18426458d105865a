//! Supersampled coverage masks for anti-aliased filling

use crate::raster::shapes::{Point, Region};
use ndarray::Array2;

/// Fractional pixel coverage of a region, clipped to a canvas
///
/// `values` is indexed `[row, col]` relative to `origin`.
#[derive(Debug, Clone)]
pub struct CoverageMask {
    /// Canvas position of `values[[0, 0]]`
    pub origin: Point,
    /// Coverage fractions in `[0, 1]`
    pub values: Array2<f32>,
}

impl CoverageMask {
    /// Sample `region` on a `samples x samples` grid inside every pixel
    ///
    /// Pixels outside `0..clip_width` and `0..clip_height` are never
    /// touched. A single sample per axis tests pixel centers only, which
    /// gives aliased output.
    pub fn rasterize(
        region: &impl Region,
        clip_width: u32,
        clip_height: u32,
        samples: u32,
    ) -> Self {
        let bounds = region.bounds();
        let samples = samples.max(1);

        let clip = |value: f64, limit: u32| value.clamp(0.0, f64::from(limit)) as i32;
        let x0 = clip(bounds.min_x.floor(), clip_width);
        let y0 = clip(bounds.min_y.floor(), clip_height);
        let x1 = clip(bounds.max_x.ceil(), clip_width);
        let y1 = clip(bounds.max_y.ceil(), clip_height);

        let cols = (x1 - x0).max(0) as usize;
        let rows = (y1 - y0).max(0) as usize;

        let step = 1.0 / f64::from(samples);
        let weight = 1.0 / (samples * samples) as f32;

        let values = Array2::from_shape_fn((rows, cols), |(row, col)| {
            let px = f64::from(x0) + col as f64;
            let py = f64::from(y0) + row as f64;
            let mut hits = 0_u32;
            for sy in 0..samples {
                let y = (f64::from(sy) + 0.5).mul_add(step, py);
                for sx in 0..samples {
                    let x = (f64::from(sx) + 0.5).mul_add(step, px);
                    if region.contains(x, y) {
                        hits += 1;
                    }
                }
            }
            hits as f32 * weight
        });

        Self {
            origin: Point::new(x0, y0),
            values,
        }
    }

    /// Coverage at a canvas position, zero outside the mask
    pub fn at(&self, x: i32, y: i32) -> f32 {
        let (Ok(col), Ok(row)) = (
            usize::try_from(x - self.origin.x),
            usize::try_from(y - self.origin.y),
        ) else {
            return 0.0;
        };
        self.values.get([row, col]).copied().unwrap_or(0.0)
    }

    /// Covered area in pixels
    pub fn area(&self) -> f32 {
        self.values.sum()
    }

    /// Canvas positions with nonzero coverage
    pub fn covered(&self) -> impl Iterator<Item = (i32, i32, f32)> + '_ {
        self.values
            .indexed_iter()
            .filter(|&(_, &value)| value > 0.0)
            .map(|((row, col), &value)| {
                (
                    self.origin.x + col as i32,
                    self.origin.y + row as i32,
                    value,
                )
            })
    }
}
