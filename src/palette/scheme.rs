//! Per-run color assignment with chained exclusions between layers

use crate::palette::color::Color;
use crate::palette::selection::Palette;
use rand::Rng;

/// Colors chosen for one avatar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    /// Flat canvas fill beneath everything else
    pub background: Color,
    /// Accent used by the motif pattern, never equal to `background`
    pub pattern: Color,
    /// Body fill, never equal to the color directly behind it
    pub body: Color,
}

impl ColorScheme {
    /// Select the scheme for a run
    ///
    /// The body contrasts against the pattern accent when the pattern is
    /// drawn and against the flat background otherwise.
    pub fn select<R: Rng + ?Sized>(palette: &Palette, rng: &mut R, tiled: bool) -> Self {
        let background = palette.pick_color(rng, None);
        let pattern = palette.pick_color(rng, Some(background));
        let backdrop = if tiled { pattern } else { background };
        let body = palette.pick_color(rng, Some(backdrop));

        Self {
            background,
            pattern,
            body,
        }
    }

    /// Shadow fill derived from the body color
    pub fn shadow(&self) -> Color {
        self.body.darker()
    }
}
