//! Random sampling primitives: exclusion-aware color picks and inclusive ranges
//!
//! Every random decision in a generation run flows through the functions in
//! this module, each of which takes the caller's random source explicitly.

use crate::io::error::{Result, invalid_parameter};
use crate::palette::color::{ACCENTS, Color};
use num_traits::PrimInt;
use rand::Rng;
use rand::distr::uniform::SampleUniform;
use rand::seq::IndexedRandom;

/// Letters available for initials
const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Sample uniformly from the inclusive range `[min, max]`
///
/// `min == max` is legal and always yields that value. Callers guarantee
/// `min <= max`; ranges are validated once when configuration is built.
pub fn random_in_range<T, R>(rng: &mut R, min: T, max: T) -> T
where
    T: PrimInt + SampleUniform,
    R: Rng + ?Sized,
{
    debug_assert!(min <= max, "range bounds are inverted");
    if min >= max {
        return min;
    }
    rng.random_range(min..=max)
}

/// Inclusive integer bounds for a randomized dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionRange {
    /// Smallest value that may be sampled
    pub min: i32,
    /// Largest value that may be sampled
    pub max: i32,
}

impl DimensionRange {
    /// Create a range spanning `[min, max]`
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Degenerate range that always samples `value`
    pub const fn fixed(value: i32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Draw a value from the range
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> i32 {
        random_in_range(rng, self.min, self.max)
    }

    /// Check that the range is ordered and strictly positive
    ///
    /// # Errors
    ///
    /// Returns an error naming `parameter` if `min > max` or `min < 1`
    pub fn validate(self, parameter: &'static str) -> Result<()> {
        if self.min > self.max {
            return Err(invalid_parameter(
                parameter,
                &format!("{}..={}", self.min, self.max),
                &"minimum exceeds maximum",
            ));
        }
        if self.min < 1 {
            return Err(invalid_parameter(
                parameter,
                &format!("{}..={}", self.min, self.max),
                &"dimensions must be at least one pixel",
            ));
        }
        Ok(())
    }
}

/// Fixed set of colors eligible for random selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::accents()
    }
}

impl Palette {
    /// The four-color accent palette
    pub fn accents() -> Self {
        Self {
            colors: ACCENTS.to_vec(),
        }
    }

    /// Build a palette from arbitrary colors
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two distinct colors are supplied, since
    /// exclusion sampling could then never terminate
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        let distinct = colors
            .iter()
            .enumerate()
            .filter(|(i, c)| !colors.iter().take(*i).any(|earlier| earlier == *c))
            .count();

        if distinct < 2 {
            return Err(invalid_parameter(
                "palette",
                &format!("{distinct} distinct colors"),
                &"exclusion sampling needs at least two distinct colors",
            ));
        }
        Ok(Self { colors })
    }

    /// Colors in the palette
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Check palette membership by value
    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    /// Draw a color uniformly, resampling while it equals `excluded`
    ///
    /// Terminates almost surely: every palette holds at least two distinct
    /// colors, so each draw escapes the exclusion with probability at least
    /// `1/len`.
    pub fn pick_color<R: Rng + ?Sized>(&self, rng: &mut R, excluded: Option<Color>) -> Color {
        loop {
            let Some(&candidate) = self.colors.choose(rng) else {
                // Construction guarantees a non-empty palette
                return excluded.unwrap_or(Color::rgba(0, 0, 0, 0));
            };
            if Some(candidate) != excluded {
                return candidate;
            }
        }
    }
}

/// Two uppercase letters, each drawn independently from A-Z
pub fn random_initials<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..2)
        .filter_map(|_| ALPHABET.choose(rng).map(|&letter| char::from(letter)))
        .collect()
}
