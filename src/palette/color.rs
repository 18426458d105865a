//! Straight-alpha RGBA colors and the fixed avatar palette

use image::Rgba;

/// Fraction applied by [`Color::brighter`] and [`Color::darker`]
pub const SHADE_FACTOR: f64 = 0.7;

/// 8-bit straight-alpha RGBA color
///
/// Compared by value everywhere, including palette exclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl Color {
    /// Opaque color from RGB channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with explicit alpha
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Lightened variant, dividing each channel by [`SHADE_FACTOR`]
    ///
    /// Channels that are nonzero but too small to grow are first raised to a
    /// floor, and pure black becomes a dark gray, so repeated brightening
    /// always makes progress. Alpha is preserved.
    #[must_use]
    pub fn brighter(self) -> Self {
        let floor = (1.0 / (1.0 - SHADE_FACTOR)) as u8;

        if self.r == 0 && self.g == 0 && self.b == 0 {
            return Self::rgba(floor, floor, floor, self.a);
        }

        let lift = |channel: u8| {
            let raised = if channel > 0 && channel < floor {
                floor
            } else {
                channel
            };
            (f64::from(raised) / SHADE_FACTOR).min(255.0) as u8
        };

        Self::rgba(lift(self.r), lift(self.g), lift(self.b), self.a)
    }

    /// Darkened variant, scaling each channel by [`SHADE_FACTOR`]
    #[must_use]
    pub fn darker(self) -> Self {
        let scale = |channel: u8| (f64::from(channel) * SHADE_FACTOR) as u8;
        Self::rgba(scale(self.r), scale(self.g), scale(self.b), self.a)
    }

    /// Alpha as a unit fraction
    pub fn opacity(self) -> f32 {
        f32::from(self.a) / 255.0
    }

    /// Check whether the color fully replaces what it is drawn over
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        Self([color.r, color.g, color.b, color.a])
    }
}

impl From<Rgba<u8>> for Color {
    fn from(pixel: Rgba<u8>) -> Self {
        let [r, g, b, a] = pixel.0;
        Self::rgba(r, g, b, a)
    }
}

// Neutrals
/// Translucent dark wash laid over the motif pattern
pub const COAL: Color = Color::rgba(61, 69, 77, 70);
/// Darker neutral used in motif halves
pub const STONE: Color = Color::rgb(158, 164, 171);
/// Mid neutral used in motif halves
pub const SEATTLE: Color = Color::rgb(225, 227, 232);
/// Light neutral for the head and initials
pub const COTTON: Color = Color::rgb(243, 244, 246);

// Accents
/// Gold accent
pub const GOLD: Color = Color::rgb(242, 174, 0);
/// Teal accent
pub const TEAL: Color = Color::rgb(66, 172, 180);
/// Ruby accent
pub const RUBY: Color = Color::rgb(225, 91, 79);
/// Blue accent
pub const BLUE: Color = Color::rgb(66, 130, 226);

/// The four accent colors available for random selection
pub const ACCENTS: [Color; 4] = [GOLD, TEAL, RUBY, BLUE];
