//! Contains the supported search color spaces and the conversion into HSL.

use crate::{Palette, HSL_PALETTE, RGB_PALETTE};
use palette::{cast, Srgb};

/// Deltas below this value are treated as a gray color (zero hue and saturation).
const GRAY_EPSILON: f32 = 1e-6;

/// The color space in which the distance between a sample and the palette colors is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorSpace {
    /// Compare the sRGB components directly against [`RGB_PALETTE`].
    Rgb,
    /// Convert each sample with [`rgb_to_hsl`] and compare against [`HSL_PALETTE`].
    #[default]
    Hsl,
}

impl ColorSpace {
    /// Returns the palette searched in this color space.
    #[must_use]
    pub const fn palette(self) -> &'static Palette {
        match self {
            ColorSpace::Rgb => &RGB_PALETTE,
            ColorSpace::Hsl => &HSL_PALETTE,
        }
    }

    /// Converts a (premultiplied) sample into the components used by this color space.
    #[must_use]
    pub fn convert(self, color: Srgb<u8>) -> [u16; 3] {
        match self {
            ColorSpace::Rgb => cast::into_array(color).map(u16::from),
            ColorSpace::Hsl => rgb_to_hsl(color),
        }
    }
}

/// Converts an sRGB color into truncated hue (`0..360`), saturation (`0..=100`),
/// and lightness (`0..=100`) components.
///
/// Colors whose channel spread is below `1e-6` (in particular every color with `r == g == b`)
/// get a hue and saturation of `0`. Otherwise, the hue comes from the first of red, green, blue
/// that is equal to the maximum channel.
///
/// # Examples
/// ```
/// # use termquant::rgb_to_hsl;
/// # use palette::Srgb;
/// assert_eq!(rgb_to_hsl(Srgb::new(255, 0, 0)), [0, 100, 50]);
/// assert_eq!(rgb_to_hsl(Srgb::new(255, 255, 255)), [0, 0, 100]);
/// ```
#[must_use]
#[allow(clippy::float_cmp, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rgb_to_hsl(color: Srgb<u8>) -> [u16; 3] {
    let [r, g, b] = cast::into_array(color).map(|c| f32::from(c) / 255.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue = if delta < GRAY_EPSILON {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    let lightness = (max + min) / 2.0;

    let saturation = if delta < GRAY_EPSILON {
        0.0
    } else {
        delta / (1.0 - (2.0 * lightness - 1.0).abs())
    };

    let hue = ((hue % 360.0) + 360.0) % 360.0;

    [
        hue as u16,
        (saturation * 100.0) as u16,
        (lightness * 100.0) as u16,
    ]
}
