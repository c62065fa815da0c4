//! Prepares decoded pixels for quantization: grid sizing, resampling and alpha premultiplication.

use palette::{Srgb, Srgba};

#[cfg(feature = "threads")]
use rayon::prelude::*;
#[cfg(feature = "image")]
use {
    ::image::{imageops, RgbaImage},
    palette::cast::ComponentsAs,
};

/// Scales each color channel by `alpha / 255` (integer division).
///
/// # Examples
/// ```
/// # use termquant::premultiply;
/// # use palette::{Srgb, Srgba};
/// assert_eq!(premultiply(Srgba::new(200, 100, 50, 255)), Srgb::new(200, 100, 50));
/// assert_eq!(premultiply(Srgba::new(200, 100, 50, 128)), Srgb::new(100, 50, 25));
/// assert_eq!(premultiply(Srgba::new(200, 100, 50, 0)), Srgb::new(0, 0, 0));
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn premultiply(color: Srgba<u8>) -> Srgb<u8> {
    let alpha = u16::from(color.alpha);
    let scale = |c: u8| (u16::from(c) * alpha / 255) as u8;
    Srgb::new(scale(color.red), scale(color.green), scale(color.blue))
}

/// Premultiplies each pixel, returning the samples to quantize in the same order.
#[must_use]
pub fn premultiplied_samples(pixels: &[Srgba<u8>]) -> Vec<Srgb<u8>> {
    pixels.iter().copied().map(premultiply).collect()
}

/// Premultiplies each pixel in parallel, returning the samples to quantize in the same order.
#[must_use]
#[cfg(feature = "threads")]
pub fn premultiplied_samples_par(pixels: &[Srgba<u8>]) -> Vec<Srgb<u8>> {
    pixels.par_iter().copied().map(premultiply).collect()
}

/// Computes the grid size for a source image of `(width, height)` pixels.
///
/// The grid is `width` cells wide and keeps the proportions of the source,
/// with the height (rounded down) then multiplied by `ratio` and truncated.
/// A `ratio` below `1.0` compensates for terminal cells that are taller than wide.
///
/// If the source or target width is zero, the grid is empty.
///
/// # Examples
/// ```
/// # use termquant::grid_dimensions;
/// assert_eq!(grid_dimensions((640, 480), 48, 1.0), (48, 36));
/// assert_eq!(grid_dimensions((640, 480), 48, 0.5), (48, 18));
/// assert_eq!(grid_dimensions((640, 480), 0, 1.0), (0, 0));
/// ```
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn grid_dimensions((src_width, src_height): (u32, u32), width: u32, ratio: f32) -> (u32, u32) {
    if src_width == 0 || width == 0 {
        return (0, 0);
    }

    let height = u64::from(src_height) * u64::from(width) / u64::from(src_width);
    let height = (height as f32 * ratio.max(0.0)) as u32;

    if height == 0 {
        (0, 0)
    } else {
        (width, height)
    }
}

/// Premultiplied samples laid out row by row on a grid of `width` × `height` cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    /// The number of cells per row.
    pub width: u32,
    /// The number of rows.
    pub height: u32,
    /// The samples, `width * height` of them.
    pub samples: Vec<Srgb<u8>>,
}

#[cfg(feature = "image")]
impl Grid {
    /// Resamples the image to the size given by [`grid_dimensions`] and premultiplies its pixels.
    ///
    /// The resampling uses a Catmull-Rom filter. An empty grid skips resampling.
    #[must_use]
    pub fn from_rgba_image(image: &RgbaImage, width: u32, ratio: f32) -> Self {
        Self::resample(image, width, ratio, premultiplied_samples)
    }

    /// Like [`Grid::from_rgba_image`], but premultiplies the resampled pixels
    /// in parallel on the current rayon pool.
    #[must_use]
    #[cfg(feature = "threads")]
    pub fn from_rgba_image_par(image: &RgbaImage, width: u32, ratio: f32) -> Self {
        Self::resample(image, width, ratio, premultiplied_samples_par)
    }

    /// Resizes `image` to the grid size and turns the resized pixels into samples with `samples`.
    fn resample(
        image: &RgbaImage,
        width: u32,
        ratio: f32,
        samples: fn(&[Srgba<u8>]) -> Vec<Srgb<u8>>,
    ) -> Self {
        let (width, height) = grid_dimensions(image.dimensions(), width, ratio);
        if width == 0 || height == 0 {
            return Self::default();
        }

        let resized = imageops::resize(image, width, height, imageops::FilterType::CatmullRom);
        let raw: &[u8] = resized.as_raw();
        let pixels: &[Srgba<u8>] = raw.components_as();

        Self { width, height, samples: samples(pixels) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premultiply_is_integer_division() {
        assert_eq!(premultiply(Srgba::new(255, 255, 255, 1)), Srgb::new(1, 1, 1));
        assert_eq!(premultiply(Srgba::new(254, 127, 1, 254)), Srgb::new(253, 126, 0));
        for color in crate::tests::test_data_1024() {
            let (r, g, b) = color.into_components();
            assert_eq!(premultiply(Srgba::new(r, g, b, 255)), color);
            assert_eq!(premultiply(Srgba::new(r, g, b, 0)), Srgb::new(0, 0, 0));
        }
    }

    #[test]
    fn samples_keep_order() {
        let pixels = [
            Srgba::new(10, 20, 30, 255),
            Srgba::new(255, 0, 0, 0),
            Srgba::new(100, 200, 250, 51),
        ];
        let expected = vec![Srgb::new(10, 20, 30), Srgb::new(0, 0, 0), Srgb::new(20, 40, 50)];
        assert_eq!(premultiplied_samples(&pixels), expected);

        #[cfg(feature = "threads")]
        assert_eq!(premultiplied_samples_par(&pixels), expected);
    }

    #[test]
    fn grid_keeps_proportions() {
        assert_eq!(grid_dimensions((100, 50), 48, 1.0), (48, 24));
        assert_eq!(grid_dimensions((100, 50), 200, 1.0), (200, 100));
        assert_eq!(grid_dimensions((3, 2), 2, 1.0), (2, 1));
        assert_eq!(grid_dimensions((720, 720), 720, 0.625), (720, 450));
    }

    #[test]
    fn empty_grids() {
        assert_eq!(grid_dimensions((0, 10), 48, 1.0), (0, 0));
        assert_eq!(grid_dimensions((10, 0), 48, 1.0), (0, 0));
        assert_eq!(grid_dimensions((100, 50), 0, 1.0), (0, 0));
        assert_eq!(grid_dimensions((100, 50), 48, 0.0), (0, 0));
        assert_eq!(grid_dimensions((100, 1), 1, 1.0), (0, 0));
    }

    #[test]
    #[cfg(feature = "image")]
    fn grid_from_image() {
        let image = RgbaImage::from_pixel(8, 4, ::image::Rgba([200, 100, 50, 255]));
        let grid = Grid::from_rgba_image(&image, 4, 1.0);
        assert_eq!((grid.width, grid.height), (4, 2));
        assert_eq!(grid.samples.len(), 8);
        for sample in &grid.samples {
            let (r, g, b) = sample.into_components();
            assert!(r.abs_diff(200) <= 1 && g.abs_diff(100) <= 1 && b.abs_diff(50) <= 1);
        }

        #[cfg(feature = "threads")]
        assert_eq!(Grid::from_rgba_image_par(&image, 4, 1.0), grid);

        let transparent = RgbaImage::from_pixel(4, 4, ::image::Rgba([200, 100, 50, 0]));
        let grid = Grid::from_rgba_image(&transparent, 2, 1.0);
        assert_eq!(grid.samples, vec![Srgb::new(0, 0, 0); 4]);

        assert_eq!(Grid::from_rgba_image(&image, 0, 1.0), Grid::default());
    }

    #[test]
    #[cfg(all(feature = "image", feature = "threads"))]
    fn parallel_grid_matches_sequential() {
        #[allow(clippy::cast_possible_truncation)]
        let image = RgbaImage::from_fn(37, 23, |x, y| {
            ::image::Rgba([(x * 7) as u8, (y * 11) as u8, (x * y) as u8, (x * 5 + y) as u8])
        });

        for (width, ratio) in [(37, 1.0), (20, 0.5), (5, 2.0), (0, 1.0), (10, 0.0)] {
            assert_eq!(
                Grid::from_rgba_image_par(&image, width, ratio),
                Grid::from_rgba_image(&image, width, ratio),
            );
        }
    }
}
