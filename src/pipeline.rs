//! Contains the [`Pipeline`] builder struct for the high level API.

use crate::{render, ColorSpace, Grid, QuantizeError};
use ::image::RgbaImage;
use std::io::{self, Write};

#[cfg(not(feature = "threads"))]
use crate::remap;
#[cfg(feature = "threads")]
use crate::{ThreadCount, WorkerPool};

/// The default grid width in cells.
pub const DEFAULT_WIDTH: u32 = 48;

/// The default height ratio.
pub const DEFAULT_RATIO: f32 = 1.0;

/// A builder struct to specify how an image is turned into a grid of palette indices.
///
/// # Examples
/// To start, create a [`Pipeline`] from a [`RgbaImage`]:
/// ```no_run
/// # use termquant::Pipeline;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let img = image::open("some image")?.into_rgba8();
/// let pipeline = Pipeline::new(&img);
/// # Ok(())
/// # }
/// ```
///
/// Then, change the options and print the result:
/// ```
/// # use termquant::{ColorSpace, Pipeline, ThreadCount};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let img = image::RgbaImage::from_pixel(64, 32, image::Rgba([255, 0, 0, 255]));
/// let indexed = Pipeline::new(&img)
///     .width(16)
///     .ratio(0.5)
///     .colorspace(ColorSpace::Rgb)
///     .threads(ThreadCount::try_from(4)?)
///     .indexed()?;
///
/// assert_eq!((indexed.width, indexed.height), (16, 4));
/// indexed.render(&mut std::io::stdout())?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline<'a> {
    /// The source image.
    image: &'a RgbaImage,
    /// The grid width in cells.
    width: u32,
    /// The factor applied to the proportional grid height.
    ratio: f32,
    /// The color space to search in.
    colorspace: ColorSpace,
    /// The number of workers for the nearest-color searches.
    #[cfg(feature = "threads")]
    threads: ThreadCount,
}

impl<'a> Pipeline<'a> {
    /// Creates a new [`Pipeline`] with default options.
    #[must_use]
    pub fn new(image: &'a RgbaImage) -> Self {
        Self {
            image,
            width: DEFAULT_WIDTH,
            ratio: DEFAULT_RATIO,
            colorspace: ColorSpace::default(),
            #[cfg(feature = "threads")]
            threads: ThreadCount::default(),
        }
    }

    /// Sets the grid width in cells.
    ///
    /// The default width is `48`.
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Sets the factor applied to the grid height after keeping the image proportions.
    ///
    /// Negative values are treated as `0.0`. The default ratio is `1.0`.
    #[must_use]
    pub fn ratio(mut self, ratio: f32) -> Self {
        self.ratio = ratio.max(0.0);
        self
    }

    /// Sets the color space to search for the nearest palette color in.
    ///
    /// The default color space is [`ColorSpace::Hsl`].
    #[must_use]
    pub fn colorspace(mut self, colorspace: ColorSpace) -> Self {
        self.colorspace = colorspace;
        self
    }

    /// Sets the number of workers used for the nearest-color searches.
    ///
    /// The default is a single worker.
    #[must_use]
    #[cfg(feature = "threads")]
    pub fn threads(mut self, threads: ThreadCount) -> Self {
        self.threads = threads;
        self
    }

    /// Resamples and premultiplies the image, returning the [`Grid`] of samples.
    ///
    /// This runs on the calling thread; only the nearest-color searches use the workers.
    #[must_use]
    pub fn grid(&self) -> Grid {
        Grid::from_rgba_image(self.image, self.width, self.ratio)
    }

    /// Runs the pipeline and returns the palette index of each grid cell.
    ///
    /// # Errors
    /// Returns an error if the worker pool could not be started.
    pub fn indexed(&self) -> Result<Indexed, QuantizeError> {
        self.indexed_grid(&self.grid())
    }

    /// Quantizes an already prepared [`Grid`] with the options of this pipeline.
    ///
    /// The worker pool is limited to one worker per sample.
    ///
    /// # Errors
    /// Returns an error if the worker pool could not be started.
    pub fn indexed_grid(&self, grid: &Grid) -> Result<Indexed, QuantizeError> {
        let mut indices = vec![0; grid.samples.len()];

        #[cfg(feature = "threads")]
        {
            if !grid.samples.is_empty() {
                let pool = WorkerPool::new(self.threads.at_most(grid.samples.len()))?;
                pool.remap(&grid.samples, self.colorspace, &mut indices)?;
            }
        }

        #[cfg(not(feature = "threads"))]
        {
            remap(&grid.samples, self.colorspace, &mut indices)?;
        }

        Ok(Indexed { width: grid.width, height: grid.height, indices })
    }
}

/// Palette indices laid out row by row, as returned by [`Pipeline::indexed`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Indexed {
    /// The number of cells per row.
    pub width: u32,
    /// The number of rows.
    pub height: u32,
    /// The palette index of each cell, `width * height` of them.
    pub indices: Vec<u8>,
}

impl Indexed {
    /// Draws the indices as terminal cells (see [`render`](crate::render())).
    ///
    /// # Errors
    /// Returns any error from writing to `out`.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        render(out, &self.indices, self.width as usize)
    }
}
