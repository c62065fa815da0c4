//! A library for printing images in the terminal with the 256-color palette.
//!
//! Each pixel is mapped to the nearest of the 256 palette colors, where "nearest" is the
//! squared euclidean distance in either the sRGB or the HSL color space (see [`ColorSpace`]).
//! The search is exhaustive over the whole palette and ties go to the lowest palette index,
//! so the output is reproducible regardless of how many workers are used.
//!
//! # Features
//! To reduce dependencies and compile times, `termquant` has several `cargo` features
//! that can be turned off or on:
//! - `threads`: runs the nearest-color searches on a fixed-size worker pool via [`rayon`].
//! - `image`: enables integration with the [`image`] crate and the [`Pipeline`] builder.
//! - `cli`: the dependencies of the `termquant` binary.
//!
//! # High-Level API
//! To get started with the high-level API, see [`Pipeline`]:
//! ```no_run
//! # use termquant::{ColorSpace, Pipeline, ThreadCount};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = image::open("some image")?.into_rgba8();
//!
//! let indexed = Pipeline::new(&img)
//!     .width(64) // the number of cells per row
//!     .ratio(0.5) // halve the height to make up for tall terminal cells
//!     .colorspace(ColorSpace::Rgb)
//!     .threads(ThreadCount::try_from(4)?)
//!     .indexed()?;
//!
//! indexed.render(&mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Low-Level API
//! Premultiplied samples can be quantized directly with [`remap()`] or a [`WorkerPool`],
//! and single colors with [`nearest_index`]:
//! ```
//! # use termquant::{nearest_index, ColorSpace};
//! # use palette::Srgb;
//! let space = ColorSpace::Hsl;
//! let index = nearest_index(space.palette(), space.convert(Srgb::new(255, 0, 0)));
//! assert_eq!(index, 9);
//! ```

#![deny(unsafe_code)]
#![warn(
    clippy::pedantic,
    clippy::cargo,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
    clippy::unwrap_in_result,
    clippy::expect_used,
    clippy::unneeded_field_pattern,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unnecessary_self_imports,
    clippy::str_to_string,
    clippy::string_to_string,
    clippy::string_slice,
    missing_docs,
    clippy::missing_docs_in_private_items,
    rustdoc::all,
    clippy::float_cmp_const,
    clippy::lossy_float_literal
)]
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::many_single_char_names,
    clippy::missing_panics_doc,
    clippy::unreadable_literal
)]

mod ansi256;
mod colorspace;
mod nearest;
mod pixels;
mod remap;
mod render;
mod types;

#[cfg(feature = "image")]
mod pipeline;

pub use ansi256::*;
pub use colorspace::*;
pub use nearest::*;
pub use pixels::*;
pub use remap::*;
pub use render::*;
pub use types::*;

#[cfg(feature = "image")]
pub use pipeline::*;

#[cfg(test)]
pub(crate) mod tests {
    use palette::Srgb;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoroshiro128PlusPlus;

    /// Seeded random colors, so that test failures are reproducible.
    pub fn test_data(len: usize) -> Vec<Srgb<u8>> {
        let mut rng = Xoroshiro128PlusPlus::seed_from_u64(42);
        (0..len)
            .map(|_| {
                let [r, g, b] = rng.gen::<[u8; 3]>();
                Srgb::new(r, g, b)
            })
            .collect()
    }

    pub fn test_data_1024() -> Vec<Srgb<u8>> {
        test_data(1024)
    }
}
