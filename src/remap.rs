//! Maps samples to palette indices, either sequentially or on a bounded worker pool.
//!
//! The caller owns the index buffer: it must have exactly one slot per sample,
//! and it is never reallocated. With a [`WorkerPool`], the buffer is split into at most
//! `threads` contiguous chunks and each worker writes only the chunk it was handed,
//! so no two workers ever touch the same slot.

use crate::{nearest_index, ColorSpace, LengthMismatch};
use palette::Srgb;

#[cfg(feature = "threads")]
use {
    crate::{QuantizeError, ThreadCount},
    rayon::prelude::*,
};

/// Checks that `output` has one slot for each of the `samples`.
fn check_len(samples: usize, output: usize) -> Result<(), LengthMismatch> {
    if samples == output {
        Ok(())
    } else {
        Err(LengthMismatch { samples, output })
    }
}

/// Writes the nearest palette index for each sample into the matching slot of `output`.
fn remap_unchecked(samples: &[Srgb<u8>], space: ColorSpace, output: &mut [u8]) {
    let palette = space.palette();
    for (index, &color) in output.iter_mut().zip(samples) {
        *index = nearest_index(palette, space.convert(color));
    }
}

/// Computes the palette index of each sample on the current thread.
///
/// `samples` should already be premultiplied (see [`premultiply`](crate::premultiply)).
///
/// # Errors
/// Returns an error if `output` does not have the same length as `samples`.
/// Nothing is written in that case.
pub fn remap(
    samples: &[Srgb<u8>],
    space: ColorSpace,
    output: &mut [u8],
) -> Result<(), LengthMismatch> {
    check_len(samples.len(), output.len())?;
    remap_unchecked(samples, space, output);
    Ok(())
}

/// A fixed-size pool of workers that run the nearest-color searches in parallel.
///
/// At most [`WorkerPool::threads`] searches run at the same time.
/// A pool of a single thread does not spawn anything and runs on the calling thread.
///
/// The results do not depend on the number of threads.
///
/// # Examples
/// ```
/// # use termquant::{ColorSpace, ThreadCount, WorkerPool};
/// # use palette::Srgb;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = WorkerPool::new(ThreadCount::try_from(2)?)?;
/// let samples = [Srgb::new(0, 0, 0), Srgb::new(255, 255, 255)];
/// assert_eq!(pool.quantize(&samples, ColorSpace::Rgb), vec![0, 15]);
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "threads")]
#[derive(Debug)]
pub struct WorkerPool {
    /// The number of workers.
    threads: ThreadCount,
    /// The dedicated thread pool, or `None` for a single worker.
    pool: Option<rayon::ThreadPool>,
}

#[cfg(feature = "threads")]
impl WorkerPool {
    /// Starts a new pool with the given number of workers.
    ///
    /// # Errors
    /// Returns an error if the worker threads could not be spawned.
    pub fn new(threads: ThreadCount) -> Result<Self, rayon::ThreadPoolBuildError> {
        let pool = if threads.get() == 1 {
            None
        } else {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads.get())
                .thread_name(|i| format!("termquant-worker-{i}"))
                .build()?;

            Some(pool)
        };

        Ok(Self { threads, pool })
    }

    /// Returns the number of workers in this pool.
    #[must_use]
    pub fn threads(&self) -> ThreadCount {
        self.threads
    }

    /// Computes the palette index of each sample on the workers of this pool.
    ///
    /// Returns once every slot of `output` has been written.
    ///
    /// # Errors
    /// Returns an error if `output` does not have the same length as `samples`.
    /// Nothing is written in that case.
    pub fn remap(
        &self,
        samples: &[Srgb<u8>],
        space: ColorSpace,
        output: &mut [u8],
    ) -> Result<(), LengthMismatch> {
        check_len(samples.len(), output.len())?;

        self.fill(samples, space, output);
        Ok(())
    }

    /// Like [`WorkerPool::remap`], but `output` must already have one slot per sample.
    fn fill(&self, samples: &[Srgb<u8>], space: ColorSpace, output: &mut [u8]) {
        if samples.is_empty() {
            return;
        }

        match &self.pool {
            None => remap_unchecked(samples, space, output),
            Some(pool) => {
                let chunk_size = chunk_size(samples.len(), self.threads);
                pool.install(|| {
                    output
                        .par_chunks_mut(chunk_size)
                        .zip(samples.par_chunks(chunk_size))
                        .for_each(|(output, samples)| remap_unchecked(samples, space, output));
                });
            }
        }
    }

    /// Computes the palette index of each sample on the workers of this pool,
    /// returning a new index buffer of the same length as `samples`.
    #[must_use]
    pub fn quantize(&self, samples: &[Srgb<u8>], space: ColorSpace) -> Vec<u8> {
        let mut output = vec![0; samples.len()];
        self.fill(samples, space, &mut output);
        output
    }
}

/// The length of each worker's chunk, so that there are at most `threads` chunks.
#[cfg(feature = "threads")]
fn chunk_size(len: usize, threads: ThreadCount) -> usize {
    len.div_ceil(threads.get()).max(1)
}

/// Computes the palette index of each sample with a temporary pool of `threads` workers.
///
/// The pool never has more workers than there are samples.
/// Prefer creating a [`WorkerPool`] once when quantizing many images.
///
/// # Errors
/// Returns an error if the worker pool could not be started.
#[cfg(feature = "threads")]
pub fn quantize(
    samples: &[Srgb<u8>],
    space: ColorSpace,
    threads: ThreadCount,
) -> Result<Vec<u8>, QuantizeError> {
    if samples.is_empty() {
        return Ok(Vec::new());
    }

    let pool = WorkerPool::new(threads.at_most(samples.len()))?;
    Ok(pool.quantize(samples, space))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::tests::*;

    fn sequential(samples: &[Srgb<u8>], space: ColorSpace) -> Vec<u8> {
        let mut output = vec![0; samples.len()];
        remap(samples, space, &mut output).unwrap();
        output
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let samples = test_data_1024();
        let mut output = vec![7; samples.len() - 1];

        let err = remap(&samples, ColorSpace::Hsl, &mut output).unwrap_err();
        assert_eq!(
            err,
            LengthMismatch { samples: samples.len(), output: samples.len() - 1 }
        );
        assert!(output.iter().all(|&i| i == 7));

        #[cfg(feature = "threads")]
        {
            let pool = WorkerPool::new(ThreadCount::try_from(4).unwrap()).unwrap();
            assert!(pool.remap(&samples, ColorSpace::Hsl, &mut output).is_err());
            assert!(output.iter().all(|&i| i == 7));
        }
    }

    #[test]
    fn matches_nearest_index() {
        let samples = test_data_1024();
        for space in [ColorSpace::Rgb, ColorSpace::Hsl] {
            let output = sequential(&samples, space);
            for (&color, &index) in samples.iter().zip(&output) {
                assert_eq!(index, nearest_index(space.palette(), space.convert(color)));
            }
        }
    }

    #[test]
    fn empty_input() {
        let mut output: [u8; 0] = [];
        remap(&[], ColorSpace::Hsl, &mut output).unwrap();

        #[cfg(feature = "threads")]
        {
            for threads in [1, 8] {
                let threads = ThreadCount::try_from(threads).unwrap();
                assert!(quantize(&[], ColorSpace::Rgb, threads).unwrap().is_empty());
                let pool = WorkerPool::new(threads).unwrap();
                assert!(pool.quantize(&[], ColorSpace::Hsl).is_empty());
            }
        }
    }

    #[test]
    #[cfg(feature = "threads")]
    fn black_and_white_on_two_threads() {
        use crate::RGB_PALETTE;

        let samples = [Srgb::new(0, 0, 0), Srgb::new(255, 255, 255)];
        let threads = ThreadCount::try_from(2).unwrap();
        let output = quantize(&samples, ColorSpace::Rgb, threads).unwrap();

        let black = nearest_index(&RGB_PALETTE, [0, 0, 0]);
        let white = nearest_index(&RGB_PALETTE, [255, 255, 255]);
        assert_eq!(output, vec![black, white]);
        assert_eq!(output, vec![0, 15]);
    }

    #[test]
    #[cfg(feature = "threads")]
    fn same_output_for_any_thread_count() {
        let samples = &test_data_1024()[..1000];
        for space in [ColorSpace::Rgb, ColorSpace::Hsl] {
            let expected = sequential(samples, space);

            let one = quantize(samples, space, ThreadCount::ONE).unwrap();
            let eight = quantize(samples, space, ThreadCount::try_from(8).unwrap()).unwrap();
            assert_eq!(expected, one);
            assert_eq!(one, eight);
        }
    }

    #[test]
    #[cfg(feature = "threads")]
    fn same_output_for_every_pool_size_up_to_len() {
        let samples = &test_data_1024()[..20];
        let expected = sequential(samples, ColorSpace::Hsl);
        for threads in 1..=samples.len() {
            let pool = WorkerPool::new(ThreadCount::try_from(threads).unwrap()).unwrap();
            assert_eq!(pool.threads().get(), threads);
            assert_eq!(pool.quantize(samples, ColorSpace::Hsl), expected, "{threads} threads");
        }
    }

    #[test]
    #[cfg(feature = "threads")]
    fn more_threads_than_samples() {
        let samples = test_data(2);
        let expected = sequential(&samples, ColorSpace::Rgb);
        for threads in [3, 2000, 1_000_000] {
            let threads = ThreadCount::try_from(threads).unwrap();
            assert_eq!(threads.at_most(samples.len()).get(), 2);
            assert_eq!(quantize(&samples, ColorSpace::Rgb, threads).unwrap(), expected);
        }
    }

    #[test]
    #[cfg(feature = "threads")]
    fn thread_count_is_capped_by_len() {
        let eight = ThreadCount::try_from(8).unwrap();
        assert_eq!(eight.at_most(0), ThreadCount::ONE);
        assert_eq!(eight.at_most(1), ThreadCount::ONE);
        assert_eq!(eight.at_most(5).get(), 5);
        assert_eq!(eight.at_most(8), eight);
        assert_eq!(eight.at_most(9), eight);
        assert_eq!(ThreadCount::ONE.at_most(1000), ThreadCount::ONE);
    }

    #[test]
    #[cfg(feature = "threads")]
    fn at_most_one_chunk_per_worker() {
        for len in [1, 2, 7, 8, 9, 1000, 1024] {
            for threads in [1, 2, 3, 8, 16, 2000] {
                let threads = ThreadCount::try_from(threads).unwrap();
                let size = chunk_size(len, threads);
                assert!(len.div_ceil(size) <= threads.get());
                assert!(size * threads.get() >= len);
            }
        }
    }

    #[test]
    #[cfg(feature = "threads")]
    fn pool_runs_on_its_own_threads() {
        let pool = WorkerPool::new(ThreadCount::try_from(3).unwrap()).unwrap();
        let pool = pool.pool.as_ref().unwrap();
        assert_eq!(pool.current_num_threads(), 3);
        assert_eq!(pool.install(rayon::current_num_threads), 3);
    }
}
