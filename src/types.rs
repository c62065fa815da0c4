//! Contains various types needed across the crate.

use std::{
    error::Error,
    fmt::{self, Display},
    num::NonZeroUsize,
    str::FromStr,
};

/// An error type for when a worker pool of zero threads is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroThreads;

impl Display for ZeroThreads {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the number of threads must be at least 1")
    }
}

impl Error for ZeroThreads {}

/// An error type for when the index buffer does not have one slot per sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthMismatch {
    /// The number of samples to quantize.
    pub samples: usize,
    /// The length of the provided index buffer.
    pub output: usize,
}

impl Display for LengthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index buffer of length {} does not match the {} samples",
            self.output, self.samples
        )
    }
}

impl Error for LengthMismatch {}

/// The errors that can occur while quantizing a slice of samples.
#[derive(Debug)]
pub enum QuantizeError {
    /// The index buffer and the samples have different lengths.
    LengthMismatch(LengthMismatch),
    /// The worker pool could not be started.
    #[cfg(feature = "threads")]
    ThreadPool(rayon::ThreadPoolBuildError),
}

impl Display for QuantizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantizeError::LengthMismatch(err) => write!(f, "{err}"),
            #[cfg(feature = "threads")]
            QuantizeError::ThreadPool(err) => write!(f, "failed to start the worker pool: {err}"),
        }
    }
}

impl Error for QuantizeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            QuantizeError::LengthMismatch(err) => Some(err),
            #[cfg(feature = "threads")]
            QuantizeError::ThreadPool(err) => Some(err),
        }
    }
}

impl From<LengthMismatch> for QuantizeError {
    fn from(err: LengthMismatch) -> Self {
        QuantizeError::LengthMismatch(err)
    }
}

#[cfg(feature = "threads")]
impl From<rayon::ThreadPoolBuildError> for QuantizeError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        QuantizeError::ThreadPool(err)
    }
}

/// The number of workers used to run the nearest-color searches.
///
/// This is a simple new type wrapper around [`NonZeroUsize`], so a pool size of zero
/// is rejected when the [`ThreadCount`] is created instead of when quantizing.
///
/// # Examples
/// ```
/// # use termquant::{ThreadCount, ZeroThreads};
/// # fn main() -> Result<(), ZeroThreads> {
/// let threads = ThreadCount::try_from(4)?;
/// assert_eq!(threads.get(), 4);
/// assert!(ThreadCount::try_from(0).is_err());
/// assert_eq!(ThreadCount::default(), ThreadCount::ONE);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ThreadCount(NonZeroUsize);

impl ThreadCount {
    /// A single worker, i.e., sequential quantization on the calling thread.
    pub const ONE: Self = Self(NonZeroUsize::MIN);

    /// Creates a new [`ThreadCount`] from a non-zero value.
    #[must_use]
    pub const fn new(threads: NonZeroUsize) -> Self {
        Self(threads)
    }

    /// Gets the number of threads as a `usize`.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Limits the count to `len`, so that no worker is left without a sample.
    /// Returns [`ThreadCount::ONE`] if `len` is zero.
    ///
    /// # Examples
    /// ```
    /// # use termquant::ThreadCount;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let threads = ThreadCount::try_from(8)?;
    /// assert_eq!(threads.at_most(3).get(), 3);
    /// assert_eq!(threads.at_most(100).get(), 8);
    /// assert_eq!(threads.at_most(0), ThreadCount::ONE);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn at_most(self, len: usize) -> Self {
        NonZeroUsize::new(len).map_or(Self::ONE, |len| Self(self.0.min(len)))
    }
}

impl Default for ThreadCount {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<NonZeroUsize> for ThreadCount {
    fn from(value: NonZeroUsize) -> Self {
        Self(value)
    }
}

impl TryFrom<usize> for ThreadCount {
    type Error = ZeroThreads;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        NonZeroUsize::new(value).map(Self).ok_or(ZeroThreads)
    }
}

impl FromStr for ThreadCount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s.parse().map_err(|e| format!("{e}"))?;
        value.try_into().map_err(|e| format!("{e}"))
    }
}

impl Display for ThreadCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
