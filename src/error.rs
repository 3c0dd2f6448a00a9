//! Error types for tracked traversals.

use thiserror::Error;

/// Result type alias for tracker operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by a [`Tracker`](crate::Tracker).
///
/// None of these are retried or suppressed; every failure ends the step that raised it.
#[derive(Debug, Error)]
pub enum Error {
    /// The input has no known length or cannot be read by position.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A step was requested after the last element had been produced.
    #[error("traversal is exhausted")]
    Exhausted,

    /// The sequence had no element at a position below its original length.
    #[error("no element at position {index} of {total}")]
    MissingElement {
        /// Zero-based position that could not be read.
        index: usize,
        /// Length captured when the tracker was built.
        total: usize,
    },

    /// Writing or flushing the status line failed.
    #[error("failed to write status line: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` for the end-of-traversal signal.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}
