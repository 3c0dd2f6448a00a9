//! # `seq_progress`
//!
//! A console progress indicator for traversing finite, indexable sequences.
//!
//! Wrapping a sequence in a [`Tracker`] yields the same elements, paired with their index,
//! while redrawing a single status line after each one:
//!
//! ```text
//! Progress |================------------------------| 40.00% [4/10]  ETA:00:12
//! ```
//!
//! The line reports the fraction consumed, a fixed-width bar, and an estimate of the time
//! remaining. It is rewritten in place with a carriage return and flushed on every step;
//! no newline is written, so print one after the loop.
//!
//! ## Modules
//!
//! * [`builder`]: Fluent interface for configuring a [`Tracker`].
//! * [`error`]: The [`Error`] type shared by every fallible operation.
//! * [`io`]: The carriage-return line writer.
//! * [`iter`]: Extension traits adding `.track()` to sequences and iterators.
//! * [`progress`]: The per-step [`Frame`] and the percent, bar and ETA math.
//! * [`sequence`]: The [`Sequence`] trait for length-known, positional input.
//! * [`style`]: Bar width, labels and glyphs.
//! * [`tracker`]: The [`Tracker`] itself.
//!
//! ## Example
//!
//! ```no_run
//! use seq_progress::Tracker;
//!
//! let jobs = vec![3, 1, 4, 1, 5];
//! for step in Tracker::new(&jobs) {
//!     let (index, job) = step?;
//!     // ...
//! #   let _ = (index, job);
//! }
//! println!();
//! # Ok::<(), seq_progress::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod builder;
pub mod error;
pub mod io;
pub mod iter;
pub mod progress;
pub mod sequence;
pub mod style;
pub mod tracker;

pub use builder::TrackerBuilder;
pub use error::{Error, Result};
pub use iter::{TrackExt, TrackIteratorExt};
pub use progress::{EtaClock, Frame, Line};
pub use sequence::{Buffered, Sequence};
pub use style::Style;
pub use tracker::Tracker;
