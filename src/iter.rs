//! Extension traits for attaching a tracker in a single method call.
//!
//! [`TrackExt`] is implemented for every [`Sequence`], so borrowed slices, arrays, vectors
//! and ranges gain `.track()` and `.view()`. [`TrackIteratorExt`] covers plain iterators: the
//! elements are buffered first, which requires the iterator to know its exact length.
//!
//! # Example
//!
//! ```no_run
//! use seq_progress::TrackExt;
//!
//! let pages = vec!["intro", "setup", "usage"];
//! for step in (&pages).track() {
//!     let (index, page) = step?;
//!     // ...
//! #   let _ = (index, page);
//! }
//! println!();
//! # Ok::<(), seq_progress::Error>(())
//! ```

use crate::{
    error::Result,
    sequence::{Buffered, Sequence},
    tracker::Tracker,
};

/// Extension trait to wrap any [`Sequence`] in a [`Tracker`].
pub trait TrackExt: Sequence + Sized {
    /// Wraps the sequence in a tracker with the default style.
    fn track(self) -> Tracker<Self>;

    /// Wraps the sequence in a tracker using the `*` fill glyph.
    fn view(self) -> Tracker<Self>;
}

impl<S: Sequence> TrackExt for S {
    fn track(self) -> Tracker<Self> {
        Tracker::new(self)
    }

    fn view(self) -> Tracker<Self> {
        Tracker::view(self)
    }
}

/// Extension trait to track iterators whose length is known up front.
pub trait TrackIteratorExt: Iterator + Sized {
    /// Buffers the iterator and wraps it in a tracker with the default style.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) if the iterator's
    /// `size_hint` is not exact, as for unbounded or filtered streams.
    fn track_exact(self) -> Result<Tracker<Buffered<Self::Item>>>;
}

impl<I: Iterator> TrackIteratorExt for I {
    fn track_exact(self) -> Result<Tracker<Buffered<Self::Item>>> {
        Buffered::from_exact_iter(self).map(Tracker::new)
    }
}
