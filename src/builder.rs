//! Fluent interface for constructing [`Tracker`] instances.
//!
//! [`Tracker::new`] and [`Tracker::view`] cover the common cases. The [`TrackerBuilder`]
//! exposes the rest of the configuration:
//!
//! * **Style:** bar width, labels and glyphs, individually or as a whole [`Style`].
//! * **Output:** any [`std::io::Write`] in place of standard output, e.g. a `Vec<u8>` to
//!   capture the line or standard error to keep stdout clean.
//! * **Start time:** an explicit start instant, so the ETA can account for work done
//!   before the traversal began.

use std::io::{self, Stdout};

use compact_str::CompactString;
use web_time::Instant;

use crate::{sequence::Sequence, style::Style, tracker::Tracker};

/// A builder pattern for constructing [`Tracker`] instances.
#[derive(Debug)]
pub struct TrackerBuilder<S, W = Stdout> {
    source: S,
    style: Style,
    start: Option<Instant>,
    writer: W,
}

impl<S> TrackerBuilder<S> {
    /// Starts building a tracker over `source` with the default [`Style`] and standard output.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            style: Style::default(),
            start: None,
            writer: io::stdout(),
        }
    }
}

impl<S, W> TrackerBuilder<S, W> {
    /// Sets the number of glyphs in the bar.
    #[must_use]
    pub const fn width(mut self, width: usize) -> Self {
        self.style.width = width;
        self
    }

    /// Sets the label printed before the bar.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<CompactString>) -> Self {
        self.style.prefix = prefix.into();
        self
    }

    /// Sets the label printed on the final step.
    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<CompactString>) -> Self {
        self.style.suffix = suffix.into();
        self
    }

    /// Sets the glyph for the completed part of the bar.
    #[must_use]
    pub const fn fill(mut self, fill: char) -> Self {
        self.style.fill = fill;
        self
    }

    /// Sets the glyph for the remaining part of the bar.
    #[must_use]
    pub const fn empty(mut self, empty: char) -> Self {
        self.style.empty = empty;
        self
    }

    /// Replaces the whole style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Sets the start time explicitly.
    #[must_use]
    pub const fn start_time(mut self, start: Instant) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the start time to `Instant::now()`.
    ///
    /// Without an explicit start time, [`build`](Self::build) uses the current instant.
    #[must_use]
    pub fn start_time_now(self) -> Self {
        self.start_time(Instant::now())
    }

    /// Draws the status line to `writer` instead.
    #[must_use]
    pub fn writer<W2>(self, writer: W2) -> TrackerBuilder<S, W2> {
        TrackerBuilder {
            source: self.source,
            style: self.style,
            start: self.start,
            writer,
        }
    }
}

impl<S: Sequence, W> TrackerBuilder<S, W> {
    /// Consumes the builder and returns the constructed [`Tracker`].
    #[must_use]
    pub fn build(self) -> Tracker<S, W> {
        let start = self.start.unwrap_or_else(Instant::now);
        Tracker::from_parts(self.source, self.style, start, self.writer)
    }
}
