//! The stateful, single-pass progress tracker.
//!
//! A [`Tracker`] walks a [`Sequence`] by position. Each step reads one element, redraws the
//! status line for the new position, and hands back `(index, element)`. Rendering happens
//! synchronously inside the step, so the caller's loop body only runs after the line has
//! been written and flushed.
//!
//! # Failure
//!
//! A step either fully succeeds (read, rendered, advanced) or fails and ends the traversal.
//! Through [`Iterator`] the failure is yielded once as `Some(Err(_))`, followed by `None`.
//!
//! # Example
//!
//! ```
//! use seq_progress::TrackerBuilder;
//!
//! let files = ["a.txt", "b.txt", "c.txt"];
//! let mut tracker = TrackerBuilder::new(&files).width(3).writer(Vec::new()).build();
//!
//! for step in tracker.by_ref() {
//!     let (index, name) = step?;
//!     assert_eq!(files[index], *name);
//! }
//!
//! let output = String::from_utf8(tracker.into_writer()).unwrap();
//! assert!(output.ends_with("|===| 100.00% [3/3] Complete ETA:00:00  "));
//! # Ok::<(), seq_progress::Error>(())
//! ```

use std::{
    fmt,
    io::{self, Stdout, Write},
    iter::FusedIterator,
    time::Duration,
};

use tracing::{debug, trace};
use web_time::Instant;

use crate::{
    builder::TrackerBuilder,
    error::{Error, Result},
    io::StatusLine,
    progress::Frame,
    sequence::Sequence,
    style::Style,
};

/// Where the cursor stands in the traversal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Stage {
    NotStarted,
    /// Index of the next element to produce.
    InProgress(usize),
    /// Number of elements produced before the traversal ended.
    Done(usize),
}

/// Wraps a [`Sequence`] and reports progress on a single refreshing line.
///
/// The tracker is not restartable; once exhausted a new one must be built.
pub struct Tracker<S, W = Stdout> {
    source: S,
    total: usize,
    stage: Stage,
    start: Instant,
    style: Style,
    output: StatusLine<W>,
    /// The frame behind the line currently on screen.
    drawn: Frame,
}

impl<S: Sequence> Tracker<S> {
    /// Creates a tracker with the default [`Style`], drawing to standard output.
    #[must_use]
    pub fn new(source: S) -> Self {
        TrackerBuilder::new(source).build()
    }

    /// Creates a tracker with the [`Style::view`] preset (`*` fill), drawing to standard output.
    #[must_use]
    pub fn view(source: S) -> Self {
        Self::view_to(source, io::stdout())
    }
}

impl<S: Sequence, W> Tracker<S, W> {
    pub(crate) fn view_to(source: S, writer: W) -> Self {
        TrackerBuilder::new(source)
            .style(Style::view())
            .writer(writer)
            .build()
    }

    pub(crate) fn from_parts(source: S, style: Style, start: Instant, writer: W) -> Self {
        let total = source.len();
        debug!(total, width = style.width, "tracker created");

        Self {
            source,
            total,
            stage: Stage::NotStarted,
            start,
            style,
            output: StatusLine::new(writer),
            drawn: Frame::new(0, total, Duration::ZERO),
        }
    }
}

impl<S, W> Tracker<S, W> {
    /// Returns the sequence length captured at construction.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Returns the number of elements produced so far.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self.stage {
            Stage::NotStarted => 0,
            Stage::InProgress(position) | Stage::Done(position) => position,
        }
    }

    /// Returns `true` while another element can be produced.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        match self.stage {
            Stage::NotStarted => self.total > 0,
            Stage::InProgress(next) => next < self.total,
            Stage::Done(_) => false,
        }
    }

    /// Returns `true` once the traversal has ended, by exhaustion or failure.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.stage, Stage::Done(_))
    }

    /// Returns the style used to draw the line.
    #[must_use]
    pub const fn style(&self) -> &Style {
        &self.style
    }

    /// Returns the instant the tracker was started.
    #[must_use]
    pub const fn start_time(&self) -> Instant {
        self.start
    }

    /// Returns the time elapsed since the tracker was started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Returns the frame of the most recently rendered line.
    ///
    /// Its elapsed time and ETA are the ones printed on screen. Before the first step this
    /// is an empty frame at position 0.
    #[must_use]
    pub const fn frame(&self) -> Frame {
        self.drawn
    }

    /// Captures the position and total with the elapsed time as of now.
    ///
    /// Unlike [`frame`](Self::frame), the clock is read on every call, so the ETA keeps
    /// moving between steps.
    #[must_use]
    pub fn snapshot(&self) -> Frame {
        Frame::new(self.position(), self.total, self.elapsed())
    }

    /// Returns a reference to the output writer.
    #[must_use]
    pub const fn writer(&self) -> &W {
        self.output.get_ref()
    }

    /// Consumes the tracker, returning the output writer.
    pub fn into_writer(self) -> W {
        self.output.into_inner()
    }

    fn remaining(&self) -> usize {
        match self.stage {
            Stage::Done(_) => 0,
            _ => self.total - self.position(),
        }
    }
}

impl<S: Sequence, W: Write> Tracker<S, W> {
    /// Produces the next `(index, element)` pair and redraws the status line.
    ///
    /// # Errors
    ///
    /// * [`Error::Exhausted`] once every element has been produced, on every call after that.
    /// * [`Error::MissingElement`] if the sequence cannot supply a position below `total`.
    /// * [`Error::Io`] if the status line cannot be written or flushed.
    ///
    /// The last two end the traversal.
    pub fn step(&mut self) -> Result<(usize, S::Item)> {
        let index = match self.stage {
            Stage::NotStarted => 0,
            Stage::InProgress(next) => next,
            Stage::Done(_) => return Err(Error::Exhausted),
        };

        if index >= self.total {
            debug!(total = self.total, "traversal exhausted");
            self.stage = Stage::Done(index);
            return Err(Error::Exhausted);
        }

        let Some(item) = self.source.fetch(index) else {
            debug!(index, total = self.total, "sequence has no element at position");
            self.stage = Stage::Done(index);
            return Err(Error::MissingElement {
                index,
                total: self.total,
            });
        };

        let frame = Frame::new(index + 1, self.total, self.elapsed());
        if let Err(err) = self.output.redraw(frame.line(&self.style)) {
            debug!(index, error = %err, "status line write failed");
            self.stage = Stage::Done(index);
            return Err(err.into());
        }
        trace!(position = index + 1, total = self.total, "step rendered");
        self.drawn = frame;

        self.stage = if frame.is_complete() {
            debug!(total = self.total, elapsed = ?frame.elapsed(), "traversal complete");
            Stage::Done(self.total)
        } else {
            Stage::InProgress(index + 1)
        };

        Ok((index, item))
    }
}

impl<S: Sequence, W: Write> Iterator for Tracker<S, W> {
    type Item = Result<(usize, S::Item)>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.step() {
            Err(Error::Exhausted) => None,
            step => Some(step),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // A failing step ends the traversal early, so only the upper bound is exact.
        (0, Some(self.remaining()))
    }
}

impl<S: Sequence, W: Write> FusedIterator for Tracker<S, W> {}

impl<S, W> fmt::Debug for Tracker<S, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The sequence and writer are not required to implement Debug
        f.debug_struct("Tracker")
            .field("total", &self.total)
            .field("stage", &self.stage)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::{self, ErrorKind, Write},
        thread,
        time::Duration,
    };

    use super::Tracker;
    use crate::{Error, EtaClock, Sequence, Style, TrackerBuilder};

    /// Splits captured output into the individual redraws.
    fn redraws(output: Vec<u8>) -> Vec<String> {
        let text = String::from_utf8(output).expect("status line is valid UTF-8");
        assert!(text.starts_with('\r'));
        assert!(!text.contains('\n'), "tracker never writes a newline");

        text.split('\r').skip(1).map(str::to_owned).collect()
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// A sequence whose length claim outlives its contents.
    struct Shrunk;

    impl Sequence for Shrunk {
        type Item = u8;

        fn len(&self) -> usize {
            3
        }

        fn fetch(&mut self, index: usize) -> Option<u8> {
            (index == 0).then_some(7)
        }
    }

    /// Ordered Emission
    /// Each element is produced once, in source order, paired with its index.
    #[test]
    fn test_pairs_in_order() {
        let data = vec!['x', 'y', 'z'];
        let mut tracker = TrackerBuilder::new(&data).writer(Vec::new()).build();

        let pairs: Vec<(usize, &char)> = tracker
            .by_ref()
            .collect::<Result<_, _>>()
            .expect("in-memory writer never fails");

        assert_eq!(pairs, vec![(0, &'x'), (1, &'y'), (2, &'z')]);
        assert_eq!(tracker.position(), 3);
        assert!(tracker.is_finished());
        assert_eq!(redraws(tracker.into_writer()).len(), 3);
    }

    /// Rendered Lines
    /// Four elements on a four-glyph bar, one glyph per step.
    #[test]
    fn test_rendered_lines() {
        let data = ["a", "b", "c", "d"];
        let mut tracker = TrackerBuilder::new(&data).width(4).writer(Vec::new()).build();

        for step in tracker.by_ref() {
            step.unwrap();
        }

        let lines = redraws(tracker.into_writer());
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("|=---| 25.00% [1/4]"));
        assert!(lines[1].contains("|==--| 50.00% [2/4]"));
        assert!(lines[3].contains("|====| 100.00% [4/4] Complete ETA:00:00"));

        for line in &lines[..3] {
            assert!(!line.contains("Complete"), "suffix only on the final step");
        }
    }

    /// View Factory
    /// The preset changes the fill glyph and keeps the default empty glyph.
    #[test]
    fn test_view_glyphs() {
        let tracker = Tracker::view(&[1, 2]);
        assert_eq!(tracker.style().fill, '*');
        assert_eq!(tracker.style().empty, '-');

        let mut tracker = Tracker::view_to(&[1, 2], Vec::new());
        for step in tracker.by_ref() {
            step.unwrap();
        }

        let half = format!("{}{}", "*".repeat(20), "-".repeat(20));
        let full = "*".repeat(40);

        let lines = redraws(tracker.into_writer());
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(&format!("Progress |{half}| 50.00% [1/2]  ETA:")));
        assert!(lines[1].starts_with(&format!("Progress |{full}| 100.00% [2/2] Complete")));
    }

    /// Rendered Frame
    /// The stored frame keeps the ETA that was printed, however long the caller waits.
    #[test]
    fn test_frame_matches_rendered_line() {
        let mut tracker = TrackerBuilder::new(&["a", "b"]).width(4).writer(Vec::new()).build();
        assert_eq!(tracker.frame().position(), 0);

        tracker.step().unwrap();
        thread::sleep(Duration::from_millis(1100));

        let frame = tracker.frame();
        assert_eq!((frame.position(), frame.total()), (1, 2));
        assert!(tracker.snapshot().elapsed() >= frame.elapsed() + Duration::from_secs(1));

        let rendered = redraws(tracker.into_writer()).remove(0);
        let printed_eta = rendered
            .split("ETA:")
            .nth(1)
            .expect("line carries an ETA")
            .trim_end();
        assert_eq!(EtaClock(frame.eta()).to_string(), printed_eta);
        let style = Style {
            width: 4,
            ..Style::default()
        };
        assert_eq!(rendered, frame.line(&style).to_string());
    }

    /// Empty Sequence
    /// Nothing is produced or written, and the tracker is immediately exhausted.
    #[test]
    fn test_empty_sequence() {
        let data: Vec<u32> = Vec::new();
        let mut tracker = TrackerBuilder::new(&data).writer(Vec::new()).build();

        assert!(!tracker.has_next());
        assert!(tracker.next().is_none());
        assert!(tracker.into_writer().is_empty());
    }

    /// Exhaustion
    /// Stepping past the end keeps signalling exhaustion and never restarts.
    #[test]
    fn test_exhausted_is_repeatable() {
        let mut tracker = TrackerBuilder::new(0..1).writer(Vec::new()).build();

        assert!(tracker.has_next());
        assert_eq!(tracker.step().unwrap(), (0, 0));
        assert!(!tracker.has_next());

        assert!(matches!(tracker.step(), Err(Error::Exhausted)));
        assert!(matches!(tracker.step(), Err(Error::Exhausted)));
        assert!(tracker.next().is_none());
        assert_eq!(tracker.position(), 1);
    }

    /// Write Failure
    /// An I/O error surfaces once, without advancing, and ends the traversal.
    #[test]
    fn test_io_failure_propagates() {
        let mut tracker = TrackerBuilder::new(&[1, 2, 3]).writer(ClosedPipe).build();

        match tracker.next() {
            Some(Err(Error::Io(err))) => assert_eq!(err.kind(), ErrorKind::BrokenPipe),
            other => panic!("expected an I/O error, got {other:?}"),
        }

        assert_eq!(tracker.position(), 0);
        assert!(tracker.is_finished());
        assert!(tracker.next().is_none());
    }

    /// Read Failure
    /// A position the sequence cannot supply is reported instead of panicking.
    #[test]
    fn test_missing_element() {
        let mut tracker = TrackerBuilder::new(Shrunk).writer(Vec::new()).build();

        assert_eq!(tracker.next().unwrap().unwrap(), (0, 7));
        assert!(matches!(
            tracker.next(),
            Some(Err(Error::MissingElement { index: 1, total: 3 }))
        ));
        assert!(tracker.next().is_none());
    }

    /// Size Hint
    /// The upper bound tracks the remaining element count.
    #[test]
    fn test_size_hint() {
        let mut tracker = TrackerBuilder::new(0..3).writer(io::sink()).build();

        assert_eq!(tracker.size_hint(), (0, Some(3)));
        tracker.next();
        assert_eq!(tracker.size_hint(), (0, Some(2)));
        tracker.by_ref().for_each(drop);
        assert_eq!(tracker.size_hint(), (0, Some(0)));
    }

    /// Snapshot
    /// Reflects the position after each step.
    #[test]
    fn test_snapshot() {
        let mut tracker = TrackerBuilder::new(0..4).writer(io::sink()).build();
        assert_eq!(tracker.snapshot().position(), 0);

        tracker.next();
        tracker.next();

        let frame = tracker.snapshot();
        assert_eq!((frame.position(), frame.total()), (2, 4));
        assert_eq!(frame.filled_len(40), 20);
    }
}
