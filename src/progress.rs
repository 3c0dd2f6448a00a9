//! Rendering math for a single step of a traversal.
//!
//! A [`Frame`] is a plain-data snapshot of one step: how many elements have been consumed,
//! out of how many, and how long it took to get there. Everything printed on the status
//! line is derived from it:
//!
//! * **Percent:** `position / total * 100`, guarded to `0.0` for an empty sequence.
//! * **Bar:** `floor(width * position / total)` fill glyphs, padded with empty glyphs.
//! * **ETA:** the average time per element so far, times the number of elements left.
//!
//! The ETA is deliberately unsmoothed; it can rise between steps when elements slow down.
//! It is printed as `MM:SS` with no hour rollover, so long estimates read e.g. `540:00`.

use std::{
    fmt::{self, Write as _},
    iter,
    time::Duration,
};

use crate::style::Style;

/// A snapshot of the tracker state at one rendered step.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    position: usize,
    total: usize,
    elapsed: Duration,
}

impl Frame {
    /// Creates a frame for `position` completed elements out of `total`.
    #[must_use]
    pub const fn new(position: usize, total: usize, elapsed: Duration) -> Self {
        Self {
            position,
            total,
            elapsed,
        }
    }

    /// Returns the number of elements consumed (1-based count of the last step).
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the sequence length.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Returns the time elapsed since the tracker started.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns `true` when every element has been consumed.
    ///
    /// An empty sequence is never complete, since it never renders a step.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.total > 0 && self.position >= self.total
    }

    /// Returns the completion percentage (0.0 to 100.0).
    ///
    /// Returns `0.0` if `total` is zero.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.position as f64 / self.total as f64 * 100.0
        }
    }

    /// Returns how many of `width` bar glyphs are filled.
    ///
    /// Always within `0..=width` and non-decreasing in `position`.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn filled_len(&self, width: usize) -> usize {
        if self.total == 0 {
            return 0;
        }

        // Widened so `width * position` cannot overflow.
        let position = self.position.min(self.total) as u128;
        (width as u128 * position / self.total as u128) as usize
    }

    /// Renders the bar for `style` as an owned string of exactly `style.width` characters.
    #[must_use]
    pub fn bar(&self, style: &Style) -> String {
        self.bar_glyphs(style).collect()
    }

    fn bar_glyphs(&self, style: &Style) -> impl Iterator<Item = char> {
        let filled = self.filled_len(style.width);
        iter::repeat_n(style.fill, filled).chain(iter::repeat_n(style.empty, style.width - filled))
    }

    /// Estimates the time remaining from the average time per element so far.
    ///
    /// Returns [`Duration::ZERO`] before the first element and after the last one.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn eta(&self) -> Duration {
        if self.position == 0 {
            return Duration::ZERO;
        }

        let remaining = self.total.saturating_sub(self.position);
        let per_item = self.elapsed.as_secs_f64() / self.position as f64;

        Duration::try_from_secs_f64(per_item * remaining as f64).unwrap_or(Duration::MAX)
    }

    /// Pairs this frame with a style, producing the displayable status line.
    #[must_use]
    pub const fn line<'a>(&self, style: &'a Style) -> Line<'a> {
        Line {
            frame: *self,
            style,
        }
    }
}

/// A duration printed as zero-padded `MM:SS`, truncating sub-second precision.
///
/// Minutes are not rolled over into hours.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EtaClock(pub Duration);

impl fmt::Display for EtaClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0.as_secs();
        write!(f, "{:02}:{:02}", secs / 60, secs % 60)
    }
}

/// The text of one status line, without the leading carriage return.
///
/// Formats as `{prefix} |{bar}| {percent:.2}% [{position}/{total}] {suffix} ETA:{MM:SS}  `,
/// where the suffix is only present on the final step.
#[derive(Clone, Copy, Debug)]
pub struct Line<'a> {
    frame: Frame,
    style: &'a Style,
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { frame, style } = self;

        write!(f, "{} |", style.prefix)?;
        for glyph in frame.bar_glyphs(style) {
            f.write_char(glyph)?;
        }

        let suffix = if frame.is_complete() {
            style.suffix.as_str()
        } else {
            ""
        };

        write!(
            f,
            "| {:.2}% [{}/{}] {} ETA:{}  ",
            frame.percent(),
            frame.position,
            frame.total,
            suffix,
            EtaClock(frame.eta())
        )
    }
}
