//! Single-line terminal output.
//!
//! [`StatusLine`] wraps any [`std::io::Write`] and redraws one line in place: every update
//! starts with a carriage return and is flushed immediately, so nothing sits in a buffer
//! between steps. No trailing newline is ever written; printing one after the traversal is
//! left to the caller.

use std::{
    fmt,
    io::{self, Write},
};

/// A writer that overwrites the current terminal line on each update.
#[derive(Debug)]
pub struct StatusLine<W> {
    inner: W,
}

impl<W> StatusLine<W> {
    /// Creates a new `StatusLine` drawing to `inner`.
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Returns a reference to the underlying writer.
    pub const fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Consumes the `StatusLine`, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> StatusLine<W> {
    /// Replaces the current line with `line` and flushes.
    ///
    /// # Errors
    ///
    /// Propagates any write or flush failure from the underlying writer.
    pub fn redraw(&mut self, line: impl fmt::Display) -> io::Result<()> {
        write!(self.inner, "\r{line}")?;
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::StatusLine;

    struct Unflushed {
        written: Vec<u8>,
        flushes: usize,
    }

    impl Write for Unflushed {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    /// Carriage Return Overwrite
    /// Each redraw starts with `\r`, never ends with a newline, and is flushed.
    #[test]
    fn test_redraw() {
        let mut line = StatusLine::new(Unflushed {
            written: Vec::new(),
            flushes: 0,
        });

        line.redraw("one").unwrap();
        line.redraw(format_args!("{}", "two")).unwrap();

        let sink = line.into_inner();
        assert_eq!(sink.written, b"\rone\rtwo");
        assert_eq!(sink.flushes, 2);
    }
}
