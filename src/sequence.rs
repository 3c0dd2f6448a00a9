//! Finite, indexable inputs for a [`Tracker`](crate::Tracker).
//!
//! A tracker needs two things from its input: the element count up front (for the
//! percentage and ETA) and positional access (to read element `i` on step `i`). The
//! [`Sequence`] trait captures exactly that.
//!
//! # Implementations
//!
//! * Borrowed collections (`&[T]`, `&[T; N]`, `&Vec<T>`, `&VecDeque<T>`) yield `&T` and are
//!   never copied.
//! * `Range<usize>` yields the integers it spans.
//! * [`Buffered`] owns elements collected from an iterator with an exact `size_hint`. Anything
//!   else (unbounded or unknown-length streams) is rejected with
//!   [`Error::InvalidInput`](crate::Error::InvalidInput).

use std::{collections::VecDeque, ops::Range};

use crate::error::{Error, Result};

/// A finite collection that can report its length and be read by position.
pub trait Sequence {
    /// The value produced for each position.
    type Item;

    /// Number of elements in the sequence.
    fn len(&self) -> usize;

    /// Returns `true` when the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads the element at `index`.
    ///
    /// A tracker calls this at most once per position, in increasing order.
    fn fetch(&mut self, index: usize) -> Option<Self::Item>;
}

impl<'a, T> Sequence for &'a [T] {
    type Item = &'a T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn fetch(&mut self, index: usize) -> Option<&'a T> {
        let slice: &'a [T] = *self;
        slice.get(index)
    }
}

impl<'a, T, const N: usize> Sequence for &'a [T; N] {
    type Item = &'a T;

    fn len(&self) -> usize {
        N
    }

    fn fetch(&mut self, index: usize) -> Option<&'a T> {
        let array: &'a [T; N] = *self;
        array.get(index)
    }
}

impl<'a, T> Sequence for &'a Vec<T> {
    type Item = &'a T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn fetch(&mut self, index: usize) -> Option<&'a T> {
        let vec: &'a Vec<T> = *self;
        vec.get(index)
    }
}

impl<'a, T> Sequence for &'a VecDeque<T> {
    type Item = &'a T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn fetch(&mut self, index: usize) -> Option<&'a T> {
        let deque: &'a VecDeque<T> = *self;
        deque.get(index)
    }
}

impl Sequence for Range<usize> {
    type Item = usize;

    fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    fn fetch(&mut self, index: usize) -> Option<usize> {
        (index < Sequence::len(self)).then(|| self.start + index)
    }
}

/// An owned sequence collected from an iterator of known length.
///
/// Each slot is handed out once: the tracker moves element `i` out on step `i`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Buffered<T> {
    slots: Vec<Option<T>>,
}

impl<T> Buffered<T> {
    /// Collects `iter`, requiring its `size_hint` to be exact.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the iterator cannot state its length up front, or
    /// if it yields a different number of elements than it advertised.
    pub fn from_exact_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self> {
        let iter = iter.into_iter();

        // Exact bounds only; `(n, None)` covers unbounded streams like `repeat`.
        let expected = match iter.size_hint() {
            (lower, Some(upper)) if lower == upper => upper,
            (lower, upper) => {
                return Err(Error::InvalidInput(format!(
                    "iterator length is not known in advance (size hint {lower}..{upper:?})"
                )));
            }
        };

        let slots: Vec<Option<T>> = iter.map(Some).collect();
        if slots.len() != expected {
            return Err(Error::InvalidInput(format!(
                "iterator advertised {expected} elements but yielded {}",
                slots.len()
            )));
        }

        Ok(Self { slots })
    }
}

impl<T> From<Vec<T>> for Buffered<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            slots: items.into_iter().map(Some).collect(),
        }
    }
}

impl<T> Sequence for Buffered<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn fetch(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index)?.take()
    }
}
