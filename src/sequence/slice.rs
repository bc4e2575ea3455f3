// This file is part of fluent-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, sequence::Sequence};

// Core imports
use core::ops::{Bound, RangeBounds};

/// Resolves `range` against `len` without clamping.
///
/// Bounds that overflow `usize` saturate, which lands them past any real
/// length.
fn resolve<R: RangeBounds<usize>>(range: &R, len: usize) -> (usize, usize) {
    let start = match range.start_bound() {
        Bound::Included(&i) => i,
        Bound::Excluded(&i) => i.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&i) => i.saturating_add(1),
        Bound::Excluded(&i) => i,
        Bound::Unbounded => len,
    };
    (start, end)
}

impl<T> Sequence<T> {
    /// Returns the elements as a shared slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    /// Returns the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    /// Narrows the sequence in place to the elements in `range`.
    ///
    /// Never panics. Both bounds are clamped to `[0, len]`; a start beyond the
    /// clamped end leaves the sequence empty.
    ///
    /// ```
    /// # use fluent_sequence::seq;
    /// let mut s = seq![0, 1, 2, 3, 4];
    /// s.slice(1..4);
    /// assert_eq!(s.as_slice(), &[1, 2, 3]);
    ///
    /// s.slice(1..100);
    /// assert_eq!(s.as_slice(), &[2, 3]);
    /// ```
    pub fn slice<R: RangeBounds<usize>>(&mut self, range: R) -> &mut Self {
        let len = self.len();
        let (start, end) = resolve(&range, len);
        let end = end.min(len);
        let start = start.min(end);

        self.buf.truncate(end);
        self.buf.drain(..start);
        self
    }

    /// Narrows the sequence in place to `range`, refusing out-of-range input.
    ///
    /// Returns [`Error::InvalidRange`] and leaves the sequence unchanged when
    /// `start > end` or `end > len`.
    pub fn try_slice<R: RangeBounds<usize>>(&mut self, range: R) -> Result<&mut Self, Error> {
        let (start, end) = resolve(&range, self.len());
        if start > end || end > self.len() {
            return Err(Error::InvalidRange);
        }
        Ok(self.slice(start..end))
    }
}
