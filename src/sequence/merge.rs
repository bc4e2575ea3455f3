// This file is part of fluent-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Merging another sequence into the receiver at either end.
//!
//! The borrowing forms clone the elements of `other` and leave it untouched;
//! the `_owned` forms move them out without cloning. In neither case do the two
//! sequences share storage afterwards.

// Crate imports
use crate::sequence::Sequence;

impl<T: Clone> Sequence<T> {
    /// Appends clones of `other`'s elements, in order, to the tail.
    ///
    /// ```
    /// # use fluent_sequence::seq;
    /// let mut s = seq![1, 2, 3];
    /// let other = seq![4, 5];
    /// s.concatenate(&other);
    /// assert_eq!(s.as_slice(), &[1, 2, 3, 4, 5]);
    /// assert_eq!(other.as_slice(), &[4, 5]);
    /// ```
    #[inline]
    pub fn concatenate(&mut self, other: &Sequence<T>) -> &mut Self {
        self.buf.extend_from_slice(&other.buf);
        self
    }

    /// Prepends clones of `other`'s elements so that the result starts with
    /// `other` in its original order, followed by the receiver's old contents.
    ///
    /// ```
    /// # use fluent_sequence::seq;
    /// let mut s = seq![1, 2, 3];
    /// s.precatenate(&seq![-1, 0]);
    /// assert_eq!(s.as_slice(), &[-1, 0, 1, 2, 3]);
    /// ```
    #[inline]
    pub fn precatenate(&mut self, other: &Sequence<T>) -> &mut Self {
        self.prepend(other.buf.iter().cloned())
    }

    /// Same as [`concatenate`](Self::concatenate), returning the post-state length.
    #[inline]
    pub fn concatenate_length(&mut self, other: &Sequence<T>) -> usize {
        self.concatenate(other).len()
    }

    /// Same as [`precatenate`](Self::precatenate), returning the post-state length.
    #[inline]
    pub fn precatenate_length(&mut self, other: &Sequence<T>) -> usize {
        self.precatenate(other).len()
    }
}

impl<T> Sequence<T> {
    /// Moves every element of `other` onto the tail.
    #[inline]
    pub fn concatenate_owned(&mut self, mut other: Sequence<T>) -> &mut Self {
        self.buf.append(&mut other.buf);
        self
    }

    /// Moves every element of `other` onto the head, keeping `other`'s order.
    #[inline]
    pub fn precatenate_owned(&mut self, other: Sequence<T>) -> &mut Self {
        self.prepend(other.buf)
    }
}
