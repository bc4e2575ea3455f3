// This file is part of fluent-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::sequence::Sequence;

impl<T> Sequence<T> {
    /// Returns the smallest index whose element satisfies `pred`.
    ///
    /// ```
    /// # use fluent_sequence::seq;
    /// let s = seq![1, 2, 4, 5, 6];
    /// assert_eq!(s.find_index(|v| *v > 4), Some(3));
    /// assert_eq!(s.find_index(|v| *v > 9), None);
    /// ```
    #[inline]
    pub fn find_index<F: FnMut(&T) -> bool>(&self, pred: F) -> Option<usize> {
        self.buf.iter().position(pred)
    }

    /// Returns the first element satisfying `pred`.
    #[inline]
    pub fn find<F: FnMut(&T) -> bool>(&self, mut pred: F) -> Option<&T> {
        self.buf.iter().find(|x| pred(x))
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Returns `true` if some element equals `x` (linear search).
    #[inline]
    pub fn contains(&self, x: &T) -> bool {
        self.buf.contains(x)
    }
}
