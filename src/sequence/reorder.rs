// This file is part of fluent-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::sequence::Sequence;

// Core imports
use core::cmp::Ordering;

impl<T> Sequence<T> {
    /// Reverses the order of the elements in place.
    #[inline]
    pub fn reverse(&mut self) -> &mut Self {
        self.buf.reverse();
        self
    }

    /// Sorts with the comparator `cmp`, which must be a total order.
    ///
    /// This is the entry point for element types without [`Ord`], such as
    /// floats, where the caller picks the order explicitly:
    ///
    /// ```
    /// # use fluent_sequence::seq;
    /// let mut s = seq![2.5_f64, -1.0, 0.0];
    /// s.sort_by(f64::total_cmp);
    /// assert_eq!(s.as_slice(), &[-1.0, 0.0, 2.5]);
    /// ```
    #[inline]
    pub fn sort_by<F: FnMut(&T, &T) -> Ordering>(&mut self, cmp: F) -> &mut Self {
        self.buf.sort_unstable_by(cmp);
        self
    }
}

impl<T: Ord> Sequence<T> {
    /// Sorts in ascending order. Not stable.
    #[inline]
    pub fn sort(&mut self) -> &mut Self {
        self.buf.sort_unstable();
        self
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Removes duplicate elements in place, keeping each first occurrence.
    ///
    /// Only `PartialEq` is required, so this is `O(len²)` comparisons.
    ///
    /// ```
    /// # use fluent_sequence::seq;
    /// let mut s = seq![3, 1, 2, 1, 3];
    /// s.set();
    /// assert_eq!(s.as_slice(), &[3, 1, 2]);
    /// ```
    pub fn set(&mut self) -> &mut Self {
        // `buf[..write]` holds the distinct survivors, in first-occurrence order.
        let mut write = 0;
        for read in 0..self.buf.len() {
            if !self.buf[..write].contains(&self.buf[read]) {
                if write != read {
                    self.buf.swap(write, read);
                }
                write += 1;
            }
        }
        self.buf.truncate(write);
        self
    }
}
