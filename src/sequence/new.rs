// This file is part of fluent-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::sequence::Sequence;

// Alloc imports
use alloc::vec::Vec;

impl<T> Sequence<T> {
    /// Constructs an empty sequence. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Constructs an empty sequence with room for at least `capacity` elements.
    ///
    /// The capacity is only an allocation hint; it is never observable through
    /// the sequence API.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Constructs a sequence holding `items` in iteration order.
    ///
    /// ```
    /// # use fluent_sequence::Sequence;
    /// let s = Sequence::from_elements([1, 2, 3]);
    /// assert_eq!(s.as_slice(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub fn from_elements<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self {
            buf: items.into_iter().collect(),
        }
    }

    /// Consumes the sequence and returns its backing vector.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.buf
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(buf: Vec<T>) -> Self {
        Self { buf }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(arr: [T; N]) -> Self {
        Self::from_elements(arr)
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(src: &[T]) -> Self {
        Self { buf: src.to_vec() }
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(s: Sequence<T>) -> Self {
        s.buf
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.buf.extend(iter);
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.buf.extend(iter.into_iter().copied());
    }
}
