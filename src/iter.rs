// This file is part of fluent-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`Sequence`](crate::Sequence).
//!
//! - `IntoIter<T>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.
//! - `&Sequence` and `&mut Sequence` iterate as slices.

// Crate imports
use crate::sequence::Sequence;

// Core imports
use core::iter::FusedIterator;

// Alloc imports
use alloc::vec;

/// Owned iterator returned by `Sequence::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`].
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    pub(crate) inner: vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    /// The elements not yet yielded, as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        self.inner.nth(n)
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        self.inner.nth_back(n)
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.buf.into_iter(),
        }
    }
}
