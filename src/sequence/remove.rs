// This file is part of fluent-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, sequence::Sequence};

// Core imports
use core::mem;

impl<T> Sequence<T> {
    /// Removes the element at `index`, shifting the tail down by one.
    ///
    /// A no-op when `index >= len`.
    #[inline]
    pub fn delete(&mut self, index: usize) -> &mut Self {
        let _ = self.remove(index);
        self
    }

    /// Same as [`delete`](Self::delete), returning the post-state length.
    #[inline]
    pub fn delete_length(&mut self, index: usize) -> usize {
        self.delete(index).len()
    }

    /// Removes and returns the element at `index`, shifting the tail down.
    ///
    /// Returns `None` if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.bounds(index).then(|| self.buf.remove(index))
    }

    /// Fallible variant of [`remove`](Self::remove), returning
    /// [`Error::OutOfBounds`] when `index >= len`.
    #[inline]
    pub fn try_remove(&mut self, index: usize) -> Result<T, Error> {
        self.remove(index).ok_or(Error::OutOfBounds)
    }

    /// Overwrites the element at `index` with `value`.
    ///
    /// Returns `false` and leaves the sequence untouched when `index >= len`.
    #[inline]
    pub fn replace(&mut self, index: usize, value: T) -> bool {
        self.try_replace(index, value).is_ok()
    }

    /// Overwrites the element at `index` and returns the previous value, or
    /// [`Error::OutOfBounds`] when `index >= len`.
    #[inline]
    pub fn try_replace(&mut self, index: usize, value: T) -> Result<T, Error> {
        let slot = self.buf.get_mut(index).ok_or(Error::OutOfBounds)?;
        Ok(mem::replace(slot, value))
    }

    /// Inserts `value` before `index`, shifting the tail up by one.
    ///
    /// `index == len` appends. Returns `false` (no change) when `index > len`.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> bool {
        if index > self.len() {
            return false;
        }
        self.buf.insert(index, value);
        true
    }

    /// Exchanges the elements at `a` and `b`.
    ///
    /// Returns `false` and does nothing if either index is out of bounds.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        self.try_swap(a, b).is_ok()
    }

    /// Fallible variant of [`swap`](Self::swap).
    #[inline]
    pub fn try_swap(&mut self, a: usize, b: usize) -> Result<(), Error> {
        if !(self.bounds(a) && self.bounds(b)) {
            return Err(Error::OutOfBounds);
        }
        self.buf.swap(a, b);
        Ok(())
    }

    /// Retains only the elements for which `f` returns `true`, preserving order.
    #[inline]
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, f: F) -> &mut Self {
        self.buf.retain(f);
        self
    }

    /// Shrinks to `len` if `len < self.len()`; otherwise a no-op.
    #[inline]
    pub fn truncate(&mut self, len: usize) -> &mut Self {
        self.buf.truncate(len);
        self
    }

    /// Removes every element.
    #[inline]
    pub fn clear(&mut self) -> &mut Self {
        self.buf.clear();
        self
    }
}
