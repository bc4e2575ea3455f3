// This file is part of fluent-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::sequence::Sequence;

impl<T> Sequence<T> {
    /// Appends `items` to the tail, in iteration order.
    ///
    /// ```
    /// # use fluent_sequence::seq;
    /// let mut s = seq![1, 2];
    /// s.append([3, 4]).append([5]);
    /// assert_eq!(s.as_slice(), &[1, 2, 3, 4, 5]);
    /// ```
    #[inline]
    pub fn append<I: IntoIterator<Item = T>>(&mut self, items: I) -> &mut Self {
        self.buf.extend(items);
        self
    }

    /// Inserts `items` at the head, keeping their relative order.
    ///
    /// Prepending `[a, b]` onto `[c, d]` yields `[a, b, c, d]`.
    ///
    /// ```
    /// # use fluent_sequence::seq;
    /// let mut s = seq!['c', 'd'];
    /// s.prepend(['a', 'b']);
    /// assert_eq!(s.as_slice(), &['a', 'b', 'c', 'd']);
    /// ```
    #[inline]
    pub fn prepend<I: IntoIterator<Item = T>>(&mut self, items: I) -> &mut Self {
        self.buf.splice(0..0, items);
        self
    }

    /// Appends `items` and returns the new length.
    #[inline]
    pub fn push<I: IntoIterator<Item = T>>(&mut self, items: I) -> usize {
        self.append(items).len()
    }

    /// Prepends `items` and returns the new length.
    #[inline]
    pub fn unshift<I: IntoIterator<Item = T>>(&mut self, items: I) -> usize {
        self.prepend(items).len()
    }

    /// Same as [`append`](Self::append), returning the post-state length.
    #[inline]
    pub fn append_length<I: IntoIterator<Item = T>>(&mut self, items: I) -> usize {
        self.append(items).len()
    }

    /// Same as [`prepend`](Self::prepend), returning the post-state length.
    #[inline]
    pub fn prepend_length<I: IntoIterator<Item = T>>(&mut self, items: I) -> usize {
        self.prepend(items).len()
    }

    /// Removes and returns the last element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn pop_ok(&mut self) -> Option<T> {
        self.buf.pop()
    }

    /// Removes and returns the first element, or `None` if empty.
    ///
    /// `O(len)`: the remaining elements shift down by one.
    #[inline]
    #[must_use]
    pub fn poll_ok(&mut self) -> Option<T> {
        if self.buf.is_empty() {
            None
        } else {
            Some(self.buf.remove(0))
        }
    }
}

impl<T: Default> Sequence<T> {
    /// Removes and returns the last element; `T::default()` if empty.
    #[inline]
    pub fn pop(&mut self) -> T {
        self.pop_ok().unwrap_or_default()
    }

    /// [`pop`](Self::pop) plus the post-state length.
    #[inline]
    pub fn pop_length(&mut self) -> (T, usize) {
        let v = self.pop();
        (v, self.len())
    }

    /// Removes and returns the first element; `T::default()` if empty.
    ///
    /// `O(len)`, like [`poll_ok`](Self::poll_ok).
    #[inline]
    pub fn poll(&mut self) -> T {
        self.poll_ok().unwrap_or_default()
    }

    /// [`poll`](Self::poll) plus the post-state length. `O(len)`.
    #[inline]
    pub fn poll_length(&mut self) -> (T, usize) {
        let v = self.poll();
        (v, self.len())
    }
}
