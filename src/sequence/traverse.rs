// This file is part of fluent-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Callback traversals and in-place mapping.
//!
//! Every callback receives `(index, &element)`, or `(index, &mut element)` for
//! [`each_mut`](Sequence::each_mut) and
//! [`each_reverse_mut`](Sequence::each_reverse_mut). Element rewrites during a
//! walk go through those two or through [`map`](Sequence::map). Traversals
//! hold a borrow of the sequence, so the length cannot change while one is
//! running.

// Crate imports
use crate::sequence::Sequence;

impl<T> Sequence<T> {
    /// Calls `f` on every element, front to back.
    #[inline]
    pub fn each<'a, F: FnMut(usize, &'a T)>(&'a self, mut f: F) -> &'a Self {
        for (i, x) in self.buf.iter().enumerate() {
            f(i, x);
        }
        self
    }

    /// Calls `f` on every element, back to front.
    ///
    /// Indices still refer to positions in the sequence, so the first call
    /// receives `len - 1`.
    #[inline]
    pub fn each_reverse<'a, F: FnMut(usize, &'a T)>(&'a self, mut f: F) -> &'a Self {
        for (i, x) in self.buf.iter().enumerate().rev() {
            f(i, x);
        }
        self
    }

    /// Calls `f` front to back until it returns `false`.
    ///
    /// ```
    /// # use fluent_sequence::seq;
    /// let mut visited = 0;
    /// seq![1, 2, 3, 4, 5].each_break(|_, _| {
    ///     visited += 1;
    ///     false
    /// });
    /// assert_eq!(visited, 1);
    /// ```
    #[inline]
    pub fn each_break<'a, F: FnMut(usize, &'a T) -> bool>(&'a self, mut f: F) -> &'a Self {
        for (i, x) in self.buf.iter().enumerate() {
            if !f(i, x) {
                break;
            }
        }
        self
    }

    /// Calls `f` back to front until it returns `false`.
    #[inline]
    pub fn each_reverse_break<'a, F: FnMut(usize, &'a T) -> bool>(
        &'a self,
        mut f: F,
    ) -> &'a Self {
        for (i, x) in self.buf.iter().enumerate().rev() {
            if !f(i, x) {
                break;
            }
        }
        self
    }

    /// Calls `f` on every element front to back, with write access to it.
    ///
    /// ```
    /// # use fluent_sequence::seq;
    /// let mut s = seq![1, 2, 3, 4];
    /// s.each_mut(|i, x| {
    ///     if i % 2 == 1 {
    ///         *x = 0;
    ///     }
    /// });
    /// assert_eq!(s.as_slice(), &[1, 0, 3, 0]);
    /// ```
    #[inline]
    pub fn each_mut<F: FnMut(usize, &mut T)>(&mut self, mut f: F) -> &mut Self {
        for (i, x) in self.buf.iter_mut().enumerate() {
            f(i, x);
        }
        self
    }

    /// Back-to-front [`each_mut`](Self::each_mut).
    #[inline]
    pub fn each_reverse_mut<F: FnMut(usize, &mut T)>(&mut self, mut f: F) -> &mut Self {
        for (i, x) in self.buf.iter_mut().enumerate().rev() {
            f(i, x);
        }
        self
    }

    /// Folds every element into an accumulator, front to back.
    #[inline]
    pub fn fold<B, F: FnMut(B, usize, &T) -> B>(&self, init: B, mut f: F) -> B {
        let mut acc = init;
        for (i, x) in self.buf.iter().enumerate() {
            acc = f(acc, i, x);
        }
        acc
    }

    /// Replaces every element with `f(index, &element)`. Length and order are
    /// preserved.
    ///
    /// ```
    /// # use fluent_sequence::seq;
    /// let mut s = seq![1, 2, 3];
    /// s.map(|i, x| x * 10 + i as i32);
    /// assert_eq!(s.as_slice(), &[10, 21, 32]);
    /// ```
    #[inline]
    pub fn map<F: FnMut(usize, &T) -> T>(&mut self, mut f: F) -> &mut Self {
        for (i, x) in self.buf.iter_mut().enumerate() {
            *x = f(i, x);
        }
        self
    }
}
