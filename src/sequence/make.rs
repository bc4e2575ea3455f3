// This file is part of fluent-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::sequence::Sequence;

impl<T: Default> Sequence<T> {
    /// Resets the sequence to exactly `len` default elements.
    #[inline]
    pub fn make(&mut self, len: usize) -> &mut Self {
        self.buf.clear();
        self.buf.resize_with(len, T::default);
        self
    }
}

impl<T> Sequence<T> {
    /// Resets the sequence to hold `items` in iteration order.
    #[inline]
    pub fn make_each<I: IntoIterator<Item = T>>(&mut self, items: I) -> &mut Self {
        self.buf.clear();
        self.append(items)
    }

    /// Resets the sequence to hold `items` in reverse iteration order.
    ///
    /// ```
    /// # use fluent_sequence::Sequence;
    /// let mut s = Sequence::new();
    /// s.make_each_reverse([1, 2, 3]);
    /// assert_eq!(s.as_slice(), &[3, 2, 1]);
    /// ```
    #[inline]
    pub fn make_each_reverse<I: IntoIterator<Item = T>>(&mut self, items: I) -> &mut Self {
        self.make_each(items).reverse()
    }
}
