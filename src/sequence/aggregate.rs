// This file is part of fluent-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Folds over whole sequences: nested flattening and numeric aggregates.

// Crate imports
use crate::sequence::Sequence;

// External imports - num-traits
use num_traits::{CheckedAdd, WrappingAdd, Zero};

impl<T> Sequence<Sequence<T>> {
    /// Concatenates the inner sequences, in order, into one sequence.
    ///
    /// ```
    /// # use fluent_sequence::seq;
    /// let nested = seq![seq![1, 2], seq![], seq![3]];
    /// assert_eq!(nested.flatten().as_slice(), &[1, 2, 3]);
    /// ```
    pub fn flatten(self) -> Sequence<T> {
        let total = self.fold(0, |n, _, inner| n + inner.len());
        let mut out = Sequence::with_capacity(total);
        for inner in self {
            out.concatenate_owned(inner);
        }
        out
    }
}

impl<T: WrappingAdd + Zero> Sequence<T> {
    /// Sum of all elements; zero for an empty sequence.
    ///
    /// Integer overflow wraps around the type's range instead of panicking.
    /// Use [`checked_sum`](Self::checked_sum) to detect it.
    ///
    /// ```
    /// # use fluent_sequence::seq;
    /// assert_eq!(seq![1, 2, 3].sum(), 6);
    /// assert_eq!(seq![i32::MAX, 1].sum(), i32::MIN);
    /// ```
    pub fn sum(&self) -> T {
        self.fold(T::zero(), |acc, _, x| acc.wrapping_add(x))
    }
}

impl<T: CheckedAdd + Zero> Sequence<T> {
    /// Sum of all elements, or `None` if any partial sum overflows.
    ///
    /// ```
    /// # use fluent_sequence::seq;
    /// assert_eq!(seq![1u8, 2].checked_sum(), Some(3));
    /// assert_eq!(seq![255u8, 1].checked_sum(), None);
    /// ```
    pub fn checked_sum(&self) -> Option<T> {
        self.buf.iter().try_fold(T::zero(), |acc, x| acc.checked_add(x))
    }
}

impl<T: Ord + Clone> Sequence<T> {
    /// Smallest element, or `None` if empty. Ties keep the earliest.
    pub fn minimum(&self) -> Option<T> {
        let mut best: Option<&T> = None;
        self.each(|_, x| {
            if best.is_none_or(|b| x < b) {
                best = Some(x);
            }
        });
        best.cloned()
    }

    /// Largest element, or `None` if empty. Ties keep the earliest.
    pub fn maximum(&self) -> Option<T> {
        let mut best: Option<&T> = None;
        self.each(|_, x| {
            if best.is_none_or(|b| x > b) {
                best = Some(x);
            }
        });
        best.cloned()
    }
}
