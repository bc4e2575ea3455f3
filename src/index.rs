// This file is part of fluent-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`Sequence`](crate::Sequence).
//!
//! `Index` and `IndexMut` accept anything a slice accepts (`usize` and every
//! range form) and keep slice behavior, including panics on out-of-bounds or
//! inverted ranges. The non-panicking accessors are
//! [`get`](crate::Sequence::get), [`fetch`](crate::Sequence::fetch) and
//! [`slice`](crate::Sequence::slice).

// Crate imports
use crate::sequence::Sequence;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>> Index<I> for Sequence<T> {
    type Output = I::Output;
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for Sequence<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
