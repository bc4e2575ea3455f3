// This file is part of fluent-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `Sequence` type and its inherent API.
//!
//! `Sequence<T>` is a growable, ordered container over a `Vec<T>`. The
//! operations are split by concern into submodules; this file holds the type,
//! its read-only accessors and its trait impls.

mod aggregate;
mod ends;
mod find;
mod make;
mod merge;
mod new;
mod remove;
mod reorder;
mod slice;
mod traverse;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

// Alloc imports
use alloc::vec::Vec;

/// A growable, ordered sequence with a fluent, non-panicking API.
///
/// `Sequence<T>` exclusively owns its elements and tracks them in insertion
/// order, as modified by the explicit reordering operations.
///
/// # Operation groups
///
/// - **Construction**: [`new`](Sequence::new),
///   [`from_elements`](Sequence::from_elements), [`seq!`](crate::seq),
///   `From<Vec<T>>`, `From<[T; N]>`, `FromIterator`.
/// - **Accessors**: [`len`](Sequence::len), [`bounds`](Sequence::bounds),
///   [`get`](Sequence::get), [`get_length`](Sequence::get_length),
///   [`fetch`](Sequence::fetch), [`fetch_length`](Sequence::fetch_length).
/// - **End mutations**: [`append`](Sequence::append),
///   [`prepend`](Sequence::prepend), [`push`](Sequence::push),
///   [`unshift`](Sequence::unshift), [`pop`](Sequence::pop) /
///   [`pop_ok`](Sequence::pop_ok) / [`pop_length`](Sequence::pop_length),
///   [`poll`](Sequence::poll) / [`poll_ok`](Sequence::poll_ok) /
///   [`poll_length`](Sequence::poll_length).
/// - **Random access**: [`replace`](Sequence::replace),
///   [`delete`](Sequence::delete), [`insert`](Sequence::insert),
///   [`swap`](Sequence::swap), [`slice`](Sequence::slice).
/// - **Bulk construction**: [`make`](Sequence::make),
///   [`make_each`](Sequence::make_each),
///   [`make_each_reverse`](Sequence::make_each_reverse).
/// - **Merging**: [`concatenate`](Sequence::concatenate),
///   [`precatenate`](Sequence::precatenate).
/// - **Reordering**: [`set`](Sequence::set), [`sort`](Sequence::sort),
///   [`sort_by`](Sequence::sort_by), [`reverse`](Sequence::reverse).
/// - **Traversal**: [`each`](Sequence::each),
///   [`each_reverse`](Sequence::each_reverse),
///   [`each_break`](Sequence::each_break),
///   [`each_reverse_break`](Sequence::each_reverse_break),
///   [`map`](Sequence::map), [`fold`](Sequence::fold).
/// - **Search**: [`contains`](Sequence::contains),
///   [`find_index`](Sequence::find_index), [`find`](Sequence::find).
///
/// Mutators that return `&mut Self` can be chained; their `*_length`
/// companions run the same operation and return the new length instead.
///
/// # Failure semantics
///
/// Out-of-range input never panics through the methods above. Shorthand
/// accessors return `T::default()`, `*_ok` accessors return `None`, and
/// index-based mutators leave the sequence unchanged. Only `Index`/`IndexMut`
/// (`s[i]`) keep slice panics.
///
/// # Examples
///
/// ```rust
/// use fluent_sequence::seq;
///
/// let mut s = seq![1, 2, 3];
/// s.concatenate(&seq![4, 5]).precatenate(&seq![-1, 0]).reverse();
/// assert_eq!(s.as_slice(), &[5, 4, 3, 2, 1, 0, -1]);
///
/// assert_eq!(s.pop(), -1);
/// assert_eq!(s.poll_length(), (5, 5));
///
/// let mut empty = seq![0u32; 0];
/// assert_eq!(empty.pop(), 0);
/// assert_eq!(empty.pop_ok(), None);
/// ```
#[derive(Clone)]
pub struct Sequence<T> {
    pub(crate) buf: Vec<T>,
}

impl<T> Sequence<T> {
    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if there are no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns `true` iff `index < len`.
    #[inline]
    pub fn bounds(&self, index: usize) -> bool {
        index < self.buf.len()
    }

    /// Returns `Some(&T)` if `index < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.buf.get(index)
    }

    /// Returns `Some(&mut T)` if `index < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.buf.get_mut(index)
    }

    /// [`get`](Self::get) plus the current length.
    #[inline]
    pub fn get_length(&self, index: usize) -> (Option<&T>, usize) {
        (self.get(index), self.len())
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.buf.iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.buf.iter_mut()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.buf.first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.buf.last()
    }
}

impl<T: Clone + Default> Sequence<T> {
    /// Returns a clone of the element at `index`, or `T::default()` when out
    /// of bounds.
    #[inline]
    pub fn fetch(&self, index: usize) -> T {
        self.get(index).cloned().unwrap_or_default()
    }

    /// [`fetch`](Self::fetch) plus the current length.
    #[inline]
    pub fn fetch_length(&self, index: usize) -> (T, usize) {
        (self.fetch(index), self.len())
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("len", &self.len())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for Sequence<T> {}
impl<T: PartialEq<U>, U> PartialEq<[U]> for Sequence<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}
impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Sequence<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == &other[..]
    }
}
impl<T: Ord> Ord for Sequence<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for Sequence<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Deref for Sequence<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for Sequence<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for Sequence<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for Sequence<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for Sequence<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
