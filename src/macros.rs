// This file is part of fluent-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Creates a [`Sequence`](crate::Sequence) from a list of elements or from a
/// repeated element.
///
/// ```rust
/// # use fluent_sequence::{Sequence, seq};
/// let a = seq![1, 2, 3];
/// assert_eq!(a.as_slice(), &[1, 2, 3]);
///
/// let b = seq![0u8; 4];
/// assert_eq!(b.as_slice(), &[0, 0, 0, 0]);
///
/// let c: Sequence<i32> = seq![];
/// assert!(c.is_empty());
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Sequence::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::Sequence::from_elements(::core::iter::repeat_n($elem, $n))
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Sequence::from_elements([$($x),+])
    };
}
