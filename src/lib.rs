// This file is part of fluent-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `fluent-sequence`
//!
//! A `no_std` (with `alloc`), growable, ordered sequence container with a
//! fluent, **non-panicking** API, and **no `unsafe`**.
//!
//! The core type, [`Sequence<T>`], owns its elements in a heap buffer and
//! offers one consistent vocabulary for the list manipulations that otherwise
//! get hand-written over and over: push/pop at either end, delete at an index,
//! in-place slicing, reversal, deduplication, in-place map, and merging with
//! another sequence at either end.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You want stack/queue/list operations that never panic on bad indices.
//! - You like chaining mutations (`s.append([1]).reverse().set()`).
//! - You want the post-state length back from a mutation without a second call.
//!
//! If you need slice-style panicking semantics everywhere, a plain `Vec` is the
//! better fit; [`Sequence`] dereferences to `[T]`, so slice methods are still at
//! hand.
//!
//! ## High-level semantics
//!
//! - Indices are zero-based; `i` is valid iff `i < len`.
//! - No contract operation panics or returns an error:
//!   - shorthand accessors return `T::default()` when out of range
//!     ([`Sequence::fetch`], [`Sequence::pop`], [`Sequence::poll`]);
//!   - "ok" variants return `Option` ([`Sequence::get`], [`Sequence::pop_ok`],
//!     [`Sequence::poll_ok`], [`Sequence::find_index`]);
//!   - [`Sequence::delete`], [`Sequence::replace`], [`Sequence::swap`] and
//!     [`Sequence::insert`] are no-ops on invalid indices;
//!   - [`Sequence::slice`] clamps its range to `[0, len]`.
//! - Opt-in `try_*` methods report *why* an input was rejected with [`Error`].
//! - Indexing (`s[i]`, `s[a..b]`) keeps slice semantics and **panics** out of
//!   range, exactly like built-in slices.
//! - "Length" variants (`append_length`, `prepend_length`, `delete_length`,
//!   `concatenate_length`, `precatenate_length`, `push`, `unshift`,
//!   `pop_length`, `poll_length`, `get_length`, `fetch_length`) return the
//!   post-state length alongside the result of the same operation.
//!
//! Operations needing a capability of `T` only exist when `T` has it:
//! `set`/`contains` need `PartialEq`, `sort`/`minimum`/`maximum` need `Ord`,
//! `sum`/`checked_sum` need `num_traits` addition,
//! default-returning shorthands need `Default`, and borrowing merges need
//! `Clone`. Element types without a total order sort through
//! [`Sequence::sort_by`] with an explicit comparator.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `Sequence<T>` as a plain
//!     sequence.
//!
//! ## Example
//!
//! ```rust
//! use fluent_sequence::seq;
//!
//! let mut s = seq![1, 2, 3, 4, 5];
//! s.append([6, 7, 8]).delete(2);
//! assert_eq!(s.as_slice(), &[1, 2, 4, 5, 6, 7, 8]);
//! assert!(!s.contains(&3));
//! assert_eq!(s.find_index(|v| *v > 4), Some(3));
//!
//! assert_eq!(s.delete_length(100), 7);
//! assert_eq!(s.fetch(100), 0);
//! ```
//!
//! See [`Sequence`] for the full operation list.

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
mod macros;
#[cfg(feature = "serde")]
mod serde;
mod sequence;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use sequence::Sequence;
