// This file is part of fluent-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error type for the fallible `try_*` methods of [`Sequence`](crate::Sequence).
//!
//! The main API never fails: out-of-range input produces a default value, a
//! `None`, or a no-op. These errors are only returned by the opt-in `try_*`
//! counterparts, for callers that want the reason spelled out.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by the `try_*` operations on [`Sequence`](crate::Sequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An index was outside `0..len`.
    OutOfBounds,
    /// A range had `start > end` or `end > len`.
    ///
    /// Used by [`Sequence::try_slice`](crate::Sequence::try_slice).
    InvalidRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("index out of bounds"),
            Self::InvalidRange => f.write_str("invalid range"),
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::OutOfBounds);
        assert!(s.contains("out of bounds"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(Error::OutOfBounds.to_string(), "index out of bounds");
        assert_eq!(Error::InvalidRange.to_string(), "invalid range");
    }
}
