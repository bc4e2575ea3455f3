// This file is part of fluent-sequence.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`Sequence`](crate::Sequence).
//!
//! - **Serialize**: as a sequence of `len` elements.
//! - **Deserialize**: from any sequence, in order.
//!
//! Only `T: Serialize` / `T: Deserialize<'de>` is required.

// Crate imports
use crate::sequence::Sequence;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

/// Upper bound on the up-front allocation taken from a deserializer's size hint.
const MAX_PREALLOC: usize = 4096;

impl<T: Serialize> Serialize for Sequence<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct SequenceVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for SequenceVisitor<T> {
    type Value = Sequence<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("array or sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let hint = a.size_hint().unwrap_or(0).min(MAX_PREALLOC);
        let mut out = Sequence::with_capacity(hint);
        while let Some(elem) = a.next_element::<T>()? {
            out.append([elem]);
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Sequence<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(SequenceVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Sequence, seq};
    use alloc::{string::String, vec};

    #[test]
    fn test_serde_roundtrip_json() {
        let s = seq![1, 2, 3];
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "[1,2,3]");
        let back: Sequence<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_serde_roundtrip_empty_json() {
        let s: Sequence<i32> = Sequence::new();
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "[]");
        let back: Sequence<i32> = serde_json::from_str(&json).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_serde_nested_and_owned_elements() {
        let nested = seq![seq![String::from("a")], seq![], seq![String::from("b")]];
        let json = serde_json::to_string(&nested).unwrap();
        assert_eq!(json, r#"[["a"],[],["b"]]"#);
        let back: Sequence<Sequence<String>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.flatten().into_vec(), vec!["a", "b"]);
    }

    #[test]
    fn test_visitor_expecting_message() {
        let err = serde_json::from_str::<Sequence<i32>>(r#"{"not":"an array"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("array or sequence"), "unexpected error message: {msg}");
    }
}
