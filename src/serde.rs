// This file is part of alloc-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`List`](crate::List).
//!
//! - **Serialize**: as a sequence of the live elements, for any allocator.
//! - **Deserialize**: from any sequence, into a list on `A::default()`.
//!   Allocation failure is reported as a deserializer error.

// Crate imports
use crate::list::List;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

// External imports - allocator-api2
use allocator_api2::alloc::Allocator;

/// Upper bound on capacity reserved from an untrusted size hint.
const MAX_PREALLOC: usize = 4096;

impl<T: Serialize, A: Allocator> Serialize for List<T, A> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let mut seq = s.serialize_seq(Some(self.len()))?;
        for item in self.iter() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct ListVisitor<T, A>(PhantomData<(T, A)>);

impl<'de, T, A> de::Visitor<'de> for ListVisitor<T, A>
where
    T: Deserialize<'de>,
    A: Allocator + Default,
{
    type Value = List<T, A>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<S: de::SeqAccess<'de>>(self, mut seq: S) -> Result<Self::Value, S::Error> {
        let mut out = List::<T, A>::default();
        let hint = seq.size_hint().unwrap_or(0).min(MAX_PREALLOC);
        out.reserve(hint).map_err(de::Error::custom)?;
        while let Some(elem) = seq.next_element::<T>()? {
            out.add(elem).map_err(de::Error::custom)?;
        }
        Ok(out)
    }
}

impl<'de, T, A> Deserialize<'de> for List<T, A>
where
    T: Deserialize<'de>,
    A: Allocator + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ListVisitor::<T, A>(PhantomData))
    }
}
