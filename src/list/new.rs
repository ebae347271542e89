// This file is part of alloc-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::List, raw::RawBuf};

// External imports - allocator-api2
use allocator_api2::alloc::{Allocator, Global};

impl<T> List<T> {
    /// Constructs an empty list on the global allocator.
    ///
    /// Nothing is allocated until the first element is added.
    #[inline]
    pub const fn new() -> Self {
        Self::new_in(Global)
    }

    /// Constructs an empty list with room for `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Self::with_capacity_in(capacity, Global)
    }
}

impl<T, A: Allocator> List<T, A> {
    /// Constructs an empty list that will allocate from `alloc`.
    #[inline]
    pub const fn new_in(alloc: A) -> Self {
        Self {
            buf: RawBuf::new_in(alloc),
            len: 0,
        }
    }

    /// Constructs an empty list with room for `capacity` elements from `alloc`.
    ///
    /// A `capacity` of zero does not allocate.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Result<Self, Error> {
        Ok(Self {
            buf: RawBuf::with_capacity_in(capacity, alloc)?,
            len: 0,
        })
    }
}

impl<T, A: Allocator + Default> Default for List<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}
