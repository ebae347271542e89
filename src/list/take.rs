// This file is part of alloc-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::list::List;

// Core imports
use core::mem;

// External imports - allocator-api2
use allocator_api2::alloc::Allocator;

impl<T, A: Allocator> List<T, A> {
    /// Moves the whole list out, leaving `self` empty with no block and a
    /// default allocator.
    ///
    /// O(1): the block, capacity, count and allocator change hands; no
    /// element is touched.
    #[inline]
    pub fn take(&mut self) -> Self
    where
        A: Default,
    {
        mem::replace(self, Self::new_in(A::default()))
    }

    /// Replaces the contents of `self` with those of `source` and leaves
    /// `source` empty.
    ///
    /// What `self` held before is dropped.
    #[inline]
    pub fn move_assign(&mut self, source: &mut Self)
    where
        A: Default,
    {
        let mut incoming = source.take();
        self.swap_with(&mut incoming);
    }

    /// Exchanges block, capacity, count and allocator with `other`.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}
