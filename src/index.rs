// This file is part of alloc-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`List`](crate::List).
//!
//! `list[i]` and `list[range]` are the fast path and behave exactly like
//! slice indexing over the live prefix `[0, count)`: out-of-bounds indices and
//! inverted ranges panic. [`List::get`](crate::List::get) is the checked
//! variant that reports [`Error::OutOfRange`](crate::Error::OutOfRange)
//! instead, and `get_unchecked` (through `Deref<Target = [T]>`) skips the
//! check entirely.

// Crate imports
use crate::list::List;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

// External imports - allocator-api2
use allocator_api2::alloc::Allocator;

impl<T, I: SliceIndex<[T]>, A: Allocator> Index<I> for List<T, A> {
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>, A: Allocator> IndexMut<I> for List<T, A> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
