// This file is part of alloc-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::List};

// External imports - allocator-api2
use allocator_api2::alloc::Allocator;

impl<T, A: Allocator> Extend<T> for List<T, A> {
    /// Appends every item, reserving the iterator's lower size bound up front.
    ///
    /// Diverges through `handle_alloc_error` if the allocator refuses.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower).unwrap_or_else(|e| e.raise());
        for item in iter {
            self.add(item).unwrap_or_else(|e| e.raise());
        }
    }
}

impl<'a, T: Clone + 'a, A: Allocator> Extend<&'a T> for List<T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T: Clone, A: Allocator> List<T, A> {
    /// Appends clones of `src`. Capacity is secured first, so on error the
    /// list is unchanged.
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error> {
        self.reserve(src.len())?;
        for item in src {
            // SAFETY: `reserve` guaranteed room for all of `src`.
            unsafe { self.write_next(item.clone()) };
        }
        Ok(())
    }
}
