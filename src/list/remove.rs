// This file is part of alloc-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::List};

// Core imports
use core::ptr;

// External imports - allocator-api2
use allocator_api2::alloc::Allocator;

impl<T, A: Allocator> List<T, A> {
    /// Removes and returns the element at `index`, shifting later elements
    /// one slot left.
    ///
    /// Returns [`Error::OutOfRange`] when `index >= count`; the list is then
    /// unchanged. O(count - index).
    pub fn remove_at(&mut self, index: usize) -> Result<T, Error> {
        let len = self.len;
        if index >= len {
            return Err(Error::OutOfRange { index, count: len });
        }
        // SAFETY: `index < len`, so the slot is live. It is read once, then the
        // tail `[index + 1, len)` is moved over it and the count shrinks, so
        // the stale last slot is never read again.
        unsafe {
            let hole = self.buf.ptr().add(index);
            let out = ptr::read(hole);
            ptr::copy(hole.add(1), hole, len - index - 1);
            self.len = len - 1;
            Ok(out)
        }
    }

    /// Removes the first element equal to `value`. Returns whether one was found.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value)
            .is_some_and(|index| self.remove_at(index).is_ok())
    }

    /// Removes every element equal to `value`. Returns how many were removed.
    pub fn remove_all(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.remove_if(|item| item == value)
    }

    /// Removes every element matching `pred` in one pass. Returns how many
    /// were removed.
    ///
    /// Kept elements keep their relative order. `pred` sees each element
    /// exactly once, front to back. If `pred` panics, the list stays valid but
    /// may be reordered.
    pub fn remove_if<F: FnMut(&T) -> bool>(&mut self, mut pred: F) -> usize {
        let Some(mut placer) = self.iter().position(&mut pred) else {
            return 0;
        };
        let len = self.len;
        let slots = self.as_mut_slice();
        for picker in placer + 1..len {
            if !pred(&slots[picker]) {
                slots.swap(placer, picker);
                placer += 1;
            }
        }
        self.truncate(placer);
        len - placer
    }

    /// Drops every element past `len`. A no-op if `len >= count`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let dead = self.len - len;
        // Shrink first: a panicking destructor then leaks instead of double-dropping.
        self.len = len;
        // SAFETY: `[len, len + dead)` was live and is now outside the prefix.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.buf.ptr().add(len), dead);
            ptr::drop_in_place(tail);
        }
    }

    /// Drops every element. Capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }
}
