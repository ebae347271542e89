// This file is part of alloc-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::List};

// External imports - allocator-api2
use allocator_api2::alloc::Allocator;

impl<T, A: Allocator> List<T, A> {
    /// Raises capacity to `new_capacity`; a no-op if it is already at least that.
    ///
    /// Growing allocates a new block, moves every live element into it in
    /// order, and frees the old block. On error the list is unchanged.
    pub fn set_capacity(&mut self, new_capacity: usize) -> Result<(), Error> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        // SAFETY: `len <= capacity < new_capacity` and `[0, len)` is live.
        unsafe { self.buf.relocate(self.len, new_capacity) }
    }

    /// Ensures room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) -> Result<(), Error> {
        let wanted = self
            .len
            .checked_add(additional)
            .ok_or(Error::CapacityOverflow)?;
        self.set_capacity(wanted)
    }

    /// Reallocates so that `capacity == count`; a no-op if that already holds.
    ///
    /// Shrinking an empty list releases its block entirely.
    pub fn shrink_to_fit(&mut self) -> Result<(), Error> {
        if self.capacity() == self.len {
            return Ok(());
        }
        // SAFETY: the target holds exactly the `len` live elements.
        unsafe { self.buf.relocate(self.len, self.len) }
    }

    /// Makes room for one more element, doubling capacity when full.
    pub(crate) fn grow_if_full(&mut self) -> Result<(), Error> {
        if self.len < self.capacity() {
            return Ok(());
        }
        let doubled = self
            .capacity()
            .checked_mul(crate::list::GROWTH_FACTOR)
            .ok_or(Error::CapacityOverflow)?;
        self.set_capacity(doubled.max(crate::list::MIN_CAPACITY))
    }
}
