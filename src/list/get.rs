// This file is part of alloc-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::List};

// Core imports
use core::mem;

// External imports - allocator-api2
use allocator_api2::alloc::Allocator;

impl<T, A: Allocator> List<T, A> {
    /// Checked access: [`Error::OutOfRange`] when `index >= count`.
    ///
    /// Use `list[index]` for the panicking fast path.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        let count = self.len;
        self.as_slice()
            .get(index)
            .ok_or(Error::OutOfRange { index, count })
    }

    /// Checked mutable access: [`Error::OutOfRange`] when `index >= count`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let count = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, count })
    }

    /// Checked assignment: stores `value` at `index` and returns the old value.
    ///
    /// On [`Error::OutOfRange`] `value` is dropped and the list is unchanged.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<T, Error> {
        self.get_mut(index).map(|slot| mem::replace(slot, value))
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }
}
