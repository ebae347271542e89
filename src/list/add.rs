// This file is part of alloc-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::List};

// Core imports
use core::ptr;

// External imports - allocator-api2
use allocator_api2::alloc::Allocator;

impl<T, A: Allocator> List<T, A> {
    /// Appends `value`, growing to `max(2 * capacity, 1)` when full.
    ///
    /// On error `value` is dropped and the list is unchanged.
    #[inline]
    pub fn add(&mut self, value: T) -> Result<(), Error> {
        self.grow_if_full()?;
        // SAFETY: `grow_if_full` left at least one free slot.
        unsafe { self.write_next(value) };
        Ok(())
    }

    /// Appends the value produced by `make`, constructing it only once a slot
    /// is secured.
    ///
    /// If growth fails, `make` is never called.
    ///
    /// ```rust
    /// use alloc_list::List;
    ///
    /// struct Point { x: i32, y: i32 }
    ///
    /// let mut points: List<Point> = List::new();
    /// points.add_with(|| Point { x: 1, y: 2 })?;
    /// assert_eq!(points[0].x + points[0].y, 3);
    /// # Ok::<(), alloc_list::Error>(())
    /// ```
    #[inline]
    pub fn add_with<F: FnOnce() -> T>(&mut self, make: F) -> Result<(), Error> {
        self.grow_if_full()?;
        let value = make();
        // SAFETY: `make` cannot touch `self`, so the free slot is still there.
        unsafe { self.write_next(value) };
        Ok(())
    }

    /// Removes and returns the last element, if any.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was the last live slot and is now outside the
        // live prefix, so it is read exactly once.
        Some(unsafe { ptr::read(self.buf.ptr().add(self.len)) })
    }
}
