// This file is part of alloc-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::list::List;

// External imports - allocator-api2
use allocator_api2::alloc::Allocator;

impl<T, A: Allocator> List<T, A> {
    /// Returns the first element equal to `value`, or `None`.
    #[inline]
    pub fn find(&self, value: &T) -> Option<&T>
    where
        T: PartialEq,
    {
        self.iter().find(|item| *item == value)
    }

    /// Mutable variant of [`find`](List::find).
    #[inline]
    pub fn find_mut(&mut self, value: &T) -> Option<&mut T>
    where
        T: PartialEq,
    {
        self.iter_mut().find(|item| **item == *value)
    }

    /// Returns the first element matching `pred`, or `None`.
    #[inline]
    pub fn find_if<F: FnMut(&T) -> bool>(&self, mut pred: F) -> Option<&T> {
        self.iter().find(|item| pred(*item))
    }

    /// Mutable variant of [`find_if`](List::find_if).
    #[inline]
    pub fn find_if_mut<F: FnMut(&T) -> bool>(&mut self, mut pred: F) -> Option<&mut T> {
        self.iter_mut().find(|item| pred(&**item))
    }

    /// Returns the position of the first element equal to `value`.
    #[inline]
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    /// Returns `true` if some element equals `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(value)
    }
}
