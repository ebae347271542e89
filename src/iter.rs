// This file is part of alloc-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`List`](crate::List).
//!
//! - `IntoIter<T, A>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`. It owns the list's block and
//!   frees it on drop, together with any element not yet yielded.
//! - `&List` and `&mut List` iterate as slices.

// Crate imports
use crate::{list::List, raw::RawBuf};

// Core imports
use core::{fmt, iter::FusedIterator, mem::ManuallyDrop, ptr, slice};

// External imports - allocator-api2
use allocator_api2::alloc::{Allocator, Global};

/// Owned iterator returned by `List::into_iter()`.
///
/// Slots `[front, back)` are still live; everything else in the block has
/// already been yielded.
pub struct IntoIter<T, A: Allocator = Global> {
    buf: RawBuf<T, A>,
    front: usize,
    back: usize, // exclusive
}

impl<T, A: Allocator> IntoIter<T, A> {
    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` is live and inside the block.
        unsafe { slice::from_raw_parts(self.buf.ptr().add(self.front), self.back - self.front) }
    }

    /// Returns the elements not yet yielded, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above, with exclusive access.
        unsafe {
            slice::from_raw_parts_mut(self.buf.ptr().add(self.front), self.back - self.front)
        }
    }
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let i = self.front;
        self.front += 1;
        // SAFETY: slot `i` was live and is now outside `[front, back)`.
        Some(unsafe { ptr::read(self.buf.ptr().add(i)) })
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: slot `back` was live and is now outside `[front, back)`.
        Some(unsafe { ptr::read(self.buf.ptr().add(self.back)) })
    }
}
impl<T, A: Allocator> FusedIterator for IntoIter<T, A> {}
impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {}

impl<T, A: Allocator> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        // SAFETY: the remaining slots are live and dropped exactly once here;
        // `buf` frees the block afterwards.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a List<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<'a, T, A: Allocator> IntoIterator for &'a mut List<T, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
impl<T, A: Allocator> IntoIterator for List<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;
    fn into_iter(self) -> Self::IntoIter {
        // The list must not run its own `Drop`: ownership of every live slot
        // and of the block passes to the iterator.
        let list = ManuallyDrop::new(self);
        // SAFETY: `list` is never used or dropped again, so `buf` is moved
        // out exactly once.
        let buf = unsafe { ptr::read(&list.buf) };
        IntoIter {
            buf,
            front: 0,
            back: list.len,
        }
    }
}

impl<T, A: Allocator + Default> FromIterator<T> for List<T, A> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::default();
        list.extend(iter);
        list
    }
}
