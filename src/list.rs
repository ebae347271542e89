// This file is part of alloc-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `List` type and its inherent API.
//!
//! `List<T, A>` is a growable, contiguous vector whose storage comes from a
//! pluggable allocator. It keeps a live count separate from the allocated
//! capacity; only the prefix `[0, count)` holds values.

mod add;
mod capacity;
mod extend;
mod find;
mod from;
mod get;
mod new;
mod remove;
mod take;

// Crate imports
use crate::{error::Error, raw::RawBuf};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut, Range},
    ptr, slice,
};

// External imports - allocator-api2
use allocator_api2::alloc::{Allocator, Global};

/// Minimum capacity taken by the first implicit growth.
pub(crate) const MIN_CAPACITY: usize = 1;
/// Factor applied to the capacity when [`List::add`] finds the list full.
pub(crate) const GROWTH_FACTOR: usize = 2;

/// A growable, contiguous list with explicit element lifetimes and a
/// pluggable allocator.
///
/// `List<T, A>` owns one block of `capacity` slots obtained from `A` and
/// tracks a `count` of live elements, `0 <= count <= capacity`. Slots past
/// `count` are raw memory: they are never default-filled and never read.
///
/// # Growth
///
/// When [`add`](List::add) finds the list full, capacity becomes
/// `max(2 * capacity, 1)`. `n` sequential adds from empty therefore perform
/// `O(log n)` allocations and relocate fewer than `2n` elements in total.
/// Capacity only shrinks through [`shrink_to_fit`](List::shrink_to_fit).
///
/// # Errors and allocation failure
///
/// Every operation that may allocate returns `Result<_, Error>`. The new
/// block is always obtained before any existing element moves, so a failed
/// call leaves the list exactly as it was. Trait entry points that cannot
/// return an error ([`Clone`], [`Extend`], [`FromIterator`]) fall back to
/// [`handle_alloc_error`](alloc::alloc::handle_alloc_error), like `Vec`.
///
/// # Invalidation
///
/// Any operation that changes capacity moves every element to a new block.
/// Borrowed references cannot outlive such a call; raw pointers obtained from
/// [`as_ptr`](List::as_ptr) and friends dangle after it.
///
/// # Examples
///
/// ```rust
/// use alloc_list::List;
///
/// let mut list: List<u32> = List::new();
/// list.add(10)?;
/// list.add(20)?;
/// list.add(30)?;
/// assert_eq!(list.count(), 3);
/// assert_eq!(list.capacity(), 4);
///
/// assert_eq!(list.remove_at(1)?, 20);
/// assert_eq!(list.find(&30), Some(&30));
/// assert_eq!(list.to_string(), "(10, 30)");
/// # Ok::<(), alloc_list::Error>(())
/// ```
pub struct List<T, A: Allocator = Global> {
    pub(crate) buf: RawBuf<T, A>,
    pub(crate) len: usize,
}

impl<T, A: Allocator> List<T, A> {
    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn count(&self) -> usize {
        self.len
    }

    /// Alias of [`count`](List::count).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `count == 0`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `capacity - count`, the number of adds that will not reallocate.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.capacity() - self.len
    }

    /// Returns a reference to the allocator.
    #[inline]
    pub fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` is initialized and `len <= capacity`. With no
        // block the pointer is dangling but aligned, which is valid for `len == 0`.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above, and `&mut self` guarantees exclusive access.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Returns a raw pointer to the first slot.
    ///
    /// Only the first `count` slots hold values. The pointer dangles after the
    /// next call that changes capacity.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    /// Returns a mutable raw pointer to the first slot.
    ///
    /// Writing past `count` does not change `count`; such values are never
    /// observed or dropped by the list.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr()
    }

    /// Returns the `[begin, end)` pointer pair over the live elements.
    #[inline]
    pub fn as_ptr_range(&self) -> Range<*const T> {
        self.as_slice().as_ptr_range()
    }

    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Writes `value` into the first free slot.
    ///
    /// # Safety
    ///
    /// `count < capacity` must hold.
    #[inline]
    pub(crate) unsafe fn write_next(&mut self, value: T) {
        debug_assert!(self.len < self.capacity(), "write past capacity");
        // SAFETY: slot `len` is inside the block and uninitialized.
        unsafe { ptr::write(self.buf.ptr().add(self.len), value) };
        self.len += 1;
    }
}

impl<T, A: Allocator> Drop for List<T, A> {
    fn drop(&mut self) {
        // SAFETY: `[0, len)` is live and dropped exactly once here; `RawBuf`
        // frees the block afterwards.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T: Clone, A: Allocator + Clone> List<T, A> {
    /// Fallible deep copy.
    ///
    /// The copy gets a block of the same capacity, a clone of each live
    /// element in order, and a clone of the allocator.
    pub fn try_clone(&self) -> Result<Self, Error> {
        let mut out = Self::with_capacity_in(self.capacity(), self.allocator().clone())?;
        for item in self.iter() {
            // SAFETY: `out` has `self.capacity() >= self.len` slots.
            unsafe { out.write_next(item.clone()) };
        }
        Ok(out)
    }
}

impl<T: Clone, A: Allocator> List<T, A> {
    /// Fallible copy-assignment.
    ///
    /// Replaces the contents of `self` with clones of `source`'s elements.
    /// Capacity grows to at least `source.count()` and never shrinks; the
    /// allocator of `self` is kept. On error `self` is unchanged.
    pub fn try_clone_from<B: Allocator>(&mut self, source: &List<T, B>) -> Result<(), Error> {
        if ptr::addr_eq(self as *const Self, source as *const List<T, B>) {
            return Ok(());
        }
        self.set_capacity(source.len)?;
        self.clear();
        for item in source.iter() {
            // SAFETY: capacity was raised to at least `source.len` above.
            unsafe { self.write_next(item.clone()) };
        }
        Ok(())
    }
}

impl<T: Clone, A: Allocator + Clone> Clone for List<T, A> {
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|e| e.raise())
    }

    fn clone_from(&mut self, source: &Self) {
        self.try_clone_from(source).unwrap_or_else(|e| e.raise())
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for List<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("count", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

/// Renders the live elements as `(a, b, c)`; an empty list renders as `()`.
impl<T: fmt::Display, A: Allocator> fmt::Display for List<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        f.write_str(")")
    }
}

impl<T: PartialEq, A: Allocator, B: Allocator> PartialEq<List<T, B>> for List<T, A> {
    fn eq(&self, other: &List<T, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: PartialEq, A: Allocator> PartialEq<[T]> for List<T, A> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}
impl<T: PartialEq, A: Allocator, const N: usize> PartialEq<[T; N]> for List<T, A> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}
impl<T: Eq, A: Allocator> Eq for List<T, A> {}
impl<T: Ord, A: Allocator> Ord for List<T, A> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd, A: Allocator> PartialOrd for List<T, A> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash, A: Allocator> Hash for List<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, A: Allocator> Deref for List<T, A> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, A: Allocator> DerefMut for List<T, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, A: Allocator> AsRef<[T]> for List<T, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, A: Allocator> AsMut<[T]> for List<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, A: Allocator> Borrow<[T]> for List<T, A> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, A: Allocator> BorrowMut<[T]> for List<T, A> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
