// This file is part of alloc-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw storage for [`List`](crate::List).
//!
//! `RawBuf<T, A>` owns a block of `cap` uninitialized slots together with the
//! allocator that produced it. It never reads, writes or drops a `T`; tracking
//! which slots are live is the owner's job.
//!
//! Invariants:
//! - `cap == 0` means no block is owned and `ptr` is dangling.
//! - `cap > 0` means `ptr` came from `alloc.allocate(Layout::array::<T>(cap))`,
//!   unless that layout is zero-sized, in which case the allocator was never
//!   called and `ptr` is dangling.

// Crate imports
use crate::error::Error;

// Core imports
use core::{alloc::Layout, marker::PhantomData, ptr, ptr::NonNull};

// External imports - allocator-api2
use allocator_api2::alloc::Allocator;

pub(crate) struct RawBuf<T, A: Allocator> {
    ptr: NonNull<T>,
    cap: usize,
    alloc: A,
    _owns: PhantomData<T>,
}

// SAFETY: `RawBuf` uniquely owns its block, like `Box<[MaybeUninit<T>], A>`.
unsafe impl<T: Send, A: Allocator + Send> Send for RawBuf<T, A> {}
// SAFETY: shared access only hands out `*mut T` to the owning `List`, which
// requires `&mut` for any write.
unsafe impl<T: Sync, A: Allocator + Sync> Sync for RawBuf<T, A> {}

impl<T, A: Allocator> RawBuf<T, A> {
    #[inline]
    pub(crate) const fn new_in(alloc: A) -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            alloc,
            _owns: PhantomData,
        }
    }

    pub(crate) fn with_capacity_in(cap: usize, alloc: A) -> Result<Self, Error> {
        let mut buf = Self::new_in(alloc);
        if cap > 0 {
            buf.ptr = buf.allocate_block(cap)?;
            buf.cap = cap;
        }
        Ok(buf)
    }

    #[inline]
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) fn allocator(&self) -> &A {
        &self.alloc
    }

    fn allocate_block(&self, cap: usize) -> Result<NonNull<T>, Error> {
        let layout = Layout::array::<T>(cap).map_err(|_| Error::CapacityOverflow)?;
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }
        match self.alloc.allocate(layout) {
            Ok(block) => Ok(block.cast()),
            Err(_) => {
                log::debug!("allocator refused {} bytes for {cap} slots", layout.size());
                Err(Error::AllocFailed { layout })
            }
        }
    }

    /// Hands `ptr` back to the allocator.
    ///
    /// # Safety
    ///
    /// `ptr` and `cap` must describe a block previously produced by
    /// [`allocate_block`](Self::allocate_block) on this buffer and not yet
    /// released.
    unsafe fn release_block(&self, ptr: NonNull<T>, cap: usize) {
        if cap == 0 {
            return;
        }
        let Ok(layout) = Layout::array::<T>(cap) else {
            return;
        };
        if layout.size() != 0 {
            log::trace!("releasing block of {cap} slots");
            // SAFETY: caller guarantees the block came from `self.alloc` with
            // exactly this layout.
            unsafe { self.alloc.deallocate(ptr.cast(), layout) };
        }
    }

    /// Moves the first `live` slots into a fresh block of `new_cap` slots and
    /// releases the old block.
    ///
    /// The new block is obtained before anything else happens, so on error
    /// the buffer is untouched.
    ///
    /// # Safety
    ///
    /// `live <= self.capacity()` and `live <= new_cap`. Slots `[0, live)` must
    /// be initialized; afterwards they live in the new block and the old
    /// copies must not be used.
    pub(crate) unsafe fn relocate(&mut self, live: usize, new_cap: usize) -> Result<(), Error> {
        debug_assert!(live <= self.cap, "relocating more slots than owned");
        debug_assert!(live <= new_cap, "relocation target too small");

        let new_ptr = self.allocate_block(new_cap)?;
        // SAFETY: both blocks hold at least `live` slots and are distinct
        // allocations (or `live` elements of a zero-sized type).
        unsafe { ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), live) };

        let (old_ptr, old_cap) = (self.ptr, self.cap);
        self.ptr = new_ptr;
        self.cap = new_cap;
        log::trace!("relocated {live} elements: capacity {old_cap} -> {new_cap}");

        // SAFETY: the old block was owned by this buffer and is no longer referenced.
        unsafe { self.release_block(old_ptr, old_cap) };
        Ok(())
    }
}

impl<T, A: Allocator> Drop for RawBuf<T, A> {
    fn drop(&mut self) {
        // SAFETY: `ptr`/`cap` always describe the block this buffer owns.
        unsafe { self.release_block(self.ptr, self.cap) };
    }
}
