// This file is part of alloc-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test doubles shared by the unit tests: an element that counts live
//! instances and a stateful allocator that counts (and can refuse) requests.

// Core imports
use core::{alloc::Layout, cell::Cell, ptr::NonNull};

// Std imports
use std::rc::Rc;

// External imports - allocator-api2
use allocator_api2::alloc::{AllocError, Allocator, Global};

/// Shared tally of live [`Tracked`] instances.
///
/// Goes negative on a double drop and stays positive on a leak.
#[derive(Clone, Default)]
pub(crate) struct Census(Rc<Cell<isize>>);

impl Census {
    pub(crate) fn live(&self) -> isize {
        self.0.get()
    }

    pub(crate) fn make(&self, value: i32) -> Tracked {
        self.0.set(self.0.get() + 1);
        Tracked {
            value,
            census: self.clone(),
            panic_on_clone: false,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Tracked {
    pub(crate) value: i32,
    census: Census,
    pub(crate) panic_on_clone: bool,
}

impl core::fmt::Debug for Census {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Census({})", self.live())
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        if self.panic_on_clone {
            panic!("clone of {} refused", self.value);
        }
        self.census.make(self.value)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.census.0.set(self.census.0.get() - 1);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

#[derive(Default)]
struct AllocStats {
    allocs: Cell<usize>,
    deallocs: Cell<usize>,
    live_bytes: Cell<isize>,
    total_bytes: Cell<usize>,
    fail_after: Cell<Option<usize>>,
}

/// Stateful allocator backed by [`Global`] that records every request.
///
/// Clones share the same statistics.
#[derive(Clone, Default)]
pub(crate) struct CountingAlloc {
    stats: Rc<AllocStats>,
}

impl CountingAlloc {
    /// An allocator that grants `n` requests and refuses every later one.
    pub(crate) fn failing_after(n: usize) -> Self {
        let alloc = Self::default();
        alloc.fail_after(n);
        alloc
    }

    pub(crate) fn fail_after(&self, n: usize) {
        self.stats.fail_after.set(Some(self.allocs() + n));
    }

    pub(crate) fn allocs(&self) -> usize {
        self.stats.allocs.get()
    }

    pub(crate) fn deallocs(&self) -> usize {
        self.stats.deallocs.get()
    }

    pub(crate) fn live_bytes(&self) -> isize {
        self.stats.live_bytes.get()
    }

    pub(crate) fn total_bytes(&self) -> usize {
        self.stats.total_bytes.get()
    }
}

unsafe impl Allocator for CountingAlloc {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        if let Some(limit) = self.stats.fail_after.get() {
            if self.allocs() >= limit {
                return Err(AllocError);
            }
        }
        let block = Global.allocate(layout)?;
        let s = &self.stats;
        s.allocs.set(s.allocs.get() + 1);
        s.live_bytes.set(s.live_bytes.get() + layout.size() as isize);
        s.total_bytes.set(s.total_bytes.get() + layout.size());
        Ok(block)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        let s = &self.stats;
        s.deallocs.set(s.deallocs.get() + 1);
        s.live_bytes.set(s.live_bytes.get() - layout.size() as isize);
        // SAFETY: every block handed out above came from `Global` with this layout.
        unsafe { Global.deallocate(ptr, layout) }
    }
}
