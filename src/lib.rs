// This file is part of alloc-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `alloc-list`
//!
//! A `no_std`, growable, contiguous list with explicit element lifetimes and a
//! pluggable, possibly stateful allocator.
//!
//! The core type, [`List<T, A>`], owns one block of `capacity` slots obtained
//! from an [`Allocator`] and tracks a `count` of live elements,
//! `0 <= count <= capacity`. Only the prefix `[0, count)` holds values; the
//! rest is raw memory that is never default-filled and never read.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You want `Vec`-like storage on a custom or stateful allocator, on stable
//!   Rust (through the [`allocator_api2`] polyfill).
//! - You want allocation failure reported as a value instead of an abort:
//!   every allocating operation returns `Result<_, Error>`.
//! - You need a container whose reserved capacity is distinguishable from its
//!   contents ([`List::clear`] keeps the block, [`List::shrink_to_fit`] gives
//!   it back).
//!
//! It is not synchronized: share it across threads the way you would share
//! a `Vec`, behind your own lock.
//!
//! ## Lifetimes of elements
//!
//! - Every element is constructed once (by [`List::add`], [`List::add_with`],
//!   cloning, or extending) and dropped once (by removal, [`List::clear`],
//!   [`List::truncate`], or dropping the list).
//! - Growth moves elements bitwise into the new block. No element is cloned
//!   or dropped by a reallocation.
//! - The new block is always obtained before anything moves, so a failed
//!   allocation leaves the list exactly as it was.
//!
//! ## Growth and capacity
//!
//! - [`List::add`] grows a full list to `max(2 * capacity, 1)`.
//! - [`List::set_capacity`] and [`List::reserve`] only ever grow.
//! - [`List::shrink_to_fit`] is the only call that gives memory back.
//!
//! ## Errors
//!
//! - Checked accessors ([`List::get`], [`List::get_mut`], [`List::set`],
//!   [`List::remove_at`]) return [`Error::OutOfRange`] with the index and the
//!   count. Plain indexing (`list[i]`) panics like a slice.
//! - Lookups ([`List::find`], [`List::find_if`], [`List::index_of`]) report
//!   absence with `None`.
//! - Allocation problems surface as [`Error::AllocFailed`] or
//!   [`Error::CapacityOverflow`]. Trait impls that cannot return an error
//!   ([`Clone`], [`Extend`], [`FromIterator`], `From<[T; N]>`) divert to
//!   [`handle_alloc_error`](alloc::alloc::handle_alloc_error) instead.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` for `List<T, A>` and `Deserialize` for
//!     `List<T, A>` where `A: Default`.
//!
//! ## Logging
//!
//! Reallocations and block releases are reported at `trace` level, refused
//! allocations at `debug` level, through the [`log`] facade. Nothing is
//! printed unless the application installs a logger.
//!
//! ## Example
//!
//! ```rust
//! use alloc_list::List;
//!
//! let mut list: List<i32> = List::new();
//! for x in [1, 2, 3, 4, 5] {
//!     list.add(x)?;
//! }
//! assert_eq!(list.remove_if(|x| x % 2 == 0), 2);
//! assert_eq!(list.as_slice(), &[1, 3, 5]);
//!
//! list.clear();
//! assert_eq!(list.count(), 0);
//! assert_eq!(list.capacity(), 8);
//! # Ok::<(), alloc_list::Error>(())
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
mod list;
mod raw;
#[cfg(feature = "serde")]
mod serde;
#[cfg(test)]
mod testing;

#[cfg(test)]
mod proptests;

// Public exports (crate API surface)
pub use allocator_api2::alloc::{AllocError, Allocator, Global};
pub use error::Error;
pub use iter::IntoIter;
pub use list::List;
