// This file is part of alloc-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for [`List`](crate::List).
//!
//! These errors represent bounds and allocation conditions. They are `Copy`,
//! carry the offending values, and implement `core::error::Error`.

// Core imports
use core::alloc::Layout;

// External imports - thiserror
use thiserror::Error as ThisError;

/// Errors returned by operations on [`List`](crate::List).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
#[non_exhaustive]
pub enum Error {
    /// An index was not below the current count.
    #[error("index {index} out of range for list of count {count}")]
    OutOfRange {
        /// Index that was requested.
        index: usize,
        /// Count of live elements at the time of the request.
        count: usize,
    },
    /// The requested capacity does not fit in the address space.
    #[error("capacity overflow")]
    CapacityOverflow,
    /// The allocator could not provide a block for `layout`.
    #[error("memory allocation of {} bytes failed", .layout.size())]
    AllocFailed {
        /// Layout of the block that was requested.
        layout: Layout,
    },
}

impl Error {
    /// Diverges the way `Vec` does for infallible entry points.
    #[cold]
    #[inline(never)]
    pub(crate) fn raise(self) -> ! {
        match self {
            Self::AllocFailed { layout } => alloc::alloc::handle_alloc_error(layout),
            other => panic!("{other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use core::alloc::Layout;
    use core::error::Error as CoreError;
    use std::string::{String, ToString};

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::OutOfRange { index: 7, count: 3 });
        assert!(s.contains("out of range"));
    }

    #[test]
    fn test_messages_carry_values() {
        assert_eq!(
            Error::OutOfRange { index: 10, count: 4 }.to_string(),
            "index 10 out of range for list of count 4"
        );
        assert_eq!(Error::CapacityOverflow.to_string(), "capacity overflow");

        let layout = Layout::array::<u32>(4).unwrap();
        assert_eq!(
            Error::AllocFailed { layout }.to_string(),
            "memory allocation of 16 bytes failed"
        );
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_raise_panics_on_overflow() {
        Error::CapacityOverflow.raise();
    }
}
