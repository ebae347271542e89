// This file is part of alloc-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::List};

// External imports - allocator-api2
use allocator_api2::alloc::Allocator;

impl<T, A: Allocator + Default, const N: usize> From<[T; N]> for List<T, A> {
    /// Builds a list with capacity exactly `N`.
    fn from(src: [T; N]) -> Self {
        let mut list =
            Self::with_capacity_in(N, A::default()).unwrap_or_else(|e| e.raise());
        for item in src {
            // SAFETY: capacity is `N` and exactly `N` items are written.
            unsafe { list.write_next(item) };
        }
        list
    }
}

impl<T: Clone, A: Allocator + Default> TryFrom<&[T]> for List<T, A> {
    type Error = Error;

    fn try_from(src: &[T]) -> Result<Self, Error> {
        let mut list = Self::with_capacity_in(src.len(), A::default())?;
        list.extend_from_slice(src)?;
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{list::List, testing::Census};

    #[test]
    fn test_from_array_exact_capacity() {
        let list: List<u8> = [1, 2, 3].into();
        assert_eq!(list, [1, 2, 3]);
        assert_eq!(list.capacity(), 3);

        let empty: List<u8> = [].into();
        assert_eq!(empty.capacity(), 0);
    }

    #[test]
    fn test_from_array_moves_elements() {
        let census = Census::default();
        let list: List<_> = [census.make(1), census.make(2)].into();
        assert_eq!(census.live(), 2);
        drop(list);
        assert_eq!(census.live(), 0);
    }

    #[test]
    fn test_try_from_slice() {
        let list = List::<i32>::try_from(&[4, 5, 6][..]).unwrap();
        assert_eq!(list, [4, 5, 6]);
        assert_eq!(list.capacity(), 3);
    }
}
