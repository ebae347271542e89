// This file is part of alloc-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property tests: `List` against a `Vec` model, with element and allocator
//! bookkeeping checked after every run.

// Imports
use crate::{
    list::List,
    testing::{Census, CountingAlloc},
    Error,
};
use proptest::prelude::*;
use std::vec::Vec;

#[derive(Debug, Clone)]
enum Op {
    Add(i32),
    RemoveAt(usize),
    Remove(i32),
    RemoveIfDivisible(i32),
    SetCapacity(usize),
    ShrinkToFit,
    Clear,
    Pop,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(|v| Op::Add(v % 8)),
        1 => (0usize..24).prop_map(Op::RemoveAt),
        1 => (0i32..8).prop_map(Op::Remove),
        1 => (1i32..5).prop_map(Op::RemoveIfDivisible),
        1 => (0usize..40).prop_map(Op::SetCapacity),
        1 => Just(Op::ShrinkToFit),
        1 => Just(Op::Clear),
        1 => Just(Op::Pop),
    ]
}

proptest! {
    #[test]
    fn adds_keep_count_and_order(values in proptest::collection::vec(any::<i64>(), 0..200)) {
        let mut list: List<i64> = List::new();
        for v in &values {
            list.add(*v).unwrap();
        }
        prop_assert_eq!(list.count(), values.len());
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(list[i], *v);
        }
        let expected_cap = if values.is_empty() { 0 } else { values.len().next_power_of_two() };
        prop_assert_eq!(list.capacity(), expected_cap);
    }

    #[test]
    fn sequential_adds_are_amortized(n in 1usize..2000) {
        let alloc = CountingAlloc::default();
        let mut list = List::new_in(alloc.clone());
        for i in 0..n {
            list.add(i as u32).unwrap();
        }
        // Blocks of 1, 2, 4, ..., cap: one allocation per doubling, and the
        // slots ever allocated (an upper bound on relocations) stay under 4n.
        let doublings = usize::BITS - (n - 1).leading_zeros();
        prop_assert!(alloc.allocs() <= doublings as usize + 1);
        prop_assert!(alloc.total_bytes() / 4 < 4 * n);
    }

    #[test]
    fn ops_match_vec_model(ops in proptest::collection::vec(op(), 0..120)) {
        let census = Census::default();
        let alloc = CountingAlloc::default();
        {
            let mut list = List::new_in(alloc.clone());
            let mut model: Vec<i32> = Vec::new();
            for op in ops {
                let cap_before = list.capacity();
                let may_shrink = matches!(op, Op::ShrinkToFit);
                match op {
                    Op::Add(v) => {
                        list.add(census.make(v)).unwrap();
                        model.push(v);
                    }
                    Op::RemoveAt(i) => match list.remove_at(i) {
                        Ok(t) => prop_assert_eq!(t.value, model.remove(i)),
                        Err(e) => {
                            prop_assert!(i >= model.len());
                            prop_assert_eq!(e, Error::OutOfRange { index: i, count: model.len() });
                        }
                    },
                    Op::Remove(v) => {
                        let removed = list.remove(&census.make(v));
                        let pos = model.iter().position(|x| *x == v);
                        prop_assert_eq!(removed, pos.is_some());
                        if let Some(p) = pos {
                            model.remove(p);
                        }
                    }
                    Op::RemoveIfDivisible(d) => {
                        let before = model.len();
                        model.retain(|x| x % d != 0);
                        prop_assert_eq!(list.remove_if(|t| t.value % d == 0), before - model.len());
                    }
                    Op::SetCapacity(n) => {
                        list.set_capacity(n).unwrap();
                        prop_assert_eq!(list.capacity(), cap_before.max(n));
                    }
                    Op::ShrinkToFit => {
                        list.shrink_to_fit().unwrap();
                        prop_assert_eq!(list.capacity(), list.count());
                    }
                    Op::Clear => {
                        list.clear();
                        model.clear();
                        prop_assert_eq!(list.capacity(), cap_before);
                    }
                    Op::Pop => {
                        prop_assert_eq!(list.pop().map(|t| t.value), model.pop());
                    }
                }
                if !may_shrink {
                    prop_assert!(list.capacity() >= cap_before);
                }
                let values: Vec<i32> = list.iter().map(|t| t.value).collect();
                prop_assert_eq!(&values, &model);
                prop_assert_eq!(census.live(), model.len() as isize);
            }
        }
        prop_assert_eq!(census.live(), 0);
        prop_assert_eq!(alloc.live_bytes(), 0);
        prop_assert_eq!(alloc.allocs(), alloc.deallocs());
    }

    #[test]
    fn clones_are_independent(
        a_values in proptest::collection::vec(any::<i16>(), 0..50),
        extra in any::<i16>(),
    ) {
        let mut a: List<i16> = a_values.iter().copied().collect();
        let mut b = a.clone();
        prop_assert_eq!(&b, &a);

        b.add(extra).unwrap();
        if !b.is_empty() {
            b[0] = b[0].wrapping_add(1);
        }
        prop_assert_eq!(a.as_slice(), &a_values[..]);

        a.clear();
        prop_assert_eq!(b.count(), a_values.len() + 1);
    }

    #[test]
    fn take_moves_everything(values in proptest::collection::vec(any::<u8>(), 0..50)) {
        let mut a: List<u8> = values.iter().copied().collect();
        let b = a.take();
        prop_assert_eq!(a.count(), 0);
        prop_assert_eq!(a.capacity(), 0);
        prop_assert_eq!(b.as_slice(), &values[..]);
    }
}
