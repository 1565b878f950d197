//! Comparison-counting sorting algorithms.
//!
//! Five independent in-place sorts over any `T: Ord` (or an explicit
//! comparator), each returning the exact number of pairwise element
//! comparisons it performed. The counts are deterministic for a given input
//! and are pinned as regression oracles by the integration tests, which makes
//! the crate useful for teaching and for benchmarking comparison cost
//! empirically.
//!
//! Every algorithm mutates the caller's slice into non-decreasing order and
//! returns the count by value; there is no shared or global counter state.

use std::cmp::Ordering;

/// Common interface over the counting sorts, so tests, benches and the demo
/// driver can be generic over the algorithm.
pub trait CountingSort {
    fn name() -> String;

    /// Sorts `v` in place and returns the number of comparisons performed.
    fn sort<T>(v: &mut [T]) -> u64
    where
        T: Ord;

    /// Like [`CountingSort::sort`], with an explicit comparator. Exactly one
    /// comparison is counted per invocation of `compare`.
    fn sort_by<T, F>(v: &mut [T], compare: F) -> u64
    where
        F: FnMut(&T, &T) -> Ordering;
}

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl crate::CountingSort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &mut [T]) -> u64
            where
                T: Ord,
            {
                sort(v)
            }

            #[inline]
            fn sort_by<T, F>(v: &mut [T], compare: F) -> u64
            where
                F: FnMut(&T, &T) -> ::std::cmp::Ordering,
            {
                sort_by(v, compare)
            }
        }
    };
}

pub mod combsort;
pub mod heapsort;
pub mod mergesort;
pub mod patterns;
pub mod quicksort;
pub mod treesort;
pub mod verify;
