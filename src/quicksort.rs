//! Recursive quicksort with a first-element pivot.
//!
//! The pivot is never randomized, so already-sorted and descending inputs
//! degenerate to the O(n^2) worst case with O(n) recursion depth. That is
//! deliberate: the reported comparison counts stay reproducible, and the
//! degenerate counts are part of the pinned test oracles.

use std::cmp::Ordering;

sort_impl!("quicksort");

#[inline]
pub fn sort<T>(v: &mut [T]) -> u64
where
    T: Ord,
{
    sort_by(v, |a, b| a.cmp(b))
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F) -> u64
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut comp_count = 0;
    quicksort(v, &mut compare, &mut comp_count);
    comp_count
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn quicksort<T, F>(v: &mut [T], compare: &mut F, comp_count: &mut u64)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() < 2 {
        // Always sorted, and costs zero comparisons.
        return;
    }

    let pivot_pos = partition(v, compare, comp_count);

    quicksort(&mut v[..pivot_pos], compare, comp_count);
    quicksort(&mut v[pivot_pos + 1..], compare, comp_count);
}

/// Partitions `v` around its first element and returns the pivot's final
/// position. Two cursors scan inward from both ends; every cursor-advance
/// probe is counted, including probes against elements equal to the pivot.
fn partition<T, F>(v: &mut [T], compare: &mut F, comp_count: &mut u64) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    // The pivot stays at index 0 until the final swap, so it can be compared
    // against by index while the cursors move elements around it.
    let mut left = 1;
    let mut right = v.len() - 1;

    while left <= right {
        // Advance while elements are <= pivot.
        while left <= right {
            *comp_count += 1;
            if compare(&v[left], &v[0]) == Ordering::Greater {
                break;
            }
            left += 1;
        }

        // Retreat while elements are >= pivot.
        while left <= right {
            *comp_count += 1;
            if compare(&v[right], &v[0]) == Ordering::Less {
                break;
            }
            right -= 1;
        }

        if left < right {
            v.swap(left, right);
            left += 1;
            right -= 1;
        }
    }

    // `right` now rests on the last element <= pivot, which is where the
    // pivot belongs.
    v.swap(0, right);
    right
}
