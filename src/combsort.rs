//! Comb sort, historically also called block sort here: bubble sort over a
//! geometrically shrinking gap.
//!
//! The gap starts at the slice length and shrinks by the fixed factor 1.3
//! each pass, floored at 1. Every scanned pair costs one comparison whether
//! or not it swaps; the sort terminates after a gap-1 pass with no swaps.

use std::cmp::Ordering;

sort_impl!("combsort");

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
    let len = v.len();
    let mut comp_count = 0;
    let mut gap = len;
    let mut swapped = true;

    while gap > 1 || swapped {
        // floor(gap / 1.3), computed exactly in integers.
        gap = ((gap * 10) / 13).max(1);
        swapped = false;

        for i in 0..len.saturating_sub(gap) {
            comp_count += 1;
            if compare(&v[i], &v[i + gap]) == Ordering::Greater {
                v.swap(i, i + gap);
                swapped = true;
            }
        }
    }

    comp_count
}
