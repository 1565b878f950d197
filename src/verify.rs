//! Post-hoc verification, for callers and tests.
//!
//! These comparisons are deliberately outside the counting protocol: they are
//! never added to any algorithm's reported cost.

use std::cmp::Ordering;

/// Returns true if `v` is in non-decreasing order.
#[inline]
pub fn is_sorted<T>(v: &[T]) -> bool
where
    T: Ord,
{
    is_sorted_by(v, |a, b| a.cmp(b))
}

/// Returns true if `v` is in non-decreasing order under `compare`.
pub fn is_sorted_by<T, F>(v: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    v.windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}
