//! Top-down recursive merge sort with a single auxiliary buffer.
//!
//! The buffer is allocated once for the whole sort and reused by every merge.
//! Ties take the left element, so the sort is stable. Only head-to-head
//! comparisons between the two halves are counted; once one half is
//! exhausted the remaining tail is copied back without comparisons.

use std::cmp::Ordering;
use std::mem::MaybeUninit;
use std::ptr;

sort_impl!("mergesort");

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
    if len < 2 || std::mem::size_of::<T>() == 0 {
        // Zero-sized types carry no order; nothing to do.
        return 0;
    }

    // One scratch allocation for the whole sort, shared by every merge. The
    // length is never set; elements only ever live in it transiently as raw
    // moved copies.
    let mut buf: Vec<MaybeUninit<T>> = Vec::with_capacity(len);
    let buf_ptr = buf.as_mut_ptr() as *mut T;

    let mut comp_count = 0;
    merge_sort(v, buf_ptr, &mut compare, &mut comp_count);
    comp_count
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn merge_sort<T, F>(v: &mut [T], buf: *mut T, compare: &mut F, comp_count: &mut u64)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // Left-biased split: for odd lengths the left half is the larger one.
    let mid = (len + 1) / 2;

    merge_sort(&mut v[..mid], buf, compare, comp_count);
    merge_sort(&mut v[mid..], buf, compare, comp_count);

    // SAFETY: `buf` was allocated with capacity for the full top-level slice,
    // and `v` here is a sub-slice of that, so it holds `len` elements.
    unsafe {
        merge(v, mid, buf, compare, comp_count);
    }
}

/// Merges the sorted halves `v[..mid]` and `v[mid..]` back into `v`, staging
/// the whole range through `buf`.
///
/// SAFETY: `buf` must be valid for reads and writes of `v.len()` elements and
/// must not overlap `v`.
unsafe fn merge<T, F>(v: &mut [T], mid: usize, buf: *mut T, compare: &mut F, comp_count: &mut u64)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    let dest = v.as_mut_ptr();

    // Move the range into the scratch buffer. From here on the buffer
    // logically owns the elements; `hole` tracks the not-yet-merged tails and
    // moves them back on drop, so a panicking comparator cannot leave `v`
    // holding duplicates or losing elements.
    ptr::copy_nonoverlapping(dest, buf, len);

    let mut hole = MergeHole {
        left: buf,
        left_end: buf.add(mid),
        right: buf.add(mid),
        right_end: buf.add(len),
        dest,
    };

    while hole.left < hole.left_end && hole.right < hole.right_end {
        *comp_count += 1;

        // Ties take the left element, which keeps equal elements in input
        // order.
        let take_left = compare(&*hole.left, &*hole.right) != Ordering::Greater;

        if take_left {
            ptr::copy_nonoverlapping(hole.left, hole.dest, 1);
            hole.left = hole.left.add(1);
        } else {
            ptr::copy_nonoverlapping(hole.right, hole.dest, 1);
            hole.right = hole.right.add(1);
        }
        hole.dest = hole.dest.add(1);
    }

    // `hole` goes out of scope here and its drop impl moves the exhausted
    // side's counterpart tail back, without counting further comparisons.
}

/// The not-yet-merged remainders of the two runs staged in the buffer.
///
/// Dropping it moves both remainders to `dest` in order. On the normal path
/// one of them is already empty; after a comparator panic both may be
/// non-empty, and moving them back keeps every element exactly once in `v`.
struct MergeHole<T> {
    left: *mut T,
    left_end: *mut T,
    right: *mut T,
    right_end: *mut T,
    dest: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // SAFETY: `left..left_end` and `right..right_end` are the remaining
        // initialized elements in the buffer, and `dest` has exactly room for
        // both, since every merged element advanced `dest` by one.
        unsafe {
            let left_rest = self.left_end.offset_from(self.left) as usize;
            ptr::copy_nonoverlapping(self.left, self.dest, left_rest);

            let right_rest = self.right_end.offset_from(self.right) as usize;
            ptr::copy_nonoverlapping(self.right, self.dest.add(left_rest), right_rest);
        }
    }
}
