//! In-place heapsort: bottom-up max-heap construction followed by repeated
//! root extraction. The slice itself is the heap array; no scratch storage.

use std::cmp::Ordering;

sort_impl!("heapsort");

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
    let len = v.len();

    // Heapify every non-leaf, deepest first.
    for node in (0..len / 2).rev() {
        sift_down(v, len, node, &mut compare, &mut comp_count);
    }

    // Swap the maximum to the end of the shrinking heap and restore the heap
    // property at the root, n-1 times.
    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(v, end, 0, &mut compare, &mut comp_count);
    }

    comp_count
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

/// Restores the max-heap property for the subtree rooted at `node` within
/// `v[..heap_len]`.
///
/// Each in-range child costs one comparison: a node with both children
/// performs two, a node with one child performs one, a leaf performs none.
/// The left/right branch structure is kept as-is rather than fused into a
/// max-of-three, so the counts stay identical to the reference behavior.
fn sift_down<T, F>(v: &mut [T], heap_len: usize, node: usize, compare: &mut F, comp_count: &mut u64)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut largest = node;
    let left = 2 * node + 1;
    let right = 2 * node + 2;

    if left < heap_len {
        *comp_count += 1;
        if compare(&v[left], &v[largest]) == Ordering::Greater {
            largest = left;
        }
    }

    if right < heap_len {
        *comp_count += 1;
        if compare(&v[right], &v[largest]) == Ordering::Greater {
            largest = right;
        }
    }

    if largest != node {
        v.swap(node, largest);
        // Recursion depth is at most log2(heap_len).
        sift_down(v, heap_len, largest, compare, comp_count);
    }
}
