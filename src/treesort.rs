//! Tree sort: inserts the elements into a transient binary search tree and
//! writes them back in inorder.
//!
//! The tree is rooted at the first element; every later element costs one
//! comparison per node visited on its insertion path, i.e. the depth of the
//! leaf it becomes. Elements comparing `<=` descend left, so duplicates pile
//! up in left subtrees. Descending input degenerates the tree into a list,
//! which like quicksort's worst case is expected, reproducible behavior.

use std::cmp::Ordering;
use std::mem::ManuallyDrop;
use std::ptr;

sort_impl!("treesort");

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
    if v.len() < 2 {
        return 0;
    }

    let mut comp_count = 0;

    // The tree holds shadow copies of the elements while the slice keeps
    // ownership throughout. An unwinding comparator therefore tears down
    // only node boxes, never element values, and `v` stays fully intact.
    let mut root = Node::boxed(&v[0]);
    for i in 1..v.len() {
        insert(&mut root, &v[i], &mut compare, &mut comp_count);
    }

    write_back_inorder(root, v);

    comp_count
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

struct Node<T> {
    value: ManuallyDrop<T>,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn boxed(value: &T) -> Box<Self> {
        Box::new(Node {
            // SAFETY: a raw shadow copy; the slice keeps owning the value and
            // `ManuallyDrop` ensures the copy is never dropped by the tree.
            value: ManuallyDrop::new(unsafe { ptr::read(value) }),
            left: None,
            right: None,
        })
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        // Already detached, the common case during inorder write-back.
        if self.left.is_none() && self.right.is_none() {
            return;
        }

        // Detach children iteratively so a degenerate list-shaped tree does
        // not overflow the stack with recursive box drops.
        let mut stack = vec![self.left.take(), self.right.take()];
        while let Some(entry) = stack.pop() {
            if let Some(mut node) = entry {
                stack.push(node.left.take());
                stack.push(node.right.take());
            }
        }
    }
}

/// Walks from the root to the insertion point, counting one comparison per
/// node visited, and attaches a new leaf holding a shadow copy of `value`.
fn insert<T, F>(root: &mut Node<T>, value: &T, compare: &mut F, comp_count: &mut u64)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut node = root;
    loop {
        *comp_count += 1;

        let child = if compare(value, &*node.value) != Ordering::Greater {
            &mut node.left
        } else {
            &mut node.right
        };

        match child {
            Some(next) => node = &mut **next,
            None => {
                *child = Some(Node::boxed(value));
                return;
            }
        }
    }
}

/// Consumes the tree in inorder and writes the values back over `v`.
///
/// Performs no comparisons and cannot unwind, so by the time it runs every
/// element is represented exactly once in the tree and the write-back leaves
/// `v` a sorted permutation of its former contents.
fn write_back_inorder<T>(root: Box<Node<T>>, v: &mut [T]) {
    let mut stack: Vec<Box<Node<T>>> = Vec::new();
    let mut pending = Some(root);
    let mut dest = 0;

    loop {
        // Descend along the left spine, detaching as we go.
        while let Some(mut node) = pending {
            pending = node.left.take();
            stack.push(node);
        }

        match stack.pop() {
            Some(mut node) => {
                debug_assert!(dest < v.len());
                // SAFETY: `dest` visits each index of `v` exactly once in
                // inorder, and the old slice contents must not be dropped
                // since the tree's copies of them are moved back over them.
                unsafe {
                    ptr::copy_nonoverlapping(&*node.value as *const T, v.as_mut_ptr().add(dest), 1);
                }
                dest += 1;
                pending = node.right.take();
                // The node box is freed here with both children detached.
            }
            None => break,
        }
    }

    debug_assert_eq!(dest, v.len());
}
