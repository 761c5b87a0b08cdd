//! Heapsort over a binary max-heap. Unstable, *O*(*n* \* log(*n*)).

use super::Swapper;

sort_impl!(heap);

pub fn heap_sort<S: Swapper + ?Sized>(s: &mut S) {
    let len = s.len();

    for node in (0..len / 2).rev() {
        sift_down(s, node, len);
    }

    // Pop the maximum into the shrinking tail.
    for end in (1..len).rev() {
        s.swap(0, end);
        sift_down(s, 0, end);
    }
}

// Restore the heap property below `node`, considering positions before `end` only.
fn sift_down<S: Swapper + ?Sized>(s: &mut S, mut node: usize, end: usize) {
    loop {
        let mut child = 2 * node + 1;
        if child >= end {
            break;
        }

        if child + 1 < end && s.should_swap(child + 1, child) {
            child += 1;
        }

        if !s.should_swap(child, node) {
            break;
        }

        s.swap(node, child);
        node = child;
    }
}
