//! Quicksort with a Lomuto partition around the middle element. Unstable, *O*(*n* \* log(*n*))
//! expected, *O*(*n*^2) worst case.

use std::ops::Range;

use super::Swapper;

sort_impl!(quick);

pub fn quick_sort<S: Swapper + ?Sized>(s: &mut S) {
    let len = s.len();
    quicksort(s, 0..len);
}

fn quicksort<S: Swapper + ?Sized>(s: &mut S, mut range: Range<usize>) {
    // Recurse into the smaller side and loop on the larger one, which bounds the stack depth
    // to log(n).
    while range.len() > 1 {
        let pivot = partition(s, range.clone());
        let left = range.start..pivot;
        let right = (pivot + 1)..range.end;

        if left.len() < right.len() {
            quicksort(s, left);
            range = right;
        } else {
            quicksort(s, right);
            range = left;
        }
    }
}

// Returns the final position of the pivot.
fn partition<S: Swapper + ?Sized>(s: &mut S, range: Range<usize>) -> usize {
    let lo = range.start;
    s.swap(lo, lo + range.len() / 2);

    // The pivot stays at `lo` until the loop is done.
    let mut store = lo;
    for i in (lo + 1)..range.end {
        if s.should_swap(lo, i) {
            store += 1;
            s.swap(store, i);
        }
    }

    s.swap(lo, store);
    store
}
