//! Top-down merge sort. Stable, *O*(*n* \* log(*n*)), *O*(*n*) scratch.
//!
//! The merge works on positions. Elements stay where they are while the sorted order is
//! computed and are moved into it by swaps at the end.

use super::{apply_permutation, Swapper};

sort_impl!(merge);

pub fn merge_sort<S: Swapper + ?Sized>(s: &mut S) {
    let len = s.len();
    if len < 2 {
        return;
    }

    let mut order: Vec<usize> = (0..len).collect();
    let mut buf = vec![0; len];
    sort_positions(s, &mut order, &mut buf);

    apply_permutation(s, &order);
}

fn sort_positions<S: Swapper + ?Sized>(s: &mut S, v: &mut [usize], buf: &mut [usize]) {
    let len = v.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    {
        let (left, right) = v.split_at_mut(mid);
        let (buf_left, buf_right) = buf.split_at_mut(mid);
        sort_positions(s, left, buf_left);
        sort_positions(s, right, buf_right);
    }

    buf.copy_from_slice(v);
    let (left, right) = buf.split_at(mid);
    let (mut i, mut j) = (0, 0);

    // Ties take from the left run.
    for slot in v.iter_mut() {
        let take_right = i == left.len() || (j < right.len() && s.should_swap(left[i], right[j]));

        if take_right {
            *slot = right[j];
            j += 1;
        } else {
            *slot = left[i];
            i += 1;
        }
    }
}
