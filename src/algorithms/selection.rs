//! Selection sort. Unstable, *O*(*n*^2) comparisons and at most *n* - 1 swaps.

use super::Swapper;

sort_impl!(selection);

pub fn selection_sort<S: Swapper + ?Sized>(s: &mut S) {
    let len = s.len();

    for i in 0..len.saturating_sub(1) {
        let mut min = i;

        for j in (i + 1)..len {
            if s.should_swap(min, j) {
                min = j;
            }
        }

        if min != i {
            s.swap(i, min);
        }
    }
}
