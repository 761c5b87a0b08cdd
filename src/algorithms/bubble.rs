//! Bubble sort with early exit. Stable, *O*(*n*^2).

use super::Swapper;

sort_impl!(bubble);

pub fn bubble_sort<S: Swapper + ?Sized>(s: &mut S) {
    let len = s.len();

    // After each pass the largest remaining element sits at `end`.
    for end in (1..len).rev() {
        let mut swapped = false;

        for i in 0..end {
            if s.should_swap(i, i + 1) {
                s.swap(i, i + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }
}
