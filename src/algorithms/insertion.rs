//! Insertion sort by adjacent swaps. Stable, *O*(*n*^2) worst case, linear on sorted input.

use super::Swapper;

sort_impl!(insertion);

pub fn insertion_sort<S: Swapper + ?Sized>(s: &mut S) {
    for i in 1..s.len() {
        // Walk the new element back until its left neighbour no longer compares greater.
        let mut insertion_index = i;

        for j in (0..i).rev() {
            if !s.should_swap(j, insertion_index) {
                break;
            }

            s.swap(j, insertion_index);
            insertion_index = j;
        }
    }
}
