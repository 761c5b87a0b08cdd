//! LSD radix sort, base 256. Stable, *O*(*n*^2) overall.
//!
//! The only thing known about elements is how they compare, so the integer key of each element
//! is its rank: the number of elements strictly less than it. Ranking costs *O*(*n*^2)
//! comparisons, the digit passes are linear.

use super::{apply_permutation, Swapper};

sort_impl!(radix);

const RADIX_BITS: u32 = 8;
const RADIX: usize = 1 << RADIX_BITS;

pub fn radix_sort<S: Swapper + ?Sized>(s: &mut S) {
    let len = s.len();
    if len < 2 {
        return;
    }

    let keys = ranks(s);
    let max_key = keys.iter().copied().max().unwrap_or(0);

    let mut order: Vec<usize> = (0..len).collect();
    let mut scratch = vec![0; len];
    let mut shift = 0;

    loop {
        let digit = |pos: usize| (keys[pos] >> shift) & (RADIX - 1);

        let mut counts = [0usize; RADIX];
        for &pos in &order {
            counts[digit(pos)] += 1;
        }

        let mut total = 0;
        for count in counts.iter_mut() {
            let n = *count;
            *count = total;
            total += n;
        }

        for &pos in &order {
            let d = digit(pos);
            scratch[counts[d]] = pos;
            counts[d] += 1;
        }

        std::mem::swap(&mut order, &mut scratch);

        shift += RADIX_BITS;
        if shift >= usize::BITS || max_key >> shift == 0 {
            break;
        }
    }

    apply_permutation(s, &order);
}

// Equal elements share a rank.
fn ranks<S: Swapper + ?Sized>(s: &mut S) -> Vec<usize> {
    let len = s.len();
    let mut keys = vec![0; len];

    for (k, key) in keys.iter_mut().enumerate() {
        for j in 0..len {
            if j != k && s.should_swap(k, j) {
                *key += 1;
            }
        }
    }

    keys
}
