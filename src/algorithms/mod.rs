//! Classic sorting algorithms behind one contract.
//!
//! None of the algorithms touches values or comparison results directly. They only see
//! positions through a [`Swapper`], which answers whether two positions are out of order and
//! exchanges them. [`SliceSwapper`] derives that capability from a slice and a comparison
//! function.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::error::ParseAlgorithmError;

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;

/// Position based access to a list being sorted.
pub trait Swapper {
    fn len(&self) -> usize;

    /// `true` if the element at `i` compares greater than the element at `j`.
    fn should_swap(&mut self, i: usize, j: usize) -> bool;

    fn swap(&mut self, i: usize, j: usize);

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// [`Swapper`] over a mutable slice, ordered by `compare`.
pub struct SliceSwapper<'a, T, F> {
    list: &'a mut [T],
    compare: F,
}

impl<'a, T, F> SliceSwapper<'a, T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    pub fn new(list: &'a mut [T], compare: F) -> Self {
        Self { list, compare }
    }
}

impl<T, F> Swapper for SliceSwapper<'_, T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    #[inline]
    fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    fn should_swap(&mut self, i: usize, j: usize) -> bool {
        (self.compare)(&self.list[i], &self.list[j]) == Ordering::Greater
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.list.swap(i, j);
    }
}

/// The available strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Radix,
    Heap,
    Quick,
    Merge,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Radix,
        Algorithm::Heap,
        Algorithm::Quick,
        Algorithm::Merge,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Radix => "radix",
            Algorithm::Heap => "heap",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
        }
    }

    /// Whether elements that compare equal keep their relative order.
    pub fn is_stable(self) -> bool {
        match self {
            Algorithm::Bubble | Algorithm::Insertion | Algorithm::Radix | Algorithm::Merge => true,
            Algorithm::Selection | Algorithm::Heap | Algorithm::Quick => false,
        }
    }

    /// Run this strategy over `swapper`.
    pub fn run<S: Swapper + ?Sized>(self, swapper: &mut S) {
        if swapper.is_empty() {
            return;
        }

        match self {
            Algorithm::Bubble => bubble::bubble_sort(swapper),
            Algorithm::Insertion => insertion::insertion_sort(swapper),
            Algorithm::Selection => selection::selection_sort(swapper),
            Algorithm::Radix => radix::radix_sort(swapper),
            Algorithm::Heap => heap::heap_sort(swapper),
            Algorithm::Quick => quick::quick_sort(swapper),
            Algorithm::Merge => merge::merge_sort(swapper),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == name)
            .ok_or_else(|| ParseAlgorithmError(name.to_owned()))
    }
}

/// Sort `list` with `algorithm`, ordered by `compare`.
pub fn sort_by_algorithm<T, F>(algorithm: Algorithm, list: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    trace!(%algorithm, len = list.len(), "sorting by algorithm");

    algorithm.run(&mut SliceSwapper::new(list, compare));
}

/// Like [`sort_by_algorithm`], with the algorithm given by name.
///
/// Unknown names are reported and leave `list` untouched.
pub fn sort_by_algorithm_name<T, F>(
    name: &str,
    list: &mut [T],
    compare: F,
) -> Result<(), ParseAlgorithmError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_by_algorithm(name.parse()?, list, compare);
    Ok(())
}

/// Rearrange the list so that position `k` holds the element found at `order[k]` before the
/// call, using only swaps.
pub(crate) fn apply_permutation<S: Swapper + ?Sized>(swapper: &mut S, order: &[usize]) {
    let len = order.len();

    // Original index of the element currently at each position, and its inverse.
    let mut at: Vec<usize> = (0..len).collect();
    let mut pos: Vec<usize> = (0..len).collect();

    for (k, &want) in order.iter().enumerate() {
        let cur = pos[want];
        if cur == k {
            continue;
        }

        swapper.swap(k, cur);

        let displaced = at[k];
        at[cur] = displaced;
        pos[displaced] = cur;
        at[k] = want;
        pos[want] = k;
    }
}
