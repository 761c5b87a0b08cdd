//! Sort slices of values or records ascending or descending, by property keys, selector
//! functions or lists of keys with per-key direction and comparer overrides.
//!
//! ```ignore
//! use fast_sort::{sort, SortBy, Value};
//!
//! let sorted = sort(&users).by(vec![
//!     SortBy::asc("last_name"),
//!     SortBy::desc(SortBy::selector(|u: &User| Value::from(u.age))),
//! ])?;
//! ```
//!
//! Classic algorithms are exposed separately in [`algorithms`], all driven through the
//! [`algorithms::Swapper`] contract.

// Every algorithm module implements `<name>_sort` over a `Swapper` and gets the slice entry
// points from this macro.
macro_rules! sort_impl {
    ($algorithm:ident) => {
        paste::paste! {
            /// Sort `v` ascending by its [`Ord`] implementation.
            #[inline]
            pub fn sort<T>(v: &mut [T])
            where
                T: Ord,
            {
                [<$algorithm _sort>](&mut crate::algorithms::SliceSwapper::new(v, T::cmp));
            }

            /// Sort `v` with the comparison function `compare`.
            #[inline]
            pub fn sort_by<T, F>(v: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                [<$algorithm _sort>](&mut crate::algorithms::SliceSwapper::new(v, compare));
            }
        }
    };
}

pub mod algorithms;

mod comparer;
mod driver;
mod error;
mod instance;
mod multi_property;
mod object_sorter;
mod order;
mod sort_by;
mod strategy;
mod value;

pub use algorithms::{sort_by_algorithm, sort_by_algorithm_name, Algorithm};
pub use comparer::{cast_comparer, comparer, default_comparer, Comparer};
pub use driver::{sort_array, SortTarget};
pub use error::{InvalidConfigError, ParseAlgorithmError, Result};
pub use instance::{
    create_new_sort_instance, in_place_sort, sort, Container, IntoContainer, SortContext,
    SortInstance, SortInstanceOptions,
};
pub use object_sorter::ObjectSorter;
pub use order::Order;
pub use sort_by::{Selector, SortBy};
pub use strategy::{sort_strategy, ResolvedComparator};
pub use value::{Sortable, Value};
