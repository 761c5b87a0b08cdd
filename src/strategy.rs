use std::cmp::Ordering;

use tracing::trace;

use crate::comparer::Comparer;
use crate::error::{InvalidConfigError, Result};
use crate::multi_property::multi_property_sorter;
use crate::order::Order;
use crate::sort_by::SortBy;
use crate::value::Sortable;

/// Binary comparator produced by resolving a [`SortBy`], ready for `sort_by`.
pub type ResolvedComparator<'s, T> = Box<dyn Fn(&T, &T) -> Ordering + 's>;

/// Resolve `sort_by` into a single comparator, comparing projected values with `comparer` in
/// direction `order`.
///
/// Every configuration error anywhere in `sort_by` is reported here, no comparison runs before
/// the whole specification is resolved.
pub fn sort_strategy<'s, 'a, T>(
    sort_by: &'s SortBy<'a, T>,
    comparer: &Comparer,
    order: Order,
) -> Result<ResolvedComparator<'s, T>>
where
    T: Sortable + 's,
    'a: 's,
{
    match sort_by {
        SortBy::Absent => Ok(value_comparator(comparer, order)),
        SortBy::Key(key) => {
            let key = flat_key(key)?;
            let comparer = comparer.clone();

            Ok(Box::new(move |a: &T, b: &T| {
                comparer(&a.field(key), &b.field(key), order)
            }))
        }
        SortBy::Selector(select) => {
            let comparer = comparer.clone();

            Ok(Box::new(move |a: &T, b: &T| comparer(&select(a), &select(b), order)))
        }
        SortBy::Keys(keys) => multi_property_sorter(keys, comparer, order),
        SortBy::Object(sorter) => {
            let unpacked = sorter.unpack()?;
            let comparer = unpacked.comparer.as_ref().unwrap_or(comparer);

            sort_strategy(unpacked.sort_by, comparer, unpacked.order)
        }
    }
}

/// Compare the elements themselves.
pub(crate) fn value_comparator<'s, T>(comparer: &Comparer, order: Order) -> ResolvedComparator<'s, T>
where
    T: Sortable + 's,
{
    let comparer = comparer.clone();

    Box::new(move |a: &T, b: &T| comparer(&a.sort_value(), &b.sort_value(), order))
}

pub(crate) fn flat_key(key: &str) -> Result<&str> {
    if key.contains('.') {
        trace!(key, "rejected nested property key");
        return Err(InvalidConfigError::NestedProperty(key.to_owned()));
    }

    Ok(key)
}
