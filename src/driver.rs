use tracing::{debug, trace};

use crate::algorithms::{sort_by_algorithm, Algorithm};
use crate::comparer::Comparer;
use crate::error::Result;
use crate::order::Order;
use crate::sort_by::SortBy;
use crate::strategy::sort_strategy;
use crate::value::Sortable;

/// Anything that may or may not hold a sortable list.
pub trait SortTarget {
    type Item;

    /// The list to sort, `None` if this value is not list-like.
    fn as_sort_slice(&mut self) -> Option<&mut [Self::Item]>;
}

impl<T> SortTarget for [T] {
    type Item = T;

    fn as_sort_slice(&mut self) -> Option<&mut [T]> {
        Some(self)
    }
}

impl<T, const N: usize> SortTarget for [T; N] {
    type Item = T;

    fn as_sort_slice(&mut self) -> Option<&mut [T]> {
        Some(self.as_mut_slice())
    }
}

impl<T> SortTarget for Vec<T> {
    type Item = T;

    fn as_sort_slice(&mut self) -> Option<&mut [T]> {
        Some(self.as_mut_slice())
    }
}

impl<T> SortTarget for Option<Vec<T>> {
    type Item = T;

    fn as_sort_slice(&mut self) -> Option<&mut [T]> {
        self.as_mut().map(Vec::as_mut_slice)
    }
}

#[cfg(feature = "json")]
impl SortTarget for serde_json::Value {
    type Item = serde_json::Value;

    fn as_sort_slice(&mut self) -> Option<&mut [serde_json::Value]> {
        match self {
            serde_json::Value::Array(items) => Some(items.as_mut_slice()),
            _ => None,
        }
    }
}

/// Sort `container` with the stable sort of the standard library.
///
/// Containers that are not list-like are returned untouched.
pub fn sort_array<'c, C>(
    order: Order,
    container: &'c mut C,
    sort_by: &SortBy<'_, C::Item>,
    comparer: &Comparer,
) -> Result<&'c mut C>
where
    C: SortTarget + ?Sized,
    C::Item: Sortable,
{
    sort_array_with(order, container, sort_by, comparer, None)
}

pub(crate) fn sort_array_with<'c, C>(
    order: Order,
    container: &'c mut C,
    sort_by: &SortBy<'_, C::Item>,
    comparer: &Comparer,
    algorithm: Option<Algorithm>,
) -> Result<&'c mut C>
where
    C: SortTarget + ?Sized,
    C::Item: Sortable,
{
    let Some(list) = container.as_sort_slice() else {
        trace!("not a list, passing container through");
        return Ok(container);
    };

    // A single key sorts faster without the tie-break machinery.
    let absent = SortBy::Absent;
    let sort_by = match sort_by {
        SortBy::Keys(keys) if keys.len() < 2 => {
            trace!(len = keys.len(), "unwrapped short key list");
            keys.first().unwrap_or(&absent)
        }
        sort_by => sort_by,
    };

    let compare = sort_strategy(sort_by, comparer, order)?;

    debug!(%order, len = list.len(), ?algorithm, "sorting");

    match algorithm {
        None => list.sort_by(|a, b| compare(a, b)),
        Some(algorithm) => sort_by_algorithm(algorithm, list, |a, b| compare(a, b)),
    }

    Ok(container)
}
