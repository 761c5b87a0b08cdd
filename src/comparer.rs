use std::cmp::Ordering;
use std::sync::Arc;

use crate::order::Order;
use crate::value::Value;

/// Three-way comparison of two projected values in a given direction.
pub type Comparer = Arc<dyn Fn(&Value<'_>, &Value<'_>, Order) -> Ordering + Send + Sync>;

/// Build a [`Comparer`] from a closure.
pub fn comparer<F>(compare: F) -> Comparer
where
    F: Fn(&Value<'_>, &Value<'_>, Order) -> Ordering + Send + Sync + 'static,
{
    Arc::new(compare)
}

/// The stock comparer.
///
/// The null branches already carry the direction, the value branches don't. Once wrapped by
/// [`cast_comparer`] nulls end up last for both directions.
pub fn default_comparer(a: &Value<'_>, b: &Value<'_>, order: Order) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => order.as_ordering(),
        (false, true) => order.as_ordering().reverse(),
        (false, false) => a.total_cmp(b),
    }
}

/// Force `comparer` into the direction it is called with, whatever its own polarity.
pub fn cast_comparer(comparer: Comparer) -> Comparer {
    Arc::new(move |a: &Value<'_>, b: &Value<'_>, order: Order| order.apply(comparer(a, b, order)))
}
