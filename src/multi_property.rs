//! Tie-breaking over a list of sort keys.
//!
//! The list is resolved once into steps. Each step knows how to extract a pair of values and
//! which direction and comparer apply to it. An object sorter in the list does not occupy a
//! step of its own, it sets the direction and comparer of the key it wraps and of the plain
//! keys after it, until the next object sorter.

use std::cmp::Ordering;

use tracing::trace;

use crate::comparer::Comparer;
use crate::error::Result;
use crate::order::Order;
use crate::sort_by::{Selector, SortBy};
use crate::strategy::{flat_key, value_comparator, ResolvedComparator};
use crate::value::{Sortable, Value};

enum Extract<'s, 'a, T> {
    Value,
    Key(&'s str),
    Selector(&'s Selector<'a, T>),
    /// A nested key list, resolved on its own.
    Nested(ResolvedComparator<'s, T>),
}

struct TieBreakStep<'s, 'a, T> {
    extract: Extract<'s, 'a, T>,
    order: Order,
    comparer: Comparer,
}

impl<T: Sortable> TieBreakStep<'_, '_, T> {
    /// The comparison and whether both sides were null.
    fn compare(&self, a: &T, b: &T) -> (Ordering, bool) {
        match &self.extract {
            Extract::Value => self.compare_values(&a.sort_value(), &b.sort_value()),
            Extract::Key(key) => self.compare_values(&a.field(key), &b.field(key)),
            Extract::Selector(select) => self.compare_values(&select(a), &select(b)),
            Extract::Nested(compare) => (compare(a, b), false),
        }
    }

    #[inline]
    fn compare_values(&self, a: &Value<'_>, b: &Value<'_>) -> (Ordering, bool) {
        (
            (self.comparer)(a, b, self.order),
            a.is_null() && b.is_null(),
        )
    }
}

pub(crate) fn multi_property_sorter<'s, 'a, T>(
    keys: &'s [SortBy<'a, T>],
    comparer: &Comparer,
    order: Order,
) -> Result<ResolvedComparator<'s, T>>
where
    T: Sortable + 's,
    'a: 's,
{
    if keys.is_empty() {
        return Ok(value_comparator(comparer, order));
    }

    let mut steps = Vec::with_capacity(keys.len());
    let mut current_order = order;
    let mut current_comparer = comparer.clone();

    for key in keys {
        push_step(
            &mut steps,
            key,
            &mut current_order,
            &mut current_comparer,
            comparer,
        )?;
    }

    trace!(steps = steps.len(), "resolved key list");

    Ok(Box::new(move |a: &T, b: &T| tie_break(&steps, a, b)))
}

fn push_step<'s, 'a, T>(
    steps: &mut Vec<TieBreakStep<'s, 'a, T>>,
    key: &'s SortBy<'a, T>,
    order: &mut Order,
    comparer: &mut Comparer,
    base_comparer: &Comparer,
) -> Result<()>
where
    T: Sortable + 's,
    'a: 's,
{
    let extract = match key {
        SortBy::Absent => Extract::Value,
        SortBy::Key(key) => Extract::Key(flat_key(key)?),
        SortBy::Selector(select) => Extract::Selector(select),
        // A nested list starts over from the list comparer, like an object sorter without
        // its own.
        SortBy::Keys(keys) => {
            Extract::Nested(multi_property_sorter(keys, base_comparer, *order)?)
        }
        SortBy::Object(sorter) => {
            let unpacked = sorter.unpack()?;
            *order = unpacked.order;
            // Without an override the list comparer applies again, not the previous key's.
            *comparer = unpacked
                .comparer
                .unwrap_or_else(|| base_comparer.clone());

            return push_step(steps, unpacked.sort_by, order, comparer, base_comparer);
        }
    };

    steps.push(TieBreakStep {
        extract,
        order: *order,
        comparer: comparer.clone(),
    });

    Ok(())
}

fn tie_break<T: Sortable>(steps: &[TieBreakStep<'_, '_, T>], a: &T, b: &T) -> Ordering {
    let mut equality = Ordering::Equal;

    for step in steps {
        let (ordering, both_null) = step.compare(a, b);
        equality = ordering;

        if ordering != Ordering::Equal && !both_null {
            break;
        }
    }

    equality
}
