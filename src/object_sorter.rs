use std::fmt;

use tracing::trace;

use crate::comparer::{cast_comparer, Comparer};
use crate::error::{InvalidConfigError, Result};
use crate::order::Order;
use crate::sort_by::SortBy;

/// Sort configuration for a single key: exactly one of `asc` or `desc`, and optionally a
/// comparer replacing the instance comparer for this key.
///
/// `SortBy::Absent` as the `asc`/`desc` value compares the elements themselves.
pub struct ObjectSorter<'a, T> {
    pub asc: Option<SortBy<'a, T>>,
    pub desc: Option<SortBy<'a, T>>,
    pub comparer: Option<Comparer>,
}

/// An [`ObjectSorter`] reduced to what the resolver needs.
pub(crate) struct Unpacked<'s, 'a, T> {
    pub order: Order,
    pub sort_by: &'s SortBy<'a, T>,
    /// Already cast to the unpacked order.
    pub comparer: Option<Comparer>,
}

impl<'a, T> ObjectSorter<'a, T> {
    pub fn asc(sort_by: impl Into<SortBy<'a, T>>) -> Self {
        Self {
            asc: Some(sort_by.into()),
            ..Self::default()
        }
    }

    pub fn desc(sort_by: impl Into<SortBy<'a, T>>) -> Self {
        Self {
            desc: Some(sort_by.into()),
            ..Self::default()
        }
    }

    pub fn with_comparer(mut self, comparer: Comparer) -> Self {
        self.comparer = Some(comparer);
        self
    }

    pub(crate) fn unpack(&self) -> Result<Unpacked<'_, 'a, T>> {
        let (order, sort_by) = match (&self.asc, &self.desc) {
            (Some(sort_by), None) => (Order::Asc, sort_by),
            (None, Some(sort_by)) => (Order::Desc, sort_by),
            (None, None) => return Err(InvalidConfigError::MissingOrder),
            (Some(_), Some(_)) => return Err(InvalidConfigError::AmbiguousOrder),
        };

        trace!(%order, custom_comparer = self.comparer.is_some(), "unpacked object sorter");

        Ok(Unpacked {
            order,
            sort_by,
            comparer: self.comparer.clone().map(cast_comparer),
        })
    }
}

impl<T> Default for ObjectSorter<'_, T> {
    fn default() -> Self {
        Self {
            asc: None,
            desc: None,
            comparer: None,
        }
    }
}

impl<T> fmt::Debug for ObjectSorter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectSorter")
            .field("asc", &self.asc)
            .field("desc", &self.desc)
            .field("comparer", &self.comparer.as_ref().map(|_| ".."))
            .finish()
    }
}
