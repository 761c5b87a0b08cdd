use std::borrow::Cow;
use std::fmt;

use crate::object_sorter::ObjectSorter;
use crate::value::Value;

/// Maps an element to the value it is sorted by.
pub type Selector<'a, T> = Box<dyn for<'x> Fn(&'x T) -> Value<'x> + 'a>;

/// What to sort by.
pub enum SortBy<'a, T> {
    /// Compare the elements themselves.
    Absent,
    /// A flat property name. Nested paths like `"a.b"` are rejected, use a selector instead.
    Key(Cow<'a, str>),
    Selector(Selector<'a, T>),
    /// Keys in priority order, later keys break ties of earlier ones.
    Keys(Vec<SortBy<'a, T>>),
    /// Per-key direction and comparer.
    Object(Box<ObjectSorter<'a, T>>),
}

impl<'a, T> SortBy<'a, T> {
    pub fn key(key: impl Into<Cow<'a, str>>) -> Self {
        SortBy::Key(key.into())
    }

    pub fn selector<F>(select: F) -> Self
    where
        F: for<'x> Fn(&'x T) -> Value<'x> + 'a,
    {
        SortBy::Selector(Box::new(select))
    }

    pub fn keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SortBy<'a, T>>,
    {
        SortBy::Keys(keys.into_iter().map(Into::into).collect())
    }

    /// Shorthand for an ascending [`ObjectSorter`].
    pub fn asc(sort_by: impl Into<SortBy<'a, T>>) -> Self {
        ObjectSorter::asc(sort_by).into()
    }

    /// Shorthand for a descending [`ObjectSorter`].
    pub fn desc(sort_by: impl Into<SortBy<'a, T>>) -> Self {
        ObjectSorter::desc(sort_by).into()
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, SortBy::Absent)
    }
}

impl<T> Default for SortBy<'_, T> {
    fn default() -> Self {
        SortBy::Absent
    }
}

impl<'a, T> From<&'a str> for SortBy<'a, T> {
    fn from(key: &'a str) -> Self {
        SortBy::Key(Cow::Borrowed(key))
    }
}

impl<T> From<String> for SortBy<'_, T> {
    fn from(key: String) -> Self {
        SortBy::Key(Cow::Owned(key))
    }
}

impl<'a, T> From<Cow<'a, str>> for SortBy<'a, T> {
    fn from(key: Cow<'a, str>) -> Self {
        SortBy::Key(key)
    }
}

impl<'a, T> From<Vec<SortBy<'a, T>>> for SortBy<'a, T> {
    fn from(keys: Vec<SortBy<'a, T>>) -> Self {
        SortBy::Keys(keys)
    }
}

impl<'a, T> From<ObjectSorter<'a, T>> for SortBy<'a, T> {
    fn from(sorter: ObjectSorter<'a, T>) -> Self {
        SortBy::Object(Box::new(sorter))
    }
}

impl<T> fmt::Debug for SortBy<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortBy::Absent => f.write_str("Absent"),
            SortBy::Key(key) => f.debug_tuple("Key").field(key).finish(),
            SortBy::Selector(_) => f.write_str("Selector(..)"),
            SortBy::Keys(keys) => f.debug_tuple("Keys").field(keys).finish(),
            SortBy::Object(sorter) => f.debug_tuple("Object").field(sorter).finish(),
        }
    }
}
