use std::fmt;
use std::ops::{Deref, DerefMut};

use once_cell::sync::OnceCell;
use tracing::{debug, trace};

use crate::algorithms::Algorithm;
use crate::comparer::{cast_comparer, comparer, default_comparer, Comparer};
use crate::driver::sort_array_with;
use crate::error::Result;
use crate::order::Order;
use crate::sort_by::SortBy;
use crate::value::Sortable;

/// Configuration of a [`SortInstance`].
#[derive(Clone, Default)]
pub struct SortInstanceOptions {
    /// Replaces [`default_comparer`] for every key without its own comparer.
    pub comparer: Option<Comparer>,
    /// Sort mutable containers directly instead of a copy.
    pub in_place_sorting: bool,
    /// Run a specific algorithm instead of the stable sort of the standard library.
    pub algorithm: Option<Algorithm>,
}

impl SortInstanceOptions {
    pub fn comparer(mut self, comparer: Comparer) -> Self {
        self.comparer = Some(comparer);
        self
    }

    pub fn in_place_sorting(mut self, in_place_sorting: bool) -> Self {
        self.in_place_sorting = in_place_sorting;
        self
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }
}

impl fmt::Debug for SortInstanceOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortInstanceOptions")
            .field("comparer", &self.comparer.as_ref().map(|_| ".."))
            .field("in_place_sorting", &self.in_place_sorting)
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

/// A sort entry point with a fixed comparer and mode.
#[derive(Clone)]
pub struct SortInstance {
    comparer: Comparer,
    in_place_sorting: bool,
    algorithm: Option<Algorithm>,
}

pub fn create_new_sort_instance(options: SortInstanceOptions) -> SortInstance {
    debug!(
        custom_comparer = options.comparer.is_some(),
        in_place_sorting = options.in_place_sorting,
        algorithm = ?options.algorithm,
        "created sort instance"
    );

    let base = options
        .comparer
        .unwrap_or_else(|| comparer(default_comparer));

    SortInstance {
        comparer: cast_comparer(base),
        in_place_sorting: options.in_place_sorting,
        algorithm: options.algorithm,
    }
}

impl SortInstance {
    /// Start sorting `container`. Nothing happens until a direction is picked on the returned
    /// context.
    pub fn sort<'c, T, C>(&self, container: C) -> SortContext<'c, T>
    where
        C: IntoContainer<'c, T>,
    {
        self.context(container.into_container(self.in_place_sorting))
    }

    pub fn in_place_sorting(&self) -> bool {
        self.in_place_sorting
    }

    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }

    pub(crate) fn context<'c, T>(&self, container: Container<'c, T>) -> SortContext<'c, T> {
        SortContext {
            container,
            comparer: self.comparer.clone(),
            algorithm: self.algorithm,
        }
    }
}

impl fmt::Debug for SortInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortInstance")
            .field("in_place_sorting", &self.in_place_sorting)
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

/// The list a [`SortContext`] works on, a private copy or the caller's storage.
pub enum Container<'c, T> {
    Owned(Vec<T>),
    Borrowed(&'c mut [T]),
    /// A value that is not a list, handed back unsorted.
    Passthrough(T),
}

impl<T> Container<'_, T> {
    pub fn is_borrowed(&self) -> bool {
        matches!(self, Container::Borrowed(_))
    }

    pub fn is_passthrough(&self) -> bool {
        matches!(self, Container::Passthrough(_))
    }

    pub fn into_vec(self) -> Vec<T>
    where
        T: Clone,
    {
        match self {
            Container::Owned(v) => v,
            Container::Borrowed(v) => v.to_vec(),
            Container::Passthrough(v) => vec![v],
        }
    }
}

#[cfg(feature = "json")]
impl Container<'_, serde_json::Value> {
    /// Back into JSON: an array for lists, the untouched value otherwise.
    pub fn into_json(self) -> serde_json::Value {
        match self {
            Container::Passthrough(v) => v,
            list => serde_json::Value::Array(list.into_vec()),
        }
    }
}

impl<T> Deref for Container<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        match self {
            Container::Owned(v) => v,
            Container::Borrowed(v) => v,
            Container::Passthrough(v) => std::slice::from_ref(v),
        }
    }
}

impl<T> DerefMut for Container<'_, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        match self {
            Container::Owned(v) => v,
            Container::Borrowed(v) => v,
            Container::Passthrough(v) => std::slice::from_mut(v),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Container<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Conversion into the list a [`SortContext`] sorts.
///
/// Shared borrows are always copied. Mutable borrows are copied unless the instance sorts in
/// place.
pub trait IntoContainer<'c, T> {
    fn into_container(self, in_place: bool) -> Container<'c, T>;
}

impl<'c, T> IntoContainer<'c, T> for Vec<T> {
    fn into_container(self, _in_place: bool) -> Container<'c, T> {
        Container::Owned(self)
    }
}

impl<'c, T: Clone> IntoContainer<'c, T> for &'c [T] {
    fn into_container(self, in_place: bool) -> Container<'c, T> {
        if in_place {
            trace!("shared borrow can't be sorted in place, copying");
        }
        Container::Owned(self.to_vec())
    }
}

impl<'c, T: Clone> IntoContainer<'c, T> for &'c mut [T] {
    fn into_container(self, in_place: bool) -> Container<'c, T> {
        if in_place {
            Container::Borrowed(self)
        } else {
            Container::Owned(self.to_vec())
        }
    }
}

impl<'c, T: Clone> IntoContainer<'c, T> for &'c Vec<T> {
    fn into_container(self, in_place: bool) -> Container<'c, T> {
        self.as_slice().into_container(in_place)
    }
}

impl<'c, T: Clone> IntoContainer<'c, T> for &'c mut Vec<T> {
    fn into_container(self, in_place: bool) -> Container<'c, T> {
        self.as_mut_slice().into_container(in_place)
    }
}

impl<'c, T: Clone, const N: usize> IntoContainer<'c, T> for &'c [T; N] {
    fn into_container(self, in_place: bool) -> Container<'c, T> {
        self.as_slice().into_container(in_place)
    }
}

impl<'c, T: Clone, const N: usize> IntoContainer<'c, T> for &'c mut [T; N] {
    fn into_container(self, in_place: bool) -> Container<'c, T> {
        self.as_mut_slice().into_container(in_place)
    }
}

#[cfg(feature = "json")]
impl<'c> IntoContainer<'c, serde_json::Value> for serde_json::Value {
    fn into_container(self, _in_place: bool) -> Container<'c, serde_json::Value> {
        match self {
            serde_json::Value::Array(list) => Container::Owned(list),
            other => Container::Passthrough(other),
        }
    }
}

#[cfg(feature = "json")]
impl<'c> IntoContainer<'c, serde_json::Value> for &'c serde_json::Value {
    fn into_container(self, in_place: bool) -> Container<'c, serde_json::Value> {
        match self {
            serde_json::Value::Array(list) => list.as_slice().into_container(in_place),
            other => Container::Passthrough(other.clone()),
        }
    }
}

#[cfg(feature = "json")]
impl<'c> IntoContainer<'c, serde_json::Value> for &'c mut serde_json::Value {
    fn into_container(self, in_place: bool) -> Container<'c, serde_json::Value> {
        match self {
            serde_json::Value::Array(list) => list.as_mut_slice().into_container(in_place),
            other => Container::Passthrough(other.clone()),
        }
    }
}

/// A container waiting for a direction and a [`SortBy`].
pub struct SortContext<'c, T> {
    container: Container<'c, T>,
    comparer: Comparer,
    algorithm: Option<Algorithm>,
}

impl<'c, T: Sortable> SortContext<'c, T> {
    pub fn asc<'s>(self, sort_by: impl Into<SortBy<'s, T>>) -> Result<Container<'c, T>> {
        self.run(Order::Asc, sort_by.into())
    }

    pub fn desc<'s>(self, sort_by: impl Into<SortBy<'s, T>>) -> Result<Container<'c, T>> {
        self.run(Order::Desc, sort_by.into())
    }

    /// Ascending unless object sorters in `sort_by` say otherwise.
    pub fn by<'s>(self, sort_by: impl Into<SortBy<'s, T>>) -> Result<Container<'c, T>> {
        self.run(Order::Asc, sort_by.into())
    }

    fn run(mut self, order: Order, sort_by: SortBy<'_, T>) -> Result<Container<'c, T>> {
        if self.container.is_passthrough() {
            trace!("not a list, passing container through");
            return Ok(self.container);
        }

        sort_array_with(
            order,
            &mut *self.container,
            &sort_by,
            &self.comparer,
            self.algorithm,
        )?;

        Ok(self.container)
    }
}

impl<T: fmt::Debug> fmt::Debug for SortContext<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortContext")
            .field("container", &self.container)
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

static DEFAULT_INSTANCE: OnceCell<SortInstance> = OnceCell::new();
static IN_PLACE_INSTANCE: OnceCell<SortInstance> = OnceCell::new();

/// Sort a copy of `container` with the default comparer.
pub fn sort<'c, T, C>(container: C) -> SortContext<'c, T>
where
    C: IntoContainer<'c, T>,
{
    DEFAULT_INSTANCE
        .get_or_init(|| create_new_sort_instance(SortInstanceOptions::default()))
        .sort(container)
}

/// Sort `container` directly with the default comparer.
pub fn in_place_sort<T>(container: &mut [T]) -> SortContext<'_, T> {
    IN_PLACE_INSTANCE
        .get_or_init(|| {
            create_new_sort_instance(SortInstanceOptions::default().in_place_sorting(true))
        })
        .context(Container::Borrowed(container))
}
