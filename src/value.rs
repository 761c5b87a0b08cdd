use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Comparable projection of an element, a property or a selector result.
///
/// Non-null values are totally ordered: booleans before numbers before strings. Integers and
/// floats compare numerically with each other, floats use IEEE total ordering and strings
/// compare by bytes. `Null` is handled by the comparers, see
/// [`default_comparer`](crate::default_comparer).
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'a> {
    Null,
    Bool(bool),
    Int(i128),
    Float(f64),
    Str(Cow<'a, str>),
}

impl<'a> Value<'a> {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Reborrow without cloning string data.
    pub fn as_borrowed(&self) -> Value<'_> {
        match self {
            Value::Null => Value::Null,
            Value::Bool(b) => Value::Bool(*b),
            Value::Int(i) => Value::Int(*i),
            Value::Float(f) => Value::Float(*f),
            Value::Str(s) => Value::Str(Cow::Borrowed(s.as_ref())),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// Compare two values. `Null` is ordered after everything else.
    pub fn total_cmp(&self, other: &Value<'_>) -> Ordering {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            (Value::Int(a), Value::Float(b)) => int_cmp_float(*a, *b),
            (Value::Float(a), Value::Int(b)) => int_cmp_float(*b, *a).reverse(),
            (Value::Str(a), Value::Str(b)) => a.as_ref().cmp(b.as_ref()),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Bool(_) => 0,
            Value::Int(_) | Value::Float(_) => 1,
            Value::Str(_) => 2,
            Value::Null => 3,
        }
    }
}

// 2^127, the first float above every `i128`.
const I128_LIMIT: f64 = i128::MAX as f64;

/// Exact comparison of an integer with a float, consistent with [`f64::total_cmp`]: negative
/// NaN and infinity sort below every integer, positive ones above, and `-0.0` just below `0`.
fn int_cmp_float(int: i128, float: f64) -> Ordering {
    if float.is_nan() {
        return if float.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }

    let floor = float.floor();
    if floor >= I128_LIMIT {
        return Ordering::Less;
    }
    if floor < -I128_LIMIT {
        return Ordering::Greater;
    }

    match int.cmp(&(floor as i128)) {
        Ordering::Equal if float > floor => Ordering::Less,
        Ordering::Equal if float == 0.0 && float.is_sign_negative() => Ordering::Greater,
        ordering => ordering,
    }
}

macro_rules! value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value<'_> {
                #[inline]
                fn from(val: $t) -> Self {
                    Value::Int(val as i128)
                }
            }

            impl Sortable for $t {
                #[inline]
                fn sort_value(&self) -> Value<'_> {
                    Value::from(*self)
                }
            }
        )*
    };
}

value_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f32> for Value<'_> {
    fn from(val: f32) -> Self {
        Value::Float(val as f64)
    }
}

impl From<f64> for Value<'_> {
    fn from(val: f64) -> Self {
        Value::Float(val)
    }
}

impl From<bool> for Value<'_> {
    fn from(val: bool) -> Self {
        Value::Bool(val)
    }
}

impl From<char> for Value<'_> {
    fn from(val: char) -> Self {
        Value::Str(Cow::Owned(val.to_string()))
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(val: &'a str) -> Self {
        Value::Str(Cow::Borrowed(val))
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(val: &'a String) -> Self {
        Value::Str(Cow::Borrowed(val.as_str()))
    }
}

impl From<String> for Value<'_> {
    fn from(val: String) -> Self {
        Value::Str(Cow::Owned(val))
    }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
    fn from(val: Cow<'a, str>) -> Self {
        Value::Str(val)
    }
}

impl<'a, T> From<Option<T>> for Value<'a>
where
    T: Into<Value<'a>>,
{
    fn from(val: Option<T>) -> Self {
        val.map_or(Value::Null, Into::into)
    }
}

/// Projection of an element into comparable values.
pub trait Sortable {
    /// The element itself, compared when no key is given.
    fn sort_value(&self) -> Value<'_>;

    /// The flat property `key`, `Value::Null` when the element has no such property.
    fn field(&self, key: &str) -> Value<'_> {
        let _ = key;
        Value::Null
    }
}

impl Sortable for f32 {
    fn sort_value(&self) -> Value<'_> {
        Value::from(*self)
    }
}

impl Sortable for f64 {
    fn sort_value(&self) -> Value<'_> {
        Value::from(*self)
    }
}

impl Sortable for bool {
    fn sort_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl Sortable for char {
    fn sort_value(&self) -> Value<'_> {
        Value::from(*self)
    }
}

impl Sortable for str {
    fn sort_value(&self) -> Value<'_> {
        Value::Str(Cow::Borrowed(self))
    }
}

impl Sortable for String {
    fn sort_value(&self) -> Value<'_> {
        Value::Str(Cow::Borrowed(self.as_str()))
    }
}

impl Sortable for Value<'_> {
    fn sort_value(&self) -> Value<'_> {
        self.as_borrowed()
    }
}

impl<T: Sortable + ?Sized> Sortable for &T {
    fn sort_value(&self) -> Value<'_> {
        (**self).sort_value()
    }

    fn field(&self, key: &str) -> Value<'_> {
        (**self).field(key)
    }
}

impl<T: Sortable + ?Sized> Sortable for Box<T> {
    fn sort_value(&self) -> Value<'_> {
        (**self).sort_value()
    }

    fn field(&self, key: &str) -> Value<'_> {
        (**self).field(key)
    }
}

impl<T: Sortable> Sortable for Option<T> {
    fn sort_value(&self) -> Value<'_> {
        match self {
            Some(val) => val.sort_value(),
            None => Value::Null,
        }
    }

    fn field(&self, key: &str) -> Value<'_> {
        match self {
            Some(val) => val.field(key),
            None => Value::Null,
        }
    }
}

impl<V: Sortable> Sortable for BTreeMap<String, V> {
    fn sort_value(&self) -> Value<'_> {
        Value::Null
    }

    fn field(&self, key: &str) -> Value<'_> {
        self.get(key).map_or(Value::Null, V::sort_value)
    }
}

impl<V: Sortable, S: BuildHasher> Sortable for HashMap<String, V, S> {
    fn sort_value(&self) -> Value<'_> {
        Value::Null
    }

    fn field(&self, key: &str) -> Value<'_> {
        self.get(key).map_or(Value::Null, V::sort_value)
    }
}

// Arrays and objects have no scalar projection and compare like missing values.
#[cfg(feature = "json")]
impl Sortable for serde_json::Value {
    fn sort_value(&self) -> Value<'_> {
        use serde_json::Value as Json;

        match self {
            Json::Bool(b) => Value::Bool(*b),
            Json::Number(n) => n
                .as_i64()
                .map(Value::from)
                .or_else(|| n.as_u64().map(Value::from))
                .or_else(|| n.as_f64().map(Value::Float))
                .unwrap_or(Value::Null),
            Json::String(s) => Value::Str(Cow::Borrowed(s.as_str())),
            Json::Null | Json::Array(_) | Json::Object(_) => Value::Null,
        }
    }

    fn field(&self, key: &str) -> Value<'_> {
        self.get(key).map_or(Value::Null, Sortable::sort_value)
    }
}
