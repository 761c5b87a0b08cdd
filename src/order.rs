use std::cmp::Ordering;
use std::fmt;

/// Sort direction, used as a multiplier on raw comparison results.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Order {
    #[default]
    Asc = 1,
    Desc = -1,
}

impl Order {
    /// The multiplier, `1` or `-1`.
    #[inline]
    pub fn sign(self) -> i32 {
        self as i32
    }

    /// Multiply `ordering` by this direction.
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Order::Asc => ordering,
            Order::Desc => ordering.reverse(),
        }
    }

    /// The direction itself read as a comparison result: `Greater` for `Asc`, `Less` for
    /// `Desc`.
    #[inline]
    pub fn as_ordering(self) -> Ordering {
        self.sign().cmp(&0)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        })
    }
}
