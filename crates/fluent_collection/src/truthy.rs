//! The emptiness predicate.
//!
//! Every operation that drops "empty" values without an explicit predicate
//! ([`Collection::filter_truthy`](crate::Collection::filter_truthy),
//! [`Collection::map_into`](crate::Collection::map_into)) goes through
//! [`Truthy`].
//!
//! A value is falsy iff it is one of:
//! - nil / `None`
//! - `false`
//! - integer zero
//! - float zero (either sign)
//! - the empty string or the string `"0"`
//! - an empty container
//!
//! Everything else is truthy, including `NaN`, `"0.0"` and `" "`.

use std::sync::Arc;

/// Types with a truthiness.
pub trait Truthy {
    /// Returns true unless the value counts as empty.
    fn is_truthy(&self) -> bool;
}

/// String rule shared by every string-like type.
pub(crate) fn str_is_truthy(s: &str) -> bool {
    !(s.is_empty() || s == "0")
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! int_truthy {
    ($($t:ty),*) => {
        $(impl Truthy for $t {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

int_truthy!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        str_is_truthy(self)
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        str_is_truthy(self)
    }
}

impl Truthy for Arc<str> {
    fn is_truthy(&self) -> bool {
        str_is_truthy(self)
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}
