//! Dynamic value type for heterogeneous collections.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::collection::Collection;
use crate::error::{Error, Result};
use crate::key::Key;
use crate::truthy::{Truthy, str_is_truthy};
use crate::types::Type;

/// Dynamic value stored in a `Collection<Value>`.
///
/// Values are immutable and cheaply cloneable. A [`Value::Map`] element is a
/// *tuple*: a record-like entry addressed by field name.
#[derive(Clone, Default)]
pub enum Value {
    /// The nil value (represents absence).
    #[default]
    Nil,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(Arc<str>),
    /// Nested ordered mapping.
    Map(Collection<Value>),
}

impl Value {
    /// Returns the type of this value.
    #[must_use]
    pub const fn value_type(&self) -> Type {
        match self {
            Self::Nil => Type::Nil,
            Self::Bool(_) => Type::Bool,
            Self::Int(_) => Type::Int,
            Self::Float(_) => Type::Float,
            Self::String(_) => Type::String,
            Self::Map(_) => Type::Map,
        }
    }

    /// Returns true if this value is a tuple (a nested mapping).
    #[must_use]
    pub const fn is_tuple(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Attempts to extract the nested mapping.
    #[must_use]
    pub const fn as_map(&self) -> Option<&Collection<Value>> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Reads a field of a tuple.
    ///
    /// Returns `None` for non-tuples and for missing fields.
    #[must_use]
    pub fn field(&self, name: impl Into<Key>) -> Option<&Value> {
        self.as_map().and_then(|m| m.get(name))
    }

    /// Converts this value to a collection key.
    ///
    /// Integers are kept, strings are normalized like any other key, booleans
    /// become 0 or 1, floats are truncated toward zero and nil becomes the
    /// empty string.
    ///
    /// # Errors
    ///
    /// Returns `IllegalKey` for maps.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_key(&self) -> Result<Key> {
        match self {
            Self::Nil => Ok(Key::Str("".into())),
            Self::Bool(b) => Ok(Key::from(*b)),
            Self::Int(n) => Ok(Key::Int(*n)),
            Self::Float(n) => Ok(Key::Int(n.trunc() as i64)),
            Self::String(s) => Ok(Key::from(Arc::clone(s))),
            Self::Map(_) => Err(Error::illegal_key(Type::Map)),
        }
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Nil => false,
            Self::Bool(b) => *b,
            Self::Int(n) => *n != 0,
            Self::Float(n) => *n != 0.0,
            Self::String(s) => str_is_truthy(s),
            Self::Map(m) => m.any(),
        }
    }
}

// Strict equality: variants must match, floats follow IEEE 754
impl PartialEq for Value {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Nil => {}
            Self::Bool(b) => b.hash(state),
            Self::Int(n) => n.hash(state),
            // 0.0 and -0.0 are equal and must hash alike
            Self::Float(n) if *n == 0.0 => 0.0f64.to_bits().hash(state),
            Self::Float(n) => n.to_bits().hash(state),
            Self::String(s) => s.hash(state),
            Self::Map(m) => m.hash(state),
        }
    }
}

impl PartialOrd for Value {
    #[allow(clippy::cast_precision_loss)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Nil, Self::Nil) => Some(Ordering::Equal),
            (Self::Bool(a), Self::Bool(b)) => a.partial_cmp(b),
            (Self::Int(a), Self::Int(b)) => a.partial_cmp(b),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            // Int/Float comparison goes through f64
            (Self::Int(a), Self::Float(b)) => (*a as f64).partial_cmp(b),
            (Self::Float(a), Self::Int(b)) => a.partial_cmp(&(*b as f64)),
            (Self::String(a), Self::String(b)) => a.partial_cmp(b),
            (Self::Map(a), Self::Map(b)) => a.count().partial_cmp(&b.count()),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n:?}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Map(m) => write!(f, "{m:?}"),
        }
    }
}

/// String form used by `implode` and `unique`.
///
/// Nil and `false` render empty, `true` renders `1`, maps render `Array`.
/// Floats keep 14 significant digits and switch to `1.0E+20` style notation
/// outside the range `1e-4 ..= 1e14`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil | Self::Bool(false) => Ok(()),
            Self::Bool(true) => write!(f, "1"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) if n.is_nan() => write!(f, "NAN"),
            Self::Float(n) if n.is_infinite() => {
                write!(f, "{}INF", if *n < 0.0 { "-" } else { "" })
            }
            Self::Float(n) => f.write_str(&format_float(*n)),
            Self::String(s) => write!(f, "{s}"),
            Self::Map(_) => write!(f, "Array"),
        }
    }
}

const FLOAT_PRECISION: i32 = 14;

/// Formats a finite float with `FLOAT_PRECISION` significant digits.
fn format_float(n: f64) -> String {
    let fraction = usize::try_from(FLOAT_PRECISION - 1).unwrap_or(0);
    let scientific = format!("{n:.fraction$e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= FLOAT_PRECISION {
        let mantissa = trim_fraction(mantissa);
        let point = if mantissa.contains('.') { "" } else { ".0" };
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{mantissa}{point}E{sign}{}", exponent.unsigned_abs());
    }

    let decimals = usize::try_from(FLOAT_PRECISION - 1 - exponent).unwrap_or(0);
    trim_fraction(&format!("{n:.decimals$}")).to_string()
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Int(n) => Self::Int(n),
            Key::Str(s) => Self::String(s),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Nil, Into::into)
    }
}

impl From<Collection<Value>> for Value {
    fn from(m: Collection<Value>) -> Self {
        Self::Map(m)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Map(v.into_iter().map(Into::into).collect())
    }
}
