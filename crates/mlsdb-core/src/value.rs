use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// Value
///
/// Scalar operand used in predicate comparisons and raw column reads.
///
/// Null → the column's value is SQL NULL / the field is `Option::None`.
/// Comparisons involving Null are undefined (`None`), never true.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Ordered list of values; used as the RHS of IN-list comparisons.
    List(Vec<Self>),
    Null,
}

impl Value {
    /// Build a `Value::List` from a slice of convertible items.
    pub fn from_slice<T>(items: &[T]) -> Self
    where
        T: Into<Self> + Clone,
    {
        Self::List(items.iter().cloned().map(Into::into).collect())
    }

    /// The numeric reading of this value, widening integers to floats.
    #[must_use]
    pub const fn as_numeric(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// The text reading of this value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Self::Null,
        }
    }
}

///
/// Equality under numeric widening.
///
/// Returns `None` when the comparison is undefined (Null operands or
/// incompatible families); callers treat that as a non-match.
///

#[must_use]
pub fn compare_eq(a: &Value, b: &Value) -> Option<bool> {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => Some(x == y),
        (Value::Text(x), Value::Text(y)) => Some(x == y),
        _ => match (a.as_numeric(), b.as_numeric()) {
            (Some(x), Some(y)) => Some(x == y),
            _ => None,
        },
    }
}

///
/// Ordering under numeric widening; text compares ordinally.
///
/// ISO date strings order correctly under the ordinal compare, which is
/// what the `available_by` fragment relies on.
///

#[must_use]
pub fn compare_order(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Text(x), Value::Text(y)) => Some(x.as_str().cmp(y.as_str())),
        _ => match (a.as_numeric(), b.as_numeric()) {
            (Some(x), Some(y)) => x.partial_cmp(&y),
            _ => None,
        },
    }
}
