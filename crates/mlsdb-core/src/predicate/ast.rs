use crate::{
    geo::{Bounds, GeoPoint},
    schema::Field,
    value::Value,
};
use serde::Serialize;
use std::ops::{BitAnd, BitOr};

///
/// Predicate AST
///
/// Pure representation of query conditions over the listing schema. This
/// layer carries no execution semantics; the data source (or the bundled
/// in-memory evaluator) interprets it. Fragments compose via AND by
/// default; `normalize` guarantees that AND-position composition is
/// associative and commutative, so compiled fragments can be cached and
/// reused across components.
///

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    In,
}

///
/// ComparePredicate
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComparePredicate {
    pub field: Field,
    pub op: CompareOp,
    pub value: Value,
}

impl ComparePredicate {
    #[must_use]
    pub const fn new(field: Field, op: CompareOp, value: Value) -> Self {
        Self { field, op, value }
    }
}

///
/// Predicate
///
/// Comparison semantics for the domain-specific variants:
///
/// - `TrimmedEq`: exact match after trimming both the stored text and the
///   operand (keyword/equality-group filters).
/// - `TextContains`: substring containment against the *unescaped* stored
///   text (escaped-slash tokens replaced with literal slashes first).
/// - `JsonNotEmpty`: the column is non-null and neither the empty-array
///   nor the empty-object sentinel.
/// - `BathsAtLeast`: the derived quantity `BathroomsFull + 0.5 *
///   BathroomsHalf` meets the bound; rows missing either count never match.
/// - `WithinRadius` / `WithinBounds`: great-circle radius (haversine,
///   miles) and axis-aligned rectangle containment, both executed by the
///   data source; rows without coordinates never match.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Predicate {
    True,
    False,
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
    Compare(ComparePredicate),
    TrimmedEq { field: Field, value: String },
    TextContains { field: Field, value: String },
    JsonNotEmpty { field: Field },
    BathsAtLeast { min: f64 },
    WithinRadius { center: GeoPoint, miles: f64 },
    WithinBounds(Bounds),
}

impl Predicate {
    #[must_use]
    pub const fn and(preds: Vec<Self>) -> Self {
        Self::And(preds)
    }

    #[must_use]
    pub const fn or(preds: Vec<Self>) -> Self {
        Self::Or(preds)
    }

    #[expect(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(pred: Self) -> Self {
        Self::Not(Box::new(pred))
    }

    #[must_use]
    pub fn eq(field: Field, value: impl Into<Value>) -> Self {
        Self::Compare(ComparePredicate::new(field, CompareOp::Eq, value.into()))
    }

    #[must_use]
    pub fn ne(field: Field, value: impl Into<Value>) -> Self {
        Self::Compare(ComparePredicate::new(field, CompareOp::Ne, value.into()))
    }

    #[must_use]
    pub fn lt(field: Field, value: impl Into<Value>) -> Self {
        Self::Compare(ComparePredicate::new(field, CompareOp::Lt, value.into()))
    }

    #[must_use]
    pub fn lte(field: Field, value: impl Into<Value>) -> Self {
        Self::Compare(ComparePredicate::new(field, CompareOp::Lte, value.into()))
    }

    #[must_use]
    pub fn gt(field: Field, value: impl Into<Value>) -> Self {
        Self::Compare(ComparePredicate::new(field, CompareOp::Gt, value.into()))
    }

    #[must_use]
    pub fn gte(field: Field, value: impl Into<Value>) -> Self {
        Self::Compare(ComparePredicate::new(field, CompareOp::Gte, value.into()))
    }

    #[must_use]
    pub fn in_(field: Field, values: Vec<Value>) -> Self {
        Self::Compare(ComparePredicate::new(
            field,
            CompareOp::In,
            Value::List(values),
        ))
    }

    #[must_use]
    pub fn trimmed_eq(field: Field, value: impl Into<String>) -> Self {
        Self::TrimmedEq {
            field,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn text_contains(field: Field, value: impl Into<String>) -> Self {
        Self::TextContains {
            field,
            value: value.into(),
        }
    }
}

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}

impl BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::Or(vec![self, rhs])
    }
}
