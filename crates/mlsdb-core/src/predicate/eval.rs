use crate::{
    geo::haversine_miles,
    predicate::ast::{CompareOp, ComparePredicate, Predicate},
    schema::{Field, Listing, unescape_slashes},
    value::{Value, compare_eq, compare_order},
};
use std::cmp::Ordering;

///
/// Evaluate a predicate against a single listing row.
///
/// This is pure runtime evaluation: no planning, no schema access. Any
/// undefined comparison (Null operands, mismatched value families, rows
/// without coordinates for geo predicates) evaluates to `false`, which
/// mirrors SQL's NULL semantics in WHERE position.
///

#[must_use]
pub fn eval(row: &Listing, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::True => true,
        Predicate::False => false,

        Predicate::And(children) => children.iter().all(|child| eval(row, child)),
        Predicate::Or(children) => children.iter().any(|child| eval(row, child)),
        Predicate::Not(inner) => !eval(row, inner),

        Predicate::Compare(cmp) => eval_compare(row, cmp),

        Predicate::TrimmedEq { field, value } => on_text(row, *field, |actual| {
            actual.trim() == value.trim()
        }),

        Predicate::TextContains { field, value } => on_text(row, *field, |actual| {
            unescape_slashes(actual).contains(value.as_str())
        }),

        Predicate::JsonNotEmpty { field } => on_text(row, *field, |actual| {
            !actual.is_empty() && actual != "[]" && actual != "{}"
        }),

        Predicate::BathsAtLeast { min } => match (row.bathrooms_full, row.bathrooms_half) {
            (Some(full), Some(half)) => (full as f64) + 0.5 * (half as f64) >= *min,
            _ => false,
        },

        Predicate::WithinRadius { center, miles } => row
            .position()
            .is_some_and(|point| haversine_miles(*center, point) < *miles),

        Predicate::WithinBounds(bounds) => {
            row.position().is_some_and(|point| bounds.contains(point))
        }
    }
}

fn eval_compare(row: &Listing, cmp: &ComparePredicate) -> bool {
    let actual = row.value(cmp.field);

    match cmp.op {
        CompareOp::Eq => compare_eq(&actual, &cmp.value).unwrap_or(false),
        CompareOp::Ne => compare_eq(&actual, &cmp.value).is_some_and(|v| !v),

        CompareOp::Lt => compare_order(&actual, &cmp.value).is_some_and(Ordering::is_lt),
        CompareOp::Lte => compare_order(&actual, &cmp.value).is_some_and(Ordering::is_le),
        CompareOp::Gt => compare_order(&actual, &cmp.value).is_some_and(Ordering::is_gt),
        CompareOp::Gte => compare_order(&actual, &cmp.value).is_some_and(Ordering::is_ge),

        CompareOp::In => in_list(&actual, &cmp.value).unwrap_or(false),
    }
}

// Evaluate a text predicate only when the field holds non-null text.
fn on_text(row: &Listing, field: Field, f: impl FnOnce(&str) -> bool) -> bool {
    match row.value(field) {
        Value::Text(actual) => f(&actual),
        _ => false,
    }
}

/// Check whether a value equals any element of an IN-list.
fn in_list(actual: &Value, list: &Value) -> Option<bool> {
    let Value::List(items) = list else {
        return None;
    };

    let mut saw_valid = false;
    for item in items {
        match compare_eq(actual, item) {
            Some(true) => return Some(true),
            Some(false) => saw_valid = true,
            None => {}
        }
    }

    saw_valid.then_some(false)
}
