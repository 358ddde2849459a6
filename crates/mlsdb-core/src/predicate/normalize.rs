use crate::predicate::ast::Predicate;

///
/// Normalize a predicate into a canonical, logically equivalent form.
///
/// Guarantees:
/// - Nested AND / OR nodes are flattened
/// - Neutral elements are removed (True in AND, False in OR)
/// - Annihilators short-circuit (False in AND, True in OR)
/// - Single-child AND / OR collapse to the child
/// - Double negation is eliminated
///
/// Compiled fragments are conjoined through this pass, which is what makes
/// AND-position composition associative and commutative for callers that
/// cache or reuse predicates.
///

#[must_use]
pub fn normalize(predicate: &Predicate) -> Predicate {
    match predicate {
        Predicate::And(children) => normalize_and(children),
        Predicate::Or(children) => normalize_or(children),
        Predicate::Not(inner) => normalize_not(inner),
        other => other.clone(),
    }
}

/// Conjoin a fragment list into a single normalized predicate.
///
/// An empty fragment list is the unconstrained query (`True`).
#[must_use]
pub fn conjoin(fragments: &[Predicate]) -> Predicate {
    normalize(&Predicate::And(fragments.to_vec()))
}

fn normalize_not(inner: &Predicate) -> Predicate {
    let normalized = normalize(inner);

    match normalized {
        Predicate::Not(double) => *double,
        Predicate::True => Predicate::False,
        Predicate::False => Predicate::True,
        other => Predicate::Not(Box::new(other)),
    }
}

fn normalize_and(children: &[Predicate]) -> Predicate {
    let mut flat = Vec::with_capacity(children.len());

    for child in children {
        match normalize(child) {
            Predicate::True => {}
            Predicate::False => return Predicate::False,
            Predicate::And(grandchildren) => flat.extend(grandchildren),
            other => flat.push(other),
        }
    }

    match flat.len() {
        0 => Predicate::True,
        1 => flat.swap_remove(0),
        _ => Predicate::And(flat),
    }
}

fn normalize_or(children: &[Predicate]) -> Predicate {
    let mut flat = Vec::with_capacity(children.len());

    for child in children {
        match normalize(child) {
            Predicate::False => {}
            Predicate::True => return Predicate::True,
            Predicate::Or(grandchildren) => flat.extend(grandchildren),
            other => flat.push(other),
        }
    }

    match flat.len() {
        0 => Predicate::False,
        1 => flat.swap_remove(0),
        _ => Predicate::Or(flat),
    }
}
