//! The data-source boundary: the engine issues predicates plus
//! ordering/limit metadata and never renders query text. Execution,
//! including geometric containment and great-circle distance, belongs to
//! the store behind the trait.

mod memory;


pub use memory::MemorySource;

use crate::{
    error::SourceError,
    geo::GeoPoint,
    predicate::Predicate,
    schema::{Field, Listing},
    value::Value,
};
use serde::Serialize;

///
/// Direction
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Direction {
    Asc,
    Desc,
}

///
/// OrderBy
///
/// Result ordering for a select. Distance ordering is ascending from its
/// origin; rows without coordinates sort last.
///

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum OrderBy {
    Field { field: Field, direction: Direction },
    Distance { from: GeoPoint },
}

impl OrderBy {
    /// The domain's default ordering: most recently modified first.
    #[must_use]
    pub const fn last_modified_desc() -> Self {
        Self::Field {
            field: Field::ModificationTimestamp,
            direction: Direction::Desc,
        }
    }
}

///
/// SelectQuery
///
/// A bounded row fetch: predicate, ordering, limit/offset, and an optional
/// origin for projecting a computed distance attribute onto each row.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SelectQuery {
    pub predicate: Predicate,
    pub order: OrderBy,
    pub limit: Option<u32>,
    pub offset: u32,
    pub distance_from: Option<GeoPoint>,
}

impl SelectQuery {
    #[must_use]
    pub const fn new(predicate: Predicate) -> Self {
        Self {
            predicate,
            order: OrderBy::last_modified_desc(),
            limit: None,
            offset: 0,
            distance_from: None,
        }
    }

    #[must_use]
    pub fn with_order(mut self, order: OrderBy) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn with_distance_from(mut self, from: GeoPoint) -> Self {
        self.distance_from = Some(from);
        self
    }
}

///
/// SelectedListing
///
/// A fetched row plus its projected distance, when the query asked for
/// one and the row has coordinates.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SelectedListing {
    pub listing: Listing,
    pub distance: Option<f64>,
}

///
/// DataSource
///
/// Abstract read-only tabular store over the listing table.
///
/// Contract notes:
/// - `distinct` returns distinct non-null, non-empty values in ascending
///   order (the engine relies on this for facet option ordering and for
///   per-field suggestion dedup).
/// - `column` returns raw values in natural row order with nulls skipped.
/// - Failures propagate unchanged; the engine performs no retries.
///

pub trait DataSource {
    /// Count rows matching a predicate.
    fn count(&self, predicate: &Predicate) -> Result<u64, SourceError>;

    /// Fetch rows matching a predicate with ordering, limit, and optional
    /// distance projection.
    fn select(&self, query: &SelectQuery) -> Result<Vec<SelectedListing>, SourceError>;

    /// Distinct non-null, non-empty values of a field under a predicate,
    /// ascending.
    fn distinct(&self, field: Field, predicate: &Predicate) -> Result<Vec<String>, SourceError>;

    /// Raw values of a field under a predicate, nulls skipped, natural
    /// row order.
    fn column(&self, field: Field, predicate: &Predicate) -> Result<Vec<Value>, SourceError>;
}
