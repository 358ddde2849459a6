//! The query components: price distribution, facet aggregation, viewport
//! selection, suggestions, and the plain paged/detail lookups.
//!
//! Everything here is a pure function of its inputs plus the read-only
//! data source; components for the same spec can run concurrently without
//! synchronization.

pub mod distribution;
pub mod facets;
pub mod suggest;
pub mod viewport;

#[cfg(test)]
mod tests;

pub use distribution::{PriceDistribution, analyze};
pub use facets::{AmenityOption, FacetOption, FacetOptions, aggregate};
pub use suggest::{SUGGESTION_LIMIT, Suggestion, suggest};
pub use viewport::{LoadMode, MapPage, ViewportPlan, plan, select, total_for_filters};

use crate::{
    error::SourceError,
    filter::{FilterSpec, compile},
    predicate::{Predicate, conjoin},
    schema::{Field, Listing},
    source::{DataSource, SelectQuery},
};
use serde::Serialize;

/// Default page size for the plain listing query.
pub const DEFAULT_PAGE_LIMIT: u32 = 500;

///
/// ListingPage
///
/// One page of the plain (non-viewport) listing query, with the
/// filter-wide total for pagination.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ListingPage {
    pub listings: Vec<Listing>,
    pub total: u64,
}

///
/// Fetch one page of listings for a filter spec, most recently modified
/// first. Pages are 1-based.
///

pub fn listing_page<S: DataSource + ?Sized>(
    source: &S,
    spec: &FilterSpec,
    page: u32,
    limit: u32,
) -> Result<ListingPage, SourceError> {
    let base = conjoin(&compile(spec, &[]));
    let total = source.count(&base)?;

    let offset = page.saturating_sub(1).saturating_mul(limit);
    let listings = source
        .select(
            &SelectQuery::new(base)
                .with_limit(limit)
                .with_offset(offset),
        )?
        .into_iter()
        .map(|selected| selected.listing)
        .collect();

    Ok(ListingPage { listings, total })
}

///
/// Single-key exact lookup by listing identifier.
///

pub fn listing_details<S: DataSource + ?Sized>(
    source: &S,
    listing_id: &str,
) -> Result<Option<Listing>, SourceError> {
    let rows = source.select(
        &SelectQuery::new(Predicate::eq(Field::ListingId, listing_id)).with_limit(1),
    )?;

    Ok(rows.into_iter().next().map(|selected| selected.listing))
}
