use crate::{
    error::SourceError,
    filter::{FilterSpec, compile},
    geo::{Bounds, GeoPoint},
    predicate::{Predicate, conjoin},
    schema::Field,
    source::{DataSource, OrderBy, SelectQuery, SelectedListing},
};
use serde::Serialize;

/// Metro centroid anchoring the initial-load radius query.
pub const METRO_CENTER: GeoPoint = GeoPoint::new(42.3601, -71.0589);

/// Radius for the initial-load query, statute miles.
pub const INITIAL_RADIUS_MILES: f64 = 3.0;

/// Row cap for the distance-ranked initial load.
pub const INITIAL_LOAD_LIMIT: u32 = 250;

/// Row cap for viewport-bounded and default queries.
pub const VIEWPORT_LIMIT: u32 = 325;

/// Row cap for a freshly changed filter: the first paint of a new filter
/// should not be viewport-starved.
pub const FRESH_FILTER_LIMIT: u32 = 1000;

///
/// LoadMode
///
/// The three loading situations have incompatible relevance models.
/// "Just opened the page" wants distance-ranked rows near the metro
/// centroid; "changed the filters" wants a global sample; "panned the
/// map" wants strict viewport containment. Mode picks the geospatial
/// predicate, ordering, and cap accordingly.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadMode {
    InitialLoad,
    NewFilter,
    PanZoom,
    Default,
}

///
/// ViewportPlan
///
/// The decided query policy: the full predicate (base + geospatial term),
/// the base predicate alone (for `total`), ordering, row cap, and the
/// distance-projection origin when the mode ranks by distance.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ViewportPlan {
    pub predicate: Predicate,
    pub base_predicate: Predicate,
    pub order: OrderBy,
    pub limit: u32,
    pub distance_from: Option<GeoPoint>,
}

///
/// MapPage
///
/// Rows for the map/list view plus the filter-wide total (computed under
/// the base predicate, without any geospatial term).
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapPage {
    pub listings: Vec<SelectedListing>,
    pub total: u64,
}

///
/// Decide the query policy for a viewport request.
///
/// Rules, in precedence order:
/// - initial load: inject the default active-residential predicate when no
///   filters compiled, add the metro radius term, rank by distance, cap at
///   250, project the computed distance.
/// - pan/zoom with non-degenerate bounds: add the viewport containment
///   term, last-modified descending, cap at 325. Degenerate bounds (all
///   four edges zero) never produce a containment term.
/// - new filter: no geospatial term, last-modified descending, cap 1000.
/// - otherwise: no geospatial term, last-modified descending; cap 1000
///   when the spec has no active entries, else 325.
///

#[must_use]
pub fn plan(bounds: &Bounds, spec: &FilterSpec, mode: LoadMode) -> ViewportPlan {
    let mut fragments = compile(spec, &[]);

    if mode == LoadMode::InitialLoad && fragments.is_empty() {
        fragments.push(Predicate::eq(Field::StandardStatus, "Active"));
        fragments.push(Predicate::eq(Field::PropertyType, "Residential"));
    }

    let base = conjoin(&fragments);
    let no_filters = !spec.has_active_entries();

    let (predicate, order, limit, distance_from) = match mode {
        LoadMode::InitialLoad => (
            conjoin(&[
                base.clone(),
                Predicate::WithinRadius {
                    center: METRO_CENTER,
                    miles: INITIAL_RADIUS_MILES,
                },
            ]),
            OrderBy::Distance { from: METRO_CENTER },
            INITIAL_LOAD_LIMIT,
            Some(METRO_CENTER),
        ),
        LoadMode::PanZoom if !bounds.is_degenerate() => (
            conjoin(&[base.clone(), Predicate::WithinBounds(*bounds)]),
            OrderBy::last_modified_desc(),
            VIEWPORT_LIMIT,
            None,
        ),
        LoadMode::NewFilter => (
            base.clone(),
            OrderBy::last_modified_desc(),
            FRESH_FILTER_LIMIT,
            None,
        ),
        LoadMode::PanZoom | LoadMode::Default => (
            base.clone(),
            OrderBy::last_modified_desc(),
            if no_filters {
                FRESH_FILTER_LIMIT
            } else {
                VIEWPORT_LIMIT
            },
            None,
        ),
    };

    ViewportPlan {
        predicate,
        base_predicate: base,
        order,
        limit,
        distance_from,
    }
}

///
/// Execute a viewport request: plan, count the filter-wide total, fetch
/// the capped row set.
///

pub fn select<S: DataSource + ?Sized>(
    source: &S,
    bounds: &Bounds,
    spec: &FilterSpec,
    mode: LoadMode,
) -> Result<MapPage, SourceError> {
    let plan = plan(bounds, spec, mode);
    let total = source.count(&plan.base_predicate)?;

    let mut query = SelectQuery::new(plan.predicate)
        .with_order(plan.order)
        .with_limit(plan.limit);
    if let Some(from) = plan.distance_from {
        query = query.with_distance_from(from);
    }

    let listings = source.select(&query)?;

    Ok(MapPage { listings, total })
}

///
/// Count-only fast path: the filter-wide total under the base compiled
/// predicate, skipping all geospatial and ordering logic. No default
/// predicate is injected here.
///

pub fn total_for_filters<S: DataSource + ?Sized>(
    source: &S,
    spec: &FilterSpec,
) -> Result<u64, SourceError> {
    source.count(&conjoin(&compile(spec, &[])))
}
