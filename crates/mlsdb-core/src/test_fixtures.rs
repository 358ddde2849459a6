//! Shared test fixtures: listing builders for the query and predicate
//! tests.

use crate::schema::Listing;

/// Build a listing with sane defaults and per-test overrides.
pub(crate) fn listing(id: &str, configure: impl FnOnce(&mut Listing)) -> Listing {
    let mut row = Listing {
        listing_id: id.to_string(),
        standard_status: Some("Active".to_string()),
        property_type: Some("Residential".to_string()),
        modification_timestamp: "2024-01-01T00:00:00Z".to_string(),
        ..Listing::default()
    };
    configure(&mut row);

    row
}

/// An active residential listing near the metro centroid.
pub(crate) fn downtown_listing(id: &str, price: f64) -> Listing {
    listing(id, |l| {
        l.latitude = Some(42.3605);
        l.longitude = Some(-71.0590);
        l.list_price = Some(price);
        l.city = Some("Boston".to_string());
    })
}
