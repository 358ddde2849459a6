use crate::{
    filter::{FilterKey, FilterSpec},
    geo::Bounds,
    query::{
        LoadMode, aggregate, analyze, listing_details, listing_page, plan, select, suggest,
        total_for_filters,
        distribution::PRICE_BUCKET_COUNT,
        viewport::{FRESH_FILTER_LIMIT, INITIAL_LOAD_LIMIT, VIEWPORT_LIMIT},
    },
    source::{DataSource, MemorySource, OrderBy},
    test_fixtures::listing,
};
use mlsdb_utils::FieldCatalog;
use proptest::prelude::*;

// A small town's worth of rows: two downtown Boston sales, a Cambridge
// pending, a Salem sale, a Boston rental, a Boston outlier, and a closed
// commercial property far away.
fn town() -> MemorySource {
    vec![
        listing("L1", |l| {
            l.list_price = Some(500_000.0);
            l.city = Some("Boston".to_string());
            l.property_sub_type = Some("Condominium".to_string());
            l.latitude = Some(42.3610);
            l.longitude = Some(-71.0585);
            l.structure_type = Some(r#"["2\/3 Family"]"#.to_string());
            l.open_house_data = Some(r#"[{"OpenHouseDate":"2024-06-02"}]"#.to_string());
            l.bedrooms_total = Some(2);
            l.bathrooms_full = Some(1);
            l.modification_timestamp = "2024-05-01T10:00:00Z".to_string();
        }),
        listing("L2", |l| {
            l.list_price = Some(750_000.0);
            l.city = Some("Boston".to_string());
            l.property_sub_type = Some("Single Family Residence".to_string());
            l.latitude = Some(42.3630);
            l.longitude = Some(-71.0610);
            l.structure_type = Some("Detached".to_string());
            l.street_number = Some("12".to_string());
            l.street_name = Some("Main St".to_string());
            l.spa_yn = Some(true);
            l.bedrooms_total = Some(3);
            l.bathrooms_full = Some(2);
            l.bathrooms_half = Some(1);
            l.modification_timestamp = "2024-05-02T10:00:00Z".to_string();
        }),
        listing("L3", |l| {
            l.list_price = Some(1_200_000.0);
            l.standard_status = Some("Pending".to_string());
            l.city = Some("Cambridge".to_string());
            l.property_sub_type = Some("Single Family Residence".to_string());
            l.latitude = Some(42.3736);
            l.longitude = Some(-71.1097);
            l.structure_type = Some("Detached, Victorian".to_string());
            l.waterfront_yn = Some(true);
            l.bedrooms_total = Some(4);
            l.modification_timestamp = "2024-05-03T10:00:00Z".to_string();
        }),
        listing("L4", |l| {
            l.list_price = Some(300_000.0);
            l.city = Some("Salem".to_string());
            l.property_sub_type = Some("Condominium".to_string());
            l.latitude = Some(42.5195);
            l.longitude = Some(-70.8967);
            l.cooling_yn = Some(true);
            l.open_house_data = Some("{}".to_string());
            l.modification_timestamp = "2024-05-04T10:00:00Z".to_string();
        }),
        listing("L5", |l| {
            l.property_type = Some("Residential Lease".to_string());
            l.city = Some("Boston".to_string());
            l.availability_date = Some("2024-07-01".to_string());
            l.available_now = Some(true);
            l.modification_timestamp = "2024-05-05T10:00:00Z".to_string();
        }),
        listing("L6", |l| {
            l.list_price = Some(10_000_000.0);
            l.city = Some("Boston".to_string());
            l.latitude = Some(42.3580);
            l.longitude = Some(-71.0570);
            l.modification_timestamp = "2024-05-06T10:00:00Z".to_string();
        }),
        listing("L7", |l| {
            l.list_price = Some(2_000_000.0);
            l.standard_status = Some("Closed".to_string());
            l.property_type = Some("Commercial".to_string());
            l.city = Some("Springfield".to_string());
            l.latitude = Some(42.1015);
            l.longitude = Some(-72.5898);
            l.modification_timestamp = "2024-05-07T10:00:00Z".to_string();
        }),
    ]
    .into_iter()
    .collect()
}

fn priced(prices: &[f64]) -> MemorySource {
    prices
        .iter()
        .enumerate()
        .map(|(i, &price)| listing(&format!("P{i}"), |l| l.list_price = Some(price)))
        .collect()
}

fn downtown_bounds() -> Bounds {
    Bounds::new(42.40, 42.30, -71.00, -71.10)
}

// ---- distribution ------------------------------------------------------

#[test]
fn empty_dataset_yields_the_zeroed_distribution() {
    let result = analyze(&MemorySource::default(), &FilterSpec::new()).unwrap();

    assert_eq!(result.min, 0.0);
    assert_eq!(result.display_max, 0.0);
    assert!(result.buckets.is_empty());
    assert_eq!(result.outlier_count, 0);
}

#[test]
fn distribution_ignores_the_price_bounds_it_feeds() {
    let source = town();
    let unbounded = analyze(&source, &FilterSpec::new()).unwrap();
    let bounded = analyze(
        &source,
        &FilterSpec::new()
            .with(FilterKey::PriceMin, 600_000.0)
            .with(FilterKey::PriceMax, 800_000.0),
    )
    .unwrap();

    assert_eq!(unbounded, bounded);
}

#[test]
fn distribution_respects_other_filters() {
    let source = town();
    let boston = analyze(
        &source,
        &FilterSpec::new().with(FilterKey::City, ["Boston"]),
    )
    .unwrap();

    // Boston prices: 500k, 750k, 10M (the rental has no price).
    let total: u64 = boston.buckets.iter().sum::<u64>() + boston.outlier_count;
    assert_eq!(total, 3);
    assert_eq!(boston.min, 500_000.0);
}

#[test]
fn uniform_prices_collapse_into_bucket_zero() {
    let source = priced(&[400_000.0; 7]);
    let result = analyze(&source, &FilterSpec::new()).unwrap();

    assert_eq!(result.min, result.display_max);
    assert_eq!(result.buckets.len(), PRICE_BUCKET_COUNT);
    assert_eq!(result.buckets[0], 7);
    assert_eq!(result.buckets.iter().sum::<u64>(), 7);
    assert_eq!(result.outlier_count, 0);
}

#[test]
fn percentile_clip_pushes_extremes_into_the_outlier_count() {
    // Twenty evenly spread prices plus one wild outlier: the 95th
    // percentile lands on the last regular price.
    let mut prices: Vec<f64> = (1..=20).map(|n| f64::from(n) * 100_000.0).collect();
    prices.push(40_000_000.0);

    let result = analyze(&priced(&prices), &FilterSpec::new()).unwrap();

    assert_eq!(result.min, 100_000.0);
    assert_eq!(result.display_max, 2_000_000.0);
    assert_eq!(result.outlier_count, 1);
    assert_eq!(result.buckets.iter().sum::<u64>(), 20);
}

proptest! {
    #[test]
    fn bucket_sum_plus_outliers_counts_every_positive_price(
        prices in prop::collection::vec(1.0f64..5_000_000.0, 1..40)
    ) {
        let result = analyze(&priced(&prices), &FilterSpec::new()).unwrap();

        prop_assert_eq!(
            result.buckets.iter().sum::<u64>() + result.outlier_count,
            prices.len() as u64
        );
        prop_assert!(result.display_max >= result.min);
    }
}

// ---- facets ------------------------------------------------------------

#[test]
fn facet_values_cover_the_dataset() {
    let options = aggregate(&town(), &FieldCatalog::new(), &FilterSpec::new()).unwrap();

    assert_eq!(options.status, vec!["Active", "Closed", "Pending"]);
    assert_eq!(
        options.home_type,
        vec!["Condominium", "Single Family Residence"]
    );
}

#[test]
fn multi_value_facets_decode_both_storage_shapes() {
    let options = aggregate(&town(), &FieldCatalog::new(), &FilterSpec::new()).unwrap();

    let labels: Vec<(&str, &str, u64)> = options
        .structure_type
        .iter()
        .map(|o| (o.value.as_str(), o.label.as_str(), o.count))
        .collect();

    // JSON-array row, plain row, and legacy comma row all count; the
    // "2/3 Family" token renders as "2-3 Family" without changing its
    // grouping value. Options sort by label.
    assert_eq!(
        labels,
        vec![
            ("2/3 Family", "2-3 Family", 1),
            ("Detached", "Detached", 2),
            ("Victorian", "Victorian", 1),
        ]
    );
}

#[test]
fn amenity_facets_omit_zero_counts() {
    let options = aggregate(&town(), &FieldCatalog::new(), &FilterSpec::new()).unwrap();

    let keys: Vec<&str> = options.amenities.iter().map(|a| a.key.as_str()).collect();
    assert_eq!(
        keys,
        vec!["SpaYN", "WaterfrontYN", "CoolingYN", "open_house_only"]
    );

    let spa = &options.amenities[0];
    assert_eq!(spa.label, "Spa Present");
    assert_eq!(spa.count, 1);
}

#[test]
fn open_house_facet_ignores_sentinel_blobs() {
    let options = aggregate(&town(), &FieldCatalog::new(), &FilterSpec::new()).unwrap();

    let open_house = options
        .amenities
        .iter()
        .find(|a| a.key == "open_house_only")
        .unwrap();

    // L1 has real open-house data; L4's "{}" sentinel does not count.
    assert_eq!(open_house.label, "Open House Only");
    assert_eq!(open_house.count, 1);
}

#[test]
fn facet_counts_come_from_the_complement_predicate() {
    let source = town();
    let catalog = FieldCatalog::new();

    // A facet's own filter value never changes its own options...
    let active = aggregate(
        &source,
        &catalog,
        &FilterSpec::new().with(FilterKey::Status, ["Active"]),
    )
    .unwrap();
    let pending = aggregate(
        &source,
        &catalog,
        &FilterSpec::new().with(FilterKey::Status, ["Pending"]),
    )
    .unwrap();
    assert_eq!(active.status, pending.status);
    assert_eq!(active.status, vec!["Active", "Closed", "Pending"]);

    // ...but other filters do.
    let boston = aggregate(
        &source,
        &catalog,
        &FilterSpec::new().with(FilterKey::City, ["Boston"]),
    )
    .unwrap();
    let keys: Vec<&str> = boston.amenities.iter().map(|a| a.key.as_str()).collect();
    assert_eq!(keys, vec!["SpaYN", "open_house_only"]);
}

#[test]
fn facet_aggregation_never_mutates_the_spec() {
    let spec = FilterSpec::new()
        .with(FilterKey::Status, ["Active"])
        .with(FilterKey::City, ["Boston"]);
    let before = spec.clone();

    let _ = aggregate(&town(), &FieldCatalog::new(), &spec).unwrap();
    assert_eq!(spec, before);
}

// ---- viewport ----------------------------------------------------------

#[test]
fn initial_load_injects_defaults_and_ranks_by_distance() {
    let source = town();
    let page = select(
        &source,
        &Bounds::default(),
        &FilterSpec::new(),
        LoadMode::InitialLoad,
    )
    .unwrap();

    // The filter-wide total counts active residential listings without
    // the radius term (L1, L2, L4, L6); the radius keeps downtown only.
    assert_eq!(page.total, 4);
    let ids: Vec<&str> = page
        .listings
        .iter()
        .map(|s| s.listing.listing_id.as_str())
        .collect();
    assert_eq!(ids.len(), 3);
    assert!(ids.contains(&"L1") && ids.contains(&"L2") && ids.contains(&"L6"));

    let distances: Vec<f64> = page.listings.iter().map(|s| s.distance.unwrap()).collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn initial_load_with_filters_skips_the_default_predicate() {
    let viewport_plan = plan(
        &Bounds::default(),
        &FilterSpec::new().with(FilterKey::City, ["Cambridge"]),
        LoadMode::InitialLoad,
    );

    assert_eq!(viewport_plan.limit, INITIAL_LOAD_LIMIT);
    assert!(matches!(viewport_plan.order, OrderBy::Distance { .. }));

    // Cambridge is within the metro radius; the city filter still holds.
    let page = select(
        &town(),
        &Bounds::default(),
        &FilterSpec::new().with(FilterKey::City, ["Cambridge"]),
        LoadMode::InitialLoad,
    )
    .unwrap();
    let ids: Vec<&str> = page
        .listings
        .iter()
        .map(|s| s.listing.listing_id.as_str())
        .collect();
    assert_eq!(ids, vec!["L3"]);
}

#[test]
fn pan_zoom_bounds_constrain_rows_but_not_the_total() {
    let source = town();
    let spec = FilterSpec::new().with(FilterKey::City, ["Boston"]);
    let page = select(&source, &downtown_bounds(), &spec, LoadMode::PanZoom).unwrap();

    // Boston rows: L1, L2, L5, L6. The unmapped rental L5 drops out of
    // the viewport but stays in the total.
    assert_eq!(page.total, 4);
    let ids: Vec<&str> = page
        .listings
        .iter()
        .map(|s| s.listing.listing_id.as_str())
        .collect();
    assert_eq!(ids, vec!["L6", "L2", "L1"]); // last-modified descending
}

#[test]
fn degenerate_bounds_never_produce_a_containment_term() {
    let spec = FilterSpec::new().with(FilterKey::City, ["Boston"]);
    let viewport_plan = plan(&Bounds::default(), &spec, LoadMode::PanZoom);

    assert_eq!(viewport_plan.predicate, viewport_plan.base_predicate);
    assert_eq!(viewport_plan.limit, VIEWPORT_LIMIT);

    let page = select(&town(), &Bounds::default(), &spec, LoadMode::PanZoom).unwrap();
    assert_eq!(page.listings.len(), 4);
}

#[test]
fn fresh_filters_get_the_loose_cap() {
    let spec = FilterSpec::new().with(FilterKey::City, ["Boston"]);
    assert_eq!(
        plan(&downtown_bounds(), &spec, LoadMode::NewFilter).limit,
        FRESH_FILTER_LIMIT
    );

    // No active filters and not an initial load: also the loose cap.
    assert_eq!(
        plan(&Bounds::default(), &FilterSpec::new(), LoadMode::Default).limit,
        FRESH_FILTER_LIMIT
    );
    assert_eq!(
        plan(&Bounds::default(), &spec, LoadMode::Default).limit,
        VIEWPORT_LIMIT
    );
}

#[test]
fn count_only_fast_path_matches_the_base_count() {
    let source = town();
    let spec = FilterSpec::new().with(FilterKey::Status, ["Active"]);

    assert_eq!(total_for_filters(&source, &spec).unwrap(), 5);
    assert_eq!(total_for_filters(&source, &FilterSpec::new()).unwrap(), 7);
}

// ---- suggestions -------------------------------------------------------

#[test]
fn suggestions_union_street_and_address_matches() {
    let suggestions = suggest(&town(), "Main").unwrap();

    let pairs: Vec<(&str, &str)> = suggestions
        .iter()
        .map(|s| (s.kind.as_str(), s.value.as_str()))
        .collect();

    assert_eq!(
        pairs,
        vec![
            ("Street Name", "Main St"),
            ("Address", "12 Main St , Boston"),
        ]
    );
}

#[test]
fn suggestions_cap_at_the_limit() {
    let source: MemorySource = (0..30)
        .map(|i| {
            listing(&format!("C{i}"), |l| {
                l.city = Some(format!("Maintown {i:02}"));
            })
        })
        .collect();

    let suggestions = suggest(&source, "Maintown").unwrap();
    assert_eq!(suggestions.len(), 15);
    assert!(suggestions.iter().all(|s| !s.value.is_empty()));
    assert!(suggestions.iter().all(|s| s.kind == "City"));
}

#[test]
fn suggestions_skip_blank_values() {
    let source: MemorySource = vec![listing("B1", |l| {
        l.city = Some("   ".to_string());
        l.street_name = Some("Blank Way".to_string());
    })]
    .into_iter()
    .collect();

    let suggestions = suggest(&source, "Blank").unwrap();
    assert!(suggestions.iter().all(|s| !s.value.trim().is_empty()));
}

// ---- paged listings and details ---------------------------------------

#[test]
fn listing_pages_walk_newest_first() {
    let source = town();

    let first = listing_page(&source, &FilterSpec::new(), 1, 3).unwrap();
    assert_eq!(first.total, 7);
    let ids: Vec<&str> = first
        .listings
        .iter()
        .map(|l| l.listing_id.as_str())
        .collect();
    assert_eq!(ids, vec!["L7", "L6", "L5"]);

    let last = listing_page(&source, &FilterSpec::new(), 3, 3).unwrap();
    let ids: Vec<&str> = last
        .listings
        .iter()
        .map(|l| l.listing_id.as_str())
        .collect();
    assert_eq!(ids, vec!["L1"]);
}

#[test]
fn listing_details_is_an_exact_lookup() {
    let source = town();

    let found = listing_details(&source, "L3").unwrap().unwrap();
    assert_eq!(found.city.as_deref(), Some("Cambridge"));

    assert!(listing_details(&source, "NOPE").unwrap().is_none());
}

// Distribution and facet aggregation for the same spec share nothing but
// the immutable spec; interleaving them must not change either result.
#[test]
fn sidebar_queries_are_independent() {
    let source = town();
    let spec = FilterSpec::new().with(FilterKey::City, ["Boston"]);
    let catalog = FieldCatalog::new();

    let d1 = analyze(&source, &spec).unwrap();
    let f1 = aggregate(&source, &catalog, &spec).unwrap();
    let d2 = analyze(&source, &spec).unwrap();
    let f2 = aggregate(&source, &catalog, &spec).unwrap();

    assert_eq!(d1, d2);
    assert_eq!(f1, f2);
}

#[test]
fn datasource_is_object_safe_for_composition() {
    let source = town();
    let dynamic: &dyn DataSource = &source;

    let page = listing_page(dynamic, &FilterSpec::new(), 1, 2).unwrap();
    assert_eq!(page.total, 7);
    assert_eq!(page.listings.len(), 2);
}
