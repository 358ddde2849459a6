use crate::{
    filter::{FilterKey, FilterSpec, FilterValue, compile},
    predicate::{CompareOp, ComparePredicate, Predicate},
    schema::Field,
    value::Value,
};
use proptest::prelude::*;

fn spec() -> FilterSpec {
    FilterSpec::new()
}

#[test]
fn empty_spec_compiles_to_nothing() {
    assert!(compile(&spec(), &[]).is_empty());
}

#[test]
fn keyword_values_trim_and_or_together() {
    let spec = spec().with(
        FilterKey::City,
        vec!["  Boston ".to_string(), "Cambridge".to_string()],
    );

    assert_eq!(
        compile(&spec, &[]),
        vec![Predicate::Or(vec![
            Predicate::trimmed_eq(Field::City, "Boston"),
            Predicate::trimmed_eq(Field::City, "Cambridge"),
        ])]
    );
}

#[test]
fn single_keyword_value_needs_no_or_wrapper() {
    let spec = spec().with(FilterKey::MlsNumber, ["73001122"]);

    assert_eq!(
        compile(&spec, &[]),
        vec![Predicate::trimmed_eq(Field::ListingId, "73001122")]
    );
}

#[test]
fn residential_umbrella_expands() {
    let spec = spec().with(FilterKey::PropertyType, "Residential");

    assert_eq!(
        compile(&spec, &[]),
        vec![Predicate::in_(
            Field::PropertyType,
            vec![
                Value::from("Residential"),
                Value::from("Residential Income")
            ],
        )]
    );

    let commercial = self::spec().with(FilterKey::PropertyType, "Commercial");
    assert_eq!(
        compile(&commercial, &[]),
        vec![Predicate::eq(Field::PropertyType, "Commercial")]
    );
}

#[test]
fn price_bounds_are_inclusive_integer_fragments() {
    let spec = spec()
        .with(FilterKey::PriceMin, 250_000.0)
        .with(FilterKey::PriceMax, 750_000.0);

    assert_eq!(
        compile(&spec, &[]),
        vec![
            Predicate::gte(Field::ListPrice, 250_000_i64),
            Predicate::lte(Field::ListPrice, 750_000_i64),
        ]
    );
}

#[test]
fn zero_bounds_are_inert() {
    let spec = spec()
        .with(FilterKey::PriceMin, 0.0)
        .with(FilterKey::SqftMin, 0.0);

    assert!(compile(&spec, &[]).is_empty());
}

#[test]
fn beds_plus_with_company_collapses_to_min() {
    let spec = spec().with(FilterKey::Beds, ["2", "3+"]);

    assert_eq!(
        compile(&spec, &[]),
        vec![Predicate::gte(Field::BedroomsTotal, 2_i64)]
    );
}

#[test]
fn beds_without_plus_or_together() {
    let spec = spec().with(FilterKey::Beds, ["2", "3"]);

    assert_eq!(
        compile(&spec, &[]),
        vec![Predicate::Or(vec![
            Predicate::eq(Field::BedroomsTotal, 2_i64),
            Predicate::eq(Field::BedroomsTotal, 3_i64),
        ])]
    );
}

#[test]
fn lone_plus_value_stays_open_ended() {
    let spec = spec().with(FilterKey::Beds, ["4+"]);

    assert_eq!(
        compile(&spec, &[]),
        vec![Predicate::gte(Field::BedroomsTotal, 4_i64)]
    );
}

#[test]
fn baths_min_uses_the_derived_quantity() {
    let spec = spec().with(FilterKey::BathsMin, 1.5);
    assert_eq!(compile(&spec, &[]), vec![Predicate::BathsAtLeast { min: 1.5 }]);
}

#[test]
fn membership_filters_build_in_lists() {
    let spec = spec().with(FilterKey::Status, ["Active", "Pending"]);

    assert_eq!(
        compile(&spec, &[]),
        vec![Predicate::in_(
            Field::StandardStatus,
            vec![Value::from("Active"), Value::from("Pending")],
        )]
    );
}

#[test]
fn legacy_multi_value_filters_use_containment() {
    let spec = spec().with(FilterKey::StructureType, ["2/3 Family", "Detached"]);

    assert_eq!(
        compile(&spec, &[]),
        vec![Predicate::Or(vec![
            Predicate::text_contains(Field::StructureType, "2/3 Family"),
            Predicate::text_contains(Field::StructureType, "Detached"),
        ])]
    );
}

#[test]
fn amenity_flags_require_true_only_when_set() {
    let spec = spec()
        .with(FilterKey::WaterfrontYn, true)
        .with(FilterKey::SpaYn, false);

    assert_eq!(
        compile(&spec, &[]),
        vec![Predicate::eq(Field::WaterfrontYn, true)]
    );
}

#[test]
fn available_by_accepts_only_the_strict_shape() {
    let valid = spec().with(FilterKey::AvailableBy, "2024-06-15");
    assert_eq!(
        compile(&valid, &[]),
        vec![Predicate::lte(Field::AvailabilityDate, "2024-06-15")]
    );

    for malformed in [
        "2024-13-01",
        "2024-00-10",
        "2024-06-32",
        "2024-6-15",
        "24-06-15",
        "2024/06/15",
        "not a date",
    ] {
        let spec = self::spec().with(FilterKey::AvailableBy, malformed);
        assert!(compile(&spec, &[]).is_empty(), "accepted {malformed:?}");
    }
}

#[test]
fn open_house_only_checks_the_blob_sentinels() {
    let spec = spec().with(FilterKey::OpenHouseOnly, true);

    assert_eq!(
        compile(&spec, &[]),
        vec![Predicate::JsonNotEmpty {
            field: Field::OpenHouseData
        }]
    );
}

#[test]
fn excluding_a_key_equals_compiling_without_it() {
    let spec = spec()
        .with(FilterKey::Status, ["Active"])
        .with(FilterKey::HomeType, ["Condominium"])
        .with(FilterKey::PriceMin, 100_000.0);

    let excluded = compile(&spec, &[FilterKey::Status]);
    let removed = compile(&spec.without(&[FilterKey::Status]), &[]);

    assert_eq!(excluded, removed);
    assert_eq!(excluded.len(), 2);
}

#[test]
fn without_leaves_the_original_untouched() {
    let original = spec().with(FilterKey::Status, ["Active"]);
    let complement = original.without(&[FilterKey::Status]);

    assert!(complement.is_empty());
    assert!(original.contains_key(&FilterKey::Status));
}

#[test]
fn tolerant_ingestion_drops_junk() {
    let spec: FilterSpec = serde_json::from_str(
        r#"{
            "price_min": "250000",
            "beds": ["2", "3+"],
            "status": "Active",
            "WaterfrontYN": 1,
            "bogus_key": [1, 2, 3],
            "available_by": ["not", "a", "string"]
        }"#,
    )
    .unwrap();

    assert_eq!(spec.active_number(FilterKey::PriceMin), Some(250_000.0));
    assert!(spec.is_set(FilterKey::WaterfrontYn));
    // status sent as a bare string where a list is expected: dropped
    assert_eq!(spec.get(&FilterKey::Status), None);
    assert_eq!(spec.get(&FilterKey::AvailableBy), None);
    assert_eq!(spec.len(), 3);
}

#[test]
fn inert_values_do_not_activate() {
    let spec = spec()
        .with(FilterKey::City, Vec::<String>::new())
        .with(FilterKey::PropertyType, "")
        .with(FilterKey::OpenHouseOnly, false);

    assert!(!spec.has_active_entries());
    assert!(compile(&spec, &[]).is_empty());
}

#[test]
fn range_fragment_shape_is_comparable() {
    let spec = spec().with(FilterKey::YearBuiltMin, 1900.0);

    assert_eq!(
        compile(&spec, &[]),
        vec![Predicate::Compare(ComparePredicate::new(
            Field::YearBuilt,
            CompareOp::Gte,
            Value::Int(1900),
        ))]
    );
}

fn arb_spec() -> impl Strategy<Value = FilterSpec> {
    let price = prop::option::of(1_000.0f64..2_000_000.0);
    let beds = prop::collection::vec(prop_oneof![Just("1"), Just("2"), Just("3+")], 0..3);
    let status = prop::collection::vec(prop_oneof![Just("Active"), Just("Pending")], 0..2);
    let waterfront = any::<bool>();

    (price, beds, status, waterfront).prop_map(|(price, beds, status, waterfront)| {
        let mut spec = FilterSpec::new();
        if let Some(price) = price {
            spec.insert(FilterKey::PriceMin, FilterValue::Number(price));
        }
        if !beds.is_empty() {
            spec.insert(
                FilterKey::Beds,
                FilterValue::TextSet(beds.iter().map(ToString::to_string).collect()),
            );
        }
        if !status.is_empty() {
            spec.insert(
                FilterKey::Status,
                FilterValue::TextSet(status.iter().map(ToString::to_string).collect()),
            );
        }
        if waterfront {
            spec.insert(FilterKey::WaterfrontYn, FilterValue::Flag(true));
        }
        spec
    })
}

proptest! {
    // Compilation is a pure function of the spec.
    #[test]
    fn compilation_is_deterministic(spec in arb_spec()) {
        prop_assert_eq!(compile(&spec, &[]), compile(&spec, &[]));
    }

    // Excluding keys is the same as removing them first.
    #[test]
    fn exclusion_matches_removal(spec in arb_spec()) {
        for key in [FilterKey::PriceMin, FilterKey::Beds, FilterKey::Status] {
            prop_assert_eq!(
                compile(&spec, &[key]),
                compile(&spec.without(&[key]), &[])
            );
        }
    }
}
