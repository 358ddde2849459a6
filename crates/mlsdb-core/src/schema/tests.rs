use crate::{
    schema::{Field, Listing, decode_multi_value, unescape_slashes},
    value::Value,
};

fn listing() -> Listing {
    Listing {
        listing_id: "73001122".to_string(),
        street_number: Some("12".to_string()),
        street_name: Some("Main St".to_string()),
        city: Some("Boston".to_string()),
        bedrooms_total: Some(3),
        list_price: Some(750_000.0),
        spa_yn: Some(true),
        ..Listing::default()
    }
}

#[test]
fn field_reads_map_to_values() {
    let row = listing();

    assert_eq!(
        row.value(Field::ListingId),
        Value::Text("73001122".to_string())
    );
    assert_eq!(row.value(Field::BedroomsTotal), Value::Int(3));
    assert_eq!(row.value(Field::ListPrice), Value::Float(750_000.0));
    assert_eq!(row.value(Field::SpaYn), Value::Bool(true));
    assert_eq!(row.value(Field::WaterfrontYn), Value::Null);
    assert_eq!(row.value(Field::City), Value::Text("Boston".to_string()));
}

#[test]
fn composite_address_joins_present_parts() {
    let row = listing();
    assert_eq!(row.composite_address(), "12 Main St , Boston");

    let partial = Listing {
        street_name: Some("Main St".to_string()),
        ..Listing::default()
    };
    assert_eq!(partial.composite_address(), "Main St ,");
}

#[test]
fn decode_handles_json_arrays() {
    assert_eq!(
        decode_multi_value(r#"["Colonial","Victorian"]"#),
        vec!["Colonial", "Victorian"]
    );
    assert_eq!(
        decode_multi_value(r#"[" Ranch ", ""]"#),
        vec!["Ranch"]
    );
}

#[test]
fn decode_handles_stripped_comma_lists() {
    assert_eq!(
        decode_multi_value(r#"[Colonial, Victorian]"#),
        vec!["Colonial", "Victorian"]
    );
    assert_eq!(decode_multi_value("Cape, Ranch"), vec!["Cape", "Ranch"]);
}

#[test]
fn decode_strips_stray_markers() {
    assert_eq!(
        decode_multi_value("√Colonial,√ Ranch"),
        vec!["Colonial", "Ranch"]
    );
}

#[test]
fn decode_drops_empty_tokens() {
    assert!(decode_multi_value("").is_empty());
    assert!(decode_multi_value("[]").is_empty());
    assert!(decode_multi_value(" , ,").is_empty());
}

#[test]
fn unescape_restores_literal_slashes() {
    assert_eq!(unescape_slashes(r"2\/3 Family"), "2/3 Family");
    assert_eq!(unescape_slashes("2/3 Family"), "2/3 Family");
}

#[test]
fn listing_deserializes_from_feed_shape() {
    let row: Listing = serde_json::from_str(
        r#"{
            "ListingId": "73009911",
            "ListPrice": 425000,
            "StandardStatus": "Active",
            "BedroomsTotal": 2,
            "MLSPIN_LENDER_OWNED": true,
            "StructureType": "[\"Detached\"]"
        }"#,
    )
    .unwrap();

    assert_eq!(row.listing_id, "73009911");
    assert_eq!(row.list_price, Some(425_000.0));
    assert_eq!(row.lender_owned, Some(true));
    assert_eq!(row.structure_type.as_deref(), Some(r#"["Detached"]"#));
    assert_eq!(row.waterfront_yn, None);
}
