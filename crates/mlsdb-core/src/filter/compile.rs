use crate::{
    filter::{FilterKey, FilterSpec},
    predicate::{CompareOp, ComparePredicate, Predicate},
    schema::Field,
    value::Value,
};

///
/// Filter compilation
///
/// Translates a FilterSpec into an ordered fragment list against the
/// listing schema. Fragment order is fixed; compiling the same spec twice
/// yields the same list. `exclude` suppresses keys for complement-predicate
/// construction and behaves identically to compiling `spec.without(keys)`.
///
/// Unrecognized keys never reach this layer (ingestion drops them); inert
/// values produce no fragment, never an always-true or always-false one.
///

/// Keyword/equality-group filters, in emission order. Each accepted value
/// is trimmed and exact-matched; values for the same field OR together.
const KEYWORD_FIELDS: [(FilterKey, Field); 8] = [
    (FilterKey::City, Field::City),
    (FilterKey::BuildingName, Field::BuildingName),
    (FilterKey::MlsAreaMajor, Field::MlsAreaMajor),
    (FilterKey::MlsAreaMinor, Field::MlsAreaMinor),
    (FilterKey::PostalCode, Field::PostalCode),
    (FilterKey::StreetName, Field::StreetName),
    (FilterKey::MlsNumber, Field::ListingId),
    (FilterKey::Address, Field::Address),
];

/// Integer-valued inclusive range bounds, in emission order after the
/// beds/baths/set-membership block.
const RANGE_FIELDS: [(FilterKey, Field, CompareOp); 10] = [
    (FilterKey::SqftMin, Field::LivingArea, CompareOp::Gte),
    (FilterKey::SqftMax, Field::LivingArea, CompareOp::Lte),
    (FilterKey::LotSizeMin, Field::LotSizeSquareFeet, CompareOp::Gte),
    (FilterKey::LotSizeMax, Field::LotSizeSquareFeet, CompareOp::Lte),
    (FilterKey::YearBuiltMin, Field::YearBuilt, CompareOp::Gte),
    (FilterKey::YearBuiltMax, Field::YearBuilt, CompareOp::Lte),
    (FilterKey::EntryLevelMin, Field::EntryLevel, CompareOp::Gte),
    (FilterKey::EntryLevelMax, Field::EntryLevel, CompareOp::Lte),
    (FilterKey::GarageSpacesMin, Field::GarageSpaces, CompareOp::Gte),
    (FilterKey::ParkingTotalMin, Field::ParkingTotal, CompareOp::Gte),
];

/// Boolean amenity filters. A set flag requires the column be true; an
/// absent or false flag never requires false.
pub const AMENITY_FIELDS: [(FilterKey, Field); 11] = [
    (FilterKey::SpaYn, Field::SpaYn),
    (FilterKey::WaterfrontYn, Field::WaterfrontYn),
    (FilterKey::ViewYn, Field::ViewYn),
    (FilterKey::WaterviewFlag, Field::WaterviewFlag),
    (FilterKey::PropertyAttachedYn, Field::PropertyAttachedYn),
    (FilterKey::LenderOwned, Field::LenderOwned),
    (FilterKey::AvailableNow, Field::AvailableNow),
    (FilterKey::SeniorCommunityYn, Field::SeniorCommunityYn),
    (FilterKey::OutdoorSpace, Field::OutdoorSpace),
    (FilterKey::DprFlag, Field::DprFlag),
    (FilterKey::CoolingYn, Field::CoolingYn),
];

/// Compile a filter spec into its ordered predicate fragments.
#[must_use]
pub fn compile(spec: &FilterSpec, exclude: &[FilterKey]) -> Vec<Predicate> {
    let mut fragments = Vec::new();
    let included = |key: FilterKey| !exclude.contains(&key);

    for (key, field) in KEYWORD_FIELDS {
        if !included(key) {
            continue;
        }
        if let Some(values) = spec.active_values(key) {
            let clauses: Vec<Predicate> = values
                .iter()
                .map(|value| Predicate::trimmed_eq(field, value.trim()))
                .collect();
            push_or(&mut fragments, clauses);
        }
    }

    if included(FilterKey::PropertyType) {
        if let Some(value) = spec.active_text(FilterKey::PropertyType) {
            // "Residential" is an umbrella over income property too.
            if value == "Residential" {
                fragments.push(Predicate::in_(
                    Field::PropertyType,
                    vec![Value::from("Residential"), Value::from("Residential Income")],
                ));
            } else {
                fragments.push(Predicate::eq(Field::PropertyType, value));
            }
        }
    }

    push_int_bound(
        &mut fragments,
        spec,
        exclude,
        FilterKey::PriceMin,
        Field::ListPrice,
        CompareOp::Gte,
    );
    push_int_bound(
        &mut fragments,
        spec,
        exclude,
        FilterKey::PriceMax,
        Field::ListPrice,
        CompareOp::Lte,
    );

    if included(FilterKey::Beds) {
        compile_beds(&mut fragments, spec);
    }

    if included(FilterKey::BathsMin) {
        if let Some(min) = spec.active_number(FilterKey::BathsMin) {
            fragments.push(Predicate::BathsAtLeast { min });
        }
    }

    push_membership(
        &mut fragments,
        spec,
        exclude,
        FilterKey::HomeType,
        Field::PropertySubType,
    );
    push_membership(
        &mut fragments,
        spec,
        exclude,
        FilterKey::Status,
        Field::StandardStatus,
    );

    for (key, field, op) in RANGE_FIELDS {
        push_int_bound(&mut fragments, spec, exclude, key, field, op);
    }

    push_containment(
        &mut fragments,
        spec,
        exclude,
        FilterKey::StructureType,
        Field::StructureType,
    );
    push_containment(
        &mut fragments,
        spec,
        exclude,
        FilterKey::ArchitecturalStyle,
        Field::ArchitecturalStyle,
    );

    for (key, field) in AMENITY_FIELDS {
        if included(key) && spec.is_set(key) {
            fragments.push(Predicate::eq(field, true));
        }
    }

    if included(FilterKey::AvailableBy) {
        if let Some(date) = spec.active_text(FilterKey::AvailableBy) {
            // Malformed dates are silently ignored, not errors.
            if valid_date_shape(date) {
                fragments.push(Predicate::lte(Field::AvailabilityDate, date));
            }
        }
    }

    if included(FilterKey::OpenHouseOnly) && spec.is_set(FilterKey::OpenHouseOnly) {
        fragments.push(Predicate::JsonNotEmpty {
            field: Field::OpenHouseData,
        });
    }

    fragments
}

/// The beds filter accepts exact counts ("2") and open-ended counts
/// ("3+"). When an open-ended value appears alongside any other value the
/// whole group collapses to `>= min(numeric values)`: the more specific
/// exact value is intentionally subsumed by the open-ended one.
fn compile_beds(fragments: &mut Vec<Predicate>, spec: &FilterSpec) {
    let Some(values) = spec.active_values(FilterKey::Beds) else {
        return;
    };

    let mut clauses = Vec::new();
    let mut numerics = Vec::new();
    let mut has_plus = false;

    for raw in values {
        let count = parse_leading_int(raw);
        numerics.push(count);

        if raw.contains('+') {
            has_plus = true;
            clauses.push(Predicate::gte(Field::BedroomsTotal, count));
        } else {
            clauses.push(Predicate::eq(Field::BedroomsTotal, count));
        }
    }

    if clauses.is_empty() {
        return;
    }

    if clauses.len() > 1 && has_plus {
        let min = numerics.iter().copied().min().unwrap_or(0);
        fragments.push(Predicate::gte(Field::BedroomsTotal, min));
    } else {
        push_or(fragments, clauses);
    }
}

fn push_or(fragments: &mut Vec<Predicate>, mut clauses: Vec<Predicate>) {
    match clauses.len() {
        0 => {}
        1 => fragments.push(clauses.swap_remove(0)),
        _ => fragments.push(Predicate::Or(clauses)),
    }
}

fn push_int_bound(
    fragments: &mut Vec<Predicate>,
    spec: &FilterSpec,
    exclude: &[FilterKey],
    key: FilterKey,
    field: Field,
    op: CompareOp,
) {
    if exclude.contains(&key) {
        return;
    }
    if let Some(bound) = spec.active_number(key) {
        fragments.push(Predicate::Compare(ComparePredicate::new(
            field,
            op,
            Value::Int(bound as i64),
        )));
    }
}

fn push_membership(
    fragments: &mut Vec<Predicate>,
    spec: &FilterSpec,
    exclude: &[FilterKey],
    key: FilterKey,
    field: Field,
) {
    if exclude.contains(&key) {
        return;
    }
    if let Some(values) = spec.active_values(key) {
        fragments.push(Predicate::in_(
            field,
            values.iter().map(|v| Value::from(v.clone())).collect(),
        ));
    }
}

fn push_containment(
    fragments: &mut Vec<Predicate>,
    spec: &FilterSpec,
    exclude: &[FilterKey],
    key: FilterKey,
    field: Field,
) {
    if exclude.contains(&key) {
        return;
    }
    if let Some(values) = spec.active_values(key) {
        let clauses: Vec<Predicate> = values
            .iter()
            .map(|value| Predicate::text_contains(field, value.as_str()))
            .collect();
        push_or(fragments, clauses);
    }
}

/// Leading-integer parse ("3+" → 3, "2" → 2, junk → 0).
fn parse_leading_int(raw: &str) -> i64 {
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();

    digits.parse().unwrap_or(0)
}

/// Strict `YYYY-MM-DD` shape check: four digits, month 01-12, day 01-31.
/// A shape rule, not calendar validation.
fn valid_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    if !raw
        .bytes()
        .enumerate()
        .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit())
    {
        return false;
    }

    let month = (bytes[5] - b'0') * 10 + (bytes[6] - b'0');
    let day = (bytes[8] - b'0') * 10 + (bytes[9] - b'0');

    (1..=12).contains(&month) && (1..=31).contains(&day)
}
