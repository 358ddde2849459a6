use crate::{
    error::SourceError,
    filter::{FilterKey, FilterSpec, compile},
    predicate::{Predicate, conjoin},
    schema::{Field, decode_multi_value},
    source::DataSource,
};
use mlsdb_utils::FieldCatalog;
use serde::Serialize;
use std::collections::BTreeMap;

/// Boolean amenity facets. A subset of the filterable amenity set:
/// `MLSPIN_AvailableNow` is filterable but not surfaced as a facet.
const AMENITY_FACETS: [(FilterKey, Field); 10] = [
    (FilterKey::SpaYn, Field::SpaYn),
    (FilterKey::WaterfrontYn, Field::WaterfrontYn),
    (FilterKey::ViewYn, Field::ViewYn),
    (FilterKey::WaterviewFlag, Field::WaterviewFlag),
    (FilterKey::PropertyAttachedYn, Field::PropertyAttachedYn),
    (FilterKey::LenderOwned, Field::LenderOwned),
    (FilterKey::SeniorCommunityYn, Field::SeniorCommunityYn),
    (FilterKey::OutdoorSpace, Field::OutdoorSpace),
    (FilterKey::DprFlag, Field::DprFlag),
    (FilterKey::CoolingYn, Field::CoolingYn),
];

/// Display normalization for one legacy token. The grouping value keeps
/// the stored spelling; only the label changes.
const LABEL_REWRITE: (&str, &str) = ("2/3 Family", "2-3 Family");

///
/// FacetOption
///
/// One selectable value of a multi-value facet, with its complement count.
///

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub value: String,
    pub label: String,
    pub count: u64,
}

///
/// AmenityOption
///
/// One boolean amenity (or the open-house pseudo-facet) with its
/// complement count. Only emitted when the count is strictly positive.
///

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AmenityOption {
    pub key: String,
    pub label: String,
    pub count: u64,
}

///
/// FacetOptions
///
/// Per-facet option sets for the filter sidebar. Every facet's counts are
/// computed under its complement predicate (the spec with that facet's
/// own key removed), so selecting an option never suppresses its
/// siblings.
///

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FacetOptions {
    pub home_type: Vec<String>,
    pub status: Vec<String>,
    pub structure_type: Vec<FacetOption>,
    pub architectural_style: Vec<FacetOption>,
    pub amenities: Vec<AmenityOption>,
}

///
/// Compute facet options for a filter spec.
///

pub fn aggregate<S: DataSource + ?Sized>(
    source: &S,
    catalog: &FieldCatalog,
    spec: &FilterSpec,
) -> Result<FacetOptions, SourceError> {
    let complement = |key: FilterKey| conjoin(&compile(spec, &[key]));

    let home_type = source.distinct(Field::PropertySubType, &complement(FilterKey::HomeType))?;
    let status = source.distinct(Field::StandardStatus, &complement(FilterKey::Status))?;

    let structure_type = multi_value_options(
        source,
        Field::StructureType,
        &complement(FilterKey::StructureType),
    )?;
    let architectural_style = multi_value_options(
        source,
        Field::ArchitecturalStyle,
        &complement(FilterKey::ArchitecturalStyle),
    )?;

    let mut amenities = Vec::new();
    for (key, field) in AMENITY_FACETS {
        let predicate = conjoin(&[complement(key), Predicate::eq(field, true)]);
        let count = source.count(&predicate)?;

        if count > 0 {
            amenities.push(AmenityOption {
                key: field.as_str().to_string(),
                label: catalog.label(field.as_str()),
                count,
            });
        }
    }

    let open_house = conjoin(&[
        complement(FilterKey::OpenHouseOnly),
        Predicate::JsonNotEmpty {
            field: Field::OpenHouseData,
        },
    ]);
    let open_house_count = source.count(&open_house)?;
    if open_house_count > 0 {
        amenities.push(AmenityOption {
            key: FilterKey::OpenHouseOnly.as_str().to_string(),
            label: "Open House Only".to_string(),
            count: open_house_count,
        });
    }

    Ok(FacetOptions {
        home_type,
        status,
        structure_type,
        architectural_style,
        amenities,
    })
}

/// Token counts for a legacy multi-value column, via the shared decode,
/// sorted by display label (ordinal).
fn multi_value_options<S: DataSource + ?Sized>(
    source: &S,
    field: Field,
    predicate: &Predicate,
) -> Result<Vec<FacetOption>, SourceError> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();

    for value in source.column(field, predicate)? {
        let Some(raw) = value.as_text() else {
            continue;
        };
        if raw.is_empty() {
            continue;
        }

        for token in decode_multi_value(raw) {
            *counts.entry(token).or_default() += 1;
        }
    }

    let (from, to) = LABEL_REWRITE;
    let mut options: Vec<FacetOption> = counts
        .into_iter()
        .map(|(value, count)| FacetOption {
            label: value.replace(from, to),
            value,
            count,
        })
        .collect();
    options.sort_by(|a, b| a.label.cmp(&b.label));

    Ok(options)
}
