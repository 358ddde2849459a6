use crate::{
    error::SourceError,
    predicate::Predicate,
    schema::Field,
    source::DataSource,
};
use serde::Serialize;

/// Hard cap on suggestions across all fields.
pub const SUGGESTION_LIMIT: usize = 15;

/// Searched fields with their suggestion type labels, in union order.
/// The composite address comes last.
const SUGGESTION_FIELDS: [(Field, &str); 8] = [
    (Field::City, "City"),
    (Field::BuildingName, "Building Name"),
    (Field::MlsAreaMajor, "MLS Area Major"),
    (Field::MlsAreaMinor, "MLS Area Minor"),
    (Field::PostalCode, "Postal Code"),
    (Field::StreetName, "Street Name"),
    (Field::ListingId, "MLS Number"),
    (Field::Address, "Address"),
];

///
/// Suggestion
///
/// One autocomplete entry. Duplicate values across fields are permitted
/// (deduplication across types is a UI concern); no ranking is applied
/// beyond field order.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

///
/// Union substring matches for a term across the suggestion fields,
/// dropping empty values, capped at `SUGGESTION_LIMIT`.
///

pub fn suggest<S: DataSource + ?Sized>(
    source: &S,
    term: &str,
) -> Result<Vec<Suggestion>, SourceError> {
    let mut suggestions = Vec::new();

    for (field, label) in SUGGESTION_FIELDS {
        if suggestions.len() >= SUGGESTION_LIMIT {
            break;
        }

        let matches = source.distinct(field, &Predicate::text_contains(field, term))?;
        for value in matches {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                continue;
            }

            suggestions.push(Suggestion {
                kind: label.to_string(),
                value: trimmed.to_string(),
            });

            if suggestions.len() >= SUGGESTION_LIMIT {
                break;
            }
        }
    }

    Ok(suggestions)
}
