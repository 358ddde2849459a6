use serde_json::Value as Json;

///
/// Tolerant JSON blob decode.
///
/// Listing rows carry embedded JSON sub-objects (media, agents, open-house
/// data) that are occasionally truncated or empty upstream. Returns `None`
/// for empty input or invalid JSON rather than erroring.
///

#[must_use]
pub fn decode_json(raw: &str) -> Option<Json> {
    if raw.trim().is_empty() {
        return None;
    }

    serde_json::from_str(raw).ok()
}

///
/// Format a raw field value for display.
///
/// Handles the shapes that come out of the listing table:
/// - strings that are themselves JSON arrays/objects are decoded first
/// - arrays join their non-empty items with ", "
/// - booleans and the 0/1/yes/no encodings render as "No"/"Yes"
/// - null, empty, and "[]" render as the not-available string
///
/// Output is plain text; escaping is the rendering layer's problem.
///

#[must_use]
pub fn format_display_value(value: &Json, na_string: &str) -> String {
    let decoded;
    let value = match value {
        Json::String(s) if looks_like_json(s) => match decode_json(s) {
            Some(json) => {
                decoded = json;
                &decoded
            }
            None => value,
        },
        _ => value,
    };

    match value {
        Json::Array(items) => {
            let parts: Vec<&str> = items
                .iter()
                .filter_map(Json::as_str)
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .collect();

            if parts.is_empty() {
                na_string.to_string()
            } else {
                parts.join(", ")
            }
        }
        Json::Bool(flag) => yes_no(*flag),
        Json::Null => na_string.to_string(),
        Json::Number(n) => {
            if n.as_f64() == Some(1.0) {
                yes_no(true)
            } else if n.as_f64() == Some(0.0) {
                yes_no(false)
            } else {
                n.to_string()
            }
        }
        Json::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() || trimmed == "[]" {
                return na_string.to_string();
            }
            match trimmed.to_ascii_lowercase().as_str() {
                "yes" => yes_no(true),
                "no" => yes_no(false),
                _ => trimmed.to_string(),
            }
        }
        Json::Object(_) => na_string.to_string(),
    }
}

fn looks_like_json(s: &str) -> bool {
    let trimmed = s.trim();
    trimmed.starts_with('[') || trimmed.starts_with('{')
}

fn yes_no(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_string()
}
