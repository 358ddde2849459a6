use serde_json::Value as Json;

/// The escaped-slash token legacy rows use inside delimited multi-value
/// strings (`"Colonial\/Revival"`).
const ESCAPED_SLASH: &str = "\\/";

///
/// Decode a legacy multi-value column into its tokens.
///
/// The column has accumulated three storage shapes over the feed's life:
/// a well-formed JSON array, a bracket/quote-stripped comma list, and
/// either of those with stray `√` marker characters. All three decode to
/// the same trimmed, non-empty token sequence, so the compiler (containment
/// matching) and the aggregator (token counting) can never disagree about
/// what a value is.
///

#[must_use]
pub fn decode_multi_value(raw: &str) -> Vec<String> {
    if let Ok(Json::Array(items)) = serde_json::from_str::<Json>(raw) {
        return items
            .iter()
            .filter_map(json_token)
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .collect();
    }

    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '"' | '√'))
        .collect();

    cleaned
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn json_token(item: &Json) -> Option<String> {
    match item {
        Json::String(s) => Some(s.clone()),
        Json::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

///
/// Replace the escaped-slash token with a literal slash.
///
/// Containment matching against legacy rows runs on this unescaped form;
/// otherwise stored escaping hides matches (`"2/3 Family"` would never
/// match a row storing `"2\/3 Family"`).
///

#[must_use]
pub fn unescape_slashes(raw: &str) -> String {
    raw.replace(ESCAPED_SLASH, "/")
}
