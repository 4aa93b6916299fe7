//! Public data portal response parsing.

use serde_json::Value;

use ratechart_core::calendars::HolidaySet;
use ratechart_core::types::Date;
use ratechart_traits::error::TraitError;

/// Result code the portal reports on success.
const RESULT_OK: &str = "00";

/// Parses a `getRestDeInfo` JSON response into a holiday set.
///
/// Holidays are read from `response.body.items.item[].locdate`. The portal
/// returns `item` as a bare object when a year has a single holiday and
/// `items` as an empty string when it has none; both are accepted. A
/// `locdate` may be a string or a number. Entries without a valid date are
/// skipped.
///
/// # Errors
///
/// Returns `TraitError::ParseError` if the body is not JSON, or
/// `TraitError::SourceNotAvailable` if the portal reports a failure code.
pub fn parse_holiday_response(body: &str) -> Result<HolidaySet, TraitError> {
    let root: Value =
        serde_json::from_str(body).map_err(|e| TraitError::ParseError(e.to_string()))?;

    if let Some(code) = root.pointer("/response/header/resultCode") {
        let code = scalar_text(code).unwrap_or_default();
        if code != RESULT_OK {
            let message = root
                .pointer("/response/header/resultMsg")
                .and_then(scalar_text)
                .unwrap_or_default();
            return Err(TraitError::SourceNotAvailable(format!(
                "portal returned {code}: {message}"
            )));
        }
    }

    let items: Vec<&Value> = match root.pointer("/response/body/items/item") {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(item @ Value::Object(_)) => vec![item],
        _ => Vec::new(),
    };

    let mut holidays = HolidaySet::new();
    for item in items {
        let Some(key) = item.get("locdate").and_then(scalar_text) else {
            tracing::warn!("Skipping holiday entry without locdate: {}", item);
            continue;
        };
        match Date::parse(&key) {
            Ok(date) => {
                holidays.insert(date);
            }
            Err(e) => tracing::warn!("Skipping holiday entry: {}", e),
        }
    }
    Ok(holidays)
}

/// Text of a JSON string or number.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
