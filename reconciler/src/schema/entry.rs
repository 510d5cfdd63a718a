// Parses one raw collection item into a CommissionEntry.
use serde_json::{Map, Value};
use shared::models::{CommissionEntry, CommissionKind};
use shared::utils::number_format;

use super::aliases::{first_present, FIXED_KIND_MARKERS, ID_FIELDS, KIND_FIELDS, VALUE_FIELDS};

/// Parses `raw` into an entry. `fallback_id` is the map key when the item came from a
/// keyed collection. Returns `None` for items that cannot be understood.
pub fn parse_entry(raw: &Value, fallback_id: Option<&str>) -> Option<CommissionEntry> {
    match raw {
        // Shorthand `{ "SV-1": 15 }`: the key is the service id, the item is the value.
        Value::Number(_) | Value::String(_) => {
            let service_id = clean_id(fallback_id?)?;
            Some(CommissionEntry::percentage(
                service_id,
                number_format::to_amount(Some(raw)),
            ))
        }
        Value::Object(record) => parse_record(record, fallback_id),
        _ => None,
    }
}

fn parse_record(record: &Map<String, Value>, fallback_id: Option<&str>) -> Option<CommissionEntry> {
    let service_id = match first_present(record, ID_FIELDS) {
        Some((_, Value::Null)) | None => clean_id(fallback_id?)?,
        Some((_, Value::String(id))) => clean_id(id)?,
        Some(_) => return None,
    };

    let value = number_format::to_amount(first_present(record, VALUE_FIELDS).map(|(_, v)| v));
    let kind = first_present(record, KIND_FIELDS)
        .map(|(_, v)| classify_kind(v))
        .unwrap_or_default();

    Some(CommissionEntry::new(service_id, value, kind))
}

/// Fixed when the label mentions a currency sign or a fixed-amount keyword;
/// everything else, including non-strings, is a percentage.
pub fn classify_kind(raw: &Value) -> CommissionKind {
    let Some(label) = raw.as_str() else {
        return CommissionKind::Percentage;
    };
    let label = label.trim().to_lowercase();
    if FIXED_KIND_MARKERS.iter().any(|marker| label.contains(marker)) {
        CommissionKind::Fixed
    } else {
        CommissionKind::Percentage
    }
}

fn clean_id(id: &str) -> Option<String> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
