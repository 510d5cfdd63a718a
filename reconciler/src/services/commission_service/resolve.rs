// Read path: record -> binding + sorted entries.
use serde_json::Value;
use shared::models::Resolution;

use super::helpers::stored_collection;
use crate::schema::{detect_binding, normalize_collection, sort_by_service_id};

/// Reads the commission entries stored on `source`. Never fails: records without
/// commission data resolve to no binding and no entries.
pub fn resolve(source: &Value, location_id: Option<&str>) -> Resolution {
    let Some(binding) = detect_binding(source, location_id) else {
        return Resolution::empty();
    };

    let mut entries = normalize_collection(stored_collection(source, &binding, location_id));
    sort_by_service_id(&mut entries);

    tracing::debug!(
        field_key = %binding.field_key,
        ?location_id,
        entries = entries.len(),
        "Resolved service commissions"
    );
    Resolution {
        binding: Some(binding),
        entries,
    }
}
