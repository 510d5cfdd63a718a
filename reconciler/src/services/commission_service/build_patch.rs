// Write path: edited entries -> partial record holding only the reconciled field.
use serde_json::{Map, Value};
use shared::models::{Binding, BindingScope, CommissionEntry};

use super::helpers::stored_collection;
use crate::schema::{sanitize_entries, serialize_collection, sort_by_service_id};

/// Builds the patch that stores `entries` on `source` in the layout described by `binding`.
///
/// The patch holds a single key (`binding.field_key`) and is meant to be shallow-merged
/// into an update request. Templates are sampled from `source` as given here, so pass the
/// freshest copy of the record. An empty map means there is nothing to write.
pub fn build_patch(
    source: &Value,
    binding: Option<&Binding>,
    location_id: Option<&str>,
    entries: &[CommissionEntry],
) -> Map<String, Value> {
    let mut patch = Map::new();
    let (Some(binding), Some(record)) = (binding, source.as_object()) else {
        return patch;
    };

    if binding.scope == BindingScope::ByLocation && location_id.is_none() {
        tracing::warn!(field_key = %binding.field_key, "No sede given for a per-sede commission binding, skipping patch");
        return patch;
    }

    let mut entries = sanitize_entries(entries);
    sort_by_service_id(&mut entries);

    let reference = stored_collection(source, binding, location_id);
    let serialized = serialize_collection(binding.collection_shape, &entries, reference);

    let value = match (binding.scope, location_id) {
        (BindingScope::ByLocation, Some(location_id)) => {
            let mut per_location = record
                .get(&binding.field_key)
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default();
            per_location.insert(location_id.to_string(), serialized);
            Value::Object(per_location)
        }
        _ => serialized,
    };

    tracing::debug!(
        field_key = %binding.field_key,
        ?location_id,
        entries = entries.len(),
        "Built service commission patch"
    );
    patch.insert(binding.field_key.clone(), value);
    patch
}
