// Shape detection: which known field carries the commissions, and how it is laid out.
use serde_json::{Map, Value};
use shared::models::{Binding, BindingScope, CollectionShape};

use super::aliases::{first_present_key, BY_LOCATION_FIELDS, DIRECT_FIELDS};

/// Detects the commission binding of `source`. Per-location fields take priority
/// over direct ones. Returns `None` for non-objects and records without a known field.
pub fn detect_binding(source: &Value, location_id: Option<&str>) -> Option<Binding> {
    let record = source.as_object()?;

    if let Some(field_key) = first_present_key(record, BY_LOCATION_FIELDS) {
        let sample = record
            .get(field_key)
            .and_then(Value::as_object)
            .and_then(|per_location| sample_location(per_location, location_id));
        let binding = Binding {
            field_key: field_key.to_string(),
            scope: BindingScope::ByLocation,
            collection_shape: shape_of(sample),
        };
        tracing::debug!(field_key, ?location_id, shape = ?binding.collection_shape, "Detected per-sede commission binding");
        return Some(binding);
    }

    let field_key = first_present_key(record, DIRECT_FIELDS)?;
    let binding = Binding {
        field_key: field_key.to_string(),
        scope: BindingScope::Direct,
        collection_shape: shape_of(record.get(field_key)),
    };
    tracing::debug!(field_key, shape = ?binding.collection_shape, "Detected direct commission binding");
    Some(binding)
}

// Prefer the requested sede's collection; otherwise any sede holding a collection.
fn sample_location<'a>(per_location: &'a Map<String, Value>, location_id: Option<&str>) -> Option<&'a Value> {
    location_id
        .and_then(|id| per_location.get(id))
        .filter(|v| is_collection(v))
        .or_else(|| per_location.values().find(|v| is_collection(v)))
}

fn is_collection(value: &Value) -> bool {
    value.is_array() || value.is_object()
}

fn shape_of(sample: Option<&Value>) -> CollectionShape {
    match sample {
        Some(Value::Object(_)) => CollectionShape::Object,
        // Arrays, and anything unrecognizable, default to the array layout.
        _ => CollectionShape::Array,
    }
}
