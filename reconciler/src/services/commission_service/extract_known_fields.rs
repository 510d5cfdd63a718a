// Copies the raw commission fields off a record so unrelated edits can re-submit them untouched.
use serde_json::{Map, Value};

use crate::schema::aliases::{BY_LOCATION_FIELDS, DIRECT_FIELDS};

pub fn extract_known_fields(source: &Value) -> Map<String, Value> {
    let Some(record) = source.as_object() else {
        return Map::new();
    };
    BY_LOCATION_FIELDS
        .iter()
        .chain(DIRECT_FIELDS)
        .filter_map(|name| record.get(*name).map(|value| (name.to_string(), value.clone())))
        .collect()
}
