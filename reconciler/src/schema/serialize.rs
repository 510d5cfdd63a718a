// Writes canonical entries back in the layout and field names the backend already uses.
use serde_json::{Map, Value};
use shared::models::{CollectionShape, CommissionEntry, CommissionKind};
use shared::utils::number_format::amount_to_value;

use super::aliases::{
    first_present_key, CANONICAL_ID_FIELD, CANONICAL_KIND_FIELD, CANONICAL_VALUE_FIELD, FIXED_AMOUNT_FIELD,
    GENERIC_VALUE_FIELDS, ID_FIELDS, KIND_FIELDS, PERCENTAGE_FIELD,
};

/// Record using the canonical field names only.
pub fn minimal_record(entry: &CommissionEntry) -> Map<String, Value> {
    let mut record = Map::new();
    record.insert(CANONICAL_ID_FIELD.to_string(), Value::String(entry.service_id.clone()));
    record.insert(CANONICAL_VALUE_FIELD.to_string(), amount_to_value(entry.value));
    record.insert(CANONICAL_KIND_FIELD.to_string(), Value::String(entry.kind.as_str().to_string()));
    record
}

/// Renders `entry` as a copy of `template`, overwriting only the id, kind and value
/// fields the template already uses. Unknown sibling fields are carried over untouched.
pub fn serialize_with_template(entry: &CommissionEntry, template: Option<&Map<String, Value>>) -> Map<String, Value> {
    let Some(template) = template else {
        return minimal_record(entry);
    };

    let has_percentage = template.contains_key(PERCENTAGE_FIELD);
    let has_fixed = template.contains_key(FIXED_AMOUNT_FIELD);
    let generic_value_field = first_present_key(template, GENERIC_VALUE_FIELDS);

    // Templates that carry no value field at all are of no use.
    if generic_value_field.is_none() && !has_percentage && !has_fixed {
        return minimal_record(entry);
    }

    let mut record = template.clone();
    let id_field = first_present_key(template, ID_FIELDS).unwrap_or(CANONICAL_ID_FIELD);
    record.insert(id_field.to_string(), Value::String(entry.service_id.clone()));

    if let Some(kind_field) = first_present_key(template, KIND_FIELDS) {
        record.insert(kind_field.to_string(), Value::String(entry.kind.as_str().to_string()));
    }

    match generic_value_field {
        _ if has_percentage && has_fixed => {
            // Both fields stay present; only the one matching the kind carries the value.
            let (percentage, fixed) = match entry.kind {
                CommissionKind::Percentage => (entry.value, 0.0),
                CommissionKind::Fixed => (0.0, entry.value),
            };
            record.insert(PERCENTAGE_FIELD.to_string(), amount_to_value(percentage));
            record.insert(FIXED_AMOUNT_FIELD.to_string(), amount_to_value(fixed));
        }
        None if has_percentage => {
            record.insert(PERCENTAGE_FIELD.to_string(), amount_to_value(entry.value));
        }
        None => {
            record.insert(FIXED_AMOUNT_FIELD.to_string(), amount_to_value(entry.value));
        }
        Some(value_field) => {
            record.insert(value_field.to_string(), amount_to_value(entry.value));
        }
    }
    record
}

/// Serializes `entries` into the given collection shape, sampling a template
/// from `reference` (the collection currently stored by the backend).
pub fn serialize_collection(shape: CollectionShape, entries: &[CommissionEntry], reference: Option<&Value>) -> Value {
    match shape {
        CollectionShape::Array => {
            let template = first_record(reference);
            Value::Array(
                entries
                    .iter()
                    .map(|entry| Value::Object(serialize_with_template(entry, template)))
                    .collect(),
            )
        }
        CollectionShape::Object => {
            let mut keyed = Map::new();
            if is_numeric_shape(reference) {
                for entry in entries {
                    keyed.insert(entry.service_id.clone(), amount_to_value(entry.value));
                }
            } else {
                let template = first_record(reference);
                for entry in entries {
                    keyed.insert(
                        entry.service_id.clone(),
                        Value::Object(serialize_with_template(entry, template)),
                    );
                }
            }
            Value::Object(keyed)
        }
    }
}

fn items(reference: Option<&Value>) -> Box<dyn Iterator<Item = &Value> + '_> {
    match reference {
        Some(Value::Array(items)) => Box::new(items.iter()),
        Some(Value::Object(keyed)) => Box::new(keyed.values()),
        _ => Box::new(std::iter::empty()),
    }
}

fn first_record(reference: Option<&Value>) -> Option<&Map<String, Value>> {
    items(reference).find_map(Value::as_object)
}

// Every stored value is a bare number or string (vacuously true for an empty collection).
fn is_numeric_shape(reference: Option<&Value>) -> bool {
    items(reference).all(|v| v.is_number() || v.is_string())
}
