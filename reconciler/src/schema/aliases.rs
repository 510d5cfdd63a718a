// Field-name tables the backend has used over time for commission data.
// Order is significant everywhere: the first name present on a record wins.
use serde_json::{Map, Value};

pub const BY_LOCATION_FIELDS: &[&str] = &[
    "comisiones_por_sede",
    "comisiones_servicios_por_sede",
    "service_commissions_by_sede",
];

pub const DIRECT_FIELDS: &[&str] = &[
    "comisiones_por_servicio",
    "comisiones_servicios",
    "comision_por_servicio",
    "service_commissions",
];

pub const ID_FIELDS: &[&str] = &["servicio_id", "servicioId", "service_id", "serviceId", "id", "servicio"];

pub const VALUE_FIELDS: &[&str] = &["valor", "value", "comision", "amount", "monto", "porcentaje", "percentage"];

pub const KIND_FIELDS: &[&str] = &["tipo", "tipo_comision", "tipoComision", "type", "unidad", "unit"];

// Value fields that carry a single meaning regardless of kind. `porcentaje` and `monto`
// are kind-specific and get special handling when writing through a template.
// `percentage` is read last, so it is never written: a template carrying it next to
// `porcentaje` or `monto` would otherwise write a field the reader never looks at.
pub const GENERIC_VALUE_FIELDS: &[&str] = &["valor", "value", "comision", "amount"];

pub const PERCENTAGE_FIELD: &str = "porcentaje";
pub const FIXED_AMOUNT_FIELD: &str = "monto";

// Substrings (matched case-insensitively) that mark a kind label as a fixed amount.
pub const FIXED_KIND_MARKERS: &[&str] = &["$", "monto", "fixed", "fijo"];

// Field names used when no template dictates otherwise.
pub const CANONICAL_ID_FIELD: &str = "servicio_id";
pub const CANONICAL_VALUE_FIELD: &str = "valor";
pub const CANONICAL_KIND_FIELD: &str = "tipo";

/// Returns the first name in `names` that is a key of `record`, with its value.
/// A key holding `null` still counts as present.
pub fn first_present<'a>(record: &'a Map<String, Value>, names: &[&'static str]) -> Option<(&'static str, &'a Value)> {
    names
        .iter()
        .find_map(|name| record.get(*name).map(|value| (*name, value)))
}

pub fn first_present_key(record: &Map<String, Value>, names: &[&'static str]) -> Option<&'static str> {
    first_present(record, names).map(|(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_first_present_respects_table_order() {
        let rec = record(json!({ "id": "X", "service_id": "Y" }));
        assert_eq!(first_present(&rec, ID_FIELDS), Some(("service_id", &json!("Y"))));
    }

    #[test]
    fn test_first_present_counts_null_as_present() {
        let rec = record(json!({ "comisiones_por_sede": null, "comisiones_por_servicio": [] }));
        assert_eq!(first_present_key(&rec, BY_LOCATION_FIELDS), Some("comisiones_por_sede"));
    }

    #[test]
    fn test_first_present_none_when_missing() {
        let rec = record(json!({ "nombre": "Corte" }));
        assert!(first_present(&rec, KIND_FIELDS).is_none());
    }
}
