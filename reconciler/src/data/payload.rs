// Loading backend payloads and edited entry lists from JSON files (or stdin with "-").
use serde_json::Value;
use shared::models::{CommissionEntry, CommissionKind};
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::ReconcilerError;
use crate::schema::{normalize_collection, parse_entry, sanitize_entries};

pub struct PayloadLoader;

impl PayloadLoader {
    pub fn read_json(path: &Path) -> Result<Value, ReconcilerError> {
        let raw = if path.as_os_str() == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            fs::read_to_string(path)?
        };
        Ok(serde_json::from_str(&raw)?)
    }

    /// Reads a backend record. Anything other than a JSON object is rejected here,
    /// even though the reconciler itself tolerates it, since it is almost always a wrong file.
    pub fn load_record(path: &Path) -> Result<Value, ReconcilerError> {
        let value = Self::read_json(path)?;
        if !value.is_object() {
            return Err(ReconcilerError::PayloadError(format!(
                "Expected a JSON object in '{}'",
                path.display()
            )));
        }
        Ok(value)
    }

    /// Reads edited entries: the `entries` list printed by `reconcile resolve`, or any
    /// layout the backend uses (array of records or keyed object). Array items are parsed
    /// one by one, so both formats may be mixed in a file. Unparsable items are dropped.
    pub fn load_entries(path: &Path) -> Result<Vec<CommissionEntry>, ReconcilerError> {
        let value = Self::read_json(path)?;
        if !value.is_array() && !value.is_object() {
            return Err(ReconcilerError::PayloadError(format!(
                "Expected a JSON array or object of commission entries in '{}'",
                path.display()
            )));
        }
        let entries = match &value {
            Value::Array(items) => {
                let parsed: Vec<CommissionEntry> = items.iter().filter_map(Self::parse_edited_item).collect();
                sanitize_entries(&parsed)
            }
            _ => normalize_collection(Some(&value)),
        };
        tracing::debug!(path = %path.display(), entries = entries.len(), "Loaded edited commission entries");
        Ok(entries)
    }

    // Typed `resolve` output first; otherwise the backend-style parser, keeping a
    // typed `kind` field it does not know about.
    fn parse_edited_item(item: &Value) -> Option<CommissionEntry> {
        if let Ok(entry) = serde_json::from_value::<CommissionEntry>(item.clone()) {
            return Some(entry);
        }
        let mut entry = parse_entry(item, None)?;
        if let Some(kind) = item
            .get("kind")
            .and_then(|kind| serde_json::from_value::<CommissionKind>(kind.clone()).ok())
        {
            entry.kind = kind;
        }
        Some(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_json_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_record_valid() {
        let file = create_json_file(r#"{ "comisiones_por_servicio": { "SV-1": 15 } }"#);
        let record = PayloadLoader::load_record(file.path()).unwrap();
        assert!(record.get("comisiones_por_servicio").is_some());
    }

    #[test]
    fn test_load_record_rejects_non_object() {
        let file = create_json_file("[1, 2, 3]");
        let err = PayloadLoader::load_record(file.path()).unwrap_err();
        assert!(matches!(err, ReconcilerError::PayloadError(_)));
    }

    #[test]
    fn test_load_record_invalid_json() {
        let file = create_json_file("{ \"comisiones_por_servicio\": ");
        let err = PayloadLoader::load_record(file.path()).unwrap_err();
        assert!(matches!(err, ReconcilerError::JsonError { .. }));
    }

    #[test]
    fn test_load_record_missing_file() {
        let err = PayloadLoader::load_record(Path::new("no_such_payload.json")).unwrap_err();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_load_entries_in_resolve_output_format() {
        let file = create_json_file(
            r#"[
                { "service_id": "A", "value": 10, "kind": "fixed" },
                { "service_id": "B", "value": 2.5, "kind": "percentage" }
            ]"#,
        );
        let entries = PayloadLoader::load_entries(file.path()).unwrap();
        assert_eq!(
            entries,
            vec![CommissionEntry::fixed("A", 10.0), CommissionEntry::percentage("B", 2.5)]
        );
    }

    #[test]
    fn test_load_entries_mixed_items_keep_their_kind() {
        let file = create_json_file(
            r#"[
                { "service_id": "A", "value": 10, "kind": "fixed" },
                { "service_id": "B", "value": 2 },
                { "service_id": "C", "kind": "fixed" },
                { "servicio_id": "D", "valor": 4, "tipo": "monto" },
                { "service_id": "A", "value": 11, "kind": "fixed" }
            ]"#,
        );
        let entries = PayloadLoader::load_entries(file.path()).unwrap();
        assert_eq!(
            entries,
            vec![
                CommissionEntry::fixed("A", 11.0),
                CommissionEntry::percentage("B", 2.0),
                CommissionEntry::fixed("C", 0.0),
                CommissionEntry::fixed("D", 4.0),
            ]
        );
    }

    #[test]
    fn test_load_entries_from_array() {
        let file = create_json_file(
            r#"[
                { "service_id": "B", "value": 5, "unidad": "%" },
                { "servicio_id": "A", "valor": "12", "tipo": "$" },
                { "nota": "sin id" }
            ]"#,
        );
        let entries = PayloadLoader::load_entries(file.path()).unwrap();
        assert_eq!(
            entries,
            vec![CommissionEntry::percentage("B", 5.0), CommissionEntry::fixed("A", 12.0)]
        );
    }

    #[test]
    fn test_load_entries_from_keyed_object() {
        let file = create_json_file(r#"{ "SV-1": 15, "SV-2": { "valor": 3, "tipo": "monto" } }"#);
        let entries = PayloadLoader::load_entries(file.path()).unwrap();
        assert_eq!(
            entries,
            vec![CommissionEntry::percentage("SV-1", 15.0), CommissionEntry::fixed("SV-2", 3.0)]
        );
    }

    #[test]
    fn test_load_entries_rejects_scalar() {
        let file = create_json_file("42");
        assert!(PayloadLoader::load_entries(file.path()).is_err());
    }
}
