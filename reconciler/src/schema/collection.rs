// Normalizes a raw commission collection (array or keyed object) into unique entries.
use std::collections::HashMap;

use serde_json::Value;
use shared::models::CommissionEntry;

use super::entry::parse_entry;

/// Parses every item of `raw`, dropping malformed ones. Later items overwrite earlier
/// ones with the same service id but keep the position of the first occurrence.
/// The result is not sorted.
pub fn normalize_collection(raw: Option<&Value>) -> Vec<CommissionEntry> {
    let mut deduped = Deduped::default();
    match raw {
        Some(Value::Array(items)) => {
            for item in items {
                match parse_entry(item, None) {
                    Some(entry) => deduped.insert(entry),
                    None => tracing::debug!(?item, "Dropping unparsable commission item"),
                }
            }
        }
        Some(Value::Object(keyed)) => {
            for (key, item) in keyed {
                match parse_entry(item, Some(key)) {
                    Some(entry) => deduped.insert(entry),
                    None => tracing::debug!(key = %key, ?item, "Dropping unparsable commission item"),
                }
            }
        }
        _ => {}
    }
    deduped.entries
}

/// Runs already-typed entries through the same rules as parsed ones: trimmed non-empty ids,
/// finite non-negative values, last write wins per service id.
pub fn sanitize_entries(entries: &[CommissionEntry]) -> Vec<CommissionEntry> {
    let mut deduped = Deduped::default();
    for entry in entries {
        let service_id = entry.service_id.trim();
        if service_id.is_empty() {
            tracing::debug!(value = entry.value, "Dropping commission entry without service id");
            continue;
        }
        deduped.insert(CommissionEntry::new(
            service_id,
            shared::utils::number_format::sanitize_amount(entry.value),
            entry.kind,
        ));
    }
    deduped.entries
}

pub fn sort_by_service_id(entries: &mut [CommissionEntry]) {
    entries.sort_by(|a, b| a.service_id.cmp(&b.service_id));
}

// Insertion-ordered map keyed by service id.
#[derive(Default)]
struct Deduped {
    entries: Vec<CommissionEntry>,
    positions: HashMap<String, usize>,
}

impl Deduped {
    fn insert(&mut self, entry: CommissionEntry) {
        match self.positions.get(&entry.service_id) {
            Some(&pos) => self.entries[pos] = entry,
            None => {
                self.positions.insert(entry.service_id.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::models::CommissionKind;

    fn ids(entries: &[CommissionEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.service_id.as_str()).collect()
    }

    #[test]
    fn test_normalize_array_dedup_last_wins() {
        let raw = json!([
            { "servicio_id": "A", "valor": 1 },
            { "servicio_id": "A", "valor": 2 }
        ]);
        let entries = normalize_collection(Some(&raw));
        assert_eq!(entries, vec![CommissionEntry::percentage("A", 2.0)]);
    }

    #[test]
    fn test_normalize_array_keeps_first_insertion_order() {
        let raw = json!([
            { "servicio_id": "B", "valor": 1 },
            { "servicio_id": "A", "valor": 1 },
            { "servicio_id": "B", "valor": 5 }
        ]);
        let entries = normalize_collection(Some(&raw));
        assert_eq!(ids(&entries), vec!["B", "A"]);
        assert_eq!(entries[0].value, 5.0);
    }

    #[test]
    fn test_normalize_array_skips_malformed_items() {
        let raw = json!([
            { "servicio_id": "A", "valor": 1 },
            15,
            null,
            { "valor": 3 },
            { "servicio_id": "C", "valor": 3, "tipo": "$" }
        ]);
        let entries = normalize_collection(Some(&raw));
        assert_eq!(ids(&entries), vec!["A", "C"]);
        assert_eq!(entries[1].kind, CommissionKind::Fixed);
    }

    #[test]
    fn test_normalize_keyed_shorthand() {
        let raw = json!({ "SV-1": 15 });
        let entries = normalize_collection(Some(&raw));
        assert_eq!(entries, vec![CommissionEntry::percentage("SV-1", 15.0)]);
    }

    #[test]
    fn test_normalize_keyed_records_with_inner_ids() {
        let raw = json!({
            "SV-1": { "valor": 10, "tipo": "monto" },
            "SV-2": { "servicio_id": "SV-1", "valor": 20 },
            "SV-3": [1]
        });
        let entries = normalize_collection(Some(&raw));
        assert_eq!(entries, vec![CommissionEntry::percentage("SV-1", 20.0)]);
    }

    #[test]
    fn test_normalize_other_inputs_are_empty() {
        assert!(normalize_collection(None).is_empty());
        assert!(normalize_collection(Some(&json!(null))).is_empty());
        assert!(normalize_collection(Some(&json!(42))).is_empty());
        assert!(normalize_collection(Some(&json!("SV-1"))).is_empty());
    }

    #[test]
    fn test_sanitize_entries() {
        let entries = vec![
            CommissionEntry::fixed(" A ", -4.0),
            CommissionEntry::percentage("", 10.0),
            CommissionEntry::percentage("B", f64::INFINITY),
            CommissionEntry::percentage("A", 7.0),
        ];
        let sanitized = sanitize_entries(&entries);
        assert_eq!(
            sanitized,
            vec![CommissionEntry::percentage("A", 7.0), CommissionEntry::percentage("B", 0.0)]
        );
    }

    #[test]
    fn test_sort_by_service_id_is_ordinal() {
        let mut entries = vec![
            CommissionEntry::percentage("b", 1.0),
            CommissionEntry::percentage("B", 1.0),
            CommissionEntry::percentage("A", 1.0),
            CommissionEntry::percentage("C", 1.0),
        ];
        sort_by_service_id(&mut entries);
        assert_eq!(ids(&entries), vec!["A", "B", "C", "b"]);
    }
}
