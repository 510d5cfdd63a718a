// Canonical commission model shared by the reconciler library and its CLI.
use serde::{Deserialize, Serialize};

/// How a commission value is interpreted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum CommissionKind {
    #[default]
    Percentage,
    Fixed,
}

impl CommissionKind {
    /// Label written into kind fields when serializing back to a backend payload.
    /// Both labels classify back to the same kind when read again.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommissionKind::Percentage => "%",
            CommissionKind::Fixed => "$",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommissionEntry {
    pub service_id: String,
    pub value: f64,
    pub kind: CommissionKind,
}

impl CommissionEntry {
    pub fn new(service_id: impl Into<String>, value: f64, kind: CommissionKind) -> Self {
        Self {
            service_id: service_id.into(),
            value,
            kind,
        }
    }

    pub fn percentage(service_id: impl Into<String>, value: f64) -> Self {
        Self::new(service_id, value, CommissionKind::Percentage)
    }

    pub fn fixed(service_id: impl Into<String>, value: f64) -> Self {
        Self::new(service_id, value, CommissionKind::Fixed)
    }

    /// Commission earned on a service sold at `service_price`.
    pub fn commission_for(&self, service_price: f64) -> f64 {
        if !service_price.is_finite() || service_price < 0.0 {
            return 0.0;
        }
        match self.kind {
            CommissionKind::Percentage => service_price * self.value / 100.0,
            CommissionKind::Fixed => self.value,
        }
    }
}

/// Whether the collection sits straight on the record or under a per-location (sede) map.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BindingScope {
    Direct,
    #[serde(rename = "by_sede")]
    ByLocation,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CollectionShape {
    Array,
    Object,
}

/// Where a commission collection lives inside an outer backend record.
/// Always derived from the record itself, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Binding {
    pub field_key: String,
    pub scope: BindingScope,
    pub collection_shape: CollectionShape,
}

/// Result of reading a record: the binding (if any) and entries sorted by service id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Resolution {
    pub binding: Option<Binding>,
    pub entries: Vec<CommissionEntry>,
}

impl Resolution {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entry(&self, service_id: &str) -> Option<&CommissionEntry> {
        self.entries.iter().find(|e| e.service_id == service_id)
    }
}
