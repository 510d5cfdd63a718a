// reconciler/src/services/commission_service/mod.rs
// Public commission operations and the CommissionService facade that applies
// configured defaults before dispatching to them.
use serde_json::{Map, Value};
use shared::models::{Binding, CommissionEntry, Resolution};

use crate::config::settings::ReconcilerSettings;

pub mod build_patch;
pub mod extract_known_fields;
pub mod helpers;
pub mod resolve;

pub use build_patch::build_patch;
pub use extract_known_fields::extract_known_fields;
pub use resolve::resolve;

pub struct CommissionService {
    settings: ReconcilerSettings,
}

impl CommissionService {
    pub fn new(settings: ReconcilerSettings) -> Self {
        CommissionService { settings }
    }

    pub fn settings(&self) -> &ReconcilerSettings {
        &self.settings
    }

    // An explicit sede wins over the configured default.
    fn location<'a>(&'a self, location_id: Option<&'a str>) -> Option<&'a str> {
        location_id.or(self.settings.default_location_id.as_deref())
    }

    pub fn resolve(&self, source: &Value, location_id: Option<&str>) -> Resolution {
        let location_id = self.location(location_id);
        tracing::info!(?location_id, "Resolving service commissions");
        resolve(source, location_id)
    }

    pub fn build_patch(
        &self,
        source: &Value,
        binding: Option<&Binding>,
        location_id: Option<&str>,
        entries: &[CommissionEntry],
    ) -> Map<String, Value> {
        let location_id = self.location(location_id);
        tracing::info!(
            field_key = ?binding.map(|b| b.field_key.as_str()),
            ?location_id,
            entries = entries.len(),
            "Building service commission patch"
        );
        build_patch(source, binding, location_id, entries)
    }

    pub fn extract_known_fields(&self, source: &Value) -> Map<String, Value> {
        extract_known_fields(source)
    }
}

impl Default for CommissionService {
    fn default() -> Self {
        Self::new(ReconcilerSettings::default())
    }
}
