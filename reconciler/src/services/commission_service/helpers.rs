// Helpers shared by the read and write paths of the commission service.
use serde_json::Value;
use shared::models::{Binding, BindingScope};

/// The commission collection `binding` points at inside `source`.
/// For per-sede bindings this is the collection of `location_id`, if any.
pub fn stored_collection<'a>(source: &'a Value, binding: &Binding, location_id: Option<&str>) -> Option<&'a Value> {
    let field = source.get(&binding.field_key)?;
    match binding.scope {
        BindingScope::Direct => Some(field),
        BindingScope::ByLocation => {
            let per_location = field.as_object()?;
            per_location.get(location_id?)
        }
    }
}
