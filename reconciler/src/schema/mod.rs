// Commission payload schema handling: detection, parsing, normalization and serialization.
pub mod aliases;
pub mod collection;
pub mod detect;
pub mod entry;
pub mod serialize;

pub use collection::{normalize_collection, sanitize_entries, sort_by_service_id};
pub use detect::detect_binding;
pub use entry::{classify_kind, parse_entry};
pub use serialize::{serialize_collection, serialize_with_template};
