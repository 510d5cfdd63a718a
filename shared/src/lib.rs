pub mod models;
pub mod utils;

// Re-exported so callers can write `shared::CommissionEntry`.
pub use models::{Binding, BindingScope, CollectionShape, CommissionEntry, CommissionKind, Resolution};
