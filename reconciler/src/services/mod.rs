// Services exposed by the reconciler library.
pub mod commission_service;

pub use commission_service::{build_patch, extract_known_fields, resolve, CommissionService};
