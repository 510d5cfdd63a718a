// Reconciler library root.
// Reads service commissions out of heterogeneous backend records and writes edits
// back in whatever layout the record already uses.

pub mod config;
pub mod data;
pub mod error;
pub mod schema;
pub mod services;

pub use error::ReconcilerError;
pub use services::{build_patch, extract_known_fields, resolve, CommissionService};
