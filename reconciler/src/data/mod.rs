// Loading payloads from disk or stdin.
pub mod payload;
