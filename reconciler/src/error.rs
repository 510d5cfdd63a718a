use thiserror::Error;

// Errors at the edges of the reconciler (files, settings, CLI input).
// The reconciliation operations themselves never fail.
#[derive(Error, Debug)]
pub enum ReconcilerError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Payload error: {0}")]
    PayloadError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let err: ReconcilerError = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err().into();
        assert!(err.to_string().starts_with("JSON error:"));
    }

    #[test]
    fn test_payload_error_message() {
        let err = ReconcilerError::PayloadError("expected a JSON object".to_string());
        assert_eq!(err.to_string(), "Payload error: expected a JSON object");
    }
}
