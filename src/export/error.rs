//! Export error types.

use thiserror::Error;

/// Errors that can occur while exporting a state graph
#[derive(Debug, Error)]
pub enum ExportError {
    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationFailed(err.to_string())
    }
}
