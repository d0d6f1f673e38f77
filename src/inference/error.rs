//! Error types for schema inference

use thiserror::Error;

/// Errors that can occur at the inference boundary
///
/// Inference itself never fails for a parsed JSON value; only the text parse
/// and the root shape check can reject input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InferenceError {
    /// Malformed JSON text
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// Root value is not a plain object
    #[error("Invalid JSON structure: expected object at root, found {0}")]
    InvalidStructure(String),
}

impl From<serde_json::Error> for InferenceError {
    fn from(e: serde_json::Error) -> Self {
        InferenceError::JsonParse(e.to_string())
    }
}
