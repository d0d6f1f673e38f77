//! Error types for schema edits

use thiserror::Error;

/// Reasons an edit cannot be applied
///
/// The plain operation functions turn any of these into a no-op; the
/// `try_` variants surface them to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("Root schema not found: {0}")]
    RootNotFound(String),

    #[error("Root schema already exists: {0}")]
    RootExists(String),

    #[error("Expected an array schema with items, found '{0}'")]
    NotAnArray(String),

    #[error("Expected an object schema with properties, found '{0}'")]
    NotAnObject(String),

    #[error("Property not found: {0}")]
    PropertyNotFound(String),

    #[error("Path does not address a property: {0}")]
    NotAProperty(String),

    #[error("Invalid name: {0:?}")]
    InvalidName(String),

    #[error("Invalid path: {0:?}")]
    InvalidPath(String),
}
