//! Validation functionality
//!
//! Checks that a schema set follows the document rules every edit keeps:
//! required names are declared and unique, and each object has at most one
//! identifier, which is required.

pub mod schema;

pub use schema::{SchemaValidationResult, SchemaViolation, validate_schema_set};
