//! Schema Snap - JSON Schema inference and editing
//!
//! Provides:
//! - Structural schema inference from sample JSON documents
//! - Path-addressed edits over sets of root schemas
//! - Validation of the document rules edits maintain
//! - A command line front end (feature `cli`)

pub mod editor;
pub mod inference;
pub mod models;
pub mod validation;

#[cfg(feature = "cli")]
pub mod cli;

pub use editor::{Edit, EditError, EditReport, SchemaPath, apply_edit, apply_edits};
pub use inference::{
    InferenceConfig, InferenceError, SchemaInferrer, infer_schema, infer_schema_set,
    merge_schemas,
};
pub use models::{
    Annotation, Format, IdStrategy, IdType, ObjectSchema, Schema, SchemaKind, SchemaSet,
    SchemaType,
};
pub use validation::{SchemaValidationResult, SchemaViolation, validate_schema_set};
