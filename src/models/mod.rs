//! Models module
//!
//! Defines the schema tree shared by the inference engine and the editor.

pub mod schema;
pub mod schema_set;

pub use schema::{
    Annotation, Format, IDENTIFIER_PREFIX, IdStrategy, IdType, ObjectSchema, Schema, SchemaKind,
    SchemaShapeError, SchemaType, UNION_SEPARATOR, UnknownTypeError,
};
pub use schema_set::SchemaSet;
