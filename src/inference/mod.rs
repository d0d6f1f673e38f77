//! Schema inference engine for JSON data
//!
//! Turns example JSON documents into structural schemas.
//!
//! ## Features
//!
//! - **Type inference** - `null`, `string`, `number`, `boolean`, `object`, `array`
//! - **Date detection** - strings a date parser accepts get `format: "date-time"`
//! - **Schema merging** - array elements collapse into one item schema
//! - **Schema sets** - each member of a root object becomes a named schema
//!
//! ## Example
//!
//! ```rust
//! use schema_snap::inference::infer_schema_set;
//!
//! let set = infer_schema_set(r#"{"User": {"id": 1, "name": "Ann"}}"#).unwrap();
//! let user = set.get("User").unwrap().as_object().unwrap();
//! assert_eq!(user.required, vec!["id", "name"]);
//! ```

mod config;
mod error;
mod formats;
mod inferrer;
mod merge;

pub use config::{DateDetection, InferenceConfig, InferenceConfigBuilder};
pub use error::InferenceError;
pub use formats::{detect_date, is_permissive_date, is_strict_date};
pub use inferrer::{SchemaInferrer, infer_schema, infer_schema_set, infer_schema_set_from_value};
pub use merge::merge_schemas;
