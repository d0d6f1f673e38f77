//! Schema inference engine

use serde_json::Value;
use tracing::debug;

use super::config::InferenceConfig;
use super::error::InferenceError;
use super::formats::detect_date;
use super::merge::merge_schemas;
use crate::models::{ObjectSchema, Schema, SchemaKind, SchemaSet, SchemaType};

/// Schema inference engine
///
/// Walks a JSON value and builds its structural schema. Inference is always
/// whole-document: every call starts from scratch.
#[derive(Debug, Clone, Default)]
pub struct SchemaInferrer {
    config: InferenceConfig,
}

impl SchemaInferrer {
    /// Create a new schema inferrer with default configuration
    pub fn new() -> Self {
        Self::with_config(InferenceConfig::default())
    }

    /// Create a new schema inferrer with custom configuration
    pub fn with_config(config: InferenceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Infer the schema of a single JSON value
    pub fn infer(&self, value: &Value) -> Schema {
        match value {
            Value::Null => Schema::of_type(SchemaType::Null),
            Value::Bool(_) => Schema::of_type(SchemaType::Boolean),
            Value::Number(n) => {
                if self.config.distinguish_integers && (n.is_i64() || n.is_u64()) {
                    Schema::of_type(SchemaType::Integer)
                } else {
                    Schema::of_type(SchemaType::Number)
                }
            }
            Value::String(s) => {
                let schema = Schema::of_type(SchemaType::String);
                match detect_date(s, self.config.date_detection) {
                    Some(format) => schema.with_format(format),
                    None => schema,
                }
            }
            Value::Array(arr) => {
                if arr.is_empty() {
                    return Schema::array(Schema::of_type(SchemaType::Any));
                }
                let items = arr.iter().map(|item| self.infer(item)).collect();
                Schema::array(merge_schemas(items))
            }
            Value::Object(obj) => {
                let mut object = ObjectSchema::new();
                for (key, val) in obj {
                    object.properties.insert(key.clone(), self.infer(val));
                    // Every observed key is required
                    object.require(key);
                }
                Schema::new(SchemaKind::Object(object))
            }
        }
    }

    /// Infer a schema set from a parsed root value
    ///
    /// The root must be an object; each of its members becomes one root
    /// schema.
    pub fn infer_set(&self, root: &Value) -> Result<SchemaSet, InferenceError> {
        let Value::Object(members) = root else {
            return Err(InferenceError::InvalidStructure(
                value_type_name(root).to_string(),
            ));
        };

        let set: SchemaSet = members
            .iter()
            .map(|(name, value)| (name.clone(), self.infer(value)))
            .collect();

        debug!(roots = set.len(), "Inferred schema set");
        Ok(set)
    }

    /// Parse JSON text and infer a schema set from it
    pub fn infer_set_str(&self, text: &str) -> Result<SchemaSet, InferenceError> {
        let value: Value = serde_json::from_str(text)?;
        self.infer_set(&value)
    }
}

/// Infer the schema of a JSON value with the default configuration
pub fn infer_schema(value: &Value) -> Schema {
    SchemaInferrer::new().infer(value)
}

/// Parse JSON text and infer a schema set with the default configuration
pub fn infer_schema_set(text: &str) -> Result<SchemaSet, InferenceError> {
    SchemaInferrer::new().infer_set_str(text)
}

/// Infer a schema set from a parsed root value with the default configuration
pub fn infer_schema_set_from_value(root: &Value) -> Result<SchemaSet, InferenceError> {
    SchemaInferrer::new().infer_set(root)
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
