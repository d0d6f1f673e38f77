//! Structural checks for schema sets
//!
//! Walks every object node of every root and reports where the document
//! breaks the rules the editor maintains: each required name is declared,
//! no name is required twice, at most one identifier per object, and an
//! identifier is always required.

use std::collections::HashSet;
use std::fmt;

use crate::editor::{PathStep, SchemaPath};
use crate::models::{ObjectSchema, Schema, SchemaKind, SchemaSet};

/// A single rule violation, located by the path of the offending object
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaViolation {
    /// `required` names a property that is not declared
    UndeclaredRequired { path: SchemaPath, name: String },
    /// `required` lists the same name more than once
    DuplicateRequired { path: SchemaPath, name: String },
    /// Several siblings carry an identifier annotation
    MultipleIdentifiers { path: SchemaPath, names: Vec<String> },
    /// An identifier property is missing from `required`
    IdentifierNotRequired { path: SchemaPath, name: String },
}

impl SchemaViolation {
    /// Path of the object node the violation was found in
    pub fn path(&self) -> &SchemaPath {
        match self {
            SchemaViolation::UndeclaredRequired { path, .. }
            | SchemaViolation::DuplicateRequired { path, .. }
            | SchemaViolation::MultipleIdentifiers { path, .. }
            | SchemaViolation::IdentifierNotRequired { path, .. } => path,
        }
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaViolation::UndeclaredRequired { path, name } => {
                write!(f, "{path}: required property '{name}' is not declared")
            }
            SchemaViolation::DuplicateRequired { path, name } => {
                write!(f, "{path}: '{name}' is listed in required more than once")
            }
            SchemaViolation::MultipleIdentifiers { path, names } => {
                write!(f, "{path}: multiple identifiers: {}", names.join(", "))
            }
            SchemaViolation::IdentifierNotRequired { path, name } => {
                write!(f, "{path}: identifier '{name}' is not required")
            }
        }
    }
}

/// Result of validating a schema set
#[derive(Debug, Clone, Default)]
pub struct SchemaValidationResult {
    pub violations: Vec<SchemaViolation>,
}

impl SchemaValidationResult {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Check every object node in `set`
pub fn validate_schema_set(set: &SchemaSet) -> SchemaValidationResult {
    let mut result = SchemaValidationResult::default();
    for (name, schema) in set.iter() {
        validate_node(schema, SchemaPath::root(name), &mut result.violations);
    }
    result
}

fn validate_node(schema: &Schema, path: SchemaPath, violations: &mut Vec<SchemaViolation>) {
    match &schema.kind {
        SchemaKind::Object(object) => {
            validate_object(object, &path, violations);
            for (name, child) in &object.properties {
                let mut child_path = path.clone();
                child_path.steps.push(PathStep::Property(name.clone()));
                validate_node(child, child_path, violations);
            }
        }
        SchemaKind::Array(items) => validate_node(items, path.items(), violations),
        _ => {}
    }
}

fn validate_object(object: &ObjectSchema, path: &SchemaPath, violations: &mut Vec<SchemaViolation>) {
    let mut seen = HashSet::new();
    for name in &object.required {
        if !seen.insert(name.as_str()) {
            violations.push(SchemaViolation::DuplicateRequired {
                path: path.clone(),
                name: name.clone(),
            });
        } else if !object.properties.contains_key(name) {
            violations.push(SchemaViolation::UndeclaredRequired {
                path: path.clone(),
                name: name.clone(),
            });
        }
    }

    let identifiers: Vec<String> = object
        .properties
        .iter()
        .filter(|(_, child)| child.is_identifier())
        .map(|(name, _)| name.clone())
        .collect();

    for name in &identifiers {
        if !object.is_required(name) {
            violations.push(SchemaViolation::IdentifierNotRequired {
                path: path.clone(),
                name: name.clone(),
            });
        }
    }
    if identifiers.len() > 1 {
        violations.push(SchemaViolation::MultipleIdentifiers {
            path: path.clone(),
            names: identifiers,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Annotation, IdStrategy, SchemaType};

    fn object_set(object: ObjectSchema) -> SchemaSet {
        let mut set = SchemaSet::new();
        set.insert("User", Schema::array(Schema::object(object)));
        set
    }

    fn id_schema() -> Schema {
        Schema::of_type(SchemaType::String)
            .with_annotation(Annotation::Identifier(IdStrategy::Uuid))
    }

    #[test]
    fn test_valid_set() {
        let mut object = ObjectSchema::new();
        object.properties.insert("id".to_string(), id_schema());
        object.require("id");
        assert!(validate_schema_set(&object_set(object)).is_valid());
        assert!(validate_schema_set(&SchemaSet::new()).is_valid());
    }

    #[test]
    fn test_undeclared_and_duplicate_required() {
        let mut object = ObjectSchema::new();
        object
            .properties
            .insert("name".to_string(), Schema::of_type(SchemaType::String));
        object.required = vec!["name".to_string(), "ghost".to_string(), "name".to_string()];

        let result = validate_schema_set(&object_set(object));
        let path = SchemaPath::root("User").items();
        assert_eq!(
            result.violations,
            vec![
                SchemaViolation::UndeclaredRequired {
                    path: path.clone(),
                    name: "ghost".to_string()
                },
                SchemaViolation::DuplicateRequired {
                    path,
                    name: "name".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_identifier_rules() {
        let mut object = ObjectSchema::new();
        object.properties.insert("id".to_string(), id_schema());
        object.properties.insert("key".to_string(), id_schema());
        object.require("id");

        let result = validate_schema_set(&object_set(object));
        assert!(!result.is_valid());
        assert!(result.violations.contains(&SchemaViolation::IdentifierNotRequired {
            path: SchemaPath::root("User").items(),
            name: "key".to_string(),
        }));
        assert!(result.violations.contains(&SchemaViolation::MultipleIdentifiers {
            path: SchemaPath::root("User").items(),
            names: vec!["id".to_string(), "key".to_string()],
        }));
    }

    #[test]
    fn test_any_prisma_id_comment_counts_as_identifier() {
        let mut object = ObjectSchema::new();
        object.properties.insert(
            "a".to_string(),
            Schema::of_type(SchemaType::String)
                .with_annotation(Annotation::parse("prisma:id cuid")),
        );
        object.properties.insert("b".to_string(), id_schema());
        object.require("b");

        let result = validate_schema_set(&object_set(object));
        assert!(result.violations.contains(&SchemaViolation::IdentifierNotRequired {
            path: SchemaPath::root("User").items(),
            name: "a".to_string(),
        }));
        assert!(result.violations.contains(&SchemaViolation::MultipleIdentifiers {
            path: SchemaPath::root("User").items(),
            names: vec!["a".to_string(), "b".to_string()],
        }));
    }

    #[test]
    fn test_nested_violation_path() {
        let mut inner = ObjectSchema::new();
        inner.required = vec!["missing".to_string()];
        let mut outer = ObjectSchema::new();
        outer
            .properties
            .insert("profile".to_string(), Schema::object(inner));
        outer.require("profile");

        let result = validate_schema_set(&object_set(outer));
        assert_eq!(result.violations.len(), 1);
        assert_eq!(
            result.violations[0].to_string(),
            "User.items.properties.profile: required property 'missing' is not declared"
        );
    }
}
