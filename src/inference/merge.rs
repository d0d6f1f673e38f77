//! Schema merging
//!
//! Combines the schemas inferred for the elements of an array into a single
//! representative schema.

use indexmap::IndexMap;

use crate::models::{ObjectSchema, Schema, SchemaKind, SchemaType};

/// Merge multiple schemas into a single schema
///
/// - All objects: properties are merged by name (recursively), and the
///   required list is the union of every input's required names.
/// - One distinct type tag: the first input is returned unchanged, so its
///   `format` and `$comment` survive.
/// - Several tags: a bare union of the tags in first-seen order. Union
///   inputs contribute their individual tags.
///
/// An empty input merges to `any`.
pub fn merge_schemas(mut schemas: Vec<Schema>) -> Schema {
    if schemas.is_empty() {
        return Schema::of_type(SchemaType::Any);
    }

    if schemas
        .iter()
        .all(|s| matches!(s.kind, SchemaKind::Object(_)))
    {
        return merge_object_schemas(schemas);
    }

    let tags = distinct_tags(&schemas);
    if tags.len() == 1 {
        return schemas.swap_remove(0);
    }

    Schema::new(SchemaKind::Union(tags))
}

/// Merge object schemas property-wise
fn merge_object_schemas(schemas: Vec<Schema>) -> Schema {
    let mut grouped: IndexMap<String, Vec<Schema>> = IndexMap::new();
    let mut merged = ObjectSchema::new();

    for schema in schemas {
        if let SchemaKind::Object(object) = schema.kind {
            for (name, child) in object.properties {
                grouped.entry(name).or_default().push(child);
            }
            // Union: required in at least one source means required
            for name in &object.required {
                merged.require(name);
            }
        }
    }

    merged.properties = grouped
        .into_iter()
        .map(|(name, children)| (name, merge_schemas(children)))
        .collect();

    Schema::object(merged)
}

/// Type tags across all schemas, flattened and in first-seen order
fn distinct_tags(schemas: &[Schema]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for schema in schemas {
        let own = match &schema.kind {
            SchemaKind::Union(union) => union.clone(),
            kind => vec![kind.type_name()],
        };
        for tag in own {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }
    tags
}
