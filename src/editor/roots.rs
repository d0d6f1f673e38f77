//! Root-level edits: create, rename and delete whole schemas

use super::error::EditError;
use super::{check_name, or_unchanged, unique_name};
use crate::models::{ObjectSchema, Schema, SchemaSet, SchemaType};

/// Base name for roots created by [`create_root`]
pub const NEW_ROOT_NAME: &str = "new_DB";

/// Property every new root starts with
pub const NEW_ROOT_PROPERTY: &str = "property_name";

/// Schema of a freshly created root: `array<object{property_name: string}>`
pub fn new_root_schema() -> Schema {
    let mut object = ObjectSchema::new();
    object.properties.insert(
        NEW_ROOT_PROPERTY.to_string(),
        Schema::of_type(SchemaType::String),
    );
    object.require(NEW_ROOT_PROPERTY);
    Schema::array(Schema::object(object))
}

/// Add a new root, returning the new set and the name it was given
///
/// The name is `new_DB`, suffixed `_1`, `_2`, … while taken.
pub fn create_root_named(set: &SchemaSet) -> (SchemaSet, String) {
    let name = unique_name(NEW_ROOT_NAME, |candidate| set.contains(candidate));
    let mut next = set.clone();
    next.insert(name.clone(), new_root_schema());
    (next, name)
}

/// Add a new root named `new_DB` (or the first free suffixed variant)
pub fn create_root(set: &SchemaSet) -> SchemaSet {
    create_root_named(set).0
}

/// Rename a root, keeping its schema
///
/// Blank names and names containing `.` are refused.
pub fn try_rename_root(set: &SchemaSet, old: &str, new: &str) -> Result<SchemaSet, EditError> {
    check_name(new)?;
    if !set.contains(old) {
        return Err(EditError::RootNotFound(old.to_string()));
    }
    if set.contains(new) {
        return Err(EditError::RootExists(new.to_string()));
    }

    let mut next = set.clone();
    next.rename(old, new);
    Ok(next)
}

/// Rename a root; no-op when `old` is missing or `new` is taken
pub fn rename_root(set: &SchemaSet, old: &str, new: &str) -> SchemaSet {
    or_unchanged(set, try_rename_root(set, old, new), "rename_root")
}

/// Remove a root
pub fn try_delete_root(set: &SchemaSet, name: &str) -> Result<SchemaSet, EditError> {
    let mut next = set.clone();
    next.remove(name)
        .ok_or_else(|| EditError::RootNotFound(name.to_string()))?;
    Ok(next)
}

/// Remove a root; no-op when it is missing
pub fn delete_root(set: &SchemaSet, name: &str) -> SchemaSet {
    or_unchanged(set, try_delete_root(set, name), "delete_root")
}
