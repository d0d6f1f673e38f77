//! Property-level edits addressed by [`SchemaPath`]
//!
//! Every edit works on a clone of the input set and only hands it back when
//! the whole edit succeeded, so a failed edit never leaves a half-applied
//! tree behind.

use super::error::EditError;
use super::path::{SchemaPath, resolve_mut, resolve_property_mut};
use super::roots::try_delete_root;
use super::{check_name, or_unchanged, unique_name};
use crate::models::{Annotation, IdType, Schema, SchemaKind, SchemaSet, SchemaType};

/// Base name for properties created by [`add_property`]
pub const NEW_PROPERTY_NAME: &str = "new_property";

/// Add a required string property to the object at `path`
///
/// When `path` addresses an array, the property goes into its item schema.
pub fn try_add_property(set: &SchemaSet, path: &SchemaPath) -> Result<SchemaSet, EditError> {
    let mut next = set.clone();
    let node = resolve_mut(&mut next, path)?;
    let node = if matches!(node.kind, SchemaKind::Array(_)) {
        node.items_mut()
            .ok_or_else(|| EditError::NotAnArray(path.to_string()))?
    } else {
        node
    };

    let type_name = node.type_name();
    let object = node
        .as_object_mut()
        .ok_or(EditError::NotAnObject(type_name))?;

    let name = unique_name(NEW_PROPERTY_NAME, |candidate| {
        object.properties.contains_key(candidate)
    });
    object
        .properties
        .insert(name.clone(), Schema::of_type(SchemaType::String));
    object.require(&name);

    Ok(next)
}

/// Add a property; no-op when `path` does not lead to an object
pub fn add_property(set: &SchemaSet, path: &SchemaPath) -> SchemaSet {
    or_unchanged(set, try_add_property(set, path), "add_property")
}

/// Remove the property at `path` together with its required entry
///
/// A root-only path removes the whole root. Removing the last required
/// property leaves an empty `required` list; object schemas always carry one.
pub fn try_delete_property(set: &SchemaSet, path: &SchemaPath) -> Result<SchemaSet, EditError> {
    if path.is_root() {
        return try_delete_root(set, &path.root);
    }

    let mut next = set.clone();
    let (object, name) = resolve_property_mut(&mut next, path)?;
    object.properties.shift_remove(name);
    object.unrequire(name);
    Ok(next)
}

/// Remove a property; no-op when it cannot be resolved
pub fn delete_property(set: &SchemaSet, path: &SchemaPath) -> SchemaSet {
    or_unchanged(set, try_delete_property(set, path), "delete_property")
}

/// Rename the property at `path`
///
/// A name already used by a sibling is suffixed `_1`, `_2`, … until free.
/// The property keeps its position and its required entry. Names containing
/// `.` are refused since the dotted path form could not address them.
pub fn try_rename_property(
    set: &SchemaSet,
    path: &SchemaPath,
    new_name: &str,
) -> Result<SchemaSet, EditError> {
    check_name(new_name)?;

    let mut next = set.clone();
    let (object, old_name) = resolve_property_mut(&mut next, path)?;
    if old_name == new_name {
        return Ok(next);
    }

    let final_name = unique_name(new_name, |candidate| {
        object.properties.contains_key(candidate)
    });
    let index = object
        .properties
        .get_index_of(old_name)
        .ok_or_else(|| EditError::PropertyNotFound(old_name.to_string()))?;
    let (_, schema) = object
        .properties
        .shift_remove_index(index)
        .ok_or_else(|| EditError::PropertyNotFound(old_name.to_string()))?;
    object.properties.shift_insert(index, final_name.clone(), schema);

    if let Some(entry) = object.required.iter_mut().find(|r| *r == old_name) {
        *entry = final_name;
    }

    Ok(next)
}

/// Rename a property; no-op when it cannot be resolved
pub fn rename_property(set: &SchemaSet, path: &SchemaPath, new_name: &str) -> SchemaSet {
    or_unchanged(
        set,
        try_rename_property(set, path, new_name),
        "rename_property",
    )
}

/// Change the type of the property at `path`
///
/// Substructure is rebuilt for the new type (empty object, or an array of
/// empty objects), an identifier annotation is revoked, and a format hint
/// only survives on strings.
pub fn try_change_property_type(
    set: &SchemaSet,
    path: &SchemaPath,
    new_type: SchemaType,
) -> Result<SchemaSet, EditError> {
    let mut next = set.clone();
    let (object, name) = resolve_property_mut(&mut next, path)?;
    let property = object
        .properties
        .get_mut(name)
        .ok_or_else(|| EditError::PropertyNotFound(name.to_string()))?;

    property.kind = SchemaKind::from_type(new_type);
    property.clear_identifier();
    if new_type != SchemaType::String {
        property.format = None;
    }

    Ok(next)
}

/// Change a property's type; no-op when it cannot be resolved
pub fn change_property_type(set: &SchemaSet, path: &SchemaPath, new_type: SchemaType) -> SchemaSet {
    or_unchanged(
        set,
        try_change_property_type(set, path, new_type),
        "change_property_type",
    )
}

/// Flip whether the property at `path` is required
///
/// Identifier fields are always required: toggling one only makes sure it
/// is in the required list.
pub fn try_toggle_required(set: &SchemaSet, path: &SchemaPath) -> Result<SchemaSet, EditError> {
    let mut next = set.clone();
    let (object, name) = resolve_property_mut(&mut next, path)?;
    let is_identifier = object
        .properties
        .get(name)
        .is_some_and(Schema::is_identifier);

    if is_identifier || !object.is_required(name) {
        object.require(name);
    } else {
        object.unrequire(name);
    }

    Ok(next)
}

/// Toggle required; no-op when the property cannot be resolved
pub fn toggle_required(set: &SchemaSet, path: &SchemaPath) -> SchemaSet {
    or_unchanged(set, try_toggle_required(set, path), "toggle_required")
}

/// Make the property at `path` its object's identifier
///
/// The property becomes a `string` (uuid) or `number` (autoincrement)
/// identifier, any sibling identifier loses its annotation, and the
/// property is forced into the required list.
pub fn try_mark_property_as_id(
    set: &SchemaSet,
    path: &SchemaPath,
    id_type: IdType,
) -> Result<SchemaSet, EditError> {
    let mut next = set.clone();
    let (object, name) = resolve_property_mut(&mut next, path)?;

    for (sibling, schema) in object.properties.iter_mut() {
        if sibling != name {
            schema.clear_identifier();
        }
    }

    let property = object
        .properties
        .get_mut(name)
        .ok_or_else(|| EditError::PropertyNotFound(name.to_string()))?;
    property.kind = id_type.kind();
    if id_type != IdType::String {
        property.format = None;
    }
    property.annotation = Some(Annotation::Identifier(id_type.strategy()));

    object.require(name);
    Ok(next)
}

/// Mark a property as identifier; no-op when it cannot be resolved
pub fn mark_property_as_id(set: &SchemaSet, path: &SchemaPath, id_type: IdType) -> SchemaSet {
    or_unchanged(
        set,
        try_mark_property_as_id(set, path, id_type),
        "mark_property_as_id",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Format, IdStrategy, ObjectSchema};

    /// `User: array<object{id: number, name: string, profile: object{bio: string}}>`
    fn user_set() -> SchemaSet {
        let mut profile = ObjectSchema::new();
        profile
            .properties
            .insert("bio".to_string(), Schema::of_type(SchemaType::String));
        profile.require("bio");

        let mut user = ObjectSchema::new();
        user.properties
            .insert("id".to_string(), Schema::of_type(SchemaType::Number));
        user.properties.insert(
            "name".to_string(),
            Schema::of_type(SchemaType::String).with_format(Format::DateTime),
        );
        user.properties
            .insert("profile".to_string(), Schema::object(profile));
        user.require("id");
        user.require("name");
        user.require("profile");

        let mut set = SchemaSet::new();
        set.insert("User", Schema::array(Schema::object(user)));
        set
    }

    fn user_object(set: &SchemaSet) -> &ObjectSchema {
        set.get("User")
            .and_then(Schema::items)
            .and_then(Schema::as_object)
            .unwrap()
    }

    fn prop(name: &str) -> SchemaPath {
        SchemaPath::root("User").items().property(name)
    }

    #[test]
    fn test_add_property_descends_into_items() {
        let set = add_property(&user_set(), &SchemaPath::root("User"));
        let user = user_object(&set);
        assert_eq!(
            user.properties["new_property"],
            Schema::of_type(SchemaType::String)
        );
        assert!(user.is_required("new_property"));
    }

    #[test]
    fn test_add_property_suffixes_on_collision() {
        let root = SchemaPath::root("User");
        let set = add_property(&add_property(&add_property(&user_set(), &root), &root), &root);
        let user = user_object(&set);
        assert!(user.properties.contains_key("new_property"));
        assert!(user.properties.contains_key("new_property_1"));
        assert!(user.properties.contains_key("new_property_2"));
    }

    #[test]
    fn test_add_property_nested() {
        let set = add_property(&user_set(), &prop("profile"));
        let profile = user_object(&set).properties["profile"].as_object().unwrap();
        assert_eq!(
            profile.properties.keys().collect::<Vec<_>>(),
            vec!["bio", "new_property"]
        );
    }

    #[test]
    fn test_add_property_on_scalar_is_noop() {
        let set = user_set();
        assert_eq!(add_property(&set, &prop("id")), set);
        assert_eq!(
            try_add_property(&set, &prop("id")),
            Err(EditError::NotAnObject("number".to_string()))
        );
    }

    #[test]
    fn test_add_property_on_array_of_scalars_is_noop() {
        let mut set = SchemaSet::new();
        set.insert("Tags", Schema::array(Schema::of_type(SchemaType::String)));
        assert_eq!(add_property(&set, &SchemaPath::root("Tags")), set);
    }

    #[test]
    fn test_delete_property() {
        let set = delete_property(&user_set(), &prop("name"));
        let user = user_object(&set);
        assert!(!user.properties.contains_key("name"));
        assert!(!user.is_required("name"));
        assert_eq!(
            user.properties.keys().collect::<Vec<_>>(),
            vec!["id", "profile"]
        );
    }

    #[test]
    fn test_delete_last_property_leaves_empty_required() {
        let set = delete_property(&user_set(), &prop("profile").property("bio"));
        let profile = user_object(&set).properties["profile"].as_object().unwrap();
        assert!(profile.properties.is_empty());
        assert!(profile.required.is_empty());
    }

    #[test]
    fn test_delete_property_root_path_deletes_root() {
        let set = delete_property(&user_set(), &SchemaPath::root("User"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_delete_property_bad_paths() {
        let set = user_set();
        assert_eq!(delete_property(&set, &prop("doesNotExist")), set);
        assert_eq!(delete_property(&set, &SchemaPath::root("User").items()), set);
        assert_eq!(
            delete_property(&set, &SchemaPath::root("User").property("id")),
            set
        );
        assert_eq!(
            try_delete_property(&set, &SchemaPath::root("User").property("id")),
            Err(EditError::NotAnObject("array".to_string()))
        );
    }

    #[test]
    fn test_rename_property_keeps_position_and_required() {
        let set = rename_property(&user_set(), &prop("name"), "full_name");
        let user = user_object(&set);
        assert_eq!(
            user.properties.keys().collect::<Vec<_>>(),
            vec!["id", "full_name", "profile"]
        );
        assert_eq!(
            user.required,
            vec!["id".to_string(), "full_name".to_string(), "profile".to_string()]
        );
        assert_eq!(user.properties["full_name"].format, Some(Format::DateTime));
    }

    #[test]
    fn test_rename_property_resolves_collision() {
        let set = rename_property(&user_set(), &prop("name"), "id");
        let user = user_object(&set);
        assert_eq!(
            user.properties.keys().collect::<Vec<_>>(),
            vec!["id", "id_1", "profile"]
        );
        assert!(user.is_required("id_1"));
    }

    #[test]
    fn test_rename_property_no_ops() {
        let set = user_set();
        assert_eq!(rename_property(&set, &prop("name"), "name"), set);
        assert_eq!(rename_property(&set, &prop("missing"), "other"), set);
        assert_eq!(rename_property(&set, &prop("name"), "   "), set);
        assert_eq!(rename_property(&set, &prop("name"), "full.name"), set);
    }

    #[test]
    fn test_change_property_type_to_object() {
        let set = change_property_type(&user_set(), &prop("id"), SchemaType::Object);
        assert_eq!(
            user_object(&set).properties["id"],
            Schema::object(ObjectSchema::new())
        );
    }

    #[test]
    fn test_change_property_type_to_array() {
        let set = change_property_type(&user_set(), &prop("profile"), SchemaType::Array);
        assert_eq!(
            user_object(&set).properties["profile"],
            Schema::array(Schema::object(ObjectSchema::new()))
        );
    }

    #[test]
    fn test_change_property_type_drops_format_unless_string() {
        let set = change_property_type(&user_set(), &prop("name"), SchemaType::Number);
        assert_eq!(
            user_object(&set).properties["name"],
            Schema::of_type(SchemaType::Number)
        );

        let set = change_property_type(&user_set(), &prop("name"), SchemaType::String);
        assert_eq!(
            user_object(&set).properties["name"].format,
            Some(Format::DateTime)
        );
    }

    #[test]
    fn test_change_property_type_revokes_identifier() {
        let set = mark_property_as_id(&user_set(), &prop("id"), IdType::Number);
        let set = change_property_type(&set, &prop("id"), SchemaType::Integer);
        let id = &user_object(&set).properties["id"];
        assert_eq!(id.kind, SchemaKind::Integer);
        assert!(!id.is_identifier());
    }

    #[test]
    fn test_change_property_type_keeps_free_comment() {
        let mut set = user_set();
        if let Some(SchemaKind::Array(items)) = set.get_mut("User").map(|s| &mut s.kind) {
            let user = items.as_object_mut().unwrap();
            user.properties["id"].annotation = Some(Annotation::Comment("note".to_string()));
        }
        let set = change_property_type(&set, &prop("id"), SchemaType::String);
        assert_eq!(
            user_object(&set).properties["id"].annotation,
            Some(Annotation::Comment("note".to_string()))
        );
    }

    #[test]
    fn test_toggle_required() {
        let set = toggle_required(&user_set(), &prop("name"));
        assert!(!user_object(&set).is_required("name"));

        let set = toggle_required(&set, &prop("name"));
        assert!(user_object(&set).is_required("name"));
        assert_eq!(user_object(&set).required.last().map(String::as_str), Some("name"));
    }

    #[test]
    fn test_toggle_required_keeps_identifier_required() {
        let set = mark_property_as_id(&user_set(), &prop("id"), IdType::String);
        let toggled = toggle_required(&set, &prop("id"));
        assert!(user_object(&toggled).is_required("id"));
        assert_eq!(toggled, set);
    }

    #[test]
    fn test_mark_property_as_id() {
        let set = mark_property_as_id(&user_set(), &prop("name"), IdType::String);
        let name = &user_object(&set).properties["name"];
        assert_eq!(name.kind, SchemaKind::String);
        assert_eq!(name.identifier_strategy(), Some(&IdStrategy::Uuid));
        assert_eq!(name.format, Some(Format::DateTime));

        let set = mark_property_as_id(&user_set(), &prop("profile"), IdType::Number);
        let profile = &user_object(&set).properties["profile"];
        assert_eq!(profile.kind, SchemaKind::Number);
        assert_eq!(
            profile.identifier_strategy(),
            Some(&IdStrategy::Autoincrement)
        );
    }

    #[test]
    fn test_mark_property_as_id_is_exclusive() {
        let set = mark_property_as_id(&user_set(), &prop("id"), IdType::Number);
        let set = mark_property_as_id(&set, &prop("name"), IdType::String);
        let user = user_object(&set);
        assert!(!user.properties["id"].is_identifier());
        assert!(user.properties["name"].is_identifier());
        assert_eq!(user.identifier(), Some("name"));
        assert!(user.is_required("id"));
        assert!(user.is_required("name"));
    }

    #[test]
    fn test_mark_property_as_id_forces_required() {
        let set = toggle_required(&user_set(), &prop("id"));
        assert!(!user_object(&set).is_required("id"));
        let set = mark_property_as_id(&set, &prop("id"), IdType::Number);
        assert!(user_object(&set).is_required("id"));
    }

    #[test]
    fn test_mark_property_as_id_bad_path() {
        let set = user_set();
        assert_eq!(mark_property_as_id(&set, &prop("nope"), IdType::Number), set);
        assert_eq!(
            mark_property_as_id(&set, &SchemaPath::root("User"), IdType::Number),
            set
        );
    }
}
