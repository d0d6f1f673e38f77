//! Path-addressed schema editing
//!
//! Every operation takes the current [`SchemaSet`] and returns a new one; the
//! input is never modified. Operations come in two flavours:
//!
//! - `try_<op>` returns `Result<SchemaSet, EditError>`
//! - `<op>` returns the edited set, or an unchanged copy when the edit
//!   cannot be applied
//!
//! # Example
//!
//! ```rust
//! use schema_snap::editor::{SchemaPath, add_property, create_root};
//! use schema_snap::models::SchemaSet;
//!
//! let set = create_root(&SchemaSet::new());
//! let set = add_property(&set, &SchemaPath::root("new_DB"));
//! let items = set.get("new_DB").and_then(|s| s.items()).and_then(|s| s.as_object());
//! assert_eq!(items.map(|o| o.properties.len()), Some(2));
//! ```

pub mod error;
pub mod path;
pub mod properties;
pub mod roots;

pub use error::EditError;
pub use path::{PathStep, SchemaPath};
pub use properties::{
    NEW_PROPERTY_NAME, add_property, change_property_type, delete_property, mark_property_as_id,
    rename_property, toggle_required, try_add_property, try_change_property_type,
    try_delete_property, try_mark_property_as_id, try_rename_property, try_toggle_required,
};
pub use roots::{
    NEW_ROOT_NAME, NEW_ROOT_PROPERTY, create_root, create_root_named, delete_root,
    new_root_schema, rename_root, try_delete_root, try_rename_root,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{IdType, SchemaSet, SchemaType};

/// First name in `base`, `base_1`, `base_2`, … that `taken` rejects
pub(crate) fn unique_name(base: &str, taken: impl Fn(&str) -> bool) -> String {
    if !taken(base) {
        return base.to_string();
    }
    (1..)
        .map(|n| format!("{base}_{n}"))
        .find(|candidate| !taken(candidate))
        .unwrap_or_else(|| base.to_string())
}

/// Reject names that are blank or that the dotted path form cannot address
pub(crate) fn check_name(name: &str) -> Result<(), EditError> {
    if name.trim().is_empty() || name.contains('.') {
        return Err(EditError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Collapse a failed edit into an unchanged copy of `set`
pub(crate) fn or_unchanged(
    set: &SchemaSet,
    result: Result<SchemaSet, EditError>,
    op: &str,
) -> SchemaSet {
    result.unwrap_or_else(|e| {
        debug!(op, error = %e, "Edit skipped");
        set.clone()
    })
}

/// One schema edit, as replayed from an edit script
///
/// Serialized with an `op` tag, e.g.
/// `{"op": "renameProperty", "path": "User.items.properties.name", "newName": "fullName"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Edit {
    CreateRoot,
    RenameRoot { from: String, to: String },
    DeleteRoot { name: String },
    AddProperty { path: SchemaPath },
    DeleteProperty { path: SchemaPath },
    RenameProperty { path: SchemaPath, new_name: String },
    ChangePropertyType { path: SchemaPath, new_type: SchemaType },
    ToggleRequired { path: SchemaPath },
    MarkPropertyAsId { path: SchemaPath, id_type: IdType },
}

impl Edit {
    /// Apply this edit, surfacing why it could not be applied
    pub fn try_apply(&self, set: &SchemaSet) -> Result<SchemaSet, EditError> {
        match self {
            Edit::CreateRoot => Ok(create_root(set)),
            Edit::RenameRoot { from, to } => try_rename_root(set, from, to),
            Edit::DeleteRoot { name } => try_delete_root(set, name),
            Edit::AddProperty { path } => try_add_property(set, path),
            Edit::DeleteProperty { path } => try_delete_property(set, path),
            Edit::RenameProperty { path, new_name } => try_rename_property(set, path, new_name),
            Edit::ChangePropertyType { path, new_type } => {
                try_change_property_type(set, path, *new_type)
            }
            Edit::ToggleRequired { path } => try_toggle_required(set, path),
            Edit::MarkPropertyAsId { path, id_type } => try_mark_property_as_id(set, path, *id_type),
        }
    }
}

/// Apply a single edit; an edit that cannot be applied leaves `set` unchanged
pub fn apply_edit(set: &SchemaSet, edit: &Edit) -> SchemaSet {
    or_unchanged(set, edit.try_apply(set), "apply_edit")
}

/// Outcome of replaying an edit script
#[derive(Debug, Clone, PartialEq)]
pub struct EditReport {
    /// Schema set after every applicable edit
    pub set: SchemaSet,
    /// Index and reason of each edit that degraded to a no-op
    pub skipped: Vec<(usize, EditError)>,
}

impl EditReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Replay `edits` in order, each on the result of the previous one
pub fn apply_edits<'a>(set: &SchemaSet, edits: impl IntoIterator<Item = &'a Edit>) -> EditReport {
    let mut current = set.clone();
    let mut skipped = Vec::new();

    for (index, edit) in edits.into_iter().enumerate() {
        match edit.try_apply(&current) {
            Ok(next) => current = next,
            Err(e) => {
                debug!(index, error = %e, "Edit skipped");
                skipped.push((index, e));
            }
        }
    }

    EditReport {
        set: current,
        skipped,
    }
}
