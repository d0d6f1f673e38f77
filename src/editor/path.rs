//! Typed addresses of schema nodes
//!
//! A [`SchemaPath`] names a root and then walks the tree one step at a time:
//! [`PathStep::Items`] enters an array's item schema and
//! [`PathStep::Property`] enters a named property of an object.
//!
//! The dotted text form mirrors the document layout, e.g.
//! `Post.items.properties.tags.items.properties.label`. In that form a bare
//! `items` token is structural and `properties` is always followed by a
//! literal name, so `Post.properties.items` addresses a property called
//! `items`. Names that contain a `.` can only be addressed through the typed
//! form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::EditError;
use crate::models::{ObjectSchema, Schema, SchemaKind, SchemaSet};

const ITEMS_TOKEN: &str = "items";
const PROPERTIES_TOKEN: &str = "properties";

/// One step from a schema node to one of its children
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    /// Enter the item schema of an array
    Items,
    /// Enter a named property of an object
    Property(String),
}

/// Address of a node inside a [`SchemaSet`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SchemaPath {
    pub root: String,
    pub steps: Vec<PathStep>,
}

impl SchemaPath {
    /// Path addressing a root schema
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            root: name.into(),
            steps: Vec::new(),
        }
    }

    /// Extend the path into an array's items
    pub fn items(mut self) -> Self {
        self.steps.push(PathStep::Items);
        self
    }

    /// Extend the path into a named property
    pub fn property(mut self, name: impl Into<String>) -> Self {
        self.steps.push(PathStep::Property(name.into()));
        self
    }

    /// Parse the dotted text form
    pub fn parse(text: &str) -> Result<Self, EditError> {
        let mut tokens = text.split('.');
        let root = match tokens.next() {
            Some(root) if !root.is_empty() => root.to_string(),
            _ => return Err(EditError::InvalidPath(text.to_string())),
        };

        let mut steps = Vec::new();
        while let Some(token) = tokens.next() {
            match token {
                ITEMS_TOKEN => steps.push(PathStep::Items),
                PROPERTIES_TOKEN => match tokens.next() {
                    Some(name) if !name.is_empty() => steps.push(PathStep::Property(name.to_string())),
                    _ => return Err(EditError::InvalidPath(text.to_string())),
                },
                _ => return Err(EditError::InvalidPath(text.to_string())),
            }
        }

        Ok(Self { root, steps })
    }

    /// Name of the addressed property, when the last step is a property
    pub fn property_name(&self) -> Option<&str> {
        match self.steps.last() {
            Some(PathStep::Property(name)) => Some(name),
            _ => None,
        }
    }

    /// Path of the node that holds the last step
    pub fn parent(&self) -> Option<SchemaPath> {
        let (_, rest) = self.steps.split_last()?;
        Some(Self {
            root: self.root.clone(),
            steps: rest.to_vec(),
        })
    }

    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for SchemaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root)?;
        for step in &self.steps {
            match step {
                PathStep::Items => write!(f, ".{ITEMS_TOKEN}")?,
                PathStep::Property(name) => write!(f, ".{PROPERTIES_TOKEN}.{name}")?,
            }
        }
        Ok(())
    }
}

impl FromStr for SchemaPath {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SchemaPath {
    type Error = EditError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SchemaPath> for String {
    fn from(path: SchemaPath) -> Self {
        path.to_string()
    }
}

/// Follow `steps` from `node`, failing on the first shape mismatch
fn walk_mut<'a>(mut node: &'a mut Schema, steps: &[PathStep]) -> Result<&'a mut Schema, EditError> {
    for step in steps {
        let type_name = node.type_name();
        node = match (step, &mut node.kind) {
            (PathStep::Items, SchemaKind::Array(items)) => items.as_mut(),
            (PathStep::Items, _) => return Err(EditError::NotAnArray(type_name)),
            (PathStep::Property(name), SchemaKind::Object(object)) => object
                .properties
                .get_mut(name)
                .ok_or_else(|| EditError::PropertyNotFound(name.clone()))?,
            (PathStep::Property(_), _) => return Err(EditError::NotAnObject(type_name)),
        };
    }
    Ok(node)
}

/// Resolve a path to the schema node it addresses
pub(crate) fn resolve_mut<'a>(
    set: &'a mut SchemaSet,
    path: &SchemaPath,
) -> Result<&'a mut Schema, EditError> {
    let root = set
        .get_mut(&path.root)
        .ok_or_else(|| EditError::RootNotFound(path.root.clone()))?;
    walk_mut(root, &path.steps)
}

/// Resolve a property path to its parent object and the property name
///
/// The property itself must exist in the parent's `properties`.
pub(crate) fn resolve_property_mut<'a, 'p>(
    set: &'a mut SchemaSet,
    path: &'p SchemaPath,
) -> Result<(&'a mut ObjectSchema, &'p str), EditError> {
    let (last, parent_steps) = path
        .steps
        .split_last()
        .ok_or_else(|| EditError::NotAProperty(path.to_string()))?;
    let PathStep::Property(name) = last else {
        return Err(EditError::NotAProperty(path.to_string()));
    };

    let root = set
        .get_mut(&path.root)
        .ok_or_else(|| EditError::RootNotFound(path.root.clone()))?;
    let parent = walk_mut(root, parent_steps)?;
    let type_name = parent.type_name();
    let object = parent
        .as_object_mut()
        .ok_or(EditError::NotAnObject(type_name))?;

    if !object.properties.contains_key(name) {
        return Err(EditError::PropertyNotFound(name.clone()));
    }
    Ok((object, name.as_str()))
}
