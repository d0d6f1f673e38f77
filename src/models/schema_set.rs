//! Named collection of root schemas

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::schema::Schema;

/// Mapping from root name (e.g. `User`, `Post`) to its schema
///
/// This is the unit of state a host reads and writes. Root names are unique
/// by construction; the relative order of roots is kept for display only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaSet {
    roots: IndexMap<String, Schema>,
}

impl SchemaSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the textual form produced by [`SchemaSet::to_json_pretty`]
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Canonical pretty-printed JSON form (two-space indent)
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.roots.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Schema> {
        self.roots.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.roots.contains_key(name)
    }

    /// Insert or replace a root, returning the previous schema
    pub fn insert(&mut self, name: impl Into<String>, schema: Schema) -> Option<Schema> {
        self.roots.insert(name.into(), schema)
    }

    /// Remove a root, keeping the order of the others
    pub fn remove(&mut self, name: &str) -> Option<Schema> {
        self.roots.shift_remove(name)
    }

    /// Rename a root in place, keeping its position
    ///
    /// Returns `false` when `old` is missing or `new` is already taken.
    pub fn rename(&mut self, old: &str, new: &str) -> bool {
        if self.roots.contains_key(new) {
            return false;
        }
        let Some(index) = self.roots.get_index_of(old) else {
            return false;
        };
        let Some((_, schema)) = self.roots.shift_remove_index(index) else {
            return false;
        };
        self.roots.shift_insert(index, new.to_string(), schema);
        true
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.roots.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.roots.iter().map(|(name, schema)| (name.as_str(), schema))
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl FromIterator<(String, Schema)> for SchemaSet {
    fn from_iter<I: IntoIterator<Item = (String, Schema)>>(iter: I) -> Self {
        Self {
            roots: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SchemaSet {
    type Item = (String, Schema);
    type IntoIter = indexmap::map::IntoIter<String, Schema>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.into_iter()
    }
}
