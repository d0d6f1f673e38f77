//! Schema model
//!
//! A [`Schema`] is the structural description of one JSON value. The shape
//! of the node is carried by [`SchemaKind`], so object-only and array-only
//! substructure cannot appear on the wrong kind of node. On the wire the
//! schema keeps the familiar JSON Schema layout:
//!
//! ```json
//! {
//!   "type": "object",
//!   "properties": { "id": { "type": "number", "$comment": "prisma:id autoincrement" } },
//!   "required": ["id"]
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Prefix of a `$comment` that marks a property as an identifier field
pub const IDENTIFIER_PREFIX: &str = "prisma:id";

/// Separator used when joining the tags of a union type
pub const UNION_SEPARATOR: &str = " | ";

/// Canonical type tags a schema node can be created with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Null,
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    Unknown,
    Any,
}

impl SchemaType {
    /// Get the type tag as written in a schema document
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaType::Null => "null",
            SchemaType::String => "string",
            SchemaType::Number => "number",
            SchemaType::Integer => "integer",
            SchemaType::Boolean => "boolean",
            SchemaType::Object => "object",
            SchemaType::Array => "array",
            SchemaType::Unknown => "unknown",
            SchemaType::Any => "any",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a type tag is not one of the canonical tags
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown schema type: {0}")]
pub struct UnknownTypeError(pub String);

impl FromStr for SchemaType {
    type Err = UnknownTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "null" => Ok(SchemaType::Null),
            "string" => Ok(SchemaType::String),
            "number" => Ok(SchemaType::Number),
            "integer" => Ok(SchemaType::Integer),
            "boolean" => Ok(SchemaType::Boolean),
            "object" => Ok(SchemaType::Object),
            "array" => Ok(SchemaType::Array),
            "unknown" => Ok(SchemaType::Unknown),
            "any" => Ok(SchemaType::Any),
            other => Err(UnknownTypeError(other.to_string())),
        }
    }
}

/// String format hint
///
/// Formats outside the standard set are kept verbatim in [`Format::Other`]
/// so hand-edited documents load and print back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Format {
    /// ISO 8601 date (YYYY-MM-DD)
    Date,
    /// Any value a permissive date parser accepts
    DateTime,
    /// Time of day
    Time,
    Email,
    Uri,
    Uuid,
    Ipv4,
    Ipv6,
    Hostname,
    Other(String),
}

impl Format {
    /// Get the format name as written in a schema document
    pub fn as_str(&self) -> &str {
        match self {
            Format::Date => "date",
            Format::DateTime => "date-time",
            Format::Time => "time",
            Format::Email => "email",
            Format::Uri => "uri",
            Format::Uuid => "uuid",
            Format::Ipv4 => "ipv4",
            Format::Ipv6 => "ipv6",
            Format::Hostname => "hostname",
            Format::Other(name) => name,
        }
    }
}

impl From<String> for Format {
    fn from(name: String) -> Self {
        match name.as_str() {
            "date" => Format::Date,
            "date-time" => Format::DateTime,
            "time" => Format::Time,
            "email" => Format::Email,
            "uri" => Format::Uri,
            "uuid" => Format::Uuid,
            "ipv4" => Format::Ipv4,
            "ipv6" => Format::Ipv6,
            "hostname" => Format::Hostname,
            _ => Format::Other(name),
        }
    }
}

impl From<Format> for String {
    fn from(format: Format) -> Self {
        match format {
            Format::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an identifier field gets its values
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Generated UUID (string identifiers)
    Uuid,
    /// Auto-incrementing counter (numeric identifiers)
    Autoincrement,
    /// Any other `prisma:id` suffix, stored exactly as written after the
    /// prefix (separator included)
    Other(String),
}

impl IdStrategy {
    pub fn as_str(&self) -> &str {
        match self {
            IdStrategy::Uuid => "uuid",
            IdStrategy::Autoincrement => "autoincrement",
            IdStrategy::Other(suffix) => suffix.trim(),
        }
    }
}

/// Value type chosen when marking a property as identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdType {
    String,
    Number,
}

impl IdType {
    /// Identifier strategy implied by the value type
    pub fn strategy(&self) -> IdStrategy {
        match self {
            IdType::String => IdStrategy::Uuid,
            IdType::Number => IdStrategy::Autoincrement,
        }
    }

    /// Schema kind an identifier of this type is stored as
    pub fn kind(&self) -> SchemaKind {
        match self {
            IdType::String => SchemaKind::String,
            IdType::Number => SchemaKind::Number,
        }
    }
}

impl FromStr for IdType {
    type Err = UnknownTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(IdType::String),
            "number" => Ok(IdType::Number),
            other => Err(UnknownTypeError(other.to_string())),
        }
    }
}

/// Annotation carried in a schema's `$comment`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// The property is the identifier of its object
    Identifier(IdStrategy),
    /// Free text
    Comment(String),
}

impl Annotation {
    /// Parse a `$comment` value
    ///
    /// Every comment starting with `prisma:id` marks an identifier field.
    pub fn parse(comment: &str) -> Self {
        match comment.strip_prefix(IDENTIFIER_PREFIX) {
            Some(" uuid") => Annotation::Identifier(IdStrategy::Uuid),
            Some(" autoincrement") => Annotation::Identifier(IdStrategy::Autoincrement),
            Some(suffix) => Annotation::Identifier(IdStrategy::Other(suffix.to_string())),
            None => Annotation::Comment(comment.to_string()),
        }
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self, Annotation::Identifier(_))
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Annotation::Identifier(IdStrategy::Other(suffix)) => {
                write!(f, "{}{}", IDENTIFIER_PREFIX, suffix)
            }
            Annotation::Identifier(strategy) => {
                write!(f, "{} {}", IDENTIFIER_PREFIX, strategy.as_str())
            }
            Annotation::Comment(text) => f.write_str(text),
        }
    }
}

/// Properties and required list of an object schema
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSchema {
    /// Child schemas by property name, in insertion order
    pub properties: IndexMap<String, Schema>,
    /// Names that conforming instances must carry, without duplicates
    pub required: Vec<String>,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a property name is in the required list
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    /// Add a name to the required list if it is not already there
    pub fn require(&mut self, name: &str) {
        if !self.is_required(name) {
            self.required.push(name.to_string());
        }
    }

    /// Remove a name from the required list
    pub fn unrequire(&mut self, name: &str) {
        self.required.retain(|r| r != name);
    }

    /// Name of the property carrying the identifier annotation, if any
    pub fn identifier(&self) -> Option<&str> {
        self.properties
            .iter()
            .find(|(_, schema)| schema.is_identifier())
            .map(|(name, _)| name.as_str())
    }
}

/// Shape of a schema node
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
    Null,
    String,
    Number,
    Integer,
    Boolean,
    Object(ObjectSchema),
    Array(Box<Schema>),
    Unknown,
    Any,
    /// Distinct tags a merge could not reconcile, in first-seen order
    Union(Vec<String>),
}

impl SchemaKind {
    /// Fresh kind for a type tag, with empty substructure
    ///
    /// Arrays get an empty object as their item schema.
    pub fn from_type(schema_type: SchemaType) -> Self {
        match schema_type {
            SchemaType::Null => SchemaKind::Null,
            SchemaType::String => SchemaKind::String,
            SchemaType::Number => SchemaKind::Number,
            SchemaType::Integer => SchemaKind::Integer,
            SchemaType::Boolean => SchemaKind::Boolean,
            SchemaType::Object => SchemaKind::Object(ObjectSchema::new()),
            SchemaType::Array => SchemaKind::Array(Box::new(Schema::object(ObjectSchema::new()))),
            SchemaType::Unknown => SchemaKind::Unknown,
            SchemaType::Any => SchemaKind::Any,
        }
    }

    /// Type tag as written in a schema document
    pub fn type_name(&self) -> String {
        match self {
            SchemaKind::Null => SchemaType::Null.to_string(),
            SchemaKind::String => SchemaType::String.to_string(),
            SchemaKind::Number => SchemaType::Number.to_string(),
            SchemaKind::Integer => SchemaType::Integer.to_string(),
            SchemaKind::Boolean => SchemaType::Boolean.to_string(),
            SchemaKind::Object(_) => SchemaType::Object.to_string(),
            SchemaKind::Array(_) => SchemaType::Array.to_string(),
            SchemaKind::Unknown => SchemaType::Unknown.to_string(),
            SchemaKind::Any => SchemaType::Any.to_string(),
            SchemaKind::Union(tags) => tags.join(UNION_SEPARATOR),
        }
    }

    /// Parse a type tag into a kind with empty substructure
    ///
    /// Each part of a union tag must itself be a canonical tag.
    fn from_type_name(tag: &str) -> Result<Self, UnknownTypeError> {
        if tag.contains(UNION_SEPARATOR) {
            let tags = tag
                .split(UNION_SEPARATOR)
                .map(|part| part.parse::<SchemaType>().map(|t| t.as_str().to_string()))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(SchemaKind::Union(tags));
        }
        tag.parse::<SchemaType>().map(SchemaKind::from_type)
    }
}

/// Structural schema of a JSON value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSchema", into = "RawSchema")]
pub struct Schema {
    pub kind: SchemaKind,
    /// Format hint (string schemas)
    pub format: Option<Format>,
    /// `$comment` annotation
    pub annotation: Option<Annotation>,
}

impl Schema {
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            kind,
            format: None,
            annotation: None,
        }
    }

    pub fn of_type(schema_type: SchemaType) -> Self {
        Self::new(SchemaKind::from_type(schema_type))
    }

    pub fn object(object: ObjectSchema) -> Self {
        Self::new(SchemaKind::Object(object))
    }

    pub fn array(items: Schema) -> Self {
        Self::new(SchemaKind::Array(Box::new(items)))
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotation = Some(annotation);
        self
    }

    /// Type tag as written in a schema document
    pub fn type_name(&self) -> String {
        self.kind.type_name()
    }

    pub fn as_object(&self) -> Option<&ObjectSchema> {
        match &self.kind {
            SchemaKind::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut ObjectSchema> {
        match &mut self.kind {
            SchemaKind::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn items(&self) -> Option<&Schema> {
        match &self.kind {
            SchemaKind::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn items_mut(&mut self) -> Option<&mut Schema> {
        match &mut self.kind {
            SchemaKind::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Check whether this schema carries the identifier annotation
    pub fn is_identifier(&self) -> bool {
        self.annotation
            .as_ref()
            .is_some_and(Annotation::is_identifier)
    }

    /// Identifier strategy, if this schema is an identifier field
    pub fn identifier_strategy(&self) -> Option<&IdStrategy> {
        match &self.annotation {
            Some(Annotation::Identifier(strategy)) => Some(strategy),
            _ => None,
        }
    }

    /// Drop the identifier annotation, keeping free-text comments
    pub fn clear_identifier(&mut self) {
        if self.is_identifier() {
            self.annotation = None;
        }
    }
}

/// Document form of a schema, as it appears in JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawSchema {
    #[serde(rename = "type")]
    schema_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    properties: Option<IndexMap<String, Schema>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    required: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    items: Option<Box<Schema>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    format: Option<Format>,
    #[serde(rename = "$comment", default, skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

/// Error produced when a schema document violates the shape rules
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaShapeError {
    #[error(transparent)]
    UnknownType(#[from] UnknownTypeError),
    #[error("'{0}' is only allowed on object schemas, found type '{1}'")]
    ObjectOnly(&'static str, String),
    #[error("'items' is only allowed on array schemas, found type '{0}'")]
    ArrayOnly(String),
    #[error("Array schema is missing 'items'")]
    MissingItems,
}

impl TryFrom<RawSchema> for Schema {
    type Error = SchemaShapeError;

    fn try_from(raw: RawSchema) -> Result<Self, Self::Error> {
        let mut kind = SchemaKind::from_type_name(&raw.schema_type)?;

        match &mut kind {
            SchemaKind::Object(object) => {
                if raw.items.is_some() {
                    return Err(SchemaShapeError::ArrayOnly(raw.schema_type));
                }
                object.properties = raw.properties.unwrap_or_default();
                for name in raw.required.unwrap_or_default() {
                    object.require(&name);
                }
            }
            SchemaKind::Array(items) => {
                if raw.properties.is_some() {
                    return Err(SchemaShapeError::ObjectOnly("properties", raw.schema_type));
                }
                if raw.required.is_some() {
                    return Err(SchemaShapeError::ObjectOnly("required", raw.schema_type));
                }
                *items = raw.items.ok_or(SchemaShapeError::MissingItems)?;
            }
            _ => {
                if raw.properties.is_some() {
                    return Err(SchemaShapeError::ObjectOnly("properties", raw.schema_type));
                }
                if raw.required.is_some() {
                    return Err(SchemaShapeError::ObjectOnly("required", raw.schema_type));
                }
                if raw.items.is_some() {
                    return Err(SchemaShapeError::ArrayOnly(raw.schema_type));
                }
            }
        }

        Ok(Schema {
            kind,
            format: raw.format,
            annotation: raw.comment.as_deref().map(Annotation::parse),
        })
    }
}

impl From<Schema> for RawSchema {
    fn from(schema: Schema) -> Self {
        let schema_type = schema.kind.type_name();
        let comment = schema.annotation.map(|a| a.to_string());
        let (properties, required, items) = match schema.kind {
            SchemaKind::Object(object) => (Some(object.properties), Some(object.required), None),
            SchemaKind::Array(items) => (None, None, Some(items)),
            _ => (None, None, None),
        };

        RawSchema {
            schema_type,
            properties,
            required,
            items,
            format: schema.format,
            comment,
        }
    }
}
