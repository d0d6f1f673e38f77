//! Output formatting for CLI

use clap::ValueEnum;

use crate::cli::error::CliError;
use crate::models::{IdStrategy, Schema, SchemaKind, SchemaSet};

/// Serialization used for schema documents written by the CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Render a schema set as a document in the requested format
pub fn format_schema_set(set: &SchemaSet, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => set
            .to_json_pretty()
            .map_err(|e| CliError::Serialization(e.to_string())),
        OutputFormat::Yaml => {
            serde_yaml::to_string(set).map_err(|e| CliError::Serialization(e.to_string()))
        }
    }
}

/// Render the outline view of a schema set
///
/// One line per root, then one line per property indented by depth:
/// `name  type`, with `*` after required names and `id · num` /
/// `id · str` in place of the type for identifiers.
pub fn format_tree(set: &SchemaSet) -> String {
    let mut output = String::new();
    for (name, schema) in set.iter() {
        output.push_str(&format!("{}  {}\n", name, type_label(schema)));
        write_children(schema, 1, &mut output);
    }
    output
}

fn write_children(schema: &Schema, depth: usize, output: &mut String) {
    let object = match &schema.kind {
        SchemaKind::Object(object) => object,
        SchemaKind::Array(items) => return write_children(items, depth, output),
        _ => return,
    };

    let indent = "  ".repeat(depth);
    for (name, child) in &object.properties {
        let marker = if object.is_required(name) { "*" } else { "" };
        output.push_str(&format!(
            "{}{}{}  {}\n",
            indent,
            name,
            marker,
            type_label(child)
        ));
        write_children(child, depth + 1, output);
    }
}

fn type_label(schema: &Schema) -> String {
    let label = match (&schema.kind, schema.identifier_strategy()) {
        (_, Some(IdStrategy::Autoincrement)) => "id · num".to_string(),
        (_, Some(IdStrategy::Uuid)) => "id · str".to_string(),
        (SchemaKind::Number | SchemaKind::Integer, Some(IdStrategy::Other(_))) => {
            "id · num".to_string()
        }
        (_, Some(IdStrategy::Other(_))) => "id · str".to_string(),
        (SchemaKind::Array(items), None) if items.as_object().is_none() => {
            format!("array<{}>", items.type_name())
        }
        (kind, None) => kind.type_name(),
    };

    match &schema.format {
        Some(format) => format!("{} ({})", label, format),
        None => label,
    }
}
