//! Edit command implementation

use std::path::Path;

use tracing::warn;

use super::{load_input, load_schema_set, write_output};
use crate::cli::error::CliError;
use crate::cli::output::{OutputFormat, format_schema_set};
use crate::editor::{Edit, EditReport, apply_edits};
use crate::models::SchemaSet;

/// Parse an edit script: a JSON array of edits
pub fn parse_script(content: &str) -> Result<Vec<Edit>, CliError> {
    serde_json::from_str(content).map_err(|e| CliError::ScriptParse(e.to_string()))
}

/// Replay a script over a schema set
pub fn run_edit(set: &SchemaSet, script: &str) -> Result<EditReport, CliError> {
    let edits = parse_script(script)?;
    Ok(apply_edits(set, &edits))
}

/// Handle the edit command
pub fn handle_edit(
    schemas: &str,
    script: &str,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let set = load_schema_set(schemas)?;
    let script = load_input(script)?;
    let report = run_edit(&set, &script)?;

    for (index, error) in &report.skipped {
        warn!(index, %error, "Edit had no effect");
        eprintln!("edit #{} skipped: {}", index, error);
    }

    write_output(&format_schema_set(&report.set, format)?, output)
}
