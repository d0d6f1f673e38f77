//! Tree command implementation

use super::{load_schema_set, write_output};
use crate::cli::error::CliError;
use crate::cli::output::format_tree;

/// Handle the tree command
pub fn handle_tree(input: &str) -> Result<(), CliError> {
    let set = load_schema_set(input)?;
    write_output(&format_tree(&set), None)
}
