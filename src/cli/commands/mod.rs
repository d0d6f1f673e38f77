//! CLI command implementations

pub mod check;
pub mod edit;
pub mod infer;
pub mod tree;

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::cli::error::CliError;
use crate::models::SchemaSet;

pub use check::handle_check;
pub use edit::handle_edit;
pub use infer::{InferOptions, handle_infer};
pub use tree::handle_tree;

/// Load input content from file or stdin
pub(crate) fn load_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        Ok(content)
    } else {
        let path = PathBuf::from(input);
        std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError(path, e.to_string()))
    }
}

/// Load a schema-set document from file or stdin
pub(crate) fn load_schema_set(input: &str) -> Result<SchemaSet, CliError> {
    let content = load_input(input)?;
    SchemaSet::from_json(&content).map_err(|e| CliError::SchemaParse(e.to_string()))
}

/// Write command output to a file, or stdout when no file is given
pub(crate) fn write_output(content: &str, output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(path) => std::fs::write(path, content)
            .map_err(|e| CliError::FileWriteError(path.to_path_buf(), e.to_string())),
        None => {
            print!("{}", content);
            if !content.ends_with('\n') {
                println!();
            }
            Ok(())
        }
    }
}
