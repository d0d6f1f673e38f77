//! Check command implementation

use super::load_schema_set;
use crate::cli::error::CliError;
use crate::validation::validate_schema_set;

/// Handle the check command
pub fn handle_check(input: &str) -> Result<(), CliError> {
    let set = load_schema_set(input)?;
    let result = validate_schema_set(&set);

    if result.is_valid() {
        println!("Validation successful");
        return Ok(());
    }

    for violation in &result.violations {
        eprintln!("  - {}", violation);
    }
    Err(CliError::ValidationError(result.violations.len()))
}
