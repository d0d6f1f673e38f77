//! Infer command implementation

use std::path::{Path, PathBuf};

use tracing::info;

use super::{load_input, write_output};
use crate::cli::error::CliError;
use crate::cli::output::{OutputFormat, format_schema_set};
use crate::inference::{DateDetection, InferenceConfig, SchemaInferrer};

/// Options collected from the `infer` command line
#[derive(Debug, Clone, Default)]
pub struct InferOptions {
    pub format: OutputFormat,
    pub config: Option<PathBuf>,
    pub date_detection: Option<DateDetection>,
    pub integers: bool,
    pub output: Option<PathBuf>,
}

/// Load an inference config from a TOML file
pub fn load_config(path: &Path) -> Result<InferenceConfig, CliError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::FileReadError(path.to_path_buf(), e.to_string()))?;
    toml::from_str(&content).map_err(|e| CliError::Config(path.to_path_buf(), e.to_string()))
}

/// Config file settings with command line flags applied on top
pub fn resolve_config(options: &InferOptions) -> Result<InferenceConfig, CliError> {
    let mut config = match &options.config {
        Some(path) => load_config(path)?,
        None => InferenceConfig::default(),
    };
    if let Some(mode) = options.date_detection {
        config.date_detection = mode;
    }
    if options.integers {
        config.distinguish_integers = true;
    }
    Ok(config)
}

/// Infer and render the schema set for JSON text
pub fn run_infer(content: &str, options: &InferOptions) -> Result<String, CliError> {
    let inferrer = SchemaInferrer::with_config(resolve_config(options)?);
    let set = inferrer.infer_set_str(content)?;
    format_schema_set(&set, options.format)
}

/// Handle the infer command
pub fn handle_infer(input: &str, options: &InferOptions) -> Result<(), CliError> {
    let content = load_input(input)?;
    let rendered = run_infer(&content, options)?;
    write_output(&rendered, options.output.as_deref())?;

    if let Some(path) = &options.output {
        info!(path = %path.display(), "Wrote inferred schemas");
    }
    Ok(())
}
