//! CLI error types

use std::path::PathBuf;

use thiserror::Error;

use crate::inference::InferenceError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read file {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Failed to write file {0}: {1}")]
    FileWriteError(PathBuf, String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Inference failed: {0}")]
    Inference(#[from] InferenceError),

    #[error("Invalid schema document: {0}")]
    SchemaParse(String),

    #[error("Invalid edit script: {0}")]
    ScriptParse(String),

    #[error("Invalid config file {0}: {1}")]
    Config(PathBuf, String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Validation failed with {0} violation(s)")]
    ValidationError(usize),
}
