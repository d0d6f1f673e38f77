//! schema-snap command line interface

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use schema_snap::cli::OutputFormat;
use schema_snap::cli::commands::{
    InferOptions, handle_check, handle_edit, handle_infer, handle_tree,
};
use schema_snap::inference::DateDetection;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Infer and edit JSON Schemas from sample data", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Infer a schema set from a JSON document whose top-level keys name the roots
    Infer {
        /// Input file, or - for stdin
        #[arg(default_value = "-")]
        input: String,
        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
        /// TOML file with inference settings
        #[arg(long)]
        config: Option<PathBuf>,
        /// Only tag ISO 8601 dates and date-times
        #[arg(long, conflicts_with = "no_dates")]
        strict_dates: bool,
        /// Never tag strings as dates
        #[arg(long)]
        no_dates: bool,
        /// Emit integer for whole numbers
        #[arg(long)]
        integers: bool,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Apply a JSON edit script to a schema set
    Edit {
        /// Schema set document
        schemas: String,
        /// JSON array of edits
        script: String,
        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check a schema set document for rule violations
    Check {
        /// Input file, or - for stdin
        #[arg(default_value = "-")]
        input: String,
    },
    /// Print the outline of a schema set
    Tree {
        /// Input file, or - for stdin
        #[arg(default_value = "-")]
        input: String,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Infer {
            input,
            format,
            config,
            strict_dates,
            no_dates,
            integers,
            output,
        } => {
            let date_detection = if strict_dates {
                Some(DateDetection::Strict)
            } else if no_dates {
                Some(DateDetection::Off)
            } else {
                None
            };
            let options = InferOptions {
                format,
                config,
                date_detection,
                integers,
                output,
            };
            handle_infer(&input, &options)?;
        }
        Commands::Edit {
            schemas,
            script,
            format,
            output,
        } => handle_edit(&schemas, &script, format, output.as_deref())?,
        Commands::Check { input } => handle_check(&input)?,
        Commands::Tree { input } => handle_tree(&input)?,
    }

    Ok(())
}
