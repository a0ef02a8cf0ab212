//! Command-line argument definitions for the invoice processor
//!
//! This module defines the complete CLI interface using the clap derive
//! API.

use crate::app::services::invoice_mapper::SchemaProfile;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the management-fee invoice processor
///
/// Ingests building management-fee CSV uploads into validated invoice
/// records with computed totals.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "invoice-processor",
    version,
    about = "Ingest building management-fee CSV data into validated invoice records",
    long_about = "Parses management-fee CSV uploads, validates required header fields, coerces \
                  fee and usage cells into typed breakdowns, and reports per-unit and batch \
                  totals. Malformed rows are skipped with diagnostics rather than aborting the \
                  batch."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the invoice processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse and map a CSV upload into invoice records (main command)
    Process(ProcessArgs),
    /// Check a CSV upload against the schema without producing output
    Validate(ValidateArgs),
    /// Re-serialize a CSV upload in canonical quoting
    Export(ExportArgs),
}

/// Upload schema variants selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemaArg {
    /// Full billing upload with fee and usage columns
    Billing,
    /// Usage-reading upload with metered quantities only
    Usage,
}

impl SchemaArg {
    /// Convert to the service-layer schema profile
    pub fn to_profile(self) -> SchemaProfile {
        match self {
            SchemaArg::Billing => SchemaProfile::Billing,
            SchemaArg::Usage => SchemaProfile::Usage,
        }
    }
}

/// Output format for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Human,
    /// JSON report on stdout
    Json,
    /// CSV key/value metrics on stdout
    Csv,
}

/// Arguments for the process command
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Input CSV file to ingest
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input_path: PathBuf,

    /// Optional path for the mapped invoice batch as JSON
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// Upload schema the input follows
    #[arg(long = "schema", value_enum, default_value = "billing")]
    pub schema: SchemaArg,

    /// Fail the run when any row was skipped
    #[arg(long = "strict")]
    pub strict: bool,

    /// Output format for results
    #[arg(long = "output-format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    /// Increase logging verbosity (-v: debug, -vv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl ProcessArgs {
    /// Map verbosity flags to a tracing level filter string
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Input CSV file to check
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input_path: PathBuf,

    /// Upload schema the input should follow
    #[arg(long = "schema", value_enum, default_value = "billing")]
    pub schema: SchemaArg,

    /// Fail when any row would be skipped
    #[arg(long = "strict")]
    pub strict: bool,

    /// Increase logging verbosity (-v: debug, -vv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl ValidateArgs {
    /// Map verbosity flags to a tracing level filter string
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

/// Arguments for the export command
#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// Input CSV file to re-serialize
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input_path: PathBuf,

    /// Output path for the canonical CSV; stdout when omitted
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// Increase logging verbosity (-v: debug, -vv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl ExportArgs {
    /// Map verbosity flags to a tracing level filter string
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
