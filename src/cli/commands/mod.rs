//! Command implementations for the invoice processor CLI
//!
//! Each command is implemented in its own module; shared reporting and
//! logging helpers live in [`shared`].

pub mod export;
pub mod process;
pub mod shared;
pub mod validate;

pub use shared::ProcessingStats;

use crate::cli::args::Commands;
use crate::Result;

/// Main command runner for the invoice processor
///
/// Dispatches to the appropriate subcommand handler:
/// - `process`: full parse/map/store workflow with reports
/// - `validate`: schema and row-shape checks without output
/// - `export`: canonical CSV re-serialization
pub fn run(command: Commands) -> Result<ProcessingStats> {
    match command {
        Commands::Process(args) => process::run_process(args),
        Commands::Validate(args) => validate::run_validate(args),
        Commands::Export(args) => export::run_export(args),
    }
}
