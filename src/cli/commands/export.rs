//! Export command implementation
//!
//! Parses an upload and re-serializes it through the writer, producing a
//! canonically quoted CSV with malformed rows dropped.

use std::time::Instant;

use tracing::info;

use super::shared::{read_input, setup_logging, ProcessingStats};
use crate::app::services::csv::{to_csv, CsvParser};
use crate::cli::args::ExportArgs;
use crate::{Error, Result};

/// Export command runner
pub fn run_export(args: ExportArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();
    setup_logging(args.get_log_level());

    info!("Exporting canonical CSV from {}", args.input_path.display());
    let text = read_input(&args.input_path)?;

    let parsed = CsvParser::parse(&text)?;
    let canonical = to_csv(&parsed.headers, &parsed.records);

    match &args.output_path {
        Some(output_path) => {
            std::fs::write(output_path, &canonical).map_err(|e| {
                Error::io(
                    format!("failed to write output file {}", output_path.display()),
                    e,
                )
            })?;
            info!(
                "Wrote {} records to {}",
                parsed.records.len(),
                output_path.display()
            );
        }
        None => println!("{}", canonical),
    }

    Ok(ProcessingStats {
        rows_seen: parsed.stats.data_rows,
        rows_skipped: parsed.stats.rows_skipped,
        invoices_mapped: 0,
        records_skipped: 0,
        total_billed: 0,
        processing_time: start_time.elapsed(),
    })
}
