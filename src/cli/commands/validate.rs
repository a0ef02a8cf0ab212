//! Validate command implementation
//!
//! Runs the parse and mapping passes purely for their diagnostics: the
//! mapped batch is discarded, and the command reports what a real
//! ingestion run would accept, skip, or reject.

use std::time::Instant;

use tracing::info;

use super::shared::{read_input, setup_logging, ProcessingStats};
use crate::app::services::csv::CsvParser;
use crate::app::services::invoice_mapper::{validate_headers, InvoiceMapper};
use crate::cli::args::ValidateArgs;
use crate::config::IngestOptions;
use crate::{Error, Result};

/// Validate command runner
pub fn run_validate(args: ValidateArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();
    setup_logging(args.get_log_level());

    let options = IngestOptions {
        profile: args.schema.to_profile(),
        strict: args.strict,
        ..IngestOptions::default()
    };
    options.validate()?;

    info!("Validating upload: {}", args.input_path.display());
    let text = read_input(&args.input_path)?;

    let parsed = CsvParser::parse(&text)?;

    // Surface the header verdict separately before row-level findings
    let required = options.profile.required_columns();
    validate_headers(&parsed.headers, &required)?;
    println!("Header OK: {} columns, all required fields present", parsed.headers.len());

    let mapped = InvoiceMapper::new(options.profile).map(&parsed)?;

    println!(
        "Rows: {} parsed, {} skipped for shape; {} of {} records map cleanly",
        parsed.stats.records_parsed,
        parsed.stats.rows_skipped,
        mapped.stats.invoices_mapped,
        mapped.stats.records_total,
    );

    for issue in parsed.stats.issues.iter().take(options.max_reported_issues) {
        println!("  - {}", issue);
    }
    for error in mapped.stats.errors.iter().take(options.max_reported_issues) {
        println!("  - {}", error);
    }

    let stats = ProcessingStats {
        rows_seen: parsed.stats.data_rows,
        rows_skipped: parsed.stats.rows_skipped,
        invoices_mapped: mapped.stats.invoices_mapped,
        records_skipped: mapped.stats.records_skipped,
        total_billed: 0,
        processing_time: start_time.elapsed(),
    };

    if options.strict && stats.total_skipped() > 0 {
        return Err(Error::data_validation(format!(
            "strict mode: {} rows would be skipped",
            stats.total_skipped()
        )));
    }

    info!(
        "Validation completed in {:.3}s",
        stats.processing_time.as_secs_f64()
    );

    Ok(stats)
}
