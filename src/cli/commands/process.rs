//! Process command implementation
//!
//! The main ingestion workflow: parse the upload, map it to invoice
//! records, hand the batch to the injected store, and report results.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use super::shared::{format_amount, read_input, setup_logging, ProcessingStats};
use crate::app::models::{unit_price, BatchSummary, InvoiceRecord};
use crate::app::services::csv::{CsvParser, ParseStats};
use crate::app::services::invoice_mapper::{InvoiceMapper, MapResult, MapStats};
use crate::app::services::invoice_store::{InvoiceStore, MemoryInvoiceStore};
use crate::cli::args::{OutputFormat, ProcessArgs};
use crate::config::IngestOptions;
use crate::{Error, Result};

/// Machine-readable run report
#[derive(Debug, Serialize)]
struct ProcessReport<'a> {
    parse: &'a ParseStats,
    map: &'a MapStats,
    summary: &'a BatchSummary,
}

/// Process command runner
pub fn run_process(args: ProcessArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();
    setup_logging(args.get_log_level());

    let options = IngestOptions {
        profile: args.schema.to_profile(),
        strict: args.strict,
        ..IngestOptions::default()
    };
    options.validate()?;

    info!("Processing upload: {}", args.input_path.display());
    let text = read_input(&args.input_path)?;

    let parsed = CsvParser::parse(&text)?;
    debug!("Parse stage: {}", parsed.stats.summary());

    let MapResult {
        invoices,
        stats: map_stats,
    } = InvoiceMapper::new(options.profile).map(&parsed)?;

    // The store owns the batch from here on; the command only reads back.
    let store = MemoryInvoiceStore::new();
    store.replace_batch(invoices);
    let batch = store.batch();
    let summary = store.summary();

    if let Some(output_path) = &args.output_path {
        let json = serde_json::to_string_pretty(&batch)
            .map_err(|e| Error::serialization("failed to serialize invoice batch", e))?;
        std::fs::write(output_path, json).map_err(|e| {
            Error::io(
                format!("failed to write output file {}", output_path.display()),
                e,
            )
        })?;
        info!("Wrote {} invoices to {}", batch.len(), output_path.display());
    }

    match args.output_format {
        OutputFormat::Human => {
            print_human_report(&options, &parsed.stats, &map_stats, &summary, &batch)
        }
        OutputFormat::Json => {
            let report = ProcessReport {
                parse: &parsed.stats,
                map: &map_stats,
                summary: &summary,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Csv => print_csv_report(&parsed.stats, &map_stats, &summary),
    }

    let stats = ProcessingStats {
        rows_seen: parsed.stats.data_rows,
        rows_skipped: parsed.stats.rows_skipped,
        invoices_mapped: map_stats.invoices_mapped,
        records_skipped: map_stats.records_skipped,
        total_billed: summary.total_billed,
        processing_time: start_time.elapsed(),
    };

    info!(
        "Processed {} rows into {} invoices in {:.3}s",
        stats.rows_seen,
        stats.invoices_mapped,
        stats.processing_time.as_secs_f64()
    );

    if options.strict && stats.total_skipped() > 0 {
        return Err(Error::data_validation(format!(
            "strict mode: {} rows skipped",
            stats.total_skipped()
        )));
    }

    Ok(stats)
}

/// Human-readable run report
fn print_human_report(
    options: &IngestOptions,
    parse_stats: &ParseStats,
    map_stats: &MapStats,
    summary: &BatchSummary,
    batch: &[InvoiceRecord],
) {
    println!("\nInvoice Processing Results");
    println!("==========================");
    println!("Rows parsed:      {}", parse_stats.records_parsed);
    println!("Rows skipped:     {}", parse_stats.rows_skipped);
    println!("Invoices mapped:  {}", map_stats.invoices_mapped);
    println!("Records skipped:  {}", map_stats.records_skipped);
    println!("Total billed:     {}", format_amount(summary.total_billed));

    print_issues(options, parse_stats, map_stats);

    if batch.is_empty() {
        return;
    }

    use crate::constants::usage_units;
    println!(
        "\nUnit      Resident      Total         Water/{}   Heating/{}",
        usage_units::WATER,
        usage_units::HEATING
    );
    for invoice in batch {
        // Zero usage renders as a placeholder, never a divided value
        let water = unit_price(invoice.fees.water, invoice.usage.water)
            .map(format_amount)
            .unwrap_or_else(|| "-".to_string());
        let heating = unit_price(invoice.fees.heating, invoice.usage.heating)
            .map(format_amount)
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:<9} {:<13} {:<13} {:<9} {}",
            invoice.unit,
            invoice.resident_name,
            format_amount(invoice.total()),
            water,
            heating
        );
    }
    println!();
}

/// Print capped row diagnostics
fn print_issues(options: &IngestOptions, parse_stats: &ParseStats, map_stats: &MapStats) {
    let cap = options.max_reported_issues;
    let total_issues = parse_stats.issues.len() + map_stats.errors.len();
    if total_issues == 0 {
        return;
    }

    println!("\nRow diagnostics ({} total):", total_issues);
    let mut shown = 0;
    for issue in parse_stats.issues.iter().take(cap) {
        println!("  - {}", issue);
        shown += 1;
    }
    for error in map_stats.errors.iter().take(cap.saturating_sub(shown)) {
        println!("  - {}", error);
        shown += 1;
    }
    if total_issues > shown {
        println!("  - ... and {} more", total_issues - shown);
    }
}

/// CSV key/value metrics report
fn print_csv_report(parse_stats: &ParseStats, map_stats: &MapStats, summary: &BatchSummary) {
    println!("metric,value");
    println!("data_rows,{}", parse_stats.data_rows);
    println!("rows_parsed,{}", parse_stats.records_parsed);
    println!("rows_skipped,{}", parse_stats.rows_skipped);
    println!("invoices_mapped,{}", map_stats.invoices_mapped);
    println!("records_skipped,{}", map_stats.records_skipped);
    println!("invoice_count,{}", summary.invoice_count);
    println!("total_billed,{}", summary.total_billed);
}
