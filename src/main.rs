use clap::Parser;
use invoice_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    match commands::run(command) {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Render the whole source chain, not just the top message
            eprintln!("Error: {:#}", anyhow::Error::new(error));
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Invoice Processor - Management-Fee CSV Ingestion");
    println!("================================================");
    println!();
    println!("Parse building management-fee CSV uploads into validated invoice");
    println!("records with computed totals and per-unit prices.");
    println!();
    println!("USAGE:");
    println!("    invoice-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Parse and map a CSV upload into invoice records (main command)");
    println!("    validate    Check a CSV upload against the schema without producing output");
    println!("    export      Re-serialize a CSV upload in canonical quoting");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Ingest a billing upload and print the batch report:");
    println!("    invoice-processor process --input fees.csv");
    println!();
    println!("    # Ingest a usage-reading upload, writing invoices as JSON:");
    println!("    invoice-processor process --input readings.csv --schema usage \\");
    println!("                              --output invoices.json");
    println!();
    println!("    # Check a file before uploading it:");
    println!("    invoice-processor validate --input fees.csv --strict");
    println!();
    println!("For detailed help on any command, use:");
    println!("    invoice-processor <COMMAND> --help");
}
