use clap::Parser;
use gdelt_fetcher::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(_stats) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("GDELT Fetcher - Global Event Snapshot Downloader");
    println!("================================================");
    println!();
    println!("Fetch the latest GDELT v2 export snapshot, verify its integrity and");
    println!("decode it into typed event records for downstream analytics.");
    println!();
    println!("USAGE:");
    println!("    gdelt-fetcher <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    fetch       Fetch and decode the latest export snapshot (main command)");
    println!("    decode      Decode a local decompressed export CSV file");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Fetch the latest snapshot and print a summary:");
    println!("    gdelt-fetcher fetch");
    println!();
    println!("    # Fetch the latest snapshot and write events as JSON Lines:");
    println!("    gdelt-fetcher fetch --output events.jsonl");
    println!();
    println!("    # Decode a previously extracted export file:");
    println!("    gdelt-fetcher decode 20230615120000.export.CSV --output events.jsonl");
    println!();
    println!("For detailed help on any command, use:");
    println!("    gdelt-fetcher <COMMAND> --help");
}
