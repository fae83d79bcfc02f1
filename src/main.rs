//! Main entry point for headerdiff CLI

use clap::Parser;
use headerdiff::cli::Cli;
use headerdiff::commands::execute_command;

fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging, RUST_LOG still wins over the default level
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    // Execute the command
    if let Err(e) = execute_command(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
