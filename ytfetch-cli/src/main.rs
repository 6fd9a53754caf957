//! Main entry point for the ytfetch CLI.
//!
//! This is the command-line interface for downloading media into expanded
//! destination paths. It provides the following commands:
//! - `fetch`: Expand a destination, then download a URL or search result into it
//! - `resolve`: Show where a destination would be written
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = ytfetch::init_logger(cli.verbose, cli.quiet);
    logger.install();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        logger,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Fetch(cmd) => cmd.execute(&global),
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
