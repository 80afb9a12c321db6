//! Platform-specific functionality and error handling.

use super::config::CliArgs;

/// Handle application errors by printing them and exiting with code 1
pub fn handle_error(error: anyhow::Error) {
    eprintln!();
    eprintln!("Error running bolden:");
    eprintln!("{error}");
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
    eprintln!();
    eprintln!("Try running with --help for usage information.");
    std::process::exit(1);
}

/// Parse command line arguments
pub fn get_cli_args() -> CliArgs {
    use clap::Parser;
    CliArgs::parse()
}
