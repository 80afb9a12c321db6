//! Artificial emboldening of glyph outlines, built with Rust and Linebender crates.
//!
//! Flattens each glyph, sorts its contours into solids and holes, and
//! offsets every contour along its vertex normals.

use anyhow::Result;
use bolden::{core, logging};

/// Run the application with the given CLI arguments.
fn run_app(cli_args: core::CliArgs) -> Result<()> {
    let _log_guard = logging::init_logging(cli_args.verbose, cli_args.log_file)?;
    core::run_app(cli_args)
}

fn main() {
    let cli_args = core::platform::get_cli_args();
    match run_app(cli_args) {
        Ok(()) => {}
        Err(error) => core::platform::handle_error(error),
    }
}
