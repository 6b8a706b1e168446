//! arcnames binary entry point.
//!
//! This is a thin wrapper around the arcnames-cli library that:
//! 1. Parses command-line arguments
//! 2. Initializes logging
//! 3. Validates configuration
//! 4. Runs the selected subcommand

use anyhow::Result;
use arcnames_cli::{Cli, logging, run};

fn main() -> Result<()> {
    let cli = Cli::from_args();
    logging::init(cli.log_json);

    tracing::debug!(command = ?cli.command, strict = cli.strict, "configuration loaded");

    cli.validate()?;
    run(&cli)
}
