//! ulidhex - convert ULIDs between Crockford Base32 and hex.
//!
//! Takes the place of an editor host: a selection is encoded, a ULID under
//! the cursor is inspected.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod input;
mod logging;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::Config::from_env()?;

    logging::init(&config);

    // Run the command
    if let Err(e) = cli.run() {
        // Print error in a user-friendly way
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
