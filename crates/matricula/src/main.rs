//! `matri` - interactive register of student records
//!
//! This binary runs the menu-driven session over an in-memory roster.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;

use anyhow::Context;
use clap::Parser;

use matricula::cli::Cli;
use matricula::{init_logging, Config, Roster, Shell};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config).context("configuration rejected")?;

    // Run the session over the real console
    let roster = Roster::new(config.records.clone());
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(roster, stdin.lock(), stdout.lock(), &config);
    shell.run()?;

    Ok(())
}
