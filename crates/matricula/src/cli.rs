//! Command-line interface for matricula.
//!
//! The `matri` binary takes no subcommands; the interactive session is
//! the product. The flags here only shape the session's surroundings.

use std::path::PathBuf;

use clap::Parser;

use crate::logging::Verbosity;

/// matri - interactive register of student records
///
/// Starts a menu-driven session over an in-memory roster. Records live
/// only as long as the session.
#[derive(Debug, Parser)]
#[command(name = "matri")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }
}
