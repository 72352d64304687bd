//! cli
//!
//! Command-line interface layer for Bindery.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Does NOT run the pipeline directly
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to the
//! handlers in [`commands`], which drive the [`crate::assemble`] pipeline.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use crate::assemble;
use anyhow::Result;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    // Create context from CLI flags.
    let ctx = assemble::Context {
        cwd: cli.cwd.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
        interactive: cli.interactive(),
    };

    // Dispatch to command handler
    commands::dispatch(cli.command, &ctx)
}
