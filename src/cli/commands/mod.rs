//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Loads configuration and drives the pipeline
//! 3. Formats and displays output
//!
//! Handlers do NOT implement pipeline steps themselves.

mod build;
mod check;
mod completion;
mod init;

// Re-export command functions for testing and direct invocation
pub use build::build;
pub use check::check;
pub use completion::completion;
pub use init::init;

use crate::assemble::Context;
use crate::cli::args::Command;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Build { json } => build(ctx, json),
        Command::Check => check(ctx),
        Command::Init { force } => init(ctx, force),
        Command::Completion { shell } => completion(shell),
    }
}

/// Resolve the project root from the context.
pub(crate) fn project_root(ctx: &Context) -> Result<std::path::PathBuf> {
    match &ctx.cwd {
        Some(cwd) => Ok(cwd.clone()),
        None => Ok(std::env::current_dir()?),
    }
}
