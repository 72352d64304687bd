//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--interactive` / `--no-interactive`: Control prompts
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Bindery - A CLI for assembling and minifying JS distribution bundles
#[derive(Parser, Debug)]
#[command(name = "bindery")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if bindery was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; implies --no-interactive
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable interactive prompts
    #[arg(long = "interactive", global = true, conflicts_with = "no_interactive")]
    pub interactive_flag: bool,

    /// Disable interactive prompts
    #[arg(long, global = true)]
    pub no_interactive: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Determine if interactive mode is enabled.
    ///
    /// Returns true if:
    /// - `--interactive` was explicitly set, OR
    /// - Neither `--no-interactive` nor `--quiet` was set AND stdin is a TTY
    pub fn interactive(&self) -> bool {
        if self.interactive_flag {
            true
        } else if self.no_interactive || self.quiet {
            false
        } else {
            std::io::stdin().is_terminal()
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble the library and minify it
    #[command(
        name = "build",
        long_about = "Assemble the library and minify it.\n\n\
            Reads every module named in bindery.toml, in order, splices the \
            concatenated content into the template at the injection marker, writes \
            the raw artifact, then invokes the configured external minifier to \
            produce the compressed artifact. Both outputs are fully regenerated on \
            every run.\n\n\
            Any failure aborts the build with a non-zero exit status; treat the \
            outputs of a failed build as untrustworthy.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Build both artifacts (most common usage)
    bn build

    # Machine-readable build report for scripting
    bn build --json

    # Build a project elsewhere
    bn --cwd ../my-lib build"
    )]
    Build {
        /// Print the build report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration without building
    #[command(
        name = "check",
        long_about = "Validate configuration without writing anything.\n\n\
            Verifies that every module in the manifest resolves to a readable \
            source file, that the template exists, and that it contains the \
            injection marker exactly once. Reports every problem found, then \
            exits non-zero if there were any.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Sanity-check the project before a release build
    bn check"
    )]
    Check,

    /// Create a starter bindery.toml
    #[command(
        name = "init",
        long_about = "Create a starter bindery.toml in the current directory.\n\n\
            The generated file documents every setting. When a bindery.toml \
            already exists, init asks before overwriting (or requires --force \
            in non-interactive mode)."
    )]
    Init {
        /// Overwrite an existing bindery.toml without asking
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion for Bindery \
            commands.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    bn completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    bn completion zsh >> ~/.zshrc

    # Fish
    bn completion fish > ~/.config/fish/completions/bn.fish

    # PowerShell
    bn completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
