//! assemble
//!
//! Orchestrates the build pipeline: Read -> Concat -> Inject -> Write -> Minify.
//!
//! # Architecture
//!
//! The pipeline is a strictly linear state machine executed by one control
//! thread:
//!
//! ```text
//! Idle -> ModulesLoading -> Injecting -> RawWritten -> Minifying -> Done
//! ```
//!
//! A terminal `Failed` state is reachable from any non-terminal state. There
//! are no retries and no state ever returns to an earlier state. On failure
//! the build stops immediately; artifacts already written remain on disk in
//! whatever state they were left - callers must treat a failed build as
//! "output not trustworthy" regardless of which files exist.
//!
//! # Invariants
//!
//! - Concatenation order always equals manifest order
//! - The marker must appear exactly once in the template; the build never
//!   guesses an alternate marker or picks the first of several occurrences
//! - Every input is re-read on every build; nothing is cached across builds

pub mod inject;
pub mod lock;
pub mod pipeline;
pub mod reader;
pub mod writer;

// Re-exports for convenience
pub use inject::{inject, marker_count, InjectError};
pub use lock::{BuildLock, LockError};
pub use pipeline::{BuildReport, BuildState, Pipeline};
pub use reader::{concat, read_modules, SourceModule};
pub use writer::write_artifact;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::types::ModuleId;
use crate::minify::MinifyError;

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags that affect command behavior.
#[derive(Debug, Clone)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// Interactive mode enabled.
    pub interactive: bool,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            cwd: None,
            debug: false,
            quiet: false,
            interactive: true,
        }
    }
}

/// Errors from the build pipeline.
///
/// Every variant is fatal to the current build invocation - there is no
/// local recovery, no partial-success mode, and no retry of any step.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A configured module identifier has no readable source.
    #[error("missing module '{id}': cannot read '{path}'")]
    MissingModule {
        /// The unresolvable identifier
        id: ModuleId,
        /// The path that was tried
        path: PathBuf,
        /// The underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The template document could not be read.
    #[error("cannot read template '{path}'")]
    Template {
        /// The template path
        path: PathBuf,
        /// The underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The template's marker invariant is violated.
    #[error(transparent)]
    Inject(#[from] InjectError),

    /// An artifact destination is not writable.
    #[error("cannot write artifact '{path}'")]
    Write {
        /// The destination path
        path: PathBuf,
        /// The underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Another build holds the output lock.
    #[error(transparent)]
    Lock(#[from] LockError),

    /// The external minification tool failed or was unreachable.
    #[error("minification failed")]
    Minify(#[from] MinifyError),
}
