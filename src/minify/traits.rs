//! minify::traits
//!
//! Minifier trait definition and error taxonomy.
//!
//! # Contract
//!
//! `run(source, dest)` synchronously produces a semantically-equivalent,
//! smaller document at `dest` from the artifact at `source`. Implementations
//! only report whether the producer terminated successfully; they never
//! inspect the produced document. There is no timeout and no cancellation
//! path: a hung tool hangs the build.

use std::path::Path;

use thiserror::Error;

/// Errors from minification.
///
/// Variants are cheap to clone so mock implementations can replay a
/// configured failure on every invocation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MinifyError {
    /// The external process could not be spawned at all.
    #[error("failed to launch minifier '{program}': {message}")]
    Launch {
        /// Program that was invoked
        program: String,
        /// OS error description
        message: String,
    },

    /// The external process terminated abnormally or reported failure.
    #[error("minifier exited with {}: {stderr}", .code.map_or_else(|| "signal".to_string(), |c| format!("status {c}")))]
    Failed {
        /// Exit code; `None` when the process was killed by a signal
        code: Option<i32>,
        /// Captured diagnostic output
        stderr: String,
    },
}

/// A synchronous minification step.
///
/// The pipeline depends only on this trait. The real implementation is
/// [`crate::minify::ExternalMinifier`]; tests use
/// [`crate::minify::MockMinifier`].
pub trait Minifier {
    /// Produce a minified copy of `source` at `dest`.
    ///
    /// # Errors
    ///
    /// - [`MinifyError::Launch`] if the tool cannot be started
    /// - [`MinifyError::Failed`] if the tool exits unsuccessfully
    fn run(&self, source: &Path, dest: &Path) -> Result<(), MinifyError>;
}
