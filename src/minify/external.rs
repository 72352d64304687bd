//! minify::external
//!
//! External minifier invocation via a synchronous child process.
//!
//! # Invocation Shape
//!
//! `<program> <args...> <source> [<output_flag>] <dest>`
//!
//! This matches the common CLI shape of compressor tools, e.g.
//! `java -jar compressor.jar lib.js -o lib.min.js`. Tools that take the
//! destination as a plain positional argument are configured with an empty
//! `output_flag`.
//!
//! # Black-Box Contract
//!
//! The tool's algorithm and output are opaque. Only the termination status is
//! inspected; stdout and stderr are captured so a failure carries the tool's
//! own diagnostics.

use std::path::Path;
use std::process::Command;

use super::traits::{Minifier, MinifyError};

/// A fully-resolved minifier command line, minus the two paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinifierCommand {
    /// Program to invoke.
    pub program: String,
    /// Arguments placed before the source path.
    pub args: Vec<String>,
    /// Flag placed before the destination path; empty means the destination
    /// is passed positionally.
    pub output_flag: String,
}

/// Minifier implementation that shells out to the configured tool.
///
/// # Example
///
/// ```no_run
/// use bindery::minify::{ExternalMinifier, Minifier, MinifierCommand};
/// use std::path::Path;
///
/// let minifier = ExternalMinifier::new(MinifierCommand {
///     program: "java".into(),
///     args: vec!["-jar".into(), "tools/compressor.jar".into()],
///     output_flag: "-o".into(),
/// });
/// minifier.run(Path::new("dist/lib.js"), Path::new("dist/lib.min.js")).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ExternalMinifier {
    command: MinifierCommand,
}

impl ExternalMinifier {
    /// Create a minifier from a resolved command line.
    pub fn new(command: MinifierCommand) -> Self {
        Self { command }
    }

    /// The configured command line.
    pub fn command(&self) -> &MinifierCommand {
        &self.command
    }
}

impl Minifier for ExternalMinifier {
    fn run(&self, source: &Path, dest: &Path) -> Result<(), MinifyError> {
        let mut cmd = Command::new(&self.command.program);
        cmd.args(&self.command.args).arg(source);
        if !self.command.output_flag.is_empty() {
            cmd.arg(&self.command.output_flag);
        }
        cmd.arg(dest);

        let output = cmd.output().map_err(|e| MinifyError::Launch {
            program: self.command.program.clone(),
            message: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            // Some tools report failures on stdout only.
            let diagnostics = if stderr.is_empty() {
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            } else {
                stderr
            };
            return Err(MinifyError::Failed {
                code: output.status.code(),
                stderr: diagnostics,
            });
        }

        Ok(())
    }
}
