//! minify::mock
//!
//! Mock minifier implementation for deterministic testing.
//!
//! # Design
//!
//! The mock minifier stands in for the external tool so pipeline tests never
//! shell out. It records every invocation and supports two behaviors: copy
//! the source to the destination (an "identity minifier"), or replay a
//! configured failure.
//!
//! # Example
//!
//! ```
//! use bindery::minify::{Minifier, MockMinifier};
//! use std::path::Path;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let source = dir.path().join("lib.js");
//! let dest = dir.path().join("lib.min.js");
//! std::fs::write(&source, "var a = 1;\n").unwrap();
//!
//! let minifier = MockMinifier::new();
//! minifier.run(&source, &dest).unwrap();
//!
//! assert_eq!(std::fs::read_to_string(&dest).unwrap(), "var a = 1;\n");
//! assert_eq!(minifier.invocations().len(), 1);
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::traits::{Minifier, MinifyError};

/// Configured behavior for the mock.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Copy the source artifact to the destination verbatim.
    Copy,
    /// Return the given error without touching the destination.
    Fail(MinifyError),
}

/// Mock minifier for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone)]
pub struct MockMinifier {
    inner: Arc<Mutex<MockMinifierInner>>,
}

/// Internal mutable state.
#[derive(Debug)]
struct MockMinifierInner {
    /// Recorded (source, dest) pairs, in invocation order.
    invocations: Vec<(PathBuf, PathBuf)>,
    /// What `run` does.
    behavior: MockBehavior,
}

impl MockMinifier {
    /// Create a mock that copies the source to the destination.
    pub fn new() -> Self {
        Self::with_behavior(MockBehavior::Copy)
    }

    /// Create a mock that fails every invocation with the given error.
    pub fn failing(error: MinifyError) -> Self {
        Self::with_behavior(MockBehavior::Fail(error))
    }

    /// Create a mock with an explicit behavior.
    pub fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockMinifierInner {
                invocations: Vec::new(),
                behavior,
            })),
        }
    }

    /// Recorded (source, dest) invocations, in order.
    pub fn invocations(&self) -> Vec<(PathBuf, PathBuf)> {
        self.inner
            .lock()
            .expect("mock minifier mutex poisoned")
            .invocations
            .clone()
    }
}

impl Default for MockMinifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Minifier for MockMinifier {
    fn run(&self, source: &Path, dest: &Path) -> Result<(), MinifyError> {
        let behavior = {
            let mut inner = self.inner.lock().expect("mock minifier mutex poisoned");
            inner
                .invocations
                .push((source.to_path_buf(), dest.to_path_buf()));
            inner.behavior.clone()
        };

        match behavior {
            MockBehavior::Copy => {
                std::fs::copy(source, dest).map_err(|e| MinifyError::Failed {
                    code: Some(1),
                    stderr: format!("mock copy failed: {e}"),
                })?;
                Ok(())
            }
            MockBehavior::Fail(error) => Err(error),
        }
    }
}
