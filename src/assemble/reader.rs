//! assemble::reader
//!
//! Source module loading and ordered concatenation.
//!
//! # Contract
//!
//! Modules are read fresh on every build, in manifest order, and the whole
//! build aborts on the first unreadable module - no partial output is
//! produced. Concatenation is a pure fold over the loaded sequence: no
//! separators are added or removed beyond what the source files themselves
//! contain.

use std::fs;

use super::BuildError;
use crate::core::manifest::Manifest;
use crate::core::paths::BuildPaths;
use crate::core::types::ModuleId;

/// A loaded source module: identifier plus raw text content.
///
/// Immutable once read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceModule {
    /// The module's identifier.
    pub id: ModuleId,
    /// The module's raw text content.
    pub content: String,
}

/// Read every manifest module from disk, in manifest order.
///
/// # Errors
///
/// Returns [`BuildError::MissingModule`] naming the first identifier that
/// does not resolve to a readable file.
pub fn read_modules(
    paths: &BuildPaths,
    manifest: &Manifest,
) -> Result<Vec<SourceModule>, BuildError> {
    let mut modules = Vec::with_capacity(manifest.len());
    for id in manifest {
        let path = paths.module_path(id);
        let content = fs::read_to_string(&path).map_err(|e| BuildError::MissingModule {
            id: id.clone(),
            path: path.clone(),
            source: e,
        })?;
        modules.push(SourceModule {
            id: id.clone(),
            content,
        });
    }
    Ok(modules)
}

/// Concatenate module contents in sequence order.
///
/// # Example
///
/// ```
/// use bindery::assemble::{concat, SourceModule};
/// use bindery::core::types::ModuleId;
///
/// let modules = vec![
///     SourceModule { id: ModuleId::new("a").unwrap(), content: "one\n".into() },
///     SourceModule { id: ModuleId::new("b").unwrap(), content: "two\n".into() },
/// ];
/// assert_eq!(concat(&modules), "one\ntwo\n");
/// ```
pub fn concat(modules: &[SourceModule]) -> String {
    modules.iter().fold(String::new(), |mut acc, module| {
        acc.push_str(&module.content);
        acc
    })
}
