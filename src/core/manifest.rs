//! core::manifest
//!
//! The ordered module manifest.
//!
//! # Semantics
//!
//! The manifest defines the concatenation order of source modules, and
//! therefore the runtime behavior of the assembled library: later modules may
//! depend on symbols defined by earlier ones. Order is preserved exactly as
//! configured; the manifest is fixed at build time and never discovered.
//!
//! # Invariants
//!
//! - No duplicate identifiers (rejected at construction)
//! - Iteration order equals construction order
//!
//! # Example
//!
//! ```
//! use bindery::core::manifest::Manifest;
//! use bindery::core::types::ModuleId;
//!
//! let manifest = Manifest::new(vec![
//!     ModuleId::new("lib").unwrap(),
//!     ModuleId::new("util").unwrap(),
//!     ModuleId::new("remote").unwrap(),
//! ])
//! .unwrap();
//!
//! let order: Vec<&str> = manifest.iter().map(|id| id.as_str()).collect();
//! assert_eq!(order, ["lib", "util", "remote"]);
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::core::types::ModuleId;

/// Errors from manifest construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ManifestError {
    /// The same identifier appears more than once.
    #[error("duplicate module id in manifest: {id}")]
    Duplicate {
        /// The repeated identifier
        id: ModuleId,
    },
}

/// An ordered sequence of module identifiers with no duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest(Vec<ModuleId>);

impl Manifest {
    /// Create a manifest from an ordered list of module ids.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::Duplicate` if any identifier appears twice.
    ///
    /// # Example
    ///
    /// ```
    /// use bindery::core::manifest::Manifest;
    /// use bindery::core::types::ModuleId;
    ///
    /// let dup = ModuleId::new("util").unwrap();
    /// let result = Manifest::new(vec![dup.clone(), dup]);
    /// assert!(result.is_err());
    /// ```
    pub fn new(ids: Vec<ModuleId>) -> Result<Self, ManifestError> {
        let mut seen = HashSet::new();
        for id in &ids {
            if !seen.insert(id.clone()) {
                return Err(ManifestError::Duplicate { id: id.clone() });
            }
        }
        Ok(Self(ids))
    }

    /// Iterate over the module ids in manifest order.
    pub fn iter(&self) -> std::slice::Iter<'_, ModuleId> {
        self.0.iter()
    }

    /// Number of modules in the manifest.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the manifest is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The module ids as a slice, in manifest order.
    pub fn as_slice(&self) -> &[ModuleId] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a ModuleId;
    type IntoIter = std::slice::Iter<'a, ModuleId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
