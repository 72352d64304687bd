//! core::paths
//!
//! Centralized path routing for build inputs and outputs.
//!
//! # Architecture
//!
//! All filesystem locations used by a build are computed here, from the
//! project root and the `[build]` configuration table. No other module should
//! join paths against the project root directly.
//!
//! # Layout
//!
//! Relative configuration paths are resolved against the project root:
//! - `<root>/<source_dir>/<module>.<extension>` - source modules
//! - `<root>/<template>` - the template document
//! - `<root>/<raw_out>` - the raw artifact
//! - `<root>/<min_out>` - the compressed artifact
//! - `<raw_out dir>/.bindery.lock` - the build lock
//!
//! Absolute configuration paths are used as-is.
//!
//! # Example
//!
//! ```
//! use bindery::core::paths::BuildPaths;
//! use bindery::core::types::ModuleId;
//! use std::path::{Path, PathBuf};
//!
//! let paths = BuildPaths::new(
//!     Path::new("/proj"),
//!     Path::new("src"),
//!     "js",
//!     Path::new("src/main.js"),
//!     Path::new("dist/lib.js"),
//!     Path::new("dist/lib.min.js"),
//! );
//!
//! let id = ModuleId::new("remote").unwrap();
//! assert_eq!(paths.module_path(&id), PathBuf::from("/proj/src/remote.js"));
//! assert_eq!(paths.raw_out(), Path::new("/proj/dist/lib.js"));
//! ```

use std::path::{Path, PathBuf};

use crate::core::config::schema::BuildConfig;
use crate::core::types::ModuleId;

/// Resolved filesystem locations for one build.
///
/// # Invariants
///
/// - All stored paths are already resolved against the project root
/// - No code outside this module computes module file names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPaths {
    /// Directory containing the source modules.
    source_dir: PathBuf,
    /// Filename extension appended to module ids (without the dot).
    extension: String,
    /// Path to the template document.
    template: PathBuf,
    /// Destination of the raw artifact.
    raw_out: PathBuf,
    /// Destination of the compressed artifact.
    min_out: PathBuf,
}

impl BuildPaths {
    /// Create build paths by resolving each location against the project root.
    pub fn new(
        root: &Path,
        source_dir: &Path,
        extension: impl Into<String>,
        template: &Path,
        raw_out: &Path,
        min_out: &Path,
    ) -> Self {
        Self {
            source_dir: root.join(source_dir),
            extension: extension.into(),
            template: root.join(template),
            raw_out: root.join(raw_out),
            min_out: root.join(min_out),
        }
    }

    /// Create build paths from a `[build]` configuration table.
    ///
    /// This is the preferred way to create `BuildPaths` after loading config.
    pub fn from_config(root: &Path, build: &BuildConfig) -> Self {
        Self::new(
            root,
            &build.source_dir,
            build.extension.clone(),
            &build.template,
            &build.raw_out,
            &build.min_out,
        )
    }

    /// Resolve a module id to its source file path.
    ///
    /// The filename is `<id>.<extension>`, or just `<id>` when the configured
    /// extension is empty.
    pub fn module_path(&self, id: &ModuleId) -> PathBuf {
        let filename = if self.extension.is_empty() {
            id.as_str().to_string()
        } else {
            format!("{}.{}", id.as_str(), self.extension)
        };
        self.source_dir.join(filename)
    }

    /// Path to the template document.
    pub fn template(&self) -> &Path {
        &self.template
    }

    /// Destination of the raw artifact.
    pub fn raw_out(&self) -> &Path {
        &self.raw_out
    }

    /// Destination of the compressed artifact.
    pub fn min_out(&self) -> &Path {
        &self.min_out
    }

    /// Path to the build lock file, next to the raw artifact.
    pub fn lock_path(&self) -> PathBuf {
        match self.raw_out.parent() {
            Some(dir) => dir.join(".bindery.lock"),
            None => PathBuf::from(".bindery.lock"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> BuildPaths {
        BuildPaths::new(
            Path::new("/proj"),
            Path::new("src"),
            "js",
            Path::new("src/main.js"),
            Path::new("dist/lib.js"),
            Path::new("dist/lib.min.js"),
        )
    }

    #[test]
    fn module_path_appends_extension() {
        let id = ModuleId::new("remote").unwrap();
        assert_eq!(paths().module_path(&id), PathBuf::from("/proj/src/remote.js"));
    }

    #[test]
    fn empty_extension_uses_bare_id() {
        let p = BuildPaths::new(
            Path::new("/proj"),
            Path::new("src"),
            "",
            Path::new("src/main.js"),
            Path::new("dist/lib.js"),
            Path::new("dist/lib.min.js"),
        );
        let id = ModuleId::new("remote").unwrap();
        assert_eq!(p.module_path(&id), PathBuf::from("/proj/src/remote"));
    }

    #[test]
    fn outputs_resolved_against_root() {
        let p = paths();
        assert_eq!(p.template(), Path::new("/proj/src/main.js"));
        assert_eq!(p.raw_out(), Path::new("/proj/dist/lib.js"));
        assert_eq!(p.min_out(), Path::new("/proj/dist/lib.min.js"));
    }

    #[test]
    fn absolute_config_paths_used_as_is() {
        let p = BuildPaths::new(
            Path::new("/proj"),
            Path::new("/elsewhere/src"),
            "js",
            Path::new("/elsewhere/main.js"),
            Path::new("/out/lib.js"),
            Path::new("/out/lib.min.js"),
        );
        assert_eq!(p.template(), Path::new("/elsewhere/main.js"));
        assert_eq!(p.raw_out(), Path::new("/out/lib.js"));
    }

    #[test]
    fn lock_path_lives_next_to_raw_artifact() {
        assert_eq!(
            paths().lock_path(),
            PathBuf::from("/proj/dist/.bindery.lock")
        );
    }
}
