//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Project Config
//!
//! Located at `<project root>/bindery.toml`. The `[build]` table is required;
//! `[minifier]` may be omitted when the global config supplies it.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$BINDERY_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/bindery/config.toml`
//! 3. `~/.bindery/config.toml`
//!
//! The global config only carries `[minifier]` defaults, so user-local
//! toolchain paths stay out of checked-in project files.
//!
//! # Validation
//!
//! Config values are validated after parsing: module ids must be well-formed
//! and unique, and the marker must be non-empty.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::manifest::Manifest;
use crate::core::types::ModuleId;

/// The default injection marker looked up in the template document.
pub const DEFAULT_MARKER: &str = "/*{{inject_build}}*/";

/// The default filename extension appended to module ids.
pub const DEFAULT_EXTENSION: &str = "js";

/// The default flag passed before the destination path when invoking
/// the external minifier.
pub const DEFAULT_OUTPUT_FLAG: &str = "-o";

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

/// Project configuration (`bindery.toml`).
///
/// # Example
///
/// ```toml
/// [build]
/// modules = ["lib", "util", "remote"]
/// source_dir = "src"
/// template = "src/main.js"
/// raw_out = "dist/lib.js"
/// min_out = "dist/lib.min.js"
///
/// [minifier]
/// command = "java"
/// args = ["-jar", "tools/compressor.jar"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Build inputs and outputs.
    pub build: BuildConfig,

    /// Minifier invocation (overrides the global config per-field).
    pub minifier: Option<MinifierTable>,
}

impl ProjectConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build.validate()
    }
}

/// The `[build]` table: manifest, locations, and the injection marker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Ordered module manifest. Order defines concatenation order.
    pub modules: Vec<String>,

    /// Directory containing the source modules, relative to the project root.
    pub source_dir: PathBuf,

    /// Filename extension appended to module ids (default `js`).
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Path to the template document.
    pub template: PathBuf,

    /// Literal injection marker that must appear exactly once in the template.
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Destination of the raw artifact.
    pub raw_out: PathBuf,

    /// Destination of the compressed artifact.
    pub min_out: PathBuf,
}

impl BuildConfig {
    /// Build the module manifest from the configured names.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a name is not a valid module id
    /// or appears more than once.
    pub fn manifest(&self) -> Result<Manifest, ConfigError> {
        let mut ids = Vec::with_capacity(self.modules.len());
        for name in &self.modules {
            let id = ModuleId::new(name.clone())
                .map_err(|e| ConfigError::InvalidValue(format!("build.modules: {e}")))?;
            ids.push(id);
        }
        Manifest::new(ids).map_err(|e| ConfigError::InvalidValue(format!("build.modules: {e}")))
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.marker.is_empty() {
            return Err(ConfigError::InvalidValue(
                "build.marker cannot be empty".into(),
            ));
        }
        self.manifest().map(|_| ())
    }
}

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// [minifier]
/// command = "java"
/// args = ["-jar", "/opt/yui/compressor.jar"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Minifier invocation defaults.
    pub minifier: Option<MinifierTable>,
}

/// The `[minifier]` table.
///
/// All fields are optional so the project config can override the global
/// config per-field. The destination path is passed after `output_flag`;
/// set `output_flag = ""` for tools that take the destination as a plain
/// positional argument.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MinifierTable {
    /// Program to invoke.
    pub command: Option<String>,

    /// Arguments placed before the source path.
    pub args: Option<Vec<String>>,

    /// Flag placed before the destination path (default `-o`).
    pub output_flag: Option<String>,
}
