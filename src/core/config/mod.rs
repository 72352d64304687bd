//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! Bindery has two configuration scopes:
//! - **Global**: user-level minifier defaults
//! - **Project**: the `bindery.toml` manifest and build locations
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Global config file
//! 3. Project config file
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$BINDERY_CONFIG` if set (must exist)
//! 2. `$XDG_CONFIG_HOME/bindery/config.toml`
//! 3. `~/.bindery/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use bindery::core::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Path::new("/path/to/project")).unwrap();
//! let manifest = config.manifest().unwrap();
//! println!("{} modules, marker {}", manifest.len(), config.marker());
//! ```

pub mod schema;

pub use schema::{BuildConfig, GlobalConfig, MinifierTable, ProjectConfig};

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::core::manifest::Manifest;
use crate::core::paths::BuildPaths;
use crate::minify::MinifierCommand;

/// The project configuration filename.
pub const PROJECT_FILE: &str = "bindery.toml";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no bindery.toml found in '{dir}' (run 'bn init' to create one)")]
    MissingProjectConfig { dir: PathBuf },

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Merged configuration from all sources.
///
/// Accessor methods apply precedence rules automatically: project config
/// overrides global config, which overrides built-in defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Global configuration.
    pub global: GlobalConfig,
    /// Project configuration.
    pub project: ProjectConfig,
    /// Path the project config was loaded from (if loaded from disk).
    project_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration for the project rooted at `root`.
    ///
    /// The project config is required; the global config is optional and
    /// defaults to empty when no global file exists.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingProjectConfig`] if `root` has no `bindery.toml`
    /// - [`ConfigError::ReadError`] / [`ConfigError::ParseError`] on unreadable
    ///   or malformed files
    /// - [`ConfigError::InvalidValue`] if validation fails
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let global = match Self::global_config_path() {
            Some(path) => Self::read_toml::<GlobalConfig>(&path)?,
            None => GlobalConfig::default(),
        };

        let project_path = root.join(PROJECT_FILE);
        if !project_path.exists() {
            return Err(ConfigError::MissingProjectConfig {
                dir: root.to_path_buf(),
            });
        }
        let project: ProjectConfig = Self::read_toml(&project_path)?;
        project.validate()?;

        Ok(Self {
            global,
            project,
            project_path: Some(project_path),
        })
    }

    /// Assemble a configuration from already-parsed parts.
    ///
    /// This is primarily useful for testing.
    pub fn from_parts(global: GlobalConfig, project: ProjectConfig) -> Self {
        Self {
            global,
            project,
            project_path: None,
        }
    }

    /// Path the project config was loaded from.
    pub fn project_path(&self) -> Option<&Path> {
        self.project_path.as_deref()
    }

    /// Build the module manifest from the project config.
    pub fn manifest(&self) -> Result<Manifest, ConfigError> {
        self.project.build.manifest()
    }

    /// The injection marker.
    pub fn marker(&self) -> &str {
        &self.project.build.marker
    }

    /// Resolve all build paths against the project root.
    pub fn build_paths(&self, root: &Path) -> BuildPaths {
        BuildPaths::from_config(root, &self.project.build)
    }

    /// Resolve the minifier invocation with precedence applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if neither the project nor the
    /// global config sets `minifier.command`.
    pub fn minifier_command(&self) -> Result<MinifierCommand, ConfigError> {
        let project = self.project.minifier.as_ref();
        let global = self.global.minifier.as_ref();

        let program = project
            .and_then(|m| m.command.clone())
            .or_else(|| global.and_then(|m| m.command.clone()))
            .ok_or_else(|| {
                ConfigError::InvalidValue(
                    "minifier.command is not set (add a [minifier] table to bindery.toml \
                     or the global config)"
                        .into(),
                )
            })?;

        let args = project
            .and_then(|m| m.args.clone())
            .or_else(|| global.and_then(|m| m.args.clone()))
            .unwrap_or_default();

        let output_flag = project
            .and_then(|m| m.output_flag.clone())
            .or_else(|| global.and_then(|m| m.output_flag.clone()))
            .unwrap_or_else(|| schema::DEFAULT_OUTPUT_FLAG.to_string());

        Ok(MinifierCommand {
            program,
            args,
            output_flag,
        })
    }

    /// Locate the global config file, if any.
    ///
    /// `$BINDERY_CONFIG` is honored even when the file does not exist, so a
    /// misconfigured override surfaces as a read error instead of being
    /// silently ignored.
    fn global_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("BINDERY_CONFIG") {
            return Some(PathBuf::from(path));
        }
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            let candidate = PathBuf::from(xdg).join("bindery").join("config.toml");
            if candidate.exists() {
                return Some(candidate);
            }
        }
        if let Some(home) = dirs::home_dir() {
            let candidate = home.join(".bindery").join("config.toml");
            if candidate.exists() {
                return Some(candidate);
            }
        }
        None
    }

    /// Read and parse a TOML file.
    fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
