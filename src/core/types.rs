//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`ModuleId`] - Validated source module identifier
//! - [`ArtifactDigest`] - SHA-256 content hash of a build artifact
//! - [`UtcTimestamp`] - RFC3339 timestamp
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use bindery::core::types::ModuleId;
//!
//! // Valid constructions
//! let id = ModuleId::new("remote").unwrap();
//! assert_eq!(id.as_str(), "remote");
//!
//! // Invalid constructions fail at creation time
//! assert!(ModuleId::new("../escape").is_err());
//! assert!(ModuleId::new("").is_err());
//! ```

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid module id: {0}")]
    InvalidModuleId(String),
}

/// A validated source module identifier.
///
/// A module id is a bare file stem, never a path. The reader resolves it to
/// `<source_dir>/<id>.<extension>`. Identifiers:
/// - Cannot be empty
/// - Cannot contain `/` or `\` (no path traversal)
/// - Cannot contain `..`
/// - Cannot start with `.` or `-`
/// - Cannot contain whitespace or ASCII control characters
///
/// # Example
///
/// ```
/// use bindery::core::types::ModuleId;
///
/// // Valid module ids
/// let id = ModuleId::new("remote").unwrap();
/// assert_eq!(id.as_str(), "remote");
/// assert!(ModuleId::new("event_dispatch").is_ok());
/// assert!(ModuleId::new("dom-utils").is_ok());
///
/// // Invalid module ids
/// assert!(ModuleId::new("").is_err());
/// assert!(ModuleId::new("src/remote").is_err());
/// assert!(ModuleId::new(".hidden").is_err());
/// assert!(ModuleId::new("has space").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleId(String);

impl ModuleId {
    /// Create a new validated module id.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidModuleId` if the id violates the rules above.
    pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    /// Validate a module id.
    fn validate(id: &str) -> Result<(), TypeError> {
        // Cannot be empty
        if id.is_empty() {
            return Err(TypeError::InvalidModuleId(
                "module id cannot be empty".into(),
            ));
        }

        // Cannot start with '.' or '-'
        if id.starts_with('.') {
            return Err(TypeError::InvalidModuleId(
                "module id cannot start with '.'".into(),
            ));
        }
        if id.starts_with('-') {
            return Err(TypeError::InvalidModuleId(
                "module id cannot start with '-'".into(),
            ));
        }

        // Cannot contain path separators or ".."
        if id.contains('/') || id.contains('\\') {
            return Err(TypeError::InvalidModuleId(
                "module id cannot contain path separators".into(),
            ));
        }
        if id.contains("..") {
            return Err(TypeError::InvalidModuleId(
                "module id cannot contain '..'".into(),
            ));
        }

        // Cannot contain whitespace or control characters
        for c in id.chars() {
            if c.is_whitespace() {
                return Err(TypeError::InvalidModuleId(
                    "module id cannot contain whitespace".into(),
                ));
            }
            if c.is_ascii_control() {
                return Err(TypeError::InvalidModuleId(
                    "module id cannot contain control characters".into(),
                ));
            }
        }

        Ok(())
    }

    /// Get the module id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ModuleId {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ModuleId> for String {
    fn from(id: ModuleId) -> Self {
        id.0
    }
}

impl AsRef<str> for ModuleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A SHA-256 content hash of a build artifact, hex-encoded.
///
/// Digests are recorded in the build report so callers can verify that two
/// builds against unchanged inputs produced byte-identical artifacts.
///
/// # Example
///
/// ```
/// use bindery::core::types::ArtifactDigest;
///
/// let a = ArtifactDigest::of(b"window.Lib = Lib;");
/// let b = ArtifactDigest::of(b"window.Lib = Lib;");
/// assert_eq!(a, b);
///
/// let c = ArtifactDigest::of(b"something else");
/// assert_ne!(a, c);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactDigest(String);

impl ArtifactDigest {
    /// Compute the digest of a document.
    pub fn of(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        Self(hex::encode(hasher.finalize()))
    }

    /// Get the digest as a hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ArtifactDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A UTC timestamp in RFC3339 format.
///
/// # Example
///
/// ```
/// use bindery::core::types::UtcTimestamp;
///
/// let now = UtcTimestamp::now();
/// println!("Build started: {}", now);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtcTimestamp(chrono::DateTime<chrono::Utc>);

impl UtcTimestamp {
    /// Create a timestamp for the current moment.
    pub fn now() -> Self {
        Self(chrono::Utc::now())
    }

    /// Create a timestamp from a chrono DateTime.
    pub fn from_datetime(dt: chrono::DateTime<chrono::Utc>) -> Self {
        Self(dt)
    }

    /// Get the underlying datetime.
    pub fn as_datetime(&self) -> &chrono::DateTime<chrono::Utc> {
        &self.0
    }
}

impl std::fmt::Display for UtcTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
