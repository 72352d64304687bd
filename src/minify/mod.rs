//! minify
//!
//! Narrow interface to the external minification tool.
//!
//! # Design
//!
//! Minification is an out-of-process collaborator: Bindery does not parse,
//! validate, or understand the tool's output. The [`Minifier`] trait is the
//! single seam between the pipeline and that collaborator, so pipeline
//! correctness can be tested with [`MockMinifier`] without ever shelling out.
//!
//! - [`traits`] - The `Minifier` trait and error taxonomy
//! - [`external`] - Real implementation via a synchronous child process
//! - [`mock`] - Deterministic in-memory implementation for tests

pub mod external;
pub mod mock;
pub mod traits;

pub use external::{ExternalMinifier, MinifierCommand};
pub use mock::{MockBehavior, MockMinifier};
pub use traits::{Minifier, MinifyError};
