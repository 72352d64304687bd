//! assemble::inject
//!
//! Marker-based injection into the template document.
//!
//! # Contract
//!
//! The template must contain the literal marker exactly once. Zero
//! occurrences means the template was authored without an injection point;
//! more than one means the injection point is ambiguous. Both are fatal
//! configuration errors - the injector never picks the first of several
//! occurrences, since the extra occurrences would silently vanish from the
//! output.
//!
//! `inject` is a pure function: no I/O, no mutation of inputs, deterministic
//! for identical inputs.

use thiserror::Error;

/// Errors from injection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InjectError {
    /// The marker does not appear in the template.
    #[error("injection marker '{marker}' not found in template")]
    MarkerNotFound {
        /// The marker that was searched for
        marker: String,
    },

    /// The marker appears more than once in the template.
    #[error("injection marker '{marker}' appears {count} times in template, expected exactly one")]
    AmbiguousMarker {
        /// The marker that was searched for
        marker: String,
        /// How many occurrences were found
        count: usize,
    },
}

/// Count literal occurrences of the marker in a template.
///
/// Useful for validating a template without building it.
pub fn marker_count(template: &str, marker: &str) -> usize {
    if marker.is_empty() {
        return 0;
    }
    template.matches(marker).count()
}

/// Splice `content` into `template` at the single occurrence of `marker`.
///
/// Returns `prefix + content + suffix`, where prefix is everything strictly
/// before the marker and suffix everything strictly after it. The marker
/// itself is consumed and never appears in the output.
///
/// # Errors
///
/// - [`InjectError::MarkerNotFound`] if the marker is absent
/// - [`InjectError::AmbiguousMarker`] if it appears more than once
///
/// # Example
///
/// ```
/// use bindery::assemble::inject;
///
/// let merged = inject("A/*{{inject_build}}*/B", "/*{{inject_build}}*/", "X").unwrap();
/// assert_eq!(merged, "AXB");
/// ```
pub fn inject(template: &str, marker: &str, content: &str) -> Result<String, InjectError> {
    match marker_count(template, marker) {
        0 => Err(InjectError::MarkerNotFound {
            marker: marker.to_string(),
        }),
        1 => {
            // Exactly one occurrence, so split_once cannot miss.
            let (prefix, suffix) = match template.split_once(marker) {
                Some(parts) => parts,
                None => {
                    return Err(InjectError::MarkerNotFound {
                        marker: marker.to_string(),
                    })
                }
            };
            let mut merged = String::with_capacity(prefix.len() + content.len() + suffix.len());
            merged.push_str(prefix);
            merged.push_str(content);
            merged.push_str(suffix);
            Ok(merged)
        }
        count => Err(InjectError::AmbiguousMarker {
            marker: marker.to_string(),
            count,
        }),
    }
}
