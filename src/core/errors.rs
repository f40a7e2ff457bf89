/*!
 * Error Types
 * Checked-accessor failures with thiserror, miette, and serde support
 *
 * Misses and duplicate keys are expected in normal operation and are reported
 * as `None` / `false` by the adapters. Only the checked accessors (`at`,
 * `for_each_range`) produce a `CollectionError`.
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for checked container operations
pub type CollectionResult<T> = Result<T, CollectionError>;

/// Container access errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum CollectionError {
    #[error("Index {index} out of range for length {len}")]
    #[diagnostic(
        code(collection::out_of_range),
        help("The container may have shrunk since its length was observed. Use `get` for a non-failing lookup.")
    )]
    OutOfRange { index: usize, len: usize },

    #[error("Range {start}..{end} invalid for length {len}")]
    #[diagnostic(
        code(collection::invalid_range),
        help("The range must satisfy start <= end <= len at the moment the shared lock is taken.")
    )]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("Key not found")]
    #[diagnostic(
        code(collection::key_not_found),
        help("Use `get` for a non-failing lookup, or `get_or_insert_default` to create the entry.")
    )]
    KeyNotFound,
}

impl CollectionError {
    /// Build an `OutOfRange` error for `index` against a container of `len` elements
    #[inline]
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }

    /// Check a half-open range against a container length
    pub fn check_range(start: usize, end: usize, len: usize) -> CollectionResult<()> {
        if start <= end && end <= len {
            Ok(())
        } else {
            Err(Self::InvalidRange { start, end, len })
        }
    }
}
