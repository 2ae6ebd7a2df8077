//! Cross-cutting error types for Tutor.
//!
//! Errors raised by pure logic in this crate (validation, composition edits).
//! Storage-level errors live in `tutor-db` as `DatabaseError`, which absorbs
//! `CoreError` through a `From` conversion.

use thiserror::Error;

/// Errors raised by validation and composition edits.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (unknown enum value, malformed input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A position argument fell outside the sequence it addresses.
    #[error("{what} {index} is out of range for a sequence of length {len}")]
    OutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// Two sequences that must be co-indexed have different lengths.
    #[error("Mismatched sequence lengths: {ids} ids but {tags} type tags")]
    LengthMismatch { ids: usize, tags: usize },
}
