//! Error types shared across the record model and adapter boundary.

use thiserror::Error;

/// Errors rejecting a malformed record at construction.
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    /// Record content was empty or whitespace.
    #[error("record content cannot be empty")]
    EmptyContent,
    /// A required identifier field was empty.
    #[error("record field cannot be empty: {0}")]
    EmptyField(&'static str),
    /// Confidence score fell outside `[0, 1]`.
    #[error("confidence score out of range: {0}")]
    ConfidenceOutOfRange(f64),
}

/// Errors surfaced by a source adapter fetch.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The adapter did not respond within the aggregation deadline.
    #[error("adapter timed out after {0}ms")]
    Timeout(u64),
    /// The adapter could not produce its batch.
    #[error("fetch failed: {0}")]
    FetchFailed(String),
    /// The adapter produced a record that failed validation.
    #[error("malformed record: {0}")]
    MalformedRecord(#[from] RecordError),
}
