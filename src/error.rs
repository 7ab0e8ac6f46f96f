//! Store Errors

use thiserror::Error;

/// Failures surfaced by the task store.
///
/// Both variants are unrecoverable at the UI layer: a malformed stored
/// collection aborts startup, and a rejected write aborts the mutation
/// that triggered it.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The stored collection could not be parsed, or the in-memory
    /// collection could not be serialized.
    #[error("malformed task collection: {0}")]
    Serde(#[from] serde_json::Error),

    /// The storage slot rejected a write (e.g. quota exceeded).
    #[error("storage write failed: {0}")]
    Storage(String),
}
