//! Failure taxonomy for the assistant round-trip.
//!
//! ERROR HANDLING
//! ==============
//! Every variant collapses to the same user-visible fallback message; the
//! distinction exists only for the operational log.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure modes of one `POST /api/chat` round-trip.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    /// Network or transport failure before an HTTP status was received.
    #[error("chat request failed: {0}")]
    Transport(String),
    /// Server responded with a non-2xx status.
    #[error("chat request returned status {0}")]
    Status(u16),
    /// Well-formed envelope flagged unsuccessful by the backend, or a
    /// success envelope missing its reply text.
    #[error("assistant reply rejected: {0}")]
    Rejected(String),
    /// Response body was not a parseable envelope.
    #[error("malformed assistant reply: {0}")]
    Malformed(String),
}
