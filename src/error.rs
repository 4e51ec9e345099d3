//! Error types for token operations.

use thiserror::Error;

/// Result type for token operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the token API.
///
/// Every decode-path failure (malformed segments, unknown algorithm,
/// key/algorithm mismatch, missing `typ`, signature mismatch) collapses
/// into [`Error::Invalid`]. Callers cannot tell which check rejected a
/// token.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Malformed input, bad key/algorithm pairing, or failed verification.
    #[error("invalid token or input")]
    Invalid,

    /// The claim is already present; claims are add-once.
    #[error("claim already exists")]
    Exists,
}
