///
/// UUID error types.
///
/// Generating a v4 identifier and lenient parsing never fail. Errors come from
/// name-based generation (no usable MD5 digest) and from strict parsing.
///

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UuidError {
    #[error("MD5 digest capability unavailable: {reason}")]
    CapabilityUnavailable { reason: String },

    #[error("Digest too short for a UUID: got {len} bytes, need 16")]
    ShortDigest { len: usize },

    #[error("Malformed UUID '{input}': {reason}")]
    Malformed { input: String, reason: String },
}

/// Result type for UUID operations.
pub type UuidResult<T> = Result<T, UuidError>;
