use thiserror::Error;

/// Error type for token operations.
///
/// Signature, structure and algorithm failures all surface as `Invalid`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is invalid")]
    Invalid,

    #[error("Token is expired")]
    Expired,

    #[error("Token is still valid")]
    StillValid,
}
