use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    #[error("Signing key is missing")]
    MissingSigningKey,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    BadSignature,
}
