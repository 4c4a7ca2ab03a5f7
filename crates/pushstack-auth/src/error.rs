//! Error types for request signing and verification.
//!
//! The signing paths are total functions: malformed input is signed as-is
//! and simply fails server-side verification. [`AuthError`] covers the two
//! fallible seams: presence user-data encoding and server-side signature
//! verification.

/// Errors that can occur while producing or verifying authentication material.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Presence channel user data could not be serialized by the encoder.
    #[error("user data encoding failed: {0}")]
    UserDataEncoding(#[from] serde_json::Error),

    /// A required auth parameter is missing from a parameter list under
    /// verification.
    #[error("missing auth parameter: {0}")]
    MissingAuthParam(String),

    /// The computed signature does not match the provided signature.
    #[error("signature does not match")]
    SignatureDoesNotMatch,
}
