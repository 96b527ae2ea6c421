//! Error types for fdo-kdf.

/// Errors that can occur while deriving key material.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KdfError {
    /// The hash algorithm identifier is not in the supported set.
    #[error("\"{0}\" is an unknown hash algorithm")]
    UnknownAlgorithm(String),

    /// The requested output length is zero or larger than the construction can encode.
    #[error("Invalid output length: {requested} bytes (must be between 1 and {max} bytes)")]
    InvalidLength {
        /// Requested output length in bytes
        requested: usize,
        /// Largest output length supported for the selected algorithm
        max: usize,
    },

    /// The HMAC primitive rejected the key.
    #[error("Invalid HMAC key: {0}")]
    InvalidKey(String),

    /// A known-answer self-test produced unexpected output.
    #[error("Self-test failed: {0}")]
    SelfTestFailed(String),
}

/// Result type alias for fdo-kdf operations.
pub type Result<T> = std::result::Result<T, KdfError>;
