//! Validation errors for untyped (slice) inputs.

/// Precondition violations detected before any cipher work starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CipherError {
    /// The key is not exactly 32 bytes.
    #[error("invalid key length: expected 32 bytes, got {got}")]
    InvalidKeyLength {
        /// Length of the rejected key in bytes.
        got: usize,
    },
    /// The IV is not exactly 16 bytes.
    #[error("invalid iv length: expected 16 bytes, got {got}")]
    InvalidIvLength {
        /// Length of the rejected IV in bytes.
        got: usize,
    },
    /// A block is not exactly 16 bytes.
    #[error("invalid block length: expected 16 bytes, got {got}")]
    InvalidBlockLength {
        /// Length of the rejected block in bytes.
        got: usize,
    },
}
