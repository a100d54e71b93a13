//! Crypto error types.

use thiserror::Error;

/// Errors raised while decoding hex-encoded curve material.
///
/// All canonical encodings are lowercase hex with no `0x` prefix and a fixed
/// length (64 chars for scalars and digests, 66/130 for points, 130 for
/// recoverable signatures). Anything else is rejected before it reaches the
/// curve arithmetic.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncodingError {
    /// Input length does not match the expected encoding
    #[error("Invalid hex length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Accepted length(s) in hex characters
        expected: &'static str,
        /// Actual length in hex characters
        actual: usize,
    },

    /// Input contains characters outside `[0-9a-fA-F]`
    #[error("Invalid hex character")]
    InvalidHex,

    /// Scalar decodes to 0 or to a value >= the secp256k1 group order
    #[error("Scalar out of range [1, n-1]")]
    ScalarOutOfRange,

    /// Point prefix byte is not 0x02/0x03 (compressed) or 0x04 (uncompressed)
    #[error("Invalid point prefix: {0:#04x}")]
    InvalidPointPrefix(u8),

    /// Coordinates do not satisfy the secp256k1 curve equation
    #[error("Point is not on the secp256k1 curve")]
    PointNotOnCurve,

    /// Recovery indicator outside its valid domain (0-3, or 27/28)
    #[error("Invalid recovery id: {0}")]
    InvalidRecoveryId(u8),
}

/// Errors raised while producing a recoverable signature.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SigningError {
    /// The private key hex was malformed
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// No candidate recovery id reproduces the signer's public key
    #[error("Recovery id search exhausted")]
    RecoveryIdExhausted,

    /// The ECDSA implementation rejected the signing inputs
    #[error("ECDSA signing failed")]
    SigningFailed,
}
