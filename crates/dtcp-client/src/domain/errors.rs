//! # Client Errors
//!
//! Tagged error taxonomy for the node client. Callers pattern-match on the
//! kind instead of catching one broad failure: validation and encoding
//! problems are always raised before any transport call, transport problems
//! only after.

use dtcp_crypto::{EncodingError, SigningError};
use thiserror::Error;

/// A request precondition was unmet.
///
/// Every variant is detected locally, before the transport collaborator is
/// invoked; a request that fails validation is never partially sent.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Node base address is blank
    #[error("Node base address is empty")]
    EmptyNodeAddress,

    /// DNA digest-identifier is blank
    #[error("DNA is empty")]
    EmptyDna,

    /// Metadata record carries no signature
    #[error("Metadata signature is empty")]
    EmptySignature,

    /// Metadata record carries no license
    #[error("License is missing")]
    MissingLicense,

    /// License type is blank
    #[error("License type is empty")]
    EmptyLicenseType,

    /// License parameter mapping is empty
    #[error("License parameters are empty")]
    EmptyLicenseParameters,

    /// Block-hash check request body is missing
    #[error("Request body is missing")]
    MissingRequestBody,

    /// Account public key is not a valid compressed secp256k1 point
    #[error("Public key is not a valid compressed secp256k1 point")]
    InvalidPublicKey,

    /// Account registration needs at least one sub public key
    #[error("At least one sub public key is required")]
    NoSubPublicKeys,

    /// Request payload could not be serialized to JSON
    #[error("Request payload could not be serialized")]
    UnserializablePayload,
}

/// Opaque failure from the transport collaborator.
///
/// Retry and timeout policy live behind the `Transport` trait; this layer
/// only propagates the outcome.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// Connection-level failure
    #[error("Network error: {0}")]
    Network(String),

    /// Node answered with a non-2xx status
    #[error("Unexpected status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body, if any
        body: String,
    },

    /// Request did not complete in time
    #[error("Request timed out")]
    Timeout,
}

/// Top-level client error.
///
/// One variant per error kind so callers can match on what went wrong.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A local precondition check failed; nothing was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The transport collaborator failed
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Hex-encoded key or signature material was malformed
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// Producing a recoverable signature failed
    #[error(transparent)]
    Signing(#[from] SigningError),

    /// The node response body was not the expected JSON shape
    #[error("Failed to decode node response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_wraps_into_client_error() {
        let err = ClientError::from(ValidationError::EmptyNodeAddress);
        assert!(matches!(
            err,
            ClientError::Validation(ValidationError::EmptyNodeAddress)
        ));
    }

    #[test]
    fn test_error_messages_are_stable() {
        assert_eq!(
            ValidationError::EmptyLicenseParameters.to_string(),
            "License parameters are empty"
        );
        assert_eq!(
            TransportError::Status {
                status: 503,
                body: "busy".into()
            }
            .to_string(),
            "Unexpected status 503: busy"
        );
    }
}
