//! # DTCP Crypto - Client-Side Ledger Identity
//!
//! Cryptographic core for the DTCP ledger client.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | Keccak-256 | DNA digests, signature inputs |
//! | `codec` | SEC1 hex encodings | Canonical scalar/point wire form |
//! | `keys` | secp256k1 | Key generation and derivation |
//! | `signing` | Recoverable ECDSA | Metadata/account signatures |
//!
//! ## Security Properties
//!
//! - **Keccak-256**: original Keccak padding, not NIST SHA-3
//! - **secp256k1**: RFC 6979 deterministic nonces, low-S signatures
//! - **Key material**: zeroized on drop, never persisted
//!
//! Everything here is a pure function of its inputs; the only external
//! resource is the OS entropy source used by key generation.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod errors;
pub mod hashing;
pub mod keys;
pub mod signing;

// Re-exports
pub use codec::{decode_digest, decode_point, decode_scalar, encode_point, is_valid_public_key};
pub use errors::{EncodingError, SigningError};
pub use hashing::{keccak256, keccak256_hex, Hash, Keccak256Hasher};
pub use keys::{derive_public_key, Keypair};
pub use signing::{sign, sign_digest, verify, SIGNATURE_HEX_LEN};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
