//! # Key Management (secp256k1)
//!
//! Key-pair generation and public-key derivation.
//!
//! Private keys are 32-byte scalars in [1, n-1]; public keys are compressed
//! SEC1 points. Both travel as canonical lowercase hex (see `codec`). Keys
//! are never persisted by this crate; the caller owns the material.

use crate::codec;
use crate::errors::EncodingError;
use k256::ecdsa::SigningKey;
use k256::PublicKey;
use zeroize::Zeroize;

/// A freshly generated or imported secp256k1 key pair.
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Generate a random key pair from the OS CSPRNG.
    ///
    /// `SigningKey::random` rejection-samples until the scalar lands in
    /// [1, n-1], so an out-of-range draw can never escape.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::random(&mut rand::thread_rng()),
        }
    }

    /// Import a key pair from a canonical 64-hex-char private key.
    pub fn from_private_hex(private_hex: &str) -> Result<Self, EncodingError> {
        let scalar = codec::decode_scalar(private_hex)?;
        Ok(Self {
            signing_key: SigningKey::from(scalar),
        })
    }

    /// Private scalar as canonical lowercase hex (64 chars).
    pub fn private_key_hex(&self) -> String {
        hex::encode(self.signing_key.to_bytes())
    }

    /// Compressed public key as canonical lowercase hex (66 chars).
    pub fn public_key_hex(&self) -> String {
        let point = PublicKey::from(self.signing_key.verifying_key());
        codec::encode_point(&point, true)
    }

    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }
}

impl Drop for Keypair {
    fn drop(&mut self) {
        // Zeroize secret key material
        let mut bytes: [u8; 32] = self.signing_key.to_bytes().into();
        bytes.zeroize();
    }
}

/// Derive the compressed public key for a private scalar.
///
/// Pure and deterministic: the same 64-hex-char input always yields the same
/// 66-hex-char output. Malformed input (wrong length, non-hex, scalar out of
/// range) fails with `EncodingError` before any curve work happens.
pub fn derive_public_key(private_hex: &str) -> Result<String, EncodingError> {
    let scalar = codec::decode_scalar(private_hex)?;
    let signing_key = SigningKey::from(scalar);
    let point = PublicKey::from(signing_key.verifying_key());
    Ok(codec::encode_point(&point, true))
}
