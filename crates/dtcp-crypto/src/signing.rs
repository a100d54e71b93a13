//! # Recoverable ECDSA Signatures (secp256k1)
//!
//! Signing and verification over Keccak-256 digests.
//!
//! ## Security Properties
//!
//! - RFC 6979 deterministic nonces (no RNG dependency for signing)
//! - Low-S normalized signatures
//! - Recovery indicator found by trial recovery against the signer's own key
//!
//! Wire format is r (32 bytes) || s (32 bytes) || v (1 byte), hex-encoded to
//! exactly 130 lowercase characters. The ledger's recovery indicator inverts
//! the y-parity bit relative to the conventional recovery id: v = recid ^ 1,
//! so v is 0x00 when the nonce point has odd y. The x-overflow bit (values
//! 2/3) is carried through unchanged.

use crate::codec;
use crate::errors::{EncodingError, SigningError};
use crate::hashing::{keccak256, Hash};
use crate::keys::Keypair;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;

/// Hex length of a recoverable signature (65 bytes).
pub const SIGNATURE_HEX_LEN: usize = 130;

/// Sign a raw message with a private key.
///
/// The message is Keccak-256 hashed first; the digest is what gets signed.
/// Nonces are derived per RFC 6979, so re-signing the same (key, message)
/// pair reproduces the same signature and a weak entropy source can never
/// leak the key.
pub fn sign(private_hex: &str, message: &[u8]) -> Result<String, SigningError> {
    sign_digest(private_hex, &keccak256(message))
}

/// Sign a pre-computed 32-byte digest with a private key.
///
/// Used when the caller already holds the digest (e.g. a DNA) rather than
/// the raw content.
pub fn sign_digest(private_hex: &str, digest: &Hash) -> Result<String, SigningError> {
    let keypair = Keypair::from_private_hex(private_hex)?;
    let (sig, _) = keypair
        .signing_key()
        .sign_prehash_recoverable(digest)
        .map_err(|_| SigningError::SigningFailed)?;

    // Trial recovery over the candidate domain pins down v: the unique id
    // whose recovered key matches the signer's own.
    let expected = *keypair.signing_key().verifying_key();
    let recovery_id = find_recovery_id(&expected, digest, &sig)?;

    let sig_bytes: [u8; 64] = sig.to_bytes().into();
    let mut out = [0u8; 65];
    out[..64].copy_from_slice(&sig_bytes);
    out[64] = recovery_id.to_byte() ^ 1;
    Ok(hex::encode(out))
}

/// Search the recovery-id domain {0..3} for the id that reproduces `expected`.
///
/// Ids 2 and 3 only occur when r overflows the group order, which is
/// astronomically rare but part of the domain. Exhausting the search is a
/// `SigningError`; it cannot happen for a correctly computed (r, s).
fn find_recovery_id(
    expected: &VerifyingKey,
    digest: &Hash,
    sig: &Signature,
) -> Result<RecoveryId, SigningError> {
    for byte in 0u8..=3 {
        let recovery_id = match RecoveryId::from_byte(byte) {
            Some(id) => id,
            None => continue,
        };
        if let Ok(candidate) = VerifyingKey::recover_from_prehash(digest, sig, recovery_id) {
            if candidate == *expected {
                return Ok(recovery_id);
            }
        }
    }
    Err(SigningError::RecoveryIdExhausted)
}

/// Verify a recoverable signature against a public key and digest.
///
/// Structurally malformed input (not 130 hex chars, non-hex characters, v
/// outside 0-3, malformed public key) fails with `EncodingError`. A
/// well-formed but non-matching signature returns `Ok(false)` - mismatch is
/// a normal outcome, not an error.
pub fn verify(
    public_hex: &str,
    signature_hex: &str,
    digest: &Hash,
) -> Result<bool, EncodingError> {
    if signature_hex.len() != SIGNATURE_HEX_LEN {
        return Err(EncodingError::InvalidLength {
            expected: "130",
            actual: signature_hex.len(),
        });
    }
    let bytes = codec::decode_hex(signature_hex)?;
    let recovery_id = parse_recovery_id(bytes[64])?;
    let expected = codec::decode_point(public_hex)?;

    // (r, s) outside [1, n-1] can never satisfy the verification equation,
    // so a parse failure here is a mismatch rather than a caller error.
    let sig = match Signature::from_slice(&bytes[..64]) {
        Ok(sig) => sig,
        Err(_) => return Ok(false),
    };

    match VerifyingKey::recover_from_prehash(digest, &sig, recovery_id) {
        Ok(recovered) => {
            // Normalize both keys to compressed form before comparing.
            let recovered = recovered.to_encoded_point(true);
            Ok(recovered == expected.to_encoded_point(true))
        }
        Err(_) => Ok(false),
    }
}

/// Parse the recovery indicator byte into a conventional recovery id.
///
/// The wire value carries the y-parity bit inverted (v = recid ^ 1); values
/// outside 0-3 are outside the domain.
fn parse_recovery_id(v: u8) -> Result<RecoveryId, EncodingError> {
    if v > 3 {
        return Err(EncodingError::InvalidRecoveryId(v));
    }
    RecoveryId::from_byte(v ^ 1).ok_or(EncodingError::InvalidRecoveryId(v))
}
