//! # Curve Codec (secp256k1)
//!
//! Canonical hex encodings for secp256k1 scalars and points.
//!
//! Canonical form is lowercase hex with no `0x` prefix and a fixed length:
//!
//! | Value | Bytes | Hex chars |
//! |-------|-------|-----------|
//! | Scalar (private key) | 32 | 64 |
//! | Compressed point | 33 | 66 |
//! | Uncompressed point | 65 | 130 |
//!
//! Decoding accepts uppercase hex for interoperability; encoding always
//! emits lowercase.

use crate::errors::EncodingError;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{FieldBytes, NonZeroScalar, PublicKey};

/// Hex length of a canonical scalar / 32-byte digest.
pub const SCALAR_HEX_LEN: usize = 64;
/// Hex length of a compressed SEC1 point (0x02/0x03 prefix).
pub const COMPRESSED_POINT_HEX_LEN: usize = 66;
/// Hex length of an uncompressed SEC1 point (0x04 prefix).
pub const UNCOMPRESSED_POINT_HEX_LEN: usize = 130;

/// Decode a hex string, mapping malformed characters to `EncodingError`.
///
/// Length is validated by the callers, which know the expected encoding.
pub(crate) fn decode_hex(hex_str: &str) -> Result<Vec<u8>, EncodingError> {
    hex::decode(hex_str).map_err(|_| EncodingError::InvalidHex)
}

/// Decode a private-key scalar from 64 hex characters.
///
/// Rejects anything that is not exactly 32 bytes, contains non-hex
/// characters, or decodes to 0 or a value >= the secp256k1 group order n.
/// Longer "combined blob" encodings (e.g. 128 hex chars) are rejected as
/// well: only the canonical 32-byte form is a private key here.
pub fn decode_scalar(hex_str: &str) -> Result<NonZeroScalar, EncodingError> {
    if hex_str.len() != SCALAR_HEX_LEN {
        return Err(EncodingError::InvalidLength {
            expected: "64",
            actual: hex_str.len(),
        });
    }
    let bytes = decode_hex(hex_str)?;
    let repr = FieldBytes::from_slice(&bytes).to_owned();
    Option::<NonZeroScalar>::from(NonZeroScalar::from_repr(repr))
        .ok_or(EncodingError::ScalarOutOfRange)
}

/// Decode a public-key point from compressed (66) or uncompressed (130) hex.
pub fn decode_point(hex_str: &str) -> Result<PublicKey, EncodingError> {
    match hex_str.len() {
        COMPRESSED_POINT_HEX_LEN | UNCOMPRESSED_POINT_HEX_LEN => {}
        actual => {
            return Err(EncodingError::InvalidLength {
                expected: "66 or 130",
                actual,
            })
        }
    }
    let bytes = decode_hex(hex_str)?;
    match (bytes[0], bytes.len()) {
        (0x02 | 0x03, 33) | (0x04, 65) => {}
        (prefix, _) => return Err(EncodingError::InvalidPointPrefix(prefix)),
    }
    PublicKey::from_sec1_bytes(&bytes).map_err(|_| EncodingError::PointNotOnCurve)
}

/// Encode a point as canonical lowercase hex, no `0x` prefix.
///
/// Deterministic: one point, one encoding per form.
pub fn encode_point(point: &PublicKey, compressed: bool) -> String {
    hex::encode(point.to_encoded_point(compressed).as_bytes())
}

/// Non-throwing public-key guard for request validation.
///
/// True iff `hex_str` decodes to a curve point in the expected form.
pub fn is_valid_public_key(hex_str: &str, expect_compressed: bool) -> bool {
    let expected_len = if expect_compressed {
        COMPRESSED_POINT_HEX_LEN
    } else {
        UNCOMPRESSED_POINT_HEX_LEN
    };
    hex_str.len() == expected_len && decode_point(hex_str).is_ok()
}

/// Decode a 32-byte digest (DNA, block hash) from 64 hex characters.
pub fn decode_digest(hex_str: &str) -> Result<[u8; 32], EncodingError> {
    if hex_str.len() != SCALAR_HEX_LEN {
        return Err(EncodingError::InvalidLength {
            expected: "64",
            actual: hex_str.len(),
        });
    }
    let bytes = decode_hex(hex_str)?;
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&bytes);
    Ok(digest)
}
