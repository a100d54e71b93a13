//! # Keccak-256 Hashing
//!
//! Digest primitive for DNA derivation and signature inputs.
//!
//! The ledger uses the original Keccak-256 padding rule, not the finalized
//! NIST SHA-3 padding. The two differ only in the domain-separation byte and
//! produce entirely different digests, so this module must never be swapped
//! for `Sha3_256`.

use sha3::{Digest, Keccak256};

/// Keccak-256 hash output (256-bit).
pub type Hash = [u8; 32];

/// Stateful Keccak-256 hasher.
pub struct Keccak256Hasher {
    inner: Keccak256,
}

impl Keccak256Hasher {
    /// Create new hasher.
    pub fn new() -> Self {
        Self {
            inner: Keccak256::new(),
        }
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Finalize and return hash.
    pub fn finalize(self) -> Hash {
        self.inner.finalize().into()
    }

    /// Reset hasher for reuse.
    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

impl Default for Keccak256Hasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash data with Keccak-256 (one-shot).
///
/// Total and deterministic for any input length, including empty.
pub fn keccak256(data: &[u8]) -> Hash {
    Keccak256::digest(data).into()
}

/// Hash data and return the digest as lowercase hex.
pub fn keccak256_hex(data: &[u8]) -> String {
    hex::encode(keccak256(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_vector() {
        // Canonical Keccak-256 digest of the empty string. The SHA-3 padded
        // variant would give a7ffc6f8... instead.
        assert_eq!(
            keccak256_hex(b""),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_deterministic() {
        let h1 = keccak256(b"test");
        let h2 = keccak256(b"test");
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_different_inputs() {
        let h1 = keccak256(b"input1");
        let h2 = keccak256(b"input2");
        assert_ne!(h1, h2);
    }

    #[test]
    fn test_streaming_matches_oneshot() {
        let oneshot = keccak256(b"hello world");

        let mut hasher = Keccak256Hasher::new();
        hasher.update(b"stale input");
        hasher.reset();
        hasher.update(b"hello ");
        hasher.update(b"world");
        assert_eq!(hasher.finalize(), oneshot);
    }

    #[test]
    fn test_output_is_lowercase_hex() {
        let hex = keccak256_hex(b"DTCP");
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
