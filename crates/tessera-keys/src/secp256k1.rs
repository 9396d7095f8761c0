//! The secp256k1 key variant.

use k256::ecdsa::signature::Verifier;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use tessera_core::CodecError;

use crate::address::Address;
use crate::pubkey::frame_key;
use crate::registry::Algorithm;
use crate::signature::{Signature, SignatureVariant};

/// The length of a compressed secp256k1 public key in bytes.
pub const SECP256K1_KEY_LEN: usize = 33;

/// A secp256k1 public key.
///
/// Holds the 33-byte compressed SEC1 point: a one-byte parity prefix (`0x02`
/// or `0x03`, depending on the y-coordinate) followed by the 32-byte
/// x-coordinate. Like [`Ed25519Key`](crate::Ed25519Key), the bytes are not
/// validated on construction; a byte string that is not a curve point fails
/// every verification instead.
///
/// # Example
///
/// ```rust
/// use tessera_keys::Secp256k1Key;
///
/// let key = Secp256k1Key::new([0x02; 33]);
/// assert_eq!(key.key_string().len(), 66);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Secp256k1Key {
    bytes: [u8; SECP256K1_KEY_LEN],
}

impl Secp256k1Key {
    /// Create a key from its 33 raw compressed-point bytes.
    #[must_use]
    pub const fn new(bytes: [u8; SECP256K1_KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Create a key from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidLength`] when the slice is not exactly
    /// 33 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CodecError> {
        let bytes: [u8; SECP256K1_KEY_LEN] =
            bytes.try_into().map_err(|_| CodecError::InvalidLength {
                algorithm: Algorithm::Secp256k1.name(),
                expected: SECP256K1_KEY_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self { bytes })
    }

    /// The raw compressed-point bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SECP256K1_KEY_LEN] {
        &self.bytes
    }

    /// Derive the 20-byte account address.
    ///
    /// Bitcoin-style: RIPEMD-160 over SHA-256 of the raw compressed bytes.
    /// No type tag and no length framing, unlike
    /// [`Ed25519Key::address`](crate::Ed25519Key::address). The asymmetry
    /// between the two rules is historical and frozen; both derivations must
    /// be reproduced exactly or previously issued addresses break.
    #[must_use]
    pub fn address(&self) -> Address {
        let sha = Sha256::digest(self.bytes);
        let digest: [u8; 20] = Ripemd160::digest(sha).into();
        Address::new(digest)
    }

    /// The canonical tag-prefixed, length-framed encoding of the raw key.
    ///
    /// Wire transmission only; [`address`](Self::address) bypasses this
    /// framing and hashes the raw bytes directly.
    #[must_use]
    pub fn bytes(&self) -> Vec<u8> {
        frame_key(Algorithm::Secp256k1.tag(), &self.bytes)
    }

    /// Canonical uppercase-hex rendering of the raw key bytes.
    #[must_use]
    pub fn key_string(&self) -> String {
        hex::encode_upper(self.bytes)
    }

    /// Verify a DER-encoded ECDSA signature over `msg`.
    ///
    /// Total: returns `false` (never an error, never a panic) when the
    /// signature is not the secp256k1 variant, when the key bytes are not a
    /// valid SEC1 point, when the DER bytes do not parse, or when
    /// verification fails. Verification runs over the SHA-256 digest of
    /// `msg` (the secp256k1 convention: the caller's message is pre-hashed,
    /// unlike ed25519 which hashes internally). High-S signatures are
    /// normalized before checking, matching the historical verifier.
    #[must_use]
    pub fn verify_bytes(&self, msg: &[u8], sig: &Signature) -> bool {
        // Same algorithm must have produced the signature.
        let SignatureVariant::Secp256k1(sig) = sig.unwrap() else {
            return false;
        };
        let Ok(key) = k256::ecdsa::VerifyingKey::from_sec1_bytes(&self.bytes) else {
            return false;
        };
        let Ok(parsed) = k256::ecdsa::Signature::from_der(sig.as_der()) else {
            return false;
        };
        let parsed = parsed.normalize_s().unwrap_or(parsed);
        // Verifier for this curve hashes msg with SHA-256 internally.
        key.verify(msg, &parsed).is_ok()
    }
}

impl From<[u8; SECP256K1_KEY_LEN]> for Secp256k1Key {
    fn from(bytes: [u8; SECP256K1_KEY_LEN]) -> Self {
        Self::new(bytes)
    }
}

impl std::fmt::Display for Secp256k1Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secp256k1Key{{{}}}", hex::encode_upper(self.bytes))
    }
}

impl std::fmt::Debug for Secp256k1Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}
