//! The Ed25519 key variant.

use ed25519_dalek::Verifier;
use ripemd::{Digest, Ripemd160};

use tessera_core::CodecError;

use crate::address::Address;
use crate::pubkey::frame_key;
use crate::registry::Algorithm;
use crate::signature::{Signature, SignatureVariant};

/// The length of an ed25519 public key in bytes.
pub const ED25519_KEY_LEN: usize = 32;

/// An ed25519 public key.
///
/// A pure value type holding the 32-byte compressed Edwards point. The
/// bytes are not validated on construction; a key that does not decode to a
/// curve point simply fails every verification (the original system treats
/// keys the same way, so decode round-trips are preserved even for junk
/// bytes).
///
/// # Example
///
/// ```rust
/// use tessera_keys::Ed25519Key;
///
/// let key = Ed25519Key::new([0u8; 32]);
/// assert_eq!(key.address().to_string(), "1702242B3C52EC9DC0782FAA507AC16BECA5D6D0");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ed25519Key {
    bytes: [u8; ED25519_KEY_LEN],
}

impl Ed25519Key {
    /// Create a key from its 32 raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; ED25519_KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Create a key from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidLength`] when the slice is not exactly
    /// 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CodecError> {
        let bytes: [u8; ED25519_KEY_LEN] =
            bytes.try_into().map_err(|_| CodecError::InvalidLength {
                algorithm: Algorithm::Ed25519.name(),
                expected: ED25519_KEY_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self { bytes })
    }

    /// The raw public-key bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ED25519_KEY_LEN] {
        &self.bytes
    }

    /// Derive the 20-byte account address.
    ///
    /// The address is RIPEMD-160 over the tag-framed encoding produced by
    /// [`bytes`](Self::bytes): `tag(0x01) ‖ varint length(0x01 0x20) ‖ raw
    /// key`. Folding
    /// the tag into the hashed buffer ties the address to the algorithm, so
    /// the same raw bytes under another algorithm cannot collide.
    ///
    /// This derivation is frozen; changing it would orphan every
    /// previously issued account identifier.
    #[must_use]
    pub fn address(&self) -> Address {
        let digest: [u8; 20] = Ripemd160::digest(self.bytes()).into();
        Address::new(digest)
    }

    /// The canonical tag-prefixed, length-framed encoding of the raw key.
    ///
    /// This exact buffer is both the wire form and the input hashed by
    /// [`address`](Self::address).
    #[must_use]
    pub fn bytes(&self) -> Vec<u8> {
        frame_key(Algorithm::Ed25519.tag(), &self.bytes)
    }

    /// Canonical uppercase-hex rendering of the raw key bytes.
    ///
    /// Injective over raw bytes, suitable for map keying.
    #[must_use]
    pub fn key_string(&self) -> String {
        hex::encode_upper(self.bytes)
    }

    /// Verify an ed25519 signature over `msg`.
    ///
    /// Total: returns `false` (never an error, never a panic) when the
    /// signature is not the ed25519 variant, when the key bytes do not
    /// decode to a curve point, or when verification fails. The message is
    /// passed to the primitive unhashed; ed25519 hashes internally.
    #[must_use]
    pub fn verify_bytes(&self, msg: &[u8], sig: &Signature) -> bool {
        // Same algorithm must have produced the signature.
        let SignatureVariant::Ed25519(sig) = sig.unwrap() else {
            return false;
        };
        let Ok(key) = ed25519_dalek::VerifyingKey::from_bytes(&self.bytes) else {
            return false;
        };
        let sig = ed25519_dalek::Signature::from_bytes(sig.as_bytes());
        key.verify(msg, &sig).is_ok()
    }

    /// Map this key to the birationally equivalent Curve25519 point, for
    /// use with key-agreement schemes (NaCl `box`-style).
    ///
    /// Returns `None` (not an error) when the key bytes do not decode to an
    /// Edwards point.
    #[must_use]
    pub fn to_curve25519(&self) -> Option<[u8; 32]> {
        let key = ed25519_dalek::VerifyingKey::from_bytes(&self.bytes).ok()?;
        Some(key.to_montgomery().to_bytes())
    }
}

impl From<[u8; ED25519_KEY_LEN]> for Ed25519Key {
    fn from(bytes: [u8; ED25519_KEY_LEN]) -> Self {
        Self::new(bytes)
    }
}

impl std::fmt::Display for Ed25519Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ed25519Key{{{}}}", hex::encode_upper(self.bytes))
    }
}

impl std::fmt::Debug for Ed25519Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}
