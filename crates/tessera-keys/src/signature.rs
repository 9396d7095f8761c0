//! Signature containers consumed by public-key verification.
//!
//! Signing lives in an external keystore; this crate only needs to know
//! which concrete algorithm produced a signature before delegating to that
//! algorithm's verification primitive. [`Signature`] mirrors the shape of
//! [`PubKey`](crate::PubKey): a uniform container holding exactly one
//! concrete variant, exposed through [`Signature::unwrap`].

use tessera_core::CodecError;

/// The length of an ed25519 signature in bytes.
pub const ED25519_SIGNATURE_LEN: usize = 64;

/// A raw 64-byte ed25519 signature.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ed25519Signature {
    bytes: [u8; ED25519_SIGNATURE_LEN],
}

impl Ed25519Signature {
    /// Create a signature from its 64 raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; ED25519_SIGNATURE_LEN]) -> Self {
        Self { bytes }
    }

    /// Create a signature from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidLength`] when the slice is not exactly
    /// 64 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CodecError> {
        let bytes: [u8; ED25519_SIGNATURE_LEN] =
            bytes.try_into().map_err(|_| CodecError::InvalidLength {
                algorithm: "ed25519",
                expected: ED25519_SIGNATURE_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self { bytes })
    }

    /// The raw signature bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ED25519_SIGNATURE_LEN] {
        &self.bytes
    }
}

impl std::fmt::Debug for Ed25519Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ed25519Signature({})", hex::encode_upper(self.bytes))
    }
}

/// A DER-encoded secp256k1 ECDSA signature.
///
/// Kept as opaque bytes; parsing happens inside
/// [`Secp256k1Key::verify_bytes`](crate::Secp256k1Key::verify_bytes), where
/// a parse failure resolves to a `false` verification result rather than an
/// error.
#[derive(Clone, PartialEq, Eq)]
pub struct Secp256k1Signature {
    der: Vec<u8>,
}

impl Secp256k1Signature {
    /// Create a signature from DER-encoded bytes.
    ///
    /// The bytes are not validated here; adversarial input must still reach
    /// verification, which is total.
    #[must_use]
    pub fn new(der: Vec<u8>) -> Self {
        Self { der }
    }

    /// The DER-encoded signature bytes.
    #[must_use]
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }
}

impl std::fmt::Debug for Secp256k1Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secp256k1Signature({})", hex::encode_upper(&self.der))
    }
}

/// The concrete signature held by a [`Signature`] container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignatureVariant {
    /// A raw ed25519 signature.
    Ed25519(Ed25519Signature),
    /// A DER-encoded secp256k1 ECDSA signature.
    Secp256k1(Secp256k1Signature),
}

impl From<Ed25519Signature> for SignatureVariant {
    fn from(sig: Ed25519Signature) -> Self {
        Self::Ed25519(sig)
    }
}

impl From<Secp256k1Signature> for SignatureVariant {
    fn from(sig: Secp256k1Signature) -> Self {
        Self::Secp256k1(sig)
    }
}

/// Uniform signature container.
///
/// Holds exactly one concrete variant; the container cannot nest because
/// [`Signature::wrap`] only accepts variant types.
///
/// # Example
///
/// ```rust
/// use tessera_keys::{Ed25519Signature, Signature, SignatureVariant};
///
/// let sig = Signature::wrap(Ed25519Signature::new([0u8; 64]));
/// assert!(matches!(sig.unwrap(), SignatureVariant::Ed25519(_)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    inner: SignatureVariant,
}

impl Signature {
    /// Wrap a concrete signature variant.
    pub fn wrap(sig: impl Into<SignatureVariant>) -> Self {
        Self { inner: sig.into() }
    }

    /// The concrete variant held by this container.
    #[must_use]
    pub const fn unwrap(&self) -> &SignatureVariant {
        &self.inner
    }
}

impl From<SignatureVariant> for Signature {
    fn from(inner: SignatureVariant) -> Self {
        Self { inner }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_ed25519_from_slice_rejects_wrong_length() {
        let err = Ed25519Signature::from_slice(&[0u8; 63]).unwrap_err();
        assert!(matches!(
            err,
            CodecError::InvalidLength {
                algorithm: "ed25519",
                expected: 64,
                actual: 63,
            }
        ));
    }

    #[test]
    fn test_ed25519_from_slice_accepts_64_bytes() {
        let sig = Ed25519Signature::from_slice(&[7u8; 64]).unwrap();
        assert_eq!(sig.as_bytes(), &[7u8; 64]);
    }

    #[test]
    fn test_wrap_preserves_variant() {
        let inner = Secp256k1Signature::new(vec![0x30, 0x00]);
        let sig = Signature::wrap(inner.clone());
        assert_eq!(sig.unwrap(), &SignatureVariant::Secp256k1(inner));
    }

    #[test]
    fn test_debug_is_hex() {
        let sig = Ed25519Signature::new([0xffu8; 64]);
        let rendered = format!("{sig:?}");
        assert!(rendered.starts_with("Ed25519Signature(FFFF"));
    }
}
