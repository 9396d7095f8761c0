//! The uniform public-key container and its codecs.
//!
//! [`PubKey`] is the one type the rest of the system passes around. It holds
//! exactly one concrete [`KeyVariant`] and forwards every capability call to
//! it. Because [`PubKey::wrap`] only accepts variant types, a wrapper can
//! never hold another wrapper; the no-nesting invariant is enforced by the
//! constructor signature instead of a defensive unwrap loop.
//!
//! # Wire layout
//!
//! ```text
//! byte[0]   algorithm tag (see `Algorithm::tag`)
//! byte[1]   length-prefix width in bytes (0x01 for every supported key)
//! byte[2..] big-endian payload length (0x20 / 0x21), then raw key bytes
//! ```
//!
//! The two-part length prefix is the varint form the original wire codec
//! framed byte strings with; it is frozen because the ed25519 address
//! hashes this exact buffer. Decoding rejects non-minimal prefixes so every
//! key has exactly one encoding.
//!
//! # Structured-text layout
//!
//! ```json
//! { "type": "ed25519", "value": "<uppercase hex of the raw key bytes>" }
//! ```
//!
//! Both codecs resolve algorithms through an
//! [`AlgorithmRegistry`](crate::AlgorithmRegistry) passed by the caller.

use serde::{Deserialize, Serialize};

use tessera_core::CodecError;

use crate::address::Address;
use crate::ed25519::Ed25519Key;
use crate::registry::{Algorithm, AlgorithmRegistry};
use crate::secp256k1::Secp256k1Key;
use crate::signature::Signature;

/// Tag-prefixed, length-framed encoding of raw key bytes.
///
/// This is the canonical wire form shared by `KeyVariant::bytes` and
/// `PubKey::marshal_binary`, and (for ed25519 only) the buffer its address
/// derivation hashes.
pub(crate) fn frame_key(tag: u8, raw: &[u8]) -> Vec<u8> {
    // Every supported key is 1..=255 bytes, so the minimal varint is a
    // one-byte width followed by a one-byte length.
    debug_assert!((1..=usize::from(u8::MAX)).contains(&raw.len()));
    let mut out = Vec::with_capacity(3 + raw.len());
    out.push(tag);
    out.push(0x01);
    #[allow(clippy::cast_possible_truncation)]
    out.push(raw.len() as u8);
    out.extend_from_slice(raw);
    out
}

/// The concrete key held by a [`PubKey`].
///
/// A closed union: adding an algorithm is a source change here, a new
/// registry descriptor, and nothing else. Every capability delegates through
/// an exhaustive match, so the compiler flags any arm a new algorithm
/// misses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyVariant {
    /// An ed25519 public key.
    Ed25519(Ed25519Key),
    /// A secp256k1 public key.
    Secp256k1(Secp256k1Key),
}

impl KeyVariant {
    /// Which algorithm this key belongs to.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        match self {
            Self::Ed25519(_) => Algorithm::Ed25519,
            Self::Secp256k1(_) => Algorithm::Secp256k1,
        }
    }

    /// The raw key bytes (32 for ed25519, 33 for secp256k1).
    #[must_use]
    pub fn raw_bytes(&self) -> &[u8] {
        match self {
            Self::Ed25519(key) => key.as_bytes(),
            Self::Secp256k1(key) => key.as_bytes(),
        }
    }

    /// Derive the 20-byte account address under this key's algorithm.
    #[must_use]
    pub fn address(&self) -> Address {
        match self {
            Self::Ed25519(key) => key.address(),
            Self::Secp256k1(key) => key.address(),
        }
    }

    /// The canonical tag-prefixed, length-framed wire encoding.
    #[must_use]
    pub fn bytes(&self) -> Vec<u8> {
        match self {
            Self::Ed25519(key) => key.bytes(),
            Self::Secp256k1(key) => key.bytes(),
        }
    }

    /// Canonical uppercase-hex rendering of the raw key bytes.
    #[must_use]
    pub fn key_string(&self) -> String {
        match self {
            Self::Ed25519(key) => key.key_string(),
            Self::Secp256k1(key) => key.key_string(),
        }
    }

    /// Verify a signature over `msg` under this key's algorithm.
    ///
    /// Total; see the variant implementations for the per-algorithm rules.
    #[must_use]
    pub fn verify_bytes(&self, msg: &[u8], sig: &Signature) -> bool {
        match self {
            Self::Ed25519(key) => key.verify_bytes(msg, sig),
            Self::Secp256k1(key) => key.verify_bytes(msg, sig),
        }
    }
}

impl From<Ed25519Key> for KeyVariant {
    fn from(key: Ed25519Key) -> Self {
        Self::Ed25519(key)
    }
}

impl From<Secp256k1Key> for KeyVariant {
    fn from(key: Secp256k1Key) -> Self {
        Self::Secp256k1(key)
    }
}

impl std::fmt::Display for KeyVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ed25519(key) => std::fmt::Display::fmt(key, f),
            Self::Secp256k1(key) => std::fmt::Display::fmt(key, f),
        }
    }
}

/// JSON shape of the structured-text codec.
#[derive(Serialize, Deserialize)]
struct TextRepr {
    #[serde(rename = "type")]
    algorithm: String,
    value: String,
}

/// Uniform public-key container.
///
/// Immutable value type. The zero value ([`PubKey::default`]) holds no
/// variant and reports [`is_empty`](Self::is_empty); every decode either
/// produces a populated wrapper or fails, never an empty one.
///
/// # Example
///
/// ```rust
/// use tessera_keys::{AlgorithmRegistry, Ed25519Key, PubKey};
///
/// let registry = AlgorithmRegistry::standard();
/// let key = PubKey::wrap(Ed25519Key::new([0u8; 32]));
///
/// let wire = key.marshal_binary(&registry)?;
/// assert_eq!(PubKey::unmarshal_binary(&registry, &wire)?, key);
/// # Ok::<(), tessera_core::CodecError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PubKey {
    inner: Option<KeyVariant>,
}

impl PubKey {
    /// Wrap a concrete key variant.
    ///
    /// Accepts only variant types ([`Ed25519Key`], [`Secp256k1Key`], or
    /// [`KeyVariant`] itself), so wrapping is idempotent by construction: a
    /// `PubKey` cannot be fed back in, and multi-level nesting cannot be
    /// expressed.
    pub fn wrap(key: impl Into<KeyVariant>) -> Self {
        Self {
            inner: Some(key.into()),
        }
    }

    /// The concrete variant, or `None` for the empty wrapper.
    #[must_use]
    pub const fn unwrap(&self) -> Option<&KeyVariant> {
        self.inner.as_ref()
    }

    /// `true` only for the zero-value wrapper holding no variant.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    /// Derive the account address, or `None` for the empty wrapper.
    #[must_use]
    pub fn address(&self) -> Option<Address> {
        self.inner.as_ref().map(KeyVariant::address)
    }

    /// The canonical wire encoding, or `None` for the empty wrapper.
    #[must_use]
    pub fn bytes(&self) -> Option<Vec<u8>> {
        self.inner.as_ref().map(KeyVariant::bytes)
    }

    /// Uppercase-hex key string, or `None` for the empty wrapper.
    #[must_use]
    pub fn key_string(&self) -> Option<String> {
        self.inner.as_ref().map(KeyVariant::key_string)
    }

    /// Verify a signature over `msg`.
    ///
    /// Total; the empty wrapper verifies nothing and returns `false`.
    #[must_use]
    pub fn verify_bytes(&self, msg: &[u8], sig: &Signature) -> bool {
        self.inner
            .as_ref()
            .is_some_and(|key| key.verify_bytes(msg, sig))
    }

    /// Encode to the tag-prefixed, length-framed binary form.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::EmptyKey`] for the empty wrapper and
    /// [`CodecError::UnknownAlgorithm`] when the held variant's algorithm is
    /// not in `registry`.
    pub fn marshal_binary(&self, registry: &AlgorithmRegistry) -> Result<Vec<u8>, CodecError> {
        let key = self.inner.as_ref().ok_or(CodecError::EmptyKey)?;
        let (tag, payload) = registry.encode(key)?;
        Ok(frame_key(tag, &payload))
    }

    /// Decode from the tag-prefixed, length-framed binary form.
    ///
    /// # Errors
    ///
    /// - [`CodecError::Truncated`] when the input ends inside the frame.
    /// - [`CodecError::MalformedLengthPrefix`] when the length prefix is
    ///   not a minimal varint.
    /// - [`CodecError::TrailingBytes`] when bytes follow the payload.
    /// - [`CodecError::UnknownAlgorithm`] for an unregistered tag.
    /// - [`CodecError::InvalidLength`] when the payload length does not
    ///   match the algorithm's fixed key size.
    pub fn unmarshal_binary(
        registry: &AlgorithmRegistry,
        data: &[u8],
    ) -> Result<Self, CodecError> {
        let Some((&tag, rest)) = data.split_first() else {
            return Err(CodecError::Truncated {
                context: "algorithm tag",
            });
        };
        let Some((&width, rest)) = rest.split_first() else {
            return Err(CodecError::Truncated {
                context: "length prefix",
            });
        };
        let width = usize::from(width);
        if width > 8 {
            return Err(CodecError::MalformedLengthPrefix {
                reason: "wider than 8 bytes",
            });
        }
        if rest.len() < width {
            return Err(CodecError::Truncated {
                context: "length prefix",
            });
        }
        let (len_bytes, payload) = rest.split_at(width);
        if len_bytes.first() == Some(&0) {
            return Err(CodecError::MalformedLengthPrefix {
                reason: "leading zero byte",
            });
        }
        let mut len: u64 = 0;
        for &b in len_bytes {
            len = (len << 8) | u64::from(b);
        }
        let len = usize::try_from(len).map_err(|_| CodecError::Truncated {
            context: "key payload",
        })?;
        if payload.len() < len {
            return Err(CodecError::Truncated {
                context: "key payload",
            });
        }
        if payload.len() > len {
            return Err(CodecError::TrailingBytes {
                count: payload.len() - len,
            });
        }
        Ok(Self {
            inner: Some(registry.decode(tag, payload)?),
        })
    }

    /// Encode to the structured-text (JSON) form.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::EmptyKey`] for the empty wrapper and
    /// [`CodecError::UnknownAlgorithm`] when the held variant's algorithm is
    /// not in `registry`.
    pub fn marshal_text(&self, registry: &AlgorithmRegistry) -> Result<String, CodecError> {
        let key = self.inner.as_ref().ok_or(CodecError::EmptyKey)?;
        let desc = registry.descriptor_for(key)?;
        let repr = TextRepr {
            algorithm: desc.name.to_string(),
            value: hex::encode_upper(key.raw_bytes()),
        };
        Ok(serde_json::to_string(&repr)?)
    }

    /// Decode from the structured-text (JSON) form.
    ///
    /// # Errors
    ///
    /// - [`CodecError::Json`] when the input is not the expected JSON shape.
    /// - [`CodecError::UnknownAlgorithmName`] for an unregistered `"type"`,
    ///   distinguishable from a malformed payload.
    /// - [`CodecError::Hex`] when the `"value"` field is not valid hex.
    /// - [`CodecError::InvalidLength`] when the decoded payload does not
    ///   match the algorithm's fixed key size.
    pub fn unmarshal_text(registry: &AlgorithmRegistry, text: &str) -> Result<Self, CodecError> {
        let repr: TextRepr = serde_json::from_str(text)?;
        let desc =
            registry
                .by_name(&repr.algorithm)
                .ok_or(CodecError::UnknownAlgorithmName {
                    name: repr.algorithm,
                })?;
        let payload = hex::decode(&repr.value)?;
        Ok(Self {
            inner: Some(registry.decode(desc.tag, &payload)?),
        })
    }
}

impl From<KeyVariant> for PubKey {
    fn from(key: KeyVariant) -> Self {
        Self::wrap(key)
    }
}

impl std::fmt::Display for PubKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            Some(key) => std::fmt::Display::fmt(key, f),
            None => f.write_str("PubKey{}"),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn registry() -> AlgorithmRegistry {
        AlgorithmRegistry::standard()
    }

    fn ed_key() -> PubKey {
        PubKey::wrap(Ed25519Key::new([0x11; 32]))
    }

    fn secp_key() -> PubKey {
        PubKey::wrap(Secp256k1Key::new([0x02; 33]))
    }

    #[test]
    fn test_wrap_is_idempotent() {
        // Re-wrapping the inner variant of a wrapper yields an equal
        // wrapper; nesting is not expressible.
        let once = ed_key();
        let again = PubKey::wrap(*once.unwrap().unwrap());
        assert_eq!(once, again);
    }

    #[test]
    fn test_default_is_empty() {
        let empty = PubKey::default();
        assert!(empty.is_empty());
        assert!(empty.unwrap().is_none());
        assert!(empty.address().is_none());
        assert!(empty.bytes().is_none());
        assert!(empty.key_string().is_none());
    }

    #[test]
    fn test_empty_wrapper_never_verifies() {
        let empty = PubKey::default();
        let sig = Signature::wrap(crate::Ed25519Signature::new([0u8; 64]));
        assert!(!empty.verify_bytes(b"msg", &sig));
    }

    #[test]
    fn test_empty_wrapper_does_not_encode() {
        let empty = PubKey::default();
        assert!(matches!(
            empty.marshal_binary(&registry()),
            Err(CodecError::EmptyKey)
        ));
        assert!(matches!(
            empty.marshal_text(&registry()),
            Err(CodecError::EmptyKey)
        ));
    }

    #[test]
    fn test_binary_round_trip_both_algorithms() {
        let registry = registry();
        for key in [ed_key(), secp_key()] {
            let wire = key.marshal_binary(&registry).unwrap();
            let decoded = PubKey::unmarshal_binary(&registry, &wire).unwrap();
            assert_eq!(decoded, key);
            // Wrapper codec and variant encoding agree byte for byte.
            assert_eq!(wire, key.bytes().unwrap());
        }
    }

    #[test]
    fn test_text_round_trip_both_algorithms() {
        let registry = registry();
        for key in [ed_key(), secp_key()] {
            let text = key.marshal_text(&registry).unwrap();
            let decoded = PubKey::unmarshal_text(&registry, &text).unwrap();
            assert_eq!(decoded, key);
        }
    }

    #[test]
    fn test_text_form_shape() {
        let text = ed_key().marshal_text(&registry()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["type"], "ed25519");
        assert_eq!(value["value"], "11".repeat(32).to_uppercase());
    }

    #[test]
    fn test_text_decode_accepts_lowercase_hex() {
        let registry = registry();
        let text = format!(r#"{{"type":"ed25519","value":"{}"}}"#, "ab".repeat(32));
        let decoded = PubKey::unmarshal_text(&registry, &text).unwrap();
        assert_eq!(decoded, PubKey::wrap(Ed25519Key::new([0xab; 32])));
    }

    #[test]
    fn test_binary_decode_truncated_inputs() {
        let registry = registry();
        let full = ed_key().marshal_binary(&registry).unwrap();

        assert!(matches!(
            PubKey::unmarshal_binary(&registry, &[]),
            Err(CodecError::Truncated {
                context: "algorithm tag"
            })
        ));
        // Missing width byte, then missing length byte.
        assert!(matches!(
            PubKey::unmarshal_binary(&registry, &full[..1]),
            Err(CodecError::Truncated {
                context: "length prefix"
            })
        ));
        assert!(matches!(
            PubKey::unmarshal_binary(&registry, &full[..2]),
            Err(CodecError::Truncated {
                context: "length prefix"
            })
        ));
        assert!(matches!(
            PubKey::unmarshal_binary(&registry, &full[..full.len() - 1]),
            Err(CodecError::Truncated {
                context: "key payload"
            })
        ));
    }

    #[test]
    fn test_binary_decode_rejects_non_minimal_length_prefix() {
        // Length 32 padded to two bytes decodes to the same payload but
        // would not re-encode to the same frame; only the minimal form is
        // accepted.
        let registry = registry();
        let mut wire = vec![0x01, 0x02, 0x00, 0x20];
        wire.extend_from_slice(&[0x11; 32]);
        assert!(matches!(
            PubKey::unmarshal_binary(&registry, &wire),
            Err(CodecError::MalformedLengthPrefix {
                reason: "leading zero byte"
            })
        ));
    }

    #[test]
    fn test_binary_decode_rejects_oversized_length_prefix() {
        let registry = registry();
        let mut wire = vec![0x01, 0x09];
        wire.extend_from_slice(&[0x01; 9]);
        wire.extend_from_slice(&[0x11; 32]);
        assert!(matches!(
            PubKey::unmarshal_binary(&registry, &wire),
            Err(CodecError::MalformedLengthPrefix {
                reason: "wider than 8 bytes"
            })
        ));
    }

    #[test]
    fn test_binary_decode_trailing_bytes() {
        let registry = registry();
        let mut wire = ed_key().marshal_binary(&registry).unwrap();
        wire.push(0x00);
        assert!(matches!(
            PubKey::unmarshal_binary(&registry, &wire),
            Err(CodecError::TrailingBytes { count: 1 })
        ));
    }

    #[test]
    fn test_binary_decode_unknown_tag() {
        let registry = registry();
        let mut wire = ed_key().marshal_binary(&registry).unwrap();
        wire[0] = 0x7f;
        assert!(matches!(
            PubKey::unmarshal_binary(&registry, &wire),
            Err(CodecError::UnknownAlgorithm { tag: 0x7f })
        ));
    }

    #[test]
    fn test_binary_decode_length_mismatch_with_algorithm() {
        // Frame consistent (len byte matches payload) but the payload is
        // the wrong size for the tagged algorithm.
        let registry = registry();
        let mut wire = vec![0x01, 0x01, 0x21];
        wire.extend_from_slice(&[0u8; 33]);
        assert!(matches!(
            PubKey::unmarshal_binary(&registry, &wire),
            Err(CodecError::InvalidLength {
                algorithm: "ed25519",
                expected: 32,
                actual: 33,
            })
        ));
    }

    #[test]
    fn test_text_decode_unknown_name_is_distinguishable() {
        let registry = registry();
        let text = format!(r#"{{"type":"sr25519","value":"{}"}}"#, "00".repeat(32));
        let err = PubKey::unmarshal_text(&registry, &text).unwrap_err();
        assert!(err.is_unknown_algorithm());
        assert!(matches!(err, CodecError::UnknownAlgorithmName { name } if name == "sr25519"));
    }

    #[test]
    fn test_text_decode_malformed_json() {
        let err = PubKey::unmarshal_text(&registry(), "not json").unwrap_err();
        assert!(matches!(err, CodecError::Json(_)));
    }

    #[test]
    fn test_text_decode_malformed_hex() {
        let text = r#"{"type":"ed25519","value":"zzzz"}"#;
        let err = PubKey::unmarshal_text(&registry(), text).unwrap_err();
        assert!(matches!(err, CodecError::Hex(_)));
    }

    #[test]
    fn test_equality_is_algorithm_aware() {
        // Same leading raw bytes under different algorithms never compare
        // equal, and their addresses differ.
        let ed = PubKey::wrap(Ed25519Key::new([0u8; 32]));
        let secp = PubKey::wrap(Secp256k1Key::new([0u8; 33]));
        assert_ne!(ed, secp);
        assert_ne!(ed.address(), secp.address());
    }

    #[test]
    fn test_address_determinism() {
        let a = ed_key().address().unwrap();
        let b = ed_key().address().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_display_forwards_to_variant() {
        assert!(ed_key().to_string().starts_with("Ed25519Key{1111"));
        assert!(secp_key().to_string().starts_with("Secp256k1Key{0202"));
        assert_eq!(PubKey::default().to_string(), "PubKey{}");
    }
}
