//! Algorithm registry for codec dispatch.
//!
//! This module provides [`AlgorithmRegistry`], the single source of truth
//! mapping a one-byte wire tag and a structured-text name to a concrete key
//! variant. Both codec paths on [`PubKey`](crate::PubKey) resolve algorithms
//! through it.
//!
//! # Design
//!
//! The registry is:
//! - **Explicit**: built once at startup and passed by reference to every
//!   codec call site; there is no hidden global table.
//! - **Immutable after construction**: [`AlgorithmRegistry::standard`]
//!   registers everything up front, so no locking is needed afterwards.
//! - **Cheap to clone**: descriptors live behind an [`Arc`], so the registry
//!   can be shared across threads and async tasks freely.
//!
//! # Example
//!
//! ```rust
//! use tessera_keys::AlgorithmRegistry;
//!
//! let registry = AlgorithmRegistry::standard();
//! assert!(registry.by_name("ed25519").is_some());
//! assert!(registry.by_tag(0x02).is_some());
//! assert!(registry.by_tag(0x7f).is_none());
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use tessera_core::CodecError;

use crate::ed25519::{Ed25519Key, ED25519_KEY_LEN};
use crate::pubkey::KeyVariant;
use crate::secp256k1::{Secp256k1Key, SECP256K1_KEY_LEN};

/// The signature algorithms this crate understands.
///
/// Tags and names are frozen wire constants: previously issued addresses
/// and encoded keys depend on them, so they must never change. Adding an
/// algorithm means adding a variant here, a [`KeyVariant`] arm, and a
/// registry descriptor; exhaustive matches surface every site that needs
/// updating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Ed25519 (EdDSA over edwards25519), 32-byte keys.
    Ed25519,
    /// secp256k1 ECDSA, 33-byte compressed keys.
    Secp256k1,
}

impl Algorithm {
    /// The one-byte wire tag.
    #[must_use]
    pub const fn tag(self) -> u8 {
        match self {
            Self::Ed25519 => 0x01,
            Self::Secp256k1 => 0x02,
        }
    }

    /// The structured-text name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ed25519 => "ed25519",
            Self::Secp256k1 => "secp256k1",
        }
    }

    /// The fixed raw-key length in bytes.
    #[must_use]
    pub const fn key_len(self) -> usize {
        match self {
            Self::Ed25519 => ED25519_KEY_LEN,
            Self::Secp256k1 => SECP256K1_KEY_LEN,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Constructor signature for building a key variant from raw payload bytes.
pub type KeyConstructor = fn(&[u8]) -> Result<KeyVariant, CodecError>;

/// Everything the codecs need to know about one algorithm.
#[derive(Clone, Copy)]
pub struct AlgorithmDescriptor {
    /// Which algorithm this descriptor describes.
    pub algorithm: Algorithm,
    /// The one-byte wire tag (unique per registry).
    pub tag: u8,
    /// The structured-text name (unique per registry).
    pub name: &'static str,
    /// The fixed raw-key payload length in bytes.
    pub key_len: usize,
    /// Builds the concrete variant from a raw payload of `key_len` bytes.
    pub construct: KeyConstructor,
}

impl AlgorithmDescriptor {
    /// The canonical descriptor for an algorithm.
    #[must_use]
    pub fn for_algorithm(algorithm: Algorithm) -> Self {
        let construct: KeyConstructor = match algorithm {
            Algorithm::Ed25519 => |raw| Ed25519Key::from_slice(raw).map(KeyVariant::Ed25519),
            Algorithm::Secp256k1 => |raw| Secp256k1Key::from_slice(raw).map(KeyVariant::Secp256k1),
        };
        Self {
            algorithm,
            tag: algorithm.tag(),
            name: algorithm.name(),
            key_len: algorithm.key_len(),
            construct,
        }
    }
}

impl std::fmt::Debug for AlgorithmDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlgorithmDescriptor")
            .field("tag", &self.tag)
            .field("name", &self.name)
            .field("key_len", &self.key_len)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
struct Tables {
    by_tag: HashMap<u8, AlgorithmDescriptor>,
    by_name: HashMap<&'static str, AlgorithmDescriptor>,
}

/// Write-once-at-startup table mapping wire tags and names to algorithms.
///
/// See the [module documentation](self) for the design constraints.
#[derive(Clone, Debug)]
pub struct AlgorithmRegistry {
    tables: Arc<Tables>,
}

impl AlgorithmRegistry {
    /// Create a registry with every production algorithm registered.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tessera_keys::AlgorithmRegistry;
    ///
    /// let registry = AlgorithmRegistry::standard();
    /// assert_eq!(registry.len(), 2);
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        Self::with_descriptors([
            AlgorithmDescriptor::for_algorithm(Algorithm::Ed25519),
            AlgorithmDescriptor::for_algorithm(Algorithm::Secp256k1),
        ])
    }

    /// Create a registry from an explicit descriptor set.
    ///
    /// Useful in tests that need a registry missing one of the production
    /// algorithms.
    ///
    /// # Panics
    ///
    /// Panics when two descriptors share a tag or a name. Duplicate
    /// registration is a programmer error caught at startup, before any
    /// concurrent use; it is never reachable from decode paths.
    #[must_use]
    pub fn with_descriptors(descriptors: impl IntoIterator<Item = AlgorithmDescriptor>) -> Self {
        let mut tables = Tables::default();
        for desc in descriptors {
            assert!(
                !tables.by_tag.contains_key(&desc.tag),
                "algorithm tag 0x{:02x} registered twice",
                desc.tag
            );
            assert!(
                !tables.by_name.contains_key(desc.name),
                "algorithm name {:?} registered twice",
                desc.name
            );
            tables.by_tag.insert(desc.tag, desc);
            tables.by_name.insert(desc.name, desc);
        }
        Self {
            tables: Arc::new(tables),
        }
    }

    /// Look up a descriptor by wire tag.
    #[must_use]
    pub fn by_tag(&self, tag: u8) -> Option<&AlgorithmDescriptor> {
        self.tables.by_tag.get(&tag)
    }

    /// Look up a descriptor by structured-text name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&AlgorithmDescriptor> {
        self.tables.by_name.get(name)
    }

    /// The descriptor for a concrete key variant.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownAlgorithm`] when the variant's algorithm
    /// is not registered.
    pub fn descriptor_for(&self, key: &KeyVariant) -> Result<&AlgorithmDescriptor, CodecError> {
        let tag = key.algorithm().tag();
        self.by_tag(tag)
            .ok_or(CodecError::UnknownAlgorithm { tag })
    }

    /// Resolve a key variant to its wire tag and canonical raw payload.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownAlgorithm`] when the variant's algorithm
    /// is not registered.
    pub fn encode(&self, key: &KeyVariant) -> Result<(u8, Vec<u8>), CodecError> {
        let desc = self.descriptor_for(key)?;
        Ok((desc.tag, key.raw_bytes().to_vec()))
    }

    /// Build a key variant from a wire tag and raw payload.
    ///
    /// The payload length is checked against the descriptor's `key_len`
    /// before the constructor runs; the registry, not the constructor, is
    /// the source of truth for each algorithm's fixed size.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownAlgorithm`] for an unregistered tag and
    /// [`CodecError::InvalidLength`] when the payload does not match the
    /// algorithm's fixed key size.
    pub fn decode(&self, tag: u8, payload: &[u8]) -> Result<KeyVariant, CodecError> {
        let desc = self
            .by_tag(tag)
            .ok_or(CodecError::UnknownAlgorithm { tag })?;
        if payload.len() != desc.key_len {
            return Err(CodecError::InvalidLength {
                algorithm: desc.name,
                expected: desc.key_len,
                actual: payload.len(),
            });
        }
        (desc.construct)(payload)
    }

    /// Number of registered algorithms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.by_tag.len()
    }

    /// Whether the registry has no algorithms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.by_tag.is_empty()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
