//! # tessera-keys
//!
//! Polymorphic account public keys for blockchain-style account systems.
//!
//! One container type, [`PubKey`], holds one of several signature-algorithm
//! implementations ([`Ed25519Key`], [`Secp256k1Key`]) and exposes a uniform
//! capability surface to every caller:
//!
//! - [`address`](PubKey::address) — derive the 20-byte account identifier
//! - [`bytes`](PubKey::bytes) — canonical tag-framed wire encoding
//! - [`verify_bytes`](PubKey::verify_bytes) — total boolean signature check
//! - [`key_string`](PubKey::key_string) — canonical uppercase-hex rendering
//! - equality — algorithm-aware, exact-byte comparison
//!
//! The binary and JSON codecs are self-describing: an
//! [`AlgorithmRegistry`] maps the one-byte wire tag and the JSON `"type"`
//! name back to the concrete algorithm, so decoding always lands on the
//! exact variant that produced the encoding.
//!
//! # Example
//!
//! ```rust
//! use tessera_keys::{AlgorithmRegistry, Ed25519Key, PubKey};
//!
//! let registry = AlgorithmRegistry::standard();
//! let key = PubKey::wrap(Ed25519Key::new([0u8; 32]));
//!
//! // Self-describing JSON form.
//! let text = key.marshal_text(&registry)?;
//! assert!(text.contains(r#""type":"ed25519""#));
//!
//! // Decodes back to the exact same key.
//! assert_eq!(PubKey::unmarshal_text(&registry, &text)?, key);
//! # Ok::<(), tessera_core::CodecError>(())
//! ```
//!
//! # Concurrency
//!
//! Every operation is a pure computation over immutable byte buffers. The
//! registry is read-only after construction, so all of it is safe for
//! unbounded concurrent use without locks.
//!
//! # Out of scope
//!
//! Key generation, key storage, mnemonic/HD derivation, signing, and
//! transaction construction all live in external crates. Signatures appear
//! here only as opaque containers that verification type-matches against.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod address;
pub mod ed25519;
pub mod pubkey;
pub mod registry;
pub mod secp256k1;
pub mod signature;

pub use address::{Address, ADDRESS_LEN};
pub use ed25519::{Ed25519Key, ED25519_KEY_LEN};
pub use pubkey::{KeyVariant, PubKey};
pub use registry::{Algorithm, AlgorithmDescriptor, AlgorithmRegistry, KeyConstructor};
pub use secp256k1::{Secp256k1Key, SECP256K1_KEY_LEN};
pub use signature::{
    Ed25519Signature, Secp256k1Signature, Signature, SignatureVariant, ED25519_SIGNATURE_LEN,
};

// Re-export the error type so callers need only this crate.
pub use tessera_core::CodecError;
