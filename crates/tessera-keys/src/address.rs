//! Account addresses derived from public keys.

use std::fmt;

/// The length of an account address in bytes.
pub const ADDRESS_LEN: usize = 20;

/// A 20-byte account identifier derived from a public key.
///
/// Addresses are a pure function of `(algorithm, raw key bytes)` and are
/// never persisted by this crate; they are recomputed on demand. Each
/// algorithm owns its derivation rule, see
/// [`Ed25519Key::address`](crate::Ed25519Key::address) and
/// [`Secp256k1Key::address`](crate::Secp256k1Key::address).
///
/// # Example
///
/// ```rust
/// use tessera_keys::{Address, Ed25519Key};
///
/// let addr: Address = Ed25519Key::new([0u8; 32]).address();
/// assert_eq!(addr.as_bytes().len(), 20);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    bytes: [u8; ADDRESS_LEN],
}

impl Address {
    /// Create an address from its 20 raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self { bytes }
    }

    /// The raw address bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.bytes
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self::new(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

// Rendered as uppercase hex, the historical form for account identifiers.
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(self.bytes))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}
