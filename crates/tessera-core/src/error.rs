//! Error types for public-key encoding and decoding.
//!
//! This module provides [`CodecError`], the single error type surfaced by
//! the binary and structured-text key codecs in `tessera-keys`.
//!
//! # Design
//!
//! Two failure modes are deliberately kept apart:
//!
//! - **Decode failures** are explicit: a truncated buffer, an unregistered
//!   algorithm tag, or a wrong-length payload bubbles up as a [`CodecError`]
//!   for the caller (keystore, transaction layer) to handle.
//! - **Verification failures never error.** A remote party fully controls
//!   signature bytes, so signature verification resolves every malformed or
//!   mismatched input to boolean `false` instead. No variant of this enum is
//!   ever produced by a verify path.
//!
//! # Example
//!
//! ```rust
//! use tessera_core::CodecError;
//!
//! fn check_tag(known: &[u8], tag: u8) -> Result<(), CodecError> {
//!     if known.contains(&tag) {
//!         Ok(())
//!     } else {
//!         Err(CodecError::UnknownAlgorithm { tag })
//!     }
//! }
//!
//! assert!(check_tag(&[0x01, 0x02], 0x7f).is_err());
//! ```

/// Errors produced by the public-key binary and structured-text codecs.
///
/// Unknown-algorithm failures get their own variants so callers can tell
/// "this peer speaks an algorithm we do not support" apart from "this peer
/// sent garbage".
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The binary type tag is not present in the algorithm registry.
    #[error("unknown algorithm tag 0x{tag:02x}")]
    UnknownAlgorithm {
        /// The unregistered tag byte read from the wire.
        tag: u8,
    },

    /// The structured-text `"type"` name is not present in the registry.
    #[error("unknown algorithm name {name:?}")]
    UnknownAlgorithmName {
        /// The unregistered name read from the text form.
        name: String,
    },

    /// The key payload does not match the algorithm's fixed size.
    #[error("invalid {algorithm} key length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Name of the algorithm whose size constraint was violated.
        algorithm: &'static str,
        /// The algorithm's fixed raw-key length in bytes.
        expected: usize,
        /// The length actually supplied.
        actual: usize,
    },

    /// The input ended before the frame it promised was complete.
    #[error("truncated input: {context}")]
    Truncated {
        /// What was being read when the input ran out.
        context: &'static str,
    },

    /// The binary length prefix is not in canonical varint form.
    ///
    /// The wire codec writes lengths as a size byte followed by the
    /// big-endian length bytes; a prefix with a leading zero byte or wider
    /// than eight bytes is rejected so that every key has exactly one
    /// encoding.
    #[error("malformed length prefix: {reason}")]
    MalformedLengthPrefix {
        /// Why the prefix was rejected.
        reason: &'static str,
    },

    /// Bytes remained after the length-prefixed payload was consumed.
    #[error("{count} trailing byte(s) after key payload")]
    TrailingBytes {
        /// Number of unconsumed bytes.
        count: usize,
    },

    /// An empty (zero-value) public key cannot be encoded.
    #[error("cannot encode an empty public key")]
    EmptyKey,

    /// The structured-text form is not valid JSON.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The structured-text payload is not valid hex.
    #[error("malformed hex payload: {0}")]
    Hex(#[from] hex::FromHexError),
}

impl CodecError {
    /// Returns `true` when the failure is "algorithm not registered" rather
    /// than a malformed payload, for either codec form.
    #[must_use]
    pub const fn is_unknown_algorithm(&self) -> bool {
        matches!(
            self,
            Self::UnknownAlgorithm { .. } | Self::UnknownAlgorithmName { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_display_formats_tag_as_hex() {
        let err = CodecError::UnknownAlgorithm { tag: 0xab };
        assert_eq!(format!("{err}"), "unknown algorithm tag 0xab");
    }

    #[test]
    fn test_display_invalid_length() {
        let err = CodecError::InvalidLength {
            algorithm: "ed25519",
            expected: 32,
            actual: 31,
        };
        assert_eq!(
            format!("{err}"),
            "invalid ed25519 key length: expected 32 bytes, got 31"
        );
    }

    #[test]
    fn test_is_unknown_algorithm_covers_both_codec_forms() {
        assert!(CodecError::UnknownAlgorithm { tag: 0x7f }.is_unknown_algorithm());
        assert!(CodecError::UnknownAlgorithmName {
            name: "sr25519".to_string()
        }
        .is_unknown_algorithm());
        assert!(!CodecError::Truncated { context: "tag" }.is_unknown_algorithm());
        assert!(!CodecError::EmptyKey.is_unknown_algorithm());
    }

    #[test]
    fn test_display_malformed_length_prefix() {
        let err = CodecError::MalformedLengthPrefix {
            reason: "leading zero byte",
        };
        assert_eq!(format!("{err}"), "malformed length prefix: leading zero byte");
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CodecError = json_err.into();
        assert!(matches!(err, CodecError::Json(_)));
    }

    #[test]
    fn test_hex_error_converts() {
        let hex_err = hex::decode("zz").unwrap_err();
        let err: CodecError = hex_err.into();
        assert!(matches!(err, CodecError::Hex(_)));
    }
}
