//! Fuzz target for the structured-text public-key codec.
//!
//! Feeds arbitrary strings to `PubKey::unmarshal_text`. The decode path
//! spans serde_json, registry name lookup, and hex decoding; none of it may
//! panic on adversarial input.
//!
//! # Running
//!
//! ```bash
//! cargo +nightly fuzz run pubkey_text
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use tessera_keys::{AlgorithmRegistry, PubKey};

fuzz_target!(|text: &str| {
    let registry = AlgorithmRegistry::standard();

    if let Ok(key) = PubKey::unmarshal_text(&registry, text) {
        // Successful decodes round-trip through the canonical text form.
        let canonical = key.marshal_text(&registry).expect("decoded key re-encodes");
        let again = PubKey::unmarshal_text(&registry, &canonical).expect("canonical form decodes");
        assert_eq!(again, key);
    }
});
