//! Fuzz target for the binary public-key codec.
//!
//! Feeds arbitrary byte sequences to `PubKey::unmarshal_binary` to find
//! panics in the decode path. Decoding must either produce a key or return
//! an error; it must never panic, whatever a peer sends.
//!
//! # Running
//!
//! ```bash
//! cargo +nightly fuzz run pubkey_binary
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use tessera_keys::{AlgorithmRegistry, PubKey};

fuzz_target!(|data: &[u8]| {
    let registry = AlgorithmRegistry::standard();

    // Any outcome but a panic is acceptable.
    if let Ok(key) = PubKey::unmarshal_binary(&registry, data) {
        // A successful decode must survive the full capability surface and
        // re-encode to the exact input bytes.
        let _ = key.address();
        let _ = key.key_string();
        let reencoded = key.marshal_binary(&registry).expect("decoded key re-encodes");
        assert_eq!(reencoded, data);
    }
});
