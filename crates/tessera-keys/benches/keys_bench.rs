//! Performance benchmarks for tessera-keys operations.
//!
//! Benchmarks the hot paths of the key abstraction:
//! - Address derivation (both algorithms)
//! - Binary and structured-text codec round trips
//! - Signature verification (both algorithms)

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tessera_keys::{
    AlgorithmRegistry, Ed25519Key, Ed25519Signature, PubKey, Secp256k1Key, Secp256k1Signature,
    Signature,
};

// RFC 8032 section 7.1, TEST 1.
const ED25519_PK: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";
const ED25519_SIG: &str = "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e06522490155\
                           5fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b";

// The compressed generator point and a low-S DER signature by scalar 1.
const SECP_PK: &str = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
const SECP_MSG: &[u8] = b"tessera test message";
const SECP_SIG: &str = "3045022100bb50e2d89a4ed70663d080659fe0ad4b9bc3e06c17a227433966cb\
                        59ceee020d0220646b6c4e78e188e298ba76b4ac0562694f42dbd056338382b4\
                        0e7c0bf5da8050";

fn ed25519_key() -> Ed25519Key {
    Ed25519Key::from_slice(&hex::decode(ED25519_PK).unwrap()).unwrap()
}

fn secp256k1_key() -> Secp256k1Key {
    Secp256k1Key::from_slice(&hex::decode(SECP_PK).unwrap()).unwrap()
}

fn benchmark_address_derivation(c: &mut Criterion) {
    let ed = ed25519_key();
    c.bench_function("address/ed25519", |b| {
        b.iter(|| black_box(ed.address()));
    });

    let secp = secp256k1_key();
    c.bench_function("address/secp256k1", |b| {
        b.iter(|| black_box(secp.address()));
    });
}

fn benchmark_binary_codec(c: &mut Criterion) {
    let registry = AlgorithmRegistry::standard();
    let key = PubKey::wrap(ed25519_key());
    let wire = key.marshal_binary(&registry).unwrap();

    c.bench_function("codec/binary_encode", |b| {
        b.iter(|| black_box(key.marshal_binary(&registry).unwrap()));
    });
    c.bench_function("codec/binary_decode", |b| {
        b.iter(|| black_box(PubKey::unmarshal_binary(&registry, &wire).unwrap()));
    });
}

fn benchmark_text_codec(c: &mut Criterion) {
    let registry = AlgorithmRegistry::standard();
    let key = PubKey::wrap(secp256k1_key());
    let text = key.marshal_text(&registry).unwrap();

    c.bench_function("codec/text_encode", |b| {
        b.iter(|| black_box(key.marshal_text(&registry).unwrap()));
    });
    c.bench_function("codec/text_decode", |b| {
        b.iter(|| black_box(PubKey::unmarshal_text(&registry, &text).unwrap()));
    });
}

fn benchmark_verification(c: &mut Criterion) {
    let ed = PubKey::wrap(ed25519_key());
    let ed_sig = Signature::wrap(
        Ed25519Signature::from_slice(&hex::decode(ED25519_SIG).unwrap()).unwrap(),
    );
    c.bench_function("verify/ed25519", |b| {
        b.iter(|| black_box(ed.verify_bytes(b"", &ed_sig)));
    });

    let secp = PubKey::wrap(secp256k1_key());
    let secp_sig = Signature::wrap(Secp256k1Signature::new(hex::decode(SECP_SIG).unwrap()));
    c.bench_function("verify/secp256k1", |b| {
        b.iter(|| black_box(secp.verify_bytes(SECP_MSG, &secp_sig)));
    });
}

criterion_group!(
    benches,
    benchmark_address_derivation,
    benchmark_binary_codec,
    benchmark_text_codec,
    benchmark_verification
);
criterion_main!(benches);
