//! # tessera-core
//!
//! Shared error types for the Tessera account-key library.
//!
//! ## Internal Crate Warning
//!
//! **This crate is an internal implementation detail of
//! [`tessera-keys`](https://crates.io/crates/tessera-keys).**
//!
//! It is published only because Cargo requires all dependencies to be
//! published. The API is **unstable** and may change without notice between
//! any versions, including patch releases. Depend on `tessera-keys` instead.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;

pub use error::CodecError;
