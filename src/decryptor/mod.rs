// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt(envelope, &private_key)?` for one message, or an
//! [`EciesDecrypter`] holding the receiver key for repeated use.
//! Helpers: `derive_session_keys`, `SessionKeys` for custom flows.

pub(crate) mod decrypt;
pub(crate) mod decrypter;
pub(crate) mod session;

pub use decrypt::{decrypt, decrypt_with_scalar};
pub use decrypter::EciesDecrypter;
pub use session::{derive_session_keys, SessionKeys};
