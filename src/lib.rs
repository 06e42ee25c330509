// src/lib.rs

//! Decryption of ECIESwithSHA256 envelopes: P-256 ECDH, ANSI X9.63 KDF over
//! SHA-256, XOR key stream and an HMAC-SHA256 tag, byte-compatible with
//! BouncyCastle's `ECIESwithSHA256` cipher.

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod envelope;
pub mod error;
pub mod keys;
pub mod utils;

// High-level API
pub use decryptor::{decrypt, decrypt_with_scalar, EciesDecrypter};
pub use envelope::Envelope;
pub use error::{DecryptError, EciesError};

// Pipeline stages, for custom flows and cross-checking other implementations
pub use crypto::agreement::agree;
pub use crypto::kdf::x963::{derive_x963_key_material, X963Kdf};
pub use crypto::mac::{compute_tag, verify_tag};
pub use crypto::stream::apply_keystream;

pub use keys::{public_key_x963, secret_key_from_bytes, secret_key_from_x963};
pub use p256::{PublicKey, SecretKey};

#[cfg(feature = "batch-ops")]
pub use batch_ops::decrypt_batch;
