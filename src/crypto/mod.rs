// src/crypto/mod.rs

//! Low-level primitives of the ECIESwithSHA256 pipeline.
//!
//! Each stage is usable on its own for custom flows; the high-level
//! [`decrypt`](crate::decrypt) sequences them.
//! HMAC types are defined in `aliases.rs`.

pub mod agreement;
pub mod kdf;
pub mod mac;
pub mod stream;
