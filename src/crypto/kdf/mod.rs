//! # Key Derivation Functions (KDF)
//!
//! ## Modules
//!
//! - [`x963`] - ANSI X9.63 KDF over SHA-256, as used by BouncyCastle's ECIES
//!
//! For most use cases, use the high-level [`decrypt`](crate::decrypt), which derives
//! the key material automatically. This module is exposed for custom flows and for
//! checking the derivation against other implementations.

pub mod x963;
