//! # Secret Buffer Aliases
//!
//! Every transient secret produced during a decrypt call lives in one of these
//! [`Zeroizing`] wrappers and is wiped when it goes out of scope. None of them is
//! `Copy`, so the bytes are never duplicated implicitly.
//!
//! ## Type Categories
//!
//! ### HMAC Primitive
//! - [`HmacSha256`] - HMAC-SHA256 used for the envelope tag
//!
//! ### Fixed-Size Secrets
//! - [`SharedSecret32`] - raw ECDH shared secret (X coordinate)
//! - [`MacKey16`] - K2, the HMAC key sliced from the derived key material
//! - [`MacTag32`] - computed HMAC-SHA256 tag
//! - [`DigestBlock32`] - one SHA-256 output block of the KDF
//!
//! ### Dynamic Secrets
//! - [`KeyMaterial`] - KDF output (K2 ‖ K1)
//! - [`KeyStream`] - K1, exactly as long as the ciphertext
//! - [`KdfSeed`] - KDF input: ephemeral public key ‖ shared secret

use zeroize::Zeroizing;

use hmac::Hmac;
use sha2::Sha256;

pub type HmacSha256 = Hmac<Sha256>;

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer — generic zeroizing stack buffer
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = Zeroizing<[u8; N]>;

pub type DigestBlock32 = SpanBuffer<32>; // one KDF block
pub type MacKey16 = SpanBuffer<16>; // K2
pub type MacTag32 = SpanBuffer<32>; // HMAC-SHA256 output
pub type SharedSecret32 = SpanBuffer<32>; // ECDH X coordinate

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
pub type KeyMaterial = Zeroizing<Vec<u8>>; // K2 ‖ K1
pub type KeyStream = Zeroizing<Vec<u8>>; // K1
pub type KdfSeed = Zeroizing<Vec<u8>>; // ephemeral public key ‖ shared secret
