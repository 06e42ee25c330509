//! # Constants
//!
//! Fixed parameters of the ECIESwithSHA256 profile (P-256, SHA-256, 128-bit MAC key).
//! None of these are negotiable: changing any of them breaks interoperability with
//! the encrypting counterpart.

/// Size of an X9.63 uncompressed P-256 point: `0x04 ‖ X[32] ‖ Y[32]`.
pub const PUBLIC_KEY_SIZE: usize = 65;

/// Leading tag byte of an uncompressed point.
pub const UNCOMPRESSED_POINT_TAG: u8 = 0x04;

/// Size of a P-256 coordinate and of the raw ECDH shared secret.
pub const COORDINATE_SIZE: usize = 32;

/// Size of a P-256 private scalar.
pub const PRIVATE_SCALAR_SIZE: usize = 32;

/// Size of the X9.63 private key representation `0x04 ‖ X ‖ Y ‖ D`.
pub const X963_PRIVATE_KEY_SIZE: usize = PUBLIC_KEY_SIZE + PRIVATE_SCALAR_SIZE;

/// HMAC-SHA256 tag size carried at the end of every envelope.
pub const MAC_SIZE: usize = 32;

/// K2 length: the MAC key is 128 bits.
pub const MAC_KEY_SIZE: usize = 16;

/// Smallest well-formed envelope (empty ciphertext).
pub const MIN_ENVELOPE_SIZE: usize = PUBLIC_KEY_SIZE + MAC_SIZE;

/// SHA-256 output size, i.e. the KDF block size.
pub const SHA256_DIGEST_SIZE: usize = 32;

/// First value of the X9.63 KDF counter.
pub const KDF_COUNTER_START: u32 = 1;

/// Bit length of the (always empty) second shared-info field, encoded on 8 bytes.
pub const MAC_L2: [u8; 8] = [0u8; 8];
