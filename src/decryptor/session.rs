//! src/decryptor/session.rs
//! Per-message keys: K2 (MAC) and K1 (key stream) from one X9.63 output
//!
//! Layout of the derived material, length = ciphertext length + 16:
//!
//! ```text
//! [0, 16)        K2  HMAC-SHA256 key
//! [16, 16 + n)   K1  XOR key stream, n = ciphertext length
//! ```

use crate::aliases::{KdfSeed, KeyStream, MacKey16, SharedSecret32};
use crate::consts::{COORDINATE_SIZE, MAC_KEY_SIZE, PUBLIC_KEY_SIZE};
use crate::crypto::kdf::x963::derive_x963_key_material;

/// K2 and K1 for a single envelope. Both are zeroized on drop.
pub struct SessionKeys {
    mac_key: MacKey16,
    key_stream: KeyStream,
}

impl SessionKeys {
    /// K2.
    #[inline]
    pub fn mac_key(&self) -> &MacKey16 {
        &self.mac_key
    }

    /// K1, exactly as long as the ciphertext it was derived for.
    #[inline]
    pub fn key_stream(&self) -> &[u8] {
        &self.key_stream
    }
}

/// Run the KDF over `ephemeral_public_key ‖ shared_secret` and split the output.
pub fn derive_session_keys(
    ephemeral_public_key: &[u8; PUBLIC_KEY_SIZE],
    shared_secret: &SharedSecret32,
    ciphertext_len: usize,
) -> SessionKeys {
    let mut seed = KdfSeed::new(Vec::with_capacity(PUBLIC_KEY_SIZE + COORDINATE_SIZE));
    seed.extend_from_slice(ephemeral_public_key);
    seed.extend_from_slice(&shared_secret[..]);

    let material = derive_x963_key_material(&seed, ciphertext_len + MAC_KEY_SIZE);

    // material is never shorter than MAC_KEY_SIZE
    let (k2, k1) = material.split_at(MAC_KEY_SIZE);

    let mut mac_key = MacKey16::new([0u8; MAC_KEY_SIZE]);
    mac_key.copy_from_slice(k2);

    SessionKeys {
        mac_key,
        key_stream: KeyStream::new(k1.to_vec()),
    }
}
