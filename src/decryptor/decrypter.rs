//! src/decryptor/decrypter.rs
//! Receiver-side decrypter bound to one private key

use crate::consts::PUBLIC_KEY_SIZE;
use crate::decryptor::decrypt::decrypt;
use crate::error::EciesError;
use crate::keys::{public_key_x963, secret_key_from_bytes, secret_key_from_x963};
use p256::SecretKey;
use std::fmt;

/// Decrypts envelopes addressed to one P-256 key.
///
/// # Thread Safety
///
/// `Send + Sync`. The key is only read; share one decrypter across threads freely.
///
/// # Example
///
/// ```no_run
/// use ecies_sha256::EciesDecrypter;
///
/// # fn run(scalar: &[u8], envelope: &[u8]) -> Result<(), ecies_sha256::EciesError> {
/// let decrypter = EciesDecrypter::from_scalar(scalar)?;
/// let plaintext = decrypter.decrypt(envelope)?;
/// # let _ = plaintext;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct EciesDecrypter {
    private_key: SecretKey,
}

impl EciesDecrypter {
    #[must_use]
    pub fn new(private_key: SecretKey) -> Self {
        Self { private_key }
    }

    /// Build from a raw 32-byte private scalar.
    pub fn from_scalar(scalar: &[u8]) -> Result<Self, EciesError> {
        secret_key_from_bytes(scalar).map(Self::new)
    }

    /// Build from the X9.63 private representation `0x04 ‖ X ‖ Y ‖ D`.
    pub fn from_x963(bytes: &[u8]) -> Result<Self, EciesError> {
        secret_key_from_x963(bytes).map(Self::new)
    }

    /// The public key senders must encrypt to, X9.63 uncompressed.
    #[must_use]
    pub fn public_key_x963(&self) -> [u8; PUBLIC_KEY_SIZE] {
        public_key_x963(&self.private_key)
    }

    /// See [`decrypt`](crate::decrypt).
    pub fn decrypt(&self, envelope: &[u8]) -> Result<Vec<u8>, EciesError> {
        decrypt(envelope, &self.private_key)
    }
}

impl From<SecretKey> for EciesDecrypter {
    fn from(private_key: SecretKey) -> Self {
        Self::new(private_key)
    }
}

impl fmt::Debug for EciesDecrypter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EciesDecrypter").finish_non_exhaustive()
    }
}
