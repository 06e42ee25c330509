//! # Envelope Unpacking
//!
//! An encrypted message is a single byte buffer:
//!
//! ```text
//! offset 0..65    ephemeral public key, X9.63 uncompressed P-256 point
//! offset 65..N-32 ciphertext (N - 97 bytes, may be empty)
//! offset N-32..N  HMAC-SHA256 tag
//! ```
//!
//! Unpacking borrows from the input; nothing is copied.

use crate::consts::{MAC_SIZE, MIN_ENVELOPE_SIZE, PUBLIC_KEY_SIZE};
use crate::error::EciesError;

/// Borrowed view of the three regions of an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope<'a> {
    ephemeral_public_key: &'a [u8; PUBLIC_KEY_SIZE],
    ciphertext: &'a [u8],
    mac: &'a [u8; MAC_SIZE],
}

impl<'a> Envelope<'a> {
    /// Split `data` into ephemeral public key, ciphertext and MAC tag.
    ///
    /// # Errors
    ///
    /// [`EciesError::InvalidEnvelope`] if `data` is shorter than 97 bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use ecies_sha256::Envelope;
    ///
    /// let data = [0u8; 100];
    /// let envelope = Envelope::unpack(&data)?;
    /// assert_eq!(envelope.ciphertext().len(), 3);
    ///
    /// assert!(Envelope::unpack(&data[..96]).is_err());
    /// # Ok::<(), ecies_sha256::EciesError>(())
    /// ```
    pub fn unpack(data: &'a [u8]) -> Result<Self, EciesError> {
        let invalid = || EciesError::InvalidEnvelope { len: data.len() };

        if data.len() < MIN_ENVELOPE_SIZE {
            return Err(invalid());
        }

        let (key, rest) = data.split_at(PUBLIC_KEY_SIZE);
        let (ciphertext, mac) = rest.split_at(rest.len() - MAC_SIZE);

        Ok(Self {
            ephemeral_public_key: key.try_into().map_err(|_| invalid())?,
            ciphertext,
            mac: mac.try_into().map_err(|_| invalid())?,
        })
    }

    /// The sender's ephemeral public key, still X9.63 encoded.
    #[inline]
    pub fn ephemeral_public_key(&self) -> &'a [u8; PUBLIC_KEY_SIZE] {
        self.ephemeral_public_key
    }

    #[inline]
    pub fn ciphertext(&self) -> &'a [u8] {
        self.ciphertext
    }

    /// Transmitted HMAC-SHA256 tag.
    #[inline]
    pub fn mac(&self) -> &'a [u8; MAC_SIZE] {
        self.mac
    }
}
