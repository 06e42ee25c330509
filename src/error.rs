//! # Error Types
//!
//! All operations return [`Result<T, EciesError>`](EciesError). The set of failure
//! modes is closed: callers can match exhaustively, but user-facing messaging should
//! normally collapse every variant into a single "decryption failed".

use crate::consts::MIN_ENVELOPE_SIZE;
use thiserror::Error;

/// The error type for all ECIESwithSHA256 operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EciesError {
    /// The envelope is too short to contain an ephemeral key and a MAC tag.
    ///
    /// Returned before any key agreement is attempted.
    #[error("invalid envelope: {len} bytes, need at least {min}", min = MIN_ENVELOPE_SIZE)]
    InvalidEnvelope {
        /// Length of the rejected buffer.
        len: usize,
    },

    /// The ephemeral public key is not a valid uncompressed P-256 point.
    ///
    /// Covers a wrong length, a leading byte other than `0x04` and points
    /// that are not on the curve.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    /// The ECDH computation did not yield a usable shared secret.
    ///
    /// Part of the closed error set for alternative curve backends; the `p256`
    /// backend never produces it, since `diffie_hellman` is infallible once the
    /// peer point has been validated.
    #[error("key agreement failed: {0}")]
    KeyAgreement(String),

    /// The computed HMAC-SHA256 tag does not match the transmitted one.
    ///
    /// Wrong private key, tampered ciphertext or tag, or a non-matching
    /// encryption profile all end up here.
    #[error("MAC mismatch")]
    MacMismatch,

    /// A private key could not be imported.
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// Base64-URL input could not be decoded.
    #[error("encoding error: {0}")]
    Encoding(String),
}

/// Alias used by the decrypt entry points.
pub type DecryptError = EciesError;
