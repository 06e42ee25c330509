//! src/decryptor/decrypt.rs
//! ECIESwithSHA256 decryption — unpack, agree, derive, verify, XOR

use crate::crypto::agreement::agree;
use crate::crypto::mac::{compute_tag, verify_tag};
use crate::crypto::stream::apply_keystream;
use crate::decryptor::session::derive_session_keys;
use crate::envelope::Envelope;
use crate::error::EciesError;
use crate::keys::secret_key_from_bytes;
use p256::SecretKey;
use tracing::{debug, debug_span, trace};

/// Decrypt an ECIESwithSHA256 envelope with the receiver's private key.
///
/// Produces the same plaintext as BouncyCastle's `ECIESwithSHA256` cipher in
/// `DECRYPT_MODE` for P-256 keys. Nothing is returned unless the tag verifies.
///
/// # Thread Safety
///
/// Stateless: all working buffers are local to the call, so any number of
/// decryptions may run concurrently with the same key.
///
/// # Errors
///
/// - [`EciesError::InvalidEnvelope`] - shorter than 97 bytes (no key agreement attempted)
/// - [`EciesError::InvalidPublicKey`] - ephemeral key is not an uncompressed P-256 point
/// - [`EciesError::KeyAgreement`] - ECDH produced no usable secret
/// - [`EciesError::MacMismatch`] - wrong key, or the envelope was altered
pub fn decrypt(envelope: &[u8], private_key: &SecretKey) -> Result<Vec<u8>, EciesError> {
    let span = debug_span!("ecies_decrypt", envelope_len = envelope.len());
    let _enter = span.enter();

    decrypt_envelope(envelope, private_key)
        .inspect_err(|e| debug!(error = %e, "decryption failed"))
}

/// [`decrypt`] with the private key given as a raw 32-byte scalar.
///
/// # Errors
///
/// [`EciesError::InvalidPrivateKey`] if the scalar cannot be imported, otherwise
/// the same as [`decrypt`].
pub fn decrypt_with_scalar(envelope: &[u8], scalar: &[u8]) -> Result<Vec<u8>, EciesError> {
    let private_key = secret_key_from_bytes(scalar)?;
    decrypt(envelope, &private_key)
}

fn decrypt_envelope(data: &[u8], private_key: &SecretKey) -> Result<Vec<u8>, EciesError> {
    let envelope = Envelope::unpack(data)?;
    let ciphertext = envelope.ciphertext();
    trace!(ciphertext_len = ciphertext.len(), "envelope unpacked");

    let shared_secret = agree(private_key, envelope.ephemeral_public_key())?;
    let keys = derive_session_keys(
        envelope.ephemeral_public_key(),
        &shared_secret,
        ciphertext.len(),
    );

    // Tag first: unverified plaintext never exists
    let tag = compute_tag(keys.mac_key(), ciphertext);
    verify_tag(envelope.mac(), &tag)?;
    trace!("tag verified");

    Ok(apply_keystream(ciphertext, keys.key_stream()))
}
