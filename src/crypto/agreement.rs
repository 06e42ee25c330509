//! src/crypto/agreement.rs
//! P-256 ECDH between the receiver's private key and the sender's ephemeral key

use crate::aliases::SharedSecret32;
use crate::consts::{COORDINATE_SIZE, PUBLIC_KEY_SIZE, UNCOMPRESSED_POINT_TAG};
use crate::error::EciesError;
use p256::ecdh::diffie_hellman;
use p256::{PublicKey, SecretKey};

/// Parse an X9.63 uncompressed P-256 point (`0x04 ‖ X ‖ Y`).
///
/// Compressed and hybrid encodings are rejected even though they describe valid
/// points: the counterpart only ever emits the uncompressed form.
pub fn parse_public_key(bytes: &[u8]) -> Result<PublicKey, EciesError> {
    if bytes.len() != PUBLIC_KEY_SIZE {
        return Err(EciesError::InvalidPublicKey(format!(
            "expected {PUBLIC_KEY_SIZE} bytes, got {}",
            bytes.len()
        )));
    }
    if bytes.first() != Some(&UNCOMPRESSED_POINT_TAG) {
        return Err(EciesError::InvalidPublicKey(
            "not an uncompressed point (expected leading 0x04)".into(),
        ));
    }

    PublicKey::from_sec1_bytes(bytes)
        .map_err(|_| EciesError::InvalidPublicKey("point is not on P-256".into()))
}

/// Raw ECDH: the X coordinate of `private_key · peer`, as 32 big-endian bytes.
///
/// The result is not hashed; the X9.63 KDF consumes it directly. p256's own
/// zeroizing `SharedSecret` is copied straight into a zeroizing buffer.
///
/// With the `p256` backend ECDH is infallible for a parsed point, so every error
/// here is [`EciesError::InvalidPublicKey`].
pub fn agree(
    private_key: &SecretKey,
    peer_public_key: &[u8],
) -> Result<SharedSecret32, EciesError> {
    let peer = parse_public_key(peer_public_key)?;

    let shared = diffie_hellman(private_key.to_nonzero_scalar(), peer.as_affine());
    // FieldBytes<NistP256> is 32 bytes by type
    let mut secret = SharedSecret32::new([0u8; COORDINATE_SIZE]);
    secret.copy_from_slice(&shared.raw_secret_bytes()[..]);
    Ok(secret)
}
