//! # Private Key Import
//!
//! Helpers for getting the receiver's P-256 key into a [`SecretKey`]. Storage and
//! higher-level formats (JWK, PKCS#8, keychains) are the caller's business; these
//! cover the two raw encodings issuers typically hand out.

use crate::consts::{
    PRIVATE_SCALAR_SIZE, PUBLIC_KEY_SIZE, UNCOMPRESSED_POINT_TAG, X963_PRIVATE_KEY_SIZE,
};
use crate::error::EciesError;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::SecretKey;

/// Import a raw 32-byte big-endian private scalar.
///
/// # Errors
///
/// [`EciesError::InvalidPrivateKey`] if the length is wrong or the scalar is zero
/// or not below the group order.
pub fn secret_key_from_bytes(scalar: &[u8]) -> Result<SecretKey, EciesError> {
    if scalar.len() != PRIVATE_SCALAR_SIZE {
        return Err(EciesError::InvalidPrivateKey(format!(
            "expected {PRIVATE_SCALAR_SIZE}-byte scalar, got {}",
            scalar.len()
        )));
    }

    SecretKey::from_slice(scalar)
        .map_err(|_| EciesError::InvalidPrivateKey("scalar out of range".into()))
}

/// Import the X9.63 private representation `0x04 ‖ X ‖ Y ‖ D`.
///
/// The embedded public point must match `D·G`, otherwise the key is rejected.
///
/// # Errors
///
/// [`EciesError::InvalidPrivateKey`] on a wrong length or tag, an invalid scalar,
/// or a public point that does not belong to the scalar.
pub fn secret_key_from_x963(bytes: &[u8]) -> Result<SecretKey, EciesError> {
    if bytes.len() != X963_PRIVATE_KEY_SIZE {
        return Err(EciesError::InvalidPrivateKey(format!(
            "expected {X963_PRIVATE_KEY_SIZE} bytes, got {}",
            bytes.len()
        )));
    }
    if bytes.first() != Some(&UNCOMPRESSED_POINT_TAG) {
        return Err(EciesError::InvalidPrivateKey(
            "expected leading 0x04".into(),
        ));
    }

    let (public, scalar) = bytes.split_at(PUBLIC_KEY_SIZE);
    let secret = secret_key_from_bytes(scalar)?;

    if public_key_x963(&secret).as_slice() != public {
        return Err(EciesError::InvalidPrivateKey(
            "public point does not match private scalar".into(),
        ));
    }

    Ok(secret)
}

/// Uncompressed X9.63 encoding of the public half of `secret`.
#[must_use]
pub fn public_key_x963(secret: &SecretKey) -> [u8; PUBLIC_KEY_SIZE] {
    let point = secret.public_key().to_encoded_point(false);

    let mut out = [0u8; PUBLIC_KEY_SIZE];
    out.copy_from_slice(point.as_bytes());
    out
}
