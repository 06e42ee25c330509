//! src/crypto/mac.rs
//! Envelope tag: HMAC-SHA256(K2, ciphertext ‖ L2)
//!
//! L2 is the 8-byte big-endian bit length of the second shared-info field. This
//! profile never carries one, so L2 is always eight zero bytes.

use crate::aliases::{HmacSha256, MacKey16, MacTag32};
use crate::consts::{MAC_L2, MAC_SIZE};
use crate::error::EciesError;
use hmac::Mac;
use subtle::ConstantTimeEq;

/// Compute the 32-byte tag over `ciphertext` with the 16-byte MAC key.
#[must_use]
pub fn compute_tag(mac_key: &MacKey16, ciphertext: &[u8]) -> MacTag32 {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(&mac_key[..])
        .expect("HMAC-SHA256 accepts keys of any length");

    mac.update(ciphertext);
    mac.update(&MAC_L2);

    let mut tag = MacTag32::new([0u8; MAC_SIZE]);
    tag.copy_from_slice(&mac.finalize().into_bytes());
    tag
}

/// Constant-time equality of two full-length tags. No truncation.
#[inline]
#[must_use]
pub fn tags_match(expected: &[u8; MAC_SIZE], computed: &MacTag32) -> bool {
    expected
        .as_slice()
        .ct_eq(&computed[..])
        .into()
}

/// [`tags_match`] as a `Result`.
///
/// # Errors
///
/// [`EciesError::MacMismatch`] when the tags differ in any byte.
#[inline]
pub fn verify_tag(expected: &[u8; MAC_SIZE], computed: &MacTag32) -> Result<(), EciesError> {
    if tags_match(expected, computed) {
        Ok(())
    } else {
        Err(EciesError::MacMismatch)
    }
}
