//! Utility functions used around the library: Base64-URL transport encoding.
//!
//! Envelopes and keys usually travel as unpadded Base64-URL text. The decrypter
//! itself only ever sees bytes.

use crate::error::EciesError;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;

const BASE64URL: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode as Base64-URL without padding (`-` and `_`, no `=`).
#[must_use]
pub fn base64url_encode(data: &[u8]) -> String {
    BASE64URL.encode(data)
}

/// Decode Base64-URL text.
///
/// Padding is optional and ASCII whitespace (line breaks in pasted vectors) is
/// skipped.
///
/// # Errors
///
/// [`EciesError::Encoding`] on characters outside the URL-safe alphabet or an
/// impossible length.
pub fn base64url_decode(input: &str) -> Result<Vec<u8>, EciesError> {
    let compact: String = input.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    BASE64URL
        .decode(compact)
        .map_err(|e| EciesError::Encoding(format!("invalid base64url: {e}")))
}
