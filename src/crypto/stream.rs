//! src/crypto/stream.rs
//! XOR "stream cipher" keyed by K1
//!
//! The key stream is exactly as long as the message, so this is a one-time pad:
//! no padding, no blocks, and encryption and decryption are the same operation.

/// XOR `input` with `key_stream` into `output`.
///
/// # Panics (by contract)
///
/// All three slices must have the same length. The decrypter guarantees this by
/// deriving K1 from the ciphertext length; a mismatch is a programming error and
/// trips a debug assertion. In release builds the shortest slice bounds the XOR.
#[inline]
pub fn xor_keystream_into(input: &[u8], key_stream: &[u8], output: &mut [u8]) {
    debug_assert_eq!(input.len(), key_stream.len(), "key stream length mismatch");
    debug_assert_eq!(input.len(), output.len(), "output length mismatch");

    for ((out, byte), key) in output.iter_mut().zip(input).zip(key_stream) {
        *out = byte ^ key;
    }
}

/// XOR `input` with `key_stream`, returning a new buffer.
///
/// Self-inverse: `apply_keystream(&apply_keystream(x, k), k) == x`.
#[must_use]
pub fn apply_keystream(input: &[u8], key_stream: &[u8]) -> Vec<u8> {
    let mut output = vec![0u8; input.len()];
    xor_keystream_into(input, key_stream, &mut output);
    output
}
