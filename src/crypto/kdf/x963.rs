//! src/crypto/kdf/x963.rs
//! ANSI X9.63 key derivation with SHA-256
//!
//! `K = SHA256(seed ‖ C) ‖ SHA256(seed ‖ C+1) ‖ …`, truncated to the requested
//! length, where `C` is a 32-bit big-endian counter. No shared info is appended.

use crate::aliases::{DigestBlock32, KeyMaterial};
use crate::consts::{KDF_COUNTER_START, SHA256_DIGEST_SIZE};
use sha2::{Digest, Sha256};
use tracing::trace;

/// X9.63 KDF bound to a seed.
///
/// # Thread Safety
///
/// Holds only a borrowed seed and a counter start; every call to
/// [`fill`](Self::fill) keeps its working state on the stack.
#[derive(Debug, Clone, Copy)]
pub struct X963Kdf<'a> {
    seed: &'a [u8],
    counter_start: u32,
}

impl<'a> X963Kdf<'a> {
    /// KDF over `seed` with the counter starting at 1.
    #[must_use]
    pub const fn new(seed: &'a [u8]) -> Self {
        Self {
            seed,
            counter_start: KDF_COUNTER_START,
        }
    }

    /// Start the counter at `counter_start` instead of 1.
    ///
    /// Only useful for testing against other implementations; ECIES always uses 1.
    #[must_use]
    pub const fn with_counter_start(mut self, counter_start: u32) -> Self {
        self.counter_start = counter_start;
        self
    }

    #[must_use]
    pub const fn counter_start(&self) -> u32 {
        self.counter_start
    }

    /// Fill `out` completely with derived bytes.
    ///
    /// The last block is truncated, so a shorter output is always a prefix of a
    /// longer one.
    pub fn fill(&self, out: &mut [u8]) {
        let mut hasher = Sha256::new();
        let mut counter = self.counter_start;

        trace!(
            len = out.len(),
            blocks = out.len().div_ceil(SHA256_DIGEST_SIZE),
            "deriving X9.63 key material"
        );

        for chunk in out.chunks_mut(SHA256_DIGEST_SIZE) {
            hasher.update(self.seed);
            hasher.update(counter.to_be_bytes());
            let block = DigestBlock32::new(hasher.finalize_reset().into());

            chunk.copy_from_slice(&block[..chunk.len()]);
            counter = counter.wrapping_add(1);
        }
    }

    /// Derive exactly `len` bytes into a fresh zeroizing buffer.
    #[must_use]
    pub fn generate(&self, len: usize) -> KeyMaterial {
        let mut material = KeyMaterial::new(vec![0u8; len]);
        self.fill(&mut material);
        material
    }
}

/// Derive `len` bytes of key material from `seed` (counter starting at 1).
#[inline]
#[must_use]
pub fn derive_x963_key_material(seed: &[u8], len: usize) -> KeyMaterial {
    X963Kdf::new(seed).generate(len)
}
