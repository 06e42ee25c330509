//! Parallel decryption of independent envelopes (`batch-ops` feature).

use rayon::prelude::*;

use crate::{decrypt, EciesError};
use p256::SecretKey;

/// Decrypt every envelope with the same key on the rayon pool.
///
/// Results come back in input order; one bad envelope does not affect the others.
pub fn decrypt_batch<E>(
    envelopes: &[E],
    private_key: &SecretKey,
) -> Vec<Result<Vec<u8>, EciesError>>
where
    E: AsRef<[u8]> + Sync,
{
    envelopes
        .par_iter()
        .map(|envelope| decrypt(envelope.as_ref(), private_key))
        .collect()
}
