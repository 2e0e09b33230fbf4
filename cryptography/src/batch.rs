//! Sign or verify many independent items in parallel.
//!
//! Each item is processed exactly as a standalone call would process it; results are
//! returned in input order. This is not batch verification (no combined equation is checked),
//! so a single bad signature never hides behind others and never causes a good one to fail.

use crate::{params::DIGEST_LENGTH, Error, PrivateKey, PublicKey, Signature, Signer, Verifier};
use rayon::{prelude::*, ThreadPoolBuilder};
use tracing::debug;

/// Signs every digest with `private_key` using up to `concurrency` threads.
///
/// Fails with the error of the earliest failing digest (in input order).
pub fn sign_all(
    private_key: &PrivateKey,
    digests: &[[u8; DIGEST_LENGTH]],
    concurrency: usize,
) -> Result<Vec<Signature>, Error> {
    // If concurrency is not required, sign sequentially
    let concurrency = std::cmp::min(concurrency, digests.len());
    if concurrency <= 1 {
        return digests
            .iter()
            .map(|digest| private_key.sign(digest))
            .collect();
    }

    // Build a thread pool with the specified concurrency
    let pool = ThreadPoolBuilder::new()
        .num_threads(concurrency)
        .build()
        .map_err(|_| Error::Computation("unable to build thread pool"))?;
    debug!(items = digests.len(), concurrency, "signing in parallel");
    let signatures: Vec<_> = pool.install(|| {
        digests
            .par_iter()
            .map(|digest| private_key.sign(digest))
            .collect()
    });
    signatures.into_iter().collect()
}

/// Verifies every `(public key, digest, signature)` item using up to `concurrency` threads.
///
/// The outcome of each item is reported individually.
pub fn verify_all(
    items: &[(PublicKey, [u8; DIGEST_LENGTH], Signature)],
    concurrency: usize,
) -> Result<Vec<Result<(), Error>>, Error> {
    let check = |(public_key, digest, signature): &(PublicKey, [u8; DIGEST_LENGTH], Signature)| {
        public_key.check(digest, signature)
    };

    // If concurrency is not required, verify sequentially
    let concurrency = std::cmp::min(concurrency, items.len());
    if concurrency <= 1 {
        return Ok(items.iter().map(check).collect());
    }

    // Build a thread pool with the specified concurrency
    let pool = ThreadPoolBuilder::new()
        .num_threads(concurrency)
        .build()
        .map_err(|_| Error::Computation("unable to build thread pool"))?;
    debug!(items = items.len(), concurrency, "verifying in parallel");
    Ok(pool.install(|| items.par_iter().map(check).collect()))
}
