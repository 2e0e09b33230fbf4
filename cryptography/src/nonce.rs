//! Deterministic nonce derivation.
//!
//! `k0 = SHA-256(d || m) mod N`, where `d` is the 32-byte encoding of the private scalar and
//! `m` is the message digest. The same key and digest always yield the same nonce, so a nonce
//! is never reused across different messages.
//!
//! # Warning
//!
//! Neither the public key nor auxiliary randomness is mixed into the hash. Variants that
//! include them are more resistant to related-key and fault attacks, but changing the input
//! changes every signature this crate produces.

use crate::{
    codec,
    params::{DIGEST_LENGTH, PRIVATE_KEY_LENGTH},
};
use k256::Scalar;
use sha2::{Digest, Sha256};

/// Derives the nonce scalar `k0` for signing `digest` with `private_key`.
pub fn derive(private_key: &[u8; PRIVATE_KEY_LENGTH], digest: &[u8; DIGEST_LENGTH]) -> Scalar {
    let hash: [u8; 32] = Sha256::new()
        .chain_update(private_key)
        .chain_update(digest)
        .finalize()
        .into();
    codec::reduce_scalar(&hash)
}
