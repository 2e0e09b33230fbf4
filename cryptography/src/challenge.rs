//! Challenge derivation.
//!
//! `e = SHA-256(R.X || P || m) mod N`, where `R.X` is the 32-byte nonce abscissa, `P` is the
//! compressed public key, and `m` is the message digest. Binding all three prevents reusing
//! a challenge across keys, nonces, or messages.

use crate::{
    codec,
    params::{DIGEST_LENGTH, INTEGER_LENGTH, PUBLIC_KEY_LENGTH},
};
use k256::Scalar;
use sha2::{Digest, Sha256};

/// Computes the challenge scalar `e` from the compressed public key, the encoded nonce
/// abscissa, and the message digest.
pub fn compute(
    public_key: &[u8; PUBLIC_KEY_LENGTH],
    rx: &[u8; INTEGER_LENGTH],
    digest: &[u8; DIGEST_LENGTH],
) -> Scalar {
    let hash: [u8; 32] = Sha256::new()
        .chain_update(rx)
        .chain_update(public_key)
        .chain_update(digest)
        .finalize()
        .into();
    codec::reduce_scalar(&hash)
}
