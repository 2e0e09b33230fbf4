//! Sign 32-byte digests and deterministically verify Schnorr signatures over secp256k1.
//!
//! Signatures are 64 bytes (`R.X || s`), public keys are 33-byte compressed points, and
//! nonces are derived from the private key and digest so that signing is a pure function.
//! Elliptic-curve arithmetic is provided by `k256`; this crate implements only the scheme
//! on top of it.
//!
//! # Status
//!
//! `secp256k1-schnorr` is **ALPHA** software and is not yet recommended for production use. Developers should
//! expect breaking changes and occasional instability.

pub mod batch;
pub mod challenge;
pub mod codec;
pub mod curve;
mod error;
pub use error::Error;
pub mod nonce;
pub mod params;
pub mod point;
pub mod scheme;
pub use scheme::{PrivateKey, PublicKey, Signature};

use params::DIGEST_LENGTH;

/// Produces [Signer::Signature]s over digests that can be verified with the corresponding
/// [Signer::PublicKey].
pub trait Signer: Send + Sync + Clone + 'static {
    /// The type of signature produced by this [Signer].
    type Signature;

    /// The corresponding public key type.
    type PublicKey: Verifier<Signature = Self::Signature>;

    /// Returns the public key corresponding to this [Signer].
    fn public_key(&self) -> Self::PublicKey;

    /// Sign a message digest.
    ///
    /// The digest is signed as-is. Callers are responsible for hashing messages of arbitrary
    /// length down to 32 bytes before calling this function.
    ///
    /// Signing is deterministic: the same key and digest always produce the same signature.
    fn sign(&self, digest: &[u8; DIGEST_LENGTH]) -> Result<Self::Signature, Error>;
}

/// Verifies signatures over digests.
pub trait Verifier {
    /// The type of signature that this verifier can verify.
    type Signature;

    /// Check a signature over a digest, reporting why it was rejected.
    ///
    /// Returns [Error::MalformedSignature] if a component is out of range (checked before any
    /// curve arithmetic) and [Error::InvalidSignature] if the signature is well-formed but
    /// does not verify.
    fn check(&self, digest: &[u8; DIGEST_LENGTH], signature: &Self::Signature)
        -> Result<(), Error>;

    /// Verify that a signature is valid over a given digest.
    fn verify(&self, digest: &[u8; DIGEST_LENGTH], signature: &Self::Signature) -> bool {
        self.check(digest, signature).is_ok()
    }
}
