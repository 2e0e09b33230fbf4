//! Errors returned by signing, verification, and key parsing.

use thiserror::Error;

/// Error type for Schnorr operations.
///
/// Verification distinguishes structurally malformed input ([Error::MalformedSignature])
/// from signatures that are well-formed but do not verify ([Error::InvalidSignature]).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("private key must be in [1, N-1]")]
    InvalidPrivateKey,
    #[error("invalid public key")]
    InvalidPublicKey,
    #[error("malformed signature: parameters exceed field/group order")]
    MalformedSignature,
    #[error("invalid signature")]
    InvalidSignature,
    #[error("computation failed: {0}")]
    Computation(&'static str),
}
