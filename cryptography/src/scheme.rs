//! Schnorr signatures over secp256k1 with quadratic-residue nonces.
//!
//! Public keys are compressed (SEC 1, Version 2.0, Section 2.3.3) and signatures are the
//! 64-byte concatenation `R.X || s`. The `Y` coordinate of the nonce point is never
//! transmitted: the signer negates its nonce whenever `R.Y` is not a quadratic residue, and
//! the verifier only accepts reconstructed points whose `Y` is one.
//!
//! Nonces are derived deterministically from the private key and digest (see [crate::nonce]),
//! so signing the same digest twice yields byte-identical signatures.
//!
//! # Example
//! ```rust
//! use secp256k1_schnorr::{PrivateKey, Signer, Verifier};
//!
//! // Load a private key
//! let mut raw = [0u8; 32];
//! raw[31] = 1;
//! let private_key = PrivateKey::from_bytes(&raw).unwrap();
//!
//! // Sign a 32-byte digest
//! let digest = [0u8; 32];
//! let signature = private_key.sign(&digest).unwrap();
//!
//! // Verify the signature
//! assert!(private_key.public_key().verify(&digest, &signature));
//! ```

use crate::{
    challenge, codec, curve, nonce,
    params::{
        DIGEST_LENGTH, INTEGER_LENGTH, PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH,
    },
    point, Error,
};
use bytes::{Buf, BufMut};
use commonware_codec::{Error as CodecError, FixedSize, Read, ReadExt, Write};
use commonware_utils::{hex, Array, Span};
use k256::{
    elliptic_curve::subtle::{ConditionallySelectable, ConstantTimeEq},
    AffinePoint, ProjectivePoint, Scalar,
};
use rand::{CryptoRng, Rng, SeedableRng};
use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    ops::Deref,
};
use tracing::{debug, warn};
use zeroize::{Zeroize, ZeroizeOnDrop};

const CURVE_NAME: &str = "secp256k1-schnorr";

/// Secp256k1 private scalar `d`, guaranteed to lie in `[1, N-1]`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    raw: [u8; PRIVATE_KEY_LENGTH],
    scalar: Scalar,
    #[zeroize(skip)]
    public_key: PublicKey,
}

impl PrivateKey {
    /// Parses a big-endian private scalar.
    ///
    /// Fails with [Error::InvalidPrivateKey] unless `1 ≤ d ≤ N-1`.
    pub fn from_bytes(raw: &[u8; PRIVATE_KEY_LENGTH]) -> Result<Self, Error> {
        let scalar = codec::decode_scalar(raw).ok_or(Error::InvalidPrivateKey)?;
        if bool::from(scalar.is_zero()) {
            return Err(Error::InvalidPrivateKey);
        }
        let point = curve::base_mul(&scalar).to_affine();
        let public_key = PublicKey::from_point(point)?;
        Ok(Self {
            raw: *raw,
            scalar,
            public_key,
        })
    }

    /// Create a fresh [PrivateKey] using the supplied RNG.
    pub fn from_rng<R: Rng + CryptoRng>(rng: &mut R) -> Self {
        loop {
            let mut raw = [0u8; PRIVATE_KEY_LENGTH];
            rng.fill_bytes(&mut raw);
            let key = Self::from_bytes(&raw);
            raw.zeroize();
            if let Ok(key) = key {
                return key;
            }
        }
    }

    /// Create a [PrivateKey] from a seed.
    ///
    /// # Warning
    ///
    /// This function is insecure and should only be used for examples
    /// and testing.
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        Self::from_rng(&mut rng)
    }
}

impl crate::Signer for PrivateKey {
    type Signature = Signature;
    type PublicKey = PublicKey;

    fn public_key(&self) -> Self::PublicKey {
        self.public_key
    }

    fn sign(&self, digest: &[u8; DIGEST_LENGTH]) -> Result<Self::Signature, Error> {
        // R = k0·G
        let k0 = nonce::derive(&self.raw, digest);
        let (rx, ry) = curve::coordinates(&curve::base_mul(&k0).to_affine()).ok_or_else(|| {
            warn!("nonce point is the identity");
            Error::Computation("nonce point is the identity")
        })?;

        // Use N - k0 when R.Y is not a quadratic residue (R.X is unchanged)
        let k = Scalar::conditional_select(&-k0, &k0, curve::is_square(&ry));

        // s = k + e·d
        let rx = codec::encode_field(&rx);
        let e = challenge::compute(&self.public_key.raw, &rx, digest);
        let s = k + e * self.scalar;

        Ok(Signature::from_parts(&rx, &codec::encode_scalar(&s)))
    }
}

impl Write for PrivateKey {
    fn write(&self, buf: &mut impl BufMut) {
        self.raw.write(buf);
    }
}

impl Read for PrivateKey {
    type Cfg = ();

    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, CodecError> {
        let mut raw = <[u8; Self::SIZE]>::read(buf)?;
        let result = Self::from_bytes(&raw);
        raw.zeroize();
        result.map_err(|e| CodecError::Wrapped(CURVE_NAME, e.into()))
    }
}

impl FixedSize for PrivateKey {
    const SIZE: usize = PRIVATE_KEY_LENGTH;
}

impl Span for PrivateKey {}

impl Array for PrivateKey {}

impl Eq for PrivateKey {}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.raw[..].ct_eq(&other.raw[..]).into()
    }
}

impl Hash for PrivateKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl Ord for PrivateKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl PartialOrd for PrivateKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl AsRef<[u8]> for PrivateKey {
    fn as_ref(&self) -> &[u8] {
        &self.raw
    }
}

impl Deref for PrivateKey {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.raw
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrivateKey([REDACTED])")
    }
}

impl Display for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[REDACTED]")
    }
}

/// Secp256k1 public point `P = d·G`, stored alongside its compressed encoding.
#[derive(Clone, Copy)]
pub struct PublicKey {
    raw: [u8; PUBLIC_KEY_LENGTH],
    point: AffinePoint,
}

impl PublicKey {
    fn from_point(point: AffinePoint) -> Result<Self, Error> {
        let raw = point::serialize_compressed(&point)?;
        Ok(Self { raw, point })
    }

    /// Parses a compressed public key.
    pub fn from_bytes(raw: &[u8; PUBLIC_KEY_LENGTH]) -> Result<Self, Error> {
        let point = point::parse_compressed(raw)?;
        Ok(Self { raw: *raw, point })
    }

    /// Returns the compressed encoding of the key.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.raw
    }

    /// Returns the underlying curve point.
    pub fn as_affine(&self) -> &AffinePoint {
        &self.point
    }

}

impl crate::Verifier for PublicKey {
    type Signature = Signature;

    fn check(
        &self,
        digest: &[u8; DIGEST_LENGTH],
        signature: &Self::Signature,
    ) -> Result<(), Error> {
        // Reject out-of-range components before any curve arithmetic
        let (r, s) = (signature.r(), signature.s());
        if codec::decode_field(&r).is_none() {
            debug!(signature = %signature, "r exceeds field modulus");
            return Err(Error::MalformedSignature);
        }
        let Some(s_scalar) = codec::decode_scalar(&s) else {
            debug!(signature = %signature, "s exceeds group order");
            return Err(Error::MalformedSignature);
        };
        let zero = [0u8; INTEGER_LENGTH];
        if r == zero || s == zero {
            debug!(signature = %signature, "zero signature component");
            return Err(Error::MalformedSignature);
        }

        // R' = s·G + (N - e)·P
        let e = challenge::compute(&self.raw, &r, digest);
        let reconstructed = curve::add(
            &curve::base_mul(&s_scalar),
            &curve::mul(&ProjectivePoint::from(self.point), &-e),
        );
        if curve::is_identity(&reconstructed) {
            debug!(public_key = %self, "reconstructed nonce is the identity");
            return Err(Error::InvalidSignature);
        }
        let Some((x, y)) = curve::coordinates(&reconstructed.to_affine()) else {
            return Err(Error::InvalidSignature);
        };

        // Accept iff R'.X == r and Jacobi(R'.Y, Q) == +1
        let matches = codec::encode_field(&x)[..].ct_eq(&r[..]);
        if !bool::from(matches & curve::is_square(&y)) {
            debug!(public_key = %self, "signature does not match");
            return Err(Error::InvalidSignature);
        }
        Ok(())
    }
}

impl From<&PrivateKey> for PublicKey {
    fn from(value: &PrivateKey) -> Self {
        value.public_key
    }
}

impl Write for PublicKey {
    fn write(&self, buf: &mut impl BufMut) {
        self.raw.write(buf);
    }
}

impl Read for PublicKey {
    type Cfg = ();

    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, CodecError> {
        let raw = <[u8; Self::SIZE]>::read(buf)?;
        Self::from_bytes(&raw).map_err(|e| CodecError::Wrapped(CURVE_NAME, e.into()))
    }
}

impl FixedSize for PublicKey {
    const SIZE: usize = PUBLIC_KEY_LENGTH;
}

impl Span for PublicKey {}

impl Array for PublicKey {}

impl Eq for PublicKey {}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Hash for PublicKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl Ord for PublicKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl PartialOrd for PublicKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.raw
    }
}

impl Deref for PublicKey {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.raw
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex(&self.raw))
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex(&self.raw))
    }
}

/// Schnorr signature `R.X || s` (64 bytes).
///
/// Any 64 bytes form a [Signature]; range checks on `r` and `s` happen during verification so
/// that malformed input surfaces as [Error::MalformedSignature].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature {
    raw: [u8; SIGNATURE_LENGTH],
}

impl Signature {
    /// Builds a signature from its encoded components.
    pub fn from_parts(r: &[u8; INTEGER_LENGTH], s: &[u8; INTEGER_LENGTH]) -> Self {
        let mut raw = [0u8; SIGNATURE_LENGTH];
        raw[..INTEGER_LENGTH].copy_from_slice(r);
        raw[INTEGER_LENGTH..].copy_from_slice(s);
        Self { raw }
    }

    /// The X coordinate of the nonce point.
    pub fn r(&self) -> [u8; INTEGER_LENGTH] {
        let mut r = [0u8; INTEGER_LENGTH];
        r.copy_from_slice(&self.raw[..INTEGER_LENGTH]);
        r
    }

    /// The response scalar.
    pub fn s(&self) -> [u8; INTEGER_LENGTH] {
        let mut s = [0u8; INTEGER_LENGTH];
        s.copy_from_slice(&self.raw[INTEGER_LENGTH..]);
        s
    }

    /// Returns the 64-byte encoding.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        self.raw
    }
}

impl From<[u8; SIGNATURE_LENGTH]> for Signature {
    fn from(raw: [u8; SIGNATURE_LENGTH]) -> Self {
        Self { raw }
    }
}

impl Write for Signature {
    fn write(&self, buf: &mut impl BufMut) {
        self.raw.write(buf);
    }
}

impl Read for Signature {
    type Cfg = ();

    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, CodecError> {
        let raw = <[u8; Self::SIZE]>::read(buf)?;
        Ok(Self { raw })
    }
}

impl FixedSize for Signature {
    const SIZE: usize = SIGNATURE_LENGTH;
}

impl Span for Signature {}

impl Array for Signature {}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.raw
    }
}

impl Deref for Signature {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.raw
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex(&self.raw))
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex(&self.raw))
    }
}
