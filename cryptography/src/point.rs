//! Compressed point encoding (SEC 1, Version 2.0, Section 2.3.3).
//!
//! A compressed point is `0x02 || X` when `Y` is even and `0x03 || X` when `Y` is odd,
//! with `X` always encoded as 32 big-endian bytes.

use crate::{
    codec, curve,
    params::{INTEGER_LENGTH, PUBLIC_KEY_LENGTH},
    Error,
};
use k256::{
    elliptic_curve::sec1::{EncodedPoint, FromEncodedPoint},
    AffinePoint, Secp256k1,
};

const EVEN: u8 = 0x02;
const ODD: u8 = 0x03;

/// Serializes `point` in compressed form.
///
/// The point at infinity has no encoding.
pub fn serialize_compressed(point: &AffinePoint) -> Result<[u8; PUBLIC_KEY_LENGTH], Error> {
    let (x, y) = curve::coordinates(point).ok_or(Error::InvalidPublicKey)?;
    let mut compressed = [0u8; PUBLIC_KEY_LENGTH];
    compressed[0] = if y.is_odd().into() { ODD } else { EVEN };
    compressed[1..].copy_from_slice(&codec::encode_field(&x));
    Ok(compressed)
}

/// Parses a compressed point.
///
/// Rejects unknown prefixes, `X ≥ Q`, and any `X` that is not the abscissa of a curve point.
pub fn parse_compressed(bytes: &[u8; PUBLIC_KEY_LENGTH]) -> Result<AffinePoint, Error> {
    if bytes[0] != EVEN && bytes[0] != ODD {
        return Err(Error::InvalidPublicKey);
    }
    let x = <&[u8; INTEGER_LENGTH]>::try_from(&bytes[1..]).map_err(|_| Error::InvalidPublicKey)?;
    codec::decode_field(x).ok_or(Error::InvalidPublicKey)?;
    let encoded =
        EncodedPoint::<Secp256k1>::from_bytes(bytes).map_err(|_| Error::InvalidPublicKey)?;
    Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
        .ok_or(Error::InvalidPublicKey)
}
