//! Fixed-width 256-bit big-endian integer encoding.
//!
//! Scalars (mod `N`) and field elements (mod `Q`) share the same 32-byte width but belong
//! to different domains. Raw integers are [U256], scalars are [Scalar], and field elements
//! are [FieldElement], so a value cannot silently cross from one domain to the other.

use crate::params::{INTEGER_LENGTH, N, Q};
use k256::{
    elliptic_curve::{
        bigint::{Encoding, U256},
        ops::Reduce,
        PrimeField,
    },
    FieldElement, Scalar,
};

/// Encodes an integer as 32 big-endian bytes, zero-padded on the left.
pub fn encode(value: &U256) -> [u8; INTEGER_LENGTH] {
    value.to_be_bytes()
}

/// Decodes 32 big-endian bytes into an integer.
///
/// Any input is accepted; range validation is left to the caller.
pub fn decode(bytes: &[u8; INTEGER_LENGTH]) -> U256 {
    U256::from_be_bytes(*bytes)
}

/// Encodes a scalar.
pub fn encode_scalar(scalar: &Scalar) -> [u8; INTEGER_LENGTH] {
    scalar.to_bytes().into()
}

/// Encodes a field element.
pub fn encode_field(element: &FieldElement) -> [u8; INTEGER_LENGTH] {
    element.to_bytes().into()
}

/// Decodes a scalar, returning `None` if the encoded integer is not below `N`.
pub fn decode_scalar(bytes: &[u8; INTEGER_LENGTH]) -> Option<Scalar> {
    if decode(bytes) >= N {
        return None;
    }
    Scalar::from_repr((*bytes).into()).into()
}

/// Decodes a field element, returning `None` if the encoded integer is not below `Q`.
pub fn decode_field(bytes: &[u8; INTEGER_LENGTH]) -> Option<FieldElement> {
    if decode(bytes) >= Q {
        return None;
    }
    FieldElement::from_bytes(&(*bytes).into()).into()
}

/// Interprets 32 bytes as an integer and reduces it modulo `N`.
pub fn reduce_scalar(bytes: &[u8; INTEGER_LENGTH]) -> Scalar {
    <Scalar as Reduce<U256>>::reduce(decode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use commonware_utils::from_hex_formatted;

    fn bytes(value: &str) -> [u8; INTEGER_LENGTH] {
        from_hex_formatted(value).unwrap().try_into().unwrap()
    }

    #[test]
    fn test_encode_pads_left() {
        let encoded = encode(&U256::from_u64(1));
        assert_eq!(encoded[..31], [0u8; 31]);
        assert_eq!(encoded[31], 1);
        assert_eq!(decode(&encoded), U256::ONE);
    }

    #[test]
    fn test_encode_full_width() {
        let encoded = encode(&U256::MAX);
        assert_eq!(encoded, [0xff; INTEGER_LENGTH]);
    }

    #[test]
    fn test_decode_accepts_out_of_range() {
        let value = decode(&[0xff; INTEGER_LENGTH]);
        assert!(value > N);
        assert!(value > Q);
    }

    #[test]
    fn test_decode_scalar_rejects_order() {
        let order = encode(&N);
        assert!(decode_scalar(&order).is_none());

        let below = encode(&N.wrapping_sub(&U256::ONE));
        let scalar = decode_scalar(&below).unwrap();
        assert_eq!(scalar, -Scalar::ONE);
        assert_eq!(encode_scalar(&scalar), below);
    }

    #[test]
    fn test_decode_field_rejects_modulus() {
        let modulus = bytes("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F");
        assert!(decode_field(&modulus).is_none());

        let below = encode(&Q.wrapping_sub(&U256::ONE));
        let element = decode_field(&below).unwrap();
        assert_eq!(encode_field(&element), below);
    }

    #[test]
    fn test_field_accepts_values_above_order() {
        // Field elements may exceed N, scalars may not.
        let value = encode(&N);
        assert!(decode_field(&value).is_some());
        assert!(decode_scalar(&value).is_none());
    }

    #[test]
    fn test_reduce_scalar_wraps() {
        let order = encode(&N);
        assert_eq!(reduce_scalar(&order), Scalar::ZERO);

        let above = encode(&N.wrapping_add(&U256::from_u64(5)));
        assert_eq!(reduce_scalar(&above), Scalar::from(5u64));

        let small = encode(&U256::from_u64(7));
        assert_eq!(reduce_scalar(&small), Scalar::from(7u64));
    }
}
