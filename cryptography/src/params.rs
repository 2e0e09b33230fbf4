//! Domain parameters of secp256k1.
//!
//! The group order, field modulus, and base point are fixed at compile time and are the
//! only state shared between calls.

use k256::{elliptic_curve::bigint::U256, ProjectivePoint};

/// Order of the group generated by [G] (`N`).
pub const N: U256 =
    U256::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");

/// Modulus of the base field (`Q`).
pub const Q: U256 =
    U256::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F");

/// Base point of the group.
pub const G: ProjectivePoint = ProjectivePoint::GENERATOR;

/// Width of every encoded scalar or field element.
pub const INTEGER_LENGTH: usize = 32;

/// Length of a message digest.
pub const DIGEST_LENGTH: usize = 32;

/// Length of an encoded private key.
pub const PRIVATE_KEY_LENGTH: usize = INTEGER_LENGTH;

/// Length of a compressed public key (Y-Parity || X).
pub const PUBLIC_KEY_LENGTH: usize = 1 + INTEGER_LENGTH;

/// Length of a signature (R.X || s).
pub const SIGNATURE_LENGTH: usize = 2 * INTEGER_LENGTH;

#[cfg(test)]
mod tests {
    use super::*;
    use k256::{
        elliptic_curve::{bigint::Encoding, Curve},
        FieldElement, Secp256k1,
    };

    #[test]
    fn test_order_matches_curve() {
        assert_eq!(N, Secp256k1::ORDER);
    }

    #[test]
    fn test_modulus_matches_field() {
        // Q - 1 is the largest canonical field element and Q itself is rejected
        let largest = (-FieldElement::ONE).normalize().to_bytes();
        assert_eq!(
            largest.as_slice(),
            Q.wrapping_sub(&U256::ONE).to_be_bytes().as_slice()
        );
        let modulus = FieldElement::from_bytes(&Q.to_be_bytes().into());
        assert!(bool::from(modulus.is_none()));
    }

    #[test]
    fn test_order_below_modulus() {
        assert!(N < Q);
    }
}
