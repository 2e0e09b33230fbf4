//! Group operations consumed from `k256`.
//!
//! Nothing here implements curve arithmetic. These functions narrow the capability the
//! signature scheme needs: base and variable-base scalar multiplication, point addition,
//! coordinate extraction, and a quadratic-residue test over the base field.

use crate::params::G;
use k256::{
    elliptic_curve::{
        group::Group,
        sec1::ToEncodedPoint,
        subtle::{Choice, ConstantTimeEq},
    },
    AffinePoint, FieldElement, ProjectivePoint, Scalar,
};

/// Computes `k·G`.
pub fn base_mul(k: &Scalar) -> ProjectivePoint {
    G * k
}

/// Computes `k·P`.
pub fn mul(point: &ProjectivePoint, k: &Scalar) -> ProjectivePoint {
    point * k
}

/// Computes `P + Q`.
pub fn add(p: &ProjectivePoint, q: &ProjectivePoint) -> ProjectivePoint {
    p + q
}

/// Returns true if `point` is the point at infinity.
pub fn is_identity(point: &ProjectivePoint) -> bool {
    point.is_identity().into()
}

/// Returns the affine coordinates `(X, Y)` of `point`, or `None` for the point at infinity.
pub fn coordinates(point: &AffinePoint) -> Option<(FieldElement, FieldElement)> {
    let encoded = point.to_encoded_point(false);
    let x = Option::<FieldElement>::from(FieldElement::from_bytes(encoded.x()?))?;
    let y = Option::<FieldElement>::from(FieldElement::from_bytes(encoded.y()?))?;
    Some((x, y))
}

/// Returns true if the Jacobi symbol of `y` with respect to `Q` is `+1`.
///
/// Zero has symbol `0` and is rejected.
pub fn is_square(y: &FieldElement) -> Choice {
    let nonzero = !y.normalize().ct_eq(&FieldElement::ZERO);
    nonzero & y.sqrt().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_mul_one_is_generator() {
        assert_eq!(base_mul(&Scalar::ONE), ProjectivePoint::GENERATOR);
    }

    #[test]
    fn test_cancelling_terms_reach_identity() {
        let k = Scalar::from(42u64);
        let p = base_mul(&k);
        let neg = mul(&ProjectivePoint::GENERATOR, &(-k));
        let sum = add(&p, &neg);
        assert!(is_identity(&sum));
        assert!(coordinates(&sum.to_affine()).is_none());
    }

    #[test]
    fn test_generator_coordinates() {
        let (x, y) = coordinates(&ProjectivePoint::GENERATOR.to_affine()).unwrap();
        assert_eq!(
            commonware_utils::hex(&x.to_bytes()),
            "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
        assert_eq!(
            commonware_utils::hex(&y.to_bytes()),
            "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"
        );
    }

    #[test]
    fn test_square_and_negation() {
        // For Q ≡ 3 (mod 4), exactly one of y and -y is a square.
        let (_, y) = coordinates(&base_mul(&Scalar::from(7u64)).to_affine()).unwrap();
        let neg = y.negate(1).normalize();
        assert_ne!(bool::from(is_square(&y)), bool::from(is_square(&neg)));
    }

    #[test]
    fn test_zero_is_not_square() {
        assert!(!bool::from(is_square(&FieldElement::ZERO)));
        assert!(bool::from(is_square(&FieldElement::ONE)));
        assert!(bool::from(is_square(&FieldElement::ONE.square())));
    }
}
