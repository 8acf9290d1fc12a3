use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand_core::RngCore;

use crate::{BackendError, Error};

mod euclid;
pub(crate) use euclid::mod_inverse;

#[cfg(feature = "ark_bn254")]
mod ark_bn254;
#[cfg(feature = "ark_bn254")]
pub use ark_bn254::Fr;

#[cfg(all(feature = "ark_bls12381", not(feature = "ark_bn254")))]
mod ark_bls12_381;
#[cfg(all(feature = "ark_bls12381", not(feature = "ark_bn254")))]
pub use ark_bls12_381::Fr;

/// Field element abstraction for scalar field operations.
///
/// This trait abstracts over the scalar field Fr of the elliptic curve, i.e.
/// the integers modulo the prime group order `r`. Every value handed out by an
/// implementation is canonical, in `[0, r)`.
///
/// # Example
///
/// ```rust
/// use kzg_multiopen::{FieldElement, Fr};
///
/// let minus_one = Fr::from_i64(-1);
/// assert_eq!(minus_one + Fr::one(), Fr::zero());
///
/// let three = Fr::from_u64(3);
/// let inv = three.invert().expect("non-zero element");
/// assert_eq!(three * inv, Fr::one());
///
/// let bytes = three.to_repr();
/// assert_eq!(Fr::from_repr(&bytes).unwrap(), three);
/// ```
pub trait FieldElement:
    Clone
    + Copy
    + Send
    + Sync
    + Debug
    + Eq
    + Hash
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
{
    /// Byte representation type (compressed canonical encoding).
    type Repr: AsRef<[u8]> + Debug + Send + Sync + Clone + 'static;

    /// Number of bytes of the canonical encoding.
    const BYTES: usize;

    /// Returns the additive identity (zero) element.
    fn zero() -> Self;

    /// Returns the multiplicative identity (one) element.
    fn one() -> Self;

    fn is_zero(&self) -> bool;

    /// Generates a uniformly random field element using the provided RNG.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;

    /// Computes the multiplicative inverse, returning `None` for zero.
    ///
    /// Implementations run the iterative extended Euclidean algorithm over the
    /// fixed-width integer representation.
    fn invert(&self) -> Option<Self>;

    /// Convert u64 to self.
    fn from_u64(n: u64) -> Self;

    /// Reduces a signed integer into `[0, r)`; `-1` maps to `r - 1`.
    fn from_i64(n: i64) -> Self;

    /// Interprets `bytes` as a little-endian integer of any length and reduces it modulo `r`.
    fn from_le_bytes_mod_order(bytes: &[u8]) -> Self;

    /// Serializes this field element to its byte representation.
    fn to_repr(&self) -> Self::Repr;

    /// Deserializes a field element from its byte representation.
    ///
    /// Returns an error if the representation is invalid (e.g., not reduced modulo the field order).
    fn from_repr(bytes: &[u8]) -> Result<Self, BackendError>;
}

/// Multiplicative inverse of `x`, failing with [`Error::DivisionByZero`] when `x ≡ 0`.
pub fn inverse<F: FieldElement>(x: &F) -> Result<F, Error> {
    x.invert().ok_or(Error::DivisionByZero)
}

/// Field division `a / b`.
pub fn divide<F: FieldElement>(a: &F, b: &F) -> Result<F, Error> {
    Ok(*a * inverse(b)?)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn inverse_of_random_elements() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            let a = Fr::random(&mut rng);
            if a.is_zero() {
                continue;
            }
            let inv = inverse(&a).unwrap();
            assert_eq!(a * inv, Fr::one());
        }
    }

    #[test]
    fn inverse_of_zero_fails() {
        assert!(matches!(inverse(&Fr::zero()), Err(Error::DivisionByZero)));
        assert!(matches!(
            divide(&Fr::one(), &Fr::zero()),
            Err(Error::DivisionByZero)
        ));
    }

    #[test]
    fn divide_undoes_multiply() {
        let a = Fr::from_u64(1234);
        let b = Fr::from_i64(-99);
        assert_eq!(divide(&(a * b), &b).unwrap(), a);
    }

    #[test]
    fn signed_reduction_is_canonical() {
        assert_eq!(Fr::from_i64(-5) + Fr::from_u64(5), Fr::zero());
        assert_eq!(Fr::from_i64(42), Fr::from_u64(42));
        assert_eq!(Fr::from_i64(i64::MIN) + Fr::from_u64(1 << 63), Fr::zero());
    }

    #[test]
    fn wide_bytes_reduce() {
        assert_eq!(Fr::from_le_bytes_mod_order(&[1, 1]), Fr::from_u64(257));
        let wide = [0xffu8; 64];
        let reduced = Fr::from_le_bytes_mod_order(&wide);
        assert_eq!(Fr::from_repr(reduced.to_repr().as_ref()).unwrap(), reduced);
    }

    #[test]
    fn repr_rejects_garbage() {
        assert!(Fr::from_repr(&[0xffu8; 32]).is_err());
        assert!(Fr::from_repr(&[1, 2, 3]).is_err());
    }
}
