use std::fmt::Debug;

use crate::{BackendError, FieldElement};

#[cfg(feature = "ark_bn254")]
mod ark_bn254;
#[cfg(feature = "ark_bn254")]
pub use ark_bn254::{G1, G2, Gt};

#[cfg(all(feature = "ark_bls12381", not(feature = "ark_bn254")))]
mod ark_bls12_381;
#[cfg(all(feature = "ark_bls12381", not(feature = "ark_bn254")))]
pub use ark_bls12_381::{G1, G2, Gt};

/// Elliptic curve point abstraction for G1 and G2 groups.
///
/// This trait provides operations on elliptic curve points in projective coordinates,
/// with support for conversion to/from affine coordinates for serialization.
///
/// # Type Parameters
///
/// - `F`: The scalar field type used for scalar multiplication
/// - `Affine`: The affine representation of the curve point
///
/// # Example
///
/// ```rust
/// use kzg_multiopen::{CurvePoint, FieldElement, Fr, G1};
///
/// let scalar = Fr::from_u64(5);
///
/// // Point operations
/// let g = G1::generator();
/// let point = g.mul_scalar(&scalar);
/// let doubled = point.add(&point);
/// assert_eq!(doubled, g.mul_scalar(&Fr::from_u64(10)));
/// assert!(point.add(&point.negate()).is_identity());
/// ```
pub trait CurvePoint<F: FieldElement>:
    Clone + Copy + Send + Sync + Debug + PartialEq + Eq + 'static
{
    /// Associated affine representation.
    type Affine: Clone + Debug + Send + Sync + 'static + Copy;

    /// Byte representation for serialization (compressed affine encoding).
    type Repr: AsRef<[u8]> + Debug + Send + Sync + Clone + 'static;

    /// Returns the point at infinity (identity element).
    fn identity() -> Self;

    /// Returns the standard generator for this group.
    fn generator() -> Self;

    /// Checks if this point is the identity element.
    fn is_identity(&self) -> bool;

    /// Converts from affine to projective coordinates.
    fn from_affine(affine: &Self::Affine) -> Self;

    /// Converts from projective to affine coordinates.
    fn to_affine(&self) -> Self::Affine;

    /// Performs elliptic curve point addition.
    fn add(&self, other: &Self) -> Self;

    /// Performs elliptic curve point subtraction.
    fn sub(&self, other: &Self) -> Self;

    /// Returns the additive inverse of this point.
    fn negate(&self) -> Self;

    /// Performs scalar multiplication: returns `scalar * self`.
    fn mul_scalar(&self, scalar: &F) -> Self;

    /// Batch normalizes multiple projective points to affine coordinates.
    ///
    /// This is more efficient than normalizing points individually due to
    /// Montgomery's trick for batch inversion.
    fn batch_normalize(points: &[Self]) -> Vec<Self::Affine>;

    /// Computes `Σ scalars[i] · points[i]`.
    ///
    /// Fails when the slices have different lengths.
    fn multi_scalar_multiplication(points: &[Self], scalars: &[F]) -> Result<Self, BackendError>;

    /// Serializes this point to its compressed byte representation.
    fn to_repr(&self) -> Self::Repr;

    /// Deserializes a point, checking that it is on the curve and in the prime-order subgroup.
    fn from_repr(bytes: &[u8]) -> Result<Self, BackendError>;
}

/// Pairing target group (GT) abstraction.
///
/// This trait represents the target group of the pairing operation, which is
/// a multiplicative subgroup of the extension field. Verification only needs
/// equality and the identity.
pub trait TargetGroup: Clone + Send + Sync + Debug + PartialEq + Eq + 'static {
    /// Scalar field of the pairing.
    type Scalar: FieldElement;

    /// Returns the multiplicative identity element.
    fn identity() -> Self;
}
