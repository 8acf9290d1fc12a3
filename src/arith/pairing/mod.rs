use std::fmt::Debug;

#[cfg(feature = "ark_bn254")]
mod ark_bn254;
#[cfg(feature = "ark_bn254")]
pub use ark_bn254::PairingEngine;

#[cfg(all(feature = "ark_bls12381", not(feature = "ark_bn254")))]
mod ark_bls12_381;
#[cfg(all(feature = "ark_bls12381", not(feature = "ark_bn254")))]
pub use ark_bls12_381::PairingEngine;

use crate::{BackendError, CurvePoint, FieldElement, TargetGroup};

/// Main backend trait that ties together the group library operations.
///
/// This is the trait the commitment scheme is generic over. It aggregates the
/// scalar field, both source groups and the target group, and provides the
/// pairing itself. [`PairingEngine`] is the implementation for the curve
/// selected at compile time.
///
/// # Type Parameters
///
/// - `Scalar`: The scalar field type (Fr)
/// - `G1`: The first elliptic curve group
/// - `G2`: The second elliptic curve group
/// - `Target`: The pairing target group (GT)
///
/// # Example
///
/// ```rust
/// use kzg_multiopen::{CurvePoint, FieldElement, Fr, PairingBackend, PairingEngine};
///
/// type G1 = <PairingEngine as PairingBackend>::G1;
/// type G2 = <PairingEngine as PairingBackend>::G2;
///
/// let a = Fr::from_u64(6);
/// let b = Fr::from_u64(7);
///
/// // e(a·P, b·Q) = e(ab·P, Q)
/// let lhs = PairingEngine::pairing(&G1::generator().mul_scalar(&a), &G2::generator().mul_scalar(&b));
/// let rhs = PairingEngine::pairing(&G1::generator().mul_scalar(&(a * b)), &G2::generator());
/// assert_eq!(lhs, rhs);
/// ```
pub trait PairingBackend: Send + Sync + Debug + Sized + 'static {
    /// Scalar field type (Fr).
    type Scalar: FieldElement;
    /// First curve group (G1).
    type G1: CurvePoint<Self::Scalar>;
    /// Second curve group (G2).
    type G2: CurvePoint<Self::Scalar>;
    /// Pairing target group (GT).
    type Target: TargetGroup<Scalar = Self::Scalar>;

    /// Computes the bilinear pairing: `e(g1, g2) -> GT`.
    ///
    /// The pairing satisfies bilinearity: `e(a*P, b*Q) = e(P, Q)^(ab)`.
    fn pairing(g1: &Self::G1, g2: &Self::G2) -> Self::Target;

    /// Computes a product of pairings: `∏ e(g1[i], g2[i])`.
    ///
    /// This is more efficient than computing individual pairings and multiplying.
    /// Returns an error if the input arrays have different lengths.
    fn multi_pairing(g1: &[Self::G1], g2: &[Self::G2]) -> Result<Self::Target, BackendError>;
}
