//! Arkworks BLS12-381 group operations.
//!
//! This module provides elliptic curve group operations for the BLS12-381 curve
//! using the Arkworks library. It implements the [`CurvePoint`] and [`TargetGroup`]
//! traits for G1, G2, and Gt (pairing target group).
//!
//! # Feature Flag
//!
//! This module is only available when the `ark_bls12381` feature is enabled (and `ark_bn254` is not).
//!
//! # Groups
//!
//! - **G1**: First source group for pairings (points on E(Fq))
//! - **G2**: Second source group for pairings (points on E'(Fq2))
//! - **Gt**: Target group for pairings (elements in Fq12)

use ark_bls12_381::{Bls12_381, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::pairing::PairingOutput;
use ark_ec::{AffineRepr, CurveGroup, PrimeGroup, VariableBaseMSM};
use ark_ff::Zero;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use tracing::instrument;

use crate::{BackendError, CurvePoint, Fr, TargetGroup};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// G1 group element wrapper for the Arkworks BLS12-381 backend.
pub struct G1(pub G1Projective);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// G2 group element wrapper for the Arkworks BLS12-381 backend.
pub struct G2(pub G2Projective);

/// Target group type for the Arkworks BLS12-381 backend.
pub type Gt = PairingOutput<Bls12_381>;

impl CurvePoint<Fr> for G1 {
    type Affine = G1Affine;
    type Repr = Vec<u8>;

    fn identity() -> Self {
        G1(G1Projective::zero())
    }

    fn generator() -> Self {
        G1(<G1Projective as PrimeGroup>::generator())
    }

    fn is_identity(&self) -> bool {
        self.0.is_zero()
    }

    fn from_affine(affine: &Self::Affine) -> Self {
        G1(affine.into_group())
    }

    fn to_affine(&self) -> Self::Affine {
        self.0.into_affine()
    }

    fn add(&self, other: &Self) -> Self {
        G1(self.0 + other.0)
    }

    fn sub(&self, other: &Self) -> Self {
        G1(self.0 - other.0)
    }

    fn negate(&self) -> Self {
        G1(-self.0)
    }

    fn mul_scalar(&self, scalar: &Fr) -> Self {
        G1(self.0 * scalar)
    }

    fn batch_normalize(points: &[Self]) -> Vec<Self::Affine> {
        let projective: Vec<G1Projective> = points.iter().map(|p| p.0).collect();
        <G1Projective as CurveGroup>::normalize_batch(&projective)
    }

    #[instrument(level = "trace", skip_all, fields(len = points.len()))]
    fn multi_scalar_multiplication(points: &[Self], scalars: &[Fr]) -> Result<Self, BackendError> {
        let affine_points = Self::batch_normalize(points);
        G1Projective::msm(&affine_points, scalars)
            .map(G1)
            .map_err(|_| BackendError::Math("points and scalars must have the same length"))
    }

    fn to_repr(&self) -> Self::Repr {
        let mut bytes = Vec::new();
        self.to_affine()
            .serialize_compressed(&mut bytes)
            .expect("point serialization");
        bytes
    }

    fn from_repr(bytes: &[u8]) -> Result<Self, BackendError> {
        G1Affine::deserialize_compressed(bytes)
            .map(|affine| Self::from_affine(&affine))
            .map_err(|_| BackendError::Serialization("invalid G1 bytes"))
    }
}

impl CurvePoint<Fr> for G2 {
    type Affine = G2Affine;
    type Repr = Vec<u8>;

    fn identity() -> Self {
        G2(G2Projective::zero())
    }

    fn generator() -> Self {
        G2(<G2Projective as PrimeGroup>::generator())
    }

    fn is_identity(&self) -> bool {
        self.0.is_zero()
    }

    fn from_affine(affine: &Self::Affine) -> Self {
        G2(affine.into_group())
    }

    fn to_affine(&self) -> Self::Affine {
        self.0.into_affine()
    }

    fn add(&self, other: &Self) -> Self {
        G2(self.0 + other.0)
    }

    fn sub(&self, other: &Self) -> Self {
        G2(self.0 - other.0)
    }

    fn negate(&self) -> Self {
        G2(-self.0)
    }

    fn mul_scalar(&self, scalar: &Fr) -> Self {
        G2(self.0 * scalar)
    }

    fn batch_normalize(points: &[Self]) -> Vec<Self::Affine> {
        let projective: Vec<G2Projective> = points.iter().map(|p| p.0).collect();
        <G2Projective as CurveGroup>::normalize_batch(&projective)
    }

    #[instrument(level = "trace", skip_all, fields(len = points.len()))]
    fn multi_scalar_multiplication(points: &[Self], scalars: &[Fr]) -> Result<Self, BackendError> {
        let affine_points = Self::batch_normalize(points);
        G2Projective::msm(&affine_points, scalars)
            .map(G2)
            .map_err(|_| BackendError::Math("points and scalars must have the same length"))
    }

    fn to_repr(&self) -> Self::Repr {
        let mut bytes = Vec::new();
        self.to_affine()
            .serialize_compressed(&mut bytes)
            .expect("point serialization");
        bytes
    }

    fn from_repr(bytes: &[u8]) -> Result<Self, BackendError> {
        G2Affine::deserialize_compressed(bytes)
            .map(|affine| Self::from_affine(&affine))
            .map_err(|_| BackendError::Serialization("invalid G2 bytes"))
    }
}

impl TargetGroup for Gt {
    type Scalar = Fr;

    fn identity() -> Self {
        <Gt as Zero>::zero()
    }
}
