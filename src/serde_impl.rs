//! Serde serialization support for commitment types.
//!
//! This module provides serde `Serialize` and `Deserialize` implementations
//! for the values that travel between a prover and a verifier: polynomials,
//! point sets, commitments, proofs and the reference string itself.
//!
//! # Serialization Strategy
//!
//! - **Curve Points** (G1, G2): Serialized using compressed byte representations via `to_repr()`
//! - **Scalars**: Serialized as little-endian byte arrays via `to_repr()`
//! - **Vectors**: Serialized as arrays
//!
//! Deserialization re-validates everything: scalars must be canonical, points
//! must be in the prime-order subgroup, polynomials are re-normalized and point
//! sets reject duplicate x-coordinates.
//!
//! # Example
//!
//! ```rust
//! use kzg_multiopen::{
//!     Commitment, DensePolynomial, FieldElement, Fr, KZG, PairingEngine, Polynomial,
//!     PolynomialCommitment, SRS,
//! };
//!
//! let srs: SRS<PairingEngine> = KZG::setup(4, &[9u8; 32]).unwrap();
//! let p = DensePolynomial::from_coefficients_vec(vec![Fr::from_u64(1), Fr::from_u64(2)]);
//! let commitment = KZG::commit_g1(&srs, &p).unwrap();
//!
//! // Serialize to JSON
//! let json = serde_json::to_string(&commitment).unwrap();
//!
//! // Deserialize from JSON
//! let back: Commitment<PairingEngine> = serde_json::from_str(&json).unwrap();
//! assert_eq!(back, commitment);
//! ```

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    Commitment, CurvePoint, DensePolynomial, FieldElement, PairingBackend, PointSet, Polynomial,
    Proof, SRS,
};

fn field_from_bytes<F, E>(bytes: &[u8]) -> Result<F, E>
where
    F: FieldElement,
    E: de::Error,
{
    F::from_repr(bytes).map_err(E::custom)
}

fn curve_point_from_bytes<C, F, E>(bytes: &[u8]) -> Result<C, E>
where
    C: CurvePoint<F>,
    F: FieldElement,
    E: de::Error,
{
    C::from_repr(bytes).map_err(E::custom)
}

fn field_to_bytes<F: FieldElement>(value: &F) -> Vec<u8> {
    value.to_repr().as_ref().to_vec()
}

fn points_to_bytes<C, F>(points: &[C]) -> Vec<Vec<u8>>
where
    C: CurvePoint<F>,
    F: FieldElement,
{
    points.iter().map(|p| p.to_repr().as_ref().to_vec()).collect()
}

impl<F: FieldElement> Serialize for DensePolynomial<F> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.coeffs()
            .iter()
            .map(field_to_bytes)
            .collect::<Vec<Vec<u8>>>()
            .serialize(serializer)
    }
}

impl<'de, F: FieldElement> Deserialize<'de> for DensePolynomial<F> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<Vec<u8>>::deserialize(deserializer)?;
        let coeffs = raw
            .iter()
            .map(|bytes| field_from_bytes::<F, D::Error>(bytes))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DensePolynomial::from_coefficients_vec(coeffs))
    }
}

impl<F: FieldElement> Serialize for PointSet<F> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.points()
            .iter()
            .map(|(x, y)| (field_to_bytes(x), field_to_bytes(y)))
            .collect::<Vec<(Vec<u8>, Vec<u8>)>>()
            .serialize(serializer)
    }
}

impl<'de, F: FieldElement> Deserialize<'de> for PointSet<F> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<(Vec<u8>, Vec<u8>)>::deserialize(deserializer)?;
        let points = raw
            .iter()
            .map(|(x, y)| {
                Ok((
                    field_from_bytes::<F, D::Error>(x)?,
                    field_from_bytes::<F, D::Error>(y)?,
                ))
            })
            .collect::<Result<Vec<_>, D::Error>>()?;
        PointSet::new(points).map_err(de::Error::custom)
    }
}

impl<B: PairingBackend> Serialize for Commitment<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(self.0.to_repr().as_ref())
    }
}

impl<'de, B: PairingBackend> Deserialize<'de> for Commitment<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        curve_point_from_bytes::<B::G1, B::Scalar, D::Error>(&bytes).map(Commitment)
    }
}

impl<B: PairingBackend> Serialize for Proof<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(self.0.to_repr().as_ref())
    }
}

impl<'de, B: PairingBackend> Deserialize<'de> for Proof<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        curve_point_from_bytes::<B::G1, B::Scalar, D::Error>(&bytes).map(Proof)
    }
}

impl<B: PairingBackend> Serialize for SRS<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("SRS", 2)?;
        state.serialize_field(
            "powers_of_g",
            &points_to_bytes::<B::G1, B::Scalar>(&self.powers_of_g),
        )?;
        state.serialize_field(
            "powers_of_h",
            &points_to_bytes::<B::G2, B::Scalar>(&self.powers_of_h),
        )?;
        state.end()
    }
}

impl<'de, B: PairingBackend> Deserialize<'de> for SRS<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct SrsHelper {
            powers_of_g: Vec<Vec<u8>>,
            powers_of_h: Vec<Vec<u8>>,
        }

        let helper = SrsHelper::deserialize(deserializer)?;
        if helper.powers_of_g.len() != helper.powers_of_h.len() {
            return Err(de::Error::custom("SRS powers have mismatched lengths"));
        }
        if helper.powers_of_g.len() < 2 {
            return Err(de::Error::custom("SRS needs at least two powers"));
        }

        let powers_of_g = helper
            .powers_of_g
            .iter()
            .map(|bytes| curve_point_from_bytes::<B::G1, B::Scalar, D::Error>(bytes))
            .collect::<Result<Vec<_>, _>>()?;
        let powers_of_h = helper
            .powers_of_h
            .iter()
            .map(|bytes| curve_point_from_bytes::<B::G2, B::Scalar, D::Error>(bytes))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SRS {
            powers_of_g,
            powers_of_h,
        })
    }
}
