use ark_bls12_381::Fr as ArkFr;
use ark_ff::{One, PrimeField, UniformRand, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use rand_core::RngCore;

use super::mod_inverse;
use crate::{BackendError, FieldElement};

pub type Fr = ArkFr;

impl FieldElement for Fr {
    type Repr = Vec<u8>;

    const BYTES: usize = 32;

    fn zero() -> Self {
        Zero::zero()
    }

    fn one() -> Self {
        One::one()
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Fr::rand(rng)
    }

    fn invert(&self) -> Option<Self> {
        mod_inverse(self)
    }

    fn from_u64(n: u64) -> Self {
        Fr::from(n)
    }

    fn from_i64(n: i64) -> Self {
        let magnitude = Fr::from(n.unsigned_abs());
        if n < 0 { -magnitude } else { magnitude }
    }

    fn from_le_bytes_mod_order(bytes: &[u8]) -> Self {
        <Fr as PrimeField>::from_le_bytes_mod_order(bytes)
    }

    fn to_repr(&self) -> Self::Repr {
        let mut bytes = Vec::with_capacity(Self::BYTES);
        self.serialize_compressed(&mut bytes)
            .expect("scalar serialization");
        bytes
    }

    fn from_repr(bytes: &[u8]) -> Result<Self, BackendError> {
        if bytes.len() != Self::BYTES {
            return Err(BackendError::Serialization("invalid scalar length"));
        }
        Self::deserialize_compressed(bytes)
            .map_err(|_| BackendError::Serialization("invalid scalar bytes"))
    }
}
