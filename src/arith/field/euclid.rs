//! Binary extended Euclidean inversion over fixed-width integers.
//!
//! The running pair `(u, v)` starts at `(a, r)` and keeps the invariants
//! `b·a ≡ u` and `c·a ≡ v (mod r)`. Every iteration strips factors of two or
//! subtracts the smaller value from the larger one, so `u + v` strictly
//! decreases and the loop finishes within `2·log2(r)` iterations. No recursion,
//! no probabilistic steps.

use ark_ff::{BigInteger, PrimeField};

/// Inverse of `value` modulo the field order, or `None` for zero.
pub(crate) fn mod_inverse<P: PrimeField>(value: &P) -> Option<P> {
    let mut u = value.into_bigint();
    if u.is_zero() {
        return None;
    }
    let one = P::BigInt::from(1u64);
    let half = half_of_one::<P>()?;

    let mut v = P::MODULUS;
    let mut b = P::one();
    let mut c = P::zero();

    while u != one && v != one {
        while u.is_even() {
            u.div2();
            b *= half;
        }
        while v.is_even() {
            v.div2();
            c *= half;
        }
        if u >= v {
            u.sub_with_borrow(&v);
            b -= c;
        } else {
            v.sub_with_borrow(&u);
            c -= b;
        }
    }

    Some(if u == one { b } else { c })
}

/// `(r + 1) / 2`, the inverse of two.
fn half_of_one<P: PrimeField>() -> Option<P> {
    let mut half = P::MODULUS_MINUS_ONE_DIV_TWO;
    half.add_with_carry(&P::BigInt::from(1u64));
    P::from_bigint(half)
}

#[cfg(test)]
mod tests {
    use ark_ff::{Field, One, UniformRand, Zero};
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::Fr;

    #[test]
    fn matches_backend_inverse() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..128 {
            let a = Fr::rand(&mut rng);
            assert_eq!(mod_inverse(&a), Field::inverse(&a));
        }
    }

    #[test]
    fn small_and_edge_values() {
        assert_eq!(mod_inverse(&Fr::one()), Some(Fr::one()));
        assert_eq!(mod_inverse(&Fr::zero()), None);

        let two = Fr::from(2u64);
        assert_eq!(mod_inverse(&two).unwrap() * two, Fr::one());

        let minus_one = -Fr::one();
        assert_eq!(mod_inverse(&minus_one), Some(minus_one));
    }
}
