//! Configuration types for the trusted setup.
//!
//! This module provides the curve selection and the parameters of the
//! structured reference string: how many coefficients it supports and,
//! optionally, a fixed seed for reproducible setups.
//!
//! # Example
//!
//! ```rust
//! use kzg_multiopen::{CurveId, SetupParameters};
//!
//! // Setup for polynomials with up to 64 coefficients on the compiled-in curve
//! let params = SetupParameters::new(64, CurveId::active(), None).expect("valid params");
//! assert_eq!(params.num_coeffs, 64);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{BackendError, Error};

/// Supported pairing-friendly elliptic curves.
///
/// - **BN254**: A 254-bit curve providing ~100 bits of security. Enabled by the
///   `ark_bn254` feature (default).
/// - **BLS12-381**: A 381-bit curve providing ~128 bits of security. Enabled by
///   the `ark_bls12381` feature.
///
/// Exactly one curve is compiled in; [`CurveId::active`] names it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum CurveId {
    /// BN254 curve (~100-bit security)
    Bn254,
    /// BLS12-381 curve (~128-bit security)
    Bls12_381,
}

impl CurveId {
    /// The curve the crate was compiled for.
    pub const fn active() -> Self {
        if cfg!(feature = "ark_bn254") {
            CurveId::Bn254
        } else {
            CurveId::Bls12_381
        }
    }

    /// Validates that this curve is the one compiled in.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kzg_multiopen::CurveId;
    ///
    /// assert!(CurveId::active().ensure_supported().is_ok());
    /// ```
    pub fn ensure_supported(&self) -> Result<(), BackendError> {
        if *self == Self::active() {
            return Ok(());
        }
        match self {
            CurveId::Bn254 => Err(BackendError::UnsupportedFeature(
                "compile with the `ark_bn254` feature to use BN254",
            )),
            CurveId::Bls12_381 => Err(BackendError::UnsupportedCurve(
                "bls12-381 is only available with `ark_bls12381` and without `ark_bn254`",
            )),
        }
    }
}

/// Parameters of the trusted setup.
///
/// # Fields
///
/// - `num_coeffs`: Number of powers of the secret in each group. Polynomials
///   of degree `< num_coeffs` can be committed.
/// - `curve`: Curve the reference string is generated on.
/// - `seed`: Optional fixed seed for the secret (for deterministic testing).
///   `None` draws a fresh seed from the caller's RNG.
///
/// # Constraints
///
/// - `num_coeffs` must be at least 2
/// - `curve` must be the compiled-in curve
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SetupParameters {
    /// Number of powers of the secret (maximum polynomial degree + 1)
    pub num_coeffs: usize,
    /// Pairing-friendly curve
    pub curve: CurveId,
    /// Optional fixed seed (for testing only)
    pub seed: Option<[u8; 32]>,
}

impl SetupParameters {
    /// Creates and validates setup parameters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kzg_multiopen::{CurveId, SetupParameters};
    ///
    /// let params = SetupParameters::new(16, CurveId::active(), Some([7u8; 32]))?;
    /// # Ok::<(), kzg_multiopen::Error>(())
    /// ```
    pub fn new(num_coeffs: usize, curve: CurveId, seed: Option<[u8; 32]>) -> Result<Self, Error> {
        let params = Self {
            num_coeffs,
            curve,
            seed,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validates the setup parameters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kzg_multiopen::{CurveId, SetupParameters};
    ///
    /// let params = SetupParameters {
    ///     num_coeffs: 1, // Invalid: nothing beyond constants could be committed
    ///     curve: CurveId::active(),
    ///     seed: None,
    /// };
    ///
    /// assert!(params.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), Error> {
        self.curve.ensure_supported()?;
        if self.num_coeffs < 2 {
            return Err(Error::InvalidConfig(
                "the reference string needs at least two powers".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_other_curve() {
        let other = match CurveId::active() {
            CurveId::Bn254 => CurveId::Bls12_381,
            CurveId::Bls12_381 => CurveId::Bn254,
        };
        assert!(matches!(
            SetupParameters::new(8, other, None),
            Err(Error::Backend(_))
        ));
    }

    #[test]
    fn rejects_tiny_setups() {
        for n in [0, 1] {
            assert!(matches!(
                SetupParameters::new(n, CurveId::active(), None),
                Err(Error::InvalidConfig(_))
            ));
        }
        assert!(SetupParameters::new(2, CurveId::active(), None).is_ok());
    }

    #[test]
    fn serde_round_trip() {
        let params = SetupParameters::new(32, CurveId::active(), Some([3u8; 32])).unwrap();
        let json = serde_json::to_string(&params).unwrap();
        let back: SetupParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back.num_coeffs, 32);
        assert_eq!(back.curve, params.curve);
        assert_eq!(back.seed, params.seed);
    }
}
