//! Field, polynomial and group-library abstractions.
//!
//! This module provides trait abstractions for the algebra the commitment scheme
//! is built on, with the concrete curve selected at compile time.
//!
//! # Architecture
//!
//! The module is organized into several submodules, each providing a specific abstraction layer:
//!
//! - **[`field`]**: Scalar field operations (Fr) - reduction, Euclidean inversion, division
//! - **[`group`]**: Elliptic curve point operations (G1, G2, GT) - addition, scalar multiplication, MSM
//! - **[`pairing`]**: Bilinear pairing operations - `e(G1, G2) -> GT`
//! - **[`poly`]**: Polynomial ring - add, subtract, multiply, Euclidean division, evaluation
//! - **[`lagrange`]**: Lagrange interpolation and vanishing polynomials
//!
//! # Backend Support
//!
//! | Feature | Backend | Curve | Status |
//! |---------|---------|-------|--------|
//! | `ark_bn254` (default) | Arkworks | BN254 | Stable |
//! | `ark_bls12381` | Arkworks | BLS12-381 | Stable |
//!
//! When both features are enabled BN254 is used.
//!
//! # Example
//!
//! ```rust
//! use kzg_multiopen::{CurvePoint, FieldElement, PairingBackend, PairingEngine};
//!
//! // Field operations
//! let scalar = <PairingEngine as PairingBackend>::Scalar::from_u64(42);
//! let inv = scalar.invert().expect("non-zero scalar");
//!
//! // Curve operations
//! let g1 = <PairingEngine as PairingBackend>::G1::generator();
//! let point = g1.mul_scalar(&scalar).mul_scalar(&inv);
//! assert_eq!(point, g1);
//!
//! // Pairing operation
//! let g2 = <PairingEngine as PairingBackend>::G2::generator();
//! let gt = PairingEngine::pairing(&g1, &g2);
//! println!("{:?}", gt);
//! ```

#[cfg(not(any(feature = "ark_bn254", feature = "ark_bls12381")))]
compile_error!("enable one of the curve features: `ark_bn254` or `ark_bls12381`");

mod field;
pub use field::*;

mod group;
pub use group::*;

mod pairing;
pub use pairing::*;

mod poly;
pub use poly::*;

mod lagrange;
pub use lagrange::*;
