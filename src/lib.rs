//! # kzg-multiopen: KZG polynomial commitments with multi-point openings
//!
//! A prover commits to a polynomial over the scalar field of a
//! pairing-friendly curve with a single group element, then convinces a
//! verifier that the committed polynomial takes claimed values at an arbitrary
//! set of points, again with a single group element. Verification costs two
//! pairings whatever the polynomial degree or the number of points.
//!
//! ## Architecture
//!
//! The crate is organized into several key modules:
//!
//! - **arith**: Field arithmetic with Euclidean inversion, the curve groups and
//!   pairing of the compiled-in backend, the dense polynomial ring with exact
//!   Euclidean division, and Lagrange interpolation. See [`FieldElement`],
//!   [`CurvePoint`], [`PairingBackend`], [`DensePolynomial`] and [`interpolate`].
//!
//! - **kzg**: The commitment scheme. [`PolynomialCommitment`] is implemented
//!   by [`KZG`] over a structured reference string [`SRS`], producing
//!   [`Commitment`]s and [`Proof`]s.
//!
//! - **points**: [`PointSet`], the claims an opening attests to, with
//!   builders that encode text or byte strings as evaluations.
//!
//! - **config**: [`SetupParameters`] and [`CurveId`] describing a trusted setup.
//!
//! - **errors**: [`Error`] for every fallible operation and [`BackendError`]
//!   for failures reported by the curve library.
//!
//! ## Quick Example
//!
//! ```rust
//! use kzg_multiopen::{Fr, KZG, PairingEngine, PointSet, PolynomialCommitment, SRS, interpolate};
//!
//! # fn main() -> Result<(), kzg_multiopen::Error> {
//! // One-time trusted setup for polynomials with up to 32 coefficients
//! let srs: SRS<PairingEngine> = KZG::setup(32, &[1u8; 32])?;
//!
//! // Encode a message as evaluations (i, byte_i) and interpolate it
//! let message = PointSet::<Fr>::from_text("attack at dawn", 0)?;
//! let poly = interpolate(message.points())?;
//! let commitment = KZG::commit_g1(&srs, &poly)?;
//!
//! // Reveal "dawn" only, with a constant-size proof
//! let dawn = message.sub_range(10, 4)?;
//! let proof = KZG::open(&srs, &poly, &dawn)?;
//! assert!(KZG::verify(&srs, &commitment, &proof, &dawn));
//!
//! // A different claim over the same positions is rejected
//! let dusk = PointSet::<Fr>::from_text("dusk", 10)?;
//! assert!(!KZG::verify(&srs, &commitment, &proof, &dusk));
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - **`ark_bn254`** (default): Arkworks backend for BN254
//! - **`ark_bls12381`**: Arkworks backend for BLS12-381
//! - **`parallel`** (default): parallel field and MSM routines in arkworks
//!
//! ## Security Considerations
//!
//! - **Trusted Setup**: [`KZG::setup`] runs the ceremony as a single party. The
//!   secret is derived from the seed and dropped before returning, but whoever
//!   knows the seed can forge openings.
//! - **Side Channels**: Field inversion uses the binary extended Euclidean
//!   algorithm, whose running time depends on its input.

mod arith;
mod config;
mod errors;
mod kzg;
mod points;
mod serde_impl;

pub use arith::*;
pub use config::*;
pub use errors::*;
pub use kzg::*;
pub use points::*;
