//! Polynomial operations and abstractions.
//!
//! This module provides the univariate polynomial ring over the scalar field,
//! which carries the KZG commitment scheme and the Lagrange interpolation.
//!
//! # Polynomial Representation
//!
//! Polynomials are represented in **coefficient form** with coefficients in ascending order:
//! - `p(x) = c_0 + c_1*x + c_2*x^2 + ... + c_n*x^n`
//! - Stored as `[c_0, c_1, c_2, ..., c_n]`
//!
//! The representation is canonical: there are no trailing zero coefficients,
//! and the zero polynomial is stored as the single coefficient `[0]`. Every
//! constructor and every ring operation re-establishes this form, so two
//! polynomials are equal exactly when their coefficient vectors are equal.
//!
//! # Example
//!
//! ```rust
//! use kzg_multiopen::{DensePolynomial, FieldElement, Fr, Polynomial};
//!
//! // p(x) = 1 + 2x + 3x^2
//! let coeffs = vec![Fr::from_u64(1), Fr::from_u64(2), Fr::from_u64(3)];
//! let p = DensePolynomial::from_coefficients_vec(coeffs);
//!
//! // d(x) = x - 1
//! let d = DensePolynomial::from_coefficients_vec(vec![Fr::from_i64(-1), Fr::one()]);
//!
//! let (q, r) = p.div_rem(&d).expect("non-zero divisor");
//! assert_eq!(&(&d * &q) + &r, p);
//! assert_eq!(r.coeffs(), &[p.evaluate(&Fr::one())]);
//! ```

use std::fmt::Debug;

use crate::FieldElement;

mod dense;
pub use dense::DensePolynomial;

/// Polynomial interface for univariate polynomials.
///
/// Polynomials are represented in coefficient form and are used extensively
/// in the KZG commitment scheme for Lagrange interpolation and evaluation.
pub trait Polynomial<F: FieldElement>: Clone + Send + Sync + Debug + 'static {
    /// Returns the degree of this polynomial. The zero polynomial has degree 0.
    fn degree(&self) -> usize;

    /// Returns the coefficients in ascending order (constant term first).
    fn coeffs(&self) -> &[F];

    /// Evaluates the polynomial at the given point using Horner's method.
    fn evaluate(&self, point: &F) -> F;

    /// Truncates the polynomial to the specified length, keeping the canonical form.
    fn truncate(&mut self, len: usize);

    /// Constructs a polynomial from its coefficients (ascending order).
    fn from_coefficients_vec(coeffs: Vec<F>) -> Self;

    /// Returns true for the zero polynomial.
    fn is_zero(&self) -> bool;
}
