//! Lagrange interpolation over arbitrary point sets.
//!
//! This module turns a set of `(x, y)` points with distinct x-coordinates into
//! the unique polynomial of minimal degree through them, and builds the
//! vanishing polynomial of a set of x-coordinates. Both are the polynomial
//! side of a multi-point KZG opening: the interpolant `I` carries the claimed
//! values and the vanishing polynomial `Z` divides `p - I` exactly when the
//! claims are correct.
//!
//! # Mathematical Background
//!
//! For points `(x_0, y_0), ..., (x_{k-1}, y_{k-1})`:
//!
//! ```text
//! I(X) = Σ_i y_i · ∏_{j≠i} (X - x_j) / ∏_{j≠i} (x_i - x_j)
//! Z(X) = ∏_i (X - x_i)
//! ```
//!
//! # Performance
//!
//! Each basis term costs `O(k)` polynomial multiplications by a linear factor,
//! so interpolation is `O(k^2)` field multiplications per term. Terms are
//! independent and are built in parallel with Rayon. Opening sets are small
//! compared to the committed polynomial, so no FFT is involved.

use std::collections::HashSet;

use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
use tracing::instrument;

use crate::{DensePolynomial, Error, FieldElement, Polynomial};

/// Fails with [`Error::InvalidOpeningSet`] when two points share an x-coordinate.
pub fn ensure_distinct<F: FieldElement>(xs: impl IntoIterator<Item = F>) -> Result<(), Error> {
    let mut seen = HashSet::new();
    for x in xs {
        if !seen.insert(x) {
            return Err(Error::InvalidOpeningSet(format!(
                "duplicate x-coordinate {x:?}"
            )));
        }
    }
    Ok(())
}

/// Returns `∏ (X - x_i)`, the monic polynomial vanishing exactly on `xs`.
///
/// The empty product is the constant polynomial `1`.
pub fn vanishing_polynomial<F: FieldElement>(xs: &[F]) -> DensePolynomial<F> {
    xs.iter().fold(DensePolynomial::constant(F::one()), |acc, x| {
        &acc * &DensePolynomial::linear_root(x)
    })
}

/// Interpolates `points` into the unique polynomial of degree `< points.len()`
/// passing through all of them.
///
/// The empty point set interpolates to the zero polynomial.
///
/// # Errors
///
/// [`Error::InvalidOpeningSet`] if two points share an x-coordinate.
///
/// # Example
///
/// ```rust
/// use kzg_multiopen::{FieldElement, Fr, Polynomial, interpolate};
///
/// let points: Vec<(Fr, Fr)> = [(1, 3), (2, 5), (4, 9)]
///     .iter()
///     .map(|&(x, y)| (Fr::from_u64(x), Fr::from_u64(y)))
///     .collect();
///
/// // 1 + 2x
/// let p = interpolate(&points).unwrap();
/// assert_eq!(p.degree(), 1);
/// assert_eq!(p.coeffs(), &[Fr::from_u64(1), Fr::from_u64(2)]);
/// ```
#[instrument(level = "trace", skip_all, fields(points = points.len()))]
pub fn interpolate<F: FieldElement>(points: &[(F, F)]) -> Result<DensePolynomial<F>, Error> {
    ensure_distinct(points.iter().map(|(x, _)| *x))?;

    points
        .par_iter()
        .enumerate()
        .map(|(i, (x_i, y_i))| basis_term(points, i, x_i, y_i))
        .try_reduce(DensePolynomial::zero, |acc, term| Ok(&acc + &term))
}

/// `y_i · ∏_{j≠i}(X - x_j) / ∏_{j≠i}(x_i - x_j)`.
fn basis_term<F: FieldElement>(
    points: &[(F, F)],
    i: usize,
    x_i: &F,
    y_i: &F,
) -> Result<DensePolynomial<F>, Error> {
    let mut numerator = DensePolynomial::constant(*y_i);
    let mut denominator = F::one();
    for (j, (x_j, _)) in points.iter().enumerate() {
        if i == j {
            continue;
        }
        numerator = &numerator * &DensePolynomial::linear_root(x_j);
        denominator *= *x_i - *x_j;
    }

    let (term, remainder) = numerator.div_rem(&DensePolynomial::constant(denominator))?;
    if !remainder.is_zero() {
        return Err(Error::InvalidOpeningSet(
            "interpolation basis division left a remainder".into(),
        ));
    }
    Ok(term)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::Fr;

    fn points(raw: &[(i64, i64)]) -> Vec<(Fr, Fr)> {
        raw.iter()
            .map(|&(x, y)| (Fr::from_i64(x), Fr::from_i64(y)))
            .collect()
    }

    #[test]
    fn interpolant_passes_through_points() {
        let mut rng = StdRng::seed_from_u64(21);
        for k in 1..10 {
            let pts: Vec<(Fr, Fr)> = (0..k)
                .map(|_| (Fr::random(&mut rng), Fr::random(&mut rng)))
                .collect();
            let p = interpolate(&pts).unwrap();
            assert!(p.degree() < k);
            for (x, y) in &pts {
                assert_eq!(p.evaluate(x), *y);
            }
        }
    }

    #[test]
    fn recovers_known_polynomial() {
        // 5 + 3x + 2x^2
        let p = DensePolynomial::from_coefficients_vec(vec![
            Fr::from_u64(5),
            Fr::from_u64(3),
            Fr::from_u64(2),
        ]);
        let pts: Vec<(Fr, Fr)> = [-2, 0, 7, 11]
            .iter()
            .map(|&x| {
                let x = Fr::from_i64(x);
                (x, p.evaluate(&x))
            })
            .collect();
        assert_eq!(interpolate(&pts).unwrap(), p);
    }

    #[test]
    fn single_point_is_constant() {
        let p = interpolate(&points(&[(9, 4)])).unwrap();
        assert_eq!(p, DensePolynomial::constant(Fr::from_u64(4)));
    }

    #[test]
    fn empty_set_is_zero() {
        assert!(interpolate::<Fr>(&[]).unwrap().is_zero());
    }

    #[test]
    fn duplicate_x_is_rejected() {
        let err = interpolate(&points(&[(1, 2), (3, 4), (1, 5)])).unwrap_err();
        assert!(matches!(err, Error::InvalidOpeningSet(_)));
    }

    #[test]
    fn vanishing_polynomial_roots() {
        let xs = [Fr::from_u64(0), Fr::from_u64(1), Fr::from_i64(-4)];
        let z = vanishing_polynomial(&xs);
        assert_eq!(z.degree(), 3);
        assert_eq!(z.leading_coefficient(), Fr::one());
        for x in &xs {
            assert!(z.evaluate(x).is_zero());
        }
        assert_eq!(z.evaluate(&Fr::from_u64(2)), Fr::from_u64(2 * 1 * 6));
        assert_eq!(vanishing_polynomial::<Fr>(&[]), DensePolynomial::constant(Fr::one()));
    }
}
