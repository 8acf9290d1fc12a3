use std::ops::{Add, Mul, Neg, Sub};

use crate::{Error, FieldElement, Polynomial, inverse};

/// Univariate polynomial in canonical dense coefficient form.
///
/// Invariant: `coeffs` is never empty and has no trailing zeros, except the
/// zero polynomial which is exactly `[0]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DensePolynomial<F: FieldElement> {
    coeffs: Vec<F>,
}

impl<F: FieldElement> DensePolynomial<F> {
    /// The zero polynomial `[0]`.
    pub fn zero() -> Self {
        Self {
            coeffs: vec![F::zero()],
        }
    }

    /// The constant polynomial `c`.
    pub fn constant(c: F) -> Self {
        Self { coeffs: vec![c] }
    }

    /// The monic linear polynomial `X - root`.
    pub fn linear_root(root: &F) -> Self {
        Self {
            coeffs: vec![-*root, F::one()],
        }
    }

    /// Coefficient of the highest power of `X`; zero only for the zero polynomial.
    pub fn leading_coefficient(&self) -> F {
        self.coeffs[self.coeffs.len() - 1]
    }

    /// Number of stored coefficients (`degree + 1`).
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Multiplies every coefficient by `c`.
    pub fn scale(&self, c: &F) -> Self {
        Self::from_coefficients_vec(self.coeffs.iter().map(|a| *a * *c).collect())
    }

    /// Term-wise sum, padding the shorter operand with zeros.
    pub fn add_poly(&self, other: &Self) -> Self {
        let (long, short) = if self.coeffs.len() >= other.coeffs.len() {
            (&self.coeffs, &other.coeffs)
        } else {
            (&other.coeffs, &self.coeffs)
        };
        let mut coeffs = long.clone();
        for (acc, c) in coeffs.iter_mut().zip(short.iter()) {
            *acc += *c;
        }
        Self::from_coefficients_vec(coeffs)
    }

    /// Multiplies every coefficient by `-1`.
    pub fn negate(&self) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| -*c).collect(),
        }
    }

    /// `self - other`, i.e. `self + (-other)`.
    pub fn sub_poly(&self, other: &Self) -> Self {
        self.add_poly(&other.negate())
    }

    /// Full convolution of the two coefficient vectors.
    pub fn mul_poly(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let mut coeffs = vec![F::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] += *a * *b;
            }
        }
        Self::from_coefficients_vec(coeffs)
    }

    /// Euclidean division: returns `(q, r)` with `self = divisor·q + r` and
    /// `r` zero or of degree below `divisor`.
    ///
    /// Each step eliminates the current leading term of the remainder using the
    /// leading term of `divisor`. The number of steps depends only on the
    /// operand lengths.
    ///
    /// # Errors
    ///
    /// [`Error::DivisionByZero`] when `divisor` is the zero polynomial.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), Error> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if self.coeffs.len() < divisor.coeffs.len() {
            return Ok((Self::zero(), self.clone()));
        }

        let lead_inv = inverse(&divisor.leading_coefficient())?;
        let d = divisor.coeffs.len();
        let mut remainder = self.coeffs.clone();
        let mut quotient = vec![F::zero(); remainder.len() - d + 1];

        for shift in (0..quotient.len()).rev() {
            let factor = remainder[shift + d - 1] * lead_inv;
            quotient[shift] = factor;
            for (j, c) in divisor.coeffs.iter().enumerate() {
                remainder[shift + j] -= factor * *c;
            }
        }
        remainder.truncate(d - 1);

        Ok((
            Self::from_coefficients_vec(quotient),
            Self::from_coefficients_vec(remainder),
        ))
    }

    fn normalize(&mut self) {
        while self.coeffs.len() > 1 && self.coeffs[self.coeffs.len() - 1].is_zero() {
            self.coeffs.pop();
        }
        if self.coeffs.is_empty() {
            self.coeffs.push(F::zero());
        }
    }
}

impl<F: FieldElement> Polynomial<F> for DensePolynomial<F> {
    fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    fn coeffs(&self) -> &[F] {
        &self.coeffs
    }

    fn evaluate(&self, point: &F) -> F {
        self.coeffs
            .iter()
            .rev()
            .fold(F::zero(), |acc, c| acc * *point + *c)
    }

    fn truncate(&mut self, len: usize) {
        self.coeffs.truncate(len);
        self.normalize();
    }

    fn from_coefficients_vec(coeffs: Vec<F>) -> Self {
        let mut poly = Self { coeffs };
        poly.normalize();
        poly
    }

    fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }
}

impl<F: FieldElement> Default for DensePolynomial<F> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<F: FieldElement> Add for &DensePolynomial<F> {
    type Output = DensePolynomial<F>;

    fn add(self, rhs: Self) -> DensePolynomial<F> {
        self.add_poly(rhs)
    }
}

impl<F: FieldElement> Sub for &DensePolynomial<F> {
    type Output = DensePolynomial<F>;

    fn sub(self, rhs: Self) -> DensePolynomial<F> {
        self.sub_poly(rhs)
    }
}

impl<F: FieldElement> Mul for &DensePolynomial<F> {
    type Output = DensePolynomial<F>;

    fn mul(self, rhs: Self) -> DensePolynomial<F> {
        self.mul_poly(rhs)
    }
}

impl<F: FieldElement> Neg for &DensePolynomial<F> {
    type Output = DensePolynomial<F>;

    fn neg(self) -> DensePolynomial<F> {
        self.negate()
    }
}
