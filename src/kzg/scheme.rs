use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rand_core::RngCore;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, instrument};

use crate::{
    CurvePoint, DensePolynomial, Error, FieldElement, PairingBackend, PointSet, Polynomial,
    PolynomialCommitment, SetupParameters, TargetGroup, interpolate, vanishing_polynomial,
};

#[derive(Debug)]
pub struct KZG;

/// Structured reference string: `s^i · G1` and `s^i · G2` for `i < size()`.
pub struct SRS<B: PairingBackend> {
    pub powers_of_g: Vec<B::G1>,
    pub powers_of_h: Vec<B::G2>,
}

impl<B: PairingBackend> Clone for SRS<B> {
    fn clone(&self) -> Self {
        Self {
            powers_of_g: self.powers_of_g.clone(),
            powers_of_h: self.powers_of_h.clone(),
        }
    }
}

impl<B: PairingBackend> core::fmt::Debug for SRS<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SRS")
            .field("num_coeffs", &self.powers_of_g.len())
            .finish_non_exhaustive()
    }
}

impl<B: PairingBackend> SRS<B> {
    /// Builds the reference string from a known secret.
    ///
    /// Anyone holding `tau` can forge openings, so this is only meant for
    /// tests and for loading the output of an external ceremony.
    pub fn new_unsafe(tau: &B::Scalar, num_coeffs: usize) -> Result<Self, Error> {
        if num_coeffs < 2 {
            return Err(Error::InvalidConfig(format!(
                "the reference string needs at least two powers, got {num_coeffs}"
            )));
        }

        let g = B::G1::generator();
        let h = B::G2::generator();

        let mut powers_of_tau = Vec::with_capacity(num_coeffs);
        let mut cur = <B::Scalar as FieldElement>::one();
        for _ in 0..num_coeffs {
            powers_of_tau.push(cur);
            cur *= *tau;
        }

        let powers_of_g: Vec<B::G1> = powers_of_tau
            .par_iter()
            .map(|power| g.mul_scalar(power))
            .collect();

        let powers_of_h: Vec<B::G2> = powers_of_tau
            .par_iter()
            .map(|power| h.mul_scalar(power))
            .collect();

        Ok(SRS {
            powers_of_g,
            powers_of_h,
        })
    }

    /// Number of powers in each group.
    pub fn size(&self) -> usize {
        self.powers_of_g.len()
    }

    /// Largest degree that can be committed.
    pub fn max_degree(&self) -> usize {
        self.size() - 1
    }

    fn ensure_supported(&self, degree: usize) -> Result<(), Error> {
        if degree >= self.size() {
            return Err(Error::DegreeExceeded {
                degree,
                max: self.max_degree(),
            });
        }
        Ok(())
    }
}

/// Commitment to a polynomial: `p(s) · G1`.
pub struct Commitment<B: PairingBackend>(pub B::G1);

/// Opening proof: the commitment to the quotient `(p - I) / Z`.
pub struct Proof<B: PairingBackend>(pub B::G1);

macro_rules! g1_newtype {
    ($name:ident) => {
        impl<B: PairingBackend> Clone for $name<B> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<B: PairingBackend> Copy for $name<B> {}

        impl<B: PairingBackend> core::fmt::Debug for $name<B> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }

        impl<B: PairingBackend> PartialEq for $name<B> {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        impl<B: PairingBackend> Eq for $name<B> {}
    };
}

g1_newtype!(Commitment);
g1_newtype!(Proof);

impl<B: PairingBackend> PolynomialCommitment<B> for KZG {
    type Parameters = SRS<B>;
    type Polynomial = DensePolynomial<B::Scalar>;

    #[instrument(level = "info", skip_all, fields(num_coeffs = num_coeffs))]
    fn setup(num_coeffs: usize, seed: &[u8; 32]) -> Result<Self::Parameters, Error> {
        let mut rng = ChaCha20Rng::from_seed(*seed);
        let tau = <B::Scalar as FieldElement>::random(&mut rng);
        SRS::new_unsafe(&tau, num_coeffs)
    }

    #[instrument(level = "trace", skip_all, fields(degree = polynomial.degree()))]
    fn commit_g1(
        params: &Self::Parameters,
        polynomial: &Self::Polynomial,
    ) -> Result<Commitment<B>, Error> {
        let degree = polynomial.degree();
        params.ensure_supported(degree)?;
        let commitment = B::G1::multi_scalar_multiplication(
            &params.powers_of_g[..=degree],
            polynomial.coeffs(),
        )?;
        Ok(Commitment(commitment))
    }

    fn commit_g2(
        params: &Self::Parameters,
        polynomial: &Self::Polynomial,
    ) -> Result<B::G2, Error> {
        let degree = polynomial.degree();
        params.ensure_supported(degree)?;
        let commitment = B::G2::multi_scalar_multiplication(
            &params.powers_of_h[..=degree],
            polynomial.coeffs(),
        )?;
        Ok(commitment)
    }

    #[instrument(level = "debug", skip_all, fields(points = points.len(), degree = polynomial.degree()))]
    fn open(
        params: &Self::Parameters,
        polynomial: &Self::Polynomial,
        points: &PointSet<B::Scalar>,
    ) -> Result<Proof<B>, Error> {
        if points.is_empty() {
            return Err(Error::InvalidOpeningSet("cannot open at zero points".into()));
        }
        params.ensure_supported(polynomial.degree())?;
        // The verifier commits Z, of degree `points.len()`, in G2.
        params.ensure_supported(points.len())?;

        let interpolant = interpolate(points.points())?;
        let vanishing = vanishing_polynomial(&points.xs());
        let (quotient, remainder) = (polynomial - &interpolant).div_rem(&vanishing)?;
        if !remainder.is_zero() {
            return Err(Error::OpeningMismatch);
        }

        let proof = Self::commit_g1(params, &quotient)?;
        Ok(Proof(proof.0))
    }

    #[instrument(level = "debug", skip_all, fields(points = points.len()))]
    fn verify(
        params: &Self::Parameters,
        commitment: &Commitment<B>,
        proof: &Proof<B>,
        points: &PointSet<B::Scalar>,
    ) -> bool {
        match pairing_check(params, commitment, proof, points) {
            Ok(valid) => valid,
            Err(err) => {
                debug!(%err, "opening rejected");
                false
            }
        }
    }

    fn open_at(
        params: &Self::Parameters,
        polynomial: &Self::Polynomial,
        point: &B::Scalar,
    ) -> Result<(B::Scalar, Proof<B>), Error> {
        let value = polynomial.evaluate(point);
        let claim = PointSet::new(vec![(*point, value)])?;
        let proof = Self::open(params, polynomial, &claim)?;
        Ok((value, proof))
    }

    fn verify_at(
        params: &Self::Parameters,
        commitment: &Commitment<B>,
        point: &B::Scalar,
        value: &B::Scalar,
        proof: &Proof<B>,
    ) -> bool {
        match PointSet::new(vec![(*point, *value)]) {
            Ok(claim) => Self::verify(params, commitment, proof, &claim),
            Err(_) => false,
        }
    }
}

/// `e(proof, [Z(s)]₂) == e(C - [I(s)]₁, G2)`, checked as
/// `e(proof, [Z(s)]₂) · e([I(s)]₁ - C, G2) == 1`.
fn pairing_check<B: PairingBackend>(
    params: &SRS<B>,
    commitment: &Commitment<B>,
    proof: &Proof<B>,
    points: &PointSet<B::Scalar>,
) -> Result<bool, Error> {
    if points.is_empty() {
        return Err(Error::InvalidOpeningSet("cannot verify zero points".into()));
    }
    let interpolant = interpolate(points.points())?;
    let vanishing = vanishing_polynomial(&points.xs());

    let interpolant_s = <KZG as PolynomialCommitment<B>>::commit_g1(params, &interpolant)?;
    let vanishing_s = <KZG as PolynomialCommitment<B>>::commit_g2(params, &vanishing)?;

    let product = B::multi_pairing(
        &[proof.0, interpolant_s.0.sub(&commitment.0)],
        &[vanishing_s, B::G2::generator()],
    )?;
    Ok(product == B::Target::identity())
}

impl KZG {
    /// Runs the setup described by `params`.
    ///
    /// The fixed seed is used when present, otherwise a fresh one is drawn
    /// from `rng`.
    pub fn setup_with<B: PairingBackend, R: RngCore + ?Sized>(
        params: &SetupParameters,
        rng: &mut R,
    ) -> Result<SRS<B>, Error> {
        params.validate()?;
        let seed = match params.seed {
            Some(seed) => seed,
            None => {
                let mut seed = [0u8; 32];
                rng.fill_bytes(&mut seed);
                seed
            }
        };
        <Self as PolynomialCommitment<B>>::setup(params.num_coeffs, &seed)
    }

    /// Opens `polynomial` at `x = offset, ..., offset + len - 1`.
    ///
    /// Returns the evaluated points alongside the proof, ready to be handed
    /// to a verifier.
    pub fn open_range<B: PairingBackend>(
        params: &SRS<B>,
        polynomial: &DensePolynomial<B::Scalar>,
        offset: u64,
        len: usize,
    ) -> Result<(PointSet<B::Scalar>, Proof<B>), Error> {
        if len == 0 {
            return Err(Error::InvalidOpeningSet("cannot open an empty range".into()));
        }
        let end = u64::try_from(len)
            .ok()
            .and_then(|len| offset.checked_add(len))
            .ok_or_else(|| {
                Error::MalformedInput(format!("range {offset}+{len} overflows the x-coordinates"))
            })?;
        let points = (offset..end)
            .map(|x| {
                let x = <B::Scalar as FieldElement>::from_u64(x);
                (x, polynomial.evaluate(&x))
            })
            .collect();
        let points = PointSet::new(points)?;
        let proof = <Self as PolynomialCommitment<B>>::open(params, polynomial, &points)?;
        Ok((points, proof))
    }

    /// Checks that `commitment` is the commitment to `polynomial`.
    pub fn verify_commitment<B: PairingBackend>(
        params: &SRS<B>,
        commitment: &Commitment<B>,
        polynomial: &DensePolynomial<B::Scalar>,
    ) -> bool {
        <Self as PolynomialCommitment<B>>::commit_g1(params, polynomial)
            .is_ok_and(|expected| expected == *commitment)
    }
}
