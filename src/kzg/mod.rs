mod scheme;
pub use scheme::{Commitment, KZG, Proof, SRS};

use core::fmt::Debug;

use crate::{Error, PairingBackend, PointSet, Polynomial};

/// KZG polynomial commitment scheme interface.
///
/// This trait provides the core operations for Kate-Zaverucha-Goldberg (KZG)
/// commitments with multi-point openings.
///
/// # KZG Commitments
///
/// KZG commitments allow committing to a polynomial such that:
/// - The commitment is succinct (one group element)
/// - One can prove evaluations at any set of points with one group element
/// - Verification costs two pairings regardless of the polynomial degree
///
/// # Example
///
/// ```rust
/// use kzg_multiopen::{
///     DensePolynomial, FieldElement, Fr, KZG, PairingEngine, PointSet, Polynomial,
///     PolynomialCommitment, SRS,
/// };
///
/// let srs: SRS<PairingEngine> = KZG::setup(8, &[42u8; 32])?;
///
/// // p(x) = 5 + 3x + 2x^2
/// let p = DensePolynomial::from_coefficients_vec(vec![
///     Fr::from_u64(5),
///     Fr::from_u64(3),
///     Fr::from_u64(2),
/// ]);
/// let commitment = KZG::commit_g1(&srs, &p)?;
///
/// let claim = PointSet::new(vec![(Fr::from_u64(0), Fr::from_u64(5))])?;
/// let proof = KZG::open(&srs, &p, &claim)?;
/// assert!(KZG::verify(&srs, &commitment, &proof, &claim));
///
/// let wrong = PointSet::new(vec![(Fr::from_u64(0), Fr::from_u64(6))])?;
/// assert!(!KZG::verify(&srs, &commitment, &proof, &wrong));
/// # Ok::<(), kzg_multiopen::Error>(())
/// ```
pub trait PolynomialCommitment<B: PairingBackend>: Send + Sync + Debug + 'static {
    /// Commitment parameters (powers of tau).
    type Parameters: Clone + Send + Sync + Debug + 'static;

    /// Polynomial type used by this commitment scheme.
    type Polynomial: Polynomial<B::Scalar>;

    /// Performs trusted setup to generate commitment parameters.
    ///
    /// This generates powers of tau: `[τ^0, τ^1, ..., τ^(num_coeffs - 1)]` in both G1 and G2,
    /// so polynomials of degree below `num_coeffs` can be committed.
    /// The secret `tau` is derived from `seed` and discarded before returning.
    fn setup(num_coeffs: usize, seed: &[u8; 32]) -> Result<Self::Parameters, Error>;

    /// Commits to a polynomial in G1.
    ///
    /// For polynomial `p(x) = ∑ c_i * x^i`, returns `∑ c_i * τ^i * G1`.
    fn commit_g1(
        params: &Self::Parameters,
        polynomial: &Self::Polynomial,
    ) -> Result<Commitment<B>, Error>;

    /// Commits to a polynomial in G2.
    ///
    /// For polynomial `p(x) = ∑ c_i * x^i`, returns `∑ c_i * τ^i * G2`.
    fn commit_g2(params: &Self::Parameters, polynomial: &Self::Polynomial)
    -> Result<B::G2, Error>;

    /// Proves that `polynomial` takes the claimed values at every point of `points`.
    ///
    /// The proof is the G1 commitment to `(p - I) / Z`, where `I` interpolates
    /// the claims and `Z` vanishes on their x-coordinates.
    ///
    /// # Errors
    ///
    /// - [`Error::OpeningMismatch`] if some claimed value is not `p(x)`
    /// - [`Error::InvalidOpeningSet`] for an empty set
    /// - [`Error::DegreeExceeded`] if `polynomial`, or the vanishing polynomial
    ///   of `points`, does not fit the parameters
    fn open(
        params: &Self::Parameters,
        polynomial: &Self::Polynomial,
        points: &PointSet<B::Scalar>,
    ) -> Result<Proof<B>, Error>;

    /// Verifies a multi-point opening against a commitment.
    ///
    /// Never fails: malformed inputs are rejected by returning `false`.
    fn verify(
        params: &Self::Parameters,
        commitment: &Commitment<B>,
        proof: &Proof<B>,
        points: &PointSet<B::Scalar>,
    ) -> bool;

    /// Opens a commitment at a single point, returning the evaluation and proof.
    fn open_at(
        params: &Self::Parameters,
        polynomial: &Self::Polynomial,
        point: &B::Scalar,
    ) -> Result<(B::Scalar, Proof<B>), Error>;

    /// Verifies a single-point opening.
    fn verify_at(
        params: &Self::Parameters,
        commitment: &Commitment<B>,
        point: &B::Scalar,
        value: &B::Scalar,
        proof: &Proof<B>,
    ) -> bool;
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use rand_core::RngCore;

    use crate::{
        CurvePoint, DensePolynomial, Error, FieldElement, Fr, KZG, PairingBackend, PairingEngine,
        PointSet, Polynomial, PolynomialCommitment, SRS,
    };

    fn random_srs<B: PairingBackend>(rng: &mut StdRng, num_coeffs: usize) -> SRS<B> {
        let mut seed = [0u8; 32];
        rng.fill_bytes(&mut seed);
        KZG::setup(num_coeffs, &seed).expect("setup")
    }

    fn random_poly(rng: &mut StdRng, len: usize) -> DensePolynomial<Fr> {
        DensePolynomial::from_coefficients_vec((0..len).map(|_| Fr::random(rng)).collect())
    }

    fn kzg_commitment_helper<B: PairingBackend<Scalar = Fr>>(rng: &mut StdRng) {
        let params: SRS<B> = random_srs(rng, 8);
        let poly = random_poly(rng, 4);
        let commitment = KZG::commit_g1(&params, &poly).expect("commit");
        assert!(
            !commitment.0.is_identity(),
            "commitment should not be identity for random polynomial"
        );
    }

    #[test]
    fn kzg_commitment() {
        kzg_commitment_helper::<PairingEngine>(&mut StdRng::seed_from_u64(1));
    }

    #[test]
    fn kzg_commitment_is_evaluation_at_tau() {
        let tau = Fr::from_u64(12345678);
        let params = SRS::<PairingEngine>::new_unsafe(&tau, 4).expect("srs");
        let poly = DensePolynomial::from_coefficients_vec(vec![
            Fr::from_u64(5),
            Fr::from_u64(3),
            Fr::from_u64(2),
        ]);
        let commitment = KZG::commit_g1(&params, &poly).expect("commit");
        let expected = <PairingEngine as PairingBackend>::G1::generator().mul_scalar(&poly.evaluate(&tau));
        assert_eq!(commitment.0, expected);

        let in_g2 = KZG::commit_g2(&params, &poly).expect("commit g2");
        let expected = <PairingEngine as PairingBackend>::G2::generator().mul_scalar(&poly.evaluate(&tau));
        assert_eq!(in_g2, expected);
    }

    #[test]
    fn kzg_open_verify() {
        let mut rng = StdRng::seed_from_u64(2);
        let params: SRS<PairingEngine> = random_srs(&mut rng, 8);
        let poly = random_poly(&mut rng, 4);
        let commitment = KZG::commit_g1(&params, &poly).expect("commit");
        let point = Fr::from_u64(3);
        let (value, proof) = KZG::open_at(&params, &poly, &point).expect("open");
        assert_eq!(value, poly.evaluate(&point));
        assert!(
            KZG::verify_at(&params, &commitment, &point, &value, &proof),
            "opening proof should verify"
        );
        assert!(!KZG::verify_at(
            &params,
            &commitment,
            &point,
            &(value + Fr::one()),
            &proof
        ));
    }

    #[test]
    fn kzg_multi_open_verify() {
        let mut rng = StdRng::seed_from_u64(3);
        let params: SRS<PairingEngine> = random_srs(&mut rng, 16);
        let poly = random_poly(&mut rng, 12);
        let commitment = KZG::commit_g1(&params, &poly).expect("commit");

        for k in 1..=6u64 {
            let claims = PointSet::new(
                (0..k)
                    .map(|i| {
                        let x = Fr::from_u64(10 * i + 1);
                        (x, poly.evaluate(&x))
                    })
                    .collect(),
            )
            .unwrap();
            let proof = KZG::open(&params, &poly, &claims).expect("open");
            assert!(KZG::verify(&params, &commitment, &proof, &claims));
        }
    }

    #[test]
    fn kzg_verify_rejects_tampered_values() {
        let mut rng = StdRng::seed_from_u64(4);
        let params: SRS<PairingEngine> = random_srs(&mut rng, 8);
        let poly = random_poly(&mut rng, 6);
        let commitment = KZG::commit_g1(&params, &poly).expect("commit");

        let xs = [Fr::from_u64(1), Fr::from_u64(2), Fr::from_u64(3)];
        let claims: Vec<(Fr, Fr)> = xs.iter().map(|x| (*x, poly.evaluate(x))).collect();
        let proof = KZG::open(&params, &poly, &PointSet::new(claims.clone()).unwrap()).unwrap();

        // Tamper with one value
        let mut tampered = claims.clone();
        tampered[1].1 = Fr::random(&mut rng);
        let tampered = PointSet::new(tampered).unwrap();
        assert!(
            !KZG::verify(&params, &commitment, &proof, &tampered),
            "proof should not verify with tampered value"
        );

        // Drop one claim
        let fewer = PointSet::new(claims[..2].to_vec()).unwrap();
        assert!(!KZG::verify(&params, &commitment, &proof, &fewer));

        // Another polynomial's commitment
        let other = KZG::commit_g1(&params, &random_poly(&mut rng, 6)).unwrap();
        let honest = PointSet::new(claims).unwrap();
        assert!(!KZG::verify(&params, &other, &proof, &honest));
    }

    #[test]
    fn kzg_open_rejects_wrong_claims() {
        let mut rng = StdRng::seed_from_u64(5);
        let params: SRS<PairingEngine> = random_srs(&mut rng, 8);
        let poly = random_poly(&mut rng, 5);
        let x = Fr::from_u64(9);
        let claims = PointSet::new(vec![
            (Fr::from_u64(0), poly.evaluate(&Fr::from_u64(0))),
            (x, poly.evaluate(&x) + Fr::one()),
        ])
        .unwrap();
        assert!(matches!(
            KZG::open(&params, &poly, &claims),
            Err(Error::OpeningMismatch)
        ));
    }

    #[test]
    fn kzg_degree_bound() {
        let mut rng = StdRng::seed_from_u64(6);
        let params: SRS<PairingEngine> = random_srs(&mut rng, 4);
        assert!(KZG::commit_g1(&params, &random_poly(&mut rng, 4)).is_ok());
        let too_big = random_poly(&mut rng, 5);
        assert!(matches!(
            KZG::commit_g1(&params, &too_big),
            Err(Error::DegreeExceeded { degree: 4, max: 3 })
        ));
        let claims = PointSet::new(vec![(Fr::zero(), too_big.evaluate(&Fr::zero()))]).unwrap();
        assert!(matches!(
            KZG::open(&params, &too_big, &claims),
            Err(Error::DegreeExceeded { .. })
        ));
    }

    #[test]
    fn kzg_open_rejects_oversized_opening_set() {
        let mut rng = StdRng::seed_from_u64(7);
        let params: SRS<PairingEngine> = random_srs(&mut rng, 4);
        let poly = random_poly(&mut rng, 3);
        let commitment = KZG::commit_g1(&params, &poly).unwrap();
        // Z has degree 4 and does not fit the 4 powers in G2.
        let claims = PointSet::new(
            (0..4u64)
                .map(|i| {
                    let x = Fr::from_u64(i);
                    (x, poly.evaluate(&x))
                })
                .collect(),
        )
        .unwrap();
        assert!(matches!(
            KZG::open(&params, &poly, &claims),
            Err(Error::DegreeExceeded { degree: 4, max: 3 })
        ));

        // One point fewer fits, and the honest proof verifies.
        let fitting = claims.sub_range(0, 3).unwrap();
        let proof = KZG::open(&params, &poly, &fitting).unwrap();
        assert!(KZG::verify(&params, &commitment, &proof, &fitting));
    }

    #[test]
    fn kzg_empty_opening_set() {
        let mut rng = StdRng::seed_from_u64(8);
        let params: SRS<PairingEngine> = random_srs(&mut rng, 4);
        let poly = random_poly(&mut rng, 3);
        let commitment = KZG::commit_g1(&params, &poly).unwrap();
        let empty = PointSet::new(Vec::new()).unwrap();
        assert!(matches!(
            KZG::open(&params, &poly, &empty),
            Err(Error::InvalidOpeningSet(_))
        ));
        let proof = KZG::open_at(&params, &poly, &Fr::one()).unwrap().1;
        assert!(!KZG::verify(&params, &commitment, &proof, &empty));
    }
}
