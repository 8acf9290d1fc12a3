use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use kzg_multiopen::{
    DensePolynomial, FieldElement, Fr, KZG, PairingEngine, PointSet, Polynomial,
    PolynomialCommitment, SRS,
};

const SIZES: [usize; 3] = [64, 256, 1024];

fn random_poly(rng: &mut StdRng, len: usize) -> DensePolynomial<Fr> {
    DensePolynomial::from_coefficients_vec((0..len).map(|_| Fr::random(rng)).collect())
}

pub fn bench_setup(c: &mut Criterion) {
    let mut group = c.benchmark_group("kzg_setup");
    group.sample_size(10);
    for size in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let srs: SRS<PairingEngine> =
                    KZG::setup(size, &[7u8; 32]).expect("setup failed");
                black_box(srs);
            })
        });
    }
    group.finish();
}

pub fn bench_commit(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xdead_beef);
    let srs: SRS<PairingEngine> = KZG::setup(SIZES[2], &[7u8; 32]).expect("setup failed");

    let mut group = c.benchmark_group("kzg_commit");
    for size in SIZES {
        let poly = random_poly(&mut rng, size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &poly, |b, poly| {
            b.iter(|| black_box(KZG::commit_g1(&srs, poly).expect("commit failed")))
        });
    }
    group.finish();
}

/// Opening and verification with a growing number of points; the
/// polynomial itself is fixed (setup done once, outside measured loops).
pub fn bench_open_verify(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xdead_beef);
    let srs: SRS<PairingEngine> = KZG::setup(256, &[7u8; 32]).expect("setup failed");
    let poly = random_poly(&mut rng, 256);
    let commitment = KZG::commit_g1(&srs, &poly).expect("commit failed");

    let mut open = c.benchmark_group("kzg_open");
    for k in [1usize, 8, 32] {
        let points = PointSet::new(
            (0..k as u64)
                .map(|i| {
                    let x = Fr::from_u64(i);
                    (x, poly.evaluate(&x))
                })
                .collect(),
        )
        .expect("distinct points");
        open.bench_with_input(BenchmarkId::from_parameter(k), &points, |b, points| {
            b.iter(|| black_box(KZG::open(&srs, &poly, points).expect("open failed")))
        });
    }
    open.finish();

    let mut verify = c.benchmark_group("kzg_verify");
    for k in [1usize, 8, 32] {
        let (points, proof) = KZG::open_range(&srs, &poly, 0, k).expect("open failed");
        verify.bench_with_input(BenchmarkId::from_parameter(k), &points, |b, points| {
            b.iter(|| black_box(KZG::verify(&srs, &commitment, &proof, points)))
        });
    }
    verify.finish();
}

criterion_group!(benches, bench_setup, bench_commit, bench_open_verify);
criterion_main!(benches);
