use rand::{SeedableRng, rngs::StdRng};
use tracing::info;
use tracing_subscriber::fmt;

use kzg_multiopen::{
    CurveId, Fr, KZG, PairingEngine, PointSet, PolynomialCommitment, SRS, SetupParameters,
    interpolate,
};

const MESSAGE: &str = "the quick brown fox jumps over the lazy dog";
const CHUNK: usize = 8;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .with_target(false)
        .with_ansi(false)
        .init();

    let mut rng = StdRng::seed_from_u64(42);

    let setup = SetupParameters::new(64, CurveId::active(), None)?;
    let srs: SRS<PairingEngine> = KZG::setup_with(&setup, &mut rng)?;

    info!(
        curve = ?setup.curve,
        max_degree = srs.max_degree(),
        "reference string ready"
    );

    // One point per character, committed as a single polynomial
    let message = PointSet::<Fr>::from_text(MESSAGE, 0)?;
    let poly = interpolate(message.points())?;
    let commitment = KZG::commit_g1(&srs, &poly)?;
    info!(bytes = MESSAGE.len(), "message committed");

    // Reveal "brown fox" only
    let offset = MESSAGE.find("brown fox").unwrap_or_default();
    let revealed = message.sub_range(offset, "brown fox".len())?;
    let proof = KZG::open(&srs, &poly, &revealed)?;
    let valid = KZG::verify(&srs, &commitment, &proof, &revealed);
    info!(offset, valid, "opened a substring");

    // Someone claims the fox was red
    let forged = PointSet::<Fr>::from_text("red   fox", offset as u64)?;
    let valid = KZG::verify(&srs, &commitment, &proof, &forged);
    info!(valid, "checked a forged substring");

    // Same message in 8-byte chunks: fewer points, lower degree
    let padded = format!("{MESSAGE:<width$}", width = MESSAGE.len().div_ceil(CHUNK) * CHUNK);
    let chunks = PointSet::<Fr>::from_bytes(padded.as_bytes(), 0, CHUNK)?;
    let chunk_poly = interpolate(chunks.points())?;
    let chunk_commitment = KZG::commit_g1(&srs, &chunk_poly)?;
    let (points, proof) = KZG::open_range(&srs, &chunk_poly, 2, 2)?;
    let valid = KZG::verify(&srs, &chunk_commitment, &proof, &points);
    info!(chunks = chunks.len(), valid, "opened bytes 16..32");

    Ok(())
}
