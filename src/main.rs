//! # Probe Suites
//!
//! Runs the full algorithm roster through the collision probe with fixed
//! constants: a total-random batch and a small-changes (avalanche) batch.
//! There are no flags; edit the constants to change a run.

use hashprobe::checksum::{
    digest, murmur, Adler32, Checksum, ChecksumError, Combined, Crc32, Fnv32, Fnv64, OneShot,
};
use hashprobe::collider::{run, InputMode, RunConfig};

const TOTAL_RANDOM_ITERATIONS: usize = 10_000_000;
const SMALL_CHANGES_ITERATIONS: usize = 1_000_000;
const BYTE_LENGTH: usize = 1024;
const LOG_POINTS: usize = 10;

fn probe(
    label: &str,
    checksum: &mut dyn Checksum,
    iterations: usize,
    mode: InputMode,
) -> Result<(), ChecksumError> {
    let config = RunConfig::new(label, iterations, BYTE_LENGTH, LOG_POINTS, mode);
    run(&config, checksum)?;
    Ok(())
}

/// Every algorithm over fully independent random buffers.
fn total_random_suite() -> Result<(), ChecksumError> {
    let mode = InputMode::TotalRandom;
    let n = TOTAL_RANDOM_ITERATIONS;

    probe("Adler32", &mut Adler32::new(), n, mode)?;
    probe("FNV1a", &mut Fnv32::new(), n, mode)?;
    probe(
        "Murmur2",
        &mut OneShot::new(|data| u64::from(murmur::murmur2_32(data, 0))),
        n,
        mode,
    )?;
    // Murmur2b: second timing pass over the same hash values.
    probe(
        "Murmur2b",
        &mut OneShot::new(|data| u64::from(murmur::murmur2_32(data, 0))),
        n,
        mode,
    )?;
    probe(
        "Murmur3A-32",
        &mut OneShot::new(|data| u64::from(murmur::murmur3_32(data, 0))),
        n,
        mode,
    )?;
    probe("FNV1a-64", &mut Fnv64::new(), n, mode)?;
    probe("CRC32", &mut Crc32::new(), n, mode)?;
    probe(
        "Combined",
        &mut Combined::new(Adler32::new(), Crc32::new()),
        n,
        mode,
    )?;
    probe("MD5", &mut OneShot::new(digest::md5_u64), n, mode)?;
    probe("SHA256", &mut OneShot::new(digest::sha256_u64), n, mode)?;
    probe("BLAKE3", &mut OneShot::new(digest::blake3_u64), n, mode)?;
    Ok(())
}

/// The avalanche-sensitive subset over single-byte-mutated buffers.
fn small_changes_suite() -> Result<(), ChecksumError> {
    let mode = InputMode::SmallChanges;
    let n = SMALL_CHANGES_ITERATIONS;

    probe("Adler32", &mut Adler32::new(), n, mode)?;
    probe("FNV1a", &mut Fnv32::new(), n, mode)?;
    probe("FNV1a-64", &mut Fnv64::new(), n, mode)?;
    probe("CRC32", &mut Crc32::new(), n, mode)?;
    probe(
        "Combined",
        &mut Combined::new(Adler32::new(), Crc32::new()),
        n,
        mode,
    )?;
    probe(
        "Murmur3A-32",
        &mut OneShot::new(|data| u64::from(murmur::murmur3_32(data, 0))),
        n,
        mode,
    )?;
    Ok(())
}

fn main() {
    env_logger::init();

    log::info!(
        "hashprobe: {} total-random / {} small-changes iterations, {}-byte buffers",
        TOTAL_RANDOM_ITERATIONS,
        SMALL_CHANGES_ITERATIONS,
        BYTE_LENGTH
    );

    let outcome = total_random_suite().and_then(|()| small_changes_suite());
    if let Err(e) = outcome {
        log::error!("probe aborted: {}", e);
        std::process::exit(1);
    }
}
