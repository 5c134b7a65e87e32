//! # Collision Probe
//!
//! Drives large batches of hash computations over synthetic inputs and
//! collects collision, timing and bit-distribution statistics.

pub mod generator;
pub mod stats;

pub use generator::{InputGenerator, InputMode, SEED};
pub use stats::{bit_quality, BitCounter, BitQuality};

use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::checksum::{Checksum, ChecksumError};

/// Immutable parameters for one probe run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Label prefixed to every report line.
    pub label: String,
    /// Number of buffers to hash.
    pub iterations: usize,
    /// Length of each generated buffer.
    pub byte_length: usize,
    /// Number of evenly spaced progress lines to aim for.
    pub log_points: usize,
    /// Input generation policy.
    pub mode: InputMode,
}

impl RunConfig {
    /// Bundle the parameters for one run.
    pub fn new(
        label: &str,
        iterations: usize,
        byte_length: usize,
        log_points: usize,
        mode: InputMode,
    ) -> Self {
        Self {
            label: label.to_string(),
            iterations,
            byte_length,
            log_points,
            mode,
        }
    }
}

/// Statistics collected by one probe run.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Total duplicate hash values observed.
    pub collisions: u64,
    /// 1-based iteration index of the first duplicate, if any.
    pub first_collision: Option<u64>,
    /// Cumulative time spent inside checksum updates.
    pub hash_time: Duration,
    /// Per-bit set counters over all produced hash values.
    pub bit_counts: BitCounter,
    /// Derived skew metrics.
    pub quality: BitQuality,
}

/// Run one checksum through the full probe loop.
///
/// Prints the report lines as it goes and returns the collected statistics.
/// The only error source is a misused checksum adapter, which aborts the run.
///
/// Progress cadence: a line is printed whenever the 1-based iteration is an
/// exact multiple of `iterations / log_points`. When the division is uneven
/// the checkpoints drift, and when `iterations < log_points` the interval is
/// zero and no progress lines appear at all. Cosmetic, left as is.
pub fn run(config: &RunConfig, checksum: &mut dyn Checksum) -> Result<RunResult, ChecksumError> {
    println!(
        "{}\t-----------------------------------------------------------",
        config.label
    );
    log::debug!(
        "probing {} over {} x {}-byte buffers ({:?})",
        config.label,
        config.iterations,
        config.byte_length,
        config.mode
    );

    let mut generator = InputGenerator::new(config.mode, config.byte_length);
    let mut seen: HashSet<u64> = HashSet::with_capacity(config.iterations);
    let mut bit_counts = BitCounter::new();
    let mut collisions: u64 = 0;
    let mut first_collision: Option<u64> = None;
    let mut hash_time = Duration::ZERO;

    let log_interval = if config.log_points > 0 {
        config.iterations / config.log_points
    } else {
        0
    };

    for i in 0..config.iterations {
        let buffer = generator.next_buffer();

        checksum.reset();
        let start = Instant::now();
        checksum.update(buffer)?;
        hash_time += start.elapsed();
        let hash = checksum.value()?;

        if !seen.insert(hash) {
            collisions += 1;
            if first_collision.is_none() {
                first_collision = Some(i as u64 + 1);
            }
        }

        bit_counts.record(hash);

        if log_interval > 0 && (i + 1) % log_interval == 0 {
            println!(
                "{}\t{}\t\tcollisions: {}\t\tms: {}\t\thash: {}",
                config.label,
                i + 1,
                collisions,
                hash_time.as_millis(),
                hash
            );
        }
    }

    match first_collision {
        Some(index) => println!("{}\tfirst collision at: {}", config.label, index),
        None => println!("{}\tfirst collision at: none", config.label),
    }

    let quality = bit_quality(&bit_counts, config.iterations as u64);
    println!(
        "{}\tQuality - off sum: {}\t\toff² sum: {}\t\tnegQ: {}",
        config.label, quality.off_sum, quality.off_sum_sq, quality.quality
    );

    Ok(RunResult {
        collisions,
        first_collision,
        hash_time,
        bit_counts,
        quality,
    })
}
