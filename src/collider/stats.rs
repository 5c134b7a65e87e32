//! # Bit Distribution Statistics
//!
//! Per-bit skew accounting used as a coarse hash-quality heuristic: the
//! closer every output bit is to being set half the time, the better.

/// Per-bit "set" counters accumulated across a whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitCounter {
    counts: [u64; 64],
}

impl BitCounter {
    /// Create a counter with all positions at zero.
    pub fn new() -> Self {
        Self { counts: [0; 64] }
    }

    /// Record every set bit of one hash value.
    pub fn record(&mut self, hash: u64) {
        for bit in 0..64 {
            if (hash >> bit) & 1 == 1 {
                self.counts[bit] += 1;
            }
        }
    }

    /// Raw counters, indexed by bit position.
    pub fn counts(&self) -> &[u64; 64] {
        &self.counts
    }
}

impl Default for BitCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate skew metrics over the detected hash width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BitQuality {
    /// Detected hash width in bits (32 or 64).
    pub bit_width: u32,
    /// Sum of per-bit absolute deviations from the ideal N/2.
    pub off_sum: u64,
    /// Sum of squared per-bit deviations.
    pub off_sum_sq: u64,
    /// Normalized skew score; smaller is better.
    pub quality: f64,
}

/// Summarize how far each bit's set-frequency strays from 50%.
///
/// Width detection: the source is treated as 64-bit iff bit 32 or 33 was
/// ever set. A genuinely 64-bit hash is assumed to set one of those bits at
/// least once over a run; approximate, but consistent.
pub fn bit_quality(counter: &BitCounter, iterations: u64) -> BitQuality {
    let counts = counter.counts();
    let bit_width: u32 = if counts[32] + counts[33] > 0 { 64 } else { 32 };
    let ideal = iterations / 2;

    let mut off_sum = 0u64;
    let mut off_sum_sq = 0u64;
    let mut quality = 0f64;
    for bit in 0..bit_width as usize {
        let delta = ideal.abs_diff(counts[bit]);
        off_sum += delta;
        off_sum_sq += delta * delta;
        quality += (delta as f64) * (delta as f64) / iterations as f64 / f64::from(bit_width);
    }

    BitQuality {
        bit_width,
        off_sum,
        off_sum_sq,
        quality,
    }
}
