//! # Deterministic Input Generator
//!
//! Reproducible byte-buffer streams for the hashing loop.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Fixed seed keeping every run reproducible.
pub const SEED: u64 = 42;

/// Input generation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Refill the whole buffer with fresh random bytes every iteration.
    TotalRandom,
    /// Change exactly one byte per iteration, cycling through positions.
    SmallChanges,
}

/// Deterministic byte-buffer source.
///
/// A single buffer is materialized and mutated in place; the slice returned
/// by [`next_buffer`](Self::next_buffer) is only valid until the next call
/// and must be fully consumed before then.
pub struct InputGenerator {
    rng: StdRng,
    buf: Vec<u8>,
    mode: InputMode,
    /// Next byte position to mutate in small-changes mode. `None` until the
    /// first buffer has been yielded unmodified.
    cursor: Option<usize>,
}

impl InputGenerator {
    /// Create a generator producing `byte_length`-sized buffers.
    pub fn new(mode: InputMode, byte_length: usize) -> Self {
        Self {
            rng: StdRng::seed_from_u64(SEED),
            buf: vec![0u8; byte_length],
            mode,
            cursor: None,
        }
    }

    /// Produce the next buffer in the sequence.
    pub fn next_buffer(&mut self) -> &[u8] {
        match self.mode {
            InputMode::TotalRandom => self.rng.fill_bytes(&mut self.buf),
            InputMode::SmallChanges => self.mutate_one(),
        }
        &self.buf
    }

    fn mutate_one(&mut self) {
        if let Some(index) = self.cursor {
            let existing = self.buf[index];
            let mut fresh: u8 = self.rng.gen();
            while fresh == existing {
                fresh = self.rng.gen();
            }
            self.buf[index] = fresh;
            self.cursor = Some((index + 1) % self.buf.len());
        } else {
            // First iteration hashes the buffer as initialized.
            self.cursor = Some(0);
        }
    }
}
