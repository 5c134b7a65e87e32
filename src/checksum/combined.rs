//! # Combined Checksum
//!
//! Two 32-bit checksums fused into a single 64-bit value.

use super::{Checksum, ChecksumError};

/// Feeds every update into two checksums and packs both results.
///
/// The first checksum's low 32 bits occupy the high half of the combined
/// value, the second's the low half.
pub struct Combined<A, B> {
    first: A,
    second: B,
}

impl<A: Checksum, B: Checksum> Combined<A, B> {
    /// Combine two checksums.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Checksum, B: Checksum> Checksum for Combined<A, B> {
    fn reset(&mut self) {
        self.first.reset();
        self.second.reset();
    }

    fn update(&mut self, data: &[u8]) -> Result<(), ChecksumError> {
        self.first.update(data)?;
        self.second.update(data)?;
        Ok(())
    }

    fn update_byte(&mut self, byte: u8) -> Result<(), ChecksumError> {
        self.first.update_byte(byte)?;
        self.second.update_byte(byte)?;
        Ok(())
    }

    fn value(&self) -> Result<u64, ChecksumError> {
        let high = self.first.value()? & 0xffff_ffff;
        let low = self.second.value()? & 0xffff_ffff;
        Ok(high << 32 | low)
    }
}
