//! # CRC32 Checksum
//!
//! Streaming wrapper over `crc32fast` (IEEE polynomial).

use crc32fast::Hasher;

use super::{Checksum, ChecksumError};

/// CRC32 (IEEE) checksum, zero-extended to 64 bits.
pub struct Crc32 {
    inner: Hasher,
}

impl Crc32 {
    /// Create a checksum in its initial state.
    pub fn new() -> Self {
        Self {
            inner: Hasher::new(),
        }
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Checksum for Crc32 {
    fn reset(&mut self) {
        self.inner.reset();
    }

    fn update(&mut self, data: &[u8]) -> Result<(), ChecksumError> {
        self.inner.update(data);
        Ok(())
    }

    fn update_byte(&mut self, byte: u8) -> Result<(), ChecksumError> {
        self.inner.update(&[byte]);
        Ok(())
    }

    fn value(&self) -> Result<u64, ChecksumError> {
        // finalize() consumes the hasher, so read from a clone.
        Ok(u64::from(self.inner.clone().finalize()))
    }
}
