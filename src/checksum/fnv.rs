//! # FNV-1a Checksums
//!
//! Streaming FNV-1a in 32- and 64-bit widths. Fast, non-cryptographic,
//! and trivially resettable, which makes them useful baselines for the
//! collision probe.

use super::{Checksum, ChecksumError};

const FNV32_OFFSET: u32 = 0x811c_9dc5;
const FNV32_PRIME: u32 = 0x0100_0193;

const FNV64_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV64_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a 32-bit checksum, zero-extended to 64 bits.
pub struct Fnv32 {
    state: u32,
}

impl Fnv32 {
    /// Create a checksum in its initial state.
    pub fn new() -> Self {
        Self {
            state: FNV32_OFFSET,
        }
    }
}

impl Default for Fnv32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Checksum for Fnv32 {
    fn reset(&mut self) {
        self.state = FNV32_OFFSET;
    }

    fn update(&mut self, data: &[u8]) -> Result<(), ChecksumError> {
        for &byte in data {
            self.state ^= u32::from(byte);
            self.state = self.state.wrapping_mul(FNV32_PRIME);
        }
        Ok(())
    }

    fn update_byte(&mut self, byte: u8) -> Result<(), ChecksumError> {
        self.state ^= u32::from(byte);
        self.state = self.state.wrapping_mul(FNV32_PRIME);
        Ok(())
    }

    fn value(&self) -> Result<u64, ChecksumError> {
        Ok(u64::from(self.state))
    }
}

/// FNV-1a 64-bit checksum.
pub struct Fnv64 {
    state: u64,
}

impl Fnv64 {
    /// Create a checksum in its initial state.
    pub fn new() -> Self {
        Self {
            state: FNV64_OFFSET,
        }
    }
}

impl Default for Fnv64 {
    fn default() -> Self {
        Self::new()
    }
}

impl Checksum for Fnv64 {
    fn reset(&mut self) {
        self.state = FNV64_OFFSET;
    }

    fn update(&mut self, data: &[u8]) -> Result<(), ChecksumError> {
        for &byte in data {
            self.state ^= u64::from(byte);
            self.state = self.state.wrapping_mul(FNV64_PRIME);
        }
        Ok(())
    }

    fn update_byte(&mut self, byte: u8) -> Result<(), ChecksumError> {
        self.state ^= u64::from(byte);
        self.state = self.state.wrapping_mul(FNV64_PRIME);
        Ok(())
    }

    fn value(&self) -> Result<u64, ChecksumError> {
        Ok(self.state)
    }
}
