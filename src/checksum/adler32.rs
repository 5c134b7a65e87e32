//! # Adler32 Checksum
//!
//! Streaming wrapper over the `adler32` crate.

use adler32::RollingAdler32;

use super::{Checksum, ChecksumError};

/// Adler32 checksum (RFC 1950), zero-extended to 64 bits.
pub struct Adler32 {
    inner: RollingAdler32,
}

impl Adler32 {
    /// Create a checksum in its initial state.
    pub fn new() -> Self {
        Self {
            inner: RollingAdler32::new(),
        }
    }
}

impl Default for Adler32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Checksum for Adler32 {
    fn reset(&mut self) {
        self.inner = RollingAdler32::new();
    }

    fn update(&mut self, data: &[u8]) -> Result<(), ChecksumError> {
        self.inner.update_buffer(data);
        Ok(())
    }

    fn update_byte(&mut self, byte: u8) -> Result<(), ChecksumError> {
        self.inner.update(byte);
        Ok(())
    }

    fn value(&self) -> Result<u64, ChecksumError> {
        Ok(u64::from(self.inner.hash()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_one() {
        // Adler32 of no data is the initial value 1.
        let adler = Adler32::new();
        assert_eq!(adler.value().unwrap(), 1);
    }

    #[test]
    fn test_known_value() {
        // RFC 1950 example: "Wikipedia" -> 0x11E60398.
        let mut adler = Adler32::new();
        adler.update(b"Wikipedia").unwrap();
        assert_eq!(adler.value().unwrap(), 0x11E6_0398);
    }

    #[test]
    fn test_reset_clears_state() {
        let mut adler = Adler32::new();
        adler.update(b"some data").unwrap();
        adler.reset();
        assert_eq!(adler.value().unwrap(), 1);
    }

    #[test]
    fn test_byte_updates_match_buffer_update() {
        let mut by_buffer = Adler32::new();
        by_buffer.update(b"abc").unwrap();

        let mut by_bytes = Adler32::new();
        for &b in b"abc" {
            by_bytes.update_byte(b).unwrap();
        }

        assert_eq!(by_buffer.value().unwrap(), by_bytes.value().unwrap());
    }
}
