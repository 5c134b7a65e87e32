//! # Checksum Capability Set
//!
//! Pluggable checksum/hash interface consumed by the collision probe,
//! together with the algorithm roster implementations.

pub mod adler32;
pub mod combined;
pub mod crc32;
pub mod digest;
pub mod fnv;
pub mod murmur;

pub use self::adler32::Adler32;
pub use self::combined::Combined;
pub use self::crc32::Crc32;
pub use self::fnv::{Fnv32, Fnv64};

use thiserror::Error;

/// Checksum integration errors.
///
/// Every variant indicates a misused adapter or algorithm, not a runtime
/// condition; callers treat them as fatal and abort the run.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumError {
    /// The single-byte update entry point is not available.
    #[error("single-byte updates are not supported by this checksum")]
    ByteUpdateUnsupported,

    /// `update` was called twice without an intervening `reset`.
    #[error("hash already computed; reset() is required before another update")]
    AlreadyComputed,

    /// `value` was called before any `update`.
    #[error("no hash computed yet; update() must run before value()")]
    NoValue,
}

/// Streaming checksum capability set.
///
/// Implementations must survive repeated reset/update/value cycles without
/// state leaking between cycles. Values are zero-extended to unsigned
/// 64 bits even when the algorithm's native width is 32.
pub trait Checksum {
    /// Restore the initial state.
    fn reset(&mut self);

    /// Feed a whole buffer into the checksum.
    fn update(&mut self, data: &[u8]) -> Result<(), ChecksumError>;

    /// Feed a single byte into the checksum.
    fn update_byte(&mut self, byte: u8) -> Result<(), ChecksumError>;

    /// Current checksum value, zero-extended to 64 bits.
    fn value(&self) -> Result<u64, ChecksumError>;
}

/// Adapter for hash functions that only hash a whole buffer at once.
///
/// Holds at most one computed hash per reset cycle: a second `update`
/// without an intervening `reset` is an error, and the single-byte entry
/// point is never available.
pub struct OneShot<F> {
    hash: Option<u64>,
    hasher: F,
}

impl<F: Fn(&[u8]) -> u64> OneShot<F> {
    /// Wrap a whole-buffer hash function.
    pub fn new(hasher: F) -> Self {
        Self { hash: None, hasher }
    }
}

impl<F: Fn(&[u8]) -> u64> Checksum for OneShot<F> {
    fn reset(&mut self) {
        self.hash = None;
    }

    fn update(&mut self, data: &[u8]) -> Result<(), ChecksumError> {
        if self.hash.is_some() {
            return Err(ChecksumError::AlreadyComputed);
        }
        self.hash = Some((self.hasher)(data));
        Ok(())
    }

    fn update_byte(&mut self, _byte: u8) -> Result<(), ChecksumError> {
        Err(ChecksumError::ByteUpdateUnsupported)
    }

    fn value(&self) -> Result<u64, ChecksumError> {
        self.hash.ok_or(ChecksumError::NoValue)
    }
}
