//! # Digest Truncation
//!
//! 64-bit views of cryptographic digests. The full digests never collide in
//! practice, so the probe measures their truncated 64-bit prefixes the same
//! way it measures the native 32/64-bit checksums.

use md5::{Digest, Md5};
use sha2::Sha256;

fn prefix_u64(bytes: &[u8]) -> u64 {
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&bytes[..8]);
    u64::from_le_bytes(prefix)
}

/// First eight MD5 digest bytes, little-endian.
pub fn md5_u64(data: &[u8]) -> u64 {
    prefix_u64(Md5::digest(data).as_slice())
}

/// First eight SHA-256 digest bytes, little-endian.
pub fn sha256_u64(data: &[u8]) -> u64 {
    prefix_u64(Sha256::digest(data).as_slice())
}

/// First eight BLAKE3 digest bytes, little-endian.
pub fn blake3_u64(data: &[u8]) -> u64 {
    prefix_u64(blake3::hash(data).as_bytes())
}
