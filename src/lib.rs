//! # hashprobe
//!
//! Collision and bit-distribution probe for checksum/hash functions.
//!
//! The probe hashes large batches of reproducible pseudo-random byte buffers
//! through pluggable checksum implementations, counts duplicate hash values,
//! times the hashing, and reports how far each output bit strays from being
//! set 50% of the time.
//!
//! ## Modules
//!
//! - **checksum**: the pluggable checksum capability set, a one-shot
//!   adapter, and the algorithm roster (Adler32, CRC32, FNV-1a, Murmur,
//!   truncated cryptographic digests, combined checksum)
//! - **collider**: the probe loop, deterministic input generation, and
//!   bit-quality statistics

pub mod checksum;
pub mod collider;

// Re-exports
pub use checksum::{Checksum, ChecksumError, OneShot};
pub use collider::{run, InputMode, RunConfig, RunResult};
