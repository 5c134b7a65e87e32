//! # Collision Probe Integration Tests
//!
//! End-to-end tests driving the probe loop with synthetic checksums.

use hashprobe::checksum::{Checksum, ChecksumError, Fnv32, Fnv64};
use hashprobe::collider::{run, InputGenerator, InputMode, RunConfig};

/// Checksum stub cycling through a fixed set of hash values. The cycle
/// position survives resets, like a real checksum fed different buffers.
struct Cycling {
    values: Vec<u64>,
    next: usize,
    current: Option<u64>,
}

impl Cycling {
    fn new(values: &[u64]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
            current: None,
        }
    }
}

impl Checksum for Cycling {
    fn reset(&mut self) {
        self.current = None;
    }

    fn update(&mut self, _data: &[u8]) -> Result<(), ChecksumError> {
        self.current = Some(self.values[self.next % self.values.len()]);
        self.next += 1;
        Ok(())
    }

    fn update_byte(&mut self, _byte: u8) -> Result<(), ChecksumError> {
        Err(ChecksumError::ByteUpdateUnsupported)
    }

    fn value(&self) -> Result<u64, ChecksumError> {
        self.current.ok_or(ChecksumError::NoValue)
    }
}

/// Checksum stub returning the iteration counter, so no value ever repeats.
struct Identity {
    counter: u64,
    current: Option<u64>,
}

impl Identity {
    fn new() -> Self {
        Self {
            counter: 0,
            current: None,
        }
    }
}

impl Checksum for Identity {
    fn reset(&mut self) {
        self.current = None;
    }

    fn update(&mut self, _data: &[u8]) -> Result<(), ChecksumError> {
        self.current = Some(self.counter);
        self.counter += 1;
        Ok(())
    }

    fn update_byte(&mut self, _byte: u8) -> Result<(), ChecksumError> {
        Err(ChecksumError::ByteUpdateUnsupported)
    }

    fn value(&self) -> Result<u64, ChecksumError> {
        self.current.ok_or(ChecksumError::NoValue)
    }
}

#[cfg(test)]
mod collision_counting_tests {
    use super::*;

    #[test]
    fn test_cycling_values_collide_after_first_pass() {
        let n = 100;
        let config = RunConfig::new("cycling", n, 16, 10, InputMode::TotalRandom);
        let mut checksum = Cycling::new(&[7, 11, 13]);

        let result = run(&config, &mut checksum).unwrap();

        // Three distinct values, then every iteration repeats one.
        assert_eq!(result.collisions, (n - 3) as u64);
        assert_eq!(result.first_collision, Some(4));
    }

    #[test]
    fn test_identity_checksum_never_collides() {
        let config = RunConfig::new("identity", 100, 16, 10, InputMode::TotalRandom);
        let mut checksum = Identity::new();

        let result = run(&config, &mut checksum).unwrap();

        assert_eq!(result.collisions, 0);
        assert_eq!(result.first_collision, None);
    }

    #[test]
    fn test_constant_checksum_collides_everywhere() {
        let config = RunConfig::new("constant", 50, 16, 10, InputMode::TotalRandom);
        let mut checksum = Cycling::new(&[42]);

        let result = run(&config, &mut checksum).unwrap();

        assert_eq!(result.collisions, 49);
        assert_eq!(result.first_collision, Some(2));
    }
}

#[cfg(test)]
mod reproducibility_tests {
    use super::*;

    fn probe_fnv64(mode: InputMode) -> hashprobe::RunResult {
        let config = RunConfig::new("repro", 500, 64, 10, mode);
        run(&config, &mut Fnv64::new()).unwrap()
    }

    #[test]
    fn test_total_random_runs_are_identical() {
        let first = probe_fnv64(InputMode::TotalRandom);
        let second = probe_fnv64(InputMode::TotalRandom);

        assert_eq!(first.collisions, second.collisions);
        assert_eq!(first.first_collision, second.first_collision);
        assert_eq!(first.bit_counts, second.bit_counts);
    }

    #[test]
    fn test_small_changes_runs_are_identical() {
        let first = probe_fnv64(InputMode::SmallChanges);
        let second = probe_fnv64(InputMode::SmallChanges);

        assert_eq!(first.collisions, second.collisions);
        assert_eq!(first.first_collision, second.first_collision);
        assert_eq!(first.bit_counts, second.bit_counts);
    }

    #[test]
    fn test_generator_sequences_are_identical() {
        let mut a = InputGenerator::new(InputMode::TotalRandom, 128);
        let mut b = InputGenerator::new(InputMode::TotalRandom, 128);

        for _ in 0..50 {
            assert_eq!(a.next_buffer(), b.next_buffer());
        }
    }
}

#[cfg(test)]
mod bit_statistics_tests {
    use super::*;

    #[test]
    fn test_bit_counters_bounded_by_iterations() {
        let n = 300;
        let config = RunConfig::new("bounds", n, 32, 10, InputMode::TotalRandom);
        let result = run(&config, &mut Fnv64::new()).unwrap();

        for &count in result.bit_counts.counts() {
            assert!(count <= n as u64);
        }
    }

    #[test]
    fn test_32_bit_checksum_detected_as_32_bit() {
        let config = RunConfig::new("narrow", 200, 32, 10, InputMode::TotalRandom);
        let result = run(&config, &mut Fnv32::new()).unwrap();

        assert_eq!(result.bit_counts.counts()[32], 0);
        assert_eq!(result.bit_counts.counts()[33], 0);
        assert_eq!(result.quality.bit_width, 32);
    }

    #[test]
    fn test_64_bit_checksum_detected_as_64_bit() {
        let config = RunConfig::new("wide", 200, 32, 10, InputMode::TotalRandom);
        let result = run(&config, &mut Fnv64::new()).unwrap();

        assert_eq!(result.quality.bit_width, 64);
    }
}

#[cfg(test)]
mod cadence_tests {
    use super::*;

    #[test]
    fn test_iterations_below_log_points_still_complete() {
        // Interval is zero here; no progress lines, but the run finishes.
        let config = RunConfig::new("tiny", 5, 16, 10, InputMode::TotalRandom);
        let result = run(&config, &mut Identity::new()).unwrap();
        assert_eq!(result.collisions, 0);
    }

    #[test]
    fn test_zero_log_points_still_complete() {
        let config = RunConfig::new("quiet", 20, 16, 0, InputMode::TotalRandom);
        let result = run(&config, &mut Identity::new()).unwrap();
        assert_eq!(result.collisions, 0);
    }
}

#[cfg(test)]
mod generator_property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_small_changes_mutates_exactly_one_byte(
            byte_length in 1usize..=32,
            iterations in 2usize..=100,
        ) {
            let mut generator = InputGenerator::new(InputMode::SmallChanges, byte_length);
            let mut previous = generator.next_buffer().to_vec();

            for i in 1..iterations {
                let current = generator.next_buffer().to_vec();
                let diffs: Vec<usize> = (0..byte_length)
                    .filter(|&pos| previous[pos] != current[pos])
                    .collect();
                prop_assert_eq!(diffs, vec![(i - 1) % byte_length]);
                previous = current;
            }
        }

        #[test]
        fn prop_total_random_is_reproducible(
            byte_length in 1usize..=64,
            iterations in 1usize..=50,
        ) {
            let mut a = InputGenerator::new(InputMode::TotalRandom, byte_length);
            let mut b = InputGenerator::new(InputMode::TotalRandom, byte_length);
            for _ in 0..iterations {
                prop_assert_eq!(a.next_buffer(), b.next_buffer());
            }
        }
    }
}
