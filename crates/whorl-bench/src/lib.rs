//! Benchmark profiles and utilities for Whorl.
//!
//! Provides deterministic inputs for the criterion benches:
//!
//! - [`BenchProfile::reference`]: 10K-element cycle, 1K operations
//! - [`BenchProfile::stress`]: 1M-element cycle, 10K operations
//! - [`step_schedule`]: seeded rotation amounts for a profile
//! - [`profile_cycle`]: the cycle a profile operates on

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use whorl_cycle::{CircularSeq, CycleError};

/// Size and seed of one benchmark scenario.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchProfile {
    /// Number of elements in the cycle.
    pub len: usize,
    /// Number of operations each iteration performs.
    pub ops: usize,
    /// Seed for [`step_schedule`].
    pub seed: u64,
}

impl BenchProfile {
    /// Default seed shared by all built-in profiles.
    pub const DEFAULT_SEED: u64 = 42;

    /// Reference profile: 10K elements, 1K operations.
    pub fn reference() -> Self {
        Self {
            len: 10_000,
            ops: 1_000,
            seed: Self::DEFAULT_SEED,
        }
    }

    /// Stress profile: 1M elements, 10K operations.
    pub fn stress() -> Self {
        Self {
            len: 1_000_000,
            ops: 10_000,
            seed: Self::DEFAULT_SEED,
        }
    }
}

impl Default for BenchProfile {
    fn default() -> Self {
        Self::reference()
    }
}

/// Build the cycle `0, 1, .., len - 1` focused on `0`.
///
/// Returns `Err(CycleError::EmptyInput)` if `profile.len == 0`.
pub fn profile_cycle(profile: &BenchProfile) -> Result<CircularSeq<u64>, CycleError> {
    CircularSeq::try_from_iter(0..profile.len as u64)
}

/// `profile.ops` rotation amounts, each in `0..profile.len`.
///
/// Deterministic for a given profile: the same seed always yields the
/// same schedule.
pub fn step_schedule(profile: &BenchProfile) -> Vec<usize> {
    if profile.len == 0 {
        return Vec::new();
    }
    let mut rng = ChaCha8Rng::seed_from_u64(profile.seed);
    (0..profile.ops)
        .map(|_| (rng.next_u64() % profile.len as u64) as usize)
        .collect()
}
