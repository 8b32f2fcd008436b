//! Test shuffles — deterministic `SeededShuffle` implementations for tests.

use examforge_core::shuffle::SeededShuffle;

/// A shuffle that leaves every sequence in its original order. Suitable for
/// tests that exercise selection mechanics rather than randomness.
#[derive(Debug, Clone, Copy)]
pub struct IdentityShuffle;

impl SeededShuffle for IdentityShuffle {
    fn permutation(&self, len: usize, _seed: u64) -> Vec<usize> {
        (0..len).collect()
    }
}

/// A shuffle that reverses every sequence. Used in tests that need a second
/// fixed ordering distinguishable from `IdentityShuffle`.
#[derive(Debug, Clone, Copy)]
pub struct ReverseShuffle;

impl SeededShuffle for ReverseShuffle {
    fn permutation(&self, len: usize, _seed: u64) -> Vec<usize> {
        (0..len).rev().collect()
    }
}
