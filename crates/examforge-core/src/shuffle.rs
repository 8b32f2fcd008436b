//! Seeded shuffle primitive for determinism.
//!
//! In production, this is backed by a ChaCha stream cipher RNG. In tests,
//! a fixed-order implementation is injected.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Abstraction over the seeded permutation used during selection.
pub trait SeededShuffle: Send + Sync {
    /// Returns a permutation of the indices `0..len`, fixed by `(len, seed)`.
    ///
    /// Implementations must be pure: the same `(len, seed)` pair always
    /// yields the same permutation, and no state carries between calls.
    fn permutation(&self, len: usize, seed: u64) -> Vec<usize>;
}

/// Production shuffle: Fisher-Yates over a `ChaCha8Rng` seeded per call.
///
/// ChaCha output is stable across platforms and `rand` releases, so a
/// permutation issued today reproduces bit-for-bit later.
#[derive(Debug, Clone, Copy)]
pub struct ChaChaShuffle;

impl SeededShuffle for ChaChaShuffle {
    fn permutation(&self, len: usize, seed: u64) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..len).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        indices.shuffle(&mut rng);
        indices
    }
}

/// Returns a shuffled copy of `items`, leaving the input untouched.
#[must_use]
pub fn shuffled<T: Clone>(shuffle: &dyn SeededShuffle, items: &[T], seed: u64) -> Vec<T> {
    shuffle
        .permutation(items.len(), seed)
        .into_iter()
        .map(|index| items[index].clone())
        .collect()
}
