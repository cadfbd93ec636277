//! Injectable random number generation.
//!
//! ## Key Features
//!
//! - **Injectable**: the engine only depends on the `RandomSource` trait
//! - **Deterministic**: `GameRng` with the same seed produces identical layouts
//! - **Scriptable**: `SequenceRng` replays fixed draws for tests and demos
//!
//! ```
//! use dev_journey::core::{GameRng, RandomSource};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! let mut a = [1, 2, 3];
//! let mut b = [1, 2, 3];
//! rng1.shuffle(&mut a);
//! rng2.shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform random indices.
///
/// Implementors only provide `gen_index`; shuffling and choosing are
/// derived from it with an unbiased Fisher-Yates shuffle.
pub trait RandomSource {
    /// Uniform index in `0..bound`. `bound` is always non-zero.
    fn gen_index(&mut self, bound: usize) -> usize;

    /// Shuffle a slice in place.
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_index(i + 1);
            slice.swap(i, j);
        }
    }

    /// Choose a random element from a slice.
    fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        let index = self.gen_index(slice.len());
        slice.get(index)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn gen_index(&mut self, bound: usize) -> usize {
        (**self).gen_index(bound)
    }

    fn shuffle<T>(&mut self, slice: &mut [T]) {
        (**self).shuffle(slice);
    }

    fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        (**self).choose(slice)
    }
}

/// Seedable game RNG.
///
/// Uses ChaCha8 for speed while keeping a reproducible seed around so a
/// surprising layout can be replayed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local generator.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn gen_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

/// Scripted random source.
///
/// Returns the scripted values in order (wrapping around), each reduced
/// modulo the requested bound. An empty script always yields 0.
#[derive(Clone, Debug, Default)]
pub struct SequenceRng {
    values: Vec<usize>,
    cursor: usize,
}

impl SequenceRng {
    /// Create a source replaying `values`.
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// A source that always draws index 0.
    ///
    /// With the default Fisher-Yates shuffle this leaves the first
    /// element at the back, which makes layouts easy to predict.
    #[must_use]
    pub fn zeros() -> Self {
        Self::default()
    }

    /// Number of draws made so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRng {
    fn gen_index(&mut self, bound: usize) -> usize {
        let value = if self.values.is_empty() {
            0
        } else {
            self.values[self.cursor % self.values.len()]
        };
        self.cursor += 1;
        value % bound
    }
}
