use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::engine::RandomSource;

/// RNG на основе `thread_rng`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut rand::thread_rng());
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Одинаковый seed – одинаковые колоды.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
