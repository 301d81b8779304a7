//! Uniform integer source consumed by decoration features.

use rand::{Rng, RngCore};

/// Supplies uniform integers in `[0, bound)`.
///
/// Features draw in a fixed order, so two sources that return the same
/// sequence produce the same voxel edits.
pub trait RandomSource {
    /// Returns a uniform integer in `[0, bound)`. `bound` must be non-zero.
    fn next_int(&mut self, bound: u32) -> u32;
}

impl<R: RngCore> RandomSource for R {
    fn next_int(&mut self, bound: u32) -> u32 {
        self.random_range(0..bound)
    }
}

/// Replays a fixed list of draws and records every bound it was asked for.
#[cfg(test)]
pub(crate) struct ScriptedRandom {
    draws: std::collections::VecDeque<u32>,
    pub(crate) bounds: Vec<u32>,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            bounds: Vec::new(),
        }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.draws.len()
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn next_int(&mut self, bound: u32) -> u32 {
        let value = self
            .draws
            .pop_front()
            .expect("scripted random source exhausted");
        assert!(value < bound, "scripted draw {value} outside [0, {bound})");
        self.bounds.push(bound);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_rng_draws_stay_below_bound() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for bound in [1, 2, 3, 16, 1000] {
            for _ in 0..200 {
                assert!(rng.next_int(bound) < bound);
            }
        }
    }

    #[test]
    fn test_bound_of_one_always_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!((0..100).all(|_| rng.next_int(1) == 0));
    }

    #[test]
    fn test_scripted_source_records_bounds() {
        let mut rng = ScriptedRandom::new([3, 0]);
        assert_eq!(rng.next_int(16), 3);
        assert_eq!(rng.next_int(5), 0);
        assert_eq!(rng.bounds, vec![16, 5]);
        assert_eq!(rng.remaining(), 0);
    }
}
