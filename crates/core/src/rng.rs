//! RNG module - randomness for spawning, shuffling and tile removal
//!
//! Wraps a seedable `StdRng` so games can be replayed from a fixed seed in
//! tests while the terminal runner seeds from OS entropy.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Seedable RNG used by every random board operation
#[derive(Debug, Clone)]
pub struct TileRng {
    inner: StdRng,
    seed: Option<u64>,
}

impl TileRng {
    /// Create a deterministic RNG from `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create an RNG seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// The seed this RNG was created with, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Uniformly pick one element; None for an empty slice
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        items.choose(&mut self.inner).copied()
    }

    /// True with probability `p` (clamped to `[0, 1]`)
    pub fn chance(&mut self, p: f64) -> bool {
        self.inner.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Shuffle a slice in place (Fisher-Yates)
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}

impl Default for TileRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut a = TileRng::new(12345);
        let mut b = TileRng::new(12345);
        let items = [1, 2, 3, 4, 5, 6, 7, 8];
        for _ in 0..100 {
            assert_eq!(a.pick(&items), b.pick(&items));
        }
    }

    #[test]
    fn test_pick_empty() {
        let mut rng = TileRng::new(1);
        let empty: [u32; 0] = [];
        assert_eq!(rng.pick(&empty), None);
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = TileRng::new(7);
        for _ in 0..50 {
            assert!(rng.chance(1.0));
            assert!(!rng.chance(0.0));
            assert!(rng.chance(2.0));
        }
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = TileRng::new(99);
        let mut items = [2, 4, 8, 16, 32];
        rng.shuffle(&mut items);
        let mut sorted = items;
        sorted.sort_unstable();
        assert_eq!(sorted, [2, 4, 8, 16, 32]);
    }

    #[test]
    fn test_seed_reported() {
        assert_eq!(TileRng::new(5).seed(), Some(5));
        assert_eq!(TileRng::from_entropy().seed(), None);
    }
}
