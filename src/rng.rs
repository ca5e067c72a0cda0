//! Random source for tile spawning.
//!
//! The engine never touches a global RNG: every game owns a `TileRng`, and
//! board-level spawning accepts any `rand::Rng`, so a seed fully determines
//! a game.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::tile::Tile;

#[derive(Clone, Debug)]
pub struct TileRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl TileRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the OS. The chosen seed is kept so the game can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().r#gen())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for TileRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

/// A 4 with probability `four_probability`, otherwise a 2.
pub fn pick_value<R: Rng + ?Sized>(rng: &mut R, four_probability: f64) -> Tile {
    let roll: f64 = rng.r#gen();
    if roll < four_probability { Tile::FOUR } else { Tile::TWO }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = TileRng::new(42);
        let mut b = TileRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.gen_range(0..1000), b.gen_range(0..1000));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = TileRng::new(1);
        let mut b = TileRng::new(2);
        let seq_a: Vec<u32> = (0..10).map(|_| a.gen_range(0..1000)).collect();
        let seq_b: Vec<u32> = (0..10).map(|_| b.gen_range(0..1000)).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn pick_value_extremes() {
        let mut rng = TileRng::new(7);
        for _ in 0..50 {
            assert_eq!(pick_value(&mut rng, 0.0), Tile::TWO);
            assert_eq!(pick_value(&mut rng, 1.0), Tile::FOUR);
        }
    }

    #[test]
    fn pick_value_mostly_twos() {
        let mut rng = TileRng::new(99);
        let fours = (0..10_000)
            .filter(|_| pick_value(&mut rng, 0.1) == Tile::FOUR)
            .count();
        assert!((700..1300).contains(&fours), "fours = {fours}");
    }
}
