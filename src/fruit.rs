//! Fruit placement.

use rand::{
    Rng,
    RngCore,
    SeedableRng,
    rngs::SmallRng,
};

use crate::{
    grid::{
        Cell,
        GRID_CELLS,
        GRID_H,
        GRID_W,
    },
    snake::Snake,
};

/// Picks the cell for the next fruit. The cell must not overlap `snake`.
pub trait FruitSource {
    fn spawn(&mut self, snake: &Snake) -> Cell;
}

/// Rejection sampler: draws uniform cells until one is free.
///
/// The body never fills the grid, so this terminates with probability 1.
pub struct RandomSpawner<R> {
    rng: R,
}

impl<R: RngCore> RandomSpawner<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSpawner<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> FruitSource for RandomSpawner<R> {
    fn spawn(&mut self, snake: &Snake) -> Cell {
        debug_assert!(snake.len() < GRID_CELLS);
        let mut draws = 0u32;
        loop {
            draws += 1;
            let cell = Cell::new(self.rng.gen_range(0..GRID_W), self.rng.gen_range(0..GRID_H));
            if !snake.contains(cell) {
                trace!("fruit at {} after {} draws", cell, draws);
                return cell;
            }
        }
    }
}
