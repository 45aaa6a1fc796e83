#![allow(dead_code)]

use badge_snake::{
    Cell,
    FruitSource,
    Snake,
};

/// Hands out fruit cells in a fixed order, then parks the fruit on one cell.
pub struct Scripted {
    cells: Vec<Cell>,
    next: usize,
    parked: Cell,
}

impl Scripted {
    pub fn new(cells: impl IntoIterator<Item = Cell>, parked: Cell) -> Self {
        Self {
            cells: cells.into_iter().collect(),
            next: 0,
            parked,
        }
    }

    /// Always the same cell.
    pub fn parked(cell: Cell) -> Self {
        Self::new([], cell)
    }

    pub fn spawned(&self) -> usize {
        self.next
    }
}

impl FruitSource for Scripted {
    fn spawn(&mut self, snake: &Snake) -> Cell {
        let cell = self.cells.get(self.next).copied().unwrap_or(self.parked);
        self.next += 1;
        assert!(!snake.contains(cell), "scripted fruit {cell:?} lands on the snake");
        cell
    }
}
