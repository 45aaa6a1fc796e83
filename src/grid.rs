//! Playfield geometry: grid bounds, cells and directions.
//!
//! Coordinates follow the LCD: `x` grows to the right, `y` grows downward.

/// Grid width in cells.
pub const GRID_W: i8 = 64;
/// Grid height in cells.
pub const GRID_H: i8 = 32;
/// Total number of cells on the grid.
pub const GRID_CELLS: usize = GRID_W as usize * GRID_H as usize;

/// One grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cell {
    pub x: i8,
    pub y: i8,
}

impl Cell {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// `true` when the cell lies inside `[0, GRID_W) × [0, GRID_H)`.
    pub const fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < GRID_W && self.y >= 0 && self.y < GRID_H
    }

    /// The neighbouring cell one step in `dir`. May be out of bounds.
    #[must_use]
    pub const fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Movement direction. `None` means the snake is not asked to move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector of the direction.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::None => (0, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::None => Direction::None,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// `true` if `self` is the exact 180° reverse of `other`. `None` reverses nothing.
    pub const fn reverses(self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }
}
