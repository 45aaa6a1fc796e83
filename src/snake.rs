//! Snake body and the movement engine.

use heapless::Deque;

use crate::{
    config::WallMode,
    grid::{
        Cell,
        Direction,
        GRID_H,
        GRID_W,
    },
};

/// Hard capacity of the body buffer.
pub const MAX_SNAKE_LEN: usize = 100;

/// Why a step did not move the snake.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Blocked {
    /// No direction requested.
    Idle,
    /// The wall rejected the move without ending the game.
    WallHeld,
    /// The head left the grid.
    Wall,
    /// The head ran into the body.
    Body,
}

impl Blocked {
    /// `true` when the step ends the game.
    pub const fn is_fatal(self) -> bool {
        matches!(self, Blocked::Wall | Blocked::Body)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepResult {
    Blocked(Blocked),
    /// Same-length move: `vacated` is the old tail cell.
    Moved { head: Cell, vacated: Cell },
    /// The head landed on the fruit. `vacated` is `None` when the body grew,
    /// `Some(tail)` when it was already at its length cap.
    MovedAndAte { head: Cell, vacated: Option<Cell> },
}

/// Ordered body cells, tail at the front, head at the back.
///
/// Cells are always in bounds and distinct.
#[derive(Clone, Debug)]
pub struct Snake {
    body: Deque<Cell, MAX_SNAKE_LEN>,
    max_len: usize,
}

impl Snake {
    /// A horizontal snake of `len` cells centred on the grid, heading right.
    pub fn horizontal(len: usize, max_len: usize) -> Self {
        let max_len = max_len.clamp(1, MAX_SNAKE_LEN);
        let len = len.clamp(1, max_len.min(GRID_W as usize));
        // len <= GRID_W, so the casts below stay within i8
        let start_x = GRID_W / 2 - (len / 2) as i8;
        let y = GRID_H / 2;

        let mut body = Deque::new();
        for i in 0..len as i8 {
            let pushed = body.push_back(Cell::new(start_x + i, y));
            debug_assert!(pushed.is_ok());
        }
        Self { body, max_len }
    }

    /// Builds a snake from explicit cells, tail first.
    ///
    /// Returns `None` if the cells are empty, longer than `max_len`, out of
    /// bounds, or overlapping.
    pub fn from_cells(cells: &[Cell], max_len: usize) -> Option<Self> {
        let max_len = max_len.min(MAX_SNAKE_LEN);
        if cells.is_empty() || cells.len() > max_len {
            return None;
        }
        let mut body = Deque::new();
        for (i, &cell) in cells.iter().enumerate() {
            if !cell.in_bounds() || cells[..i].contains(&cell) {
                return None;
            }
            body.push_back(cell).ok()?;
        }
        Some(Self { body, max_len })
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub const fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn head(&self) -> Cell {
        self.body.back().copied().unwrap_or_default()
    }

    pub fn tail(&self) -> Cell {
        self.body.front().copied().unwrap_or_default()
    }

    /// Cells from tail to head.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.iter().any(|&c| c == cell)
    }

    /// Tries to advance the head one cell in `dir`.
    ///
    /// A blocked step leaves the body untouched. Eating grows the body by one
    /// until `max_len`; past that, eating moves like a plain step.
    pub fn attempt_step(&mut self, dir: Direction, fruit: Option<Cell>, walls: WallMode) -> StepResult {
        if dir == Direction::None || self.body.is_empty() {
            return StepResult::Blocked(Blocked::Idle);
        }

        let head = self.head().step(dir);
        if !head.in_bounds() {
            return StepResult::Blocked(match walls {
                WallMode::Fatal => Blocked::Wall,
                WallMode::Hold => Blocked::WallHeld,
            });
        }

        let eats = fruit == Some(head);
        let grows = eats && self.body.len() < self.max_len;
        // The tail cell is free by the time the head arrives, unless we grow.
        if self.body.iter().skip(usize::from(!grows)).any(|&c| c == head) {
            return StepResult::Blocked(Blocked::Body);
        }

        let vacated = if grows { None } else { self.body.pop_front() };
        let pushed = self.body.push_back(head);
        debug_assert!(pushed.is_ok(), "body over capacity");

        match (eats, vacated) {
            (true, vacated) => StepResult::MovedAndAte { head, vacated },
            (false, Some(vacated)) => StepResult::Moved { head, vacated },
            // a non-growing step always pops the tail of a non-empty body
            (false, None) => StepResult::Moved { head, vacated: head },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(snake: &Snake) -> Vec<Cell> {
        snake.iter().collect()
    }

    #[test]
    fn horizontal_is_centred() {
        let snake = Snake::horizontal(16, MAX_SNAKE_LEN);
        assert_eq!(snake.len(), 16);
        assert_eq!(snake.tail(), Cell::new(24, 16));
        assert_eq!(snake.head(), Cell::new(39, 16));
    }

    #[test]
    fn from_cells_rejects_invalid_bodies() {
        assert!(Snake::from_cells(&[], 10).is_none());
        assert!(Snake::from_cells(&[Cell::new(-1, 0)], 10).is_none());
        assert!(Snake::from_cells(&[Cell::new(1, 1), Cell::new(1, 1)], 10).is_none());
        assert!(Snake::from_cells(&[Cell::new(1, 1), Cell::new(2, 1)], 1).is_none());
        assert!(Snake::from_cells(&[Cell::new(1, 1), Cell::new(2, 1)], 2).is_some());
    }

    #[test]
    fn idle_step_does_nothing() {
        let mut snake = Snake::horizontal(4, 10);
        let before = cells(&snake);
        assert_eq!(
            snake.attempt_step(Direction::None, None, WallMode::Fatal),
            StepResult::Blocked(Blocked::Idle)
        );
        assert_eq!(cells(&snake), before);
    }

    #[test]
    fn plain_step_shifts_body() {
        let mut snake = Snake::from_cells(&[Cell::new(1, 1), Cell::new(2, 1), Cell::new(3, 1)], 10).unwrap();
        let result = snake.attempt_step(Direction::Down, None, WallMode::Fatal);
        assert_eq!(
            result,
            StepResult::Moved {
                head: Cell::new(3, 2),
                vacated: Cell::new(1, 1)
            }
        );
        assert_eq!(cells(&snake), [Cell::new(2, 1), Cell::new(3, 1), Cell::new(3, 2)]);
    }

    #[test]
    fn eating_grows_by_one() {
        let mut snake = Snake::from_cells(&[Cell::new(1, 1), Cell::new(2, 1)], 10).unwrap();
        let result = snake.attempt_step(Direction::Right, Some(Cell::new(3, 1)), WallMode::Fatal);
        assert_eq!(
            result,
            StepResult::MovedAndAte {
                head: Cell::new(3, 1),
                vacated: None
            }
        );
        assert_eq!(cells(&snake), [Cell::new(1, 1), Cell::new(2, 1), Cell::new(3, 1)]);
    }

    #[test]
    fn eating_at_cap_moves_instead() {
        let mut snake = Snake::from_cells(&[Cell::new(1, 1), Cell::new(2, 1)], 2).unwrap();
        let result = snake.attempt_step(Direction::Right, Some(Cell::new(3, 1)), WallMode::Fatal);
        assert_eq!(
            result,
            StepResult::MovedAndAte {
                head: Cell::new(3, 1),
                vacated: Some(Cell::new(1, 1))
            }
        );
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn walls_are_fatal_or_held() {
        let body = [Cell::new(GRID_W - 2, 0), Cell::new(GRID_W - 1, 0)];
        let mut snake = Snake::from_cells(&body, 10).unwrap();
        assert_eq!(
            snake.attempt_step(Direction::Right, None, WallMode::Fatal),
            StepResult::Blocked(Blocked::Wall)
        );
        assert_eq!(
            snake.attempt_step(Direction::Up, None, WallMode::Hold),
            StepResult::Blocked(Blocked::WallHeld)
        );
        assert_eq!(cells(&snake), body);
        assert!(Blocked::Wall.is_fatal());
        assert!(!Blocked::WallHeld.is_fatal());
    }

    #[test]
    fn biting_the_body_is_fatal() {
        // A hook: moving Up from the head lands on the second segment.
        let body = [
            Cell::new(5, 4),
            Cell::new(5, 5),
            Cell::new(6, 5),
            Cell::new(6, 6),
            Cell::new(5, 6),
        ];
        let mut snake = Snake::from_cells(&body, 10).unwrap();
        assert_eq!(
            snake.attempt_step(Direction::Up, None, WallMode::Fatal),
            StepResult::Blocked(Blocked::Body)
        );
        assert_eq!(cells(&snake), body);
    }

    #[test]
    fn chasing_the_tail_is_allowed() {
        // A closed 2x2 loop: the head steps into the cell the tail is leaving.
        let body = [Cell::new(1, 1), Cell::new(2, 1), Cell::new(2, 2), Cell::new(1, 2)];
        let mut snake = Snake::from_cells(&body, 10).unwrap();
        assert_eq!(
            snake.attempt_step(Direction::Up, None, WallMode::Fatal),
            StepResult::Moved {
                head: Cell::new(1, 1),
                vacated: Cell::new(1, 1)
            }
        );
    }

    #[test]
    fn growing_into_the_tail_is_fatal() {
        // Same loop, but the tail stays put because the snake grows.
        let body = [Cell::new(1, 1), Cell::new(2, 1), Cell::new(2, 2), Cell::new(1, 2)];
        let mut snake = Snake::from_cells(&body, 10).unwrap();
        assert_eq!(
            snake.attempt_step(Direction::Up, Some(Cell::new(1, 1)), WallMode::Fatal),
            StepResult::Blocked(Blocked::Body)
        );
    }
}
