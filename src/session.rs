//! The game session: reset, play and game over, one tick at a time.

use crate::{
    config::GameConfig,
    fruit::FruitSource,
    grid::{
        Cell,
        Direction,
    },
    input::{
        JoystickFilter,
        StickSample,
    },
    scoreboard::DigitBuffer,
    snake::{
        Snake,
        StepResult,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionState {
    Playing,
    GameOver,
}

/// What one call to [`Session::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// The reset line was low; the session was reinitialized.
    Reset,
    /// Inside the settle window after a reset; nothing happened.
    Settling,
    /// Game over; waiting for a reset.
    Halted,
    Step(StepResult),
}

/// Owns all game state and writes the score into the shared [`DigitBuffer`].
pub struct Session<'d, F> {
    config: GameConfig,
    snake: Snake,
    filter: JoystickFilter,
    direction: Direction,
    fruit: Option<Cell>,
    score: u32,
    state: SessionState,
    settle: u32,
    digits: &'d DigitBuffer,
    spawner: F,
}

impl<'d, F: FruitSource> Session<'d, F> {
    /// Starts a fresh game. `config` should already have passed
    /// [`GameConfig::validate`]; out-of-range lengths are clamped.
    pub fn new(config: GameConfig, digits: &'d DigitBuffer, spawner: F) -> Self {
        let mut session = Self {
            config,
            snake: Snake::horizontal(config.start_len, config.max_len),
            filter: JoystickFilter::new(config.dead_zone, config.dead_zone_mode, Direction::Right),
            direction: Direction::Right,
            fruit: None,
            score: 0,
            state: SessionState::Playing,
            settle: 0,
            digits,
            spawner,
        };
        session.reset();
        session
    }

    /// Full reinitialization: centred snake heading right, score 0, new fruit.
    pub fn reset(&mut self) {
        self.snake = Snake::horizontal(self.config.start_len, self.config.max_len);
        self.direction = Direction::Right;
        self.filter.set_next(Direction::Right);
        self.score = 0;
        self.state = SessionState::Playing;
        self.digits.show_score(self.score);
        self.fruit = Some(self.spawner.spawn(&self.snake));
        info!("session reset, snake length {}", self.snake.len());
    }

    /// One game-loop period.
    ///
    /// `reset_pressed` is the raw reset button level sampled for this tick.
    /// After a reset the line is ignored for the settle window.
    pub fn tick(&mut self, sample: StickSample, reset_pressed: bool) -> TickOutcome {
        if self.settle > 0 {
            self.settle -= 1;
            if reset_pressed {
                trace!("reset ignored while settling");
            }
            return TickOutcome::Settling;
        }

        if reset_pressed {
            self.reset();
            self.settle = self.config.settle_ticks();
            return TickOutcome::Reset;
        }

        if self.state == SessionState::GameOver {
            return TickOutcome::Halted;
        }

        let requested = self.filter.update(sample, self.direction);
        if requested != Direction::None {
            self.direction = requested;
        }

        let result = self.snake.attempt_step(requested, self.fruit, self.config.walls);
        match result {
            StepResult::Blocked(reason) if reason.is_fatal() => {
                self.state = SessionState::GameOver;
                self.fruit = None;
                info!("game over: {} with score {}", reason, self.score);
            }
            StepResult::MovedAndAte { .. } => {
                self.score = self.score.saturating_add(self.config.reward);
                self.digits.show_score(self.score);
                self.fruit = Some(self.spawner.spawn(&self.snake));
                debug!("fruit eaten, score {} length {}", self.score, self.snake.len());
            }
            StepResult::Blocked(_) | StepResult::Moved { .. } => {}
        }
        TickOutcome::Step(result)
    }

    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    pub const fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Present exactly while playing.
    pub const fn fruit(&self) -> Option<Cell> {
        self.fruit
    }

    pub const fn score(&self) -> u32 {
        self.score
    }

    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Last committed direction.
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub const fn digits(&self) -> &'d DigitBuffer {
        self.digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fruit::RandomSpawner;

    #[test]
    fn new_session_is_playing_with_fruit() {
        let digits = DigitBuffer::new();
        let session = Session::new(GameConfig::default(), &digits, RandomSpawner::seeded(3));
        assert_eq!(session.state(), SessionState::Playing);
        assert_eq!(session.score(), 0);
        assert_eq!(session.snake().len(), 16);
        let fruit = session.fruit().unwrap();
        assert!(!session.snake().contains(fruit));
        assert_eq!(digits.slot(0), Some(0));
        assert_eq!(digits.slot(1), None);
    }

    #[test]
    fn resting_stick_keeps_heading_right() {
        let digits = DigitBuffer::new();
        let mut session = Session::new(GameConfig::default(), &digits, RandomSpawner::seeded(3));
        let head = session.snake().head();
        let outcome = session.tick(StickSample::CENTER, false);
        assert!(matches!(outcome, TickOutcome::Step(StepResult::Moved { .. }) | TickOutcome::Step(StepResult::MovedAndAte { .. })));
        assert_eq!(session.snake().head(), Cell::new(head.x + 1, head.y));
    }

    #[test]
    fn reset_reinitializes_and_settles() {
        let digits = DigitBuffer::new();
        let mut session = Session::new(GameConfig::default(), &digits, RandomSpawner::seeded(3));
        session.tick(StickSample::toward(Direction::Up), false);
        assert_eq!(session.tick(StickSample::CENTER, true), TickOutcome::Reset);
        assert_eq!(session.snake().head(), Cell::new(39, 16));
        for _ in 0..GameConfig::default().settle_ticks() {
            assert_eq!(session.tick(StickSample::CENTER, true), TickOutcome::Settling);
        }
        assert_eq!(session.tick(StickSample::CENTER, true), TickOutcome::Reset);
    }
}
