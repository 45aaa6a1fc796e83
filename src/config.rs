//! Game tunables.
//!
//! [`GameConfig::default`] is the growing variant: fatal walls, growth up to
//! [`MAX_SNAKE_LEN`], and a dead zone that keeps the last request.
//! [`GameConfig::classic`] is the fixed-length variant where walls only block.

use core::fmt;

use embassy_time::Duration;

use crate::{
    grid::GRID_W,
    input::MAX_DEAD_ZONE,
    snake::MAX_SNAKE_LEN,
};

/// What a step into the wall does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WallMode {
    /// The game ends.
    #[default]
    Fatal,
    /// The move is rejected and the snake holds its position.
    Hold,
}

/// What the joystick filter reports while the stick rests in the dead zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeadZoneMode {
    /// Keep the previous request; the snake keeps moving.
    #[default]
    Hold,
    /// Request [`Direction::None`](crate::Direction::None); the snake stops.
    Stop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameConfig {
    pub start_len: usize,
    pub max_len: usize,
    pub reward: u32,
    /// Dead-zone radius in ADC counts, at most [`MAX_DEAD_ZONE`].
    pub dead_zone: u16,
    pub dead_zone_mode: DeadZoneMode,
    pub walls: WallMode,
    pub tick_period: Duration,
    pub scan_period: Duration,
    pub reset_settle: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_len: 16,
            max_len: MAX_SNAKE_LEN,
            reward: 10,
            dead_zone: 700,
            dead_zone_mode: DeadZoneMode::Hold,
            walls: WallMode::Fatal,
            tick_period: Duration::from_millis(200),
            scan_period: Duration::from_micros(2500),
            reset_settle: Duration::from_millis(500),
        }
    }
}

impl GameConfig {
    /// Fixed-length snake, walls block instead of killing, centred stick stops.
    pub fn classic() -> Self {
        let config = Self::default();
        config
            .with_max_len(config.start_len)
            .with_walls(WallMode::Hold)
            .with_dead_zone_mode(DeadZoneMode::Stop)
    }

    #[must_use]
    pub const fn with_start_len(self, start_len: usize) -> Self {
        Self { start_len, ..self }
    }

    #[must_use]
    pub const fn with_max_len(self, max_len: usize) -> Self {
        Self { max_len, ..self }
    }

    #[must_use]
    pub const fn with_reward(self, reward: u32) -> Self {
        Self { reward, ..self }
    }

    #[must_use]
    pub const fn with_dead_zone(self, dead_zone: u16) -> Self {
        Self { dead_zone, ..self }
    }

    #[must_use]
    pub const fn with_dead_zone_mode(self, dead_zone_mode: DeadZoneMode) -> Self {
        Self {
            dead_zone_mode,
            ..self
        }
    }

    #[must_use]
    pub const fn with_walls(self, walls: WallMode) -> Self {
        Self { walls, ..self }
    }

    #[must_use]
    pub const fn with_tick_period(self, tick_period: Duration) -> Self {
        Self {
            tick_period,
            ..self
        }
    }

    #[must_use]
    pub const fn with_scan_period(self, scan_period: Duration) -> Self {
        Self {
            scan_period,
            ..self
        }
    }

    #[must_use]
    pub const fn with_reset_settle(self, reset_settle: Duration) -> Self {
        Self {
            reset_settle,
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_len == 0 {
            return Err(ConfigError::EmptySnake);
        }
        if self.max_len > MAX_SNAKE_LEN {
            return Err(ConfigError::CapacityExceeded {
                max_len: self.max_len,
            });
        }
        if self.start_len > self.max_len {
            return Err(ConfigError::StartExceedsMax {
                start_len: self.start_len,
                max_len: self.max_len,
            });
        }
        if self.start_len > GRID_W as usize {
            return Err(ConfigError::StartExceedsGrid {
                start_len: self.start_len,
            });
        }
        if self.tick_period.as_ticks() == 0 || self.scan_period.as_ticks() == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        if self.dead_zone > MAX_DEAD_ZONE {
            return Err(ConfigError::DeadZoneTooLarge {
                dead_zone: self.dead_zone,
            });
        }
        Ok(())
    }

    /// Game ticks spent ignoring the reset line after a reset.
    pub fn settle_ticks(&self) -> u32 {
        let tick = self.tick_period.as_ticks().max(1);
        let ticks = self.reset_settle.as_ticks().div_ceil(tick);
        u32::try_from(ticks).unwrap_or(u32::MAX)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    EmptySnake,
    CapacityExceeded { max_len: usize },
    StartExceedsMax { start_len: usize, max_len: usize },
    StartExceedsGrid { start_len: usize },
    ZeroPeriod,
    DeadZoneTooLarge { dead_zone: u16 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptySnake => f.write_str("start length must be at least 1"),
            ConfigError::CapacityExceeded { max_len } => write!(
                f,
                "max length {max_len} exceeds body capacity {MAX_SNAKE_LEN}"
            ),
            ConfigError::StartExceedsMax { start_len, max_len } => {
                write!(f, "start length {start_len} exceeds max length {max_len}")
            }
            ConfigError::StartExceedsGrid { start_len } => {
                write!(f, "start length {start_len} does not fit a {GRID_W}-cell row")
            }
            ConfigError::ZeroPeriod => f.write_str("tick and scan periods must be non-zero"),
            ConfigError::DeadZoneTooLarge { dead_zone } => write!(
                f,
                "dead zone {dead_zone} swallows every sample, max is {MAX_DEAD_ZONE}"
            ),
        }
    }
}
