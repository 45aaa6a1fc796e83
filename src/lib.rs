//! # badge-snake
//!
//! Snake for the Disobey 2026 badge: a 64×32 grid, a joystick filter with a
//! dead zone and anti-reversal, a body that grows up to 100 cells, and a
//! 4-digit score display refreshed by its own periodic scan.
//!
//! The game core is `no_std` and hardware-free:
//! - [`Session`] runs the state machine one tick at a time
//! - [`JoystickFilter`] turns raw 12-bit stick samples into a direction
//! - [`Snake`] owns the body and performs steps
//! - [`RandomSpawner`] places fruit by rejection sampling
//! - [`DigitBuffer`] and [`Multiplexer`] drive the score digits
//! - [`render`] draws the field through `embedded-graphics`
//!
//! With the `badge` feature the crate also brings up the badge peripherals:
//! D-pad as the stick, START as reset, the LCD for the field, and the LED
//! strip as the digit display.
//!
//! ## Quick start
//!
//! ```rust
//! use badge_snake::{DigitBuffer, GameConfig, RandomSpawner, Session, StickSample};
//!
//! let digits = DigitBuffer::new();
//! let mut session = Session::new(GameConfig::default(), &digits, RandomSpawner::seeded(1));
//! let outcome = session.tick(StickSample::CENTER, false);
//! # let _ = outcome;
//! ```

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible to every module below.
mod fmt;

pub mod config;
pub mod fruit;
pub mod grid;
pub mod input;
pub mod render;
pub mod scoreboard;
pub mod session;
pub mod snake;

#[cfg(feature = "badge")]
mod board;
#[cfg(feature = "badge")]
mod controls;
#[cfg(feature = "badge")]
mod display;
#[cfg(feature = "badge")]
mod leds;

#[cfg(feature = "badge")]
pub use board::*;
pub use config::{
    ConfigError,
    DeadZoneMode,
    GameConfig,
    WallMode,
};
#[cfg(feature = "badge")]
pub use controls::{
    Controls,
    Dpad,
    ResetButton,
};
#[cfg(feature = "badge")]
pub use display::Display;
pub use fruit::{
    FruitSource,
    RandomSpawner,
};
pub use grid::{
    Cell,
    Direction,
    GRID_H,
    GRID_W,
};
pub use input::{
    JoystickFilter,
    MAX_DEAD_ZONE,
    SharedSample,
    StickSample,
};
#[cfg(feature = "badge")]
pub use leds::LedDigits;
pub use scoreboard::{
    DigitBuffer,
    Multiplexer,
    SegmentDriver,
};
pub use session::{
    Session,
    SessionState,
    TickOutcome,
};
pub use snake::{
    Blocked,
    MAX_SNAKE_LEN,
    Snake,
    StepResult,
};
