//! Analog stick input: raw 12-bit samples and the direction filter.

use core::sync::atomic::{
    AtomicU32,
    Ordering,
};

use crate::{
    config::DeadZoneMode,
    grid::Direction,
};

/// Largest value a 12-bit ADC conversion can report.
pub const ADC_MAX: u16 = 4095;
/// Rest position of both axes.
pub const ADC_CENTER: u16 = 2048;

/// Largest dead zone that still lets the farthest corner sample through.
pub const MAX_DEAD_ZONE: u16 = 2896;

/// One two-axis conversion. Larger `x` is right, larger `y` is down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StickSample {
    pub x: u16,
    pub y: u16,
}

impl Default for StickSample {
    fn default() -> Self {
        Self::CENTER
    }
}

impl StickSample {
    pub const CENTER: Self = Self::new(ADC_CENTER, ADC_CENTER);

    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Full deflection toward `dir`; `Direction::None` is the rest position.
    pub const fn toward(dir: Direction) -> Self {
        match dir {
            Direction::None => Self::CENTER,
            Direction::Up => Self::new(ADC_CENTER, 0),
            Direction::Down => Self::new(ADC_CENTER, ADC_MAX),
            Direction::Left => Self::new(0, ADC_CENTER),
            Direction::Right => Self::new(ADC_MAX, ADC_CENTER),
        }
    }

    /// Synthesize a stick position from four digital buttons.
    ///
    /// Opposing buttons cancel out; a diagonal lands exactly on the tie line
    /// and the filter resolves it to the vertical axis.
    pub const fn from_dpad(up: bool, down: bool, left: bool, right: bool) -> Self {
        let x = match (left, right) {
            (true, false) => 0,
            (false, true) => ADC_MAX,
            _ => ADC_CENTER,
        };
        let y = match (up, down) {
            (true, false) => 0,
            (false, true) => ADC_MAX,
            _ => ADC_CENTER,
        };
        Self::new(x, y)
    }

    const fn pack(self) -> u32 {
        ((self.x as u32) << 16) | self.y as u32
    }

    const fn unpack(word: u32) -> Self {
        Self::new((word >> 16) as u16, word as u16)
    }
}

/// Latest stick sample, shared between the sampling context and the game loop.
///
/// Both axes travel in one atomic word, so a reader never pairs an `x` from
/// one conversion with a `y` from another.
pub struct SharedSample(AtomicU32);

impl Default for SharedSample {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedSample {
    pub const fn new() -> Self {
        Self(AtomicU32::new(StickSample::CENTER.pack()))
    }

    pub fn store(&self, sample: StickSample) {
        self.0.store(sample.pack(), Ordering::Relaxed);
    }

    pub fn load(&self) -> StickSample {
        StickSample::unpack(self.0.load(Ordering::Relaxed))
    }
}

/// Turns raw samples into a requested direction.
///
/// Samples inside the dead-zone circle carry no intent. Outside it the
/// dominant axis wins, ties going to the vertical axis. A request that would
/// reverse the committed direction is dropped and the previous request stands.
#[derive(Clone, Debug)]
pub struct JoystickFilter {
    radius_sq: u32,
    mode: DeadZoneMode,
    next: Direction,
}

impl JoystickFilter {
    pub const fn new(dead_zone: u16, mode: DeadZoneMode, initial: Direction) -> Self {
        let r = dead_zone as u32;
        Self {
            radius_sq: r * r,
            mode,
            next: initial,
        }
    }

    /// The currently held request.
    pub const fn next(&self) -> Direction {
        self.next
    }

    pub fn set_next(&mut self, dir: Direction) {
        self.next = dir;
    }

    /// Feeds one sample and returns the request to use on this tick.
    ///
    /// Inside the dead zone the held request is returned unchanged, or cleared
    /// to [`Direction::None`] under [`DeadZoneMode::Stop`]. A request that
    /// reverses `committed` is ignored, so the held one comes back instead.
    pub fn update(&mut self, sample: StickSample, committed: Direction) -> Direction {
        let dx = i32::from(sample.x.min(ADC_MAX)) - i32::from(ADC_CENTER);
        let dy = i32::from(sample.y.min(ADC_MAX)) - i32::from(ADC_CENTER);

        if dx.unsigned_abs().pow(2) + dy.unsigned_abs().pow(2) < self.radius_sq {
            if self.mode == DeadZoneMode::Stop {
                self.next = Direction::None;
            }
            return self.next;
        }

        let requested = if dx.abs() > dy.abs() {
            if dx > 0 { Direction::Right } else { Direction::Left }
        } else if dy > 0 {
            Direction::Down
        } else {
            Direction::Up
        };

        if !requested.reverses(committed) {
            self.next = requested;
        }
        self.next
    }
}
