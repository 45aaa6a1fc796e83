//! Four-digit score display: the shared digit buffer and the multiplexer that
//! scans it from the timer context.

use core::sync::atomic::{
    AtomicU8,
    Ordering,
};

/// Digit positions on the display. Position 0 is the ones digit.
pub const DIGITS: usize = 4;

const BLANK: u8 = u8::MAX;

/// Digit slots shared between the game loop (sole writer) and the multiplexer
/// (sole reader).
///
/// Each slot is written atomically on its own. A reader may see some slots
/// from before a score change and some from after; the next scan cycle
/// corrects that.
pub struct DigitBuffer {
    slots: [AtomicU8; DIGITS],
}

impl Default for DigitBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitBuffer {
    /// All slots blank.
    pub const fn new() -> Self {
        Self {
            slots: [const { AtomicU8::new(BLANK) }; DIGITS],
        }
    }

    /// Value shown at `position`, or `None` when blank or out of range.
    pub fn slot(&self, position: usize) -> Option<u8> {
        let value = self.slots.get(position)?.load(Ordering::Relaxed);
        (value <= 9).then_some(value)
    }

    pub fn set(&self, position: usize, value: Option<u8>) {
        if let Some(slot) = self.slots.get(position) {
            let raw = match value {
                Some(digit) if digit <= 9 => digit,
                _ => BLANK,
            };
            slot.store(raw, Ordering::Relaxed);
        }
    }

    pub fn clear(&self) {
        for slot in &self.slots {
            slot.store(BLANK, Ordering::Relaxed);
        }
    }

    /// Lays out `score` without leading zeros: the ones digit always shows,
    /// higher positions only once the score reaches them. Scores past 9999
    /// keep their low four digits.
    pub fn show_score(&self, score: u32) {
        let mut place = 1u32;
        for position in 0..DIGITS {
            let digit = if position == 0 || score >= place {
                Some(((score / place) % 10) as u8)
            } else {
                None
            };
            self.set(position, digit);
            place = place.saturating_mul(10);
        }
    }
}

/// Low-level 7-segment driver.
pub trait SegmentDriver {
    /// Light `value` (0..=9) at `position` (0..4).
    fn show_digit(&mut self, position: u8, value: u8);

    /// Turn every digit driver off.
    fn clear_all(&mut self);

    /// Push pending changes to the hardware, for drivers that batch updates.
    fn flush(&mut self) {}
}

/// Round-robin scanner. Each [`tick`](Multiplexer::tick) lights at most one
/// digit, so it must run often enough for persistence of vision (~400 Hz).
pub struct Multiplexer<'a, D> {
    digits: &'a DigitBuffer,
    driver: D,
    index: u8,
}

impl<'a, D: SegmentDriver> Multiplexer<'a, D> {
    pub const fn new(digits: &'a DigitBuffer, driver: D) -> Self {
        Self {
            digits,
            driver,
            index: 0,
        }
    }

    /// Position the next tick will light.
    pub const fn position(&self) -> u8 {
        self.index
    }

    pub fn tick(&mut self) {
        self.driver.clear_all();
        if let Some(value) = self.digits.slot(usize::from(self.index)) {
            self.driver.show_digit(self.index, value);
        }
        self.driver.flush();
        self.index = (self.index + 1) % DIGITS as u8;
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn into_driver(self) -> D {
        self.driver
    }
}
