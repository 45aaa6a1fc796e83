//! The WS2812 strip as the four-digit score display.
//!
//! Digit position `p` is right-bar LED `p` (bottom LED is the ones digit).
//! The digit value picks the colour. Scanning one LED at a time from the
//! multiplexer gives the same persistence-of-vision effect as a 7-segment
//! display.

use esp_hal::{
    Blocking,
    gpio::Level,
    rmt::{
        PulseCode,
        Tx,
    },
};
use palette::Srgb;

use crate::{
    LedResources,
    scoreboard::{
        DIGITS,
        SegmentDriver,
    },
};

const LED_COUNT: usize = 10;

/// Colour per digit value 0..=9, dim enough to look at.
const DIGIT_COLORS: [Srgb<u8>; 10] = [
    Srgb::new(12, 12, 12),
    Srgb::new(30, 0, 0),
    Srgb::new(30, 12, 0),
    Srgb::new(24, 24, 0),
    Srgb::new(0, 30, 0),
    Srgb::new(0, 24, 24),
    Srgb::new(0, 0, 30),
    Srgb::new(16, 0, 30),
    Srgb::new(30, 0, 24),
    Srgb::new(40, 40, 40),
];

const OFF: Srgb<u8> = Srgb::new(0, 0, 0);

/// RMT buffer for one frame: 24 bits per LED plus the end marker.
const FRAME_PULSES: usize = LED_COUNT * 24 + 1;

pub struct LedDigits<'a> {
    channel: Option<esp_hal::rmt::Channel<'a, Blocking, Tx>>,
    framebuffer: [Srgb<u8>; LED_COUNT],
    pulses: [PulseCode; FRAME_PULSES],
}

impl<'a> LedDigits<'a> {
    pub fn new(channel: esp_hal::rmt::Channel<'a, Blocking, Tx>) -> Self {
        Self {
            channel: Some(channel),
            framebuffer: [OFF; LED_COUNT],
            pulses: [PulseCode::default(); FRAME_PULSES],
        }
    }

    /// WS2812 bit timing at 40 MHz RMT clock.
    const fn bit_to_pulse(bit: bool) -> PulseCode {
        if bit {
            // '1': 0.8 µs high (32 ticks), 0.45 µs low (18 ticks)
            PulseCode::new(Level::High, 32, Level::Low, 18)
        } else {
            // '0': 0.4 µs high (16 ticks), 0.85 µs low (34 ticks)
            PulseCode::new(Level::High, 16, Level::Low, 34)
        }
    }

    fn encode(&mut self) {
        let bits = self.framebuffer.iter().flat_map(|c| {
            // WS2812 expects GRB byte order
            [c.green, c.red, c.blue]
                .into_iter()
                .flat_map(|byte| (0..8).map(move |i| (byte >> (7 - i)) & 1 != 0))
        });
        for (pulse, bit) in self.pulses.iter_mut().zip(bits) {
            *pulse = Self::bit_to_pulse(bit);
        }
        self.pulses[FRAME_PULSES - 1] = PulseCode::end_marker();
    }
}

impl From<LedResources<'static>> for LedDigits<'static> {
    fn from(res: LedResources<'static>) -> Self {
        Self::new(res.into())
    }
}

impl SegmentDriver for LedDigits<'_> {
    fn show_digit(&mut self, position: u8, value: u8) {
        let position = usize::from(position);
        if position < DIGITS {
            self.framebuffer[position] = DIGIT_COLORS[usize::from(value % 10)];
        }
    }

    fn clear_all(&mut self) {
        self.framebuffer[..DIGITS].fill(OFF);
    }

    /// Blocking transmit; one frame takes ~300 µs, well inside a 2.5 ms scan slot.
    fn flush(&mut self) {
        let Some(channel) = self.channel.take() else {
            error!("RMT channel lost during previous transmission");
            return;
        };

        self.encode();

        let transaction = match channel.transmit(&self.pulses) {
            Ok(t) => t,
            Err(e) => {
                error!("RMT transmit failed: {}", e);
                return;
            }
        };

        self.channel = Some(match transaction.wait() {
            Ok(ch) => ch,
            Err((err, ch)) => {
                error!("RMT transaction failed: {}", err);
                ch
            }
        });
    }
}
