//! Snake on the Disobey 2026 badge.
//!
//! Three tasks share two handles:
//! - `input_task` samples the D-pad into a [`SharedSample`] (the stick)
//! - `scan_task` ticks the [`Multiplexer`] at the scan rate, lighting one
//!   score digit on the LED bar per tick
//! - `game_task` runs one [`Session`] tick per game period and redraws the
//!   changed cells on the LCD
//!
//! Controls:
//! - D-pad: steer
//! - Start: reset (also restarts after game over)

#![no_std]
#![no_main]

use defmt::{
    error,
    info,
};
#[allow(clippy::wildcard_imports)]
use badge_snake::*;
use embassy_executor::Spawner;
use embassy_time::{
    Duration,
    Ticker,
    Timer,
};
use esp_backtrace as _;
use esp_hal::timer::timg::TimerGroup;
use esp_println as _;

extern crate alloc;

esp_bootloader_esp_idf::esp_app_desc!();

/// Stick sampling period, well under the game tick.
const SAMPLE_MS: u64 = 8;

#[embassy_executor::task]
async fn input_task(dpad: &'static Dpad, stick: &'static SharedSample) {
    info!("Snake input task started");
    loop {
        stick.store(dpad.sample());
        Timer::after(Duration::from_millis(SAMPLE_MS)).await;
    }
}

#[embassy_executor::task]
async fn scan_task(mut mux: Multiplexer<'static, LedDigits<'static>>, period: Duration) {
    info!("Score scan task started");
    let mut ticker = Ticker::every(period);
    loop {
        mux.tick();
        ticker.next().await;
    }
}

#[embassy_executor::task]
async fn game_task(
    display: &'static mut Display<'static>,
    reset: &'static ResetButton,
    stick: &'static SharedSample,
    digits: &'static DigitBuffer,
    config: GameConfig,
) {
    info!("Snake game started");

    let mut session = Session::new(config, digits, RandomSpawner::seeded(hardware_seed()));
    if render::draw_board(&mut display.playfield(), &session).is_err() {
        error!("LCD draw failed");
    }

    let mut ticker = Ticker::every(config.tick_period);
    loop {
        let outcome = session.tick(stick.load(), reset.is_pressed());
        if render::draw_tick(&mut display.playfield(), &session, outcome).is_err() {
            error!("LCD draw failed");
        }
        ticker.next().await;
    }
}

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let peripherals = badge_snake::init();
    let resources = split_resources!(peripherals);

    esp_alloc::heap_allocator!(size: 64 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let config = GameConfig::default();
    if let Err(e) = config.validate() {
        error!("invalid game config: {}", e);
        panic!("invalid game config");
    }

    let display = mk_static!(Display<'static>, resources.display.into());
    let controls: Controls = resources.buttons.into();
    let dpad: &'static Dpad = mk_static!(Dpad, controls.dpad);
    let reset: &'static ResetButton = mk_static!(ResetButton, controls.reset);
    let stick: &'static SharedSample = mk_static!(SharedSample, SharedSample::new());
    let digits: &'static DigitBuffer = mk_static!(DigitBuffer, DigitBuffer::new());
    let leds: LedDigits<'static> = resources.leds.into();

    spawner.must_spawn(input_task(dpad, stick));
    spawner.must_spawn(scan_task(Multiplexer::new(digits, leds), config.scan_period));
    spawner.must_spawn(game_task(display, reset, stick, digits, config));

    loop {
        Timer::after(Duration::from_secs(600)).await;
    }
}
