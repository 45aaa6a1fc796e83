//! Game controls: the D-pad stands in for the analog stick, START is reset.

use esp_hal::gpio::{
    Input,
    InputConfig,
    Pull,
};

use crate::{
    ButtonResources,
    input::StickSample,
};

/// The four direction buttons, read as a full-deflection stick.
pub struct Dpad {
    up: Input<'static>,
    down: Input<'static>,
    left: Input<'static>,
    right: Input<'static>,
}

impl Dpad {
    /// Current stick position synthesized from the pressed buttons (active low).
    pub fn sample(&self) -> StickSample {
        StickSample::from_dpad(
            self.up.is_low(),
            self.down.is_low(),
            self.left.is_low(),
            self.right.is_low(),
        )
    }
}

/// START button, active low. Polled once per game tick; the session debounces it.
pub struct ResetButton {
    pin: Input<'static>,
}

impl ResetButton {
    pub fn is_pressed(&self) -> bool {
        self.pin.is_low()
    }
}

/// Both halves, split so the input and game tasks can own one each.
pub struct Controls {
    pub dpad: Dpad,
    pub reset: ResetButton,
}

impl From<ButtonResources<'static>> for Controls {
    fn from(res: ButtonResources<'static>) -> Self {
        let pull_up = InputConfig::default().with_pull(Pull::Up);
        Self {
            dpad: Dpad {
                up: Input::new(res.up, pull_up),
                down: Input::new(res.down, pull_up),
                left: Input::new(res.left, pull_up),
                right: Input::new(res.right, pull_up),
            },
            reset: ResetButton {
                pin: Input::new(res.start, pull_up),
            },
        }
    }
}
