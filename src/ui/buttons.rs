//! GPIO button sampling.
//!
//! Three physical buttons (active-low with internal pull-up):
//!   - PAUSE - start / pause / resume
//!   - RESET - back to the start value
//!   - START - add one minute
//!
//! The lines are read synchronously once per control-loop iteration;
//! no edge interrupts are used. Debouncing happens in
//! [`super::input_logic`].

use crate::ui::Levels;
use embassy_nrf::gpio::{AnyPin, Input, Pull};

pub struct Buttons {
    pause: Input<'static>,
    reset: Input<'static>,
    start: Input<'static>,
}

impl Buttons {
    pub fn new(pause: AnyPin, reset: AnyPin, start: AnyPin) -> Self {
        Self {
            pause: Input::new(pause, Pull::Up),
            reset: Input::new(reset, Pull::Up),
            start: Input::new(start, Pull::Up),
        }
    }

    /// Current level of every line. High = released.
    pub fn sample(&self) -> Levels {
        Levels {
            pause: self.pause.is_high(),
            reset: self.reset.is_high(),
            start: self.start.is_high(),
        }
    }
}
