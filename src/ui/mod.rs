//! User interface subsystem - OLED display + physical buttons.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C
//! - **Buttons**: 3 tactile switches, active-low with internal pull-up
//!   (PAUSE, RESET, START)
//!
//! Button lines are polled once per control-loop iteration; the
//! [`input_logic`] debouncer turns level changes into [`Edge`]s.

#[cfg(feature = "embedded")]
pub mod buttons;
#[cfg(feature = "embedded")]
pub mod display;
pub mod input_logic;

use core::fmt;

/// The three physical buttons.
///
///   - PAUSE: start / pause / resume the countdown
///   - RESET: back to the start value, idle
///   - START: add one minute
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Pause,
    Reset,
    Start,
}

impl Button {
    /// Polling order. The first accepted edge in an iteration wins the
    /// shared debounce gate.
    pub const ALL: [Button; 3] = [Button::Pause, Button::Reset, Button::Start];

    pub const fn index(self) -> usize {
        match self {
            Button::Pause => 0,
            Button::Reset => 1,
            Button::Start => 2,
        }
    }
}

/// Raw line levels of all three buttons. `true` = high = released.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Levels {
    pub pause: bool,
    pub reset: bool,
    pub start: bool,
}

impl Levels {
    /// Idle level of every line (pull-ups, nothing pressed).
    pub const RELEASED: Self = Self {
        pause: true,
        reset: true,
        start: true,
    };

    pub const fn get(&self, button: Button) -> bool {
        match button {
            Button::Pause => self.pause,
            Button::Reset => self.reset,
            Button::Start => self.start,
        }
    }

    pub fn set(&mut self, button: Button, level: bool) {
        match button {
            Button::Pause => self.pause = level,
            Button::Reset => self.reset = level,
            Button::Start => self.start = level,
        }
    }

    /// Copy of `self` with one button held down.
    pub fn pressed(mut self, button: Button) -> Self {
        self.set(button, false);
        self
    }
}

impl Default for Levels {
    fn default() -> Self {
        Self::RELEASED
    }
}

impl fmt::Display for Levels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PAUSE STATE: {} || RESET STATE: {} || START STATE: {}",
            u8::from(self.pause),
            u8::from(self.reset),
            u8::from(self.start)
        )
    }
}

/// Same text as the `Display` impl, so RTT and host logs read alike.
#[cfg(feature = "defmt")]
impl defmt::Format for Levels {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(
            f,
            "PAUSE STATE: {=u8} || RESET STATE: {=u8} || START STATE: {=u8}",
            u8::from(self.pause),
            u8::from(self.reset),
            u8::from(self.start)
        )
    }
}

/// A debounced change of a button's level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Line went low.
    Pressed,
    /// Line went high.
    Released,
}

impl Edge {
    pub const fn from_level(level: bool) -> Self {
        if level {
            Edge::Released
        } else {
            Edge::Pressed
        }
    }
}
