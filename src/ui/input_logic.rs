//! Edge detection with a time-window debounce.
//!
//! Each poll compares the sampled level to the one seen on the previous
//! poll. A change is accepted as an [`Edge`] only if the debounce window
//! has passed since the last accepted edge; otherwise it is dropped and
//! will not be reported later.

use super::{Button, Edge};

/// Where the "last accepted edge" stamp lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceMode {
    /// One stamp for all buttons: an edge on any button blocks edges on
    /// every button for the window.
    Shared,
    /// One stamp per button.
    PerChannel,
}

/// Per-button edge-detection state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonChannel {
    pub button: Button,
    /// Level seen on the previous poll.
    pub previous_level: bool,
    /// When this button last produced an accepted edge (ms).
    pub last_transition_ms: u64,
}

impl ButtonChannel {
    pub const fn new(button: Button, level: bool) -> Self {
        Self {
            button,
            previous_level: level,
            last_transition_ms: 0,
        }
    }
}

/// Debounce gate shared by the three channels.
#[derive(Clone, Copy, Debug)]
pub struct Debouncer {
    mode: DebounceMode,
    window_ms: u64,
    shared_last_ms: u64,
}

impl Debouncer {
    pub const fn new(mode: DebounceMode, window_ms: u64) -> Self {
        Self {
            mode,
            window_ms,
            shared_last_ms: 0,
        }
    }

    /// Feed one sample of `channel`'s line.
    ///
    /// `channel.previous_level` is updated whether or not an edge is
    /// returned.
    pub fn poll(&mut self, channel: &mut ButtonChannel, level: bool, now_ms: u64) -> Option<Edge> {
        let changed = level != channel.previous_level;
        channel.previous_level = level;

        if !changed {
            return None;
        }

        let last = match self.mode {
            DebounceMode::Shared => self.shared_last_ms,
            DebounceMode::PerChannel => channel.last_transition_ms,
        };
        if now_ms.saturating_sub(last) <= self.window_ms {
            return None;
        }

        self.shared_last_ms = now_ms;
        channel.last_transition_ms = now_ms;
        Some(Edge::from_level(level))
    }
}
