//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and start-up values
//! live here so they can be tuned in one place.

use crate::ui::input_logic::DebounceMode;

// Countdown

/// Minutes shown after power-up and after every reset.
pub const START_MINUTES: u32 = 4;

/// Seconds shown after power-up and after every reset.
pub const START_SECONDS: u8 = 0;

/// Minutes added per press of the START button.
pub const MINUTE_STEP: u32 = 1;

/// Interval between countdown decrements (ms).
pub const TICK_INTERVAL_MS: u64 = 1000;

// Buttons

/// Minimum time between accepted button edges (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 250;

/// Where the debounce window is tracked.
///
/// `Shared` reproduces the single "last pressed" stamp of the first
/// hardware revision; `PerChannel` keeps one stamp per button.
pub const BUTTON_DEBOUNCE_MODE: DebounceMode = DebounceMode::PerChannel;

// Diagnostics

/// Emit periodic button/run-state snapshots over RTT.
pub const DEBUG_REPORT_ENABLED: bool = true;

/// Cadence of the diagnostic snapshot (ms).
pub const DEBUG_REPORT_MS: u64 = 300;

// Display

/// SSD1306 I²C address (both common 128x64 modules ship at 0x3C).
pub const DISPLAY_I2C_ADDRESS: u8 = 0x3C;

/// Pause after display init before the first frame (ms).
pub const DISPLAY_SETTLE_MS: u64 = 100;

/// Panel resolution in pixels.
pub const PANEL_WIDTH: u32 = 128;
pub const PANEL_HEIGHT: u32 = 64;

/// Cell size of the clock font (`FONT_10X20`) before scaling.
pub const GLYPH_WIDTH: u32 = 10;
pub const GLYPH_HEIGHT: u32 = 20;

/// Every font pixel is drawn as a `TEXT_SCALE`×`TEXT_SCALE` block, giving
/// 20×40 cells. Six cells (`MMM:SS`) still fit across the panel.
pub const TEXT_SCALE: u32 = 2;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; the actual `embassy_nrf::peripherals::*` are
// picked in `main.rs`.  Adjust for your custom PCB.
//
//   Button PAUSE   → P0.11
//   Button RESET   → P0.12
//   Button START   → P0.24
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27

/// Runtime knobs consumed by [`crate::control::Controller`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlConfig {
    pub tick_interval_ms: u64,
    pub debounce_ms: u64,
    pub debounce_mode: DebounceMode,
    pub report_enabled: bool,
    pub report_interval_ms: u64,
}

impl ControlConfig {
    /// Configuration built from the constants above.
    pub const DEFAULT: Self = Self {
        tick_interval_ms: TICK_INTERVAL_MS,
        debounce_ms: BUTTON_DEBOUNCE_MS,
        debounce_mode: BUTTON_DEBOUNCE_MODE,
        report_enabled: DEBUG_REPORT_ENABLED,
        report_interval_ms: DEBUG_REPORT_MS,
    };

    /// Same configuration with a different debounce policy.
    pub const fn with_debounce_mode(self, debounce_mode: DebounceMode) -> Self {
        Self {
            debounce_mode,
            ..self
        }
    }

    /// Same configuration with diagnostics switched on or off.
    pub const fn with_report(self, report_enabled: bool) -> Self {
        Self {
            report_enabled,
            ..self
        }
    }
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
