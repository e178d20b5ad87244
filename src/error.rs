//! Unified error type for the countdown timer.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // UI / Display
    /// The SSD1306 did not answer its init sequence. Fatal.
    DisplayInit,

    /// Drawing into the frame buffer or flushing it over I²C failed.
    DisplayWrite,
}
