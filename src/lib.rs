//! Countdown timer logic, kept free of hardware so it can be tested on
//! the host.
//!
//! Usage: `cargo test --lib` and `cargo test --test integration`
//!
//! The embedded binary (`main.rs`, `--features embedded`) supplies the
//! GPIO sampling, the SSD1306 sink and a millisecond clock, and calls
//! [`control::Controller::step`] in a loop.

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
pub mod control;
pub mod countdown;
pub mod diagnostics;
pub mod error;
pub mod interval;
pub mod render;
pub mod ui;

pub use control::{Controller, Step};
pub use countdown::{ClockState, RunState, TimerContext};
pub use render::RenderSink;
pub use ui::{Button, Edge, Levels};
