//! Countdown engine.
//!
//! The engine has no state of its own: every operation works on the
//! [`TimerContext`] owned by the control loop.
//!
//! ```text
//!            toggle             toggle
//!   Idle ─────────────▶ Running ◀─────▶ Paused
//!                          │ tick reaches 0:00
//!                          ▼
//!                       Expired ── reset ──▶ Idle
//! ```
//!
//! `reset` returns to Idle from every state.

use core::fmt;

use crate::config::{MINUTE_STEP, START_MINUTES, START_SECONDS};

/// Minutes and seconds left on the clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockState {
    pub minutes: u32,
    /// Always in `0..=59`.
    pub seconds: u8,
}

impl ClockState {
    pub const fn new(minutes: u32, seconds: u8) -> Self {
        Self { minutes, seconds }
    }

    pub const fn is_zero(&self) -> bool {
        self.minutes == 0 && self.seconds == 0
    }
}

impl Default for ClockState {
    fn default() -> Self {
        Self::new(START_MINUTES, START_SECONDS)
    }
}

/// `M:SS`, seconds zero-padded.
impl fmt::Display for ClockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Paused,
    /// Reached 0:00. Only `reset` leaves this state.
    Expired,
}

/// The single clock + run-state pair the control loop owns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerContext {
    pub clock: ClockState,
    pub run: RunState,
}

impl TimerContext {
    pub const fn new(clock: ClockState, run: RunState) -> Self {
        Self { clock, run }
    }

    pub const fn is_running(&self) -> bool {
        matches!(self.run, RunState::Running)
    }

    pub const fn is_expired(&self) -> bool {
        matches!(self.run, RunState::Expired)
    }
}

/// Decrement the clock by one second. Only acts while `Running`.
///
/// Borrows a minute when seconds are exhausted. Landing on 0:00, or
/// being asked to tick at 0:00, moves to `Expired` and freezes the clock.
/// Returns `true` if the context changed.
pub fn tick(ctx: &mut TimerContext) -> bool {
    if ctx.run != RunState::Running {
        return false;
    }

    let clock = &mut ctx.clock;
    if clock.seconds > 0 {
        clock.seconds -= 1;
    } else if clock.minutes > 0 {
        clock.minutes -= 1;
        clock.seconds = 59;
    }

    if clock.is_zero() {
        ctx.run = RunState::Expired;
    }
    true
}

/// Start / pause / resume. No effect once expired.
pub fn toggle(ctx: &mut TimerContext) -> bool {
    let next = match ctx.run {
        RunState::Idle | RunState::Paused => RunState::Running,
        RunState::Running => RunState::Paused,
        RunState::Expired => return false,
    };
    ctx.run = next;
    true
}

/// Back to the start value, idle. Works from every state.
pub fn reset(ctx: &mut TimerContext) {
    ctx.clock = ClockState::default();
    ctx.run = RunState::Idle;
}

/// One more minute on the clock. Never touches seconds or run state.
///
/// Unbounded in practice; saturates at `u32::MAX` rather than wrapping.
pub fn add_minute(ctx: &mut TimerContext) {
    ctx.clock.minutes = ctx.clock.minutes.saturating_add(MINUTE_STEP);
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn running(minutes: u32, seconds: u8) -> TimerContext {
        TimerContext::new(ClockState::new(minutes, seconds), RunState::Running)
    }

    // ════════════════════════════════════════════════════════════════════════
    // tick
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn tick_decrements_seconds_only() {
        for s in 1..=59u8 {
            let mut ctx = running(3, s);
            assert!(tick(&mut ctx));
            assert_eq!(ctx.clock, ClockState::new(3, s - 1));
            assert_eq!(ctx.run, RunState::Running);
        }
    }

    #[test]
    fn tick_borrows_a_minute() {
        for m in 1..=120u32 {
            let mut ctx = running(m, 0);
            tick(&mut ctx);
            assert_eq!(ctx.clock, ClockState::new(m - 1, 59));
            assert_eq!(ctx.run, RunState::Running);
        }
    }

    #[test]
    fn tick_at_zero_expires_and_freezes() {
        let mut ctx = running(0, 0);
        tick(&mut ctx);
        assert_eq!(ctx.run, RunState::Expired);
        assert_eq!(ctx.clock, ClockState::new(0, 0));

        for _ in 0..5 {
            assert!(!tick(&mut ctx));
        }
        assert_eq!(ctx.run, RunState::Expired);
        assert_eq!(ctx.clock, ClockState::new(0, 0));
    }

    #[test]
    fn tick_landing_on_zero_expires() {
        let mut ctx = running(0, 1);
        tick(&mut ctx);
        assert_eq!(ctx.clock, ClockState::new(0, 0));
        assert!(ctx.is_expired());
    }

    #[test]
    fn tick_ignored_unless_running() {
        for run in [RunState::Idle, RunState::Paused, RunState::Expired] {
            let mut ctx = TimerContext::new(ClockState::new(2, 30), run);
            assert!(!tick(&mut ctx));
            assert_eq!(ctx.clock, ClockState::new(2, 30));
            assert_eq!(ctx.run, run);
        }
    }

    #[test]
    fn full_countdown_takes_240_ticks() {
        let mut ctx = running(4, 0);
        for _ in 0..239 {
            tick(&mut ctx);
        }
        assert_eq!(ctx.clock, ClockState::new(0, 1));
        assert!(ctx.is_running());
        tick(&mut ctx);
        assert!(ctx.is_expired());
    }

    // ════════════════════════════════════════════════════════════════════════
    // toggle / reset / add_minute
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn toggle_alternates_running_and_paused() {
        let mut ctx = TimerContext::default();
        assert!(toggle(&mut ctx));
        assert_eq!(ctx.run, RunState::Running);
        assert!(toggle(&mut ctx));
        assert_eq!(ctx.run, RunState::Paused);
        assert!(toggle(&mut ctx));
        assert_eq!(ctx.run, RunState::Running);
    }

    #[test]
    fn toggle_is_noop_when_expired() {
        let mut ctx = TimerContext::new(ClockState::new(0, 0), RunState::Expired);
        assert!(!toggle(&mut ctx));
        assert_eq!(ctx.run, RunState::Expired);
    }

    #[test]
    fn reset_from_every_state() {
        for run in [
            RunState::Idle,
            RunState::Running,
            RunState::Paused,
            RunState::Expired,
        ] {
            let mut ctx = TimerContext::new(ClockState::new(17, 42), run);
            reset(&mut ctx);
            assert_eq!(ctx.clock, ClockState::new(4, 0));
            assert_eq!(ctx.run, RunState::Idle);
        }
    }

    #[test]
    fn add_minute_keeps_seconds_and_run_state() {
        for run in [
            RunState::Idle,
            RunState::Running,
            RunState::Paused,
            RunState::Expired,
        ] {
            let mut ctx = TimerContext::new(ClockState::new(2, 7), run);
            add_minute(&mut ctx);
            assert_eq!(ctx.clock, ClockState::new(3, 7));
            assert_eq!(ctx.run, run);
        }
    }

    #[test]
    fn add_minute_has_no_practical_cap() {
        let mut ctx = TimerContext::new(ClockState::new(99, 0), RunState::Idle);
        add_minute(&mut ctx);
        assert_eq!(ctx.clock.minutes, 100);

        let mut ctx = TimerContext::new(ClockState::new(u32::MAX, 0), RunState::Idle);
        add_minute(&mut ctx);
        assert_eq!(ctx.clock.minutes, u32::MAX);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Display formatting
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn clock_formats_as_m_ss() {
        use core::fmt::Write;

        let mut s: heapless::String<16> = heapless::String::new();
        write!(s, "{}", ClockState::new(4, 0)).unwrap();
        assert_eq!(s.as_str(), "4:00");

        assert_eq!(ClockState::new(0, 9).to_string(), "0:09");
        assert_eq!(ClockState::new(12, 34).to_string(), "12:34");
        assert_eq!(ClockState::new(123, 5).to_string(), "123:05");
    }
}
