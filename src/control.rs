//! The control loop: one non-blocking `step` per iteration.
//!
//! Each step
//!   1. takes the sampled button levels,
//!   2. debounces every channel (PAUSE, RESET, START in that order) and
//!      dispatches press edges to the countdown engine,
//!   3. produces a diagnostic [`Snapshot`] when the report interval is due,
//!   4. ticks the countdown when the tick interval is due and it is running.
//!
//! Every state change and every tick is rendered exactly once.

use crate::config::ControlConfig;
use crate::countdown::{self, ClockState, RunState, TimerContext};
use crate::diagnostics::Snapshot;
use crate::interval::IntervalTimer;
use crate::render::{self, RenderSink};
use crate::ui::input_logic::{ButtonChannel, Debouncer};
use crate::ui::{Button, Edge, Levels};

/// What a single iteration did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Step {
    /// Present when the report interval elapsed and reporting is enabled.
    pub snapshot: Option<Snapshot>,
    /// Frames pushed to the sink during this step.
    pub renders: u8,
}

pub struct Controller {
    config: ControlConfig,
    ctx: TimerContext,
    channels: [ButtonChannel; 3],
    debouncer: Debouncer,
    tick: IntervalTimer,
    report: IntervalTimer,
}

impl Controller {
    /// All lines assumed released, countdown idle at the start value.
    pub fn new(config: ControlConfig, now_ms: u64) -> Self {
        Self {
            config,
            ctx: TimerContext::new(ClockState::default(), RunState::Idle),
            channels: Button::ALL.map(|b| ButtonChannel::new(b, Levels::RELEASED.get(b))),
            debouncer: Debouncer::new(config.debounce_mode, config.debounce_ms),
            tick: IntervalTimer::starting_at(config.tick_interval_ms, now_ms),
            report: IntervalTimer::starting_at(config.report_interval_ms, now_ms),
        }
    }

    pub const fn context(&self) -> &TimerContext {
        &self.ctx
    }

    /// Levels seen on the last poll.
    pub fn previous_levels(&self) -> Levels {
        let mut levels = Levels::RELEASED;
        for ch in &self.channels {
            levels.set(ch.button, ch.previous_level);
        }
        levels
    }

    pub fn snapshot(&self, current: Levels) -> Snapshot {
        Snapshot {
            current,
            previous: self.previous_levels(),
            running: self.ctx.is_running(),
            expired: self.ctx.is_expired(),
        }
    }

    /// First frame after power-up.
    pub fn start<S: RenderSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        render::draw(sink, &self.ctx.clock)
    }

    /// Run one loop iteration. Never blocks.
    ///
    /// A sink error does not cut the iteration short: every channel is
    /// still polled and the report/tick still run. The first error is
    /// returned once the step is complete.
    pub fn step<S: RenderSink>(
        &mut self,
        levels: Levels,
        now_ms: u64,
        sink: &mut S,
    ) -> Result<Step, S::Error> {
        let mut out = Step::default();
        let mut failed: Option<S::Error> = None;
        let previous = self.previous_levels();

        for button in Button::ALL {
            let Some(channel) = self.channels.get_mut(button.index()) else {
                continue;
            };
            let edge = self.debouncer.poll(channel, levels.get(button), now_ms);
            if edge != Some(Edge::Pressed) {
                continue;
            }
            if self.dispatch(button, now_ms) {
                self.render(sink, &mut out, &mut failed);
            }
        }

        if self.config.report_enabled && self.report.poll(now_ms) {
            out.snapshot = Some(Snapshot {
                current: levels,
                previous,
                running: self.ctx.is_running(),
                expired: self.ctx.is_expired(),
            });
        }

        if self.ctx.is_running() && self.tick.poll(now_ms) {
            countdown::tick(&mut self.ctx);
            debug!("tick {}:{}", self.ctx.clock.minutes, self.ctx.clock.seconds);
            if self.ctx.is_expired() {
                info!("time exceeded");
            }
            self.render(sink, &mut out, &mut failed);
        }

        match failed {
            Some(e) => Err(e),
            None => Ok(out),
        }
    }

    /// Draw the current clock, keeping only the first sink error.
    fn render<S: RenderSink>(&self, sink: &mut S, out: &mut Step, failed: &mut Option<S::Error>) {
        match render::draw(sink, &self.ctx.clock) {
            Ok(()) => out.renders += 1,
            Err(e) => {
                if failed.is_none() {
                    *failed = Some(e);
                }
            }
        }
    }

    /// Apply the action bound to `button`. Returns whether anything changed.
    fn dispatch(&mut self, button: Button, now_ms: u64) -> bool {
        match button {
            Button::Pause => {
                if !countdown::toggle(&mut self.ctx) {
                    info!("PAUSE ignored: expired");
                    return false;
                }
                if self.ctx.is_running() {
                    // First decrement one full interval after (re)start.
                    self.tick.fire(now_ms);
                }
                info!("PAUSE -> {}", self.ctx.run);
                true
            }
            Button::Reset => {
                countdown::reset(&mut self.ctx);
                info!("RESET -> {}:{}", self.ctx.clock.minutes, self.ctx.clock.seconds);
                true
            }
            Button::Start => {
                countdown::add_minute(&mut self.ctx);
                info!("START -> {} min", self.ctx.clock.minutes);
                true
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
