/// "Has enough time passed" tracker over a monotonic millisecond clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IntervalTimer {
    period_ms: u64,
    last_fired_ms: u64,
}

impl IntervalTimer {
    pub const fn starting_at(period_ms: u64, now_ms: u64) -> Self {
        Self {
            period_ms,
            last_fired_ms: now_ms,
        }
    }

    pub const fn last_fired_ms(&self) -> u64 {
        self.last_fired_ms
    }

    /// Strictly more than one period since the last firing.
    pub const fn is_due(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_fired_ms) > self.period_ms
    }

    pub fn fire(&mut self, now_ms: u64) {
        self.last_fired_ms = now_ms;
    }

    /// Fire if due; returns whether it did.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if self.is_due(now_ms) {
            self.fire(now_ms);
            true
        } else {
            false
        }
    }
}
