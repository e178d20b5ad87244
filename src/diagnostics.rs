//! Periodic debug snapshot of the button lines and run flags.

use core::fmt;

use crate::ui::Levels;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// Levels sampled this iteration.
    pub current: Levels,
    /// Levels from the iteration before.
    pub previous: Levels,
    pub running: bool,
    pub expired: bool,
}

/// Three lines, same layout as the serial report of the first revision.
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CURRENT {}", self.current)?;
        writeln!(f, "PREV    {}", self.previous)?;
        write!(
            f,
            "** clock_running = {} || time_exceeded = {}",
            u8::from(self.running),
            u8::from(self.expired)
        )
    }
}

/// Mirrors the `Display` layout line for line.
#[cfg(feature = "defmt")]
impl defmt::Format for Snapshot {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(
            f,
            "CURRENT {}\nPREV    {}\n** clock_running = {=u8} || time_exceeded = {=u8}",
            self.current,
            self.previous,
            u8::from(self.running),
            u8::from(self.expired)
        )
    }
}
