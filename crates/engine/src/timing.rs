//! Drop timer of a session, in milliseconds on the host clock.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Time of the last automatic drop (or of the reset)
    pub start: u64,
    /// Time since `start` as of the last frame
    pub elapsed: u64,
    /// Drop interval of the current level
    pub level: u64,
}

impl Timing {
    pub fn new(now: u64, level_ms: u32) -> Self {
        Self {
            start: now,
            elapsed: 0,
            level: level_ms as u64,
        }
    }

    /// Update `elapsed`; true once it exceeds the level interval.
    pub fn advance(&mut self, now: u64) -> bool {
        self.elapsed = now.saturating_sub(self.start);
        self.elapsed > self.level
    }
}
