use bevy::prelude::Resource;
use std::time::{Duration, Instant};

/// Monotonic frame clock. Each `restart` returns the time since the previous
/// one, so bar movement depends on wall time rather than frame rate.
#[derive(Resource, Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::started_at(Instant::now())
    }

    pub fn started_at(start: Instant) -> Self {
        Self { last: start }
    }

    pub fn restart(&mut self) -> Duration {
        self.restart_at(Instant::now())
    }

    /// Like `restart`, with the current instant supplied by the caller.
    /// An instant earlier than the last restart yields zero.
    pub fn restart_at(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restart_measures_interval_since_previous_restart() {
        let start = Instant::now();
        let mut clock = FrameClock::started_at(start);

        assert_eq!(clock.restart_at(start + Duration::from_millis(16)), Duration::from_millis(16));
        assert_eq!(clock.restart_at(start + Duration::from_millis(40)), Duration::from_millis(24));
    }

    #[test]
    fn going_backwards_reports_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut clock = FrameClock::started_at(start);

        assert_eq!(clock.restart_at(start - Duration::from_millis(5)), Duration::ZERO);
    }
}
