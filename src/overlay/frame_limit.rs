use bevy::prelude::*;
use std::thread;
use std::time::{Duration, Instant};

/// Caps the frame rate by sleeping at the end of a frame until the next
/// frame's slot opens.
#[derive(Resource, Debug, Clone)]
pub struct FrameLimiter {
    budget: Option<Duration>,
    next_frame: Option<Instant>,
}

impl FrameLimiter {
    /// `max_fps == 0` disables the cap.
    pub fn new(max_fps: u32) -> Self {
        Self {
            budget: (max_fps > 0).then(|| Duration::from_nanos(1_000_000_000 / u64::from(max_fps))),
            next_frame: None,
        }
    }

    pub fn budget(&self) -> Option<Duration> {
        self.budget
    }

    /// How long to wait at `now` before starting the next frame.
    pub fn wait_time(&mut self, now: Instant) -> Option<Duration> {
        let budget = self.budget?;
        let wait = self
            .next_frame
            .and_then(|deadline| deadline.checked_duration_since(now))
            .filter(|wait| !wait.is_zero());
        let frame_start = now + wait.unwrap_or_default();
        self.next_frame = Some(frame_start + budget);
        wait
    }
}

pub fn limit_frame_rate(limiter: Option<ResMut<FrameLimiter>>) {
    let Some(mut limiter) = limiter else {
        return;
    };
    if let Some(wait) = limiter.wait_time(Instant::now()) {
        thread::sleep(wait);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_means_uncapped() {
        let mut limiter = FrameLimiter::new(0);
        assert_eq!(limiter.budget(), None);
        assert_eq!(limiter.wait_time(Instant::now()), None);
    }

    #[test]
    fn waits_out_the_rest_of_the_budget() {
        let mut limiter = FrameLimiter::new(100);
        let start = Instant::now();

        assert_eq!(limiter.wait_time(start), None);
        assert_eq!(
            limiter.wait_time(start + Duration::from_millis(4)),
            Some(Duration::from_millis(6))
        );
        // The next slot is measured from where the sleep ended.
        assert_eq!(
            limiter.wait_time(start + Duration::from_millis(12)),
            Some(Duration::from_millis(8))
        );
    }

    #[test]
    fn slow_frames_do_not_wait() {
        let mut limiter = FrameLimiter::new(100);
        let start = Instant::now();

        limiter.wait_time(start);
        assert_eq!(limiter.wait_time(start + Duration::from_millis(25)), None);
        assert_eq!(
            limiter.wait_time(start + Duration::from_millis(30)),
            Some(Duration::from_millis(5))
        );
    }
}
