use bevy::prelude::Resource;
use std::time::Duration;

use crate::engine::layout::OverlayLayout;
use crate::engine::track::{HoldState, Track};

/// What happened during one `advance`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdvanceStats {
    pub spawned: usize,
    pub retired: usize,
}

/// Moves every track's bars forward by one frame.
#[derive(Resource, Debug, Clone)]
pub struct BarAnimator {
    layout: OverlayLayout,
    bar_speed: f32,
    frame: u64,
}

impl BarAnimator {
    pub fn new(layout: OverlayLayout, bar_speed: f32) -> Self {
        Self {
            layout,
            bar_speed,
            frame: 0,
        }
    }

    pub fn layout(&self) -> &OverlayLayout {
        &self.layout
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advance one frame. `tracks` pairs each track with whether its input is
    /// active this frame.
    pub fn advance<'a, I>(&mut self, elapsed: Duration, tracks: I) -> AdvanceStats
    where
        I: IntoIterator<Item = (&'a mut Track, bool)>,
    {
        self.frame += 1;
        let distance = elapsed.as_secs_f32() * self.bar_speed;
        let scroll = self.layout.scroll;
        let mut stats = AdvanceStats::default();

        for (track, active) in tracks {
            match track.sample(active) {
                HoldState::Pressed => {
                    track.spawn_bar(self.frame);
                    stats.spawned += 1;
                }
                HoldState::Held => track.grow_newest(distance, scroll),
                HoldState::Released => {}
            }

            if track.bar_count() == 0 {
                continue;
            }
            track.translate(scroll.step(distance));
            if track.retire_oldest(&self.layout).is_some() {
                stats.retired += 1;
            }
        }

        stats
    }
}
