use bevy::math::Vec2;
use std::collections::VecDeque;

use crate::engine::layout::OverlayLayout;
use crate::engine::ScrollDirection;

/// One continuous press. `position` is the top-left corner in window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub position: Vec2,
    pub size: Vec2,
    pub created_frame: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldState {
    Released,
    /// First active frame of a press.
    Pressed,
    Held,
}

/// Per-binding animation state. The track owns its bars; popping one off the
/// queue is the only way a bar goes away.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    origin: Vec2,
    bar_width: f32,
    hold: u32,
    counter: u32,
    counter_text: String,
    // Oldest bar first, which is also the one farthest from the key row.
    bars: VecDeque<Bar>,
}

impl Track {
    /// `origin` is where new bars start, `bar_width` their fixed width.
    pub fn new(origin: Vec2, bar_width: f32) -> Self {
        Self {
            origin,
            bar_width,
            hold: 0,
            counter: 0,
            counter_text: "0".to_string(),
            bars: VecDeque::new(),
        }
    }

    pub fn hold(&self) -> u32 {
        self.hold
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn counter_text(&self) -> &str {
        &self.counter_text
    }

    pub fn bars(&self) -> impl ExactSizeIterator<Item = &Bar> + '_ {
        self.bars.iter()
    }

    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }

    pub fn state(&self) -> HoldState {
        match self.hold {
            0 => HoldState::Released,
            1 => HoldState::Pressed,
            _ => HoldState::Held,
        }
    }

    /// Feed this frame's sampled input and return the resulting state.
    pub fn sample(&mut self, active: bool) -> HoldState {
        self.hold = if active { self.hold.saturating_add(1) } else { 0 };
        self.state()
    }

    pub(crate) fn spawn_bar(&mut self, frame: u64) {
        self.bars.push_back(Bar {
            position: self.origin,
            size: Vec2::new(self.bar_width, 0.0),
            created_frame: frame,
        });
        self.counter += 1;
        self.counter_text = self.counter.to_string();
    }

    /// Stretch the newest bar toward the key row. In up-scroll the bar's top is
    /// pulled back so the following translation leaves it pinned under the
    /// square.
    pub(crate) fn grow_newest(&mut self, distance: f32, scroll: ScrollDirection) {
        let Some(bar) = self.bars.back_mut() else {
            return;
        };
        bar.size.y += distance;
        if scroll.is_up() {
            bar.position.y -= distance;
        }
    }

    pub(crate) fn translate(&mut self, dy: f32) {
        for bar in &mut self.bars {
            bar.position.y += dy;
        }
    }

    /// Remove the oldest bar if it has left the window. Only that one bar is
    /// checked, so at most one bar retires per call.
    pub(crate) fn retire_oldest(&mut self, layout: &OverlayLayout) -> Option<Bar> {
        let oldest = self.bars.front()?;
        if layout.has_exited(oldest.position, oldest.size.y) {
            self.bars.pop_front()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hold_counts_consecutive_active_frames() {
        let mut track = Track::new(Vec2::ZERO, 10.0);
        assert_eq!(track.sample(true), HoldState::Pressed);
        assert_eq!(track.sample(true), HoldState::Held);
        assert_eq!(track.hold(), 2);
        assert_eq!(track.sample(false), HoldState::Released);
        assert_eq!(track.hold(), 0);
    }

    #[test]
    fn spawning_updates_counter_text() {
        let mut track = Track::new(Vec2::new(3.0, 4.0), 10.0);
        assert_eq!(track.counter_text(), "0");
        track.spawn_bar(7);

        let bar = track.bars().next().copied().unwrap();
        assert_eq!(bar.position, Vec2::new(3.0, 4.0));
        assert_eq!(bar.size, Vec2::new(10.0, 0.0));
        assert_eq!(bar.created_frame, 7);
        assert_eq!(track.counter(), 1);
        assert_eq!(track.counter_text(), "1");
    }

    #[test]
    fn growing_without_bars_is_a_no_op() {
        let mut track = Track::new(Vec2::ZERO, 10.0);
        track.grow_newest(5.0, ScrollDirection::Up);
        assert_eq!(track.bar_count(), 0);
    }
}
