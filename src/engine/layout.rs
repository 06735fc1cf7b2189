use bevy::math::{Rect, Vec2};

use crate::engine::ScrollDirection;

/// Window height the visual style was tuned for; `ratio_y` is measured against it.
pub const REFERENCE_HEIGHT: f32 = 960.0;
/// Distance between the key row and the window edge it sits on.
pub const KEY_ROW_OFFSET: f32 = 100.0;
/// Gap between a square and bars spawning below it in up-scroll.
pub const UP_SCROLL_BAR_NUDGE: f32 = 2.0;

/// Static geometry of the key row: where each square sits and where its bars
/// start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayLayout {
    pub window: Vec2,
    pub key_size: f32,
    pub outline: f32,
    pub margin: f32,
    pub scroll: ScrollDirection,
}

impl OverlayLayout {
    pub fn ratio_y(&self) -> f32 {
        self.window.y / REFERENCE_HEIGHT
    }

    /// Fill area (outline excluded) of square `index` in a row of `count`,
    /// centered horizontally.
    pub fn square(&self, index: usize, count: usize) -> Rect {
        let cell = self.key_size + 2.0 * self.outline;
        let row_width = count as f32 * cell + count.saturating_sub(1) as f32 * self.margin;
        let left = (self.window.x - row_width) / 2.0 + self.outline;
        let x = left + index as f32 * (cell + self.margin);
        let y = match self.scroll {
            ScrollDirection::Down => self.window.y - KEY_ROW_OFFSET - self.key_size,
            ScrollDirection::Up => KEY_ROW_OFFSET,
        };
        Rect::new(x, y, x + self.key_size, y + self.key_size)
    }

    /// Top-left corner of a freshly spawned bar for `square`: just past the
    /// outline on the side the bars travel toward.
    pub fn bar_origin(&self, square: Rect) -> Vec2 {
        match self.scroll {
            ScrollDirection::Down => Vec2::new(square.min.x, square.min.y - self.outline),
            ScrollDirection::Up => Vec2::new(
                square.min.x,
                square.max.y + self.outline + UP_SCROLL_BAR_NUDGE,
            ),
        }
    }

    /// Whether a bar at `position` with `height` has fully left the window
    /// through the edge opposite the key row.
    pub fn has_exited(&self, position: Vec2, height: f32) -> bool {
        match self.scroll {
            ScrollDirection::Down => position.y + height < 0.0,
            ScrollDirection::Up => position.y > self.window.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn layout(scroll: ScrollDirection) -> OverlayLayout {
        OverlayLayout {
            window: Vec2::new(400.0, 960.0),
            key_size: 70.0,
            outline: 5.0,
            margin: 20.0,
            scroll,
        }
    }

    #[test]
    fn row_is_centered() {
        let layout = layout(ScrollDirection::Down);
        let first = layout.square(0, 2);
        let last = layout.square(1, 2);
        let left_gap = first.min.x - layout.outline;
        let right_gap = layout.window.x - (last.max.x + layout.outline);
        assert_relative_eq!(left_gap, right_gap);
        assert_relative_eq!(last.min.x - first.max.x, 2.0 * layout.outline + layout.margin);
    }

    #[test]
    fn key_row_follows_scroll_direction() {
        let down = layout(ScrollDirection::Down).square(0, 1);
        assert_relative_eq!(down.max.y, 960.0 - KEY_ROW_OFFSET);

        let up = layout(ScrollDirection::Up).square(0, 1);
        assert_relative_eq!(up.min.y, KEY_ROW_OFFSET);
    }

    #[test]
    fn bars_spawn_outside_the_outline() {
        let down = layout(ScrollDirection::Down);
        let square = down.square(0, 1);
        assert_eq!(down.bar_origin(square), Vec2::new(square.min.x, square.min.y - 5.0));

        let up = layout(ScrollDirection::Up);
        let square = up.square(0, 1);
        assert_eq!(up.bar_origin(square), Vec2::new(square.min.x, square.max.y + 7.0));
    }

    #[test]
    fn exit_checks_the_far_edge() {
        let down = layout(ScrollDirection::Down);
        assert!(!down.has_exited(Vec2::new(0.0, -10.0), 10.0));
        assert!(down.has_exited(Vec2::new(0.0, -10.5), 10.0));

        let up = layout(ScrollDirection::Up);
        assert!(!up.has_exited(Vec2::new(0.0, 960.0), 10.0));
        assert!(up.has_exited(Vec2::new(0.0, 960.5), 10.0));
    }
}
