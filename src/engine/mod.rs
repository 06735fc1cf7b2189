//! Input-to-animation engine.
//!
//! Everything in here works in window pixel space: origin at the top-left
//! corner, y growing downward. Nothing in this module touches the ECS; the
//! `overlay` module owns the entities and copies engine state onto them.

use serde::{Deserialize, Serialize};

pub mod animator;
pub mod binding;
pub mod clock;
pub mod fade;
pub mod keymap;
pub mod layout;
pub mod track;

pub use animator::{AdvanceStats, BarAnimator};
pub use binding::{Binding, BindingError, InputId};
pub use clock::FrameClock;
pub use fade::{build_fade_overlay, FadeOverlay, FadeSlice};
pub use layout::OverlayLayout;
pub use track::{Bar, HoldState, Track};

/// Where the key row sits and which way the bars travel.
///
/// `Down` keeps the squares near the bottom edge and sends bars up the
/// screen. `Up` pins the squares near the top edge and sends bars down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    #[default]
    Down,
    Up,
}

impl ScrollDirection {
    pub fn is_up(self) -> bool {
        self == ScrollDirection::Up
    }

    /// Signed y offset applied to every bar for a frame that moved `distance`.
    pub fn step(self, distance: f32) -> f32 {
        match self {
            ScrollDirection::Down => -distance,
            ScrollDirection::Up => distance,
        }
    }
}
