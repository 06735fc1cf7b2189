use bevy::prelude::*;

use crate::engine::{BarAnimator, FrameClock};
use crate::states::{finish_setup, AppState};

pub mod fade;
pub mod frame_limit;
pub mod global_input;
pub mod input;
pub mod render;
pub mod scene;

pub use frame_limit::FrameLimiter;
pub use input::{InputSampler, WindowInput};
pub use scene::{BindingErrors, BindingSlot, BindingSlots};

/// The frame loop: sample input, advance bars, mirror them onto sprites.
pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BindingSlots>()
            .init_resource::<BindingErrors>()
            .init_resource::<FrameClock>()
            .add_systems(
                OnEnter(AppState::Setup),
                (
                    scene::setup_camera,
                    scene::spawn_overlay,
                    fade::spawn_fade_overlay,
                    input::setup_input_backend,
                    finish_setup,
                )
                    .chain(),
            )
            .add_systems(OnEnter(AppState::Running), reset_frame_clock)
            .add_systems(
                Update,
                (
                    input::sample_input,
                    advance_bars,
                    render::sync_bar_sprites,
                    render::sync_counter_labels,
                )
                    .chain()
                    .run_if(in_state(AppState::Running)),
            )
            .add_systems(Last, frame_limit::limit_frame_rate);
    }
}

fn reset_frame_clock(mut clock: ResMut<FrameClock>) {
    *clock = FrameClock::new();
}

pub fn advance_bars(
    mut clock: ResMut<FrameClock>,
    mut animator: ResMut<BarAnimator>,
    mut slots: ResMut<BindingSlots>,
) {
    let elapsed = clock.restart();
    let stats = animator.advance(
        elapsed,
        slots.iter_mut().map(|slot| (&mut slot.track, slot.pressed)),
    );
    if stats.spawned > 0 || stats.retired > 0 {
        trace!(
            "frame {}: {} bars spawned, {} retired",
            animator.frame(),
            stats.spawned,
            stats.retired
        );
    }
}
