use bevy::prelude::*;

#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    // Camera, key row, fade texture and input backend are created here.
    #[default]
    Setup,
    Running,
}

pub fn finish_setup(mut next_state: ResMut<NextState<AppState>>) {
    next_state.set(AppState::Running);
}
