use std::path::PathBuf;

use bevy::{
    prelude::*,
    window::{ExitCondition, WindowLevel, WindowPlugin, WindowResolution},
    winit::{UpdateMode, WinitSettings},
};

use keyoverlay::file::{load_config, ConfigPlugin};
use keyoverlay::overlay::OverlayPlugin;
use keyoverlay::states::AppState;

fn main() -> AppExit {
    let cli_path = std::env::args_os().nth(1).map(PathBuf::from);
    let loaded = match load_config(cli_path) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("{err}");
            return AppExit::error();
        }
    };
    let settings = match loaded.config.validate() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Invalid config '{}': {err}", loaded.source.path.display());
            return AppExit::error();
        }
    };

    // One window pixel per logical pixel, whatever the monitor's scale.
    let mut resolution = WindowResolution::default().with_scale_factor_override(1.0);
    resolution.set_physical_resolution(
        u32::from(settings.window_width),
        u32::from(settings.window_height),
    );
    let window_level = if settings.always_on_top {
        WindowLevel::AlwaysOnTop
    } else {
        WindowLevel::Normal
    };

    App::new()
        .add_plugins((
            ConfigPlugin {
                settings,
                source: loaded.source,
            },
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "KeyOverlay".to_string(),
                    resolution,
                    resizable: false,
                    window_level,
                    ..default()
                }),
                exit_condition: ExitCondition::OnPrimaryClosed,
                ..default()
            }),
            OverlayPlugin,
        ))
        // Keep animating while another window has focus.
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::Continuous,
            unfocused_mode: UpdateMode::Continuous,
        })
        .init_state::<AppState>()
        .run()
}
