use bevy::prelude::*;

use crate::engine::{BarAnimator, Binding, BindingError, Track};
use crate::file::{KeyEntry, OverlaySettings};
use crate::overlay::frame_limit::FrameLimiter;
use crate::overlay::render::{
    world_center, BACKGROUND_Z, COUNTER_Z, LABEL_Z, OUTLINE_Z, SQUARE_Z,
};

// Font sizes relative to the square.
const LABEL_FONT_RATIO: f32 = 0.5;
const COUNTER_FONT_RATIO: f32 = 50.0 / 140.0;
const COUNTER_GAP: f32 = 6.0;

#[derive(Component)]
pub struct KeySquare;

#[derive(Component)]
pub struct KeyLabel;

#[derive(Component)]
pub struct CounterLabel;

#[derive(Component)]
pub struct BarSprite;

#[derive(Component)]
pub struct BackgroundImage;

/// Everything belonging to one binding: its input, animation state and the
/// entities that draw it.
pub struct BindingSlot {
    pub binding: Binding,
    pub track: Track,
    /// Sampled state for the current frame.
    pub pressed: bool,
    pub square: Entity,
    pub label: Entity,
    pub counter_label: Option<Entity>,
    pub bar_sprites: Vec<Entity>,
}

#[derive(Resource, Default, Deref, DerefMut)]
pub struct BindingSlots(pub Vec<BindingSlot>);

/// Bindings rejected at startup, with their 1-based position in the config.
#[derive(Resource, Default, Debug, Deref)]
pub struct BindingErrors(pub Vec<(usize, BindingError)>);

/// Resolve every configured key. Bad entries are returned separately so the
/// rest of the overlay still comes up.
pub fn build_bindings(keys: &[KeyEntry]) -> (Vec<Binding>, Vec<(usize, BindingError)>) {
    let mut bindings = Vec::with_capacity(keys.len());
    let mut errors = Vec::new();
    for (index, entry) in keys.iter().enumerate() {
        match Binding::new(&entry.key, entry.label.as_deref()) {
            Ok(binding) => bindings.push(binding),
            Err(err) => errors.push((index + 1, err)),
        }
    }
    (bindings, errors)
}

pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub fn spawn_overlay(
    mut commands: Commands,
    settings: Res<OverlaySettings>,
    asset_server: Res<AssetServer>,
    mut slots: ResMut<BindingSlots>,
    mut binding_errors: ResMut<BindingErrors>,
) {
    let layout = settings.layout;
    let window = settings.window_size();
    let palette = &settings.palette;

    commands.insert_resource(ClearColor(palette.background));
    commands.insert_resource(BarAnimator::new(layout, settings.bar_speed));
    commands.insert_resource(FrameLimiter::new(settings.max_fps));

    if let Some(path) = &settings.background_image {
        commands.spawn((
            Sprite {
                image: asset_server.load(path.clone()),
                custom_size: Some(window),
                ..default()
            },
            Transform::from_translation(Vec3::new(0.0, 0.0, BACKGROUND_Z)),
            BackgroundImage,
        ));
    }

    let (bindings, errors) = build_bindings(&settings.keys);
    for (index, err) in &errors {
        warn!("Skipping key{index}: {err}");
    }
    binding_errors.0 = errors;

    let count = bindings.len();
    let label_font = layout.key_size * LABEL_FONT_RATIO;
    let counter_font = layout.key_size * COUNTER_FONT_RATIO;
    let square_size = Vec2::splat(layout.key_size);

    for (index, binding) in bindings.into_iter().enumerate() {
        let square = layout.square(index, count);
        let center = world_center(window, square.min, square_size);

        let outlined = square_size + Vec2::splat(2.0 * layout.outline);
        commands.spawn((
            Sprite::from_color(palette.border, outlined),
            Transform::from_translation(center.extend(OUTLINE_Z)),
        ));
        let square_entity = commands
            .spawn((
                Sprite::from_color(palette.key, square_size),
                Transform::from_translation(center.extend(SQUARE_Z)),
                KeySquare,
            ))
            .id();

        let label = commands
            .spawn((
                Text2d::new(binding.label.clone()),
                TextFont {
                    font_size: label_font,
                    ..default()
                },
                TextColor(palette.font),
                Transform::from_translation(center.extend(LABEL_Z)),
                KeyLabel,
            ))
            .id();

        let track = Track::new(layout.bar_origin(square), square.width());

        let counter_label = settings.key_counter.then(|| {
            // Counters sit on the side of the square facing away from the bars.
            let text_center_y = if layout.scroll.is_up() {
                square.min.y - layout.outline - COUNTER_GAP - counter_font / 2.0
            } else {
                square.max.y + layout.outline + COUNTER_GAP + counter_font / 2.0
            };
            let position = Vec2::new(center.x, window.y / 2.0 - text_center_y);
            commands
                .spawn((
                    Text2d::new(track.counter_text()),
                    TextFont {
                        font_size: counter_font,
                        ..default()
                    },
                    TextColor(palette.font),
                    Transform::from_translation(position.extend(COUNTER_Z)),
                    CounterLabel,
                ))
                .id()
        });

        slots.push(BindingSlot {
            binding,
            track,
            pressed: false,
            square: square_entity,
            label,
            counter_label,
            bar_sprites: Vec::new(),
        });
    }

    if slots.is_empty() {
        warn!("No valid keys configured, the overlay will stay empty");
    } else {
        info!("Tracking {} keys", slots.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::OverlayConfig;
    use bevy::ecs::system::RunSystemOnce;

    fn spawn_with_counter(key_counter: bool) -> App {
        let config = OverlayConfig {
            key_counter,
            ..OverlayConfig::default()
        };
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .insert_resource(config.validate().unwrap())
            .init_resource::<BindingSlots>()
            .init_resource::<BindingErrors>();
        app.world_mut().run_system_once(spawn_overlay).unwrap();
        app
    }

    fn counter_texts(app: &mut App) -> Vec<String> {
        let world = app.world_mut();
        world
            .query_filtered::<&Text2d, With<CounterLabel>>()
            .iter(world)
            .map(|text| text.0.clone())
            .collect()
    }

    fn entry(key: &str) -> KeyEntry {
        KeyEntry {
            key: key.to_string(),
            label: None,
        }
    }

    #[test]
    fn invalid_keys_are_skipped_and_reported() {
        let keys = [entry("Z"), entry("xyz123"), entry("mRight")];
        let (bindings, errors) = build_bindings(&keys);

        let labels: Vec<_> = bindings.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Z", "Right"]);
        assert_eq!(
            errors,
            [(2, BindingError::UnknownIdentifier("xyz123".to_string()))]
        );
    }

    #[test]
    fn counters_start_at_zero_when_enabled() {
        let mut app = spawn_with_counter(true);

        assert_eq!(counter_texts(&mut app), ["0", "0"]);
        let slots = app.world().resource::<BindingSlots>();
        assert_eq!(slots.len(), 2);
        assert!(slots.iter().all(|slot| slot.counter_label.is_some()));
    }

    #[test]
    fn no_counter_entities_when_disabled() {
        let mut app = spawn_with_counter(false);

        assert!(counter_texts(&mut app).is_empty());
        let slots = app.world().resource::<BindingSlots>();
        assert_eq!(slots.len(), 2);
        assert!(slots.iter().all(|slot| slot.counter_label.is_none()));
    }
}
