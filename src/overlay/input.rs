use bevy::prelude::*;

use crate::engine::InputId;
use crate::file::{InputBackendKind, OverlaySettings};
use crate::overlay::global_input::GlobalInput;
use crate::overlay::scene::{BindingSlots, KeyLabel, KeySquare};

/// Answers "is this input held right now" for one frame.
pub trait InputSampler {
    fn is_pressed(&self, id: InputId) -> bool;
}

/// Input as seen by the overlay window. Only reports keys while focused.
pub struct WindowInput<'a> {
    pub keys: &'a ButtonInput<KeyCode>,
    pub mouse: &'a ButtonInput<MouseButton>,
}

impl InputSampler for WindowInput<'_> {
    fn is_pressed(&self, id: InputId) -> bool {
        match id {
            InputId::Keyboard(key) => self.keys.pressed(key),
            InputId::Mouse(button) => self.mouse.pressed(button),
        }
    }
}

/// Open the device-level backend when asked for. Falls back to window input
/// if it cannot be opened.
pub fn setup_input_backend(world: &mut World) {
    let wanted = world
        .get_resource::<OverlaySettings>()
        .map(|settings| settings.input_backend);
    if wanted != Some(InputBackendKind::Global) {
        return;
    }

    match GlobalInput::open() {
        Some(global) => {
            info!("Reading key state from {} input devices", global.device_count());
            world.insert_non_send_resource(global);
        }
        None => warn!(
            "Global input is unavailable (needs the `global-input` feature on Linux and read access to /dev/input), using window input"
        ),
    }
}

/// Sample every binding and restyle its square and label.
pub fn sample_input(
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    global: Option<NonSendMut<GlobalInput>>,
    settings: Res<OverlaySettings>,
    mut slots: ResMut<BindingSlots>,
    mut squares: Query<&mut Sprite, With<KeySquare>>,
    mut labels: Query<&mut TextColor, With<KeyLabel>>,
) {
    if let Some(mut global) = global {
        global.refresh();
        apply_samples(&*global, &settings, &mut slots, &mut squares, &mut labels);
    } else {
        let window_input = WindowInput {
            keys: &keys,
            mouse: &mouse,
        };
        apply_samples(&window_input, &settings, &mut slots, &mut squares, &mut labels);
    }
}

fn apply_samples(
    sampler: &dyn InputSampler,
    settings: &OverlaySettings,
    slots: &mut BindingSlots,
    squares: &mut Query<&mut Sprite, With<KeySquare>>,
    labels: &mut Query<&mut TextColor, With<KeyLabel>>,
) {
    let palette = &settings.palette;
    for slot in slots.iter_mut() {
        slot.pressed = sampler.is_pressed(slot.binding.id);

        if let Ok(mut sprite) = squares.get_mut(slot.square) {
            sprite.color = if slot.pressed { palette.bar } else { palette.key };
        }
        if let Ok(mut color) = labels.get_mut(slot.label) {
            let wanted = if slot.pressed { palette.press_font } else { palette.font };
            if color.0 != wanted {
                color.0 = wanted;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Binding, Track};
    use crate::file::OverlayConfig;
    use crate::overlay::scene::BindingSlot;
    use bevy::ecs::system::RunSystemOnce;

    fn world_with_binding(identifier: &str) -> World {
        let settings = OverlayConfig::default().validate().unwrap();
        let mut world = World::new();

        let square = world
            .spawn((Sprite::from_color(settings.palette.key, Vec2::splat(10.0)), KeySquare))
            .id();
        let label = world.spawn((TextColor(settings.palette.font), KeyLabel)).id();
        let slot = BindingSlot {
            binding: Binding::new(identifier, None).unwrap(),
            track: Track::new(Vec2::ZERO, 10.0),
            pressed: false,
            square,
            label,
            counter_label: None,
            bar_sprites: Vec::new(),
        };

        world.insert_resource(settings);
        world.insert_resource(BindingSlots(vec![slot]));
        world.init_resource::<ButtonInput<KeyCode>>();
        world.init_resource::<ButtonInput<MouseButton>>();
        world
    }

    fn square_color(world: &mut World) -> Color {
        let entity = world.resource::<BindingSlots>()[0].square;
        world.get::<Sprite>(entity).unwrap().color
    }

    #[test]
    fn window_input_reports_keyboard_and_mouse() {
        let mut keys = ButtonInput::<KeyCode>::default();
        let mut mouse = ButtonInput::<MouseButton>::default();
        keys.press(KeyCode::KeyZ);
        mouse.press(MouseButton::Right);

        let input = WindowInput {
            keys: &keys,
            mouse: &mouse,
        };
        assert!(input.is_pressed(InputId::Keyboard(KeyCode::KeyZ)));
        assert!(!input.is_pressed(InputId::Keyboard(KeyCode::KeyX)));
        assert!(input.is_pressed(InputId::Mouse(MouseButton::Right)));
        assert!(!input.is_pressed(InputId::Mouse(MouseButton::Left)));
    }

    #[test]
    fn pressed_key_recolors_square_and_label() {
        let mut world = world_with_binding("Z");
        let palette = world.resource::<OverlaySettings>().palette.clone();

        world
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyZ);
        world.run_system_once(sample_input).unwrap();

        assert!(world.resource::<BindingSlots>()[0].pressed);
        assert_eq!(square_color(&mut world), palette.bar);
        let label = world.resource::<BindingSlots>()[0].label;
        assert_eq!(world.get::<TextColor>(label).unwrap().0, palette.press_font);

        world
            .resource_mut::<ButtonInput<KeyCode>>()
            .release(KeyCode::KeyZ);
        world.run_system_once(sample_input).unwrap();

        assert!(!world.resource::<BindingSlots>()[0].pressed);
        assert_eq!(square_color(&mut world), palette.key);
        assert_eq!(world.get::<TextColor>(label).unwrap().0, palette.font);
    }

    #[test]
    fn window_backend_is_kept_unless_global_is_requested() {
        let mut world = world_with_binding("mLeft");
        setup_input_backend(&mut world);
        assert!(world.get_non_send_resource::<GlobalInput>().is_none());
    }
}
