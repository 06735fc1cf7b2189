use bevy::prelude::*;

use crate::file::OverlaySettings;
use crate::overlay::scene::{BarSprite, BindingSlot, BindingSlots, CounterLabel};

// Draw order, back to front.
pub const BACKGROUND_Z: f32 = 0.0;
pub const OUTLINE_Z: f32 = 1.0;
pub const SQUARE_Z: f32 = 1.5;
pub const LABEL_Z: f32 = 2.0;
pub const BAR_Z: f32 = 3.0;
pub const COUNTER_Z: f32 = 4.0;
pub const FADE_Z: f32 = 5.0;

/// Center, in world units, of a rectangle given in window pixels. The 2D camera
/// sits at the origin with y pointing up.
pub fn world_center(window: Vec2, top_left: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(
        top_left.x + size.x / 2.0 - window.x / 2.0,
        window.y / 2.0 - top_left.y - size.y / 2.0,
    )
}

/// Keep one sprite per live bar. Sprites are matched to bars by position in
/// the track, so retiring the oldest bar just shifts everything down by one.
pub fn sync_bar_sprites(
    mut commands: Commands,
    settings: Res<OverlaySettings>,
    mut slots: ResMut<BindingSlots>,
    mut sprites: Query<(&mut Transform, &mut Sprite), With<BarSprite>>,
) {
    let window = settings.window_size();
    let color = settings.palette.bar;

    for slot in slots.iter_mut() {
        let BindingSlot {
            track, bar_sprites, ..
        } = slot;

        while bar_sprites.len() > track.bar_count() {
            if let Some(entity) = bar_sprites.pop() {
                commands.entity(entity).despawn();
            }
        }

        for (index, bar) in track.bars().enumerate() {
            let translation = world_center(window, bar.position, bar.size).extend(BAR_Z);
            match bar_sprites.get(index) {
                Some(&entity) => {
                    if let Ok((mut transform, mut sprite)) = sprites.get_mut(entity) {
                        transform.translation = translation;
                        sprite.custom_size = Some(bar.size);
                    }
                }
                None => {
                    let entity = commands
                        .spawn((
                            Sprite::from_color(color, bar.size),
                            Transform::from_translation(translation),
                            BarSprite,
                        ))
                        .id();
                    bar_sprites.push(entity);
                }
            }
        }
    }
}

pub fn sync_counter_labels(
    slots: Res<BindingSlots>,
    mut labels: Query<&mut Text2d, With<CounterLabel>>,
) {
    for slot in slots.iter() {
        let Some(entity) = slot.counter_label else {
            continue;
        };
        if let Ok(mut text) = labels.get_mut(entity) {
            if text.0 != slot.track.counter_text() {
                text.0 = slot.track.counter_text().to_string();
            }
        }
    }
}
