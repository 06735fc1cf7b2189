use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use crate::engine::{build_fade_overlay, FadeOverlay};
use crate::file::OverlaySettings;
use crate::overlay::render::{world_center, FADE_Z};

#[derive(Component)]
pub struct FadeOverlaySprite;

/// Composite the fade strip into a single texture, once.
pub fn fade_image(overlay: &FadeOverlay) -> Image {
    Image::new(
        Extent3d {
            width: overlay.width(),
            height: overlay.height(),
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        overlay.rasterize(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    )
}

pub fn spawn_fade_overlay(
    mut commands: Commands,
    settings: Res<OverlaySettings>,
    mut images: ResMut<Assets<Image>>,
) {
    if !settings.fading {
        return;
    }

    let layout = &settings.layout;
    let overlay = build_fade_overlay(
        settings.palette.background,
        u32::from(settings.window_width),
        layout.ratio_y(),
        layout.scroll,
    );
    if overlay.is_empty() {
        info!("Window is too short for the fade overlay, skipping it");
        return;
    }

    let window = settings.window_size();
    let size = Vec2::new(overlay.width() as f32, overlay.height() as f32);
    let top_left = Vec2::new(0.0, overlay.top_in_window(window.y));
    let center = world_center(window, top_left, size);

    commands.spawn((
        Sprite {
            image: images.add(fade_image(&overlay)),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(center.extend(FADE_Z)),
        FadeOverlaySprite,
    ));
    debug!("Built {}px fade overlay", overlay.height());
}
