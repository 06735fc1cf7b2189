use bevy::color::Color;

use crate::engine::ScrollDirection;

pub const FADE_SLICES: u32 = 255;
/// Below this vertical scale the strip is too thin to be worth drawing.
pub const MIN_FADE_RATIO: f32 = 0.5;

/// One horizontal band of the fade strip. `offset` is measured from the top of
/// the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeSlice {
    pub offset: u32,
    pub height: u32,
    pub rgba: [u8; 4],
}

/// Gradient of the background color laid over the edge the bars scroll
/// toward. Slices are ordered from that edge inward, so alpha always descends
/// along the sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FadeOverlay {
    width: u32,
    slice_height: u32,
    scroll: ScrollDirection,
    slices: Vec<FadeSlice>,
}

/// Build the fade strip for a window `width` pixels wide scaled vertically by
/// `ratio_y`. Returns an empty overlay when `ratio_y < MIN_FADE_RATIO`.
pub fn build_fade_overlay(
    background: Color,
    width: u32,
    ratio_y: f32,
    scroll: ScrollDirection,
) -> FadeOverlay {
    if !(ratio_y >= MIN_FADE_RATIO) || width == 0 {
        return FadeOverlay {
            width,
            scroll,
            ..Default::default()
        };
    }

    let slice_height = ((2.0 * ratio_y) as u32).max(1);
    let strip_height = slice_height * FADE_SLICES;
    let [red, green, blue] = srgb_u8(background);

    let slices = (0..FADE_SLICES)
        .map(|i| {
            let alpha = (255 - i) as u8;
            let offset = match scroll {
                ScrollDirection::Down => i * slice_height,
                ScrollDirection::Up => strip_height - (i + 1) * slice_height,
            };
            FadeSlice {
                offset,
                height: slice_height,
                rgba: [red, green, blue, alpha],
            }
        })
        .collect();

    FadeOverlay {
        width,
        slice_height,
        scroll,
        slices,
    }
}

impl FadeOverlay {
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn slices(&self) -> &[FadeSlice] {
        &self.slices
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.slice_height * self.slices.len() as u32
    }

    /// y of the strip's top edge inside a window `window_height` tall. Down-scroll
    /// bars leave through the top, up-scroll bars through the bottom.
    pub fn top_in_window(&self, window_height: f32) -> f32 {
        match self.scroll {
            ScrollDirection::Down => 0.0,
            ScrollDirection::Up => window_height - self.height() as f32,
        }
    }

    /// Composite every slice into one RGBA8 buffer, row-major from the top.
    pub fn rasterize(&self) -> Vec<u8> {
        let row_len = self.width as usize * 4;
        let mut pixels = vec![0; row_len * self.height() as usize];
        for slice in &self.slices {
            let start = slice.offset as usize * row_len;
            let end = start + slice.height as usize * row_len;
            for pixel in pixels[start..end].chunks_exact_mut(4) {
                pixel.copy_from_slice(&slice.rgba);
            }
        }
        pixels
    }
}

fn srgb_u8(color: Color) -> [u8; 3] {
    let srgba = color.to_srgba();
    [srgba.red, srgba.green, srgba.blue].map(|channel| (channel.clamp(0.0, 1.0) * 255.0).round() as u8)
}
