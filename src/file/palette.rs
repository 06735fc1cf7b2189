use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Flat colors of the overlay. In the config file each entry is
/// `[r, g, b]` or `[r, g, b, a]` with 0-255 channels.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Palette {
    #[serde(with = "srgba_u8")]
    pub background: Color,
    // Square fill while released
    #[serde(with = "srgba_u8")]
    pub key: Color,
    // Bars, and the square fill while pressed
    #[serde(with = "srgba_u8")]
    pub bar: Color,
    #[serde(with = "srgba_u8")]
    pub border: Color,
    #[serde(with = "srgba_u8")]
    pub font: Color,
    #[serde(with = "srgba_u8")]
    pub press_font: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::srgb_u8(0, 0, 0),
            key: Color::srgb_u8(0, 0, 0),
            bar: Color::srgb_u8(255, 192, 203),
            border: Color::srgb_u8(255, 255, 255),
            font: Color::srgb_u8(255, 255, 255),
            press_font: Color::srgb_u8(0, 0, 0),
        }
    }
}

mod srgba_u8 {
    use bevy::prelude::Color;
    use serde::de::{Deserializer, Error};
    use serde::ser::{SerializeSeq, Serializer};
    use serde::Deserialize;

    pub fn serialize<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let srgba = color.to_srgba();
        let channels = [srgba.red, srgba.green, srgba.blue, srgba.alpha]
            .map(|channel| (channel.clamp(0.0, 1.0) * 255.0).round() as u8);
        let mut seq = serializer.serialize_seq(Some(4))?;
        for channel in channels {
            seq.serialize_element(&channel)?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
    where
        D: Deserializer<'de>,
    {
        let channels = Vec::<u8>::deserialize(deserializer)?;
        match channels.as_slice() {
            [r, g, b] => Ok(Color::srgb_u8(*r, *g, *b)),
            [r, g, b, a] => Ok(Color::srgba_u8(*r, *g, *b, *a)),
            other => Err(D::Error::invalid_length(other.len(), &"3 or 4 color channels")),
        }
    }
}
