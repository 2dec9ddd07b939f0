//! Colors and the widget theme.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ARGB color with 8-bit channels.
///
/// Matches the `0xAARRGGBB` packing the draw primitive speaks. In config
/// files a color is written as a hex string, e.g. `"FF161616"` or
/// `"#AAAAAAAA"`; six digits imply full alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Alpha channel.
    pub a: u8,
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::argb(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Self = Self::argb(0xFFFF_FFFF);

    /// Unpacks a `0xAARRGGBB` value.
    #[must_use]
    pub const fn argb(packed: u32) -> Self {
        Self {
            a: ((packed >> 24) & 0xFF) as u8,
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    /// Creates an opaque color from RGB channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 0xFF, r, g, b }
    }

    /// Packs into a `0xAARRGGBB` value.
    #[must_use]
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Converts to normalized `[r, g, b, a]` floats for the renderer.
    #[must_use]
    pub fn to_linear(self) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            f32::from(self.a) / 255.0,
        ]
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:08X}", self.to_argb()))
    }
}

struct ColorVisitor;

impl<'de> Visitor<'de> for ColorVisitor {
    type Value = Color;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a hex color string like \"FF161616\" or \"#AAAAAA\"")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Color, E> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        let packed = u32::from_str_radix(digits, 16)
            .map_err(|_| E::custom(format!("invalid hex color: {value:?}")))?;
        match digits.len() {
            8 => Ok(Color::argb(packed)),
            6 => Ok(Color::argb(0xFF00_0000 | packed)),
            _ => Err(E::custom(format!(
                "hex color must have 6 or 8 digits, got {}",
                digits.len()
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(ColorVisitor)
    }
}

/// Colors for every widget state the toolkit draws.
///
/// The defaults are the original demo's constants. Alpha is carried through
/// to the draw list but the reference backend does not blend, so translucent
/// values render opaque there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Drop-shadow rectangle drawn behind a button.
    pub button_shadow: Color,
    /// Button face when neither hot nor active.
    pub button_idle: Color,
    /// Button face when hot (and when hot-and-active, offset marks the press).
    pub button_hot: Color,
    /// Slider track.
    pub slider_track: Color,
    /// Slider thumb when neither hot nor active.
    pub slider_thumb_idle: Color,
    /// Slider thumb when hot or active.
    pub slider_thumb_hot: Color,
    /// Checkbox background.
    pub checkbox_background: Color,
    /// Checkbox inner mark, drawn only when checked.
    pub checkbox_mark: Color,
}

impl Theme {
    /// The original demo palette.
    pub const GRAPHITE: Self = Self {
        button_shadow: Color::BLACK,
        button_idle: Color::argb(0xAAAA_AAAA),
        button_hot: Color::WHITE,
        slider_track: Color::argb(0xFF77_7777),
        slider_thumb_idle: Color::argb(0xFFAA_AAAA),
        slider_thumb_hot: Color::WHITE,
        checkbox_background: Color::argb(0x7777_7777),
        checkbox_mark: Color::WHITE,
    };
}

impl Default for Theme {
    fn default() -> Self {
        Self::GRAPHITE
    }
}
