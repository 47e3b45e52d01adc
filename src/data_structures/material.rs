//! Material descriptors and colors.

use std::str::FromStr;

use crate::{data_structures::texture::TextureHandle, error::SceneError};

/// sRGB color with components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Parses `#rrggbb` or the shorthand `#rgb`.
    pub fn from_hex(hex: &str) -> Result<Self, SceneError> {
        let invalid = || SceneError::InvalidColor(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            6 => Ok(Self::from_rgb8(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                // #abc expands to #aabbcc
                let expand = |s: &str| channel(s).map(|v| v * 17);
                Ok(Self::from_rgb8(
                    expand(&digits[0..1])?,
                    expand(&digits[1..2])?,
                    expand(&digits[2..3])?,
                ))
            }
            _ => Err(invalid()),
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Color {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('#') {
            return Self::from_hex(s);
        }
        match s.to_ascii_lowercase().as_str() {
            "white" => Ok(Self::WHITE),
            "black" => Ok(Self::BLACK),
            "red" => Ok(Self::RED),
            "green" => Ok(Self::from_rgb8(0, 128, 0)),
            "blue" => Ok(Self::rgb(0.0, 0.0, 1.0)),
            "gray" | "grey" => Ok(Self::from_rgb8(128, 128, 128)),
            _ => Err(SceneError::InvalidColor(s.to_string())),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Surface description of a mesh or text node.
///
/// Opacity below one always turns transparency on. The fields are private so
/// the invariant cannot be broken after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    color: Color,
    opacity: f32,
    transparent: bool,
    wireframe: bool,
    texture: Option<TextureHandle>,
}

impl Material {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            opacity: 1.0,
            transparent: false,
            wireframe: false,
            texture: None,
        }
    }

    /// Material sampling `texture`, alpha blended so transparent image regions
    /// stay see-through.
    pub fn textured(texture: TextureHandle) -> Self {
        Self {
            texture: Some(texture),
            transparent: true,
            ..Self::new(Color::WHITE)
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        if self.opacity < 1.0 {
            self.transparent = true;
        }
        self
    }

    pub fn with_transparency(mut self, transparent: bool) -> Self {
        self.transparent = transparent || self.opacity < 1.0;
        self
    }

    pub fn with_wireframe(mut self, wireframe: bool) -> Self {
        self.wireframe = wireframe;
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_transparent(&self) -> bool {
        self.transparent
    }

    pub fn is_wireframe(&self) -> bool {
        self.wireframe
    }

    pub fn texture(&self) -> Option<&TextureHandle> {
        self.texture.as_ref()
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

impl From<Color> for Material {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}
