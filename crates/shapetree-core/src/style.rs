//! Colors and stroke styles handed to renderers.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const LIGHT_GRAY: Self = Self::rgb(192, 192, 192);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// `#RRGGBB` form, ignoring alpha.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Default for SerializableColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Stroke pattern for outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrokeStyle {
    #[default]
    Solid,
    /// Short dashes, used for selection highlights.
    Dashed,
}

/// Resolved style for a single primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawStyle {
    pub color: SerializableColor,
    pub stroke: StrokeStyle,
}

impl DrawStyle {
    /// Color of selection highlights.
    pub const HIGHLIGHT_COLOR: SerializableColor = SerializableColor::LIGHT_GRAY;

    /// A shape's own color with a solid stroke.
    pub fn normal(color: SerializableColor) -> Self {
        Self {
            color,
            stroke: StrokeStyle::Solid,
        }
    }

    /// Light gray, dashed.
    pub fn highlight() -> Self {
        Self {
            color: Self::HIGHLIGHT_COLOR,
            stroke: StrokeStyle::Dashed,
        }
    }

    /// Pick the highlight or the normal style from a selection flag.
    pub fn for_selection(selected: bool, color: SerializableColor) -> Self {
        if selected {
            Self::highlight()
        } else {
            Self::normal(color)
        }
    }

    /// Get the color as a peniko Color.
    pub fn peniko_color(&self) -> Color {
        self.color.into()
    }

    pub fn is_dashed(&self) -> bool {
        self.stroke == StrokeStyle::Dashed
    }
}
