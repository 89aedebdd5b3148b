//! The drawing capability shapes paint through.
//!
//! Shapes never rasterize anything themselves. They resolve a style and
//! hand one primitive at a time to a [`Renderer`].

use crate::geometry::Bounds;
use crate::style::DrawStyle;
use serde::{Deserialize, Serialize};

/// Kind of primitive a shape asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    /// Solid box covering the bounds.
    FilledBox,
    /// Oval inscribed in the bounds.
    Oval,
    /// Rectangle outline along the bounds.
    Outline,
}

/// Sink for draw calls.
///
/// Every call carries its full style, so nothing needs restoring between
/// primitives.
pub trait Renderer {
    fn draw(&mut self, primitive: Primitive, bounds: Bounds, style: DrawStyle);
}
