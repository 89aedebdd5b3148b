//! Shapetree Core Library
//!
//! A composite tree of drawable shapes. Leaves (dots, circles, rectangles)
//! own their geometry; groups derive bounding boxes, hit tests and
//! translations from their children. The [`Editor`] owns the scene root and
//! resolves pointer presses into a selected top-level shape.

pub mod config;
pub mod editor;
pub mod geometry;
pub mod input;
pub mod render;
pub mod shapes;
pub mod style;

pub use config::{ConfigError, EditorConfig};
pub use editor::Editor;
pub use geometry::Bounds;
pub use input::{InputState, MouseButton, PointerEvent};
pub use render::{Primitive, Renderer};
pub use shapes::{Circle, Dot, GeometryError, Group, Rectangle, Shape, ShapeId, ShapeTrait};
pub use style::{DrawStyle, SerializableColor, StrokeStyle};
