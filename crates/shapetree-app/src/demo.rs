//! The sample scene shown by the demo shell.

use shapetree_core::shapes::{Circle, Dot, Group, Rectangle, Shape};
use shapetree_core::style::SerializableColor;

/// A blue circle, a red circle with a dot on its rim, and a green square
/// framed by four corner dots.
pub fn demo_scene() -> Vec<Shape> {
    vec![
        Circle::new(10, 10, 10, SerializableColor::BLUE).into(),
        Group::new(vec![
            Circle::new(110, 110, 50, SerializableColor::RED).into(),
            Dot::new(160, 160, SerializableColor::RED).into(),
        ])
        .into(),
        Group::new(vec![
            Rectangle::new(250, 250, 100, 100, SerializableColor::GREEN).into(),
            Dot::new(240, 240, SerializableColor::GREEN).into(),
            Dot::new(240, 360, SerializableColor::GREEN).into(),
            Dot::new(360, 360, SerializableColor::GREEN).into(),
            Dot::new(360, 240, SerializableColor::GREEN).into(),
        ])
        .into(),
    ]
}
