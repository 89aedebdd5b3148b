//! Dot shape.

use super::{ShapeId, ShapeTrait};
use crate::geometry::Bounds;
use crate::render::{Primitive, Renderer};
use crate::style::{DrawStyle, SerializableColor};
use uuid::Uuid;

/// A fixed-size point marker.
#[derive(Debug, Clone)]
pub struct Dot {
    pub(crate) id: ShapeId,
    pub x: i32,
    pub y: i32,
    pub color: SerializableColor,
    pub(crate) selected: bool,
}

impl Dot {
    /// Side length of every dot.
    pub const SIZE: i32 = 3;

    /// Create a new dot anchored at `(x, y)`.
    pub fn new(x: i32, y: i32, color: SerializableColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            x,
            y,
            color,
            selected: false,
        }
    }
}

impl ShapeTrait for Dot {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn x(&self) -> i32 {
        self.x
    }

    fn y(&self) -> i32 {
        self.y
    }

    fn width(&self) -> i32 {
        Self::SIZE
    }

    fn height(&self) -> i32 {
        Self::SIZE
    }

    fn move_by(&mut self, dx: i32, dy: i32) {
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
    }

    fn select(&mut self) {
        self.selected = true;
    }

    fn unselect(&mut self) {
        self.selected = false;
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn color(&self) -> SerializableColor {
        self.color
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        // Filled and centered on the anchor.
        let style = DrawStyle::for_selection(self.selected, self.color);
        renderer.draw(Primitive::FilledBox, self.bounds().translated(-1, -1), style);
    }
}
