//! Rectangle shape.

use super::{GeometryError, ShapeId, ShapeTrait};
use crate::render::{Primitive, Renderer};
use crate::style::{DrawStyle, SerializableColor};
use uuid::Uuid;

/// An axis-aligned rectangle outline.
#[derive(Debug, Clone)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// Top-left corner.
    pub x: i32,
    pub y: i32,
    width: i32,
    height: i32,
    pub color: SerializableColor,
    pub(crate) selected: bool,
}

impl Rectangle {
    /// Create a new rectangle. Sizes are not checked; see [`Rectangle::try_new`].
    pub fn new(x: i32, y: i32, width: i32, height: i32, color: SerializableColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            x,
            y,
            width,
            height,
            color,
            selected: false,
        }
    }

    /// Create a new rectangle, rejecting negative sizes.
    pub fn try_new(
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: SerializableColor,
    ) -> Result<Self, GeometryError> {
        let rect = Self::new(x, y, width, height, color);
        rect.validate()?;
        Ok(rect)
    }

    pub(crate) fn validate(&self) -> Result<(), GeometryError> {
        if self.width < 0 || self.height < 0 {
            return Err(GeometryError::NegativeSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl ShapeTrait for Rectangle {
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
        self.width
    }

    fn height(&self) -> i32 {
        self.height
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
        // One unit in so the outline stays inside the box.
        let style = DrawStyle::for_selection(self.selected, self.color);
        renderer.draw(Primitive::Outline, self.bounds().resized_by(-1, -1), style);
    }
}
