//! Circle shape.

use super::{GeometryError, ShapeId, ShapeTrait};
use crate::render::{Primitive, Renderer};
use crate::style::{DrawStyle, SerializableColor};
use uuid::Uuid;

/// A circle described by the top-left corner of its bounding square.
#[derive(Debug, Clone)]
pub struct Circle {
    pub(crate) id: ShapeId,
    /// Left edge of the bounding square.
    pub x: i32,
    /// Top edge of the bounding square.
    pub y: i32,
    radius: i32,
    pub color: SerializableColor,
    pub(crate) selected: bool,
}

impl Circle {
    /// Create a new circle. The radius is not checked; see [`Circle::try_new`].
    pub fn new(x: i32, y: i32, radius: i32, color: SerializableColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            x,
            y,
            radius,
            color,
            selected: false,
        }
    }

    /// Create a new circle, rejecting a negative radius.
    pub fn try_new(
        x: i32,
        y: i32,
        radius: i32,
        color: SerializableColor,
    ) -> Result<Self, GeometryError> {
        let circle = Self::new(x, y, radius, color);
        circle.validate()?;
        Ok(circle)
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub(crate) fn validate(&self) -> Result<(), GeometryError> {
        if self.radius < 0 {
            return Err(GeometryError::NegativeRadius(self.radius));
        }
        Ok(())
    }
}

impl ShapeTrait for Circle {
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
        self.radius.saturating_mul(2)
    }

    fn height(&self) -> i32 {
        self.radius.saturating_mul(2)
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
        let style = DrawStyle::for_selection(self.selected, self.color);
        renderer.draw(Primitive::Oval, self.bounds().resized_by(-1, -1), style);
    }
}
