//! Shape definitions for the composite tree.

mod circle;
mod dot;
mod group;
mod rectangle;

pub use circle::Circle;
pub use dot::Dot;
pub use group::{Descendants, Group};
pub use rectangle::Rectangle;

use crate::geometry::Bounds;
use crate::render::Renderer;
use crate::style::SerializableColor;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Malformed leaf geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("Circle radius must not be negative (got {0})")]
    NegativeRadius(i32),
    #[error("Rectangle size must not be negative (got {width}x{height})")]
    NegativeSize { width: i32, height: i32 },
}

/// Common trait for all shapes, leaves and groups alike.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Left edge of the bounding box.
    fn x(&self) -> i32;

    /// Top edge of the bounding box.
    fn y(&self) -> i32;

    fn width(&self) -> i32;

    fn height(&self) -> i32;

    /// Bounding box as one value.
    fn bounds(&self) -> Bounds {
        Bounds::new(self.x(), self.y(), self.width(), self.height())
    }

    /// Translate by an exact delta.
    fn move_by(&mut self, dx: i32, dy: i32);

    /// Strict point containment; edge points are outside.
    fn is_inside_bounds(&self, px: i32, py: i32) -> bool {
        self.bounds().contains_strict(px, py)
    }

    fn select(&mut self);

    fn unselect(&mut self);

    fn is_selected(&self) -> bool;

    /// Color used when the shape is not selected.
    fn color(&self) -> SerializableColor;

    /// Emit this shape's primitives.
    fn draw(&self, renderer: &mut dyn Renderer);
}

/// Enum wrapper for all shape types.
#[derive(Debug, Clone)]
pub enum Shape {
    Dot(Dot),
    Circle(Circle),
    Rectangle(Rectangle),
    Group(Group),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Dot(s) => s.id(),
            Shape::Circle(s) => s.id(),
            Shape::Rectangle(s) => s.id(),
            Shape::Group(s) => s.id(),
        }
    }

    pub fn x(&self) -> i32 {
        self.bounds().x
    }

    pub fn y(&self) -> i32 {
        self.bounds().y
    }

    pub fn width(&self) -> i32 {
        self.bounds().width
    }

    pub fn height(&self) -> i32 {
        self.bounds().height
    }

    pub fn bounds(&self) -> Bounds {
        match self {
            Shape::Dot(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
            Shape::Rectangle(s) => s.bounds(),
            Shape::Group(s) => s.bounds(),
        }
    }

    pub fn move_by(&mut self, dx: i32, dy: i32) {
        match self {
            Shape::Dot(s) => s.move_by(dx, dy),
            Shape::Circle(s) => s.move_by(dx, dy),
            Shape::Rectangle(s) => s.move_by(dx, dy),
            Shape::Group(s) => s.move_by(dx, dy),
        }
    }

    pub fn is_inside_bounds(&self, px: i32, py: i32) -> bool {
        match self {
            Shape::Dot(s) => s.is_inside_bounds(px, py),
            Shape::Circle(s) => s.is_inside_bounds(px, py),
            Shape::Rectangle(s) => s.is_inside_bounds(px, py),
            Shape::Group(s) => s.is_inside_bounds(px, py),
        }
    }

    pub fn select(&mut self) {
        self.set_own_selection(true);
    }

    /// Clear the flag; for groups this reaches every descendant.
    pub fn unselect(&mut self) {
        match self {
            Shape::Group(s) => s.unselect(),
            _ => self.set_own_selection(false),
        }
    }

    pub fn is_selected(&self) -> bool {
        match self {
            Shape::Dot(s) => s.is_selected(),
            Shape::Circle(s) => s.is_selected(),
            Shape::Rectangle(s) => s.is_selected(),
            Shape::Group(s) => s.is_selected(),
        }
    }

    pub fn color(&self) -> SerializableColor {
        match self {
            Shape::Dot(s) => s.color(),
            Shape::Circle(s) => s.color(),
            Shape::Rectangle(s) => s.color(),
            Shape::Group(s) => s.color(),
        }
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        match self {
            Shape::Dot(s) => s.draw(renderer),
            Shape::Circle(s) => s.draw(renderer),
            Shape::Rectangle(s) => s.draw(renderer),
            Shape::Group(s) => s.draw(renderer),
        }
    }

    /// Set or clear this node's own flag without touching descendants.
    pub(crate) fn set_own_selection(&mut self, selected: bool) {
        match self {
            Shape::Dot(s) => s.selected = selected,
            Shape::Circle(s) => s.selected = selected,
            Shape::Rectangle(s) => s.selected = selected,
            Shape::Group(s) => s.selected = selected,
        }
    }

    /// Check leaf geometry, for groups across the whole subtree.
    /// Reports the first malformed leaf in pre-order.
    pub fn validate(&self) -> Result<(), GeometryError> {
        match self {
            Shape::Group(group) => group.descendants().try_for_each(Shape::validate_leaf),
            leaf => leaf.validate_leaf(),
        }
    }

    fn validate_leaf(&self) -> Result<(), GeometryError> {
        match self {
            Shape::Circle(c) => c.validate(),
            Shape::Rectangle(r) => r.validate(),
            Shape::Dot(_) | Shape::Group(_) => Ok(()),
        }
    }

    /// Check if this shape is a group.
    pub fn is_group(&self) -> bool {
        matches!(self, Shape::Group(_))
    }

    /// Get the group if this shape is a group.
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Shape::Group(g) => Some(g),
            _ => None,
        }
    }

    /// Get the mutable group if this shape is a group.
    pub fn as_group_mut(&mut self) -> Option<&mut Group> {
        match self {
            Shape::Group(g) => Some(g),
            _ => None,
        }
    }
}

impl From<Dot> for Shape {
    fn from(dot: Dot) -> Self {
        Shape::Dot(dot)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<Group> for Shape {
    fn from(group: Group) -> Self {
        Shape::Group(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_matches_variant() {
        let rect = Rectangle::new(4, 5, 6, 7, SerializableColor::GREEN);
        let id = rect.id();
        let shape = Shape::from(rect);
        assert_eq!(shape.id(), id);
        assert_eq!(shape.bounds(), Bounds::new(4, 5, 6, 7));
        assert_eq!(shape.color(), SerializableColor::GREEN);
        assert!(!shape.is_group());
    }

    #[test]
    fn test_select_round_trip() {
        let mut shape = Shape::from(Dot::new(1, 1, SerializableColor::BLACK));
        shape.select();
        shape.select();
        assert!(shape.is_selected());
        shape.unselect();
        assert!(!shape.is_selected());
        shape.unselect();
        assert!(!shape.is_selected());
    }

    #[test]
    fn test_validate_reports_nested_leaf() {
        let bad = Circle::new(0, 0, -2, SerializableColor::RED);
        let shape = Shape::from(Group::new(vec![
            Dot::new(0, 0, SerializableColor::RED).into(),
            Group::new(vec![bad.into()]).into(),
        ]));
        assert_eq!(shape.validate(), Err(GeometryError::NegativeRadius(-2)));
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        let shape = Shape::from(Rectangle::new(0, 0, 0, 10, SerializableColor::RED));
        assert!(shape.validate().is_ok());
    }
}
