//! Group shape for combining multiple shapes.
//!
//! A group stores no geometry of its own. Position, size and hit tests are
//! derived from the live children on every call. Whole-subtree walks use an
//! explicit stack, so nesting depth is bounded by memory rather than by the
//! thread's call stack.

use super::{Shape, ShapeId, ShapeTrait};
use crate::geometry::Bounds;
use crate::render::{Primitive, Renderer};
use crate::style::{DrawStyle, SerializableColor};
use std::slice;
use uuid::Uuid;

/// A group of shapes that can be manipulated as a single unit.
/// Groups can contain other groups, enabling nested hierarchies.
#[derive(Debug, Clone)]
pub struct Group {
    pub(crate) id: ShapeId,
    /// Child shapes in insertion order.
    children: Vec<Shape>,
    /// Placeholder color; groups only draw their selection frame.
    color: SerializableColor,
    pub(crate) selected: bool,
}

impl Default for Group {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Group {
    /// Create a new group from a list of shapes.
    pub fn new(children: Vec<Shape>) -> Self {
        Self {
            id: Uuid::new_v4(),
            children,
            color: SerializableColor::BLACK,
            selected: false,
        }
    }

    /// Get the children of this group.
    pub fn children(&self) -> &[Shape] {
        &self.children
    }

    /// Get mutable access to children.
    pub fn children_mut(&mut self) -> &mut Vec<Shape> {
        &mut self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Append a child.
    pub fn add(&mut self, child: impl Into<Shape>) {
        self.children.push(child.into());
    }

    /// Append several children, keeping their order.
    pub fn add_all(&mut self, children: impl IntoIterator<Item = Shape>) {
        self.children.extend(children);
    }

    /// Remove the first immediate child with this ID.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.children.iter().position(|c| c.id() == id)?;
        Some(self.children.remove(index))
    }

    /// Remove every immediate child whose ID is listed, returning them in order.
    pub fn remove_all(&mut self, ids: &[ShapeId]) -> Vec<Shape> {
        let (removed, kept): (Vec<Shape>, Vec<Shape>) = std::mem::take(&mut self.children)
            .into_iter()
            .partition(|c| ids.contains(&c.id()));
        self.children = kept;
        removed
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Dissolve this group and return its children.
    pub fn ungroup(mut self) -> Vec<Shape> {
        std::mem::take(&mut self.children)
    }

    /// Pre-order iterator over every shape below this group.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![self.children.iter()],
        }
    }

    /// Visit every shape below this group in pre-order.
    pub fn for_each_descendant_mut(&mut self, mut f: impl FnMut(&mut Shape)) {
        let mut stack = vec![self.children.iter_mut()];
        while let Some(iter) = stack.last_mut() {
            let Some(child) = iter.next() else {
                stack.pop();
                continue;
            };
            f(child);
            if let Shape::Group(group) = child {
                stack.push(group.children.iter_mut());
            }
        }
    }

    /// Find a shape by ID within this group (including nested groups).
    pub fn find_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.descendants().find(|shape| shape.id() == id)
    }

    /// Find a mutable shape by ID within this group (including nested groups).
    pub fn find_shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        let mut stack = vec![self.children.iter_mut()];
        while let Some(iter) = stack.last_mut() {
            let Some(child) = iter.next() else {
                stack.pop();
                continue;
            };
            if child.id() == id {
                return Some(child);
            }
            if let Shape::Group(group) = child {
                stack.push(group.children.iter_mut());
            }
        }
        None
    }

    /// Select the first immediate child containing the point.
    ///
    /// Only direct children are candidates: a hit inside a nested group
    /// selects that group as a whole.
    pub fn select_child_at(&mut self, px: i32, py: i32) -> bool {
        match self
            .children
            .iter_mut()
            .find(|child| child.is_inside_bounds(px, py))
        {
            Some(child) => {
                child.select();
                true
            }
            None => false,
        }
    }

    /// The first immediate child whose selection flag is set.
    pub fn selected_child(&self) -> Option<&Shape> {
        self.children.iter().find(|child| child.is_selected())
    }

    /// Frame drawn around a selected group, just outside its box.
    fn selection_frame(&self) -> Bounds {
        self.bounds().translated(-1, -1).resized_by(1, 1)
    }
}

impl ShapeTrait for Group {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn x(&self) -> i32 {
        self.bounds().x
    }

    fn y(&self) -> i32 {
        self.bounds().y
    }

    fn width(&self) -> i32 {
        self.bounds().width
    }

    fn height(&self) -> i32 {
        self.bounds().height
    }

    fn bounds(&self) -> Bounds {
        // Post-order: each frame gathers its children's boxes, then folds
        // them into one box for its parent.
        struct Frame<'a> {
            children: slice::Iter<'a, Shape>,
            boxes: Vec<Bounds>,
        }

        impl<'a> Frame<'a> {
            fn new(children: &'a [Shape]) -> Self {
                Self {
                    children: children.iter(),
                    boxes: Vec::with_capacity(children.len()),
                }
            }
        }

        let mut stack = vec![Frame::new(&self.children)];
        let mut result = Bounds::ZERO;
        while let Some(frame) = stack.last_mut() {
            match frame.children.next() {
                Some(Shape::Group(group)) => stack.push(Frame::new(&group.children)),
                Some(leaf) => frame.boxes.push(leaf.bounds()),
                None => {
                    let done = Bounds::enclosing(&frame.boxes);
                    stack.pop();
                    match stack.last_mut() {
                        Some(parent) => parent.boxes.push(done),
                        None => result = done,
                    }
                }
            }
        }
        result
    }

    fn move_by(&mut self, dx: i32, dy: i32) {
        self.for_each_descendant_mut(|shape| {
            if !shape.is_group() {
                shape.move_by(dx, dy);
            }
        });
    }

    /// True when any leaf below this group contains the point; the gaps
    /// inside the aggregate box do not count.
    fn is_inside_bounds(&self, px: i32, py: i32) -> bool {
        self.descendants()
            .any(|shape| !shape.is_group() && shape.is_inside_bounds(px, py))
    }

    fn select(&mut self) {
        self.selected = true;
    }

    /// Clears this group's flag and every flag below it.
    fn unselect(&mut self) {
        self.selected = false;
        self.for_each_descendant_mut(|shape| shape.set_own_selection(false));
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn color(&self) -> SerializableColor {
        self.color
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        if self.selected {
            renderer.draw(Primitive::Outline, self.selection_frame(), DrawStyle::highlight());
        }
        for shape in self.descendants() {
            match shape {
                Shape::Group(group) => {
                    if group.selected {
                        renderer.draw(
                            Primitive::Outline,
                            group.selection_frame(),
                            DrawStyle::highlight(),
                        );
                    }
                }
                leaf => leaf.draw(renderer),
            }
        }
    }
}

impl Drop for Group {
    fn drop(&mut self) {
        // Flatten nested groups so dropping a deep tree does not recurse.
        let mut pending = std::mem::take(&mut self.children);
        while let Some(shape) = pending.pop() {
            if let Shape::Group(mut group) = shape {
                pending.append(&mut group.children);
            }
        }
    }
}

/// Pre-order walk over the shapes below a [`Group`].
///
/// A group is yielded before its own children.
pub struct Descendants<'a> {
    stack: Vec<slice::Iter<'a, Shape>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Shape;

    fn next(&mut self) -> Option<&'a Shape> {
        loop {
            let iter = self.stack.last_mut()?;
            match iter.next() {
                Some(shape) => {
                    if let Shape::Group(group) = shape {
                        self.stack.push(group.children.iter());
                    }
                    return Some(shape);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
