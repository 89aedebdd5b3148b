//! Integer geometry shared by shapes and renderers.

use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// An axis-aligned integer box anchored at its top-left corner.
///
/// Arithmetic saturates at the `i32` limits so queries on extreme
/// coordinates stay total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    /// The degenerate box reported by empty groups.
    pub const ZERO: Bounds = Bounds::new(0, 0, 0, 0);

    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`).
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Open-interval containment: points on the edges are outside.
    pub fn contains_strict(&self, px: i32, py: i32) -> bool {
        px > self.x && px < self.right() && py > self.y && py < self.bottom()
    }

    /// Return this box shifted by `(dx, dy)`.
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.width,
            self.height,
        )
    }

    /// Grow (or shrink, for negative values) the extent without moving the anchor.
    pub fn resized_by(&self, dw: i32, dh: i32) -> Self {
        Self::new(
            self.x,
            self.y,
            self.width.saturating_add(dw),
            self.height.saturating_add(dh),
        )
    }

    /// The tight box around a set of child boxes, as a group computes it.
    ///
    /// The origin is the minimum child origin. The extent is the largest
    /// `relative offset + child extent`, never below zero. No boxes yields
    /// [`Bounds::ZERO`].
    ///
    /// Extents are summed in `i64` and clamped to `i32::MAX` only at the end,
    /// so enclosure is exact whenever the result fits in an `i32`.
    pub fn enclosing(boxes: &[Bounds]) -> Self {
        let Some(x) = boxes.iter().map(|b| b.x).min() else {
            return Self::ZERO;
        };
        let y = boxes.iter().map(|b| b.y).min().unwrap_or(0);

        let extent = |offset: i32, origin: i32, size: i32| {
            i64::from(offset) - i64::from(origin) + i64::from(size)
        };
        let width = boxes
            .iter()
            .map(|b| extent(b.x, x, b.width))
            .fold(0, i64::max);
        let height = boxes
            .iter()
            .map(|b| extent(b.y, y, b.height))
            .fold(0, i64::max);

        Self::new(x, y, clamp_extent(width), clamp_extent(height))
    }
}

fn clamp_extent(extent: i64) -> i32 {
    i32::try_from(extent).unwrap_or(i32::MAX)
}

impl From<Bounds> for Rect {
    fn from(bounds: Bounds) -> Self {
        Rect::new(
            bounds.x as f64,
            bounds.y as f64,
            bounds.right() as f64,
            bounds.bottom() as f64,
        )
    }
}
