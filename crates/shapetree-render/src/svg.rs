//! SVG export.
//!
//! Primitives follow raster conventions: an outline with bounds `(x, y, w, h)`
//! covers pixels `x..=x + w`, so strokes are shifted half a unit onto pixel
//! centers.

use crate::renderer::{FrameRenderer, RenderContext, RenderResult};
use kurbo::{Affine, BezPath, Ellipse, Rect, Shape as KurboShape};
use shapetree_core::geometry::Bounds;
use shapetree_core::render::{Primitive, Renderer};
use shapetree_core::style::{DrawStyle, SerializableColor};
use std::fmt::Write as _;
use std::path::Path;

const TOLERANCE: f64 = 0.1;

/// Builds an SVG document from draw calls.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    width: i32,
    height: i32,
    background: SerializableColor,
    body: String,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            background: SerializableColor::WHITE,
            body: String::new(),
        }
    }

    /// Document size of the last frame.
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// The complete SVG document.
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width.max(0),
            h = self.height.max(0),
        );
        let _ = writeln!(
            svg,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            self.background.to_hex()
        );
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }

    /// Write the document to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_svg())?;
        log::info!("Wrote SVG to {:?}", path);
        Ok(())
    }

    fn push_path(&mut self, path: &BezPath, paint: &str, style: &DrawStyle) {
        let mut attrs = String::new();
        let alpha = style.peniko_color().components[3];
        if alpha < 1.0 {
            let _ = write!(attrs, r#" opacity="{alpha:.3}""#);
        }
        if style.is_dashed() {
            attrs.push_str(r#" stroke-dasharray="2""#);
        }
        let _ = writeln!(
            self.body,
            r#"  <path d="{}" {paint}{attrs}/>"#,
            path.to_svg()
        );
    }
}

impl Renderer for SvgRenderer {
    fn draw(&mut self, primitive: Primitive, bounds: Bounds, style: DrawStyle) {
        let color = style.color.to_hex();
        match primitive {
            Primitive::FilledBox => {
                let path = Rect::from(bounds).to_path(TOLERANCE);
                self.push_path(&path, &format!(r#"fill="{color}""#), &style);
            }
            Primitive::Outline | Primitive::Oval => {
                let rect = Rect::from(bounds);
                let path = match primitive {
                    Primitive::Oval => Ellipse::from_rect(rect).to_path(TOLERANCE),
                    _ => rect.to_path(TOLERANCE),
                };
                let path = Affine::translate((0.5, 0.5)) * path;
                self.push_path(
                    &path,
                    &format!(r#"fill="none" stroke="{color}" stroke-width="1""#),
                    &style,
                );
            }
        }
    }
}

impl FrameRenderer for SvgRenderer {
    fn build_frame(&mut self, ctx: &RenderContext) {
        let (width, height) = ctx.editor.canvas_size();
        self.width = width;
        self.height = height;
        self.background = self.background_color(ctx);
        self.body.clear();
        ctx.editor.paint(self);
    }
}
