//! Display-list renderer that keeps every draw call.

use crate::renderer::{FrameRenderer, RenderContext};
use shapetree_core::geometry::Bounds;
use shapetree_core::render::{Primitive, Renderer};
use shapetree_core::style::DrawStyle;

/// One recorded primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCommand {
    pub primitive: Primitive,
    pub bounds: Bounds,
    pub style: DrawStyle,
}

/// Records primitives in paint order.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the last frame, in paint order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands drawn in the highlight style.
    pub fn highlighted(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| c.style.is_dashed())
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, primitive: Primitive, bounds: Bounds, style: DrawStyle) {
        self.commands.push(DrawCommand {
            primitive,
            bounds,
            style,
        });
    }
}

impl FrameRenderer for RecordingRenderer {
    fn build_frame(&mut self, ctx: &RenderContext) {
        self.clear();
        ctx.editor.paint(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapetree_core::editor::Editor;
    use shapetree_core::shapes::{Circle, Dot, Group, Rectangle};
    use shapetree_core::style::SerializableColor;

    fn editor() -> Editor {
        let mut editor = Editor::default();
        editor.load(vec![
            Circle::new(10, 10, 10, SerializableColor::BLUE).into(),
            Group::new(vec![
                Rectangle::new(40, 40, 10, 10, SerializableColor::GREEN).into(),
                Dot::new(60, 60, SerializableColor::GREEN).into(),
            ])
            .into(),
        ]);
        editor
    }

    #[test]
    fn test_unselected_frame() {
        let editor = editor();
        let mut renderer = RecordingRenderer::new();
        renderer.build_frame(&RenderContext::new(&editor));

        assert_eq!(
            renderer.commands(),
            &[
                DrawCommand {
                    primitive: Primitive::Oval,
                    bounds: Bounds::new(10, 10, 19, 19),
                    style: DrawStyle::normal(SerializableColor::BLUE),
                },
                DrawCommand {
                    primitive: Primitive::Outline,
                    bounds: Bounds::new(40, 40, 9, 9),
                    style: DrawStyle::normal(SerializableColor::GREEN),
                },
                DrawCommand {
                    primitive: Primitive::FilledBox,
                    bounds: Bounds::new(59, 59, 3, 3),
                    style: DrawStyle::normal(SerializableColor::GREEN),
                },
            ]
        );
        assert_eq!(renderer.highlighted().count(), 0);
    }

    #[test]
    fn test_selected_leaf_uses_highlight() {
        let mut editor = editor();
        editor.handle_press(15, 15);

        let mut renderer = RecordingRenderer::new();
        renderer.build_frame(&RenderContext::new(&editor));

        let highlighted: Vec<_> = renderer.highlighted().collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].primitive, Primitive::Oval);
        assert_eq!(highlighted[0].style, DrawStyle::highlight());
    }

    #[test]
    fn test_selected_group_frame_precedes_children() {
        let mut editor = editor();
        editor.handle_press(45, 45);

        let mut renderer = RecordingRenderer::new();
        renderer.build_frame(&RenderContext::new(&editor));

        let commands = renderer.commands();
        assert_eq!(commands.len(), 4);
        assert_eq!(commands[1].primitive, Primitive::Outline);
        assert_eq!(commands[1].style, DrawStyle::highlight());
        // Group box is (40, 40, 23, 23).
        assert_eq!(commands[1].bounds, Bounds::new(39, 39, 24, 24));
        // Children keep their own normal style.
        assert!(!commands[2].style.is_dashed());
        assert!(!commands[3].style.is_dashed());
    }

    #[test]
    fn test_build_frame_replaces_previous_frame() {
        let editor = editor();
        let mut renderer = RecordingRenderer::new();
        let ctx = RenderContext::new(&editor);
        renderer.build_frame(&ctx);
        renderer.build_frame(&ctx);
        assert_eq!(renderer.commands().len(), 3);
    }
}
