//! Editor state: the root group, selection and repaint bookkeeping.

use crate::config::EditorConfig;
use crate::input::{InputState, PointerEvent};
use crate::render::Renderer;
use crate::shapes::{GeometryError, Group, Shape, ShapeId, ShapeTrait};

/// Owns the scene root and turns pointer presses into selection changes.
///
/// The editor is single-threaded: share it across threads only behind a
/// lock such as `Mutex<Editor>`.
#[derive(Debug)]
pub struct Editor {
    root: Group,
    config: EditorConfig,
    input: InputState,
    needs_repaint: bool,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    /// Create an editor with an empty scene.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            root: Group::default(),
            config,
            input: InputState::new(),
            needs_repaint: true,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The scene root.
    pub fn root(&self) -> &Group {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Group {
        self.needs_repaint = true;
        &mut self.root
    }

    /// Replace the whole scene with `shapes`, keeping their order.
    pub fn load(&mut self, shapes: impl IntoIterator<Item = Shape>) {
        self.root.clear();
        self.root.add_all(shapes);
        self.needs_repaint = true;
        log::debug!("Loaded {} top-level shapes", self.root.len());
    }

    /// Like [`Editor::load`], but rejects malformed geometry first.
    /// On error the current scene is left untouched.
    pub fn try_load(&mut self, shapes: Vec<Shape>) -> Result<(), GeometryError> {
        for shape in &shapes {
            if let Err(err) = shape.validate() {
                log::warn!("Rejected scene: {}", err);
                return Err(err);
            }
        }
        self.load(shapes);
        Ok(())
    }

    /// Clear every selection flag, then select the first top-level shape
    /// under the point. Returns whether anything was hit.
    pub fn handle_press(&mut self, x: i32, y: i32) -> bool {
        self.root.unselect();
        let hit = self.root.select_child_at(x, y);
        self.needs_repaint = true;
        log::debug!("Press at ({}, {}) hit: {}", x, y, hit);
        hit
    }

    /// Feed a raw pointer event. Every `Down` is a press, even when the
    /// matching `Up` never arrived.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        let fresh = self.input.handle_pointer_event(event);
        match event {
            PointerEvent::Down { x, y, button } => {
                if !fresh {
                    log::trace!("{:?} pressed again without a release", button);
                }
                self.handle_press(x, y)
            }
            PointerEvent::Up { .. } | PointerEvent::Move { .. } => false,
        }
    }

    /// ID of the selected top-level shape.
    pub fn selection(&self) -> Option<ShapeId> {
        self.root.selected_child().map(Shape::id)
    }

    /// Draw the whole scene.
    pub fn paint(&self, renderer: &mut dyn Renderer) {
        log::trace!("Painting {} top-level shapes", self.root.len());
        self.root.draw(renderer);
    }

    /// Returns true once after every change that needs a repaint.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    /// Canvas size fitting the scene plus padding on the far edges.
    pub fn canvas_size(&self) -> (i32, i32) {
        let bounds = self.root.bounds();
        (
            bounds.right().saturating_add(self.config.padding),
            bounds.bottom().saturating_add(self.config.padding),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Bounds;
    use crate::render::Primitive;
    use crate::shapes::{Circle, Dot, Rectangle};
    use crate::style::{DrawStyle, SerializableColor};

    #[derive(Default)]
    struct Collect(Vec<(Primitive, Bounds, DrawStyle)>);

    impl Renderer for Collect {
        fn draw(&mut self, primitive: Primitive, bounds: Bounds, style: DrawStyle) {
            self.0.push((primitive, bounds, style));
        }
    }

    fn sample() -> Vec<Shape> {
        vec![
            Circle::new(0, 0, 5, SerializableColor::BLUE).into(),
            Group::new(vec![
                Rectangle::new(50, 50, 20, 20, SerializableColor::GREEN).into(),
                Dot::new(80, 80, SerializableColor::GREEN).into(),
            ])
            .into(),
        ]
    }

    #[test]
    fn test_load_replaces_scene() {
        let mut editor = Editor::default();
        editor.load(sample());
        editor.load(vec![Dot::new(1, 1, SerializableColor::BLACK).into()]);
        assert_eq!(editor.root().len(), 1);
        assert!(editor.take_repaint());
        assert!(!editor.take_repaint());
    }

    #[test]
    fn test_press_selects_top_level_child() {
        let mut editor = Editor::default();
        editor.load(sample());
        let group_id = editor.root().children()[1].id();

        assert!(editor.handle_press(60, 60));
        assert_eq!(editor.selection(), Some(group_id));

        assert!(editor.handle_press(3, 3));
        let circle_id = editor.root().children()[0].id();
        assert_eq!(editor.selection(), Some(circle_id));
        assert!(!editor.root().children()[1].is_selected());
    }

    #[test]
    fn test_press_on_empty_space_clears_selection() {
        let mut editor = Editor::default();
        editor.load(sample());
        editor.handle_press(3, 3);
        editor.take_repaint();

        assert!(!editor.handle_press(500, 500));
        assert_eq!(editor.selection(), None);
        assert!(editor.take_repaint());
    }

    #[test]
    fn test_press_clears_nested_selection() {
        let mut editor = Editor::default();
        editor.load(sample());
        if let Some(group) = editor.root_mut().children_mut()[1].as_group_mut() {
            group.children_mut()[0].select();
        }
        editor.handle_press(500, 500);
        assert!(editor.root().descendants().all(|s| !s.is_selected()));
    }

    #[test]
    fn test_pointer_events() {
        let mut editor = Editor::default();
        editor.load(sample());

        assert!(editor.handle_pointer(PointerEvent::press(3, 3)));
        assert_eq!(editor.selection(), Some(editor.root().children()[0].id()));
        assert!(!editor.handle_pointer(PointerEvent::Move { x: 60, y: 60 }));
        assert!(!editor.handle_pointer(PointerEvent::Up {
            x: 60,
            y: 60,
            button: crate::input::MouseButton::Left,
        }));
        assert_eq!(editor.selection(), Some(editor.root().children()[0].id()));
    }

    #[test]
    fn test_press_without_release_still_selects() {
        let mut editor = Editor::default();
        editor.load(vec![
            Rectangle::new(0, 0, 10, 10, SerializableColor::RED).into(),
            Rectangle::new(20, 0, 10, 10, SerializableColor::RED).into(),
        ]);

        assert!(editor.handle_pointer(PointerEvent::press(5, 5)));
        editor.take_repaint();
        // The release of the first press was lost.
        assert!(editor.handle_pointer(PointerEvent::press(25, 5)));
        assert_eq!(editor.selection(), Some(editor.root().children()[1].id()));
        assert!(!editor.root().children()[0].is_selected());
        assert!(editor.take_repaint());
    }

    #[test]
    fn test_editor_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Editor>();
    }

    #[test]
    fn test_try_load_keeps_scene_on_error() {
        let mut editor = Editor::default();
        editor.load(sample());
        let result = editor.try_load(vec![
            Rectangle::new(0, 0, -4, 4, SerializableColor::RED).into(),
        ]);
        assert!(result.is_err());
        assert_eq!(editor.root().len(), 2);
    }

    #[test]
    fn test_canvas_size_includes_padding() {
        let mut editor = Editor::new(EditorConfig {
            padding: 10,
            ..EditorConfig::default()
        });
        editor.load(sample());
        // Far corner of the group is the dot at (80, 80) + 3.
        assert_eq!(editor.canvas_size(), (93, 93));
    }

    #[test]
    fn test_paint_uses_selection_styles() {
        let mut editor = Editor::default();
        editor.load(sample());
        editor.handle_press(55, 55);

        let mut out = Collect::default();
        editor.paint(&mut out);

        let styles: Vec<_> = out.0.iter().map(|(p, _, s)| (*p, s.is_dashed())).collect();
        assert_eq!(
            styles,
            vec![
                (Primitive::Oval, false),
                (Primitive::Outline, true),
                (Primitive::Outline, false),
                (Primitive::FilledBox, false),
            ]
        );
        // Group frame wraps the group box (50, 50, 33, 33) one unit outside.
        assert_eq!(out.0[1].1, Bounds::new(49, 49, 34, 34));
    }
}
