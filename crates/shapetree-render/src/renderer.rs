//! Frame-level renderer abstraction.

use shapetree_core::editor::Editor;
use shapetree_core::style::SerializableColor;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The editor whose scene is drawn.
    pub editor: &'a Editor,
    /// Background color.
    pub background_color: SerializableColor,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context using the editor's configured background.
    pub fn new(editor: &'a Editor) -> Self {
        Self {
            editor,
            background_color: editor.config().background,
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: SerializableColor) -> Self {
        self.background_color = color;
        self
    }
}

/// Trait for rendering backends that turn a whole frame into output.
///
/// Backends receive individual primitives through
/// [`shapetree_core::render::Renderer`]; this trait drives one frame.
pub trait FrameRenderer {
    /// Discard the previous frame and draw the editor's scene.
    fn build_frame(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> SerializableColor {
        ctx.background_color
    }
}
