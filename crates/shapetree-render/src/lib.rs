//! Shapetree Render Library
//!
//! Renderer implementations for the shapetree editor: a recording renderer
//! that keeps the display list and an SVG exporter built on kurbo paths.

mod recording;
mod renderer;
mod svg;

pub use recording::{DrawCommand, RecordingRenderer};
pub use renderer::{FrameRenderer, RenderContext, RenderResult, RendererError};
pub use shapetree_core::render::{Primitive, Renderer};
pub use svg::SvgRenderer;
