//! Shapetree Application
//!
//! Demo shell: builds the sample scene, replays presses from the command
//! line and exports the painted frame as SVG.

mod app;
pub mod demo;

pub use app::{App, AppConfig, AppError, Cli};
pub use demo::demo_scene;
