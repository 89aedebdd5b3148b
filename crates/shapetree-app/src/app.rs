//! Application state and lifecycle.

use clap::Parser;
use shapetree_core::config::{ConfigError, EditorConfig};
use shapetree_core::editor::Editor;
use shapetree_core::input::{MouseButton, PointerEvent};
use shapetree_render::{FrameRenderer, RenderContext, RendererError, SvgRenderer};
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

use crate::demo::demo_scene;

/// Parse an `X,Y` press point.
fn parse_point(s: &str) -> Result<(i32, i32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let x = x
        .trim()
        .parse()
        .map_err(|e| format!("invalid x coordinate: {}", e))?;
    let y = y
        .trim()
        .parse()
        .map_err(|e| format!("invalid y coordinate: {}", e))?;
    Ok((x, y))
}

/// shapetree: render the demonstration scene to SVG.
///
/// Each X,Y point is replayed as a left-button press, in order, before the
/// final frame is written.
#[derive(Parser, Debug)]
#[command(name = "shapetree")]
#[command(version)]
#[command(about = "Render the shape tree demo scene to SVG", long_about = None)]
pub struct Cli {
    /// Path to an editor config JSON file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// SVG destination (stdout when omitted).
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Press points, as X,Y.
    #[arg(value_name = "X,Y", value_parser = parse_point)]
    pub presses: Vec<(i32, i32)>,
}

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Render(#[from] RendererError),
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub editor: EditorConfig,
    /// SVG destination; stdout when unset.
    pub output: Option<PathBuf>,
    /// Presses replayed against the scene, in order.
    pub presses: Vec<(i32, i32)>,
}

impl AppConfig {
    /// Resolve parsed arguments, loading the editor config file if given.
    pub fn from_cli(cli: Cli) -> Result<Self, AppError> {
        let editor = match &cli.config {
            Some(path) => EditorConfig::load(path)?,
            None => EditorConfig::default(),
        };
        Ok(Self {
            editor,
            output: cli.out,
            presses: cli.presses,
        })
    }
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    editor: Editor,
    renderer: SvgRenderer,
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        let editor = Editor::new(config.editor.clone());
        Self {
            config,
            editor,
            renderer: SvgRenderer::new(),
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Load the demo scene, replay the configured presses and return the
    /// final frame as SVG.
    pub fn render(&mut self) -> String {
        self.editor.load(demo_scene());
        self.repaint_if_needed();

        let presses = self.config.presses.clone();
        for (x, y) in presses {
            self.editor.handle_pointer(PointerEvent::press(x, y));
            self.editor.handle_pointer(PointerEvent::Up {
                x,
                y,
                button: MouseButton::Left,
            });
            self.repaint_if_needed();
        }

        self.renderer.to_svg()
    }

    /// Render and write the result to the configured output.
    pub fn run(&mut self) -> Result<(), AppError> {
        let svg = self.render();
        match &self.config.output {
            Some(path) => self.renderer.save(path)?,
            None => std::io::stdout().lock().write_all(svg.as_bytes())?,
        }
        Ok(())
    }

    fn repaint_if_needed(&mut self) {
        if self.editor.take_repaint() {
            self.renderer.build_frame(&RenderContext::new(&self.editor));
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("shapetree").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_presses_and_output() {
        let cli = parse(&["--out", "scene.svg", "15,15", " 300 , 300"]).unwrap();
        let config = AppConfig::from_cli(cli).unwrap();
        assert_eq!(config.output, Some(PathBuf::from("scene.svg")));
        assert_eq!(config.presses, vec![(15, 15), (300, 300)]);
        assert_eq!(config.editor, EditorConfig::default());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse(&["12"]).unwrap_err().kind(), ErrorKind::ValueValidation);
        assert_eq!(parse(&["1,x"]).unwrap_err().kind(), ErrorKind::ValueValidation);
        assert!(parse(&["--out"]).is_err());
        assert_eq!(
            parse(&["--verbose"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
        assert_eq!(parse(&["--help"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_config_file_argument() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "padding": 0 }}"#).unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let config = AppConfig::from_cli(parse(&["--config", path.as_str()]).unwrap()).unwrap();
        assert_eq!(config.editor.padding, 0);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json").to_string_lossy().into_owned();
        let cli = parse(&["--config", path.as_str()]).unwrap();
        assert!(matches!(AppConfig::from_cli(cli), Err(AppError::Config(_))));
    }

    #[test]
    fn test_render_replays_presses() {
        let config = AppConfig::from_cli(parse(&["300,300"]).unwrap()).unwrap();
        let mut app = App::with_config(config);
        let svg = app.render();

        let green_group = app.editor().root().children()[2].id();
        assert_eq!(app.editor().selection(), Some(green_group));
        assert!(svg.contains(r#"width="373" height="373""#));
        assert!(svg.contains("stroke-dasharray"));
    }

    #[test]
    fn test_render_without_presses_has_no_highlight() {
        let mut app = App::new();
        let svg = app.render();
        assert_eq!(app.editor().selection(), None);
        assert!(!svg.contains("stroke-dasharray"));
        assert_eq!(app.editor().root().len(), 3);
    }

    #[test]
    fn test_run_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");
        let mut app = App::with_config(AppConfig {
            output: Some(path.clone()),
            ..AppConfig::default()
        });
        app.run().unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().starts_with("<svg"));
    }
}
