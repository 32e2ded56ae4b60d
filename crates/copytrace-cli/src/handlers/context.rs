use crate::args::{OutputFormat, ViewModeArgs};
use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, DisplayOptions, Renderer, ViewMode};
use anyhow::Result;
use is_terminal::IsTerminal;
use serde::Serialize;

/// Output settings shared by every handler.
pub struct HandlerContext {
    pub format: OutputFormat,
    pub options: DisplayOptions,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, view_mode: &ViewModeArgs) -> Self {
        Self::with_mode(format, view_mode.resolve())
    }

    pub fn with_mode(format: OutputFormat, mode: ViewMode) -> Self {
        let enable_color = format == OutputFormat::Plain
            && std::env::var_os("NO_COLOR").is_none()
            && std::io::stdout().is_terminal();

        Self {
            format,
            options: DisplayOptions { mode, enable_color },
        }
    }

    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        let renderer = ConsoleRenderer::new(self.format == OutputFormat::Json, self.options);
        renderer.render(view_model)
    }
}
