use anyhow::Result;
use owo_colors::Style;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::formatters::paint;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, DisplayOptions};

pub struct ConsoleRenderer {
    json_mode: bool,
    options: DisplayOptions,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool, options: DisplayOptions) -> Self {
        Self { json_mode, options }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        let color = self.options.enable_color;
        let minimal = self.options.mode == crate::presentation::ViewMode::Minimal;

        if !minimal && let Some(badge) = &result.badge {
            println!(
                "{} {}",
                badge.icon(),
                paint(&badge.label, Style::new().bold(), color)
            );
            println!();
        }

        print!("{}", result.content.create_view(self.options));

        if !minimal && !result.suggestions.is_empty() {
            println!(
                "\n{}",
                paint("💡 Tips:", Style::new().yellow().bold(), color)
            );
            for tip in &result.suggestions {
                print!("  • {}", tip.description);
                if let Some(cmd) = &tip.command {
                    print!(": {}", paint(cmd, Style::new().cyan(), color));
                }
                println!();
            }
        }

        Ok(())
    }
}
