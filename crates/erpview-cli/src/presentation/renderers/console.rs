use anyhow::Result;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::formatters::Palette;
use crate::presentation::view_models::{CommandResultViewModel, CreateView};

pub struct ConsoleRenderer {
    json_mode: bool,
    palette: Palette,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            palette: Palette::detect(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// The text or JSON that `render` prints.
    pub fn to_output<T>(&self, result: &CommandResultViewModel<T>) -> Result<String>
    where
        T: Serialize + CreateView,
    {
        if self.json_mode {
            return Ok(format!("{}\n", serde_json::to_string_pretty(result)?));
        }

        let palette = self.palette;
        let mut out = String::new();

        if let Some(badge) = &result.badge {
            out.push_str(&format!("{} {}\n\n", badge.icon(), palette.bold(&badge.label)));
        }

        out.push_str(&result.content.create_view(palette).to_string());

        if !result.suggestions.is_empty() {
            out.push_str(&format!("\n{}\n", palette.yellow(&palette.bold("Tips:"))));
            for tip in &result.suggestions {
                out.push_str(&format!("  - {}", tip.description));
                if let Some(cmd) = &tip.command {
                    out.push_str(&format!(": {}", palette.cyan(cmd)));
                }
                out.push('\n');
            }
        }

        Ok(out)
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        print!("{}", self.to_output(&result)?);
        Ok(())
    }
}
