use anyhow::Result;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, ViewMode};

pub struct ConsoleRenderer {
    json_mode: bool,
    view_mode: ViewMode,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool, view_mode: ViewMode) -> Self {
        Self {
            json_mode,
            view_mode,
        }
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

        // Scripting output: content only.
        if self.view_mode == ViewMode::Minimal {
            print!("{}", result.content.create_view(self.view_mode));
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            println!(
                "{} {}",
                badge.icon(),
                badge
                    .label
                    .if_supports_color(Stream::Stdout, |text| text.bold())
            );
            println!();
        }

        print!("{}", result.content.create_view(self.view_mode));

        if !result.suggestions.is_empty() {
            println!(
                "\n{}",
                "💡 Tips:".if_supports_color(Stream::Stdout, |text| text.yellow())
            );
            for tip in &result.suggestions {
                print!("  • {}", tip.description);
                if let Some(cmd) = &tip.command {
                    print!(
                        ": {}",
                        cmd.if_supports_color(Stream::Stdout, |text| text.cyan())
                    );
                }
                println!();
            }
        }

        Ok(())
    }
}
