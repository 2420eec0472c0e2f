use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::app::effects::handle_side_effects;
use crate::app::input::handle_key;
use crate::app::{App, HELP_MESSAGE, Message, Model, update};
use crate::terminal::Terminal;

impl App {
    /// Run the editor until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the terminal fails.
    /// The screen is cleared and raw mode restored either way.
    pub fn run(&mut self) -> Result<()> {
        let document = self.load_document()?;
        let mut terminal = Terminal::enable()
            .context("Failed to initialize terminal - quill requires an interactive terminal")?;

        let mut model = Model::new(document, terminal.size(), self.settings);
        model.set_status(HELP_MESSAGE);
        info!(
            file = ?self.file_path,
            rows = model.document.num_rows(),
            "editor started"
        );

        let result = Self::event_loop(&mut terminal, &mut model);
        terminal.clear_screen();
        result
    }

    fn event_loop(terminal: &mut Terminal, model: &mut Model) -> Result<()> {
        let mut needs_render = true;

        loop {
            if let Some((rows, cols)) = terminal.resized() {
                *model = update(std::mem::take(model), Message::Resize(rows, cols));
                needs_render = true;
            }
            if needs_render {
                let frame = crate::ui::render(model, Instant::now());
                terminal.write_frame(&frame).context("Failed to draw frame")?;
                needs_render = false;
            }

            let Some(key) = terminal.next_key().context("Failed to read key")? else {
                needs_render = model.expire_status(Instant::now());
                continue;
            };
            let Some(msg) = handle_key(key, model) else {
                continue;
            };
            debug!(?msg, "message");
            *model = update(std::mem::take(model), msg);
            handle_side_effects(model);
            if model.should_quit {
                return Ok(());
            }
            needs_render = true;
        }
    }
}
