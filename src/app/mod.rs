//! Editor state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete editor state
//! - [`Message`]: All possible editor actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Model, Prompt, PromptKind};
pub use update::{Message, update};

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::EditorSettings;
use crate::editor::Document;
use crate::storage;

/// Shown on the message line at startup.
pub const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find";

/// Main application struct that owns the startup options and runs the
/// event loop.
pub struct App {
    file_path: Option<PathBuf>,
    settings: EditorSettings,
}

impl App {
    /// Create an editor for `file_path`, or for a new unnamed document.
    pub fn new(file_path: Option<PathBuf>) -> Self {
        Self {
            file_path,
            settings: EditorSettings::default(),
        }
    }

    pub const fn with_settings(mut self, settings: EditorSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Load the startup document.
    ///
    /// A file that does not exist yet opens as an empty document with that
    /// name, so the first save creates it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn load_document(&self) -> Result<Document> {
        let tab_stop = self.settings.tab_stop;
        let Some(path) = &self.file_path else {
            return Ok(Document::new(tab_stop));
        };

        let mut doc = match storage::load_lines(path) {
            Ok(lines) => Document::from_lines(lines, tab_stop),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "new file");
                Document::new(tab_stop)
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to open {}", path.display()));
            }
        };
        doc.set_filename(path.clone());
        if self.settings.syntax_enabled {
            doc.select_syntax();
        }
        Ok(doc)
    }
}
