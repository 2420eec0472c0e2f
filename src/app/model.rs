use std::time::Instant;

use crate::config::EditorSettings;
use crate::editor::{Cursor, Document};
use crate::search::SearchState;
use crate::ui::viewport::Viewport;

/// Rows reserved below the text area for the status and message bars.
pub const BAR_ROWS: usize = 2;
/// Longest status message kept, in bytes.
pub const STATUS_MAX: usize = 80;

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    set_at: Instant,
}

/// What a bottom-line prompt is collecting input for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Incremental search; remembers where the cursor and view were.
    Search {
        origin: Cursor,
        row_offset: usize,
        col_offset: usize,
    },
    /// Filename for a document that has none yet.
    SaveAs,
}

/// An active bottom-line prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

impl Prompt {
    pub const fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: String::new(),
        }
    }

    /// The line shown in the message bar while the prompt is open.
    pub fn text(&self) -> String {
        match self.kind {
            PromptKind::Search { .. } => {
                format!("Search: {} (Use ESC/Arrows/Enter)", self.input)
            }
            PromptKind::SaveAs => format!("Save as: {} (ESC to cancel)", self.input),
        }
    }
}

/// The complete editor state.
///
/// All state lives here; [`super::update`] is the only place it changes
/// in response to input.
#[derive(Debug, Clone)]
pub struct Model {
    pub document: Document,
    pub cursor: Cursor,
    pub viewport: Viewport,
    pub search: SearchState,
    /// Open prompt; while set, keys go to it instead of the editor.
    pub prompt: Option<Prompt>,
    pub settings: EditorSettings,
    /// Quit presses still needed while the document is dirty.
    pub quit_times: u8,
    pub should_quit: bool,
    /// Set when a save is pending; cleared by the side-effect handler.
    pub save_requested: bool,
    status: Option<StatusMessage>,
}

impl Model {
    /// Create a model for `document` on a terminal of `(rows, cols)`.
    pub fn new(document: Document, terminal_size: (usize, usize), settings: EditorSettings) -> Self {
        let (rows, cols) = terminal_size;
        Self {
            document,
            cursor: Cursor::default(),
            viewport: Viewport::new(rows.saturating_sub(BAR_ROWS), cols),
            search: SearchState::new(),
            prompt: None,
            settings,
            quit_times: settings.quit_times,
            should_quit: false,
            save_requested: false,
            status: None,
        }
    }

    /// Replace the status message and restart its timer.
    pub fn set_status(&mut self, text: impl Into<String>) {
        let mut text = text.into();
        if text.len() > STATUS_MAX {
            let mut end = STATUS_MAX;
            while !text.is_char_boundary(end) {
                end -= 1;
            }
            text.truncate(end);
        }
        self.status = Some(StatusMessage {
            text,
            set_at: Instant::now(),
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// The status message if it is still fresh at `now`.
    pub fn status_text(&self, now: Instant) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|status| now.saturating_duration_since(status.set_at) < self.settings.message_timeout)
            .map(|status| status.text.as_str())
    }

    /// Drop a stale status message. Returns true if one was dropped.
    pub fn expire_status(&mut self, now: Instant) -> bool {
        if self.status.is_some() && self.status_text(now).is_none() {
            self.status = None;
            return true;
        }
        false
    }

    /// Cursor column in rendered coordinates.
    pub fn render_col(&self) -> usize {
        self.cursor.render_col(&self.document)
    }

    /// Scroll the viewport so the cursor is on screen.
    pub fn scroll(&mut self) {
        let rcol = self.render_col();
        self.viewport.scroll_to(self.cursor.row, rcol);
    }
}

impl Default for Model {
    fn default() -> Self {
        let settings = EditorSettings::default();
        Self::new(Document::new(settings.tab_stop), (24, 80), settings)
    }
}
