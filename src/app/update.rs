use tracing::debug;

use crate::app::Model;
use crate::app::model::{Prompt, PromptKind};
use crate::editor::{Cursor, Direction};
use crate::input::{Key, ctrl};

/// All possible events and actions in the editor.
///
/// Each keypress maps to at most one message; see `input::handle_key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // Editing
    /// Insert a byte at the cursor
    InsertByte(u8),
    /// Split the current row at the cursor
    InsertNewline,
    /// Delete the byte left of the cursor, joining rows at column 0
    DeleteBack,
    /// Delete the byte under the cursor
    DeleteForward,

    // Navigation
    MoveCursor(Direction),
    MoveHome,
    MoveEnd,
    PageUp,
    PageDown,

    // Commands
    /// Open the incremental search prompt
    StartSearch,
    /// Write the document, asking for a filename first if it has none
    Save,
    /// Quit, asking for confirmation if there are unsaved changes
    Quit,
    /// Repaint without changing anything
    Redraw,
    /// Terminal resized to (rows, cols)
    Resize(usize, usize),

    /// A key typed while a prompt is open
    PromptKey(Key),
}

/// Pure state transition: apply `msg` to `model`.
///
/// File I/O never happens here; a save only sets
/// [`Model::save_requested`].
pub fn update(mut model: Model, msg: Message) -> Model {
    // Any key other than quit re-arms the confirmation counter.
    if !matches!(msg, Message::Quit | Message::Resize(..)) {
        model.quit_times = model.settings.quit_times;
    }

    match msg {
        Message::InsertByte(byte) => insert_byte(&mut model, byte),
        Message::InsertNewline => insert_newline(&mut model),
        Message::DeleteBack => delete_back(&mut model),
        Message::DeleteForward => {
            model.cursor.step(&model.document, Direction::Right);
            delete_back(&mut model);
        }

        Message::MoveCursor(direction) => model.cursor.step(&model.document, direction),
        Message::MoveHome => model.cursor.home(),
        Message::MoveEnd => model.cursor.end(&model.document),
        Message::PageUp => {
            model.cursor.row = model.viewport.row_offset();
            model.cursor.clamp_to(&model.document);
            repeat_step(&mut model, Direction::Up);
        }
        Message::PageDown => {
            let bottom = (model.viewport.row_offset() + model.viewport.screen_rows())
                .saturating_sub(1)
                .min(model.document.num_rows());
            model.cursor.row = bottom;
            model.cursor.clamp_to(&model.document);
            repeat_step(&mut model, Direction::Down);
        }

        Message::StartSearch => {
            let prompt = Prompt::new(PromptKind::Search {
                origin: model.cursor,
                row_offset: model.viewport.row_offset(),
                col_offset: model.viewport.col_offset(),
            });
            model.prompt = Some(prompt);
        }
        Message::Save => {
            if model.document.filename().is_some() {
                model.save_requested = true;
            } else {
                model.prompt = Some(Prompt::new(PromptKind::SaveAs));
            }
        }
        Message::Quit => quit(&mut model),
        Message::Redraw => {}
        Message::Resize(rows, cols) => {
            model
                .viewport
                .resize(rows.saturating_sub(super::model::BAR_ROWS), cols);
        }

        Message::PromptKey(key) => prompt_key(&mut model, key),
    }

    model.scroll();
    model
}

fn insert_byte(model: &mut Model, byte: u8) {
    let Cursor { row, col } = model.cursor;
    if row == model.document.num_rows() {
        model.document.insert_row(row, b"");
    }
    model.document.insert_char(row, col, byte);
    model.cursor.col += 1;
}

fn insert_newline(model: &mut Model) {
    let Cursor { row, col } = model.cursor;
    if col == 0 {
        model.document.insert_row(row, b"");
    } else {
        model.document.split_row(row, col);
    }
    model.cursor = Cursor::at(row + 1, 0);
}

fn delete_back(model: &mut Model) {
    let Cursor { row, col } = model.cursor;
    if row == model.document.num_rows() || (row == 0 && col == 0) {
        return;
    }
    if col > 0 {
        model.document.delete_char(row, col - 1);
        model.cursor.col -= 1;
        return;
    }
    let joined_at = model.document.row_len(row - 1);
    let tail = model
        .document
        .row(row)
        .map(|r| r.raw().to_vec())
        .unwrap_or_default();
    model.document.append_to_row(row - 1, &tail);
    model.document.delete_row(row);
    model.cursor = Cursor::at(row - 1, joined_at);
}

fn repeat_step(model: &mut Model, direction: Direction) {
    for _ in 0..model.viewport.screen_rows() {
        model.cursor.step(&model.document, direction);
    }
}

fn quit(model: &mut Model) {
    if model.document.is_dirty() && model.quit_times > 1 {
        model.quit_times -= 1;
        let remaining = model.quit_times;
        model.set_status(format!(
            "WARNING!!! File has unsaved changes. Press Ctrl-Q {remaining} more times to quit."
        ));
        return;
    }
    debug!(dirty = model.document.dirty(), "quit");
    model.should_quit = true;
}

/// Feed one key to the open prompt.
///
/// Backspace removes the last character, printable ASCII is appended,
/// Escape cancels and Enter accepts non-empty input. The search hook runs
/// after every key so results follow the query as it is typed.
fn prompt_key(model: &mut Model, key: Key) {
    let Some(mut prompt) = model.prompt.take() else {
        return;
    };

    match key {
        Key::BACKSPACE | Key::Delete => {
            prompt.input.pop();
        }
        Key::Byte(byte) if byte == ctrl(b'h') => {
            prompt.input.pop();
        }
        Key::Escape => {
            model.clear_status();
            finish_prompt(model, &prompt, key, false);
            return;
        }
        Key::ENTER if !prompt.input.is_empty() => {
            model.clear_status();
            finish_prompt(model, &prompt, key, true);
            return;
        }
        Key::Byte(byte) if byte.is_ascii() && !byte.is_ascii_control() => {
            prompt.input.push(char::from(byte));
        }
        _ => {}
    }

    if matches!(prompt.kind, PromptKind::Search { .. }) {
        search_step(model, &prompt.input, key);
    }
    model.prompt = Some(prompt);
}

fn finish_prompt(model: &mut Model, prompt: &Prompt, key: Key, accepted: bool) {
    match prompt.kind {
        PromptKind::Search {
            origin,
            row_offset,
            col_offset,
        } => {
            search_step(model, &prompt.input, key);
            if !accepted {
                model.cursor = origin;
                model.cursor.clamp_to(&model.document);
                model.viewport.set_offsets(row_offset, col_offset);
            }
        }
        PromptKind::SaveAs if accepted => {
            model.document.set_filename(prompt.input.as_str());
            if model.settings.syntax_enabled {
                model.document.select_syntax();
            }
            model.save_requested = true;
        }
        PromptKind::SaveAs => model.set_status("Save aborted"),
    }
}

fn search_step(model: &mut Model, query: &str, key: Key) {
    if let Some(hit) = model.search.on_input(&mut model.document, query, key) {
        model.cursor = Cursor::at(hit.row, hit.col);
        // Scrolling from past the end leaves the match on the top line.
        model
            .viewport
            .reveal_on_next_scroll(model.document.num_rows());
    }
}
