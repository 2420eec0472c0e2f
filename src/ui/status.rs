use std::time::Instant;

use crate::app::{Model, Prompt};
use crate::ui::style::{ERASE_LINE, INVERT, RESET};

/// Longest filename shown in the status bar, in characters.
const NAME_WIDTH: usize = 20;

/// Inverted bar: filename, line count and modified flag on the left;
/// file type and cursor line on the right.
pub fn draw_status_bar(model: &Model, out: &mut Vec<u8>) {
    let doc = &model.document;
    let cols = model.viewport.screen_cols();
    let name = doc
        .filename()
        .map_or_else(|| "[No Name]".to_string(), |path| path.display().to_string());
    let modified = if doc.is_dirty() { "(modified)" } else { "" };
    let left = format!("{name:.NAME_WIDTH$} - {} lines {modified}", doc.num_rows());
    let file_type = doc.syntax().map_or("no ft", |syntax| syntax.name);
    let right = format!("{file_type} | {}/{}", model.cursor.row + 1, doc.num_rows());

    out.extend_from_slice(INVERT);
    let left = left.as_bytes();
    let mut len = left.len().min(cols);
    out.extend_from_slice(&left[..len]);
    while len < cols {
        if cols - len == right.len() {
            out.extend_from_slice(right.as_bytes());
            break;
        }
        out.push(b' ');
        len += 1;
    }
    out.extend_from_slice(RESET);
    out.extend_from_slice(b"\r\n");
}

/// Bottom line: the open prompt, or a status message younger than the
/// timeout, cut to the screen width.
pub fn draw_message_bar(model: &Model, now: Instant, out: &mut Vec<u8>) {
    out.extend_from_slice(ERASE_LINE);
    let message = model
        .prompt
        .as_ref()
        .map(Prompt::text)
        .or_else(|| model.status_text(now).map(str::to_owned));
    if let Some(message) = message {
        let bytes = message.as_bytes();
        out.extend_from_slice(&bytes[..bytes.len().min(model.viewport.screen_cols())]);
    }
}
