use std::time::Instant;

use crate::app::Model;
use crate::editor::Row;
use crate::ui::status::{draw_message_bar, draw_status_bar};
use crate::ui::style::{
    self, CURSOR_HOME, DEFAULT_FG, ERASE_LINE, HIDE_CURSOR, INVERT, RESET, SHOW_CURSOR,
};

/// Banner shown on an empty document.
pub const WELCOME: &str = concat!("Quill editor -- version ", env!("CARGO_PKG_VERSION"));

/// Compose one full frame for `model` as a single byte buffer.
///
/// The caller is expected to have scrolled the model so the cursor is
/// inside the viewport. Messages older than the configured timeout at
/// `now` are left out.
pub fn render(model: &Model, now: Instant) -> Vec<u8> {
    let viewport = &model.viewport;
    let mut out = Vec::with_capacity((viewport.screen_rows() + 2) * (viewport.screen_cols() + 8));

    out.extend_from_slice(HIDE_CURSOR);
    out.extend_from_slice(CURSOR_HOME);
    draw_rows(model, &mut out);
    draw_status_bar(model, &mut out);
    draw_message_bar(model, now, &mut out);

    let row = model.cursor.row.saturating_sub(viewport.row_offset());
    let col = model.render_col().saturating_sub(viewport.col_offset());
    style::push_cursor_position(&mut out, row + 1, col + 1);
    out.extend_from_slice(SHOW_CURSOR);
    out
}

fn draw_rows(model: &Model, out: &mut Vec<u8>) {
    let viewport = &model.viewport;
    let doc = &model.document;
    for y in 0..viewport.screen_rows() {
        match doc.row(y + viewport.row_offset()) {
            Some(row) => draw_text_row(row, viewport.col_offset(), viewport.screen_cols(), out),
            None if doc.num_rows() == 0 && y == viewport.screen_rows() / 3 => {
                draw_welcome(viewport.screen_cols(), out);
            }
            None => out.push(b'~'),
        }
        out.extend_from_slice(ERASE_LINE);
        out.extend_from_slice(b"\r\n");
    }
}

fn draw_welcome(cols: usize, out: &mut Vec<u8>) {
    let len = WELCOME.len().min(cols);
    let mut padding = (cols - len) / 2;
    if padding > 0 {
        out.push(b'~');
        padding -= 1;
    }
    out.resize(out.len() + padding, b' ');
    out.extend_from_slice(&WELCOME.as_bytes()[..len]);
}

/// Draw the visible slice of `row`, switching colour only when the
/// highlight class changes.
fn draw_text_row(row: &Row, col_offset: usize, cols: usize, out: &mut Vec<u8>) {
    let rendered = row.rendered();
    let start = col_offset.min(rendered.len());
    let end = col_offset.saturating_add(cols).min(rendered.len());
    let mut current: Option<u8> = None;

    for (i, &byte) in rendered[start..end].iter().enumerate() {
        if byte.is_ascii_control() {
            let symbol = if byte <= 26 { b'@' + byte } else { b'?' };
            out.extend_from_slice(INVERT);
            out.push(symbol);
            out.extend_from_slice(RESET);
            if let Some(code) = current {
                style::push_color(out, code);
            }
            continue;
        }

        let class = row.highlight().get(start + i).copied().unwrap_or_default();
        match style::color_code(class) {
            None => {
                if current.take().is_some() {
                    out.extend_from_slice(DEFAULT_FG);
                }
            }
            Some(code) if current != Some(code) => {
                current = Some(code);
                style::push_color(out, code);
            }
            Some(_) => {}
        }
        out.push(byte);
    }
    out.extend_from_slice(DEFAULT_FG);
}
