use std::path::{Path, PathBuf};

use tracing::debug;

use crate::highlight::{Highlight, SyntaxProfile, syntax_for_file};

use super::row::{Row, TAB_STOP};

/// The text being edited: an ordered list of rows plus file metadata.
///
/// All row mutation goes through `Document` so that rendering,
/// highlighting, index numbering and the dirty counter stay consistent.
#[derive(Debug, Clone)]
pub struct Document {
    rows: Vec<Row>,
    dirty: usize,
    filename: Option<PathBuf>,
    syntax: Option<&'static SyntaxProfile>,
    tab_stop: usize,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(TAB_STOP)
    }
}

impl Document {
    /// Create an empty document.
    pub fn new(tab_stop: usize) -> Self {
        Self {
            rows: Vec::new(),
            dirty: 0,
            filename: None,
            syntax: None,
            tab_stop: tab_stop.max(1),
        }
    }

    /// Create a clean document from already-split lines.
    pub fn from_lines<I, L>(lines: I, tab_stop: usize) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        let mut doc = Self::new(tab_stop);
        let tab_stop = doc.tab_stop;
        doc.rows = lines
            .into_iter()
            .enumerate()
            .map(|(index, line)| Row::new(index, line.into(), tab_stop))
            .collect();
        doc.refresh_syntax(0, doc.rows.len());
        doc
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of unsaved mutations.
    pub const fn dirty(&self) -> usize {
        self.dirty
    }

    pub const fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    /// Reset the dirty counter after the contents were persisted.
    pub const fn mark_clean(&mut self) {
        self.dirty = 0;
    }

    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    pub fn set_filename(&mut self, path: impl Into<PathBuf>) {
        self.filename = Some(path.into());
    }

    pub const fn syntax(&self) -> Option<&'static SyntaxProfile> {
        self.syntax
    }

    pub const fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    /// Choose a syntax profile from the filename and re-highlight every row.
    pub fn select_syntax(&mut self) {
        self.syntax = self.filename.as_deref().and_then(syntax_for_file);
        debug!(
            syntax = self.syntax.map_or("none", |s| s.name),
            "selected syntax profile"
        );
        self.refresh_syntax(0, self.rows.len());
    }

    /// Length in bytes of a row, 0 for rows past the end.
    pub fn row_len(&self, index: usize) -> usize {
        self.rows.get(index).map_or(0, Row::len)
    }

    /// Display column of buffer column `col` on row `index`.
    pub fn render_col(&self, index: usize, col: usize) -> usize {
        self.rows
            .get(index)
            .map_or(0, |row| row.render_col(col, self.tab_stop))
    }

    /// Buffer column displayed at `render_col` on row `index`.
    pub fn buffer_col(&self, index: usize, render_col: usize) -> usize {
        self.rows
            .get(index)
            .map_or(0, |row| row.buffer_col(render_col, self.tab_stop))
    }

    /// Insert a new row at `at` (clamped to the row count).
    pub fn insert_row(&mut self, at: usize, text: &[u8]) {
        let at = self.insert_row_unhighlighted(at, text.to_vec());
        // The new row and the row it pushed down both see a new carried-in flag.
        self.refresh_syntax(at, 2);
        self.dirty += 1;
    }

    /// Remove row `at`; out-of-range indices are ignored.
    pub fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }
        self.rows.remove(at);
        self.renumber_from(at);
        self.refresh_syntax(at, 1);
        self.dirty += 1;
    }

    /// Split row `index` at `col`, moving the tail into a new following row.
    pub fn split_row(&mut self, index: usize, col: usize) {
        let Some(row) = self.rows.get_mut(index) else {
            return;
        };
        let col = col.min(row.len());
        let tail = row.raw_mut().split_off(col);
        row.render(self.tab_stop);
        self.insert_row_unhighlighted(index + 1, tail);
        self.refresh_syntax(index, 3);
        self.dirty += 1;
    }

    /// Append `text` to the end of row `index`.
    pub fn append_to_row(&mut self, index: usize, text: &[u8]) {
        let Some(row) = self.rows.get_mut(index) else {
            return;
        };
        row.raw_mut().extend_from_slice(text);
        self.row_changed(index);
    }

    /// Insert `ch` before column `col` of row `index` (clamped to the row end).
    pub fn insert_char(&mut self, index: usize, col: usize, ch: u8) {
        let Some(row) = self.rows.get_mut(index) else {
            return;
        };
        let col = col.min(row.len());
        row.raw_mut().insert(col, ch);
        self.row_changed(index);
    }

    /// Delete the byte at column `col` of row `index`.
    pub fn delete_char(&mut self, index: usize, col: usize) {
        let Some(row) = self.rows.get_mut(index) else {
            return;
        };
        if col >= row.len() {
            return;
        }
        row.raw_mut().remove(col);
        self.row_changed(index);
    }

    /// All rows joined with a trailing `\n` after each.
    pub fn to_bytes(&self) -> Vec<u8> {
        let len = self.rows.iter().map(|r| r.len() + 1).sum();
        let mut out = Vec::with_capacity(len);
        for row in &self.rows {
            out.extend_from_slice(row.raw());
            out.push(b'\n');
        }
        out
    }

    /// Paint `len` rendered bytes of row `index` starting at `start` with `class`.
    pub fn overlay_highlight(&mut self, index: usize, start: usize, len: usize, class: Highlight) {
        if let Some(row) = self.rows.get_mut(index) {
            let hl = row.highlight_mut();
            let start = start.min(hl.len());
            let end = start.saturating_add(len).min(hl.len());
            hl[start..end].fill(class);
        }
    }

    /// Put back a highlight sequence previously copied from row `index`.
    ///
    /// Ignored if the row has since changed length.
    pub fn restore_highlight(&mut self, index: usize, highlight: Vec<Highlight>) {
        if let Some(row) = self.rows.get_mut(index) {
            row.replace_highlight(highlight);
        }
    }

    fn insert_row_unhighlighted(&mut self, at: usize, raw: Vec<u8>) -> usize {
        let at = at.min(self.rows.len());
        self.rows.insert(at, Row::new(at, raw, self.tab_stop));
        self.renumber_from(at + 1);
        at
    }

    fn row_changed(&mut self, index: usize) {
        if let Some(row) = self.rows.get_mut(index) {
            row.render(self.tab_stop);
        }
        self.refresh_syntax(index, 1);
        self.dirty += 1;
    }

    fn renumber_from(&mut self, start: usize) {
        for (index, row) in self.rows.iter_mut().enumerate().skip(start) {
            row.set_index(index);
        }
    }

    /// Re-highlight rows from `start`.
    ///
    /// The first `min_rows` rows are always redone (their input or content
    /// changed); after that the walk continues only while a row's
    /// open-comment flag keeps changing, so it visits each row at most once.
    fn refresh_syntax(&mut self, start: usize, min_rows: usize) {
        let forced_end = start.saturating_add(min_rows);
        let mut index = start;
        while index < self.rows.len() {
            let carried_in = index
                .checked_sub(1)
                .and_then(|prev| self.rows.get(prev))
                .is_some_and(Row::opens_unclosed_comment);
            let changed = self.rows[index].apply_syntax(carried_in, self.syntax);
            index += 1;
            if !changed && index >= forced_end {
                break;
            }
        }
    }
}
