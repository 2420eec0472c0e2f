//! Viewport management for scrolling.
//!
//! The [`Viewport`] struct tracks the text area of the terminal and the
//! top-left document cell shown in it.

use std::ops::Range;

/// Manages the visible portion of a document.
///
/// The viewport tracks:
/// - Text area dimensions (rows, columns)
/// - Row and column offsets of the top-left visible cell
///
/// Offsets follow the cursor: [`Viewport::scroll_to`] moves them just
/// enough to keep the cursor inside the text area.
///
/// # Example
///
/// ```
/// use quill::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(10, 80);
/// vp.scroll_to(25, 0);
/// assert_eq!(vp.row_offset(), 16);
/// assert_eq!(vp.visible_rows(100), 16..26);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    screen_rows: usize,
    screen_cols: usize,
    row_offset: usize,
    col_offset: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(24, 80)
    }
}

impl Viewport {
    /// Create a viewport for a text area of the given size.
    ///
    /// # Arguments
    ///
    /// * `screen_rows` - Lines available for document text
    /// * `screen_cols` - Terminal width in columns
    pub const fn new(screen_rows: usize, screen_cols: usize) -> Self {
        Self {
            screen_rows,
            screen_cols,
            row_offset: 0,
            col_offset: 0,
        }
    }

    pub const fn row_offset(&self) -> usize {
        self.row_offset
    }

    pub const fn col_offset(&self) -> usize {
        self.col_offset
    }

    /// Lines available for document text.
    pub const fn screen_rows(&self) -> usize {
        self.screen_rows
    }

    pub const fn screen_cols(&self) -> usize {
        self.screen_cols
    }

    /// Document rows that fall inside the text area.
    pub fn visible_rows(&self, total_rows: usize) -> Range<usize> {
        let start = self.row_offset.min(total_rows);
        let end = (self.row_offset + self.screen_rows).min(total_rows);
        start..end
    }

    /// Move the offsets just enough to show `(row, render_col)`.
    pub fn scroll_to(&mut self, row: usize, render_col: usize) {
        if row < self.row_offset {
            self.row_offset = row;
        }
        if row >= self.row_offset + self.screen_rows {
            self.row_offset = (row + 1).saturating_sub(self.screen_rows);
        }
        if render_col < self.col_offset {
            self.col_offset = render_col;
        }
        if render_col >= self.col_offset + self.screen_cols {
            self.col_offset = (render_col + 1).saturating_sub(self.screen_cols);
        }
    }

    /// Push the row offset past `row`, so the next scroll puts `row` on top.
    pub const fn reveal_on_next_scroll(&mut self, row: usize) {
        self.row_offset = row;
    }

    /// Restore offsets saved from an earlier state.
    pub const fn set_offsets(&mut self, row_offset: usize, col_offset: usize) {
        self.row_offset = row_offset;
        self.col_offset = col_offset;
    }

    /// Resize the text area.
    pub const fn resize(&mut self, screen_rows: usize, screen_cols: usize) {
        self.screen_rows = screen_rows;
        self.screen_cols = screen_cols;
    }
}
