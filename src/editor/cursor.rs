use super::Document;

/// Cursor position in buffer coordinates.
///
/// `row` may equal the row count: that is the empty line past the end of
/// the document, where typing starts a new row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    /// Byte offset within the row.
    pub col: usize,
}

/// Direction for single-step cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Cursor {
    /// Create a cursor at a specific position.
    pub const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Move one step, wrapping across line ends, then clamp the column.
    pub fn step(&mut self, doc: &Document, direction: Direction) {
        let on_row = self.row < doc.num_rows();
        match direction {
            Direction::Left => {
                if self.col > 0 {
                    self.col -= 1;
                } else if self.row > 0 {
                    self.row -= 1;
                    self.col = doc.row_len(self.row);
                }
            }
            Direction::Right => {
                if on_row {
                    if self.col < doc.row_len(self.row) {
                        self.col += 1;
                    } else {
                        self.row += 1;
                        self.col = 0;
                    }
                }
            }
            Direction::Up => self.row = self.row.saturating_sub(1),
            Direction::Down => {
                if self.row < doc.num_rows() {
                    self.row += 1;
                }
            }
        }
        self.clamp_to(doc);
    }

    /// Move to column 0.
    pub const fn home(&mut self) {
        self.col = 0;
    }

    /// Move to the end of the current row.
    pub fn end(&mut self, doc: &Document) {
        self.col = doc.row_len(self.row);
    }

    /// Pull the cursor back inside the document.
    pub fn clamp_to(&mut self, doc: &Document) {
        self.row = self.row.min(doc.num_rows());
        self.col = self.col.min(doc.row_len(self.row));
    }

    /// Display column of the cursor (0 on the line past the end).
    pub fn render_col(&self, doc: &Document) -> usize {
        doc.render_col(self.row, self.col)
    }
}
