use crate::highlight::{Highlight, SyntaxProfile, highlight_row};

/// Default distance between tab stops.
pub const TAB_STOP: usize = 8;

/// One line of the document.
///
/// `rendered` is `raw` with tabs expanded, and `highlight` holds one class
/// per rendered byte. Both are rebuilt together whenever `raw` changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    index: usize,
    raw: Vec<u8>,
    rendered: Vec<u8>,
    highlight: Vec<Highlight>,
    opens_unclosed_comment: bool,
}

impl Row {
    pub(crate) fn new(index: usize, raw: Vec<u8>, tab_stop: usize) -> Self {
        let mut row = Self {
            index,
            raw,
            rendered: Vec::new(),
            highlight: Vec::new(),
            opens_unclosed_comment: false,
        };
        row.render(tab_stop);
        row
    }

    /// Position of this row in the document.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The editable bytes, without a line terminator.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Display bytes with tabs expanded.
    pub fn rendered(&self) -> &[u8] {
        &self.rendered
    }

    pub fn highlight(&self) -> &[Highlight] {
        &self.highlight
    }

    /// Whether a multi-line comment is still open at the end of this row.
    pub const fn opens_unclosed_comment(&self) -> bool {
        self.opens_unclosed_comment
    }

    /// Length of the raw bytes.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Convert a buffer column to the column it is displayed at.
    ///
    /// Columns past the end of the row are clamped to the row length.
    pub fn render_col(&self, col: usize, tab_stop: usize) -> usize {
        self.raw[..col.min(self.raw.len())]
            .iter()
            .fold(0, |rx, &b| advance(rx, b, tab_stop))
    }

    /// Convert a display column back to a buffer column.
    ///
    /// Returns the first buffer column whose display extent reaches past
    /// `render_col`, or the row length when the row is shorter.
    pub fn buffer_col(&self, render_col: usize, tab_stop: usize) -> usize {
        let mut rx = 0;
        for (col, &b) in self.raw.iter().enumerate() {
            rx = advance(rx, b, tab_stop);
            if rx > render_col {
                return col;
            }
        }
        self.raw.len()
    }

    pub(crate) const fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub(crate) const fn raw_mut(&mut self) -> &mut Vec<u8> {
        &mut self.raw
    }

    /// Rebuild `rendered` from `raw` and reset `highlight` to match it.
    pub(crate) fn render(&mut self, tab_stop: usize) {
        let tab_stop = tab_stop.max(1);
        self.rendered.clear();
        for &b in &self.raw {
            if b == b'\t' {
                self.rendered.push(b' ');
                while self.rendered.len() % tab_stop != 0 {
                    self.rendered.push(b' ');
                }
            } else {
                self.rendered.push(b);
            }
        }
        self.highlight.clear();
        self.highlight.resize(self.rendered.len(), Highlight::Normal);
    }

    /// Re-classify this row; returns `true` when its open-comment flag changed.
    pub(crate) fn apply_syntax(
        &mut self,
        carried_in: bool,
        syntax: Option<&SyntaxProfile>,
    ) -> bool {
        let open = highlight_row(&self.rendered, carried_in, syntax, &mut self.highlight);
        let changed = open != self.opens_unclosed_comment;
        self.opens_unclosed_comment = open;
        changed
    }

    pub(crate) fn highlight_mut(&mut self) -> &mut [Highlight] {
        &mut self.highlight
    }

    pub(crate) fn replace_highlight(&mut self, highlight: Vec<Highlight>) {
        if highlight.len() == self.rendered.len() {
            self.highlight = highlight;
        }
    }
}

fn advance(rx: usize, b: u8, tab_stop: usize) -> usize {
    if b == b'\t' {
        let tab_stop = tab_stop.max(1);
        rx + tab_stop - rx % tab_stop
    } else {
        rx + 1
    }
}
