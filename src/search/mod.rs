//! Incremental search.
//!
//! The search prompt calls [`SearchState::on_input`] after every edit with
//! the current query and the key that caused the edit. Arrow keys step to
//! the next or previous matching row, wrapping around the document; any
//! other key restarts the search from the top. The matched span is painted
//! with [`Highlight::Match`] until the next call restores the row.

use tracing::debug;

use crate::editor::Document;
use crate::highlight::Highlight;
use crate::input::Key;

/// Which way the next search step walks through the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchDirection {
    #[default]
    Forward,
    Backward,
}

/// A located match in buffer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    pub row: usize,
    /// Buffer column of the first matched byte.
    pub col: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    last_match: Option<usize>,
    direction: SearchDirection,
    saved_highlight: Option<(usize, Vec<Highlight>)>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn last_match(&self) -> Option<usize> {
        self.last_match
    }

    pub const fn direction(&self) -> SearchDirection {
        self.direction
    }

    /// React to one prompt update.
    ///
    /// Returns the new match, if any. `Enter` and `Escape` end the session:
    /// the overlay is removed and the state is reset without searching.
    pub fn on_input(&mut self, doc: &mut Document, query: &str, key: Key) -> Option<SearchHit> {
        self.restore(doc);

        match key {
            Key::ENTER | Key::Escape => {
                self.last_match = None;
                self.direction = SearchDirection::Forward;
                return None;
            }
            Key::Right | Key::Down => self.direction = SearchDirection::Forward,
            Key::Left | Key::Up => self.direction = SearchDirection::Backward,
            _ => {
                self.last_match = None;
                self.direction = SearchDirection::Forward;
            }
        }
        if self.last_match.is_none() {
            self.direction = SearchDirection::Forward;
        }

        let hit = self.find(doc, query.as_bytes())?;
        debug!(row = hit.row, col = hit.col, query, "search hit");
        Some(hit)
    }

    /// Put back the highlight of the last overlaid row, if any.
    pub fn restore(&mut self, doc: &mut Document) {
        if let Some((row, highlight)) = self.saved_highlight.take() {
            doc.restore_highlight(row, highlight);
        }
    }

    fn find(&mut self, doc: &mut Document, query: &[u8]) -> Option<SearchHit> {
        let num_rows = doc.num_rows();
        if query.is_empty() || num_rows == 0 {
            return None;
        }

        let mut current = self.last_match;
        for _ in 0..num_rows {
            let next = match (current, self.direction) {
                (None, _) => 0,
                (Some(row), SearchDirection::Forward) => (row + 1) % num_rows,
                (Some(row), SearchDirection::Backward) => {
                    row.checked_sub(1).unwrap_or(num_rows - 1)
                }
            };
            current = Some(next);

            let row = doc.row(next)?;
            let Some(offset) = find_bytes(row.rendered(), query) else {
                continue;
            };

            self.last_match = Some(next);
            let col = doc.buffer_col(next, offset);
            self.saved_highlight = Some((next, row.highlight().to_vec()));
            doc.overlay_highlight(next, offset, query.len(), Highlight::Match);
            return Some(SearchHit { row: next, col });
        }
        None
    }
}

fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::TAB_STOP;

    fn doc(lines: &[&str]) -> Document {
        Document::from_lines(lines.iter().map(|l| l.as_bytes()), TAB_STOP)
    }

    #[test]
    fn test_typing_finds_first_match_from_top() {
        let mut d = doc(&["xyz", "abc"]);
        let mut s = SearchState::new();
        let hit = s.on_input(&mut d, "abc", Key::Byte(b'c'));
        assert_eq!(hit, Some(SearchHit { row: 1, col: 0 }));
        assert_eq!(s.last_match(), Some(1));
    }

    #[test]
    fn test_forward_search_wraps() {
        let mut d = doc(&["abc", "xyz", "abc"]);
        let mut s = SearchState::new();
        assert_eq!(s.on_input(&mut d, "abc", Key::Byte(b'c')).unwrap().row, 0);
        assert_eq!(s.on_input(&mut d, "abc", Key::Right).unwrap().row, 2);
        assert_eq!(s.on_input(&mut d, "abc", Key::Down).unwrap().row, 0);
    }

    #[test]
    fn test_backward_search_wraps() {
        let mut d = doc(&["abc", "xyz", "abc"]);
        let mut s = SearchState::new();
        assert_eq!(s.on_input(&mut d, "abc", Key::Byte(b'c')).unwrap().row, 0);
        assert_eq!(s.on_input(&mut d, "abc", Key::Left).unwrap().row, 2);
        assert_eq!(s.direction(), SearchDirection::Backward);
        assert_eq!(s.on_input(&mut d, "abc", Key::Up).unwrap().row, 0);
    }

    #[test]
    fn test_single_match_wraps_onto_itself() {
        let mut d = doc(&["abc", "xyz"]);
        let mut s = SearchState::new();
        s.on_input(&mut d, "abc", Key::Byte(b'c'));
        assert_eq!(s.on_input(&mut d, "abc", Key::Right).unwrap().row, 0);
    }

    #[test]
    fn test_no_match_returns_none() {
        let mut d = doc(&["abc"]);
        let mut s = SearchState::new();
        assert_eq!(s.on_input(&mut d, "zzz", Key::Byte(b'z')), None);
        assert_eq!(s.last_match(), None);
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let mut d = doc(&["abc"]);
        let mut s = SearchState::new();
        assert_eq!(s.on_input(&mut d, "", Key::BACKSPACE), None);
    }

    #[test]
    fn test_match_is_overlaid_then_restored() {
        let mut d = doc(&["say abc"]);
        let mut s = SearchState::new();
        s.on_input(&mut d, "abc", Key::Byte(b'c'));
        assert_eq!(&d.row(0).unwrap().highlight()[4..], &[Highlight::Match; 3]);
        s.on_input(&mut d, "abc", Key::ENTER);
        assert!(d.row(0).unwrap().highlight().iter().all(|h| *h == Highlight::Normal));
    }

    #[test]
    fn test_match_after_tab_maps_to_buffer_column() {
        let mut d = doc(&["\tabc"]);
        let mut s = SearchState::new();
        let hit = s.on_input(&mut d, "abc", Key::Byte(b'c')).unwrap();
        assert_eq!(hit, SearchHit { row: 0, col: 1 });
        assert_eq!(&d.row(0).unwrap().highlight()[8..], &[Highlight::Match; 3]);
    }

    #[test]
    fn test_escape_resets_state() {
        let mut d = doc(&["abc"]);
        let mut s = SearchState::new();
        s.on_input(&mut d, "abc", Key::Byte(b'c'));
        s.on_input(&mut d, "abc", Key::Left);
        assert_eq!(s.on_input(&mut d, "abc", Key::Escape), None);
        assert_eq!(s, SearchState::new());
    }
}
