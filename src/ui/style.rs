//! Escape sequences and highlight colours.

use crate::highlight::Highlight;

pub const CLEAR_SCREEN: &[u8] = b"\x1b[2J";
pub const CURSOR_HOME: &[u8] = b"\x1b[H";
pub const HIDE_CURSOR: &[u8] = b"\x1b[?25l";
pub const SHOW_CURSOR: &[u8] = b"\x1b[?25h";
pub const ERASE_LINE: &[u8] = b"\x1b[K";
pub const INVERT: &[u8] = b"\x1b[7m";
/// Resets every attribute, colour included.
pub const RESET: &[u8] = b"\x1b[m";
pub const DEFAULT_FG: &[u8] = b"\x1b[39m";

/// SGR foreground code for a highlight class; `None` means the default colour.
pub const fn color_code(highlight: Highlight) -> Option<u8> {
    match highlight {
        Highlight::Normal => None,
        Highlight::Comment | Highlight::MultilineComment => Some(36),
        Highlight::Keyword1 => Some(33),
        Highlight::Keyword2 => Some(32),
        Highlight::String => Some(35),
        Highlight::Number => Some(31),
        Highlight::Match => Some(34),
    }
}

/// Append `ESC [ code m`.
pub fn push_color(out: &mut Vec<u8>, code: u8) {
    out.extend_from_slice(format!("\x1b[{code}m").as_bytes());
}

/// Append a cursor move to 1-based `(row, col)`.
pub fn push_cursor_position(out: &mut Vec<u8>, row: usize, col: usize) {
    out.extend_from_slice(format!("\x1b[{row};{col}H").as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_classes_share_cyan() {
        assert_eq!(color_code(Highlight::Comment), Some(36));
        assert_eq!(color_code(Highlight::MultilineComment), Some(36));
    }

    #[test]
    fn test_normal_is_default_colour() {
        assert_eq!(color_code(Highlight::Normal), None);
    }

    #[test]
    fn test_color_codes_are_foreground_range() {
        for hl in [
            Highlight::Comment,
            Highlight::Keyword1,
            Highlight::Keyword2,
            Highlight::String,
            Highlight::Number,
            Highlight::Match,
        ] {
            let code = color_code(hl).unwrap();
            assert!((31..=37).contains(&code));
        }
    }

    #[test]
    fn test_push_helpers() {
        let mut out = Vec::new();
        push_color(&mut out, 31);
        push_cursor_position(&mut out, 3, 7);
        assert_eq!(out, b"\x1b[31m\x1b[3;7H");
    }
}
