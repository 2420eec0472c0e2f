//! Terminal input decoding.
//!
//! Raw-mode terminals deliver special keys as escape sequences. This
//! module reads bytes from a [`ByteSource`] and turns them into one
//! [`Key`] at a time. A lone escape byte is told apart from the start of a
//! sequence by waiting briefly for the bytes that would follow it.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// How long to wait for the rest of an escape sequence.
pub const ESCAPE_TIMEOUT: Duration = Duration::from_millis(100);

const ESC: u8 = 0x1b;

/// One logical keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Any byte that is not part of an escape sequence, control bytes included.
    Byte(u8),
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Delete,
    PageUp,
    PageDown,
}

impl Key {
    pub const ENTER: Self = Self::Byte(b'\r');
    pub const BACKSPACE: Self = Self::Byte(0x7f);

    /// The key produced by holding Ctrl with `letter`.
    pub const fn ctrl(letter: u8) -> Self {
        Self::Byte(ctrl(letter))
    }
}

/// Control code for `letter` (`ctrl(b'q') == 0x11`).
pub const fn ctrl(letter: u8) -> u8 {
    letter & 0x1f
}

/// Something that yields terminal bytes.
pub trait ByteSource {
    /// Read one byte, waiting at most `timeout`.
    ///
    /// Returns `Ok(None)` when nothing arrived in time.
    fn read_byte(&mut self, timeout: Duration) -> io::Result<Option<u8>>;
}

/// Scripted input, used by tests and replayed terminal replies.
impl ByteSource for VecDeque<u8> {
    fn read_byte(&mut self, _timeout: Duration) -> io::Result<Option<u8>> {
        Ok(self.pop_front())
    }
}

/// Decode the next key, waiting up to `timeout` for its first byte.
///
/// Returns `Ok(None)` if no key arrived. Malformed or truncated escape
/// sequences decode to [`Key::Escape`].
pub fn next_key<S: ByteSource + ?Sized>(source: &mut S, timeout: Duration) -> io::Result<Option<Key>> {
    let Some(first) = source.read_byte(timeout)? else {
        return Ok(None);
    };
    if first != ESC {
        return Ok(Some(Key::Byte(first)));
    }
    decode_escape(source).map(Some)
}

fn decode_escape<S: ByteSource + ?Sized>(source: &mut S) -> io::Result<Key> {
    let Some(kind) = source.read_byte(ESCAPE_TIMEOUT)? else {
        return Ok(Key::Escape);
    };
    let Some(code) = source.read_byte(ESCAPE_TIMEOUT)? else {
        return Ok(Key::Escape);
    };

    let key = match (kind, code) {
        (b'[', b'0'..=b'9') => match source.read_byte(ESCAPE_TIMEOUT)? {
            Some(b'~') => numbered_key(code),
            _ => None,
        },
        (b'[', letter) => match letter {
            b'A' => Some(Key::Up),
            b'B' => Some(Key::Down),
            b'C' => Some(Key::Right),
            b'D' => Some(Key::Left),
            b'H' => Some(Key::Home),
            b'F' => Some(Key::End),
            _ => None,
        },
        (b'O', b'H') => Some(Key::Home),
        (b'O', b'F') => Some(Key::End),
        _ => None,
    };
    Ok(key.unwrap_or(Key::Escape))
}

const fn numbered_key(digit: u8) -> Option<Key> {
    match digit {
        b'1' | b'7' => Some(Key::Home),
        b'3' => Some(Key::Delete),
        b'4' | b'8' => Some(Key::End),
        b'5' => Some(Key::PageUp),
        b'6' => Some(Key::PageDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(bytes: &[u8]) -> Vec<Key> {
        let mut source: VecDeque<u8> = bytes.iter().copied().collect();
        let mut keys = Vec::new();
        while let Some(key) = next_key(&mut source, Duration::ZERO).unwrap() {
            keys.push(key);
        }
        keys
    }

    #[test]
    fn test_plain_bytes_are_literal() {
        assert_eq!(decode(b"a\r"), vec![Key::Byte(b'a'), Key::ENTER]);
    }

    #[test]
    fn test_control_bytes_are_literal() {
        assert_eq!(decode(&[0x11, 0x7f]), vec![Key::ctrl(b'q'), Key::BACKSPACE]);
    }

    #[test]
    fn test_empty_source_yields_nothing() {
        assert!(decode(b"").is_empty());
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            decode(b"\x1b[A\x1b[B\x1b[C\x1b[D"),
            vec![Key::Up, Key::Down, Key::Right, Key::Left]
        );
    }

    #[test]
    fn test_home_end_letter_forms() {
        assert_eq!(
            decode(b"\x1b[H\x1b[F\x1bOH\x1bOF"),
            vec![Key::Home, Key::End, Key::Home, Key::End]
        );
    }

    #[test]
    fn test_numbered_keys() {
        assert_eq!(
            decode(b"\x1b[1~\x1b[7~\x1b[3~\x1b[4~\x1b[8~\x1b[5~\x1b[6~"),
            vec![
                Key::Home,
                Key::Home,
                Key::Delete,
                Key::End,
                Key::End,
                Key::PageUp,
                Key::PageDown
            ]
        );
    }

    #[test]
    fn test_lone_escape() {
        assert_eq!(decode(b"\x1b"), vec![Key::Escape]);
    }

    #[test]
    fn test_truncated_sequence_is_escape() {
        assert_eq!(decode(b"\x1b["), vec![Key::Escape]);
        assert_eq!(decode(b"\x1b[5"), vec![Key::Escape]);
    }

    #[test]
    fn test_unknown_sequences_are_escape() {
        assert_eq!(decode(b"\x1b[Z"), vec![Key::Escape]);
        assert_eq!(decode(b"\x1bOA"), vec![Key::Escape]);
        assert_eq!(decode(b"\x1b[9~"), vec![Key::Escape]);
    }

    #[test]
    fn test_numbered_key_without_tilde_consumes_byte() {
        assert_eq!(decode(b"\x1b[5xq"), vec![Key::Escape, Key::Byte(b'q')]);
    }

    #[test]
    fn test_escape_followed_by_text() {
        assert_eq!(decode(b"\x1bxyz"), vec![Key::Escape, Key::Byte(b'z')]);
    }

    #[test]
    fn test_ctrl_masks_letter() {
        assert_eq!(ctrl(b'q'), 0x11);
        assert_eq!(ctrl(b's'), 0x13);
        assert_eq!(ctrl(b'h'), 0x08);
    }
}
