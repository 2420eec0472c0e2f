use crate::app::{Message, Model};
use crate::editor::Direction;
use crate::input::Key;

const QUIT: Key = Key::ctrl(b'q');
const SAVE: Key = Key::ctrl(b's');
const FIND: Key = Key::ctrl(b'f');
const REFRESH: Key = Key::ctrl(b'l');
const CTRL_H: Key = Key::ctrl(b'h');

/// Map a decoded key to the message it triggers.
///
/// While a prompt is open every key belongs to it. Bytes without a
/// binding, control bytes included, are inserted as text.
pub(super) fn handle_key(key: Key, model: &Model) -> Option<Message> {
    if model.prompt.is_some() {
        return Some(Message::PromptKey(key));
    }

    let msg = match key {
        Key::ENTER => Message::InsertNewline,
        QUIT => Message::Quit,
        SAVE => Message::Save,
        FIND => Message::StartSearch,
        REFRESH | Key::Escape => Message::Redraw,
        Key::BACKSPACE | CTRL_H => Message::DeleteBack,
        Key::Delete => Message::DeleteForward,
        Key::Home => Message::MoveHome,
        Key::End => Message::MoveEnd,
        Key::PageUp => Message::PageUp,
        Key::PageDown => Message::PageDown,
        Key::Up => Message::MoveCursor(Direction::Up),
        Key::Down => Message::MoveCursor(Direction::Down),
        Key::Left => Message::MoveCursor(Direction::Left),
        Key::Right => Message::MoveCursor(Direction::Right),
        Key::Byte(byte) => Message::InsertByte(byte),
    };
    Some(msg)
}
