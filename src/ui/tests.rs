use std::time::{Duration, Instant};

use super::*;
use crate::app::{Model, Prompt, PromptKind};
use crate::config::EditorSettings;
use crate::editor::{Cursor, Document, TAB_STOP};

fn model(lines: &[&str], rows: usize, cols: usize) -> Model {
    let doc = Document::from_lines(lines.iter().map(|l| l.as_bytes()), TAB_STOP);
    Model::new(doc, (rows, cols), EditorSettings::default())
}

fn c_model(lines: &[&str], rows: usize, cols: usize) -> Model {
    let mut m = model(lines, rows, cols);
    m.document.set_filename("hello.c");
    m.document.select_syntax();
    m
}

/// Frame split at `\r\n`; the last element holds the message bar and
/// trailing cursor commands.
fn lines(frame: &[u8]) -> Vec<Vec<u8>> {
    let mut out = Vec::new();
    let mut rest = frame;
    while let Some(pos) = rest.windows(2).position(|w| w == b"\r\n") {
        out.push(rest[..pos].to_vec());
        rest = &rest[pos + 2..];
    }
    out.push(rest.to_vec());
    out
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn test_frame_starts_hidden_and_homed_and_ends_shown() {
    let m = model(&["abc"], 6, 20);
    let frame = render(&m, Instant::now());
    assert!(frame.starts_with(b"\x1b[?25l\x1b[H"));
    assert!(frame.ends_with(b"\x1b[1;1H\x1b[?25h"));
}

#[test]
fn test_frame_has_text_rows_plus_two_bars() {
    let m = model(&["abc"], 6, 20);
    let frame = render(&m, Instant::now());
    // 4 text rows and the status bar are each terminated by \r\n.
    assert_eq!(lines(&frame).len(), 6);
}

#[test]
fn test_empty_document_shows_filler_and_welcome() {
    let m = model(&[], 6, 80);
    let frame = render(&m, Instant::now());
    let rows = lines(&frame);
    assert!(rows[0].ends_with(b"~\x1b[K"));
    assert!(rows[1].starts_with(b"~ "));
    assert!(contains(&rows[1], WELCOME.as_bytes()));
    assert_eq!(rows[2], b"~\x1b[K");
}

#[test]
fn test_welcome_is_cut_to_narrow_screens() {
    let m = model(&[], 6, 10);
    let frame = render(&m, Instant::now());
    let rows = lines(&frame);
    let mut expected = WELCOME.as_bytes()[..10].to_vec();
    expected.extend_from_slice(b"\x1b[K");
    assert_eq!(rows[1], expected);
}

#[test]
fn test_non_empty_document_has_no_welcome() {
    let m = model(&["x"], 6, 80);
    let frame = render(&m, Instant::now());
    assert!(!contains(&frame, WELCOME.as_bytes()));
}

#[test]
fn test_rows_are_clipped_to_width() {
    let m = model(&["abcdefghij"], 6, 5);
    let frame = render(&m, Instant::now());
    assert!(contains(&frame, b"abcde\x1b[39m\x1b[K"));
    assert!(!contains(&frame, b"abcdef"));
}

#[test]
fn test_column_offset_shifts_slice() {
    let mut m = model(&["abcdefghij"], 6, 5);
    m.viewport.set_offsets(0, 3);
    let frame = render(&m, Instant::now());
    assert!(contains(&frame, b"defgh\x1b[39m\x1b[K"));
}

#[test]
fn test_control_bytes_render_inverted() {
    let m = model(&["a\x01b\x7f"], 6, 20);
    let frame = render(&m, Instant::now());
    assert!(contains(&frame, b"a\x1b[7mA\x1b[mb\x1b[7m?\x1b[m\x1b[39m"));
}

#[test]
fn test_colours_emitted_only_on_change() {
    let m = c_model(&["int x = 42;"], 6, 40);
    let frame = render(&m, Instant::now());
    assert!(contains(
        &frame,
        b"\x1b[32mint\x1b[39m x = \x1b[31m42\x1b[39m;\x1b[39m\x1b[K"
    ));
}

#[test]
fn test_control_byte_restores_current_colour() {
    let m = c_model(&["// a\x01b"], 6, 40);
    let frame = render(&m, Instant::now());
    assert!(contains(&frame, b"\x1b[36m// a\x1b[7mA\x1b[m\x1b[36mb"));
}

#[test]
fn test_status_bar_layout() {
    let mut m = c_model(&["one", "two"], 6, 40);
    m.document.insert_char(0, 0, b'x');
    let frame = render(&m, Instant::now());
    let rows = lines(&frame);
    let expected = b"\x1b[7mhello.c - 2 lines (modified)     c | 1/2\x1b[m";
    assert_eq!(rows[4], expected);
}

#[test]
fn test_status_bar_placeholders() {
    let m = model(&[], 6, 40);
    let frame = render(&m, Instant::now());
    let rows = lines(&frame);
    assert!(rows[4].starts_with(b"\x1b[7m[No Name] - 0 lines "));
    assert!(rows[4].ends_with(b"no ft | 1/0\x1b[m"));
}

#[test]
fn test_status_bar_truncates_long_names() {
    let mut m = model(&["x"], 6, 80);
    m.document.set_filename("abcdefghijklmnopqrstuvwxyz.txt");
    let frame = render(&m, Instant::now());
    let rows = lines(&frame);
    assert!(rows[4].starts_with(b"\x1b[7mabcdefghijklmnopqrst - 1 lines"));
}

#[test]
fn test_fresh_message_is_shown() {
    let mut m = model(&["x"], 6, 40);
    m.set_status("hello there");
    let frame = render(&m, Instant::now());
    let rows = lines(&frame);
    assert!(rows[5].starts_with(b"\x1b[Khello there"));
}

#[test]
fn test_stale_message_is_hidden() {
    let mut m = model(&["x"], 6, 40);
    m.set_status("hello there");
    let later = Instant::now() + Duration::from_secs(6);
    let frame = render(&m, later);
    assert!(!contains(&frame, b"hello there"));
}

#[test]
fn test_message_is_cut_to_width() {
    let mut m = model(&["x"], 6, 5);
    m.set_status("hello there");
    let frame = render(&m, Instant::now());
    let rows = lines(&frame);
    assert!(rows[5].starts_with(b"\x1b[Khello\x1b["));
}

#[test]
fn test_open_prompt_replaces_message() {
    let mut m = model(&["x"], 6, 80);
    m.set_status("ignored");
    let mut prompt = Prompt::new(PromptKind::SaveAs);
    prompt.input.push_str("out.c");
    m.prompt = Some(prompt);
    let frame = render(&m, Instant::now());
    assert!(contains(&frame, b"\x1b[KSave as: out.c (ESC to cancel)"));
    assert!(!contains(&frame, b"ignored"));
}

#[test]
fn test_cursor_uses_render_column() {
    let mut m = model(&["\tx"], 6, 40);
    m.cursor = Cursor::at(0, 1);
    let frame = render(&m, Instant::now());
    assert!(frame.ends_with(b"\x1b[1;9H\x1b[?25h"));
}

#[test]
fn test_cursor_is_relative_to_offsets() {
    let lines: Vec<String> = (0..50).map(|i| format!("line {i}")).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let mut m = model(&refs, 12, 40);
    m.cursor = Cursor::at(30, 2);
    m.scroll();
    let frame = render(&m, Instant::now());
    assert_eq!(m.viewport.row_offset(), 21);
    assert!(frame.ends_with(b"\x1b[10;3H\x1b[?25h"));
    assert!(contains(&frame, b"line 21"));
    assert!(!contains(&frame, b"line 20\x1b"));
}
