//! Syntax highlighting for editor rows.
//!
//! Classification is a single left-to-right pass over a row's rendered
//! bytes. The only state that crosses row boundaries is whether a
//! multi-line comment is still open at the end of the row; the caller
//! ([`crate::editor::Document`]) feeds that flag into the next row and
//! re-runs the pass when it changes.

mod syntax;

pub use syntax::{SYNTAXES, SyntaxFlags, SyntaxProfile, syntax_for_file};

/// Highlight class of one rendered byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Highlight {
    #[default]
    Normal,
    Comment,
    MultilineComment,
    Keyword1,
    Keyword2,
    String,
    Number,
    /// Search hit overlay, only ever applied temporarily.
    Match,
}

const SEPARATORS: &[u8] = b",.()+-/*=~%<>[];";

/// Whether `c` ends a token for number and keyword detection.
pub fn is_separator(c: u8) -> bool {
    c.is_ascii_whitespace() || c == b'\0' || c == b'\x0b' || SEPARATORS.contains(&c)
}

/// Classify `rendered` into `out`, returning whether a multi-line comment is
/// still open at the end of the row.
///
/// `out` is resized to `rendered.len()`. Without a profile every byte is
/// [`Highlight::Normal`] and no comment is ever left open.
pub fn highlight_row(
    rendered: &[u8],
    carried_in: bool,
    syntax: Option<&SyntaxProfile>,
    out: &mut Vec<Highlight>,
) -> bool {
    out.clear();
    out.resize(rendered.len(), Highlight::Normal);

    let Some(syntax) = syntax else {
        return false;
    };

    let single_line = syntax
        .single_line_comment
        .map(str::as_bytes)
        .filter(|marker| !marker.is_empty());
    let multiline = syntax
        .multiline_comment
        .map(|(start, end)| (start.as_bytes(), end.as_bytes()))
        .filter(|(start, end)| !start.is_empty() && !end.is_empty());

    let mut prev_sep = true;
    let mut in_string: Option<u8> = None;
    let mut in_comment = carried_in;

    let mut i = 0;
    while i < rendered.len() {
        let c = rendered[i];
        let rest = &rendered[i..];
        let prev_hl = if i > 0 { out[i - 1] } else { Highlight::Normal };

        if in_string.is_none() && !in_comment && single_line.is_some_and(|m| rest.starts_with(m))
        {
            out[i..].fill(Highlight::Comment);
            break;
        }

        if let Some((start, end)) = multiline
            && in_string.is_none()
        {
            if in_comment {
                out[i] = Highlight::MultilineComment;
                if rest.starts_with(end) {
                    out[i..i + end.len()].fill(Highlight::MultilineComment);
                    i += end.len();
                    in_comment = false;
                    prev_sep = true;
                } else {
                    i += 1;
                }
                continue;
            } else if rest.starts_with(start) {
                out[i..i + start.len()].fill(Highlight::MultilineComment);
                i += start.len();
                in_comment = true;
                continue;
            }
        }

        if syntax.flags.strings {
            if let Some(quote) = in_string {
                out[i] = Highlight::String;
                if c == b'\\' && i + 1 < rendered.len() {
                    out[i + 1] = Highlight::String;
                    i += 2;
                    continue;
                }
                if c == quote {
                    in_string = None;
                }
                i += 1;
                prev_sep = true;
                continue;
            } else if c == b'"' || c == b'\'' {
                in_string = Some(c);
                out[i] = Highlight::String;
                i += 1;
                continue;
            }
        }

        if syntax.flags.numbers
            && ((c.is_ascii_digit() && (prev_sep || prev_hl == Highlight::Number))
                || (c == b'.' && prev_hl == Highlight::Number))
        {
            out[i] = Highlight::Number;
            i += 1;
            prev_sep = false;
            continue;
        }

        // Only the byte after a keyword is checked; the byte before it is
        // covered by `prev_sep` alone.
        if prev_sep && let Some((len, class)) = match_keyword(syntax.keywords, rest) {
            out[i..i + len].fill(class);
            i += len;
            prev_sep = false;
            continue;
        }

        prev_sep = is_separator(c);
        i += 1;
    }

    in_comment
}

fn match_keyword(keywords: &[&str], rest: &[u8]) -> Option<(usize, Highlight)> {
    keywords.iter().find_map(|keyword| {
        let (text, class) = match keyword.strip_suffix('|') {
            Some(text) => (text, Highlight::Keyword2),
            None => (*keyword, Highlight::Keyword1),
        };
        let text = text.as_bytes();
        let boundary = rest.get(text.len()).copied().unwrap_or(b'\0');
        (!text.is_empty() && rest.starts_with(text) && is_separator(boundary))
            .then_some((text.len(), class))
    })
}
