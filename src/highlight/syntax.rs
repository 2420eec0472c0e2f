//! Built-in syntax profiles and filename matching.

use std::path::Path;

/// Which optional token classes a profile colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyntaxFlags {
    pub numbers: bool,
    pub strings: bool,
}

/// Static description of one language's lexical surface.
///
/// Keywords ending in `|` belong to the second keyword class (types, in the
/// built-in profiles); the trailing `|` is not part of the matched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxProfile {
    /// Name shown in the status bar.
    pub name: &'static str,
    /// Entries starting with `.` match the file extension, anything else is
    /// matched as a substring of the filename.
    pub file_match: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub single_line_comment: Option<&'static str>,
    pub multiline_comment: Option<(&'static str, &'static str)>,
    pub flags: SyntaxFlags,
}

const C_KEYWORDS: &[&str] = &[
    "switch", "if", "while", "for", "break", "continue", "return", "else", "struct", "union",
    "typedef", "static", "enum", "class", "case", "int|", "long|", "double|", "float|", "char|",
    "unsigned|", "signed|", "void|",
];

const RUST_KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "fn", "for", "if",
    "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return", "self",
    "static", "struct", "trait", "type", "unsafe", "use", "where", "while", "bool|", "char|",
    "str|", "u8|", "u16|", "u32|", "u64|", "usize|", "i8|", "i16|", "i32|", "i64|", "isize|",
    "f32|", "f64|", "String|", "Vec|", "Option|", "Result|", "Self|",
];

/// Every profile quill knows about, in match priority order.
pub static SYNTAXES: &[SyntaxProfile] = &[
    SyntaxProfile {
        name: "c",
        file_match: &[".c", ".h", ".cpp"],
        keywords: C_KEYWORDS,
        single_line_comment: Some("//"),
        multiline_comment: Some(("/*", "*/")),
        flags: SyntaxFlags {
            numbers: true,
            strings: true,
        },
    },
    SyntaxProfile {
        name: "rust",
        file_match: &[".rs"],
        keywords: RUST_KEYWORDS,
        single_line_comment: Some("//"),
        multiline_comment: Some(("/*", "*/")),
        flags: SyntaxFlags {
            numbers: true,
            strings: true,
        },
    },
];

impl SyntaxProfile {
    /// Whether this profile claims the given filename.
    pub fn matches(&self, filename: &str) -> bool {
        let ext = filename.rfind('.').map(|i| &filename[i..]);
        self.file_match.iter().any(|pattern| {
            if pattern.starts_with('.') {
                ext == Some(*pattern)
            } else {
                filename.contains(pattern)
            }
        })
    }
}

/// Pick the first built-in profile that matches `path`.
pub fn syntax_for_file(path: &Path) -> Option<&'static SyntaxProfile> {
    let filename = path.to_string_lossy();
    SYNTAXES.iter().find(|syntax| syntax.matches(&filename))
}
