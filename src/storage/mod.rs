//! Loading and saving documents.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

/// Read `path` as a list of lines with `\n` and `\r\n` endings removed.
///
/// A trailing newline does not produce an empty last line.
pub fn load_lines(path: &Path) -> io::Result<Vec<Vec<u8>>> {
    let bytes = fs::read(path)?;
    let mut lines: Vec<Vec<u8>> = bytes
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line).to_vec())
        .collect();
    if bytes.is_empty() || bytes.ends_with(b"\n") {
        lines.pop();
    }
    info!(path = %path.display(), lines = lines.len(), "loaded file");
    Ok(lines)
}

/// Replace the contents of `path` with `bytes`.
///
/// The data goes to a temporary file in the same directory which is then
/// renamed over the target, so a failed write leaves the old file intact.
/// Returns the number of bytes written.
pub fn save_atomic(path: &Path, bytes: &[u8]) -> io::Result<usize> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|err| err.error)?;
    info!(path = %path.display(), bytes = bytes.len(), "saved file");
    Ok(bytes.len())
}
