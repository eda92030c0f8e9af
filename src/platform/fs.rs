// fieldfilter - platform/fs.rs
//
// Whole-file reads for the fields file.

use std::io;
use std::path::Path;

/// Read the full content of a file as a string.
///
/// For files with invalid UTF-8, uses lossy conversion.
pub fn read_file_lossy(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Split text into lines with trailing whitespace stripped.
///
/// `\r\n`, `\n` and a lone `\r` all end a line. A trailing terminator does
/// not produce an extra empty line.
pub fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        let (line, next) = match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(end) => {
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                (&rest[..end], &rest[end + terminator..])
            }
            None => (rest, ""),
        };
        lines.push(line.trim_end().to_string());
        rest = next;
    }

    lines
}

/// Read a file into memory in full and return its lines, trailing
/// whitespace stripped from each.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let content = read_file_lossy(path)?;
    let lines = split_lines(&content);
    tracing::debug!(
        path = %path.display(),
        bytes = content.len(),
        lines = lines.len(),
        "Read file"
    );
    Ok(lines)
}
