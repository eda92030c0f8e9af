// fieldfilter - core/export.rs
//
// Writes kept lines to any Write trait object, one line per record.

use std::io::{self, Write};

/// Write each line followed by `\n`. Returns the number of lines written.
///
/// The writer is not flushed; the caller owns buffering.
pub fn write_lines<W, S>(lines: &[S], mut writer: W) -> io::Result<usize>
where
    W: Write,
    S: AsRef<str>,
{
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    Ok(lines.len())
}
