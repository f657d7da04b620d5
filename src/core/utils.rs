use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use crate::core::error::Result;

/// Feeds every line of `path` to `visit` with its 1-based number.
/// A line that is not valid UTF-8 is passed as `Err` holding a lossy copy,
/// so the caller can report it and carry on. I/O failures abort the read.
pub fn for_each_line<F>(path: &Path, mut visit: F) -> Result<()>
where
    F: FnMut(usize, std::result::Result<&str, String>),
{
    let mut reader = BufReader::new(File::open(path)?);
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let bytes = strip_line_ending(&buf);
        match std::str::from_utf8(bytes) {
            Ok(text) => visit(line_no, Ok(text)),
            Err(_) => visit(line_no, Err(String::from_utf8_lossy(bytes).into_owned())),
        }
    }

    Ok(())
}

fn strip_line_ending(bytes: &[u8]) -> &[u8] {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    bytes.strip_suffix(b"\r").unwrap_or(bytes)
}
