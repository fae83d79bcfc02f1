//! Header reading: the first line of a file, split into column names

use crate::delimiter::Delimiter;
use crate::error::{HeaderDiffError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

const BOM: char = '\u{feff}';

/// Normalized form of a column name: one leading BOM removed, then trimmed.
pub fn clean_column_name(column: &str) -> &str {
    column.strip_prefix(BOM).unwrap_or(column).trim()
}

/// Normalized, lowercased form used for case-insensitive lookups.
pub fn column_key(column: &str) -> String {
    clean_column_name(column).to_lowercase()
}

/// Read the first line of a file as UTF-8, with line terminators removed.
///
/// The line ends at the first `\n`, `\r\n` or bare `\r`.
pub fn read_first_line(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| HeaderDiffError::read_error(path, &e))?;
    let mut reader = BufReader::new(file);
    let mut raw = Vec::new();
    reader
        .read_until(b'\n', &mut raw)
        .map_err(|e| HeaderDiffError::read_error(path, &e))?;

    let end = raw.iter().position(|b| *b == b'\r' || *b == b'\n').unwrap_or(raw.len());
    raw.truncate(end);

    String::from_utf8(raw).map_err(|e| {
        let io = io::Error::new(io::ErrorKind::InvalidData, e);
        HeaderDiffError::read_error(path, &io)
    })
}

/// Read a file's header row and split it into column names.
///
/// Column names are returned exactly as they appear in the file; use
/// [`clean_column_name`] for comparisons.
pub fn read_header(path: &Path, delimiter: &Delimiter) -> Result<Vec<String>> {
    let line = read_first_line(path)?;
    if line.is_empty() {
        return Err(HeaderDiffError::empty_header(path));
    }

    let columns: Vec<String> = delimiter.split(&line).into_iter().map(str::to_string).collect();
    if columns.is_empty() {
        return Err(HeaderDiffError::empty_header(path));
    }

    log::debug!("Read {} columns from {} using {}", columns.len(), path.display(), delimiter);
    Ok(columns)
}
