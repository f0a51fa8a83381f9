//! Delimited integer table loader with zero-allocation integer parsing.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Read},
    path::Path,
};

use crate::core::{
    error::{GraphError, RowFault},
    series::Table,
};

const BUF_CAP: usize = 64 * 1024;

// --- Helpers ---
#[inline]
fn trim(b: &[u8]) -> &[u8] {
    b.trim_ascii()
}

/// Rewrite U+2212 MINUS SIGN as an ASCII hyphen, in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
        } else {
            buf[w] = buf[r];
            r += 1;
        }
        w += 1;
    }
    buf.truncate(w);
}

#[inline]
fn parse_i64(bytes: &[u8], line: usize) -> Result<i64, GraphError> {
    lexical_core::parse::<i64>(bytes).map_err(|_| GraphError::MalformedRow {
        row: line,
        fault: RowFault::BadInteger(String::from_utf8_lossy(bytes).into_owned()),
    })
}

/// Non-empty, trimmed fields of one line. Runs of delimiters count as one.
fn fields(line: &[u8], delimiter: u8) -> impl Iterator<Item = &[u8]> {
    line.split(move |&b| b == delimiter)
        .map(trim)
        .filter(|f| !f.is_empty())
}

// --- Table ingest ---

/// Read every data row of `src` as integers.
///
/// Blank lines and `#` comments are skipped, as is a leading header row
/// in which no field is an integer.
///
/// # Errors
/// * [`GraphError::MalformedRow`] for a field that is not an integer or a
///   row with fewer than two fields, tagged with its file line.
/// * [`GraphError::Io`] if reading fails.
pub fn read_table<R: Read>(src: R, delimiter: u8) -> Result<Table, GraphError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut table = Table::new();
    let mut saw_first = false;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if rdr.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        let line = trim(&buf);
        if line.is_empty() || line[0] == b'#' {
            continue;
        }

        // header: first data line without a single numeric field
        if !saw_first {
            saw_first = true;
            let is_header =
                fields(line, delimiter).all(|f| lexical_core::parse::<i64>(f).is_err());
            if is_header {
                continue;
            }
        }

        let row = fields(line, delimiter)
            .map(|f| parse_i64(f, line_no))
            .collect::<Result<Vec<_>, _>>()?;
        match row.len() {
            0 => {}
            n if n < 2 => {
                return Err(GraphError::MalformedRow {
                    row: line_no,
                    fault: RowFault::TooFewColumns(n),
                });
            }
            _ => table.push(row),
        }
    }
    Ok(table)
}

/// [`read_table`] on a file, or on stdin when `path` is `-`.
///
/// # Errors
/// [`GraphError::FileNotFound`] when the file does not exist, otherwise as
/// [`read_table`].
pub fn read_table_from_path(path: &Path, delimiter: u8) -> Result<Table, GraphError> {
    if path.as_os_str() == "-" {
        return read_table(io::stdin().lock(), delimiter);
    }
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => GraphError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => GraphError::Io(e),
    })?;
    read_table(file, delimiter)
}
