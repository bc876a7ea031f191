//! Console interaction: reading the query, listing results, reading the
//! choice.
//!
//! Everything is generic over [`BufRead`]/[`Write`] so sessions can run
//! against stdin/stdout or in-memory buffers.

pub mod presenter;
pub mod selector;

use std::io::{BufRead, Write};

pub use presenter::present;
pub use selector::{CANCEL_SENTINEL, Selection, select};

/// Prompt for the search phrase and return the trimmed line.
///
/// End of input reads as an empty phrase.
pub fn read_query<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> std::io::Result<String> {
    write!(out, "Enter a search query: ")?;
    out.flush()?;

    Ok(read_line_lossy(input)?.unwrap_or_default().trim().to_owned())
}

/// Read one line, replacing bytes that are not UTF-8. `None` at end of input.
pub(crate) fn read_line_lossy<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
