//! Numbered result listing.

use std::io::Write;

use wikiseek_search::SearchResult;
use wikiseek_search::extract::{clean_text, decode_entities, strip_tags};

/// Print `results` as a 1-based numbered list.
///
/// Returns `false` after printing a "nothing found" line when `results` is
/// empty, `true` otherwise.
pub fn present<W: Write>(out: &mut W, query: &str, results: &[SearchResult]) -> std::io::Result<bool> {
    if results.is_empty() {
        writeln!(out, "Nothing found for \"{query}\".")?;
        return Ok(false);
    }

    writeln!(out)?;
    writeln!(out, "Search results for \"{query}\":")?;
    for (i, result) in results.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, result.title)?;
        if let Some(snippet) = result.snippet.as_deref().map(clean_snippet)
            && !snippet.is_empty()
        {
            writeln!(out, "   {snippet}")?;
        }
    }
    writeln!(out)?;
    Ok(true)
}

/// Snippet text with highlight markup removed.
pub fn clean_snippet(snippet: &str) -> String {
    clean_text(&decode_entities(&strip_tags(snippet)))
}
