//! Result extraction from a rendered search-results page.
//!
//! The page structure is undocumented, so extraction is an ordered list of
//! [`PatternRule`]s over the raw markup. The first rule that matches anything
//! wins. When none does, [`script_data`] looks for an embedded JSON block.
//! Titles go through the partial decoder in [`entities`].

pub mod entities;
pub mod script_data;

use regex::Regex;

use crate::encode::slug_from_href;
use crate::error::SearchError;
use crate::types::SearchResult;

pub use entities::decode_entities;

/// Upper bound on results taken from one page.
pub const MAX_EXTRACTED_RESULTS: usize = 10;

/// Where a rule reads the display title from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSource {
    /// Second capture group is a `title="…"` attribute value.
    Attribute,
    /// Second capture group is the link's inner markup; tags are stripped.
    InnerText,
}

/// One structural pattern. Capture group 1 is the link target, group 2 the
/// title.
#[derive(Debug, Clone, Copy)]
pub struct PatternRule {
    pub name: &'static str,
    pub pattern: &'static str,
    pub title_source: TitleSource,
}

/// Rules in the order they are tried.
pub const RULES: &[PatternRule] = &[
    PatternRule {
        name: "result-heading",
        pattern: r#"(?s)<div class="mw-search-result-heading">\s*<a\s+href="([^"]+)"[^>]*?\stitle="([^"]*)""#,
        title_source: TitleSource::Attribute,
    },
    PatternRule {
        name: "serp-link",
        pattern: r#"(?s)<a\s+href="(/wiki/[^"]+)"[^>]*?\sdata-serp-pos="\d+"[^>]*>(.*?)</a>"#,
        title_source: TitleSource::InnerText,
    },
    PatternRule {
        name: "result-item",
        pattern: r#"(?s)<li class="mw-search-result[^"]*"[^>]*>.*?<a\s+href="(/wiki/[^"]+)"[^>]*?\stitle="([^"]*)""#,
        title_source: TitleSource::Attribute,
    },
];

/// A link target and display title pulled from markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedEntry {
    pub href: Option<String>,
    pub title: String,
}

/// Extract up to [`MAX_EXTRACTED_RESULTS`] results from a search page.
///
/// Returns an empty list when neither the pattern rules nor the embedded
/// script data yield anything.
///
/// # Errors
///
/// Returns [`SearchError::Parse`] if a built-in pattern fails to compile.
pub fn extract_results(html: &str) -> Result<Vec<SearchResult>, SearchError> {
    for rule in RULES {
        let entries = apply_rule(rule, html)?;
        if !entries.is_empty() {
            tracing::debug!(rule = rule.name, count = entries.len(), "pattern rule matched");
            return Ok(finalize(entries.into_iter().map(entry_to_result)));
        }
    }

    let fallback = script_data::extract_script_results(html)?;
    if !fallback.is_empty() {
        tracing::debug!(count = fallback.len(), "script data block matched");
    }
    Ok(finalize(fallback.into_iter()))
}

/// Apply one rule to the whole document.
pub fn apply_rule(rule: &PatternRule, html: &str) -> Result<Vec<ExtractedEntry>, SearchError> {
    let re = Regex::new(rule.pattern)
        .map_err(|e| SearchError::Parse(format!("invalid pattern {}: {e}", rule.name)))?;

    let mut entries = Vec::new();
    for caps in re.captures_iter(html) {
        let href = caps.get(1).map(|m| m.as_str().to_owned());
        let raw_title = caps.get(2).map_or("", |m| m.as_str());
        let title = match rule.title_source {
            TitleSource::Attribute => raw_title.to_owned(),
            TitleSource::InnerText => strip_tags(raw_title),
        };
        let title = clean_text(&decode_entities(&title));
        if title.is_empty() {
            continue;
        }
        entries.push(ExtractedEntry { href, title });
    }
    Ok(entries)
}

/// Remove anything between `<` and `>`.
pub fn strip_tags(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut in_tag = false;
    for c in markup.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Collapse runs of whitespace into single spaces and trim.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn entry_to_result(entry: ExtractedEntry) -> SearchResult {
    let slug = entry.href.as_deref().and_then(slug_from_href);
    SearchResult {
        title: entry.title,
        page_id: None,
        slug,
        snippet: None,
    }
}

/// Drop repeated titles (first occurrence wins) and cap the count.
fn finalize(results: impl Iterator<Item = SearchResult>) -> Vec<SearchResult> {
    let mut out: Vec<SearchResult> = Vec::new();
    for result in results {
        if out.iter().any(|seen| seen.title == result.title) {
            continue;
        }
        out.push(result);
        if out.len() >= MAX_EXTRACTED_RESULTS {
            break;
        }
    }
    out
}
