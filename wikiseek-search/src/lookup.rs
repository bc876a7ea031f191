//! Title → identifier resolution via the action API's page metadata query.
//!
//! The retriever calls [`resolve_all`] for strategies that only know titles.
//! Titles are sent in batches of up to [`MAX_TITLES_PER_LOOKUP`] per request.
//! A failed or empty lookup leaves the identifier unresolved instead of
//! failing the strategy.

use std::collections::HashMap;

use serde::Deserialize;

use crate::encode::encode_component;
use crate::error::SearchError;
use crate::http::{ApiErrorBody, Backend};
use crate::types::{PageId, SearchResult};

/// Most titles the action API accepts in one `titles=` parameter.
pub const MAX_TITLES_PER_LOOKUP: usize = 50;

#[derive(Debug, Deserialize)]
struct LookupResponse {
    query: Option<LookupQuery>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct LookupQuery {
    #[serde(default)]
    normalized: Vec<TitleMapping>,
    #[serde(default)]
    redirects: Vec<TitleMapping>,
    #[serde(default)]
    pages: HashMap<String, LookupPage>,
}

#[derive(Debug, Deserialize)]
struct TitleMapping {
    from: String,
    to: String,
}

#[derive(Debug, Deserialize)]
struct LookupPage {
    title: Option<String>,
    pageid: Option<u64>,
    missing: Option<serde_json::Value>,
    invalid: Option<serde_json::Value>,
}

/// URL of the metadata query for `titles`, joined with `|`.
pub fn lookup_url(backend: &Backend, titles: &[&str]) -> String {
    let joined = titles
        .iter()
        .copied()
        .map(encode_component)
        .collect::<Vec<_>>()
        .join("%7C");
    backend.endpoint(&format!(
        "/w/api.php?action=query&format=json&redirects=1&titles={joined}"
    ))
}

/// Resolve a batch of titles with a single request.
///
/// The returned map is keyed by the titles as given. Titles the backend
/// reports as missing or invalid are absent from it.
///
/// # Errors
///
/// Returns [`SearchError`] if the request fails or the body is not a
/// metadata response.
pub fn resolve_titles(
    backend: &Backend,
    titles: &[&str],
) -> Result<HashMap<String, PageId>, SearchError> {
    if titles.is_empty() {
        return Ok(HashMap::new());
    }
    let page = backend.get(&lookup_url(backend, titles))?;
    parse_lookup_response(&page.body, titles)
}

/// Fill in identifiers for every result that lacks one.
pub fn resolve_all(backend: &Backend, results: &mut [SearchResult]) {
    let mut pending: Vec<String> = Vec::new();
    for result in results.iter().filter(|r| r.page_id.is_none()) {
        if !pending.contains(&result.title) {
            pending.push(result.title.clone());
        }
    }
    if pending.is_empty() {
        return;
    }

    let mut resolved = HashMap::new();
    for batch in pending.chunks(MAX_TITLES_PER_LOOKUP) {
        let titles: Vec<&str> = batch.iter().map(String::as_str).collect();
        match resolve_titles(backend, &titles) {
            Ok(ids) => resolved.extend(ids),
            Err(err) => {
                tracing::warn!(titles = titles.len(), error = %err, "identifier lookup failed")
            }
        }
    }

    for result in results.iter_mut().filter(|r| r.page_id.is_none()) {
        match resolved.get(&result.title) {
            Some(id) => result.page_id = Some(*id),
            None => tracing::debug!(title = %result.title, "no identifier for title"),
        }
    }
}

pub(crate) fn parse_lookup_response(
    body: &str,
    titles: &[&str],
) -> Result<HashMap<String, PageId>, SearchError> {
    let response: LookupResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("lookup response is not valid JSON: {e}")))?;
    if let Some(error) = response.error {
        return Err(error.into_search_error());
    }
    let query = response
        .query
        .ok_or_else(|| SearchError::Parse("lookup response has no `query` block".into()))?;

    let normalized: HashMap<&str, &str> = query
        .normalized
        .iter()
        .map(|m| (m.from.as_str(), m.to.as_str()))
        .collect();
    let redirects: HashMap<&str, &str> = query
        .redirects
        .iter()
        .map(|m| (m.from.as_str(), m.to.as_str()))
        .collect();
    let by_title: HashMap<&str, u64> = query
        .pages
        .values()
        .filter(|p| p.missing.is_none() && p.invalid.is_none())
        .filter_map(|p| Some((p.title.as_deref()?, p.pageid?)))
        .collect();

    Ok(titles
        .iter()
        .filter_map(|&requested| {
            let canonical = normalized.get(requested).copied().unwrap_or(requested);
            let target = redirects.get(canonical).copied().unwrap_or(canonical);
            by_title
                .get(target)
                .map(|id| (requested.to_owned(), PageId(*id)))
        })
        .collect())
}
