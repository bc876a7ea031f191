//! Autocomplete-style title search (`action=opensearch`).
//!
//! The response is a positional array `[query, titles, descriptions, urls]`
//! without identifiers, so the retriever resolves titles through the
//! metadata lookup afterwards.

use serde_json::Value;

use crate::config::SearchConfig;
use crate::encode::{slug_from_href, EncodedQuery};
use crate::error::SearchError;
use crate::http::Backend;
use crate::strategy::RetrievalStrategy;
use crate::types::{SearchResult, StrategyKind};

/// Opensearch title suggestions.
pub struct OpenSearchStrategy;

impl OpenSearchStrategy {
    /// Request URL for `query`.
    pub fn request_url(backend: &Backend, query: &EncodedQuery, max_results: usize) -> String {
        backend.endpoint(&format!(
            "/w/api.php?action=opensearch&format=json&namespace=0&limit={max_results}&search={query}"
        ))
    }
}

impl RetrievalStrategy for OpenSearchStrategy {
    fn retrieve(
        &self,
        query: &EncodedQuery,
        backend: &Backend,
        config: &SearchConfig,
    ) -> Result<Vec<SearchResult>, SearchError> {
        tracing::trace!(query = query.raw(), "opensearch");

        let url = Self::request_url(backend, query, config.max_results);
        let page = backend.get(&url)?;
        parse_opensearch_response(&page.body, config.max_results)
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::OpenSearch
    }
}

/// Parse an opensearch response into title-only results.
pub(crate) fn parse_opensearch_response(
    body: &str,
    max_results: usize,
) -> Result<Vec<SearchResult>, SearchError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("opensearch response is not valid JSON: {e}")))?;

    if let Some(error) = value.get("error") {
        let info = error.get("info").and_then(Value::as_str).unwrap_or("unknown error");
        return Err(SearchError::Parse(format!("backend reported: {info}")));
    }

    let parts = value
        .as_array()
        .ok_or_else(|| SearchError::Parse("opensearch response is not an array".into()))?;
    let titles = parts
        .get(1)
        .and_then(Value::as_array)
        .ok_or_else(|| SearchError::Parse("opensearch response has no title list".into()))?;
    let urls = parts.get(3).and_then(Value::as_array);

    let results: Vec<SearchResult> = titles
        .iter()
        .enumerate()
        .filter_map(|(i, title)| {
            let title = title.as_str()?.trim();
            if title.is_empty() {
                return None;
            }
            let slug = urls
                .and_then(|urls| urls.get(i))
                .and_then(Value::as_str)
                .and_then(slug_from_href);
            Some(SearchResult {
                title: title.to_owned(),
                page_id: None,
                slug,
                snippet: None,
            })
        })
        .take(max_results)
        .collect();

    tracing::debug!(count = results.len(), "opensearch results parsed");
    Ok(results)
}
