//! Structured full-text search through the action API (`list=search`).
//!
//! The most direct strategy: hits arrive with title, identifier and a
//! highlighted snippet, already in relevance order.

use serde::Deserialize;

use crate::config::SearchConfig;
use crate::encode::EncodedQuery;
use crate::error::SearchError;
use crate::http::{ApiErrorBody, Backend};
use crate::strategy::RetrievalStrategy;
use crate::types::{PageId, SearchResult, StrategyKind};

/// Action API full-text search.
pub struct ApiSearchStrategy;

impl ApiSearchStrategy {
    /// Request URL for `query`.
    pub fn request_url(backend: &Backend, query: &EncodedQuery, max_results: usize) -> String {
        backend.endpoint(&format!(
            "/w/api.php?action=query&list=search&format=json&srlimit={max_results}&srsearch={query}"
        ))
    }
}

impl RetrievalStrategy for ApiSearchStrategy {
    fn retrieve(
        &self,
        query: &EncodedQuery,
        backend: &Backend,
        config: &SearchConfig,
    ) -> Result<Vec<SearchResult>, SearchError> {
        tracing::trace!(query = query.raw(), "api search");

        let url = Self::request_url(backend, query, config.max_results);
        let page = backend.get(&url)?;
        parse_search_response(&page.body, config.max_results)
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::ApiSearch
    }
}

#[derive(Debug, Deserialize)]
struct ApiSearchResponse {
    query: Option<ApiSearchQuery>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiSearchQuery {
    #[serde(default)]
    search: Vec<ApiSearchHit>,
}

#[derive(Debug, Deserialize)]
struct ApiSearchHit {
    #[serde(default)]
    title: String,
    pageid: Option<u64>,
    #[serde(default)]
    snippet: String,
}

/// Parse an action API search response into results, in hit order.
///
/// Extracted as a separate function for testability with canned bodies.
pub(crate) fn parse_search_response(
    body: &str,
    max_results: usize,
) -> Result<Vec<SearchResult>, SearchError> {
    let response: ApiSearchResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("search response is not valid JSON: {e}")))?;
    if let Some(error) = response.error {
        return Err(error.into_search_error());
    }
    let query = response
        .query
        .ok_or_else(|| SearchError::Parse("search response has no `query` block".into()))?;

    let results: Vec<SearchResult> = query
        .search
        .into_iter()
        .filter(|hit| !hit.title.trim().is_empty())
        .take(max_results)
        .map(|hit| SearchResult {
            title: hit.title,
            page_id: hit.pageid.map(PageId),
            slug: None,
            snippet: Some(hit.snippet).filter(|s| !s.trim().is_empty()),
        })
        .collect();

    tracing::debug!(count = results.len(), "api search results parsed");
    Ok(results)
}
