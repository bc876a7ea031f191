//! Scrape of the rendered `Special:Search` results page.
//!
//! Depends on undocumented page structure, so it runs last by default. The
//! request leaves out `fulltext`, so an exact title match makes the backend
//! redirect straight to the article; that article is then the only result.

use url::Url;

use crate::config::SearchConfig;
use crate::encode::{slug_to_title, EncodedQuery};
use crate::error::SearchError;
use crate::extract;
use crate::http::Backend;
use crate::strategy::RetrievalStrategy;
use crate::types::{SearchResult, StrategyKind};

/// Namespace prefixes of non-article pages the search may land on.
const SPECIAL_PREFIXES: &[&str] = &["Special:", "Служебная:"];

/// Rendered search-page scraper.
pub struct HtmlPageStrategy;

impl HtmlPageStrategy {
    /// Request URL for `query`.
    pub fn request_url(backend: &Backend, query: &EncodedQuery) -> String {
        backend.endpoint(&format!(
            "/w/index.php?title=Special:Search&ns0=1&search={query}"
        ))
    }
}

impl RetrievalStrategy for HtmlPageStrategy {
    fn retrieve(
        &self,
        query: &EncodedQuery,
        backend: &Backend,
        config: &SearchConfig,
    ) -> Result<Vec<SearchResult>, SearchError> {
        tracing::trace!(query = query.raw(), "search page scrape");

        let url = Self::request_url(backend, query);
        let page = backend.get(&url)?;

        let mut results = match redirected_article(&page.final_url) {
            Some(result) => {
                tracing::debug!(title = %result.title, "search redirected to article");
                vec![result]
            }
            None => extract::extract_results(&page.body)?,
        };
        results.truncate(config.max_results);
        Ok(results)
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::HtmlPage
    }
}

/// The article the search landed on, if `final_url` is an article path.
pub(crate) fn redirected_article(final_url: &str) -> Option<SearchResult> {
    let parsed = Url::parse(final_url).ok()?;
    let slug = parsed.path().strip_prefix("/wiki/")?;
    if slug.is_empty() {
        return None;
    }
    let title = slug_to_title(slug);
    if SPECIAL_PREFIXES.iter().any(|p| title.starts_with(p)) {
        return None;
    }
    Some(SearchResult::new(title).with_slug(slug))
}
