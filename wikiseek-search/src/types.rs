//! Core types for search results and strategy identification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-assigned article key. Stable across renames, so preferred over
/// title-derived addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub u64);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single candidate article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Display title of the article.
    pub title: String,
    /// Article identifier, if the strategy returned one or the title lookup
    /// resolved it.
    pub page_id: Option<PageId>,
    /// URL-safe path segment (`/wiki/<slug>`) when known from a link target.
    pub slug: Option<String>,
    /// Short excerpt, possibly carrying highlight markup.
    pub snippet: Option<String>,
}

impl SearchResult {
    /// A result carrying only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            page_id: None,
            slug: None,
            snippet: None,
        }
    }

    pub fn with_page_id(mut self, page_id: PageId) -> Self {
        self.page_id = Some(page_id);
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }
}

/// Retrieval strategies that wikiseek-search can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Structured full-text search through the action API (`list=search`).
    ApiSearch,
    /// Autocomplete-style title search (`action=opensearch`).
    OpenSearch,
    /// Scrape of the rendered `Special:Search` results page.
    HtmlPage,
}

impl StrategyKind {
    /// Returns the human-readable name of this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ApiSearch => "api-search",
            Self::OpenSearch => "opensearch",
            Self::HtmlPage => "html-page",
        }
    }

    /// Whether results from this strategy arrive with identifiers already
    /// attached.
    pub fn returns_page_ids(&self) -> bool {
        matches!(self, Self::ApiSearch)
    }

    /// Returns all strategies in default priority order.
    pub fn all() -> &'static [StrategyKind] {
        &[Self::ApiSearch, Self::OpenSearch, Self::HtmlPage]
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
