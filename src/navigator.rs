//! Turning a chosen article (or the lack of one) into a URL and opening it.
//!
//! Addressing preference: identifier, then slug, then title, then the
//! backend's own search page for the original query.

use wikiseek_search::encode::title_to_slug;
use wikiseek_search::{EncodedQuery, PageId, SearchResult};

use crate::browser::BrowserLauncher;
use crate::error::Result;

/// What the navigator knows about the target article.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleRef {
    pub page_id: Option<PageId>,
    pub title: Option<String>,
    pub slug: Option<String>,
}

impl From<&SearchResult> for ArticleRef {
    fn from(result: &SearchResult) -> Self {
        Self {
            page_id: result.page_id,
            title: Some(result.title.clone()).filter(|t| !t.trim().is_empty()),
            slug: result.slug.clone(),
        }
    }
}

/// URL for `article` on the site at `base_url`, or the search page for
/// `query` when there is nothing to address the article by.
pub fn target_url(base_url: &str, article: Option<&ArticleRef>, query: &EncodedQuery) -> String {
    let base = base_url.trim_end_matches('/');

    if let Some(article) = article {
        if let Some(id) = article.page_id {
            return format!("{base}/w/index.php?curid={id}");
        }
        if let Some(slug) = article.slug.as_deref().filter(|s| !s.is_empty()) {
            return format!("{base}/wiki/{slug}");
        }
        if let Some(title) = article.title.as_deref().filter(|t| !t.trim().is_empty()) {
            return format!("{base}/wiki/{}", title_to_slug(title));
        }
    }
    search_page_url(base, query)
}

/// The backend's own search-results page for `query`.
pub fn search_page_url(base_url: &str, query: &EncodedQuery) -> String {
    format!(
        "{}/w/index.php?search={query}",
        base_url.trim_end_matches('/')
    )
}

/// Opens articles on one site through a [`BrowserLauncher`].
#[derive(Debug)]
pub struct Navigator<L> {
    base_url: String,
    launcher: L,
}

impl<L: BrowserLauncher> Navigator<L> {
    pub fn new(base_url: impl Into<String>, launcher: L) -> Self {
        Self {
            base_url: base_url.into(),
            launcher,
        }
    }

    /// Open `article`, or the search page for `query` when `article` is
    /// `None`. Returns the URL that was handed to the launcher.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AppError::Browser`] if the launcher fails.
    pub fn navigate(&self, article: Option<&ArticleRef>, query: &EncodedQuery) -> Result<String> {
        let url = target_url(&self.base_url, article, query);
        tracing::info!(%url, "opening in browser");
        self.launcher.open(&url)?;
        Ok(url)
    }
}
