//! # wikiseek-search
//!
//! Article search against a MediaWiki site (Wikipedia by default).
//!
//! ## Design
//!
//! - Three interchangeable strategies behind [`RetrievalStrategy`]: the
//!   structured action API search, opensearch title suggestions, and a scrape
//!   of the rendered search page
//! - Strategies run one after another in configured order; the first one
//!   that yields results wins, failures are logged and skipped
//! - Bare titles are resolved to stable page identifiers with a metadata
//!   lookup, tolerating lookup failure
//! - Blocking HTTP with a fixed browser-like `User-Agent` and a per-request
//!   timeout; no caching, no retries
//!
//! Queries are logged only at trace level.

pub mod config;
pub mod encode;
pub mod error;
pub mod extract;
pub mod http;
pub mod lookup;
pub mod retriever;
pub mod strategies;
pub mod strategy;
pub mod types;

pub use config::SearchConfig;
pub use encode::EncodedQuery;
pub use error::{Result, SearchError};
pub use http::Backend;
pub use retriever::Retriever;
pub use strategy::RetrievalStrategy;
pub use types::{PageId, SearchResult, StrategyKind};

/// Search for articles matching `query` using `config`.
///
/// Builds a [`Retriever`] and runs the configured strategies in order. An
/// empty list means every strategy failed or found nothing.
///
/// # Errors
///
/// Returns [`SearchError::EmptyQuery`] for a blank query,
/// [`SearchError::Config`] for an invalid configuration, or
/// [`SearchError::Http`] if the HTTP client cannot be built.
///
/// # Examples
///
/// ```no_run
/// # fn example() -> wikiseek_search::Result<()> {
/// let config = wikiseek_search::SearchConfig::default();
/// let results = wikiseek_search::search("Москва", &config)?;
/// for result in &results {
///     println!("{} ({:?})", result.title, result.page_id);
/// }
/// # Ok(())
/// # }
/// ```
pub fn search(query: &str, config: &SearchConfig) -> Result<Vec<SearchResult>> {
    let query = EncodedQuery::new(query)?;
    let retriever = Retriever::new(config.clone())?;
    Ok(retriever.retrieve(&query))
}
