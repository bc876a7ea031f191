//! Trait definition for pluggable retrieval strategies.
//!
//! Each way of turning a query into candidate articles (structured API
//! search, opensearch, rendered-page scraping) implements
//! [`RetrievalStrategy`] so the retriever can try them in priority order.

use crate::config::SearchConfig;
use crate::encode::EncodedQuery;
use crate::error::SearchError;
use crate::http::Backend;
use crate::types::{SearchResult, StrategyKind};

/// A pluggable retrieval strategy.
///
/// Implementors handle their own:
///
/// - request URL construction from the already-encoded query
/// - response parsing (JSON or HTML)
///
/// Identifiers for bare titles are filled in by the retriever when
/// [`StrategyKind::returns_page_ids`] is false.
///
/// A strategy that finds nothing returns `Ok(vec![])`; transport and parse
/// problems are returned as errors and the retriever moves on.
pub trait RetrievalStrategy: Send + Sync {
    /// Retrieve candidate articles for `query`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the request fails or the body cannot be
    /// interpreted.
    fn retrieve(
        &self,
        query: &EncodedQuery,
        backend: &Backend,
        config: &SearchConfig,
    ) -> Result<Vec<SearchResult>, SearchError>;

    /// Returns which [`StrategyKind`] this implementation represents.
    fn kind(&self) -> StrategyKind;

    /// Name used in log lines. Delegates to [`StrategyKind::name()`].
    fn name(&self) -> &'static str {
        self.kind().name()
    }
}
