//! Retrieval strategy implementations.
//!
//! Each module provides a struct implementing
//! [`crate::strategy::RetrievalStrategy`] against one MediaWiki entry point.

pub mod api_search;
pub mod html_page;
pub mod opensearch;

pub use api_search::ApiSearchStrategy;
pub use html_page::HtmlPageStrategy;
pub use opensearch::OpenSearchStrategy;

use crate::strategy::RetrievalStrategy;
use crate::types::StrategyKind;

/// Instantiate the concrete strategy for `kind`.
pub fn strategy_for(kind: StrategyKind) -> Box<dyn RetrievalStrategy> {
    match kind {
        StrategyKind::ApiSearch => Box::new(ApiSearchStrategy),
        StrategyKind::OpenSearch => Box::new(OpenSearchStrategy),
        StrategyKind::HtmlPage => Box::new(HtmlPageStrategy),
    }
}
