//! Sequential strategy fallback.
//!
//! Runs the configured strategies one after another and keeps the first
//! non-empty answer. A failing strategy is logged and skipped, never retried.
//! Winning results without identifiers go through one batched title lookup
//! when the strategy does not supply identifiers itself.

use crate::config::SearchConfig;
use crate::encode::EncodedQuery;
use crate::error::SearchError;
use crate::http::Backend;
use crate::lookup;
use crate::strategies::strategy_for;
use crate::strategy::RetrievalStrategy;
use crate::types::SearchResult;

/// Composite retriever over an ordered list of strategies.
pub struct Retriever {
    config: SearchConfig,
    backend: Backend,
    strategies: Vec<Box<dyn RetrievalStrategy>>,
}

impl std::fmt::Debug for Retriever {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Retriever")
            .field("base_url", &self.backend.base_url())
            .field(
                "strategies",
                &self.strategies.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Retriever {
    /// Build a retriever running `config.strategies` in order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] for an invalid configuration, or
    /// [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        let strategies = config.strategies.iter().map(|k| strategy_for(*k)).collect();
        Self::with_strategies(config, strategies)
    }

    /// Build a retriever over caller-supplied strategies, tried in the given
    /// order. `config.strategies` is not consulted for dispatch.
    ///
    /// # Errors
    ///
    /// Same as [`Retriever::new`]; an empty `strategies` list is a config error.
    pub fn with_strategies(
        config: SearchConfig,
        strategies: Vec<Box<dyn RetrievalStrategy>>,
    ) -> Result<Self, SearchError> {
        config.validate()?;
        if strategies.is_empty() {
            return Err(SearchError::Config(
                "at least one strategy must be enabled".into(),
            ));
        }
        let backend = Backend::new(&config)?;
        Ok(Self {
            config,
            backend,
            strategies,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Results of the first strategy that yields any, or an empty list.
    pub fn retrieve(&self, query: &EncodedQuery) -> Vec<SearchResult> {
        for strategy in &self.strategies {
            match strategy.retrieve(query, &self.backend, &self.config) {
                Ok(mut results) if !results.is_empty() => {
                    results.truncate(self.config.max_results);
                    if self.config.resolve_page_ids && !strategy.kind().returns_page_ids() {
                        lookup::resolve_all(&self.backend, &mut results);
                    }
                    tracing::debug!(
                        strategy = strategy.name(),
                        count = results.len(),
                        "strategy returned results"
                    );
                    return results;
                }
                Ok(_) => {
                    tracing::debug!(strategy = strategy.name(), "strategy returned no results");
                }
                Err(err) => {
                    tracing::warn!(strategy = strategy.name(), error = %err, "strategy failed");
                }
            }
        }

        tracing::warn!(
            attempted = self.strategies.len(),
            "no strategy produced results"
        );
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::types::StrategyKind;

    enum Behaviour {
        Results(Vec<&'static str>),
        Empty,
        Fail,
    }

    struct ScriptedStrategy {
        kind: StrategyKind,
        behaviour: Behaviour,
        calls: Arc<AtomicUsize>,
    }

    impl ScriptedStrategy {
        fn boxed(
            kind: StrategyKind,
            behaviour: Behaviour,
            calls: &Arc<AtomicUsize>,
        ) -> Box<dyn RetrievalStrategy> {
            Box::new(Self {
                kind,
                behaviour,
                calls: Arc::clone(calls),
            })
        }
    }

    impl RetrievalStrategy for ScriptedStrategy {
        fn retrieve(
            &self,
            _query: &EncodedQuery,
            _backend: &Backend,
            _config: &SearchConfig,
        ) -> Result<Vec<SearchResult>, SearchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.behaviour {
                Behaviour::Results(titles) => {
                    Ok(titles.iter().map(|t| SearchResult::new(*t)).collect())
                }
                Behaviour::Empty => Ok(vec![]),
                Behaviour::Fail => Err(SearchError::Http("connection refused".into())),
            }
        }

        fn kind(&self) -> StrategyKind {
            self.kind
        }
    }

    fn query() -> EncodedQuery {
        EncodedQuery::new("rust").expect("query")
    }

    fn without_lookup() -> SearchConfig {
        SearchConfig {
            resolve_page_ids: false,
            ..Default::default()
        }
    }

    #[test]
    fn first_non_empty_strategy_wins() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let third = Arc::new(AtomicUsize::new(0));
        let retriever = Retriever::with_strategies(
            without_lookup(),
            vec![
                ScriptedStrategy::boxed(StrategyKind::ApiSearch, Behaviour::Empty, &first),
                ScriptedStrategy::boxed(
                    StrategyKind::OpenSearch,
                    Behaviour::Results(vec!["Rust", "Rustacean"]),
                    &second,
                ),
                ScriptedStrategy::boxed(
                    StrategyKind::HtmlPage,
                    Behaviour::Results(vec!["Never"]),
                    &third,
                ),
            ],
        )
        .expect("retriever");

        let results = retriever.retrieve(&query());
        let titles: Vec<_> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Rust", "Rustacean"]);
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 1);
        assert_eq!(third.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn failure_falls_through_to_next_strategy() {
        let calls = Arc::new(AtomicUsize::new(0));
        let retriever = Retriever::with_strategies(
            without_lookup(),
            vec![
                ScriptedStrategy::boxed(StrategyKind::ApiSearch, Behaviour::Fail, &calls),
                ScriptedStrategy::boxed(
                    StrategyKind::HtmlPage,
                    Behaviour::Results(vec!["Ferris"]),
                    &calls,
                ),
            ],
        )
        .expect("retriever");

        let results = retriever.retrieve(&query());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Ferris");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn all_strategies_exhausted_returns_empty() {
        let calls = Arc::new(AtomicUsize::new(0));
        let retriever = Retriever::with_strategies(
            SearchConfig::default(),
            vec![
                ScriptedStrategy::boxed(StrategyKind::ApiSearch, Behaviour::Fail, &calls),
                ScriptedStrategy::boxed(StrategyKind::OpenSearch, Behaviour::Empty, &calls),
                ScriptedStrategy::boxed(StrategyKind::HtmlPage, Behaviour::Fail, &calls),
            ],
        )
        .expect("retriever");

        assert!(retriever.retrieve(&query()).is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn results_truncated_to_max_results() {
        let calls = Arc::new(AtomicUsize::new(0));
        let config = SearchConfig {
            max_results: 2,
            ..Default::default()
        };
        let retriever = Retriever::with_strategies(
            config,
            vec![ScriptedStrategy::boxed(
                StrategyKind::ApiSearch,
                Behaviour::Results(vec!["a", "b", "c"]),
                &calls,
            )],
        )
        .expect("retriever");

        assert_eq!(retriever.retrieve(&query()).len(), 2);
    }

    #[test]
    fn empty_strategy_list_rejected() {
        let err = Retriever::with_strategies(SearchConfig::default(), vec![]).unwrap_err();
        assert!(err.to_string().contains("strategy"));
    }

    #[test]
    fn invalid_config_rejected() {
        let config = SearchConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert!(Retriever::new(config).is_err());
    }

    #[test]
    fn new_builds_configured_strategies_in_order() {
        let config = SearchConfig {
            strategies: vec![StrategyKind::HtmlPage, StrategyKind::ApiSearch],
            ..Default::default()
        };
        let retriever = Retriever::new(config).expect("retriever");
        let debug = format!("{retriever:?}");
        assert!(debug.contains(r#"["html-page", "api-search"]"#), "{debug}");
    }
}
