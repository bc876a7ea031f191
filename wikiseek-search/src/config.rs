//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls which backend is queried, the strategy order,
//! timeouts and request identification. It is passed into the retriever at
//! construction; there is no process-wide state.

use url::Url;

use crate::error::SearchError;
use crate::http::DEFAULT_USER_AGENT;
use crate::types::StrategyKind;

/// Backend queried when no other base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://ru.wikipedia.org";

/// Configuration for a retriever.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Scheme and host of the MediaWiki site, e.g. `https://ru.wikipedia.org`.
    pub base_url: String,
    /// `User-Agent` sent with every request.
    pub user_agent: String,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Strategies to try, in priority order. The first one that yields at
    /// least one result wins.
    pub strategies: Vec<StrategyKind>,
    /// Maximum number of results returned from a strategy.
    pub max_results: usize,
    /// Whether bare titles are resolved to identifiers with an extra lookup.
    pub resolve_page_ids: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout_seconds: 8,
            strategies: StrategyKind::all().to_vec(),
            max_results: 10,
            resolve_page_ids: true,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `base_url` must be an absolute `http`/`https` URL with a host
    /// - `timeout_seconds` must be greater than 0
    /// - `max_results` must be greater than 0
    /// - `strategies` must be non-empty and free of duplicates
    pub fn validate(&self) -> Result<(), SearchError> {
        let parsed = Url::parse(&self.base_url)
            .map_err(|e| SearchError::Config(format!("base_url is not a valid URL: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(SearchError::Config(
                "base_url must be an http(s) URL with a host".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.max_results == 0 {
            return Err(SearchError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        if self.strategies.is_empty() {
            return Err(SearchError::Config(
                "at least one strategy must be enabled".into(),
            ));
        }
        for (i, kind) in self.strategies.iter().enumerate() {
            if self.strategies[..i].contains(kind) {
                return Err(SearchError::Config(format!(
                    "strategy {kind} is listed more than once"
                )));
            }
        }
        Ok(())
    }

    /// Base URL without a trailing slash, ready for path concatenation.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
