//! Shared blocking HTTP client for backend requests.
//!
//! [`Backend`] owns one [`reqwest::blocking::Client`] configured with the
//! browser-like `User-Agent` and the request timeout, and is reused by every
//! strategy and title lookup of a retriever.

use std::time::Duration;

use serde::Deserialize;

use crate::config::SearchConfig;
use crate::error::SearchError;

/// Browser identification sent with every request unless overridden.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Body of a successful GET plus the URL it was finally served from.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL after redirects.
    pub final_url: String,
    /// Response body as text.
    pub body: String,
}

/// HTTP access to one MediaWiki site.
#[derive(Debug, Clone)]
pub struct Backend {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl Backend {
    /// Build a backend for `config.base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the client cannot be constructed.
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        Ok(Self {
            client: build_client(config)?,
            base_url: config.base().to_owned(),
        })
    }

    /// Scheme and host of the site, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a site-relative `path_and_query`.
    pub fn endpoint(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base_url, path_and_query)
    }

    /// GET `url` and return the body with the final URL.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] on transport failure, a non-success
    /// status, or an unreadable body.
    pub fn get(&self, url: &str) -> Result<FetchedPage, SearchError> {
        tracing::trace!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| SearchError::Http(format!("request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("bad status: {e}")))?;

        let final_url = response.url().to_string();
        let body = response
            .text()
            .map_err(|e| SearchError::Http(format!("response read failed: {e}")))?;

        tracing::trace!(bytes = body.len(), final_url = %final_url, "response received");
        Ok(FetchedPage { final_url, body })
    }
}

/// Build a [`reqwest::blocking::Client`] for backend requests.
///
/// The client has:
/// - Timeout from config
/// - `User-Agent` from config
/// - Brotli and gzip decompression
/// - Up to 10 redirects followed
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::blocking::Client, SearchError> {
    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

/// The `error` block the action API returns instead of data.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub info: String,
}

impl ApiErrorBody {
    pub(crate) fn into_search_error(self) -> SearchError {
        SearchError::Parse(format!("backend reported {}: {}", self.code, self.info))
    }
}
