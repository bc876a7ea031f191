//! Error types for the wikiseek-search crate.
//!
//! All errors use stable string messages suitable for display to users
//! and for matching in tests.

/// Errors that can occur while retrieving search results.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// An HTTP request to the search backend failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The backend answered with a body that could not be interpreted.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The query was empty or contained only whitespace.
    #[error("query must not be empty")]
    EmptyQuery,
}

/// Convenience type alias for wikiseek-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
