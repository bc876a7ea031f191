//! Error types for the wikiseek application.

use wikiseek_search::SearchError;

/// Top-level error type for a search session.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Console read or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Search setup failed (configuration or HTTP client).
    #[error("search error: {0}")]
    Search(#[from] SearchError),

    /// The browser could not be launched.
    #[error("failed to open browser for {url}: {reason}")]
    Browser { url: String, reason: String },
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AppError>;
