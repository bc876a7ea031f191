//! One interactive search run: query → retrieve → list → choose → open.

use std::io::{BufRead, Write};

use wikiseek_search::{EncodedQuery, Retriever, SearchConfig};

use crate::browser::BrowserLauncher;
use crate::console::{self, Selection};
use crate::error::{AppError, Result};
use crate::navigator::{ArticleRef, Navigator};

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user entered nothing.
    EmptyQuery,
    /// The chosen article was opened.
    Opened { url: String },
    /// Nothing was found; the backend's search page was opened instead.
    FellBack { url: String },
    /// The user cancelled the selection.
    Cancelled,
    /// The browser could not be launched for `url`.
    LaunchFailed { url: String },
}

/// Wires a [`Retriever`] to the console and a browser launcher.
pub struct Session<L> {
    retriever: Retriever,
    navigator: Navigator<L>,
}

impl<L: BrowserLauncher> Session<L> {
    pub fn new(retriever: Retriever, launcher: L) -> Self {
        let navigator = Navigator::new(retriever.config().base(), launcher);
        Self {
            retriever,
            navigator,
        }
    }

    /// Build the retriever for `config` and wrap it in a session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Search`] if the configuration is invalid or the
    /// HTTP client cannot be built.
    pub fn from_config(config: SearchConfig, launcher: L) -> Result<Self> {
        Ok(Self::new(Retriever::new(config)?, launcher))
    }

    /// Run one search interaction over `input`/`out`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if the console cannot be read or written.
    /// Retrieval and launch problems are handled here and reported on `out`.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<Outcome> {
        let raw = console::read_query(input, out)?;
        let query = match EncodedQuery::new(&raw) {
            Ok(query) => query,
            Err(_) => {
                writeln!(out, "The query must not be empty.")?;
                return Ok(Outcome::EmptyQuery);
            }
        };

        writeln!(out, "Searching for \"{}\"...", query.raw())?;
        let results = self.retriever.retrieve(&query);

        if !console::present(out, query.raw(), &results)? {
            writeln!(out, "Opening the search page instead.")?;
            return self.open(None, &query, out, |url| Outcome::FellBack { url });
        }

        match console::select(input, out, &results)? {
            Selection::Cancelled => {
                writeln!(out, "Cancelled.")?;
                Ok(Outcome::Cancelled)
            }
            Selection::Chosen { position, result } => {
                tracing::debug!(position, title = %result.title, "article chosen");
                let article = ArticleRef::from(result);
                writeln!(out, "Opening \"{}\"...", result.title)?;
                self.open(Some(&article), &query, out, |url| Outcome::Opened { url })
            }
        }
    }

    /// Navigate, turning a launch failure into a console notice.
    fn open<W: Write>(
        &self,
        article: Option<&ArticleRef>,
        query: &EncodedQuery,
        out: &mut W,
        opened: fn(String) -> Outcome,
    ) -> Result<Outcome> {
        match self.navigator.navigate(article, query) {
            Ok(url) => Ok(opened(url)),
            Err(AppError::Browser { url, reason }) => {
                tracing::warn!(%url, %reason, "browser launch failed");
                writeln!(out, "Could not open a browser. Visit {url} manually.")?;
                Ok(Outcome::LaunchFailed { url })
            }
            Err(other) => Err(other),
        }
    }
}
