//! Percent-encoding of queries and titles, and slug extraction from link
//! targets.

use std::fmt;

use url::Url;

use crate::error::SearchError;

/// A non-empty user query together with its percent-encoded form.
///
/// The encoded form holds only unreserved ASCII and `%XX` escapes, so it can
/// be spliced into a query string as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedQuery {
    raw: String,
    encoded: String,
}

impl EncodedQuery {
    /// Trim and encode `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyQuery`] when nothing but whitespace is left.
    pub fn new(raw: &str) -> Result<Self, SearchError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        Ok(Self {
            raw: trimmed.to_owned(),
            encoded: encode_component(trimmed),
        })
    }

    /// The query as the user typed it (trimmed).
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The percent-encoded query.
    pub fn as_str(&self) -> &str {
        &self.encoded
    }
}

impl fmt::Display for EncodedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

/// Percent-encode `text` as UTF-8, leaving only `A-Z a-z 0-9 - _ . ~` unescaped.
pub fn encode_component(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

/// Article path segment for a title: spaces become underscores, the rest is
/// percent-encoded.
pub fn title_to_slug(title: &str) -> String {
    encode_component(&title.trim().replace(' ', "_"))
}

/// Extract the article slug from a `/wiki/<slug>` link target.
///
/// Accepts absolute URLs, protocol-relative URLs and site-relative paths.
/// Raw non-ASCII in the path is percent-encoded on the way out. Returns
/// `None` for anything that is not an article path.
pub fn slug_from_href(href: &str) -> Option<String> {
    let href = href.trim();
    let parsed = if href.starts_with("//") {
        Url::parse(&format!("https:{href}")).ok()?
    } else if href.starts_with('/') {
        Url::parse("https://localhost").ok()?.join(href).ok()?
    } else {
        Url::parse(href).ok()?
    };

    let slug = parsed.path().strip_prefix("/wiki/")?;
    if slug.is_empty() {
        None
    } else {
        Some(slug.to_owned())
    }
}

/// Human-readable title for a slug: percent-decoded, underscores as spaces.
pub fn slug_to_title(slug: &str) -> String {
    let decoded = urlencoding::decode(slug)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| slug.to_owned());
    decoded.replace('_', " ")
}
