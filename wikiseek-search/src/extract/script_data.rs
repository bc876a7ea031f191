//! Fallback extraction from JSON embedded in `<script>` blocks.
//!
//! Used when no markup pattern matches. A script body counts if it is a JSON
//! value on its own or assigns one (`NAME = {...};`). The first array under a
//! `search`, `results` or `pages` key whose items carry a string `title`
//! becomes the result list.

use scraper::{Html, Selector};
use serde_json::Value;

use crate::encode::{encode_component, slug_from_href};
use crate::error::SearchError;
use crate::types::{PageId, SearchResult};

use super::{clean_text, decode_entities};

const RESULT_KEYS: &[&str] = &["search", "results", "pages"];

/// Results from the first script block carrying a usable result array.
///
/// # Errors
///
/// Returns [`SearchError::Parse`] if the script selector fails to compile.
pub fn extract_script_results(html: &str) -> Result<Vec<SearchResult>, SearchError> {
    let document = Html::parse_document(html);
    let script_sel = Selector::parse("script")
        .map_err(|e| SearchError::Parse(format!("invalid script selector: {e:?}")))?;

    for script in document.select(&script_sel) {
        let text = script.text().collect::<String>();
        let Some(value) = json_payload(&text) else {
            continue;
        };
        let Some(items) = find_result_array(&value) else {
            continue;
        };
        let results: Vec<SearchResult> = items.iter().filter_map(item_to_result).collect();
        if !results.is_empty() {
            return Ok(results);
        }
    }
    Ok(Vec::new())
}

/// Parse a script body as JSON, or the right-hand side of an assignment.
fn json_payload(script: &str) -> Option<Value> {
    let trimmed = script.trim();
    let candidate = if trimmed.starts_with('{') || trimmed.starts_with('[') {
        trimmed
    } else {
        let (_, rhs) = trimmed.split_once('=')?;
        rhs.trim().trim_end_matches(';').trim_end()
    };
    if !(candidate.starts_with('{') || candidate.starts_with('[')) {
        return None;
    }
    serde_json::from_str(candidate).ok()
}

fn find_result_array(value: &Value) -> Option<&Vec<Value>> {
    match value {
        Value::Object(map) => {
            for key in RESULT_KEYS {
                if let Some(Value::Array(items)) = map.get(*key) {
                    if items.iter().any(has_title) {
                        return Some(items);
                    }
                }
            }
            map.values().find_map(find_result_array)
        }
        Value::Array(items) => items.iter().find_map(find_result_array),
        _ => None,
    }
}

fn has_title(item: &Value) -> bool {
    item.get("title").and_then(Value::as_str).is_some()
}

fn item_to_result(item: &Value) -> Option<SearchResult> {
    let title = clean_text(&decode_entities(item.get("title")?.as_str()?));
    if title.is_empty() {
        return None;
    }
    let page_id = item
        .get("pageid")
        .or_else(|| item.get("id"))
        .and_then(Value::as_u64)
        .map(PageId);
    let slug = item
        .get("url")
        .and_then(Value::as_str)
        .and_then(slug_from_href)
        .or_else(|| item.get("key").and_then(Value::as_str).map(encode_component));

    Some(SearchResult {
        title,
        page_id,
        slug,
        snippet: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_json_script_block() {
        let html = r#"<html><head>
<script type="application/json">{"query":{"search":[{"title":"Rust","pageid":42},{"title":"Ferris"}]}}</script>
</head><body></body></html>"#;
        let results = extract_script_results(html).expect("should parse");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Rust");
        assert_eq!(results[0].page_id, Some(PageId(42)));
        assert_eq!(results[1].title, "Ferris");
        assert!(results[1].page_id.is_none());
    }

    #[test]
    fn assignment_script_block() {
        let html = r#"<script>var SEARCH_DATA = {"results":[{"title":"Кот","url":"/wiki/Кот"}]};</script>"#;
        let results = extract_script_results(html).expect("should parse");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Кот");
        assert_eq!(results[0].slug.as_deref(), Some("%D0%9A%D0%BE%D1%82"));
    }

    #[test]
    fn key_field_becomes_slug() {
        let html = r#"<script>{"pages":[{"id":7,"key":"Rust_(language)","title":"Rust (language)"}]}</script>"#;
        let results = extract_script_results(html).expect("should parse");
        assert_eq!(results[0].page_id, Some(PageId(7)));
        assert_eq!(results[0].slug.as_deref(), Some("Rust_%28language%29"));
    }

    #[test]
    fn skips_scripts_without_result_arrays() {
        let html = r#"
<script>console.log("hello");</script>
<script>RLCONF = {"wgPageName":"Special:Search","wgTitle":"Search"};</script>
<script>{"search":[{"title":"Found"}]}</script>"#;
        let results = extract_script_results(html).expect("should parse");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Found");
    }

    #[test]
    fn titles_decoded_with_partial_decoder() {
        let html = r#"<script>{"search":[{"title":"Tom &amp; Jerry &eacute;"}]}</script>"#;
        let results = extract_script_results(html).expect("should parse");
        assert_eq!(results[0].title, "Tom & Jerry &eacute;");
    }

    #[test]
    fn no_scripts_returns_empty() {
        let results = extract_script_results("<html><body></body></html>").expect("should parse");
        assert!(results.is_empty());
    }

    #[test]
    fn malformed_json_ignored() {
        let results = extract_script_results(r#"<script>x = {"search": [</script>"#).expect("should parse");
        assert!(results.is_empty());
    }
}
