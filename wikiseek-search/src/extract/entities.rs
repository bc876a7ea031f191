//! Partial HTML entity decoding for extracted titles and snippets.
//!
//! Only the entities in [`ENTITIES`] are decoded. Everything else, named or
//! numeric, passes through untouched.

/// Entities replaced by [`decode_entities`], with their replacements.
pub const ENTITIES: &[(&str, &str)] = &[
    ("&quot;", "\""),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&nbsp;", " "),
    ("&#91;", "["),
    ("&#93;", "]"),
];

/// Decode the entities listed in [`ENTITIES`] in one left-to-right pass.
///
/// Replacement text is never re-scanned, so `&amp;lt;` becomes `&lt;`.
pub fn decode_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match ENTITIES.iter().find(|(entity, _)| tail.starts_with(entity)) {
            Some((entity, replacement)) => {
                out.push_str(replacement);
                rest = &tail[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
