//! Plain-text extraction from HTML pages
//!
//! The support pages are matched against the version pattern as rendered
//! text, so tags and entities have to go first. These helpers are naive on
//! purpose: enough for pattern matching, not a DOM.

/// Remove all HTML tags `<...>`, decode the common entities, and collapse
/// whitespace runs into single spaces.
pub fn rendered_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => {
                in_tag = true;
                // Tag boundaries separate words in the rendered page
                out.push(' ');
            }
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&decode_entities(&out))
}

/// Minimal entity decoding: the handful that show up around version strings.
fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

/// Collapse whitespace sequences into single spaces and trim.
fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
