//! Raw text variant.
//!
//! Text nodes are copied verbatim. The only layout applied is a line break for
//! `br`/`hr` and after block elements, plus newline and no-break-space
//! normalisation. Used for raw export and as the second text source in the
//! fallback chain.

use crate::dom::{self, Document, NodeRef};
use crate::extractor::tags;

/// Extract the raw text of an HTML document. Never fails.
#[must_use]
pub fn extract_raw_text(html: &str) -> String {
    raw_text_of(&dom::parse_rendered(html))
}

pub(crate) fn raw_text_of(doc: &Document) -> String {
    let mut out = String::new();
    walk(&dom::render_root(doc), &mut out);
    normalize(&out)
}

fn walk(node: &NodeRef, out: &mut String) {
    if node.is_text() {
        out.push_str(&node.text());
        return;
    }

    let tag = dom::tag_name(node);
    if tag.as_deref().is_some_and(tags::is_line_break_tag) {
        out.push('\n');
        return;
    }
    for child in node.children() {
        walk(&child, out);
    }
    if tag.as_deref().is_some_and(tags::is_block_tag) && !out.ends_with('\n') {
        out.push('\n');
    }
}

fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\u{a0}', " ")
        .trim()
        .to_string()
}
