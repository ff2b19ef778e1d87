//! DOM adapter over the `dom_query` crate.
//!
//! Node-level helpers shared by the inner-text walk and the thumbnail lookup.
//! Missing attributes and missing nodes come back as `None` or empty values,
//! never as errors.

pub use dom_query::{Document, NodeId, NodeRef, Selection};

use crate::extractor::tags;

/// Parse an HTML string into a document. Never fails; html5ever repairs
/// malformed markup.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Parse HTML and excise every non-rendering subtree (`script`, `style`,
/// `noscript`) before any text is read.
#[must_use]
pub fn parse_rendered(html: &str) -> Document {
    let doc = parse(html);
    doc.select(tags::NON_RENDERING_SELECTOR).remove();
    doc
}

/// The node text is read from: `body`, or the document root when the parse
/// produced no body.
#[must_use]
pub fn render_root(doc: &Document) -> NodeRef<'_> {
    doc.select("body")
        .nodes()
        .first()
        .cloned()
        .unwrap_or_else(|| doc.root())
}

/// Lowercased tag name, `None` for text and other non-element nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|name| name.to_ascii_lowercase())
}

/// Attribute value, trimmed; `None` when absent or blank.
#[must_use]
pub fn attribute(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Whether an element can serve as a grouping key: it carries an `id` or
/// any `data-*` attribute.
#[must_use]
pub fn has_identity(node: &NodeRef) -> bool {
    node.is_element()
        && node.attrs().iter().any(|attr| {
            let name: &str = &attr.name.local;
            name == "id" || name.starts_with("data-")
        })
}

/// Parent chain of a node, nearest first.
pub fn ancestors<'a>(node: &NodeRef<'a>) -> impl Iterator<Item = NodeRef<'a>> {
    std::iter::successors(node.parent(), NodeRef::parent)
}

/// Text node holding only whitespace.
#[must_use]
pub fn is_blank_text(node: &NodeRef) -> bool {
    node.is_text() && node.text().trim().is_empty()
}
