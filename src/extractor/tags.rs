//! Tag catalogs for the inner-text walk.
//!
//! Arrays for iteration and `HashSet`s for O(1) lookup.

use std::collections::HashSet;
use std::sync::LazyLock;

// === Tag Lists (arrays for iteration) ===

/// Elements rendered as blocks by the browser's default stylesheet.
pub static BLOCK_TAGS: [&str; 41] = [
    "address", "article", "aside", "blockquote", "body", "caption", "center", "dd", "details",
    "dialog", "dir", "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form",
    "h1", "h2", "h3", "h4", "h5", "h6", "header", "hgroup", "li", "main", "menu", "nav", "ol",
    "p", "pre", "section", "summary", "table", "td", "th", "tr", "ul",
];

/// Table row groups, also block boundaries.
pub static TABLE_GROUP_TAGS: [&str; 3] = ["thead", "tbody", "tfoot"];

/// Elements that emit a single line break: br, hr
pub static LINE_BREAK_TAGS: [&str; 2] = ["br", "hr"];

/// Subtrees that never render: script, style, noscript
pub static NON_RENDERING_TAGS: [&str; 3] = ["script", "style", "noscript"];

/// `NON_RENDERING_TAGS` as one CSS selector list.
pub const NON_RENDERING_SELECTOR: &str = "script, style, noscript";

// === Tag Sets (HashSets for O(1) lookup) ===

/// `BLOCK_TAGS` and `TABLE_GROUP_TAGS` as a `HashSet`
pub static BLOCK_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    BLOCK_TAGS.into_iter().chain(TABLE_GROUP_TAGS).collect()
});

/// `LINE_BREAK_TAGS` as a `HashSet`
pub static LINE_BREAK_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| LINE_BREAK_TAGS.into_iter().collect());

// === Helpers ===

/// Check if tag starts a new rendered line.
#[inline]
#[must_use]
pub fn is_block_tag(tag: &str) -> bool {
    BLOCK_TAG_SET.contains(tag)
}

/// Check if tag is `br` or `hr`.
#[inline]
#[must_use]
pub fn is_line_break_tag(tag: &str) -> bool {
    LINE_BREAK_TAG_SET.contains(tag)
}
