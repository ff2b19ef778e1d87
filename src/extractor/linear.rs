//! Rendered inner-text linearisation.
//!
//! Walks the document the way a browser lays it out: inline content is
//! concatenated, block-level elements are wrapped in boundary markers, and
//! the marked string is then cleaned into lines by [`clean_linear_text`].

use std::borrow::Cow;

use crate::dom::{self, Document, NodeRef};
use crate::extractor::tags;
use crate::patterns::{
    BOUNDARY_RUN, DURATION_MARKER_FUSED, EXCESS_NEWLINES, INLINE_DOMAIN,
    WHITESPACE_RUN,
};

/// Block boundary marker. A private-use code point, stripped from source text
/// before it is emitted so it can only come from the walk.
pub(crate) const BOUNDARY: char = '\u{E000}';

/// Extract the rendered inner text of an HTML document.
///
/// `script`, `style` and `noscript` subtrees are removed first. The walk starts
/// at `body`, or at the document root if there is none. Never fails; an empty
/// or text-less document gives an empty string.
///
/// # Example
///
/// ```rust
/// use naver_ad_parser::extractor::linear::extract_linear_text;
///
/// let html = "<div><a>acme.co.kr</a><span>네이버페이</span></div><p>Buy <b>now</b></p>";
/// assert_eq!(extract_linear_text(html), "acme.co.kr\n네이버페이\nBuy now");
/// ```
#[must_use]
pub fn extract_linear_text(html: &str) -> String {
    linear_text_of(&dom::parse_rendered(html))
}

/// Inner text of a document already stripped by [`dom::parse_rendered`].
pub(crate) fn linear_text_of(doc: &Document) -> String {
    let root = dom::render_root(doc);

    let mut marked = String::new();
    walk(&root, false, &mut marked);
    clean_linear_text(&marked)
}

fn walk(node: &NodeRef, as_block: bool, out: &mut String) {
    if node.is_text() {
        push_text(&node.text(), out);
        return;
    }

    let Some(tag) = dom::tag_name(node) else {
        // document root, comments
        for child in node.children() {
            walk(&child, false, out);
        }
        return;
    };

    if tags::is_line_break_tag(&tag) {
        out.push('\n');
        return;
    }

    let is_block = as_block || tags::is_block_tag(&tag);
    let promote = tags::is_block_tag(&tag) && children_render_as_blocks(node);

    if is_block {
        out.push(BOUNDARY);
    }
    for child in node.children() {
        walk(&child, promote, out);
    }
    if is_block {
        out.push(BOUNDARY);
    }
}

/// Two or more element children and no text of its own: the children are
/// styled as blocks even if their tags are inline.
fn children_render_as_blocks(node: &NodeRef) -> bool {
    let mut elements = 0usize;
    for child in node.children() {
        if child.is_element() {
            elements += 1;
        } else if child.is_text() && !dom::is_blank_text(&child) {
            return false;
        }
    }
    elements >= 2
}

fn push_text(text: &str, out: &mut String) {
    let text: Cow<str> = if text.contains(BOUNDARY) {
        Cow::Owned(text.replace(BOUNDARY, ""))
    } else {
        Cow::Borrowed(text)
    };
    let collapsed = WHITESPACE_RUN.replace_all(&text, " ");
    if out.ends_with(' ') {
        out.push_str(collapsed.trim_start_matches(' '));
    } else {
        out.push_str(&collapsed);
    }
}

/// Turn boundary-marked text into clean lines.
///
/// Steps, in order: marker runs become one line break, every line is
/// trimmed, 3+ line breaks become 2, the ends are trimmed, a domain fused
/// into a line is split onto its own line, `광고집행기간` fused to its value
/// is split, and whitespace-only lines are removed.
///
/// Idempotent: cleaning already-clean text returns it unchanged.
#[must_use]
pub fn clean_linear_text(text: &str) -> String {
    let text = BOUNDARY_RUN.replace_all(text, "\n");
    let text = trim_lines(&text);
    let text = EXCESS_NEWLINES.replace_all(&text, "\n\n");
    let text = split_inline_domains(text.trim());
    let text = DURATION_MARKER_FUSED.replace_all(&text, "광고집행기간\n${1}");

    text.split('\n')
        .filter(|line| line.is_empty() || !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn trim_lines(text: &str) -> String {
    text.split('\n').map(str::trim).collect::<Vec<_>>().join("\n")
}

fn split_inline_domains(text: &str) -> String {
    text.split('\n')
        .map(split_line_at_domains)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Put every domain that starts the line or follows whitespace on a line of
/// its own. Text glued to the end of a domain moves to the next line.
fn split_line_at_domains(line: &str) -> Cow<'_, str> {
    if INLINE_DOMAIN
        .find(line)
        .is_some_and(|found| found.range() == (0..line.len()))
    {
        return Cow::Borrowed(line);
    }

    let mut pieces: Vec<&str> = Vec::new();
    let mut rest = 0usize;
    for found in INLINE_DOMAIN.find_iter(line) {
        let starts_token =
            found.start() == 0 || line[..found.start()].ends_with(char::is_whitespace);
        if !starts_token {
            continue;
        }
        let head = line[rest..found.start()].trim();
        if !head.is_empty() {
            pieces.push(head);
        }
        pieces.push(found.as_str());
        rest = found.end();
    }

    if pieces.is_empty() {
        return Cow::Borrowed(line);
    }
    let tail = line[rest..].trim();
    if !tail.is_empty() {
        pieces.push(tail);
    }
    Cow::Owned(pieces.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_elements_do_not_break_lines() {
        let html = "<p>Great <b>deals</b> <i>here</i></p>";
        assert_eq!(extract_linear_text(html), "Great deals here");
    }

    #[test]
    fn whitespace_runs_collapse_inside_text_nodes() {
        let html = "<p>one\n\t   two</p>";
        assert_eq!(extract_linear_text(html), "one two");
    }

    #[test]
    fn blocks_and_breaks_start_new_lines() {
        let html = "<div>a</div><div>b<br>c</div><div>d<hr>e</div>";
        assert_eq!(extract_linear_text(html), "a\nb\nc\nd\ne");
    }

    #[test]
    fn all_element_children_of_a_block_are_promoted() {
        let html = "<div><span>Acme</span><a>acme.co.kr</a></div>";
        assert_eq!(extract_linear_text(html), "Acme\nacme.co.kr");
    }

    #[test]
    fn text_beside_elements_blocks_promotion() {
        let html = "<div>Call <span>now</span><a>please</a></div>";
        assert_eq!(extract_linear_text(html), "Call nowplease");
    }

    #[test]
    fn whitespace_between_children_still_promotes() {
        let html = "<div>\n  <span>a</span>\n  <span>b</span>\n</div>";
        assert_eq!(extract_linear_text(html), "a\nb");
    }

    #[test]
    fn promotion_does_not_cascade_into_inline_grandchildren() {
        let html = "<div><a><b>Acme</b><i>몰</i></a><span>x</span></div>";
        assert_eq!(extract_linear_text(html), "Acme몰\nx");
    }

    #[test]
    fn non_rendering_subtrees_are_removed() {
        let html = "<body><script>alert(1)</script><style>p{}</style><noscript>NO</noscript><p>yes</p></body>";
        assert_eq!(extract_linear_text(html), "yes");
    }

    #[test]
    fn stray_marker_characters_in_source_are_dropped() {
        let html = "<p>a\u{E000}b</p>";
        assert_eq!(extract_linear_text(html), "ab");
    }

    #[test]
    fn fused_domain_is_split_before_and_after() {
        assert_eq!(
            clean_linear_text("Acme 쇼핑 acme.co.kr 네이버페이"),
            "Acme 쇼핑\nacme.co.kr\n네이버페이"
        );
    }

    #[test]
    fn domain_at_line_start_is_split_from_glued_text() {
        assert_eq!(clean_linear_text("acme.co.kr네이버페이"), "acme.co.kr\n네이버페이");
        assert_eq!(
            clean_linear_text("https://acme.co.kr/event 바로가기"),
            "https://acme.co.kr/event\n바로가기"
        );
        assert_eq!(clean_linear_text("acme.co.kr"), "acme.co.kr");
    }

    #[test]
    fn domain_glued_to_a_word_stays_in_place() {
        assert_eq!(clean_linear_text("mail:acme.co.kr"), "mail:acme.co.kr");
    }

    #[test]
    fn fused_duration_marker_is_split() {
        assert_eq!(clean_linear_text("광고집행기간3개월"), "광고집행기간\n3개월");
        assert_eq!(clean_linear_text("광고집행기간 6개월"), "광고집행기간 6개월");
    }

    #[test]
    fn blank_line_runs_collapse_to_one() {
        assert_eq!(clean_linear_text("\n\na\n\n\n\n  \nb\n\n"), "a\n\nb");
    }

    #[test]
    fn cleanup_is_idempotent() {
        let inputs = [
            "  Acme acme.co.kr 네이버페이\n\n\n\nBuy   Now  \n광고집행기간3개월\n",
            "\u{E000}a\u{E000} \u{E000}b\u{E000}\n\n\n\nc",
            "https://shop.example.com/x?y=1 more text here",
        ];
        for input in inputs {
            let once = clean_linear_text(input);
            assert_eq!(clean_linear_text(&once), once, "{input:?}");
        }
    }

    #[test]
    fn empty_document_gives_empty_text() {
        assert_eq!(extract_linear_text(""), "");
        assert_eq!(extract_linear_text("<html><body>   </body></html>"), "");
    }
}
