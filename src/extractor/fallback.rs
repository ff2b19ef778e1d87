//! Fallback text extraction.
//!
//! The text sources are plain `fn(&str) -> String` strategies tried in a fixed
//! order: rendered inner text, raw text, then static regex tag stripping. The
//! first non-empty result wins. The individual extractors never fall back on
//! their own; the chain is driven from here by the calling layer.

use regex::Captures;
use serde::{Deserialize, Serialize};

use crate::extractor::{linear, raw};
use crate::patterns::{
    ANY_TAG, BLOCK_CLOSE_TAG, HTML_COMMENT, INLINE_SPACE_RUN, LINE_BREAK_TAG, NOSCRIPT_BLOCK,
    NUMERIC_ENTITY, SCRIPT_BLOCK, STYLE_BLOCK,
};

/// Which strategy produced the text handed to the segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSource {
    /// Rendered inner text.
    Linear,
    /// Raw text content.
    Raw,
    /// Regex tag stripping over the markup.
    TagStripped,
    /// Every strategy came back empty.
    None,
}

/// A text extraction strategy.
pub type TextStrategy = fn(&str) -> String;

/// The fallback chain, in priority order.
pub static TEXT_STRATEGIES: [(TextSource, TextStrategy); 3] = [
    (TextSource::Linear, linear::extract_linear_text as TextStrategy),
    (TextSource::Raw, raw::extract_raw_text as TextStrategy),
    (TextSource::TagStripped, strip_tags_text as TextStrategy),
];

/// Run the full fallback chain.
#[must_use]
pub fn extract_with_fallback(html: &str) -> (TextSource, String) {
    first_non_empty(html, &TEXT_STRATEGIES)
}

/// Try `strategies` in order and return the first non-blank text, or
/// `(TextSource::None, "")`.
#[must_use]
pub fn first_non_empty(
    html: &str,
    strategies: &[(TextSource, TextStrategy)],
) -> (TextSource, String) {
    for (source, strategy) in strategies {
        let text = strategy(html);
        if !text.trim().is_empty() {
            return (*source, text);
        }
    }
    (TextSource::None, String::new())
}

/// Static text extraction without a DOM: drop non-rendering elements and
/// comments, turn `br`/`hr` and closing block tags into line breaks, strip
/// every other tag, decode entities, and collapse spaces per line.
#[must_use]
pub fn strip_tags_text(html: &str) -> String {
    let text = SCRIPT_BLOCK.replace_all(html, "");
    let text = STYLE_BLOCK.replace_all(&text, "");
    let text = NOSCRIPT_BLOCK.replace_all(&text, "");
    let text = HTML_COMMENT.replace_all(&text, "");
    let text = LINE_BREAK_TAG.replace_all(&text, "\n");
    let text = BLOCK_CLOSE_TAG.replace_all(&text, "\n");
    let text = ANY_TAG.replace_all(&text, "");
    let text = decode_entities(&text);

    text.lines()
        .map(|line| INLINE_SPACE_RUN.replace_all(line, " ").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decode numeric references and the handful of named entities that show up
/// in search result markup. `&amp;` goes last so `&amp;lt;` stays `&lt;`.
fn decode_entities(text: &str) -> String {
    let text = NUMERIC_ENTITY.replace_all(text, |caps: &Captures| {
        let code = caps
            .get(1)
            .and_then(|hex| u32::from_str_radix(hex.as_str(), 16).ok())
            .or_else(|| caps.get(2).and_then(|dec| dec.as_str().parse::<u32>().ok()));
        code.and_then(char::from_u32).map(String::from).unwrap_or_default()
    });

    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&middot;", "·")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty(_: &str) -> String {
        String::new()
    }

    fn blank(_: &str) -> String {
        " \n ".to_string()
    }

    fn fixed(_: &str) -> String {
        "found".to_string()
    }

    #[test]
    fn strip_tags_keeps_lines_and_drops_code() {
        let html = "<html><head><style>.a{}</style><script>var x = '<p>';</script></head>\
                    <body><div>Acme <b>쇼핑</b></div><p>first<br/>second</p><!-- hidden --></body></html>";
        assert_eq!(strip_tags_text(html), "Acme 쇼핑\nfirst\nsecond");
    }

    #[test]
    fn strip_tags_decodes_entities() {
        let html = "<p>A&amp;B&nbsp;&lt;C&gt; &#54620;&#xAE00; &amp;lt;</p>";
        assert_eq!(strip_tags_text(html), "A&B <C> 한글 &lt;");
    }

    #[test]
    fn first_non_blank_strategy_wins() {
        let strategies: [(TextSource, TextStrategy); 3] = [
            (TextSource::Linear, empty as TextStrategy),
            (TextSource::Raw, blank as TextStrategy),
            (TextSource::TagStripped, fixed as TextStrategy),
        ];
        let (source, text) = first_non_empty("<p>x</p>", &strategies);
        assert_eq!(source, TextSource::TagStripped);
        assert_eq!(text, "found");
    }

    #[test]
    fn all_empty_reports_none() {
        let strategies: [(TextSource, TextStrategy); 2] =
            [(TextSource::Linear, empty as TextStrategy), (TextSource::Raw, blank as TextStrategy)];
        assert_eq!(first_non_empty("", &strategies), (TextSource::None, String::new()));
    }

    #[test]
    fn chain_prefers_rendered_text() {
        let (source, text) = extract_with_fallback("<div><span>a</span><span>b</span></div>");
        assert_eq!(source, TextSource::Linear);
        assert_eq!(text, "a\nb");
    }

    #[test]
    fn chain_reaches_tag_stripping_for_head_only_documents() {
        let html = "<html><head><title>Only title</title></head><body></body></html>";
        let (source, text) = extract_with_fallback(html);
        assert_eq!(source, TextSource::TagStripped);
        assert_eq!(text, "Only title");
    }
}
