//! Compiled regex patterns for text cleanup and line classification.
//!
//! All patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Linear text cleanup
// =============================================================================

/// Whitespace run inside a text node (newlines, tabs and nbsp included).
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// A run of block boundary markers, possibly separated by collapsed spaces.
/// A single line break right before the run belongs to it, so a trailing
/// `<br>` in a block does not open a blank line.
pub static BOUNDARY_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\n[ \t]*)?\x{E000}(?:[ \t]*\x{E000})*").expect("BOUNDARY_RUN regex")
});

/// Three or more consecutive line breaks.
pub static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("EXCESS_NEWLINES regex"));

/// Domain or URL embedded in a longer line. The top-level label is lowercase
/// ASCII so that abbreviations such as `Dr.Kim` do not split.
pub static INLINE_DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:https?://)?(?:[\p{L}\p{N}](?:[\p{L}\p{N}-]*[\p{L}\p{N}])?\.)+[a-z]{2,}(?:/\S*)?",
    )
    .expect("INLINE_DOMAIN regex")
});

/// Campaign duration marker followed directly by content.
pub static DURATION_MARKER_FUSED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"광고집행기간(\S)").expect("DURATION_MARKER_FUSED regex"));

// =============================================================================
// Line classification
// =============================================================================

/// A whole line that is a domain, optionally with protocol and path. The
/// top-level label is ASCII letters or `한국`, so dotted ad copy such as
/// `정품.최저가` is not a domain.
pub static DOMAIN_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https?://)?(?:[\p{L}\p{N}](?:[\p{L}\p{N}-]*[\p{L}\p{N}])?\.)+(?:[a-zA-Z]{2,}|한국)(?:/\S*)?$",
    )
    .expect("DOMAIN_LINE regex")
});

/// Campaign duration value such as `3개월` or `12개월 이상`.
pub static DURATION_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\s*개월(?:\s*이상)?$").expect("DURATION_VALUE regex")
});

/// Visitor or blog review count, e.g. `방문자리뷰 1,234`.
pub static REVIEW_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:방문자|블로그)?\s*리뷰\s*[\d,]+").expect("REVIEW_COUNT regex")
});

/// Price in won, e.g. `290,000원` or `₩ 9,900`.
pub static PRICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d[\d,]*\s*원|₩\s*\d").expect("PRICE regex")
});

/// Bare page number from the pagination bar.
pub static PAGE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("PAGE_NUMBER regex"));

// =============================================================================
// Static tag stripping
// =============================================================================

/// `<script>` element with its body.
pub static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("SCRIPT_BLOCK regex")
});

/// `<style>` element with its body.
pub static STYLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").expect("STYLE_BLOCK regex")
});

/// `<noscript>` element with its body.
pub static NOSCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<noscript\b[^>]*>.*?</noscript\s*>").expect("NOSCRIPT_BLOCK regex")
});

/// HTML comment.
pub static HTML_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("HTML_COMMENT regex"));

/// `<br>` and `<hr>` in any spelling.
pub static LINE_BREAK_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(?:br|hr)\b[^>]*>").expect("LINE_BREAK_TAG regex"));

/// Closing tag of an element that ends a rendered line.
pub static BLOCK_CLOSE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)</(?:p|div|li|ul|ol|dl|dt|dd|tr|td|th|table|h[1-6]|section|article|header|footer|nav|aside|main|form|blockquote|pre)\s*>",
    )
    .expect("BLOCK_CLOSE_TAG regex")
});

/// Any remaining tag.
pub static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("ANY_TAG regex"));

/// Numeric character reference, decimal or hex.
pub static NUMERIC_ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&#(?:[xX]([0-9a-fA-F]+)|([0-9]+));").expect("NUMERIC_ENTITY regex")
});

/// Horizontal whitespace run (no line breaks).
pub static INLINE_SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\S\n]+").expect("INLINE_SPACE_RUN regex"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_line_accepts_plain_and_prefixed_domains() {
        for line in [
            "acme.co.kr",
            "www.beta-dental.com",
            "https://shop.example.com/event?id=1",
            "한글도메인.한국",
        ] {
            assert!(DOMAIN_LINE.is_match(line), "{line}");
        }
    }

    #[test]
    fn domain_line_rejects_sentences() {
        for line in [
            "Acme 쇼핑",
            "acme.co.kr 바로가기",
            "3.5",
            "광고집행기간",
            "정품.최저가",
            "v1.국내산",
        ] {
            assert!(!DOMAIN_LINE.is_match(line), "{line}");
        }
    }

    #[test]
    fn duration_value_forms() {
        assert!(DURATION_VALUE.is_match("3개월"));
        assert!(DURATION_VALUE.is_match("12개월 이상"));
        assert!(DURATION_VALUE.is_match("6 개월"));
        assert!(!DURATION_VALUE.is_match("3개월 무이자 할부"));
    }

    #[test]
    fn inline_domain_skips_abbreviations() {
        assert!(INLINE_DOMAIN.find("Dr.Kim 치과").is_none());
        let found = INLINE_DOMAIN.find("Acme acme.co.kr").map(|m| m.as_str());
        assert_eq!(found, Some("acme.co.kr"));
    }

    #[test]
    fn review_and_price_shapes() {
        assert!(REVIEW_COUNT.is_match("방문자리뷰 1,234"));
        assert!(REVIEW_COUNT.is_match("블로그리뷰 56"));
        assert!(PRICE.is_match("가격 290,000원~"));
        assert!(!PRICE.is_match("원데이 클래스"));
    }
}
